//! Structural compatibility checks, run before any pricing math.
//!
//! A blocked combination yields an unsupported breakdown with a reason,
//! never a panic or an error. Informational (non-blocking) notes live in
//! `pricing::meta::RESTRICTIONS`.

use crate::types::{CallMode, Pipeline, RecordingMode, StackConfig};

/// Returns the block reason if the configuration is structurally
/// disallowed, `None` if it can be priced.
pub fn check_support(stack: &StackConfig) -> Option<String> {
    if stack.pipeline == Pipeline::SpeechToSpeech && stack.call_mode == CallMode::AudioVideo {
        return Some(
            "Speech-to-speech realtime models are audio-only; video calls require the cascaded pipeline."
                .to_string(),
        );
    }

    if stack.recording_mode == RecordingMode::AudioVideo && stack.call_mode == CallMode::AudioOnly {
        return Some("Cannot record video on an audio-only call.".to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_stacks;
    use crate::types::{CallMode, Pipeline, RecordingMode};

    #[test]
    fn test_defaults_are_supported() {
        for stack in default_stacks() {
            assert!(check_support(&stack).is_none(), "{}", stack.label);
        }
    }

    #[test]
    fn test_s2s_blocked_on_video_calls() {
        let mut stack = default_stacks().remove(0);
        stack.pipeline = Pipeline::SpeechToSpeech;
        stack.call_mode = CallMode::AudioVideo;
        assert!(check_support(&stack).is_some());

        stack.call_mode = CallMode::AudioOnly;
        stack.recording_mode = RecordingMode::None;
        assert!(check_support(&stack).is_none());
    }

    #[test]
    fn test_video_recording_needs_video_call() {
        let mut stack = default_stacks().remove(0);
        stack.call_mode = CallMode::AudioOnly;
        stack.recording_mode = RecordingMode::AudioVideo;
        assert!(check_support(&stack).is_some());

        stack.recording_mode = RecordingMode::AudioOnly;
        assert!(check_support(&stack).is_none());
    }
}
