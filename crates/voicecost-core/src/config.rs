//! Stack-definition loading and the built-in comparison presets.

use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::types::{CallMode, Hosting, Pipeline, Platform, RecordingMode, StackConfig};

pub const DEFAULT_MONTHLY_MINUTES: u64 = 10_000;

fn preset(
    id: &str,
    label: &str,
    platform: Platform,
    hosting: Hosting,
) -> StackConfig {
    StackConfig {
        id: id.to_string(),
        label: label.to_string(),
        platform,
        hosting,
        pipeline: Pipeline::Cascaded,
        stt_model: "deepgram-nova-3".to_string(),
        llm_model: "gpt-5.2".to_string(),
        tts_model: "cartesia-sonic-3".to_string(),
        speech_to_speech_model: "openai-realtime".to_string(),
        call_mode: CallMode::AudioVideo,
        recording_mode: RecordingMode::AudioVideo,
        visible: true,
    }
}

/// The four built-in comparison stacks.
pub fn default_stacks() -> Vec<StackConfig> {
    vec![
        preset("stack-1", "Pipecat Cloud", Platform::Pipecat, Hosting::Cloud),
        preset("stack-2", "LiveKit Cloud", Platform::Livekit, Hosting::Cloud),
        preset("stack-3", "Pipecat Self-Host", Platform::Pipecat, Hosting::SelfHosted),
        preset("stack-4", "LiveKit Self-Host", Platform::Livekit, Hosting::SelfHosted),
    ]
}

/// Load stack definitions from a JSON file (an array of `StackConfig`).
pub fn load_stacks(path: &Path) -> Result<Vec<StackConfig>> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()).into());
    }
    let raw = std::fs::read_to_string(path)?;
    let stacks: Vec<StackConfig> =
        serde_json::from_str(&raw).map_err(ConfigError::Parse)?;
    if stacks.is_empty() {
        return Err(ConfigError::Invalid("stack file contains no stacks".to_string()).into());
    }
    Ok(stacks)
}
