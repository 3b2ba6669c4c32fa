use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Orchestration platform for the voice agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Livekit,
    Pipecat,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Livekit => write!(f, "LiveKit"),
            Platform::Pipecat => write!(f, "Pipecat"),
        }
    }
}

/// Where the agent workers run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Hosting {
    Cloud,
    SelfHosted,
}

/// Shape of the inference pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pipeline {
    /// Discrete STT -> LLM -> TTS stages.
    #[serde(rename = "stt-llm-tts")]
    Cascaded,
    /// One unified realtime model serving the whole pipeline.
    #[serde(rename = "speech-to-speech")]
    SpeechToSpeech,
}

/// Media carried on the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CallMode {
    AudioOnly,
    AudioVideo,
}

impl std::fmt::Display for CallMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallMode::AudioOnly => write!(f, "audio-only"),
            CallMode::AudioVideo => write!(f, "audio-video"),
        }
    }
}

/// Whether and how sessions are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordingMode {
    None,
    AudioOnly,
    AudioVideo,
}

impl std::fmt::Display for RecordingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordingMode::None => write!(f, "none"),
            RecordingMode::AudioOnly => write!(f, "audio-only"),
            RecordingMode::AudioVideo => write!(f, "audio-video"),
        }
    }
}

/// One candidate deployment configuration to be priced.
///
/// The engine only reads a `StackConfig`; ids are supplied by the caller.
/// Both the cascaded model selections and the speech-to-speech model are
/// stored so a UI can switch pipelines without losing choices, but only the
/// set named by `pipeline` is ever priced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackConfig {
    pub id: String,
    pub label: String,
    pub platform: Platform,
    pub hosting: Hosting,
    pub pipeline: Pipeline,
    pub stt_model: String,
    pub llm_model: String,
    pub tts_model: String,
    pub speech_to_speech_model: String,
    pub call_mode: CallMode,
    pub recording_mode: RecordingMode,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

/// Top-level cost category of a detail line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Category {
    Platform,
    Transport,
    #[serde(rename = "Noise Cancellation")]
    NoiseCancellation,
    #[serde(rename = "STT")]
    Stt,
    #[serde(rename = "LLM")]
    Llm,
    #[serde(rename = "TTS")]
    Tts,
    Recording,
    #[serde(rename = "S2S Model")]
    S2sModel,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Platform => write!(f, "Platform"),
            Category::Transport => write!(f, "Transport"),
            Category::NoiseCancellation => write!(f, "Noise Cancellation"),
            Category::Stt => write!(f, "STT"),
            Category::Llm => write!(f, "LLM"),
            Category::Tts => write!(f, "TTS"),
            Category::Recording => write!(f, "Recording"),
            Category::S2sModel => write!(f, "S2S Model"),
        }
    }
}

/// One priced line item: what was billed, how it was computed, how much.
#[derive(Debug, Clone, Serialize)]
pub struct CostDetail {
    pub category: Category,
    pub label: String,
    pub formula: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// Non-fatal condition hit while pricing a stack.
///
/// A missing rate or an exhausted tier ladder still yields a breakdown
/// (the affected category contributes zero), but the condition is recorded
/// here so a true zero charge stays distinguishable from missing data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// No rate-table entry for the requested model id.
    MissingRate { category: Category, model: String },
    /// No subscription tier can cover the required usage.
    NoFeasibleTier { provider: String, units_needed: f64 },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::MissingRate { category, model } => {
                write!(f, "no {} rate entry for '{}', priced at $0", category, model)
            }
            Warning::NoFeasibleTier { provider, units_needed } => {
                write!(
                    f,
                    "no {} tier can cover {:.0} units, priced at $0",
                    provider, units_needed
                )
            }
        }
    }
}

/// Output aggregate of one `compute` call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub platform: f64,
    pub transport: f64,
    pub noise_cancellation: f64,
    pub stt: f64,
    pub llm: f64,
    pub tts: f64,
    pub recording: f64,
    pub total: f64,
    pub details: Vec<CostDetail>,
    /// Category name -> winning plan/tier chosen by an optimizer.
    pub best_plans: BTreeMap<String, String>,
    pub warnings: Vec<Warning>,
    pub supported: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsupported_reason: Option<String>,
}

impl CostBreakdown {
    /// Breakdown for a structurally disallowed configuration: zero cost,
    /// no detail lines, a human-readable reason.
    pub fn unsupported(reason: impl Into<String>) -> Self {
        Self {
            platform: 0.0,
            transport: 0.0,
            noise_cancellation: 0.0,
            stt: 0.0,
            llm: 0.0,
            tts: 0.0,
            recording: 0.0,
            total: 0.0,
            details: Vec::new(),
            best_plans: BTreeMap::new(),
            warnings: Vec::new(),
            supported: false,
            unsupported_reason: Some(reason.into()),
        }
    }
}

/// One sample of the cost-vs-volume curve.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CostPoint {
    pub minutes: u64,
    pub cost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_config_serde_round_trip() {
        let json = r#"{
            "id": "stack-1",
            "label": "Pipecat Cloud",
            "platform": "pipecat",
            "hosting": "cloud",
            "pipeline": "stt-llm-tts",
            "sttModel": "deepgram-nova-3",
            "llmModel": "gpt-5.2",
            "ttsModel": "cartesia-sonic-3",
            "speechToSpeechModel": "openai-realtime",
            "callMode": "audio-only",
            "recordingMode": "none"
        }"#;
        let stack: StackConfig = serde_json::from_str(json).unwrap();
        assert_eq!(stack.platform, Platform::Pipecat);
        assert_eq!(stack.hosting, Hosting::Cloud);
        assert_eq!(stack.pipeline, Pipeline::Cascaded);
        assert_eq!(stack.recording_mode, RecordingMode::None);
        assert!(stack.visible);

        let back = serde_json::to_value(&stack).unwrap();
        assert_eq!(back["hosting"], "cloud");
        assert_eq!(back["pipeline"], "stt-llm-tts");
        assert_eq!(back["callMode"], "audio-only");
    }

    #[test]
    fn test_hosting_kebab_case() {
        let h: Hosting = serde_json::from_str("\"self-hosted\"").unwrap();
        assert_eq!(h, Hosting::SelfHosted);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::NoiseCancellation.to_string(), "Noise Cancellation");
        assert_eq!(Category::Stt.to_string(), "STT");
        assert_eq!(Category::S2sModel.to_string(), "S2S Model");
    }

    #[test]
    fn test_unsupported_breakdown_is_zero() {
        let b = CostBreakdown::unsupported("not offered");
        assert!(!b.supported);
        assert_eq!(b.total, 0.0);
        assert!(b.details.is_empty());
        assert_eq!(b.unsupported_reason.as_deref(), Some("not offered"));
    }
}
