//! Static pricing snapshot — per-unit rates and duty-cycle assumptions.
//!
//! All figures are a point-in-time snapshot of public pricing pages
//! (see `meta` for sources and verification dates). Updating a rate means
//! shipping a new build; there is no runtime mutation path.

pub mod meta;
pub mod plans;

/// Minutes in a 30-day month of continuous operation.
pub const MINUTES_PER_MONTH: f64 = 43_200.0;

/// Usage-intensity assumptions converting session minutes into billed units.
#[derive(Debug, Clone, Copy)]
pub struct UsageAssumptions {
    /// Fraction of session time the user is speaking.
    pub stt_duty_ratio: f64,
    /// Fraction of session time the agent is speaking (~10% is silence).
    pub tts_duty_ratio: f64,
    /// Characters synthesized per minute of active TTS (~150 wpm x 6 chars).
    pub avg_chars_per_minute_tts: f64,
    /// LLM input tokens per session minute (conversation context growing).
    pub avg_input_tokens_per_minute: f64,
    /// LLM output tokens per session minute.
    pub avg_output_tokens_per_minute: f64,
    /// Fraction of input tokens served from cache.
    pub cache_hit_rate: f64,
    /// Opus voice downstream to the participant, MB per minute.
    pub avg_downstream_mb_per_minute: f64,
    /// Typical voice-agent session length in minutes.
    pub avg_session_minutes: f64,
    /// Peak concurrency relative to average concurrency.
    pub peak_to_avg_ratio: f64,
}

pub const ASSUMPTIONS: UsageAssumptions = UsageAssumptions {
    stt_duty_ratio: 0.66,
    tts_duty_ratio: 0.24,
    avg_chars_per_minute_tts: 900.0,
    avg_input_tokens_per_minute: 800.0,
    avg_output_tokens_per_minute: 400.0,
    cache_hit_rate: 0.3,
    avg_downstream_mb_per_minute: 0.24,
    avg_session_minutes: 10.0,
    peak_to_avg_ratio: 2.0,
};

// ====== LiveKit inference rate card ======
// Rates differ between the Build/Ship plans and the discounted Scale plan.

/// STT through LiveKit inference, USD per audio minute.
#[derive(Debug, Clone, Copy)]
pub struct LivekitSttRate {
    pub model: &'static str,
    pub build_ship: f64,
    pub scale: f64,
}

pub const LIVEKIT_STT: &[LivekitSttRate] = &[
    LivekitSttRate { model: "assemblyai-universal-streaming",              build_ship: 0.0025, scale: 0.0025 },
    LivekitSttRate { model: "assemblyai-universal-streaming-multilingual", build_ship: 0.0025, scale: 0.0025 },
    LivekitSttRate { model: "cartesia-ink-whisper",                        build_ship: 0.0030, scale: 0.0023 },
    LivekitSttRate { model: "deepgram-nova-3",                             build_ship: 0.0077, scale: 0.0065 },
    LivekitSttRate { model: "deepgram-nova-3-multilingual",                build_ship: 0.0092, scale: 0.0078 },
    // BYOP, direct pricing
    LivekitSttRate { model: "soniox-realtime",                             build_ship: 0.0020, scale: 0.0020 },
];

/// TTS through LiveKit inference, USD per million characters.
#[derive(Debug, Clone, Copy)]
pub struct LivekitTtsRate {
    pub model: &'static str,
    pub build_ship: f64,
    pub scale: f64,
}

pub const LIVEKIT_TTS: &[LivekitTtsRate] = &[
    LivekitTtsRate { model: "cartesia-sonic-3",       build_ship: 50.0,  scale: 37.50 },
    LivekitTtsRate { model: "elevenlabs-turbo-v2.5",  build_ship: 150.0, scale: 60.0 },
];

/// LLM rates, USD per million tokens.
#[derive(Debug, Clone, Copy)]
pub struct LlmRate {
    pub model: &'static str,
    pub input: f64,
    pub cached_input: f64,
    pub output: f64,
}

pub const LIVEKIT_LLM: &[LlmRate] = &[
    LlmRate { model: "gpt-5.2",        input: 1.75, cached_input: 0.175, output: 14.00 },
    LlmRate { model: "gemini-3-pro",   input: 4.00, cached_input: 0.40,  output: 18.00 },
    LlmRate { model: "gemini-3-flash", input: 0.50, cached_input: 0.05,  output: 3.00 },
];

/// Speech-to-speech models, USD per session minute.
///
/// Per-minute figures are derived from provider token rates under the
/// 66/24 duty cycle plus a session-overhead multiplier; see `meta` for the
/// full derivation notes. LiveKit adds ~10% inference margin over direct.
#[derive(Debug, Clone, Copy)]
pub struct S2sRate {
    pub model: &'static str,
    pub per_minute: f64,
}

pub const LIVEKIT_S2S: &[S2sRate] = &[
    S2sRate { model: "openai-realtime", per_minute: 0.045 },
    S2sRate { model: "gemini-live",     per_minute: 0.012 },
];

pub const DIRECT_S2S: &[S2sRate] = &[
    S2sRate { model: "openai-realtime", per_minute: 0.036 },
    S2sRate { model: "gemini-live",     per_minute: 0.0095 },
];

// ====== Direct provider pricing (self-hosted / Pipecat BYOP) ======

/// Flat direct STT rates, USD per audio minute.
/// Deepgram is absent here: it goes through the commitment-plan optimizer
/// in `plans::DEEPGRAM_STT_PLANS` instead.
#[derive(Debug, Clone, Copy)]
pub struct FlatRate {
    pub model: &'static str,
    pub rate: f64,
}

pub const DIRECT_STT: &[FlatRate] = &[
    FlatRate { model: "assemblyai-universal-streaming",              rate: 0.0025 },
    FlatRate { model: "assemblyai-universal-streaming-multilingual", rate: 0.0025 },
    FlatRate { model: "cartesia-ink-whisper",                        rate: 0.0022 },
    FlatRate { model: "soniox-realtime",                             rate: 0.0020 },
];

/// Flat direct TTS rates, USD per million characters.
pub const DIRECT_TTS: &[FlatRate] = &[
    FlatRate { model: "cartesia-sonic-3",      rate: 30.0 },
    FlatRate { model: "elevenlabs-turbo-v2.5", rate: 60.0 },
];

/// Direct LLM rates (no cached-input discount on the direct path).
#[derive(Debug, Clone, Copy)]
pub struct DirectLlmRate {
    pub model: &'static str,
    pub input: f64,
    pub output: f64,
}

pub const DIRECT_LLM: &[DirectLlmRate] = &[
    DirectLlmRate { model: "gpt-5.2",        input: 1.75, output: 14.00 },
    DirectLlmRate { model: "gemini-3-pro",   input: 4.00, output: 18.00 },
    DirectLlmRate { model: "gemini-3-flash", input: 0.50, output: 3.00 },
];

// ====== Pipecat Cloud ======

/// Agent-1x compute profile on Pipecat Cloud.
#[derive(Debug, Clone, Copy)]
pub struct PipecatAgentProfile {
    pub active_per_min: f64,
    pub reserved_per_min: f64,
}

pub const PIPECAT_AGENT_1X: PipecatAgentProfile = PipecatAgentProfile {
    active_per_min: 0.01,
    reserved_per_min: 0.0005,
};

/// Cold-start window a reserved instance absorbs, seconds.
pub const IDLE_CREATION_DELAY_SEC: f64 = 30.0;

// ====== Krisp noise cancellation ======

#[derive(Debug, Clone, Copy)]
pub struct KrispViva {
    pub free_minutes: f64,
    pub per_minute_after_free: f64,
}

/// Krisp VIVA on Pipecat Cloud: first 10K active minutes/month free.
pub const KRISP_VIVA: KrispViva = KrispViva {
    free_minutes: 10_000.0,
    per_minute_after_free: 0.0015,
};

/// Krisp via the Daily add-on (self-hosted Pipecat over Daily WebRTC).
pub const DAILY_KRISP_ADDON_PER_MINUTE: f64 = 0.0002;

// ====== Recording & storage ======

/// Daily recording processing, USD per minute.
#[derive(Debug, Clone, Copy)]
pub struct RecordingRates {
    pub audio_only: f64,
    pub audio_video: f64,
}

pub const PIPECAT_RECORDING: RecordingRates = RecordingRates {
    audio_only: 0.005,
    audio_video: 0.01349,
};

/// Azure Blob Storage Hot LRS for recording artifacts.
#[derive(Debug, Clone, Copy)]
pub struct BlobStorage {
    pub per_gb_month: f64,
    /// ~64kbps Opus/AAC compressed audio.
    pub audio_mb_per_minute: f64,
    /// ~720p compressed video.
    pub video_mb_per_minute: f64,
}

pub const AZURE_BLOB_STORAGE: BlobStorage = BlobStorage {
    per_gb_month: 0.018,
    audio_mb_per_minute: 0.5,
    video_mb_per_minute: 5.0,
};

// ====== Azure self-hosting ======

/// AKS Standard sizing profile. One pod per bot for process isolation;
/// a D2s_v3 node (2 vCPU, 8GB) holds ~6 concurrent bot pods.
#[derive(Debug, Clone, Copy)]
pub struct AzureAks {
    pub control_plane: f64,
    pub node_monthly: f64,
    pub concurrent_agents_per_node: f64,
}

pub const AZURE_AKS: AzureAks = AzureAks {
    control_plane: 73.0,
    node_monthly: 70.0,
    concurrent_agents_per_node: 6.0,
};

// ====== Lookups ======

pub fn livekit_stt(model: &str) -> Option<&'static LivekitSttRate> {
    LIVEKIT_STT.iter().find(|r| r.model == model)
}

pub fn livekit_tts(model: &str) -> Option<&'static LivekitTtsRate> {
    LIVEKIT_TTS.iter().find(|r| r.model == model)
}

pub fn livekit_llm(model: &str) -> Option<&'static LlmRate> {
    LIVEKIT_LLM.iter().find(|r| r.model == model)
}

pub fn livekit_s2s(model: &str) -> Option<&'static S2sRate> {
    LIVEKIT_S2S.iter().find(|r| r.model == model)
}

pub fn direct_s2s(model: &str) -> Option<&'static S2sRate> {
    DIRECT_S2S.iter().find(|r| r.model == model)
}

pub fn direct_stt(model: &str) -> Option<f64> {
    DIRECT_STT.iter().find(|r| r.model == model).map(|r| r.rate)
}

pub fn direct_tts(model: &str) -> Option<f64> {
    DIRECT_TTS.iter().find(|r| r.model == model).map(|r| r.rate)
}

pub fn direct_llm(model: &str) -> Option<&'static DirectLlmRate> {
    DIRECT_LLM.iter().find(|r| r.model == model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_models() {
        let r = livekit_stt("deepgram-nova-3").unwrap();
        assert!((r.build_ship - 0.0077).abs() < f64::EPSILON);
        assert!((r.scale - 0.0065).abs() < f64::EPSILON);

        let t = livekit_tts("cartesia-sonic-3").unwrap();
        assert_eq!(t.scale, 37.50);

        let l = direct_llm("gemini-3-flash").unwrap();
        assert_eq!(l.output, 3.0);
    }

    #[test]
    fn test_lookup_unknown_model_is_none() {
        assert!(livekit_stt("whisper-large-v3").is_none());
        assert!(direct_tts("unknown-voice").is_none());
        assert!(direct_s2s("gpt-5.2").is_none());
    }

    #[test]
    fn test_all_rates_non_negative() {
        for r in LIVEKIT_STT {
            assert!(r.build_ship >= 0.0 && r.scale >= 0.0, "{}", r.model);
        }
        for r in LIVEKIT_TTS {
            assert!(r.build_ship >= 0.0 && r.scale >= 0.0, "{}", r.model);
        }
        for r in LIVEKIT_LLM {
            assert!(r.input >= 0.0 && r.cached_input >= 0.0 && r.output >= 0.0);
        }
        for r in DIRECT_STT.iter().chain(DIRECT_TTS) {
            assert!(r.rate >= 0.0, "{}", r.model);
        }
    }

    #[test]
    fn test_scale_rates_never_above_build_ship() {
        for r in LIVEKIT_STT {
            assert!(r.scale <= r.build_ship, "{}", r.model);
        }
        for r in LIVEKIT_TTS {
            assert!(r.scale <= r.build_ship, "{}", r.model);
        }
    }
}
