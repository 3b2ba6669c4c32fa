//! Plan and tier definitions: whole-platform plans, provider subscription
//! ladders, commitment plans, and the Daily volume-discount bands.

/// A whole-account LiveKit Cloud plan: fixed fee plus independently metered
/// allotments across six dimensions and a bundled inference-credit amount.
///
/// The dev-only Build plan (1 deployment, 5 concurrent sessions) and the
/// custom-priced Enterprise plan are excluded from the candidate set.
#[derive(Debug, Clone, Copy)]
pub struct PlatformPlan {
    pub name: &'static str,
    pub monthly_fee: f64,
    // Agent sessions
    pub included_agent_minutes: f64,
    pub agent_minute_rate: f64,
    // WebRTC participant minutes (1:1 voice = same as agent minutes)
    pub included_webrtc_minutes: f64,
    pub webrtc_overage_rate: f64,
    // Agent observability (session recordings)
    pub included_observability_minutes: f64,
    pub observability_overage_rate: f64,
    // Recording & export (transcode minutes, shared with stream import)
    pub included_transcode_minutes: f64,
    pub transcode_audio_rate: f64,
    pub transcode_video_rate: f64,
    // Downstream data transfer
    pub included_data_transfer_gb: f64,
    pub data_transfer_overage_per_gb: f64,
    // Inference
    pub included_inference_credits: f64,
    /// Whether inference is billed at the discounted rate column.
    pub discounted_inference: bool,
}

pub const LIVEKIT_PLANS: &[PlatformPlan] = &[
    PlatformPlan {
        name: "Ship",
        monthly_fee: 50.0,
        included_agent_minutes: 5_000.0,
        agent_minute_rate: 0.01,
        included_webrtc_minutes: 150_000.0,
        webrtc_overage_rate: 0.0005,
        included_observability_minutes: 5_000.0,
        observability_overage_rate: 0.005,
        included_transcode_minutes: 600.0,
        transcode_audio_rate: 0.005,
        transcode_video_rate: 0.02,
        included_data_transfer_gb: 250.0,
        data_transfer_overage_per_gb: 0.12,
        included_inference_credits: 5.0,
        discounted_inference: false,
    },
    PlatformPlan {
        name: "Scale",
        monthly_fee: 500.0,
        included_agent_minutes: 50_000.0,
        agent_minute_rate: 0.01,
        included_webrtc_minutes: 1_500_000.0,
        webrtc_overage_rate: 0.0004,
        included_observability_minutes: 50_000.0,
        observability_overage_rate: 0.005,
        included_transcode_minutes: 8_000.0,
        transcode_audio_rate: 0.004,
        transcode_video_rate: 0.015,
        included_data_transfer_gb: 3_000.0, // 3TB
        data_transfer_overage_per_gb: 0.10,
        included_inference_credits: 50.0,
        discounted_inference: true,
    },
];

/// One subscription tier: fixed fee, included units, optional overage.
/// An overage rate of zero means the tier cannot exceed its allotment and
/// is infeasible for any usage above it.
#[derive(Debug, Clone, Copy)]
pub struct ProviderTier {
    pub name: &'static str,
    pub monthly_fee: f64,
    pub included_units: f64,
    pub overage_rate: f64,
}

/// Cartesia: one credit pool shared between Sonic TTS (1 credit/char) and
/// Ink Whisper STT (1 credit/sec). Yearly-billing prices.
pub const CARTESIA_TIERS: &[ProviderTier] = &[
    ProviderTier { name: "Free",    monthly_fee: 0.0,   included_units: 20_000.0,    overage_rate: 0.0 },
    ProviderTier { name: "Pro",     monthly_fee: 4.0,   included_units: 100_000.0,   overage_rate: 0.0 },
    ProviderTier { name: "Startup", monthly_fee: 39.0,  included_units: 1_250_000.0, overage_rate: 0.0 },
    ProviderTier { name: "Scale",   monthly_fee: 239.0, included_units: 8_000_000.0, overage_rate: 0.00002988 },
];

/// ElevenLabs Turbo v2.5 (Flash/Turbo: 0.5 credits per character).
/// Included units are expressed in characters (plan credits / 0.5).
pub const ELEVENLABS_TURBO_TIERS: &[ProviderTier] = &[
    ProviderTier { name: "Free",     monthly_fee: 0.0,     included_units: 20_000.0,     overage_rate: 0.0 },
    ProviderTier { name: "Starter",  monthly_fee: 5.0,     included_units: 60_000.0,     overage_rate: 0.0 },
    ProviderTier { name: "Creator",  monthly_fee: 22.0,    included_units: 200_000.0,    overage_rate: 0.00015 },
    ProviderTier { name: "Pro",      monthly_fee: 99.0,    included_units: 1_000_000.0,  overage_rate: 0.00012 },
    ProviderTier { name: "Scale",    monthly_fee: 330.0,   included_units: 4_000_000.0,  overage_rate: 0.00009 },
    ProviderTier { name: "Business", monthly_fee: 1_320.0, included_units: 22_000_000.0, overage_rate: 0.00006 },
];

/// A Deepgram STT plan: per-minute rates gated by an annual spend floor.
#[derive(Debug, Clone)]
pub struct DeepgramSttPlan {
    pub name: &'static str,
    pub min_annual_commitment: f64,
    pub rates: &'static [(&'static str, f64)],
}

impl DeepgramSttPlan {
    pub fn rate_for(&self, model: &str) -> Option<f64> {
        self.rates.iter().find(|(m, _)| *m == model).map(|(_, r)| *r)
    }
}

/// Pay As You Go has no minimum; Growth discounts per-minute rates but
/// carries a $4K/year commitment (~$333.33/month floor).
pub const DEEPGRAM_STT_PLANS: &[DeepgramSttPlan] = &[
    DeepgramSttPlan {
        name: "Pay As You Go",
        min_annual_commitment: 0.0,
        rates: &[
            ("deepgram-nova-3",              0.0077),
            ("deepgram-nova-3-multilingual", 0.0092),
        ],
    },
    DeepgramSttPlan {
        name: "Growth",
        min_annual_commitment: 4_000.0,
        rates: &[
            ("deepgram-nova-3",              0.0065),
            ("deepgram-nova-3-multilingual", 0.0078),
        ],
    },
];

/// One Daily WebRTC volume-discount band. Usage is integrated across the
/// bands: each minute is billed at its own band's rate.
#[derive(Debug, Clone, Copy)]
pub struct DailyBand {
    pub up_to: f64,
    pub video_audio: f64,
    pub audio_only: f64,
}

pub const DAILY_TRANSPORT_BANDS: &[DailyBand] = &[
    DailyBand { up_to: 10_000.0,       video_audio: 0.0,    audio_only: 0.0 }, // free
    DailyBand { up_to: 100_000.0,      video_audio: 0.0040, audio_only: 0.00099 },
    DailyBand { up_to: 500_000.0,      video_audio: 0.0037, audio_only: 0.00092 },
    DailyBand { up_to: 1_000_000.0,    video_audio: 0.0034, audio_only: 0.00085 },
    DailyBand { up_to: 10_000_000.0,   video_audio: 0.0030, audio_only: 0.00074 },
    DailyBand { up_to: 25_000_000.0,   video_audio: 0.0026, audio_only: 0.00064 },
    DailyBand { up_to: 50_000_000.0,   video_audio: 0.0022, audio_only: 0.00054 },
    DailyBand { up_to: f64::INFINITY,  video_audio: 0.0015, audio_only: 0.00036 },
];
