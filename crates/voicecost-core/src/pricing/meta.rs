//! Provenance for the pricing snapshot: source URLs, verification dates,
//! and the assumptions baked into each provider's figures.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PricingMeta {
    pub provider: &'static str,
    pub source_urls: &'static [&'static str],
    pub last_verified_at: &'static str,
    pub assumptions: &'static [&'static str],
}

pub const PRICING_META: &[PricingMeta] = &[
    PricingMeta {
        provider: "livekit",
        source_urls: &["https://livekit.io/pricing", "https://livekit.io/pricing/inference"],
        last_verified_at: "2026-02-17",
        assumptions: &[
            "Ship plan: $50/mo, 5K agent min, 150K WebRTC min, 5K observability min, 600 transcode min, $5 inference credits",
            "Scale plan: $500/mo, 50K agent min, 1.5M WebRTC min, 50K observability min, 8K transcode min, $50 inference credits",
            "Build plan excluded (dev-only, 1 agent deployment, 5 concurrent sessions)",
            "Enterprise plan excluded (custom pricing)",
            "S2S rates estimated with ~10% inference margin over direct provider pricing",
        ],
    },
    PricingMeta {
        provider: "s2s",
        source_urls: &[
            "https://developers.openai.com/api/docs/models/gpt-realtime",
            "https://ai.google.dev/gemini-api/docs/pricing#gemini-2.5-flash-native-audio",
        ],
        last_verified_at: "2026-02-17",
        assumptions: &[
            "OpenAI gpt-realtime (GA): audio input 10 tok/sec @ $32/1M, output 20 tok/sec @ $64/1M, cached $0.40/1M",
            "Gemini 2.5 Flash Native Audio (Live API): audio ~25 tok/sec (est.), input $3/1M, output $12/1M",
            "66/24 duty cycle applied (user speaks 66%, agent speaks 24%, ~10% silence)",
            "Session overhead: 1.15x for OpenAI (cheap caching), 1.3x for Gemini",
        ],
    },
    PricingMeta {
        provider: "soniox",
        source_urls: &["https://soniox.com/pricing"],
        last_verified_at: "2026-02-21",
        assumptions: &[
            "Real-time streaming: input audio $2.00/1M tokens, output text $4.00/1M tokens",
            "1 hour audio ~ 60K input tokens + ~15K output tokens -> ~$0.12/hr ($0.002/min)",
            "No minimum commitment or subscription tiers for API usage",
        ],
    },
    PricingMeta {
        provider: "deepgram",
        source_urls: &["https://deepgram.com/pricing"],
        last_verified_at: "2026-02-18",
        assumptions: &[
            "Pay As You Go: Nova-3 mono $0.0077/min, multi $0.0092/min, no minimum",
            "Growth: Nova-3 mono $0.0065/min, multi $0.0078/min, $4K/yr minimum commitment ($333/mo)",
            "Optimizer auto-selects cheapest plan: PAYG below ~43K STT min/mo, Growth above",
            "Speaker Diarization add-on ($0.0020/min PAYG) not included, add separately if needed",
        ],
    },
    PricingMeta {
        provider: "pipecat",
        source_urls: &[
            "https://www.daily.co/pricing/pipecat-cloud/",
            "https://www.daily.co/pricing/webrtc-infrastructure/",
        ],
        last_verified_at: "2026-02-20",
        assumptions: &[
            "Agent-1x profile: $0.01/min active (on-demand), $0.0005/min reserved (24/7)",
            "Reserved instances run continuously (43,200 min/month); sessions within reserved capacity incur no additional active charge",
            "Sessions exceeding reserved capacity fall back to on-demand active pricing ($0.01/min)",
            "Capacity planning: Optimal Reserved = MAX(Baseline Sessions, CPS x Idle Creation Delay), Idle Creation Delay ~ 30s",
            "Daily WebRTC 1:1 voice free on Pipecat Cloud",
            "Daily volume discounts applied for standalone transport",
        ],
    },
    PricingMeta {
        provider: "azure",
        source_urls: &["https://azure.microsoft.com/en-us/pricing/"],
        last_verified_at: "2026-02-17",
        assumptions: &[
            "AKS Standard: $73/mo control plane + D2s_v3 nodes at ~$70/mo each",
            "One pod per bot for process isolation (~6 concurrent bots per D2s_v3 node)",
            "Average session: 10 minutes",
        ],
    },
];

/// Informational plan/platform constraints worth showing next to a quote.
/// These never block a computation; structural blocks live in `compat`.
#[derive(Debug, Clone, Serialize)]
pub struct RestrictionNote {
    pub platform: &'static str,
    pub plan: Option<&'static str>,
    pub note: &'static str,
}

pub const RESTRICTIONS: &[RestrictionNote] = &[
    RestrictionNote {
        platform: "LiveKit",
        plan: Some("Ship"),
        note: "Max 2 agent deployments, 20 concurrent sessions, email support",
    },
    RestrictionNote {
        platform: "LiveKit",
        plan: Some("Scale"),
        note: "Includes region pinning, HIPAA compliance, inference discounts",
    },
    RestrictionNote {
        platform: "Pipecat Cloud",
        plan: None,
        note: "Unlimited concurrency, BYOP for all inference providers",
    },
    RestrictionNote {
        platform: "Self-hosted",
        plan: None,
        note: "You manage infrastructure, scaling, and monitoring. No platform SLA.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_has_sources_and_dates() {
        for m in PRICING_META {
            assert!(!m.source_urls.is_empty(), "{}", m.provider);
            assert_eq!(m.last_verified_at.len(), 10, "{}", m.provider);
        }
    }
}
