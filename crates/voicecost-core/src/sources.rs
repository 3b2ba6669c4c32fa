//! Maps each detail line to a pricing-page URL, with a `:~:text=` scroll
//! fragment where the page has a stable anchor phrase, so every billed
//! rate can be verified at its source.

use crate::types::{Category, CostDetail};

fn frag(base: &str, text: &str) -> String {
    format!("{}#:~:text={}", base, urlencoding::encode(text))
}

/// LiveKit inference page anchors, keyed by model id. Only applies to
/// lines billed through LiveKit inference (formula lacks "(direct)").
const LIVEKIT_INFERENCE_FRAGMENTS: &[(&str, &str)] = &[
    ("assemblyai-universal-streaming", "Universal-Streaming"),
    ("assemblyai-universal-streaming-multilingual", "Universal-Streaming-Multilingual"),
    ("cartesia-ink-whisper", "Ink Whisper"),
    ("deepgram-nova-3", "Nova-3 (Monolingual)"),
    ("deepgram-nova-3-multilingual", "Nova-3 (Multilingual)"),
    ("cartesia-sonic-3", "Sonic 3"),
    ("elevenlabs-turbo-v2.5", "Eleven Turbo v2.5"),
    ("gpt-5.2", "GPT-5.2"),
    ("gemini-3-pro", "Gemini 3 Pro"),
    ("gemini-3-flash", "Gemini 3 Flash"),
];

/// Resolve the pricing source for one detail line, or `None` when no
/// stable public page covers it.
pub fn resolve_source_url(detail: &CostDetail) -> Option<String> {
    let label = detail.label.as_str();
    let formula = detail.formula.as_str();

    // LiveKit Cloud plans: "Ship" and "Scale" are exact page anchors.
    if label.starts_with("LiveKit Ship") {
        return Some(frag("https://livekit.io/pricing", "Ship"));
    }
    if label.starts_with("LiveKit Scale") {
        return Some(frag("https://livekit.io/pricing", "Scale"));
    }
    if label == "Inference credits" {
        return Some(frag("https://livekit.io/pricing", "Inference credits"));
    }
    if label == "Observability overage" {
        return Some(frag("https://livekit.io/pricing", "observability"));
    }
    if label == "WebRTC participant minutes" {
        return Some(frag("https://livekit.io/pricing", "WebRTC"));
    }
    if label == "Downstream data transfer" {
        return Some(frag("https://livekit.io/pricing", "data transfer"));
    }
    if label.starts_with("Transcode") {
        return Some(frag("https://livekit.io/pricing", "Recording"));
    }

    // Pipecat Cloud / Daily: the pipecat-cloud page heading is lowercase.
    if label.starts_with("Pipecat Agent-1x") {
        return Some(frag("https://www.daily.co/pricing/pipecat-cloud/", "agent-1x"));
    }
    if label.contains("Daily WebRTC Voice") {
        return Some("https://www.daily.co/pricing/pipecat-cloud/".to_string());
    }
    if label.starts_with("Daily WebRTC (") {
        return Some("https://www.daily.co/pricing/webrtc-infrastructure/".to_string());
    }
    if label.starts_with("Daily recording") {
        return Some(frag("https://www.daily.co/pricing/pipecat-cloud/", "Recording"));
    }

    // Azure
    if label == "Azure AKS" {
        return Some(
            "https://azure.microsoft.com/en-us/pricing/details/kubernetes-service/".to_string(),
        );
    }
    if label.contains("Azure Blob Storage") {
        return Some(
            "https://azure.microsoft.com/en-us/pricing/details/storage/blobs/".to_string(),
        );
    }

    // Krisp
    if label == "Krisp (included)" {
        return Some(frag("https://livekit.io/pricing", "Krisp"));
    }
    if label == "Krisp VIVA" {
        return Some("https://www.daily.co/pricing/pipecat-cloud/#krisp-viva".to_string());
    }
    if label == "Krisp via Daily add-on" {
        return Some(frag(
            "https://www.daily.co/pricing/video-sdk/",
            "Noise cancellation powered by Krisp",
        ));
    }

    // Speech-to-speech models
    if detail.category == Category::S2sModel {
        if label.contains("openai-realtime") {
            return Some("https://openai.com/api/pricing/".to_string());
        }
        if label.contains("gemini-live") {
            return Some("https://ai.google.dev/pricing".to_string());
        }
    }

    // Tier-optimized providers carry a proper-cased name plus tier/plan.
    if label.contains("Cartesia Ink Whisper") || label.contains("Cartesia Sonic 3") {
        return Some("https://cartesia.ai/pricing".to_string());
    }
    if label.contains("ElevenLabs Turbo v2.5") {
        return Some(frag("https://elevenlabs.io/pricing", "Flash"));
    }
    if label.contains("Deepgram") {
        return Some("https://deepgram.com/pricing".to_string());
    }

    if !formula.contains("(direct)") {
        // LiveKit inference lines carry the raw model id as label.
        if let Some((_, anchor)) = LIVEKIT_INFERENCE_FRAGMENTS
            .iter()
            .find(|(model, _)| *model == label)
        {
            return Some(frag("https://livekit.io/pricing/inference", anchor));
        }
    } else {
        if label.starts_with("assemblyai") {
            return Some("https://www.assemblyai.com/pricing".to_string());
        }
        if label.starts_with("deepgram") {
            return Some("https://deepgram.com/pricing".to_string());
        }
        if label.starts_with("gpt") {
            return Some("https://openai.com/api/pricing/".to_string());
        }
        if label.starts_with("gemini") {
            return Some("https://ai.google.dev/pricing".to_string());
        }
    }

    None
}
