//! Platform, transport, recording, and noise-cancellation pricing for the
//! Pipecat Cloud and self-hosted deployments.

use super::capacity::{optimal_reserved, self_hosted_nodes};
use super::Tally;
use crate::pricing::{
    AZURE_AKS, AZURE_BLOB_STORAGE, DAILY_KRISP_ADDON_PER_MINUTE, KRISP_VIVA, MINUTES_PER_MONTH,
    PIPECAT_AGENT_1X, PIPECAT_RECORDING,
};
use crate::pricing::plans::DAILY_TRANSPORT_BANDS;
use crate::types::{CallMode, Category, Hosting, Platform, RecordingMode, StackConfig};
use crate::util::fmt_thousands;

/// Pipecat Cloud Agent-1x compute: reserved min-agents sized for the
/// volume, with minutes beyond the reserved capacity billed on demand.
pub(crate) fn pipecat_cloud_platform(minutes: f64, t: &mut Tally) -> f64 {
    let reserved = optimal_reserved(minutes);
    let reserved_capacity = reserved as f64 * MINUTES_PER_MONTH;
    // `optimal_reserved` rounds up from average concurrency, so today the
    // auto-sized capacity always covers the volume and overflow is zero.
    // The on-demand branch is the billing rule for any sizing policy that
    // reserves below baseline (e.g. a user-pinned reserved count).
    let overflow = (minutes - reserved_capacity).max(0.0);

    let active_cost = overflow * PIPECAT_AGENT_1X.active_per_min;
    let active_formula = if overflow > 0.0 {
        format!(
            "({} − {} reserved capacity) × ${}/min",
            fmt_thousands(minutes as u64),
            fmt_thousands(reserved_capacity as u64),
            PIPECAT_AGENT_1X.active_per_min
        )
    } else {
        format!(
            "{} min within {} reserved capacity",
            fmt_thousands(minutes as u64),
            fmt_thousands(reserved_capacity as u64)
        )
    };
    t.line(
        Category::Platform,
        "Pipecat Agent-1x (active)",
        active_formula,
        active_cost,
    );

    let reserved_cost = reserved as f64 * PIPECAT_AGENT_1X.reserved_per_min * MINUTES_PER_MONTH;
    t.line(
        Category::Platform,
        "Pipecat Agent-1x (reserved)",
        format!(
            "{} min-agent{} × ${}/min × {} min/mo",
            reserved,
            if reserved == 1 { "" } else { "s" },
            PIPECAT_AGENT_1X.reserved_per_min,
            fmt_thousands(MINUTES_PER_MONTH as u64)
        ),
        reserved_cost,
    );

    active_cost + reserved_cost
}

/// Daily WebRTC with marginal volume-discount bands: each minute is billed
/// at the rate of the band it falls in.
pub(crate) fn daily_transport(minutes: f64, call_mode: CallMode, t: &mut Tally) -> f64 {
    let mut remaining = minutes;
    let mut cost = 0.0;
    let mut prev_up_to = 0.0;

    for band in DAILY_TRANSPORT_BANDS {
        let band_size = band.up_to - prev_up_to;
        let used = remaining.min(band_size);
        if used <= 0.0 {
            break;
        }
        let rate = match call_mode {
            CallMode::AudioOnly => band.audio_only,
            CallMode::AudioVideo => band.video_audio,
        };
        cost += used * rate;
        remaining -= used;
        prev_up_to = band.up_to;
    }

    t.line(
        Category::Transport,
        format!("Daily WebRTC ({}, tiered)", call_mode),
        format!(
            "{} participant-min with volume discounts",
            fmt_thousands(minutes as u64)
        ),
        cost,
    );
    cost
}

/// Azure AKS cluster sized to peak concurrency.
pub(crate) fn azure_hosting(minutes: f64, t: &mut Tally) -> f64 {
    let plan = self_hosted_nodes(minutes);
    t.line(
        Category::Platform,
        "Azure AKS",
        format!(
            "Control plane ${}/mo + {} D2s_v3 node{} × ${}/mo",
            AZURE_AKS.control_plane,
            plan.nodes,
            if plan.nodes > 1 { "s" } else { "" },
            AZURE_AKS.node_monthly
        ),
        plan.cost,
    );
    plan.cost
}

/// Recording processing plus blob storage for the non-LiveKit-Cloud
/// deployments (LiveKit Cloud recording goes through the plan optimizer).
pub(crate) fn recording(stack: &StackConfig, minutes: f64, t: &mut Tally) -> f64 {
    if stack.recording_mode == RecordingMode::None {
        return 0.0;
    }

    let processing_rate = match stack.recording_mode {
        RecordingMode::AudioOnly => PIPECAT_RECORDING.audio_only,
        _ => PIPECAT_RECORDING.audio_video,
    };
    let processing_cost = minutes * processing_rate;
    t.line(
        Category::Recording,
        format!("Daily recording ({})", stack.recording_mode),
        format!(
            "{} min × ${}/min",
            fmt_thousands(minutes as u64),
            processing_rate
        ),
        processing_cost,
    );

    let mb_per_min = match stack.recording_mode {
        RecordingMode::AudioOnly => AZURE_BLOB_STORAGE.audio_mb_per_minute,
        _ => AZURE_BLOB_STORAGE.video_mb_per_minute,
    };
    let total_gb = minutes * mb_per_min / 1024.0;
    let storage_cost = total_gb * AZURE_BLOB_STORAGE.per_gb_month;
    t.line(
        Category::Recording,
        "Azure Blob Storage (Hot LRS)",
        format!("{:.2} GB × ${}/GB/mo", total_gb, AZURE_BLOB_STORAGE.per_gb_month),
        storage_cost,
    );

    processing_cost + storage_cost
}

/// Krisp noise cancellation, which is priced differently on every
/// platform/hosting combination.
pub(crate) fn noise_cancellation(stack: &StackConfig, minutes: f64, t: &mut Tally) -> f64 {
    match (stack.platform, stack.hosting) {
        (Platform::Livekit, Hosting::Cloud) => {
            t.line(
                Category::NoiseCancellation,
                "Krisp (included)",
                "Included with LiveKit Cloud",
                0.0,
            );
            0.0
        }
        (Platform::Pipecat, Hosting::Cloud) => {
            let billable = (minutes - KRISP_VIVA.free_minutes).max(0.0);
            let cost = billable * KRISP_VIVA.per_minute_after_free;
            let formula = if minutes <= KRISP_VIVA.free_minutes {
                format!(
                    "{} min ≤ {} free tier",
                    fmt_thousands(minutes as u64),
                    fmt_thousands(KRISP_VIVA.free_minutes as u64)
                )
            } else {
                format!(
                    "({} − {} free) × ${}/min",
                    fmt_thousands(minutes as u64),
                    fmt_thousands(KRISP_VIVA.free_minutes as u64),
                    KRISP_VIVA.per_minute_after_free
                )
            };
            t.line(Category::NoiseCancellation, "Krisp VIVA", formula, cost);
            cost
        }
        (Platform::Pipecat, Hosting::SelfHosted) => {
            // Self-hosted Pipecat rides Daily WebRTC, which sells Krisp
            // as a per-participant-minute add-on.
            let cost = minutes * DAILY_KRISP_ADDON_PER_MINUTE;
            t.line(
                Category::NoiseCancellation,
                "Krisp via Daily add-on",
                format!(
                    "{} min × ${}/min",
                    fmt_thousands(minutes as u64),
                    DAILY_KRISP_ADDON_PER_MINUTE
                ),
                cost,
            );
            cost
        }
        (Platform::Livekit, Hosting::SelfHosted) => {
            t.line(
                Category::NoiseCancellation,
                "Krisp SDK (separate license)",
                "Contact Krisp for pricing",
                0.0,
            );
            0.0
        }
    }
}
