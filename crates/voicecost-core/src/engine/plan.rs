//! LiveKit Cloud plan optimizer.
//!
//! Evaluates each plan's full monthly cost — base fee, agent/WebRTC/
//! observability/transcode/data-transfer overages, and inference net of
//! bundled credits — then prices the winner in detail. Detail lines are
//! only emitted for the chosen plan.

use tracing::debug;

use super::Tally;
use crate::pricing::plans::{PlatformPlan, LIVEKIT_PLANS};
use crate::pricing::{self, ASSUMPTIONS};
use crate::types::{Category, RecordingMode, StackConfig};
use crate::util::fmt_thousands;

pub(crate) struct CloudCosts {
    pub platform: f64,
    pub transport: f64,
    pub recording: f64,
    pub stt: f64,
    pub llm: f64,
    pub tts: f64,
}

/// Full monthly cost of one plan, used only for plan comparison.
fn plan_full_cost(plan: &PlatformPlan, stack: &StackConfig, minutes: f64, is_s2s: bool) -> f64 {
    let agent_overage = (minutes - plan.included_agent_minutes).max(0.0) * plan.agent_minute_rate;

    // 1:1 voice: participant minutes track agent minutes
    let webrtc_overage =
        (minutes - plan.included_webrtc_minutes).max(0.0) * plan.webrtc_overage_rate;

    // every session is recorded for observability
    let obs_overage =
        (minutes - plan.included_observability_minutes).max(0.0) * plan.observability_overage_rate;

    let mut recording_cost = 0.0;
    if stack.recording_mode != RecordingMode::None {
        let rate = match stack.recording_mode {
            RecordingMode::AudioOnly => plan.transcode_audio_rate,
            _ => plan.transcode_video_rate,
        };
        recording_cost = (minutes - plan.included_transcode_minutes).max(0.0) * rate;
        recording_cost += storage_cost(stack.recording_mode, minutes);
    }

    let total_gb = minutes * ASSUMPTIONS.avg_downstream_mb_per_minute / 1024.0;
    let data_transfer =
        (total_gb - plan.included_data_transfer_gb).max(0.0) * plan.data_transfer_overage_per_gb;

    let mut inference = 0.0;
    if is_s2s {
        if let Some(rate) = pricing::livekit_s2s(&stack.speech_to_speech_model) {
            inference = minutes * rate.per_minute;
        }
    } else {
        inference += stt_cost_only(&stack.stt_model, minutes, plan.discounted_inference);
        inference += llm_cost_only(&stack.llm_model, minutes);
        inference += tts_cost_only(&stack.tts_model, minutes, plan.discounted_inference);
    }
    inference = (inference - plan.included_inference_credits).max(0.0);

    plan.monthly_fee + agent_overage + webrtc_overage + obs_overage + recording_cost
        + data_transfer
        + inference
}

fn storage_cost(mode: RecordingMode, minutes: f64) -> f64 {
    let mb_per_min = match mode {
        RecordingMode::AudioOnly => pricing::AZURE_BLOB_STORAGE.audio_mb_per_minute,
        _ => pricing::AZURE_BLOB_STORAGE.video_mb_per_minute,
    };
    (minutes * mb_per_min / 1024.0) * pricing::AZURE_BLOB_STORAGE.per_gb_month
}

/// Pick the cheapest plan, then emit detail lines for it.
pub(crate) fn livekit_cloud(
    stack: &StackConfig,
    minutes: f64,
    is_s2s: bool,
    t: &mut Tally,
) -> CloudCosts {
    let mut plan = &LIVEKIT_PLANS[0];
    let mut best_total = f64::INFINITY;
    for candidate in LIVEKIT_PLANS {
        let total = plan_full_cost(candidate, stack, minutes, is_s2s);
        if total < best_total {
            best_total = total;
            plan = candidate;
        }
    }
    debug!(plan = plan.name, total = best_total, "livekit plan selected");
    t.best_plan(Category::Platform, plan.name);

    // Platform: base fee + agent overage
    let agent_overage = (minutes - plan.included_agent_minutes).max(0.0);
    let platform_base = plan.monthly_fee + agent_overage * plan.agent_minute_rate;
    let agent_part = if agent_overage > 0.0 {
        format!(
            "{:.0} overage min × ${}/min",
            agent_overage, plan.agent_minute_rate
        )
    } else {
        "no overage".to_string()
    };
    t.line(
        Category::Platform,
        format!("LiveKit {} plan", plan.name),
        format!("${}/mo base + {}", plan.monthly_fee, agent_part),
        platform_base,
    );

    // WebRTC participant minutes
    let webrtc_overage = (minutes - plan.included_webrtc_minutes).max(0.0);
    let webrtc_cost = webrtc_overage * plan.webrtc_overage_rate;
    let webrtc_formula = if webrtc_overage > 0.0 {
        format!(
            "({} − {} included) × ${}/min",
            fmt_thousands(minutes as u64),
            fmt_thousands(plan.included_webrtc_minutes as u64),
            plan.webrtc_overage_rate
        )
    } else {
        format!(
            "{} min within {} included",
            fmt_thousands(minutes as u64),
            fmt_thousands(plan.included_webrtc_minutes as u64)
        )
    };
    t.line(
        Category::Transport,
        "WebRTC participant minutes",
        webrtc_formula,
        webrtc_cost,
    );

    // Observability
    let obs_overage = (minutes - plan.included_observability_minutes).max(0.0);
    let obs_cost = obs_overage * plan.observability_overage_rate;
    if obs_cost > 0.0 {
        t.line(
            Category::Platform,
            "Observability overage",
            format!(
                "({} − {} included) × ${}/min",
                fmt_thousands(minutes as u64),
                fmt_thousands(plan.included_observability_minutes as u64),
                plan.observability_overage_rate
            ),
            obs_cost,
        );
    }

    // Downstream data transfer
    let total_gb = minutes * ASSUMPTIONS.avg_downstream_mb_per_minute / 1024.0;
    let transfer_overage_gb = (total_gb - plan.included_data_transfer_gb).max(0.0);
    let transfer_cost = transfer_overage_gb * plan.data_transfer_overage_per_gb;
    if transfer_cost > 0.0 {
        t.line(
            Category::Transport,
            "Downstream data transfer",
            format!(
                "({:.1}GB − {}GB included) × ${}/GB",
                total_gb, plan.included_data_transfer_gb, plan.data_transfer_overage_per_gb
            ),
            transfer_cost,
        );
    }

    // Recording transcode + blob storage
    let mut recording_cost = 0.0;
    if stack.recording_mode != RecordingMode::None {
        let rate = match stack.recording_mode {
            RecordingMode::AudioOnly => plan.transcode_audio_rate,
            _ => plan.transcode_video_rate,
        };
        let transcode_overage = (minutes - plan.included_transcode_minutes).max(0.0);
        let transcode_cost = transcode_overage * rate;
        let transcode_formula = if transcode_overage > 0.0 {
            format!(
                "({} − {:.0} included) × ${}/min",
                fmt_thousands(minutes as u64),
                plan.included_transcode_minutes,
                rate
            )
        } else {
            format!(
                "{} min within {:.0} included",
                fmt_thousands(minutes as u64),
                plan.included_transcode_minutes
            )
        };
        t.line(
            Category::Recording,
            format!("Transcode ({})", stack.recording_mode),
            transcode_formula,
            transcode_cost,
        );

        let mb_per_min = match stack.recording_mode {
            RecordingMode::AudioOnly => pricing::AZURE_BLOB_STORAGE.audio_mb_per_minute,
            _ => pricing::AZURE_BLOB_STORAGE.video_mb_per_minute,
        };
        let storage_gb = minutes * mb_per_min / 1024.0;
        let storage = storage_gb * pricing::AZURE_BLOB_STORAGE.per_gb_month;
        t.line(
            Category::Recording,
            "Azure Blob Storage (Hot LRS)",
            format!(
                "{:.2} GB × ${}/GB/mo",
                storage_gb,
                pricing::AZURE_BLOB_STORAGE.per_gb_month
            ),
            storage,
        );

        recording_cost = transcode_cost + storage;
    }

    // Inference on the chosen plan
    let mut stt = 0.0;
    let mut llm = 0.0;
    let mut tts = 0.0;
    if is_s2s {
        match pricing::livekit_s2s(&stack.speech_to_speech_model) {
            Some(rate) => {
                llm = minutes * rate.per_minute;
                t.line(
                    Category::S2sModel,
                    stack.speech_to_speech_model.clone(),
                    format!("{:.0} min × ${}/min", minutes, rate.per_minute),
                    llm,
                );
            }
            None => t.missing_rate(Category::S2sModel, &stack.speech_to_speech_model),
        }
    } else {
        stt = lk_stt(&stack.stt_model, minutes, plan.discounted_inference, t);
        llm = lk_llm(&stack.llm_model, minutes, t);
        tts = lk_tts(&stack.tts_model, minutes, plan.discounted_inference, t);
    }

    // Bundled inference credits, apportioned proportionally across the
    // inference subtotals. The -$credit detail line offsets the raw
    // inference lines so detail lines still sum to the total.
    let raw_inference = stt + llm + tts;
    if plan.included_inference_credits > 0.0 && raw_inference > 0.0 {
        let credit = plan.included_inference_credits.min(raw_inference);
        t.line(
            Category::Platform,
            "Inference credits",
            format!("-${:.2} included with {} plan", credit, plan.name),
            -credit,
        );
        let ratio = (raw_inference - credit) / raw_inference;
        stt *= ratio;
        llm *= ratio;
        tts *= ratio;
    }

    CloudCosts {
        platform: platform_base + obs_cost,
        transport: webrtc_cost + transfer_cost,
        recording: recording_cost,
        stt,
        llm,
        tts,
    }
}

// Cost-only helpers for the comparison pass; a missing rate here resolves
// to zero and is reported once by the detail pass for the winning plan.

fn stt_cost_only(model: &str, minutes: f64, discounted: bool) -> f64 {
    let Some(rates) = pricing::livekit_stt(model) else { return 0.0 };
    let rate = if discounted { rates.scale } else { rates.build_ship };
    minutes * ASSUMPTIONS.stt_duty_ratio * rate
}

fn tts_cost_only(model: &str, minutes: f64, discounted: bool) -> f64 {
    let Some(rates) = pricing::livekit_tts(model) else { return 0.0 };
    let rate = if discounted { rates.scale } else { rates.build_ship };
    let chars = minutes * ASSUMPTIONS.tts_duty_ratio * ASSUMPTIONS.avg_chars_per_minute_tts;
    (chars / 1_000_000.0) * rate
}

fn llm_cost_only(model: &str, minutes: f64) -> f64 {
    let Some(rates) = pricing::livekit_llm(model) else { return 0.0 };
    let total_input = minutes * ASSUMPTIONS.avg_input_tokens_per_minute;
    let cached = total_input * ASSUMPTIONS.cache_hit_rate;
    let fresh = total_input - cached;
    let total_output = minutes * ASSUMPTIONS.avg_output_tokens_per_minute;
    (fresh / 1_000_000.0) * rates.input
        + (cached / 1_000_000.0) * rates.cached_input
        + (total_output / 1_000_000.0) * rates.output
}

fn lk_stt(model: &str, minutes: f64, discounted: bool, t: &mut Tally) -> f64 {
    let Some(rates) = pricing::livekit_stt(model) else {
        t.missing_rate(Category::Stt, model);
        return 0.0;
    };
    let rate = if discounted { rates.scale } else { rates.build_ship };
    let cost = minutes * ASSUMPTIONS.stt_duty_ratio * rate;
    t.line(
        Category::Stt,
        model,
        format!(
            "{:.0} min × {:.0}% duty × ${}/min{}",
            minutes,
            ASSUMPTIONS.stt_duty_ratio * 100.0,
            rate,
            if discounted { " (Scale)" } else { "" }
        ),
        cost,
    );
    cost
}

fn lk_tts(model: &str, minutes: f64, discounted: bool, t: &mut Tally) -> f64 {
    let Some(rates) = pricing::livekit_tts(model) else {
        t.missing_rate(Category::Tts, model);
        return 0.0;
    };
    let rate = if discounted { rates.scale } else { rates.build_ship };
    let chars = minutes * ASSUMPTIONS.tts_duty_ratio * ASSUMPTIONS.avg_chars_per_minute_tts;
    let cost = (chars / 1_000_000.0) * rate;
    t.line(
        Category::Tts,
        model,
        format!(
            "{:.0} min × {:.0}% duty × {:.0} chars/min ÷ 1M × ${}/M chars{}",
            minutes,
            ASSUMPTIONS.tts_duty_ratio * 100.0,
            ASSUMPTIONS.avg_chars_per_minute_tts,
            rate,
            if discounted { " (Scale)" } else { "" }
        ),
        cost,
    );
    cost
}

fn lk_llm(model: &str, minutes: f64, t: &mut Tally) -> f64 {
    let Some(rates) = pricing::livekit_llm(model) else {
        t.missing_rate(Category::Llm, model);
        return 0.0;
    };
    let total_input = minutes * ASSUMPTIONS.avg_input_tokens_per_minute;
    let cached = total_input * ASSUMPTIONS.cache_hit_rate;
    let fresh = total_input - cached;
    let total_output = minutes * ASSUMPTIONS.avg_output_tokens_per_minute;
    let cost = (fresh / 1_000_000.0) * rates.input
        + (cached / 1_000_000.0) * rates.cached_input
        + (total_output / 1_000_000.0) * rates.output;
    t.line(
        Category::Llm,
        model,
        format!(
            "Input: {:.0}K tok × ${}/M + Cached: {:.0}K × ${}/M + Output: {:.0}K × ${}/M",
            fresh / 1000.0,
            rates.input,
            cached / 1000.0,
            rates.cached_input,
            total_output / 1000.0,
            rates.output
        ),
        cost,
    );
    cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_stacks;

    fn livekit_stack() -> StackConfig {
        default_stacks().remove(1)
    }

    #[test]
    fn test_ship_wins_at_moderate_volume() {
        let stack = livekit_stack();
        let mut t = Tally::new();
        livekit_cloud(&stack, 4_000.0, false, &mut t);
        assert_eq!(
            t.best_plans.get("Platform").map(String::as_str),
            Some("Ship")
        );
    }

    #[test]
    fn test_scale_wins_at_high_volume() {
        let stack = livekit_stack();
        // At 100K minutes Ship pays 95K agent-overage minutes at $0.01;
        // Scale's higher base is cheaper overall.
        let ship = plan_full_cost(&LIVEKIT_PLANS[0], &stack, 100_000.0, false);
        let scale = plan_full_cost(&LIVEKIT_PLANS[1], &stack, 100_000.0, false);
        assert!(scale < ship);

        let mut t = Tally::new();
        livekit_cloud(&stack, 100_000.0, false, &mut t);
        assert_eq!(
            t.best_plans.get("Platform").map(String::as_str),
            Some("Scale")
        );
    }

    #[test]
    fn test_winner_matches_exhaustive_minimum() {
        let stack = livekit_stack();
        for minutes in [0.0, 500.0, 5_000.0, 20_000.0, 60_000.0, 250_000.0] {
            let mut t = Tally::new();
            let result = livekit_cloud(&stack, minutes, false, &mut t);
            let total = result.platform
                + result.transport
                + result.recording
                + result.stt
                + result.llm
                + result.tts;
            let best = LIVEKIT_PLANS
                .iter()
                .map(|p| plan_full_cost(p, &stack, minutes, false))
                .fold(f64::INFINITY, f64::min);
            assert!(
                (total - best).abs() < 1e-6,
                "detailed total {} != comparison minimum {} at {} min",
                total,
                best,
                minutes
            );
        }
    }

    #[test]
    fn test_inference_credit_apportioned_proportionally() {
        let stack = livekit_stack();
        let mut t = Tally::new();
        let minutes = 10_000.0;
        let r = livekit_cloud(&stack, minutes, false, &mut t);

        let raw_stt = stt_cost_only(&stack.stt_model, minutes, false);
        let raw_llm = llm_cost_only(&stack.llm_model, minutes);
        let raw_tts = tts_cost_only(&stack.tts_model, minutes, false);
        let raw = raw_stt + raw_llm + raw_tts;
        let credit = LIVEKIT_PLANS[0].included_inference_credits.min(raw);
        let ratio = (raw - credit) / raw;

        assert!((r.stt - raw_stt * ratio).abs() < 1e-9);
        assert!((r.llm - raw_llm * ratio).abs() < 1e-9);
        assert!((r.tts - raw_tts * ratio).abs() < 1e-9);
        assert!((r.stt + r.llm + r.tts - (raw - credit)).abs() < 1e-9);
    }

    #[test]
    fn test_credit_applied_once_and_lines_reconcile() {
        let stack = livekit_stack();
        let mut t = Tally::new();
        let r = livekit_cloud(&stack, 10_000.0, false, &mut t);

        // Platform subtotal is base + agent overage + observability; the
        // credit is carried by the scaled inference subtotals only.
        let base = 50.0 + 5_000.0 * 0.01;
        let obs = 5_000.0 * 0.005;
        assert!((r.platform - (base + obs)).abs() < 1e-9);

        let credit_line = t
            .details
            .iter()
            .find(|d| d.label == "Inference credits")
            .unwrap();
        assert_eq!(credit_line.amount, -5.0);

        // The -$credit line offsets the raw inference lines, so detail
        // lines and subtotals agree.
        let detail_sum: f64 = t.details.iter().map(|d| d.amount).sum();
        let subtotal_sum =
            r.platform + r.transport + r.recording + r.stt + r.llm + r.tts;
        assert!((detail_sum - subtotal_sum).abs() < 1e-9);
    }

    #[test]
    fn test_credit_never_exceeds_inference() {
        // Tiny volume: raw inference under $5 in credits, floored at zero.
        let stack = livekit_stack();
        let mut t = Tally::new();
        let r = livekit_cloud(&stack, 50.0, false, &mut t);
        assert!(r.stt + r.llm + r.tts >= 0.0);
        assert!(r.stt + r.llm + r.tts < 1e-9);
    }

    #[test]
    fn test_s2s_replaces_cascaded_lines() {
        let mut stack = livekit_stack();
        stack.speech_to_speech_model = "openai-realtime".to_string();
        let mut t = Tally::new();
        let r = livekit_cloud(&stack, 1_000.0, true, &mut t);
        assert_eq!(r.stt, 0.0);
        assert_eq!(r.tts, 0.0);
        assert!(r.llm > 0.0);
        assert!(t
            .details
            .iter()
            .any(|d| d.category == Category::S2sModel));
        assert!(!t.details.iter().any(|d| d.category == Category::Stt));
    }

    #[test]
    fn test_unknown_s2s_model_warns() {
        let mut stack = livekit_stack();
        stack.speech_to_speech_model = "amazon-nova-sonic".to_string();
        let mut t = Tally::new();
        let r = livekit_cloud(&stack, 1_000.0, true, &mut t);
        assert_eq!(r.llm, 0.0);
        assert_eq!(t.warnings.len(), 1);
    }
}
