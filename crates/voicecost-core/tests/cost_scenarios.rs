//! End-to-end pricing scenarios across the four deployment stacks.

use voicecost_core::config::default_stacks;
use voicecost_core::engine::{compute, generate_chart_series, optimize_tier};
use voicecost_core::pricing::plans::CARTESIA_TIERS;
use voicecost_core::types::{
    CallMode, Category, Pipeline, RecordingMode, StackConfig, Warning,
};

fn livekit_cloud() -> StackConfig {
    default_stacks().remove(1)
}

fn pipecat_cloud() -> StackConfig {
    default_stacks().remove(0)
}

#[test]
fn test_livekit_ship_plan_at_moderate_volume() {
    let b = compute(&livekit_cloud(), 4_000);
    assert!(b.supported);
    assert_eq!(b.best_plans.get("Platform").map(String::as_str), Some("Ship"));
    // Base fee with no agent overage: 4K min within the 5K allotment.
    let base = b
        .details
        .iter()
        .find(|d| d.label == "LiveKit Ship plan")
        .unwrap();
    assert_eq!(base.amount, 50.0);
    assert!(base.formula.contains("no overage"));
}

#[test]
fn test_livekit_scale_plan_at_high_volume() {
    let b = compute(&livekit_cloud(), 150_000);
    assert_eq!(b.best_plans.get("Platform").map(String::as_str), Some("Scale"));
    // Ship at this volume pays 145K overage minutes on a $50 base; the
    // detailed winner must beat that.
    let ship_platform_alone = 50.0 + 145_000.0 * 0.01;
    assert!(b.total < ship_platform_alone + 10_000.0);
    assert!(b.platform > 0.0);
}

#[test]
fn test_plan_switch_never_causes_cost_drop() {
    let stack = livekit_cloud();
    let mut prev = 0.0;
    for minutes in (0..=300_000).step_by(10_000) {
        let total = compute(&stack, minutes).total;
        assert!(
            total >= prev - 1e-9,
            "cost decreased from {} to {} at {} min",
            prev,
            total,
            minutes
        );
        prev = total;
    }
}

#[test]
fn test_pipecat_cloud_reserved_capacity_covers_default_volume() {
    let b = compute(&pipecat_cloud(), 10_000);
    assert!(b.supported);
    // One reserved min-agent at $0.0005/min around the clock, nothing on demand.
    let active = b
        .details
        .iter()
        .find(|d| d.label == "Pipecat Agent-1x (active)")
        .unwrap();
    assert_eq!(active.amount, 0.0);
    let reserved = b
        .details
        .iter()
        .find(|d| d.label == "Pipecat Agent-1x (reserved)")
        .unwrap();
    assert!((reserved.amount - 21.6).abs() < 1e-9);
    assert!((b.platform - 21.6).abs() < 1e-9);
}

#[test]
fn test_deepgram_plan_choice_flips_with_volume() {
    let stack = pipecat_cloud();
    let low = compute(&stack, 10_000);
    assert_eq!(
        low.best_plans.get("STT").map(String::as_str),
        Some("Deepgram Pay As You Go")
    );

    let high = compute(&stack, 100_000);
    assert_eq!(
        high.best_plans.get("STT").map(String::as_str),
        Some("Deepgram Growth")
    );
    // Growth usage clears its monthly floor at this volume.
    assert!(high.stt >= 4_000.0 / 12.0);
}

#[test]
fn test_cartesia_pool_spans_stt_and_tts() {
    let mut stack = pipecat_cloud();
    stack.stt_model = "cartesia-ink-whisper".to_string();
    stack.tts_model = "cartesia-sonic-3".to_string();

    let minutes = 5_000u64;
    let b = compute(&stack, minutes);

    let stt_credits = minutes as f64 * 0.66 * 60.0;
    let tts_credits = minutes as f64 * 0.24 * 900.0;
    let pooled = optimize_tier(CARTESIA_TIERS, stt_credits + tts_credits)
        .unwrap()
        .cost;
    assert!((b.stt + b.tts - pooled).abs() < 1e-9);
    assert_eq!(b.best_plans.get("STT"), b.best_plans.get("TTS"));
}

#[test]
fn test_unknown_model_warns_instead_of_silent_zero() {
    let mut stack = pipecat_cloud();
    stack.llm_model = "claude-sonnet".to_string();
    let b = compute(&stack, 10_000);
    assert!(b.supported);
    assert_eq!(b.llm, 0.0);
    assert!(b.warnings.iter().any(|w| matches!(
        w,
        Warning::MissingRate { category: Category::Llm, .. }
    )));
}

#[test]
fn test_s2s_on_video_call_is_unsupported() {
    let mut stack = pipecat_cloud();
    stack.pipeline = Pipeline::SpeechToSpeech;
    stack.call_mode = CallMode::AudioVideo;
    let b = compute(&stack, 10_000);
    assert!(!b.supported);
    assert_eq!(b.total, 0.0);
    assert!(b.unsupported_reason.is_some());
}

#[test]
fn test_video_recording_requires_video_call() {
    let mut stack = pipecat_cloud();
    stack.call_mode = CallMode::AudioOnly;
    stack.recording_mode = RecordingMode::AudioVideo;
    assert!(!compute(&stack, 10_000).supported);

    stack.recording_mode = RecordingMode::AudioOnly;
    assert!(compute(&stack, 10_000).supported);
}

#[test]
fn test_self_hosted_stacks_carry_fixed_floor() {
    let stacks = default_stacks();
    for stack in &stacks[2..] {
        let b = compute(stack, 0);
        // Control plane plus one node, even with no traffic.
        assert!((b.platform - 143.0).abs() < 1e-9, "{}", stack.label);
    }
}

#[test]
fn test_subtotals_sum_to_total_across_stacks_and_volumes() {
    for stack in default_stacks() {
        for minutes in [0u64, 777, 10_000, 43_200, 250_000] {
            let b = compute(&stack, minutes);
            let sum = b.platform
                + b.transport
                + b.noise_cancellation
                + b.stt
                + b.llm
                + b.tts
                + b.recording;
            assert!((b.total - sum).abs() < 1e-9, "{} at {}", stack.label, minutes);

            let detail_sum: f64 = b.details.iter().map(|d| d.amount).sum();
            assert!(
                (b.total - detail_sum).abs() < 1e-9,
                "{} at {}: detail lines disagree with total",
                stack.label,
                minutes
            );
        }
    }
}

#[test]
fn test_chart_series_is_complete_and_ordered() {
    let stack = livekit_cloud();
    let series = generate_chart_series(&stack, 100_000);
    assert_eq!(series.len(), 10);
    assert_eq!(series[0].minutes, 0);
    assert_eq!(series.last().unwrap().minutes, 100_000);
    for pair in series.windows(2) {
        assert!(pair[0].minutes < pair[1].minutes);
        assert!(pair[0].cost <= pair[1].cost + 1e-9);
    }
}

#[test]
fn test_recording_disabled_is_cheaper() {
    for base in default_stacks() {
        let with = compute(&base, 20_000);
        let mut without = base.clone();
        without.recording_mode = RecordingMode::None;
        let none = compute(&without, 20_000);
        assert!(none.total <= with.total, "{}", base.label);
        assert_eq!(none.recording, 0.0);
    }
}
