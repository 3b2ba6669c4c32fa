//! The cost engine: one pure pass from a stack configuration and a monthly
//! minute volume to a full `CostBreakdown`.

mod capacity;
mod inference;
mod plan;
mod platform;
mod tier;

pub use capacity::{optimal_reserved, self_hosted_nodes, NodePlan};
pub use tier::{optimize_tier, TierChoice};

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::compat::check_support;
use crate::sources::resolve_source_url;
use crate::types::{
    Category, CostBreakdown, CostDetail, CostPoint, Hosting, Pipeline, Platform, StackConfig,
    Warning,
};

/// Accumulator threaded through the calculators: detail lines in emission
/// order, warnings, and optimizer plan choices.
pub(crate) struct Tally {
    pub details: Vec<CostDetail>,
    pub warnings: Vec<Warning>,
    pub best_plans: BTreeMap<String, String>,
}

impl Tally {
    pub fn new() -> Self {
        Tally {
            details: Vec::new(),
            warnings: Vec::new(),
            best_plans: BTreeMap::new(),
        }
    }

    pub fn line(
        &mut self,
        category: Category,
        label: impl Into<String>,
        formula: impl Into<String>,
        amount: f64,
    ) {
        self.details.push(CostDetail {
            category,
            label: label.into(),
            formula: formula.into(),
            amount,
            source_url: None,
        });
    }

    pub fn warn(&mut self, warning: Warning) {
        warn!(%warning, "pricing warning");
        self.warnings.push(warning);
    }

    pub fn missing_rate(&mut self, category: Category, model: &str) {
        self.warn(Warning::MissingRate {
            category,
            model: model.to_string(),
        });
    }

    pub fn best_plan(&mut self, category: Category, plan: impl Into<String>) {
        self.best_plans.insert(category.to_string(), plan.into());
    }
}

/// Price one stack at the given monthly session-minute volume.
///
/// Structurally disallowed combinations return an unsupported breakdown;
/// everything else yields subtotals per category, ordered detail lines
/// with resolved source URLs, optimizer choices, and any warnings.
pub fn compute(stack: &StackConfig, monthly_minutes: u64) -> CostBreakdown {
    if let Some(reason) = check_support(stack) {
        debug!(stack = %stack.label, %reason, "unsupported configuration");
        return CostBreakdown::unsupported(reason);
    }

    let minutes = monthly_minutes as f64;
    let is_s2s = stack.pipeline == Pipeline::SpeechToSpeech;
    let mut t = Tally::new();

    let mut platform_cost = 0.0;
    let mut transport = 0.0;
    let mut stt = 0.0;
    let mut llm = 0.0;
    let mut tts = 0.0;
    let mut recording = 0.0;

    match (stack.platform, stack.hosting) {
        (Platform::Livekit, Hosting::Cloud) => {
            // The plan optimizer owns inference and recording here: both
            // depend on which plan wins.
            let r = plan::livekit_cloud(stack, minutes, is_s2s, &mut t);
            platform_cost = r.platform;
            transport = r.transport;
            recording = r.recording;
            stt = r.stt;
            llm = r.llm;
            tts = r.tts;
        }
        (Platform::Pipecat, Hosting::Cloud) => {
            platform_cost = platform::pipecat_cloud_platform(minutes, &mut t);
            t.line(
                Category::Transport,
                "Daily WebRTC Voice (1:1 free)",
                "Free on Pipecat Cloud",
                0.0,
            );
            if is_s2s {
                llm = inference::s2s_direct(&stack.speech_to_speech_model, minutes, &mut t);
            } else {
                let inf = inference::cascaded_direct(stack, minutes, &mut t);
                stt = inf.stt;
                llm = inf.llm;
                tts = inf.tts;
            }
        }
        (Platform::Pipecat, Hosting::SelfHosted) => {
            platform_cost = platform::azure_hosting(minutes, &mut t);
            transport = platform::daily_transport(minutes, stack.call_mode, &mut t);
            if is_s2s {
                llm = inference::s2s_direct(&stack.speech_to_speech_model, minutes, &mut t);
            } else {
                let inf = inference::cascaded_direct(stack, minutes, &mut t);
                stt = inf.stt;
                llm = inf.llm;
                tts = inf.tts;
            }
        }
        (Platform::Livekit, Hosting::SelfHosted) => {
            platform_cost = platform::azure_hosting(minutes, &mut t);
            // Open-source server rides the same Azure compute.
            t.line(
                Category::Transport,
                "LiveKit Server (self-hosted)",
                "Included in Azure compute",
                0.0,
            );
            if is_s2s {
                llm = inference::s2s_direct(&stack.speech_to_speech_model, minutes, &mut t);
            } else {
                let inf = inference::cascaded_direct(stack, minutes, &mut t);
                stt = inf.stt;
                llm = inf.llm;
                tts = inf.tts;
            }
        }
    }

    let noise_cancellation = platform::noise_cancellation(stack, minutes, &mut t);

    if !(stack.platform == Platform::Livekit && stack.hosting == Hosting::Cloud) {
        recording = platform::recording(stack, minutes, &mut t);
    }

    let total = platform_cost + transport + noise_cancellation + stt + llm + tts + recording;

    let Tally {
        mut details,
        warnings,
        best_plans,
    } = t;
    for detail in &mut details {
        if detail.source_url.is_none() {
            detail.source_url = resolve_source_url(detail);
        }
    }

    CostBreakdown {
        platform: platform_cost,
        transport,
        noise_cancellation,
        stt,
        llm,
        tts,
        recording,
        total,
        details,
        best_plans,
        warnings,
        supported: true,
        unsupported_reason: None,
    }
}

/// Sample the cost curve at each of the given volumes.
pub fn generate_series(stack: &StackConfig, volumes: &[u64]) -> Vec<CostPoint> {
    volumes
        .iter()
        .map(|&minutes| CostPoint {
            minutes,
            cost: compute(stack, minutes).total,
        })
        .collect()
}

const BASE_CHART_TICKS: &[u64] = &[
    0, 500, 1_000, 2_000, 5_000, 10_000, 20_000, 50_000, 75_000, 100_000,
];

/// Volume ticks for a cost-vs-volume chart: a fixed base ladder up to 100K
/// minutes, extended with round candidates up to 1.2x the requested max.
pub fn chart_ticks(max_minutes: u64) -> Vec<u64> {
    if max_minutes <= 100_000 {
        return BASE_CHART_TICKS.to_vec();
    }

    let ceiling = max_minutes as f64 * 1.2;
    const CANDIDATES: &[u64] = &[
        150_000, 200_000, 300_000, 500_000, 750_000, 1_000_000, 1_500_000, 2_000_000, 3_000_000,
        5_000_000, 10_000_000,
    ];
    let mut extra: Vec<u64> = CANDIDATES
        .iter()
        .copied()
        .filter(|&tick| tick as f64 <= ceiling)
        .collect();
    if extra.last().map_or(true, |&last| last < max_minutes) {
        extra.push(max_minutes.div_ceil(50_000) * 50_000);
    }

    let mut ticks = BASE_CHART_TICKS.to_vec();
    ticks.extend(extra);
    ticks
}

/// Cost curve sampled at the chart ticks for `max_minutes`.
pub fn generate_chart_series(stack: &StackConfig, max_minutes: u64) -> Vec<CostPoint> {
    generate_series(stack, &chart_ticks(max_minutes))
}
