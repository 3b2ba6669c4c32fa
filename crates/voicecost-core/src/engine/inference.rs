//! Direct-provider inference pricing (self-hosted and Pipecat BYOP paths).
//!
//! Handles the Cartesia shared credit pool, the ElevenLabs subscription
//! ladder, and the Deepgram commitment-plan choice; everything else is a
//! flat per-unit rate.

use tracing::debug;

use super::tier::optimize_tier;
use super::Tally;
use crate::pricing::plans::{CARTESIA_TIERS, DEEPGRAM_STT_PLANS, ELEVENLABS_TURBO_TIERS};
use crate::pricing::{self, ASSUMPTIONS};
use crate::types::{Category, StackConfig, Warning};
use crate::util::fmt_units;

pub(crate) struct InferenceCosts {
    pub stt: f64,
    pub llm: f64,
    pub tts: f64,
}

/// Price the cascaded STT/LLM/TTS stages at direct provider rates.
pub(crate) fn cascaded_direct(stack: &StackConfig, minutes: f64, t: &mut Tally) -> InferenceCosts {
    let llm = llm_direct(&stack.llm_model, minutes, t);

    let is_cartesia_stt = stack.stt_model == "cartesia-ink-whisper";
    let is_cartesia_tts = stack.tts_model == "cartesia-sonic-3";
    let is_elevenlabs_tts = stack.tts_model == "elevenlabs-turbo-v2.5";
    let is_deepgram_stt = stack.stt_model.starts_with("deepgram-");

    let mut stt = 0.0;
    let mut tts = 0.0;

    if is_cartesia_stt || is_cartesia_tts {
        // Cartesia meters STT seconds and TTS characters from one pool.
        let stt_minutes = minutes * ASSUMPTIONS.stt_duty_ratio;
        let stt_credits = if is_cartesia_stt { stt_minutes * 60.0 } else { 0.0 };
        let tts_chars = minutes * ASSUMPTIONS.tts_duty_ratio * ASSUMPTIONS.avg_chars_per_minute_tts;
        let tts_credits = if is_cartesia_tts { tts_chars } else { 0.0 };
        let total_credits = stt_credits + tts_credits;

        if total_credits > 0.0 {
            match optimize_tier(CARTESIA_TIERS, total_credits) {
                Some(choice) => {
                    let tier = choice.tier;
                    let overage_suffix = if choice.overage > 0.0 {
                        format!(
                            " + {} overage × ${}/credit",
                            fmt_units(choice.overage),
                            tier.overage_rate
                        )
                    } else {
                        String::new()
                    };

                    if is_cartesia_stt && is_cartesia_tts {
                        let stt_share = stt_credits / total_credits;
                        stt = choice.cost * stt_share;
                        tts = choice.cost * (1.0 - stt_share);
                        t.best_plan(Category::Stt, format!("Cartesia {}", tier.name));
                        t.best_plan(Category::Tts, format!("Cartesia {}", tier.name));

                        t.line(
                            Category::Stt,
                            format!("Cartesia Ink Whisper ({})", tier.name),
                            format!(
                                "{} of {} shared credits → {:.0}% of {} ${}/mo{}",
                                fmt_units(stt_credits),
                                fmt_units(total_credits),
                                stt_share * 100.0,
                                tier.name,
                                tier.monthly_fee,
                                overage_suffix
                            ),
                            stt,
                        );
                        t.line(
                            Category::Tts,
                            format!("Cartesia Sonic 3 ({})", tier.name),
                            format!(
                                "{} of {} shared credits → {:.0}% of {} ${}/mo{}",
                                fmt_units(tts_credits),
                                fmt_units(total_credits),
                                (1.0 - stt_share) * 100.0,
                                tier.name,
                                tier.monthly_fee,
                                overage_suffix
                            ),
                            tts,
                        );
                    } else if is_cartesia_stt {
                        stt = choice.cost;
                        t.best_plan(Category::Stt, format!("Cartesia {}", tier.name));
                        t.line(
                            Category::Stt,
                            format!("Cartesia Ink Whisper ({})", tier.name),
                            format!(
                                "{} credits → {} ${}/mo ({} included){}",
                                fmt_units(stt_credits),
                                tier.name,
                                tier.monthly_fee,
                                fmt_units(tier.included_units),
                                overage_suffix
                            ),
                            stt,
                        );
                    } else {
                        tts = choice.cost;
                        t.best_plan(Category::Tts, format!("Cartesia {}", tier.name));
                        t.line(
                            Category::Tts,
                            format!("Cartesia Sonic 3 ({})", tier.name),
                            format!(
                                "{} credits → {} ${}/mo ({} included){}",
                                fmt_units(tts_credits),
                                tier.name,
                                tier.monthly_fee,
                                fmt_units(tier.included_units),
                                overage_suffix
                            ),
                            tts,
                        );
                    }
                }
                None => t.warn(Warning::NoFeasibleTier {
                    provider: "Cartesia".to_string(),
                    units_needed: total_credits,
                }),
            }
        }

        if !is_cartesia_stt {
            stt = if is_deepgram_stt {
                deepgram_stt(&stack.stt_model, minutes, t)
            } else {
                stt_flat_direct(&stack.stt_model, minutes, t)
            };
        }
        if !is_cartesia_tts {
            tts = if is_elevenlabs_tts {
                elevenlabs_tts(minutes, t)
            } else {
                tts_flat_direct(&stack.tts_model, minutes, t)
            };
        }
    } else {
        stt = if is_deepgram_stt {
            deepgram_stt(&stack.stt_model, minutes, t)
        } else {
            stt_flat_direct(&stack.stt_model, minutes, t)
        };
        tts = if is_elevenlabs_tts {
            elevenlabs_tts(minutes, t)
        } else {
            tts_flat_direct(&stack.tts_model, minutes, t)
        };
    }

    InferenceCosts { stt, llm, tts }
}

pub(crate) fn llm_direct(model: &str, minutes: f64, t: &mut Tally) -> f64 {
    let Some(rates) = pricing::direct_llm(model) else {
        t.missing_rate(Category::Llm, model);
        return 0.0;
    };
    let total_input = minutes * ASSUMPTIONS.avg_input_tokens_per_minute;
    let total_output = minutes * ASSUMPTIONS.avg_output_tokens_per_minute;
    let input_cost = (total_input / 1_000_000.0) * rates.input;
    let output_cost = (total_output / 1_000_000.0) * rates.output;
    let cost = input_cost + output_cost;
    t.line(
        Category::Llm,
        model,
        format!(
            "Input: {:.0}K tok × ${}/M + Output: {:.0}K × ${}/M (direct)",
            total_input / 1000.0,
            rates.input,
            total_output / 1000.0,
            rates.output
        ),
        cost,
    );
    cost
}

fn stt_flat_direct(model: &str, minutes: f64, t: &mut Tally) -> f64 {
    let Some(rate) = pricing::direct_stt(model) else {
        t.missing_rate(Category::Stt, model);
        return 0.0;
    };
    let stt_minutes = minutes * ASSUMPTIONS.stt_duty_ratio;
    let cost = stt_minutes * rate;
    t.line(
        Category::Stt,
        model,
        format!(
            "{:.0} min × {:.0}% duty × ${}/min (direct)",
            minutes,
            ASSUMPTIONS.stt_duty_ratio * 100.0,
            rate
        ),
        cost,
    );
    cost
}

fn tts_flat_direct(model: &str, minutes: f64, t: &mut Tally) -> f64 {
    let Some(rate) = pricing::direct_tts(model) else {
        t.missing_rate(Category::Tts, model);
        return 0.0;
    };
    let tts_minutes = minutes * ASSUMPTIONS.tts_duty_ratio;
    let total_chars = tts_minutes * ASSUMPTIONS.avg_chars_per_minute_tts;
    let cost = (total_chars / 1_000_000.0) * rate;
    t.line(
        Category::Tts,
        model,
        format!(
            "{:.0} min × {:.0}% duty × {:.0} chars/min ÷ 1M × ${}/M chars (direct)",
            minutes,
            ASSUMPTIONS.tts_duty_ratio * 100.0,
            ASSUMPTIONS.avg_chars_per_minute_tts,
            rate
        ),
        cost,
    );
    cost
}

/// ElevenLabs Turbo TTS through the subscription ladder.
pub(crate) fn elevenlabs_tts(minutes: f64, t: &mut Tally) -> f64 {
    let tts_minutes = minutes * ASSUMPTIONS.tts_duty_ratio;
    let total_chars = tts_minutes * ASSUMPTIONS.avg_chars_per_minute_tts;

    let Some(choice) = optimize_tier(ELEVENLABS_TURBO_TIERS, total_chars) else {
        t.warn(Warning::NoFeasibleTier {
            provider: "ElevenLabs".to_string(),
            units_needed: total_chars,
        });
        return 0.0;
    };

    let tier = choice.tier;
    t.best_plan(Category::Tts, format!("ElevenLabs {}", tier.name));

    let mut formula = format!(
        "{} chars → {} ${}/mo ({} included)",
        fmt_units(total_chars),
        tier.name,
        tier.monthly_fee,
        fmt_units(tier.included_units)
    );
    if choice.overage > 0.0 {
        formula.push_str(&format!(
            " + {} overage × ${}/char",
            fmt_units(choice.overage),
            tier.overage_rate
        ));
    }

    t.line(
        Category::Tts,
        format!("ElevenLabs Turbo v2.5 ({})", tier.name),
        formula,
        choice.cost,
    );
    choice.cost
}

/// Deepgram STT: Pay As You Go vs Growth ($4K/yr commitment).
///
/// Each plan's cost is max(usage at that plan's rate, monthly spend floor);
/// the cheaper plan wins.
pub(crate) fn deepgram_stt(model: &str, minutes: f64, t: &mut Tally) -> f64 {
    let stt_minutes = minutes * ASSUMPTIONS.stt_duty_ratio;

    let mut best: Option<(&'static crate::pricing::plans::DeepgramSttPlan, f64, f64)> = None;
    for plan in DEEPGRAM_STT_PLANS {
        let Some(rate) = plan.rate_for(model) else { continue };
        let usage_cost = stt_minutes * rate;
        let monthly_min = plan.min_annual_commitment / 12.0;
        let cost = monthly_min.max(usage_cost);
        if best.map_or(true, |(_, _, c)| cost < c) {
            best = Some((plan, rate, cost));
        }
    }

    let Some((plan, rate, best_cost)) = best else {
        t.missing_rate(Category::Stt, model);
        return 0.0;
    };
    let plan_name = plan.name;
    debug!(plan = plan_name, cost = best_cost, "deepgram plan selected");
    t.best_plan(Category::Stt, format!("Deepgram {}", plan_name));

    let usage_cost = stt_minutes * rate;
    let monthly_min = plan.min_annual_commitment / 12.0;
    let hits_minimum = plan.min_annual_commitment > 0.0 && usage_cost < monthly_min;

    let formula = if hits_minimum {
        format!(
            "{:.0} min × {:.0}% duty × ${}/min = ${:.2}, but {} min ${:.0}/mo (${:.0}K/yr) (direct)",
            minutes,
            ASSUMPTIONS.stt_duty_ratio * 100.0,
            rate,
            usage_cost,
            plan_name,
            monthly_min,
            plan.min_annual_commitment / 1000.0
        )
    } else {
        format!(
            "{:.0} min × {:.0}% duty × ${}/min (Deepgram {}) (direct)",
            minutes,
            ASSUMPTIONS.stt_duty_ratio * 100.0,
            rate,
            plan_name
        )
    };

    t.line(
        Category::Stt,
        format!("{} (Deepgram {})", model, plan_name),
        formula,
        best_cost,
    );
    best_cost
}

/// A unified speech-to-speech model at direct per-minute rates; replaces
/// the three cascaded stages and is reported under the LLM subtotal.
pub(crate) fn s2s_direct(model: &str, minutes: f64, t: &mut Tally) -> f64 {
    let Some(rate) = pricing::direct_s2s(model) else {
        t.missing_rate(Category::S2sModel, model);
        return 0.0;
    };
    let cost = minutes * rate.per_minute;
    t.line(
        Category::S2sModel,
        model,
        format!("{:.0} min × ${}/min", minutes, rate.per_minute),
        cost,
    );
    cost
}
