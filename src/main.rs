use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use voicecost_core::config::{self, DEFAULT_MONTHLY_MINUTES};
use voicecost_core::engine;
use voicecost_core::pricing::{self, ASSUMPTIONS};
use voicecost_core::types::StackConfig;
use voicecost_core::util::{fmt_thousands, to_money};

#[derive(Parser)]
#[command(
    name = "voicecost",
    about = "Monthly cost estimates for voice-agent deployment stacks",
    version = voicecost_core::VERSION,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare monthly cost across stacks at one volume
    Compare {
        /// Monthly session minutes
        #[arg(short, long, default_value_t = DEFAULT_MONTHLY_MINUTES)]
        minutes: u64,
        /// JSON file with stack definitions (defaults to the built-in four)
        #[arg(short, long)]
        stacks: Option<PathBuf>,
        /// Show the per-line breakdown for each stack
        #[arg(short, long)]
        details: bool,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Cost-vs-volume curve for each stack
    Series {
        /// Maximum monthly minutes on the curve
        #[arg(short, long, default_value_t = 100_000)]
        max: u64,
        /// JSON file with stack definitions (defaults to the built-in four)
        #[arg(short, long)]
        stacks: Option<PathBuf>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the usage assumptions and pricing sources behind the estimates
    Assumptions,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("voicecost=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare { minutes, stacks, details, json } => {
            cmd_compare(minutes, stacks, details, json)?
        }
        Commands::Series { max, stacks, json } => cmd_series(max, stacks, json)?,
        Commands::Assumptions => cmd_assumptions(),
    }

    Ok(())
}

fn load_stacks(path: Option<PathBuf>) -> Result<Vec<StackConfig>> {
    match path {
        Some(p) => Ok(config::load_stacks(&p)?),
        None => Ok(config::default_stacks()),
    }
}

fn cmd_compare(minutes: u64, stacks: Option<PathBuf>, details: bool, json: bool) -> Result<()> {
    let stacks = load_stacks(stacks)?;
    let results: Vec<_> = stacks
        .iter()
        .map(|stack| (stack, engine::compute(stack, minutes)))
        .collect();

    if json {
        let payload: Vec<_> = results
            .iter()
            .map(|(stack, b)| {
                serde_json::json!({ "id": stack.id, "label": stack.label, "breakdown": b })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!(
        "Monthly cost at {} session minutes\n",
        fmt_thousands(minutes)
    );
    println!(
        "  {:<20} {:>10} {:>10} {:>8} {:>8} {:>8} {:>8} {:>10} {:>12}",
        "Stack", "Platform", "Transport", "NC", "STT", "LLM", "TTS", "Recording", "Total"
    );
    println!("  {}", "-".repeat(100));

    for (stack, b) in &results {
        if !b.supported {
            println!(
                "  {:<20} unsupported: {}",
                stack.label,
                b.unsupported_reason.as_deref().unwrap_or("")
            );
            continue;
        }
        println!(
            "  {:<20} {:>10.2} {:>10.2} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>10.2} {:>12.2}",
            stack.label,
            to_money(b.platform),
            to_money(b.transport),
            to_money(b.noise_cancellation),
            to_money(b.stt),
            to_money(b.llm),
            to_money(b.tts),
            to_money(b.recording),
            to_money(b.total),
        );
    }

    for (stack, b) in &results {
        if !b.best_plans.is_empty() {
            let plans: Vec<String> = b
                .best_plans
                .iter()
                .map(|(category, plan)| format!("{}: {}", category, plan))
                .collect();
            println!("\n  {} plans — {}", stack.label, plans.join(", "));
        }
        for warning in &b.warnings {
            println!("  warning ({}): {}", stack.label, warning);
        }
    }

    if details {
        for (stack, b) in &results {
            if !b.supported {
                continue;
            }
            println!("\n{}", stack.label);
            for d in &b.details {
                println!(
                    "  {:<18} {:<38} {:>10.2}   {}",
                    d.category.to_string(),
                    d.label,
                    to_money(d.amount),
                    d.formula
                );
            }
        }
    }

    Ok(())
}

fn cmd_series(max: u64, stacks: Option<PathBuf>, json: bool) -> Result<()> {
    let mut stacks = load_stacks(stacks)?;
    stacks.retain(|s| s.visible);
    let ticks = engine::chart_ticks(max);

    if json {
        let payload: Vec<_> = stacks
            .iter()
            .map(|stack| {
                serde_json::json!({
                    "id": stack.id,
                    "label": stack.label,
                    "points": engine::generate_series(stack, &ticks),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    print!("  {:>12}", "Minutes");
    for stack in &stacks {
        print!(" {:>20}", stack.label);
    }
    println!();
    println!("  {}", "-".repeat(12 + stacks.len() * 21));

    let series: Vec<_> = stacks
        .iter()
        .map(|stack| engine::generate_series(stack, &ticks))
        .collect();
    for (row, &minutes) in ticks.iter().enumerate() {
        print!("  {:>12}", fmt_thousands(minutes));
        for points in &series {
            print!(" {:>20.2}", to_money(points[row].cost));
        }
        println!();
    }

    Ok(())
}

fn cmd_assumptions() {
    println!("Usage assumptions\n");
    println!("  STT duty cycle:        {:.0}% of session time", ASSUMPTIONS.stt_duty_ratio * 100.0);
    println!("  TTS duty cycle:        {:.0}% of session time", ASSUMPTIONS.tts_duty_ratio * 100.0);
    println!("  TTS output:            {:.0} chars per active minute", ASSUMPTIONS.avg_chars_per_minute_tts);
    println!("  LLM input tokens:      {:.0} per session minute", ASSUMPTIONS.avg_input_tokens_per_minute);
    println!("  LLM output tokens:     {:.0} per session minute", ASSUMPTIONS.avg_output_tokens_per_minute);
    println!("  Prompt cache hit rate: {:.0}%", ASSUMPTIONS.cache_hit_rate * 100.0);
    println!("  Downstream media:      {} MB per minute", ASSUMPTIONS.avg_downstream_mb_per_minute);
    println!("  Session length:        {:.0} minutes", ASSUMPTIONS.avg_session_minutes);
    println!("  Peak-to-average ratio: {:.0}x", ASSUMPTIONS.peak_to_avg_ratio);

    println!("\nPricing sources\n");
    for meta in pricing::meta::PRICING_META {
        println!("  {} (verified {})", meta.provider, meta.last_verified_at);
        for url in meta.source_urls {
            println!("    {}", url);
        }
        for note in meta.assumptions {
            println!("    - {}", note);
        }
    }

    println!("\nPlan restrictions\n");
    for r in pricing::meta::RESTRICTIONS {
        match r.plan {
            Some(plan) => println!("  {} {}: {}", r.platform, plan, r.note),
            None => println!("  {}: {}", r.platform, r.note),
        }
    }
}
