//! Run every scenario in a scenarios CSV and write one summary row per scenario
//!
//! Usage: cargo run --bin run_batch -- [scenarios.csv] [--output batch_summary.csv]

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use str_roi_engine::strategy::{load_scenarios, loader::DEFAULT_SCENARIOS_PATH};
use str_roi_engine::{Assumptions, MarketTable, ScenarioRunner};

#[derive(Parser)]
#[command(name = "run_batch")]
#[command(about = "Run a batch of STR investment scenarios in parallel")]
struct Args {
    /// Scenarios CSV
    #[arg(default_value = DEFAULT_SCENARIOS_PATH)]
    scenarios: PathBuf,

    /// Market profiles CSV (defaults to the built-in table)
    #[arg(long)]
    markets: Option<PathBuf>,

    /// Cost assumptions JSON
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Summary CSV path
    #[arg(short, long, default_value = "batch_summary.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading scenarios from {}...", args.scenarios.display());
    let scenarios = load_scenarios(&args.scenarios)
        .with_context(|| format!("loading scenarios from {}", args.scenarios.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let markets = match &args.markets {
        Some(path) => MarketTable::from_csv_path(path)?,
        None => MarketTable::default_kenya(),
    };
    let assumptions = match &args.assumptions {
        Some(path) => Assumptions::from_json_path(path)?,
        None => Assumptions::default_kenya(),
    };
    let runner = ScenarioRunner::with_assumptions(assumptions, markets);

    println!("Running scenarios...");
    let run_start = Instant::now();
    let results = runner.run_batch(&scenarios);
    println!("Scenarios complete in {:?}", run_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut failures = 0;

    for (index, (inputs, result)) in scenarios.iter().zip(&results).enumerate() {
        match result {
            Ok(result) => writer.serialize(result.summary())?,
            Err(err) => {
                failures += 1;
                eprintln!("  Scenario {} ({} / {}): {}", index + 1, inputs.region_id, inputs.unit_type, err);
            }
        }
    }
    writer.flush()?;

    println!("\nBatch Summary ({}):", chrono::Local::now().format("%Y-%m-%d %H:%M"));
    println!("  Succeeded: {}", results.len() - failures);
    println!("  Failed:    {}", failures);

    let best = results
        .iter()
        .filter_map(|r| r.as_ref().ok())
        .filter_map(|r| r.cash_on_cash_return.map(|coc| (coc, r)))
        .max_by(|a, b| a.0.total_cmp(&b.0));
    if let Some((coc, result)) = best {
        let p = &result.parameters;
        println!(
            "  Best cash-on-cash: {:.1}% ({} {} in {})",
            coc, p.unit_type, p.strategy, p.region_id
        );
    }

    println!("Output written to {}", args.output.display());
    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
