//! STR ROI Engine CLI
//!
//! Command-line interface for running a single investment calculation

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use str_roi_engine::insight::format_amount;
use str_roi_engine::projection::EngineConfig;
use str_roi_engine::{
    generate_insight, AcquisitionStrategy, Assumptions, FurnishingTier, MarketBaselineProvider,
    MarketTable, Overrides, RoiEngine, StrategyInputs, UnitType, ValidationMode,
};

#[derive(Parser)]
#[command(name = "str_roi_engine")]
#[command(about = "Estimate returns for a short-term-rental buy or sublease strategy")]
struct Cli {
    /// Region id (e.g. nbo-westlands)
    #[arg(short, long, default_value = "nbo-westlands")]
    region: String,

    /// Unit type: studio, 1br, 2br, 3br
    #[arg(short, long, default_value = "1br")]
    unit: UnitType,

    /// Acquisition strategy: buy or sublease
    #[arg(short, long, default_value = "sublease")]
    strategy: AcquisitionStrategy,

    /// Furnishing tier: budget, mid, premium
    #[arg(short, long, default_value = "mid")]
    furnishing: FurnishingTier,

    /// Occupancy override (0-1)
    #[arg(long)]
    occupancy: Option<f64>,

    /// Nightly rate override
    #[arg(long)]
    nightly_rate: Option<f64>,

    /// Monthly rent override (sublease)
    #[arg(long)]
    monthly_rent: Option<f64>,

    /// Purchase price override (buy)
    #[arg(long)]
    purchase_price: Option<f64>,

    /// Down payment in percent (buy)
    #[arg(long)]
    down_payment: Option<f64>,

    /// Annual interest rate in percent (buy)
    #[arg(long)]
    interest_rate: Option<f64>,

    /// Loan term in years (buy)
    #[arg(long)]
    loan_term: Option<u32>,

    /// Management fee in percent of gross revenue
    #[arg(long)]
    management_fee: Option<f64>,

    /// Market profiles CSV (defaults to the built-in table)
    #[arg(long)]
    markets: Option<PathBuf>,

    /// Cost assumptions JSON (defaults to built-in values)
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Clamp out-of-range occupancy and percentages instead of rejecting them
    #[arg(long)]
    clamp: bool,

    /// Where to write the monthly cash-flow CSV
    #[arg(short, long, default_value = "cashflow_output.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    println!("STR ROI Engine v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");

    let markets = match &cli.markets {
        Some(path) => MarketTable::from_csv_path(path)
            .with_context(|| format!("loading markets from {}", path.display()))?,
        None => MarketTable::default_kenya(),
    };
    let assumptions = match &cli.assumptions {
        Some(path) => Assumptions::from_json_path(path)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => Assumptions::default_kenya(),
    };
    let config = EngineConfig {
        validation: if cli.clamp { ValidationMode::Clamp } else { ValidationMode::Strict },
        ..Default::default()
    };

    let inputs = StrategyInputs::new(cli.region.clone(), cli.unit, cli.strategy, cli.furnishing).with_overrides(
        Overrides {
            occupancy: cli.occupancy,
            nightly_rate: cli.nightly_rate,
            monthly_rent: cli.monthly_rent,
            purchase_price: cli.purchase_price,
            down_payment_percent: cli.down_payment,
            interest_rate_percent: cli.interest_rate,
            loan_term_years: cli.loan_term,
            management_fee_percent: cli.management_fee,
            ..Default::default()
        },
    );

    let profile = markets.profile(&inputs.region_id).with_context(|| {
        let known: Vec<&str> = markets.region_ids().collect();
        format!("unknown region '{}' (known: {})", inputs.region_id, known.join(", "))
    })?;

    let engine = RoiEngine::new(assumptions, config);
    let result = engine.calculate(&inputs, profile)?;
    let p = &result.parameters;

    println!("Scenario: {} / {} / {} in {}", p.unit_type, p.strategy, p.furnishing, profile.name);
    println!("  Occupancy: {:.0}%", p.occupancy * 100.0);
    println!("  Nightly Rate: {}", format_amount(p.nightly_rate));
    println!();

    let s = &result.startup_costs;
    println!("Startup Costs:");
    println!("  Furnishing:      {:>14}", format_amount(s.furnishing));
    println!("  Acquisition:     {:>14}", format_amount(s.acquisition));
    println!("  Legal / Admin:   {:>14}", format_amount(s.legal_admin));
    println!("  Utility Deposit: {:>14}", format_amount(s.utility_deposit));
    println!("  Fixtures:        {:>14}", format_amount(s.fixtures));
    println!("  Total:           {:>14}", format_amount(s.total));
    println!();

    println!("Monthly:");
    println!("  Revenue:   {:>14}", format_amount(result.monthly_revenue));
    for category in &result.expense_breakdown {
        println!("  {:<10} {:>14}", category.label, format_amount(category.annual_amount / 12.0));
    }
    println!("  Cash Flow: {:>14}", format_amount(result.monthly_cash_flow));
    println!();

    println!("Yield:");
    println!("  NOI:               {}", format_amount(result.net_operating_income));
    match result.cash_on_cash_return {
        Some(coc) => println!("  Cash-on-Cash:      {:.1}%", coc),
        None => println!("  Cash-on-Cash:      n/a"),
    }
    match result.cap_rate {
        Some(cap) => println!("  Cap Rate:          {:.1}%", cap),
        None => println!("  Cap Rate:          n/a"),
    }
    match result.payback_period_months {
        Some(months) => println!("  Payback:           {} months ({:.1} years)", months, months as f64 / 12.0),
        None => println!("  Payback:           not reached"),
    }
    println!();

    println!("{:>5} {:>14} {:>16}", "Month", "Net", "Cumulative");
    println!("{}", "-".repeat(37));
    for point in result.monthly_breakdown.iter().take(24) {
        println!(
            "{:>5} {:>14} {:>16}",
            point.month,
            format_amount(point.net_cash_flow),
            format_amount(point.cumulative)
        );
    }
    if result.monthly_breakdown.len() > 24 {
        println!("... ({} more months)", result.monthly_breakdown.len() - 24);
    }

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    for point in &result.monthly_breakdown {
        writer.serialize(point)?;
    }
    writer.flush()?;
    println!("\nFull cash-flow series written to: {}", cli.output.display());

    let insight = generate_insight(&result, &profile.name);
    println!("\n{} [{:?}]", insight.headline, insight.sentiment);
    for point in &insight.points {
        println!("  - {}", point.text);
    }

    println!("\nGenerated {}", chrono::Local::now().format("%Y-%m-%d %H:%M"));
    Ok(())
}
