//! Plain-language reading of a calculation result: headline, sentiment and
//! three supporting points

use serde::{Deserialize, Serialize};

use crate::projection::CalculationResult;
use crate::strategy::AcquisitionStrategy;

/// Payback beyond this is treated as a long-term equity play
const LONG_PAYBACK_MONTHS: u32 = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Caution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightIcon {
    TrendingUp,
    Wallet,
    Alert,
    Check,
    Lightbulb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightPoint {
    pub icon: InsightIcon,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub headline: String,
    pub sentiment: Sentiment,
    pub points: Vec<InsightPoint>,
}

fn point(icon: InsightIcon, text: String) -> InsightPoint {
    InsightPoint { icon, text }
}

/// Format an amount with thousands separators and no decimals
pub fn format_amount(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// "30 years", "1 year", "18 months"
fn describe_span(months: u32) -> String {
    match (months / 12, months % 12) {
        (1, 0) => "1 year".to_string(),
        (years, 0) if years > 0 => format!("{} years", years),
        _ => format!("{} months", months),
    }
}

pub fn generate_insight(result: &CalculationResult, region_name: &str) -> Insight {
    let params = &result.parameters;
    let unit = params.unit_type.label();
    let cash_flow = result.monthly_cash_flow;
    let roi = result.cash_on_cash_return.unwrap_or(0.0);
    let occupancy_pct = params.occupancy * 100.0;

    let (sentiment, headline) = if cash_flow < 0.0 {
        (Sentiment::Caution, "Caution: Negative Cash Flow Projected".to_string())
    } else if roi > 20.0 {
        (Sentiment::Positive, format!("High-Yield Opportunity Detected in {}", region_name))
    } else if roi > 10.0 {
        (Sentiment::Positive, format!("Solid Investment Case for {}", unit))
    } else {
        (Sentiment::Neutral, format!("Moderate Returns for this {}", unit))
    };

    let mut points = Vec::with_capacity(3);

    // Cash flow and return
    points.push(if cash_flow < 0.0 {
        point(
            InsightIcon::Alert,
            format!(
                "Negative monthly cash flow of {}. You will need to top up expenses.",
                format_amount(cash_flow.abs())
            ),
        )
    } else if roi > 25.0 {
        point(
            InsightIcon::TrendingUp,
            format!("Exceptional {:.1}% cash-on-cash return, well above typical market yields.", roi),
        )
    } else {
        point(
            InsightIcon::Wallet,
            format!("Generates {} in monthly net income.", format_amount(cash_flow)),
        )
    });

    // Recovery of the initial outlay
    points.push(match (params.strategy, result.payback_period_months) {
        (AcquisitionStrategy::Buy, Some(months)) if months <= LONG_PAYBACK_MONTHS => point(
            InsightIcon::Check,
            format!("Full capital recovery estimated in {:.1} years via cash flow alone.", months as f64 / 12.0),
        ),
        (AcquisitionStrategy::Buy, Some(months)) => point(
            InsightIcon::Lightbulb,
            format!(
                "Long payback period of {:.1} years. Treat this as a long-term equity play rather than a cash cow.",
                months as f64 / 12.0
            ),
        ),
        (AcquisitionStrategy::Buy, None) => point(
            InsightIcon::Alert,
            format!(
                "Cash flow alone does not recover the initial investment within {}.",
                describe_span(result.horizon_months)
            ),
        ),
        (AcquisitionStrategy::Sublease, Some(months)) => point(
            InsightIcon::Check,
            format!("Breakeven projected at {} months. Low capital risk.", months),
        ),
        (AcquisitionStrategy::Sublease, None) => point(
            InsightIcon::Alert,
            "At current rates, you may not recover your initial furnishing costs.".to_string(),
        ),
    });

    // Occupancy assumption
    points.push(if params.occupancy < 0.5 {
        point(
            InsightIcon::Alert,
            format!(
                "Low occupancy assumption ({:.0}%) significantly impacts viability. Ensure marketing is strong.",
                occupancy_pct
            ),
        )
    } else if roi > 15.0 && params.occupancy > 0.75 {
        point(
            InsightIcon::Lightbulb,
            format!(
                "High occupancy ({:.0}%) is driving these returns. Verify demand in {}.",
                occupancy_pct, region_name
            ),
        )
    } else {
        point(
            InsightIcon::Lightbulb,
            format!(
                "Strategy assumes stable {:.0}% occupancy amidst {} market conditions.",
                occupancy_pct, region_name
            ),
        )
    });

    Insight {
        headline,
        sentiment,
        points,
    }
}
