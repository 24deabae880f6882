//! Result structures for a calculation

use serde::{Deserialize, Serialize};

use crate::costs::{EffectiveParameters, MonthlyOpexBreakdown, StartupCostBreakdown};
use crate::strategy::AcquisitionStrategy;

/// One month of the cumulative cash-flow series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCashFlowPoint {
    /// 1-based month index
    pub month: u32,
    pub net_cash_flow: f64,
    pub cumulative: f64,
}

/// Annual amount for one expense category (chart feed)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    pub label: String,
    pub annual_amount: f64,
}

/// Annualized expense categories, zero-amount categories dropped
pub fn expense_categories(strategy: AcquisitionStrategy, opex: &MonthlyOpexBreakdown) -> Vec<ExpenseCategory> {
    let fixed_label = match strategy {
        AcquisitionStrategy::Buy => "Mortgage",
        AcquisitionStrategy::Sublease => "Rent",
    };

    [
        (fixed_label, opex.fixed_occupancy_cost()),
        ("Cleaning", opex.cleaning),
        ("Management", opex.management),
        ("Platform Fees", opex.platform),
        ("Electricity", opex.electricity),
        ("Water", opex.water),
        ("Internet", opex.internet),
        ("Entertainment", opex.entertainment),
        ("Maintenance", opex.maintenance),
    ]
    .into_iter()
    .filter(|(_, monthly)| *monthly > 0.0)
    .map(|(label, monthly)| ExpenseCategory {
        label: label.to_string(),
        annual_amount: monthly * 12.0,
    })
    .collect()
}

/// Complete output of one engine run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Parameters the numbers were computed from
    pub parameters: EffectiveParameters,

    pub startup_costs: StartupCostBreakdown,
    pub monthly_opex: MonthlyOpexBreakdown,

    pub initial_investment: f64,
    pub furnishing_cost: f64,

    pub monthly_revenue: f64,
    pub annual_revenue: f64,

    /// Rent or mortgage installment
    pub monthly_fixed_cost: f64,

    /// Net cash flow per month while the loan (if any) is outstanding
    pub monthly_cash_flow: f64,

    pub annual_expenses: f64,
    pub net_operating_income: f64,

    /// Percent; `None` when nothing was invested
    pub cash_on_cash_return: Option<f64>,

    /// Percent; buy only
    pub cap_rate: Option<f64>,

    /// `None` when the investment is never recovered within the horizon
    pub payback_period_months: Option<u32>,

    /// Months searched for payback
    pub horizon_months: u32,

    /// Last month with a mortgage installment; buy only
    pub loan_payoff_month: Option<u32>,

    pub monthly_breakdown: Vec<MonthlyCashFlowPoint>,
    pub expense_breakdown: Vec<ExpenseCategory>,
}

impl CalculationResult {
    pub fn strategy(&self) -> AcquisitionStrategy {
        self.parameters.strategy
    }

    pub fn is_cash_flow_positive(&self) -> bool {
        self.monthly_cash_flow > 0.0
    }

    /// Flat summary row for tables and CSV output
    pub fn summary(&self) -> ResultSummary {
        let p = &self.parameters;
        ResultSummary {
            region_id: p.region_id.clone(),
            unit_type: p.unit_type.label().to_string(),
            strategy: p.strategy.label().to_string(),
            furnishing: p.furnishing.label().to_string(),
            occupancy: p.occupancy,
            initial_investment: self.initial_investment,
            monthly_revenue: self.monthly_revenue,
            monthly_cash_flow: self.monthly_cash_flow,
            net_operating_income: self.net_operating_income,
            cash_on_cash_return: self.cash_on_cash_return,
            cap_rate: self.cap_rate,
            payback_period_months: self.payback_period_months,
        }
    }
}

/// Headline numbers of a result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub region_id: String,
    pub unit_type: String,
    pub strategy: String,
    pub furnishing: String,
    pub occupancy: f64,
    pub initial_investment: f64,
    pub monthly_revenue: f64,
    pub monthly_cash_flow: f64,
    pub net_operating_income: f64,
    pub cash_on_cash_return: Option<f64>,
    pub cap_rate: Option<f64>,
    pub payback_period_months: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_categories_drop_zero_rows() {
        let opex = MonthlyOpexBreakdown {
            rent: 75_000.0,
            cleaning: 10_000.0,
            internet: 3_000.0,
            platform: 4_000.0,
            ..Default::default()
        };
        let categories = expense_categories(AcquisitionStrategy::Sublease, &opex);
        let labels: Vec<&str> = categories.iter().map(|c| c.label.as_str()).collect();

        assert_eq!(labels, vec!["Rent", "Cleaning", "Platform Fees", "Internet"]);
        assert_eq!(categories[0].annual_amount, 900_000.0);
    }

    #[test]
    fn test_buy_labels_mortgage() {
        let opex = MonthlyOpexBreakdown {
            mortgage: 50_000.0,
            ..Default::default()
        };
        let categories = expense_categories(AcquisitionStrategy::Buy, &opex);
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].label, "Mortgage");
    }
}
