//! Yield metrics: NOI, cash-on-cash return, cap rate and payback

use serde::{Deserialize, Serialize};

use super::simulator::CashFlowSimulation;
use crate::costs::{EffectiveParameters, MonthlyOpexBreakdown};
use crate::strategy::AcquisitionStrategy;

/// Summary ratios derived from the cost models and the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldMetrics {
    pub annual_revenue: f64,

    /// Recurring opex x 12, debt service included for a purchase
    pub annual_expenses: f64,

    pub net_operating_income: f64,
    pub monthly_cash_flow: f64,
    pub cash_on_cash_return: Option<f64>,
    pub cap_rate: Option<f64>,
    pub payback_period_months: Option<u32>,
}

/// `numerator / denominator * 100`, or `None` when the denominator is not positive
fn percent_of(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator > 0.0 {
        Some(numerator / denominator * 100.0).filter(|v| v.is_finite())
    } else {
        None
    }
}

pub fn yield_metrics(
    params: &EffectiveParameters,
    monthly_revenue: f64,
    opex: &MonthlyOpexBreakdown,
    initial_investment: f64,
    simulation: &CashFlowSimulation,
) -> YieldMetrics {
    let annual_revenue = monthly_revenue * 12.0;
    let annual_expenses = opex.total() * 12.0;
    let net_operating_income = annual_revenue - annual_expenses;

    // First-year cash pocketed equals NOI: debt service is already in opex
    let cash_on_cash_return = percent_of(net_operating_income, initial_investment);

    // Cap rate is unleveraged: add debt service back before dividing by price
    let cap_rate = match params.strategy {
        AcquisitionStrategy::Buy => {
            let unleveraged_noi = net_operating_income + opex.mortgage * 12.0;
            percent_of(unleveraged_noi, params.purchase_price)
        }
        AcquisitionStrategy::Sublease => None,
    };

    YieldMetrics {
        annual_revenue,
        annual_expenses,
        net_operating_income,
        monthly_cash_flow: net_operating_income / 12.0,
        cash_on_cash_return,
        cap_rate,
        payback_period_months: simulation.payback_month,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::Assumptions;
    use crate::costs::{
        estimate_startup_costs, gross_monthly_revenue, monthly_debt_service, monthly_operating_expenses,
        resolve,
    };
    use crate::market::RegionMarketProfile;
    use crate::projection::{CashFlowSimulator, SimulationInputs};
    use crate::strategy::{FurnishingTier, Overrides, StrategyInputs, UnitType};
    use approx::assert_relative_eq;

    fn metrics_for(
        strategy: AcquisitionStrategy,
        overrides: Overrides,
    ) -> (EffectiveParameters, MonthlyOpexBreakdown, f64, YieldMetrics) {
        let inputs = StrategyInputs::new("nbo-westlands", UnitType::OneBedroom, strategy, FurnishingTier::Mid)
            .with_overrides(overrides);
        let params = resolve(&inputs, &RegionMarketProfile::westlands(), &Assumptions::default_kenya()).unwrap();

        let initial = estimate_startup_costs(&params).total;
        let debt = monthly_debt_service(&params);
        let revenue = gross_monthly_revenue(&params);
        let opex = monthly_operating_expenses(&params, revenue, debt);
        let simulation = CashFlowSimulator::default().simulate(&SimulationInputs {
            initial_investment: initial,
            monthly_cash_flow: revenue - opex.total(),
            debt_service: debt,
            loan_term_months: Some(params.loan_term_months()).filter(|_| strategy.is_buy()),
        });

        let metrics = yield_metrics(&params, revenue, &opex, initial, &simulation);
        (params, opex, initial, metrics)
    }

    #[test]
    fn test_cap_rate_uses_overridden_price() {
        let (params, opex, _, metrics) = metrics_for(
            AcquisitionStrategy::Buy,
            Overrides {
                purchase_price: Some(6_000_000.0),
                ..Default::default()
            },
        );
        assert_eq!(params.purchase_price, 6_000_000.0);

        let unleveraged = metrics.net_operating_income + opex.mortgage * 12.0;
        assert_relative_eq!(metrics.cap_rate.unwrap(), unleveraged / 6_000_000.0 * 100.0, epsilon = 1e-9);
        assert!((metrics.cap_rate.unwrap() - unleveraged / 9_500_000.0 * 100.0).abs() > 1.0);
    }

    #[test]
    fn test_cash_on_cash_is_noi_over_initial() {
        let (_, opex, initial, metrics) = metrics_for(AcquisitionStrategy::Sublease, Overrides::default());

        assert_relative_eq!(initial, 657_500.0);
        assert_relative_eq!(metrics.annual_expenses, opex.total() * 12.0, epsilon = 1e-6);
        assert_relative_eq!(
            metrics.cash_on_cash_return.unwrap(),
            metrics.net_operating_income / initial * 100.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(metrics.monthly_cash_flow * 12.0, metrics.net_operating_income, epsilon = 1e-6);
        assert_eq!(metrics.cap_rate, None);
        assert_eq!(metrics.payback_period_months, Some(21));
    }

    #[test]
    fn test_percent_guard() {
        assert_eq!(percent_of(5.0, 100.0), Some(5.0));
        assert_eq!(percent_of(0.0, 100.0), Some(0.0));
        assert_eq!(percent_of(5.0, 0.0), None);
        assert_eq!(percent_of(5.0, -1.0), None);
    }
}
