//! Core ROI engine: resolves inputs, runs the cost models and the
//! cash-flow simulation, and assembles the result

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::cashflows::{expense_categories, CalculationResult};
use super::metrics::yield_metrics;
use super::simulator::{CashFlowSimulator, HorizonConfig, SimulationInputs};
use crate::assumptions::Assumptions;
use crate::costs::{
    estimate_startup_costs, gross_monthly_revenue, monthly_debt_service, monthly_operating_expenses,
    resolve, EffectiveParameters,
};
use crate::error::{EngineError, Result};
use crate::market::{MarketBaselineProvider, RegionMarketProfile};
use crate::strategy::{AcquisitionStrategy, StrategyInputs};

/// How out-of-range overrides are treated at the engine boundary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Reject anything out of range
    #[default]
    Strict,
    /// Clamp occupancy and percentages into range; still reject bad money values
    Clamp,
}

/// Configuration for an engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub horizon: HorizonConfig,
    pub validation: ValidationMode,
}

/// Main calculation engine. Holds only injected configuration, so one
/// instance can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct RoiEngine {
    assumptions: Assumptions,
    config: EngineConfig,
}

impl RoiEngine {
    /// Create a new engine with given assumptions and config
    pub fn new(assumptions: Assumptions, config: EngineConfig) -> Self {
        Self { assumptions, config }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run a calculation against a region profile
    pub fn calculate(
        &self,
        inputs: &StrategyInputs,
        profile: &RegionMarketProfile,
    ) -> Result<CalculationResult> {
        let inputs = self.checked_inputs(inputs)?;
        let params = resolve(&inputs, profile, &self.assumptions)?;
        Ok(self.compute(&params))
    }

    /// Run a calculation, looking the region up through a provider
    pub fn calculate_in<P: MarketBaselineProvider + ?Sized>(
        &self,
        inputs: &StrategyInputs,
        provider: &P,
    ) -> Result<CalculationResult> {
        let profile = provider
            .profile(&inputs.region_id)
            .ok_or_else(|| EngineError::UnknownRegion(inputs.region_id.clone()))?;
        self.calculate(inputs, profile)
    }

    /// Boundary validation according to the configured mode
    fn checked_inputs<'a>(&self, inputs: &'a StrategyInputs) -> Result<Cow<'a, StrategyInputs>> {
        match self.config.validation {
            ValidationMode::Strict => {
                inputs.validate()?;
                Ok(Cow::Borrowed(inputs))
            }
            ValidationMode::Clamp => {
                let mut clamped = inputs.clone();
                clamped.overrides.clamp_ranges();
                clamped.validate()?;
                Ok(Cow::Owned(clamped))
            }
        }
    }

    /// Pure pipeline from resolved parameters to a result
    pub fn compute(&self, params: &EffectiveParameters) -> CalculationResult {
        let startup_costs = estimate_startup_costs(params);
        let initial_investment = startup_costs.total;

        let debt_service = monthly_debt_service(params);
        let monthly_revenue = gross_monthly_revenue(params);
        let monthly_opex = monthly_operating_expenses(params, monthly_revenue, debt_service);

        log::debug!(
            "{} {} in {}: invest={:.0}, revenue={:.0}/mo, opex={:.0}/mo, debt={:.0}/mo",
            params.strategy,
            params.unit_type,
            params.region_id,
            initial_investment,
            monthly_revenue,
            monthly_opex.total(),
            debt_service
        );

        let loan_term_months = match params.strategy {
            AcquisitionStrategy::Buy => Some(params.loan_term_months()),
            AcquisitionStrategy::Sublease => None,
        };

        let simulator = CashFlowSimulator::new(self.config.horizon);
        let simulation = simulator.simulate(&SimulationInputs {
            initial_investment,
            monthly_cash_flow: monthly_revenue - monthly_opex.total(),
            debt_service,
            loan_term_months,
        });

        let metrics = yield_metrics(params, monthly_revenue, &monthly_opex, initial_investment, &simulation);
        let expense_breakdown = expense_categories(params.strategy, &monthly_opex);

        CalculationResult {
            parameters: params.clone(),
            initial_investment,
            furnishing_cost: startup_costs.furnishing,
            monthly_revenue,
            annual_revenue: metrics.annual_revenue,
            monthly_fixed_cost: monthly_opex.fixed_occupancy_cost(),
            monthly_cash_flow: metrics.monthly_cash_flow,
            annual_expenses: metrics.annual_expenses,
            net_operating_income: metrics.net_operating_income,
            cash_on_cash_return: metrics.cash_on_cash_return,
            cap_rate: metrics.cap_rate,
            payback_period_months: metrics.payback_period_months,
            horizon_months: simulation.simulated_months,
            loan_payoff_month: loan_term_months.filter(|_| debt_service > 0.0),
            monthly_breakdown: simulation.points,
            expense_breakdown,
            startup_costs,
            monthly_opex,
        }
    }
}
