//! Scenario runner for batch calculations
//!
//! Holds one engine and one market table, then runs many input sets against
//! them: batches, buy-vs-sublease comparisons and occupancy sweeps.

use rayon::prelude::*;

use crate::error::Result;
use crate::market::MarketTable;
use crate::projection::{CalculationResult, EngineConfig, RoiEngine};
use crate::strategy::{AcquisitionStrategy, StrategyInputs};
use crate::Assumptions;

/// Buy and sublease results for the same unit
#[derive(Debug, Clone)]
pub struct StrategyComparison {
    pub buy: CalculationResult,
    pub sublease: CalculationResult,
}

impl StrategyComparison {
    /// Strategy with the higher first-year net operating income
    pub fn higher_income(&self) -> AcquisitionStrategy {
        if self.buy.net_operating_income >= self.sublease.net_operating_income {
            AcquisitionStrategy::Buy
        } else {
            AcquisitionStrategy::Sublease
        }
    }
}

/// Pre-loaded scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let results = runner.run_batch(&scenarios);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    engine: RoiEngine,
    markets: MarketTable,
}

impl ScenarioRunner {
    /// Runner with default assumptions and the built-in market table
    pub fn new() -> Self {
        Self::with_parts(RoiEngine::default(), MarketTable::default_kenya())
    }

    pub fn with_parts(engine: RoiEngine, markets: MarketTable) -> Self {
        Self { engine, markets }
    }

    pub fn with_assumptions(assumptions: Assumptions, markets: MarketTable) -> Self {
        Self::with_parts(RoiEngine::new(assumptions, EngineConfig::default()), markets)
    }

    pub fn run(&self, inputs: &StrategyInputs) -> Result<CalculationResult> {
        self.engine.calculate_in(inputs, &self.markets)
    }

    /// Run many scenarios in parallel. Output order matches input order;
    /// one bad scenario does not stop the others.
    pub fn run_batch(&self, scenarios: &[StrategyInputs]) -> Vec<Result<CalculationResult>> {
        let results: Vec<_> = scenarios.par_iter().map(|inputs| self.run(inputs)).collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        log::info!("Ran {} scenarios ({} failed)", results.len(), failed);
        results
    }

    /// Same unit under both acquisition strategies
    pub fn compare_strategies(&self, inputs: &StrategyInputs) -> Result<StrategyComparison> {
        Ok(StrategyComparison {
            buy: self.run(&inputs.with_strategy(AcquisitionStrategy::Buy))?,
            sublease: self.run(&inputs.with_strategy(AcquisitionStrategy::Sublease))?,
        })
    }

    /// Re-run the scenario with each occupancy override
    pub fn occupancy_sensitivity(
        &self,
        inputs: &StrategyInputs,
        occupancies: &[f64],
    ) -> Result<Vec<(f64, CalculationResult)>> {
        occupancies
            .par_iter()
            .map(|&occupancy| {
                let mut scenario = inputs.clone();
                scenario.overrides.occupancy = Some(occupancy);
                self.run(&scenario).map(|result| (occupancy, result))
            })
            .collect()
    }

    pub fn engine(&self) -> &RoiEngine {
        &self.engine
    }

    pub fn markets(&self) -> &MarketTable {
        &self.markets
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::strategy::{FurnishingTier, UnitType};

    fn westlands() -> StrategyInputs {
        StrategyInputs::new(
            "nbo-westlands",
            UnitType::OneBedroom,
            AcquisitionStrategy::Sublease,
            FurnishingTier::Mid,
        )
    }

    #[test]
    fn test_batch_preserves_order_and_errors() {
        let runner = ScenarioRunner::new();
        let mut unknown = westlands();
        unknown.region_id = "nbo-karen".to_string();

        let scenarios = vec![
            westlands(),
            unknown,
            westlands().with_strategy(AcquisitionStrategy::Buy),
        ];
        let results = runner.run_batch(&scenarios);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().strategy(), AcquisitionStrategy::Sublease);
        assert!(matches!(results[1], Err(EngineError::UnknownRegion(_))));
        assert_eq!(results[2].as_ref().unwrap().strategy(), AcquisitionStrategy::Buy);
    }

    #[test]
    fn test_compare_strategies() {
        let comparison = ScenarioRunner::new().compare_strategies(&westlands()).unwrap();

        assert!(comparison.buy.cap_rate.is_some());
        assert!(comparison.sublease.cap_rate.is_none());
        assert!(comparison.buy.initial_investment > comparison.sublease.initial_investment);
    }

    #[test]
    fn test_occupancy_sensitivity_is_monotonic() {
        let runner = ScenarioRunner::new();
        let sweep = runner
            .occupancy_sensitivity(&westlands(), &[0.4, 0.5, 0.6, 0.7, 0.8])
            .unwrap();

        assert_eq!(sweep.len(), 5);
        for pair in sweep.windows(2) {
            assert!(pair[1].1.monthly_cash_flow > pair[0].1.monthly_cash_flow);
        }
    }
}
