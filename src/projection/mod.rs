//! Cash-flow projection: simulation, yield metrics and the engine tying it together

mod state;
mod engine;
mod cashflows;
mod simulator;
mod metrics;

pub use state::SimulationState;
pub use engine::{EngineConfig, RoiEngine, ValidationMode};
pub use cashflows::{expense_categories, CalculationResult, ExpenseCategory, MonthlyCashFlowPoint, ResultSummary};
pub use simulator::{CashFlowSimulation, CashFlowSimulator, HorizonConfig, SimulationInputs};
pub use metrics::{yield_metrics, YieldMetrics};
