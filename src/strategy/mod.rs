//! Strategy inputs and scenario loading

mod data;
pub mod loader;

pub use data::{
    AcquisitionStrategy, FurnishingTier, Overrides, StrategyInputs, UnitType, MAX_INTEREST_RATE_PERCENT,
    MAX_LOAN_TERM_YEARS,
};
pub use loader::{load_scenarios, load_scenarios_from_reader};
