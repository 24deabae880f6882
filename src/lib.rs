//! STR ROI Engine - investment simulation for short-term-rental strategies
//!
//! This library provides:
//! - Market baselines per region and unit type
//! - Resolution of caller overrides against baselines and cost assumptions
//! - Startup cost, mortgage and operating expense models
//! - A payback-aware monthly cash-flow simulation and yield metrics
//! - Plain-language insights and a batch scenario runner

pub mod error;
pub mod strategy;
pub mod market;
pub mod assumptions;
pub mod costs;
pub mod projection;
pub mod insight;
pub mod scenario;

// Re-export commonly used types
pub use error::{EngineError, Result};
pub use strategy::{AcquisitionStrategy, FurnishingTier, Overrides, StrategyInputs, UnitType};
pub use market::{MarketBaselineProvider, MarketTable, RegionMarketProfile};
pub use assumptions::Assumptions;
pub use projection::{CalculationResult, EngineConfig, MonthlyCashFlowPoint, RoiEngine, ValidationMode};
pub use insight::{generate_insight, Insight};
pub use scenario::ScenarioRunner;
