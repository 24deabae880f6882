//! AWS Lambda handler for STR investment calculations
//!
//! Accepts strategy inputs as JSON and returns the full calculation result
//! plus the generated insight. Engine errors (unknown region, invalid
//! override) come back in the `error` field rather than failing the invocation.

use chrono::{DateTime, Utc};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};

use str_roi_engine::{
    generate_insight, Assumptions, CalculationResult, EngineConfig, Insight, MarketBaselineProvider,
    MarketTable, RegionMarketProfile, RoiEngine, StrategyInputs, ValidationMode,
};

/// Input payload
#[derive(Debug, Deserialize)]
pub struct CalculationRequest {
    pub inputs: StrategyInputs,

    /// Replacement market table; the built-in regions are used when absent
    #[serde(default)]
    pub markets: Option<Vec<RegionMarketProfile>>,

    /// Replacement cost assumptions; missing fields keep their defaults
    #[serde(default)]
    pub assumptions: Option<Assumptions>,

    #[serde(default)]
    pub validation: ValidationMode,

    #[serde(default = "default_include_insight")]
    pub include_insight: bool,
}

fn default_include_insight() -> bool { true }

/// Output payload
#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<CalculationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight: Option<Insight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub execution_time_ms: u64,
}

impl CalculationResponse {
    fn failed(message: String, start: std::time::Instant) -> Self {
        Self {
            result: None,
            insight: None,
            error: Some(message),
            generated_at: Utc::now(),
            execution_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

async fn handler(event: LambdaEvent<CalculationRequest>) -> Result<CalculationResponse, Error> {
    let start = std::time::Instant::now();
    let request = event.payload;

    let markets = request
        .markets
        .map(MarketTable::new)
        .unwrap_or_else(MarketTable::default_kenya);
    let engine = RoiEngine::new(
        request.assumptions.unwrap_or_default(),
        EngineConfig {
            validation: request.validation,
            ..Default::default()
        },
    );

    let result = match engine.calculate_in(&request.inputs, &markets) {
        Ok(result) => result,
        Err(err) => {
            log::warn!("Calculation rejected: {}", err);
            return Ok(CalculationResponse::failed(err.to_string(), start));
        }
    };

    let insight = if request.include_insight {
        markets
            .profile(&request.inputs.region_id)
            .map(|profile| generate_insight(&result, &profile.name))
    } else {
        None
    };

    log::info!(
        "Calculated {} {} in {} ({} months)",
        request.inputs.unit_type,
        request.inputs.strategy,
        request.inputs.region_id,
        result.monthly_breakdown.len()
    );

    Ok(CalculationResponse {
        result: Some(result),
        insight,
        error: None,
        generated_at: Utc::now(),
        execution_time_ms: start.elapsed().as_millis() as u64,
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
