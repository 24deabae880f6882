//! Error types for the ROI engine

use thiserror::Error;

/// Errors surfaced by resolution, validation and the data loaders
#[derive(Debug, Error)]
pub enum EngineError {
    /// Region id does not resolve to a market profile
    #[error("unknown region: {0}")]
    UnknownRegion(String),

    /// Override value outside its accepted range
    #[error("invalid override {field} = {value}: {reason}")]
    InvalidOverride {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Text that does not name a known enumeration variant
    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
