//! Cost assumptions injected into the engine: startup, operating and financing defaults

mod startup;
mod operating;
mod financing;

pub use startup::{StartupAssumptions, TierMultipliers};
pub use operating::OperatingAssumptions;
pub use financing::FinancingAssumptions;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Container for all cost assumptions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    pub startup: StartupAssumptions,
    pub operating: OperatingAssumptions,
    pub financing: FinancingAssumptions,
}

impl Assumptions {
    /// Kenyan market defaults (KES)
    pub fn default_kenya() -> Self {
        Self::default()
    }

    /// Load assumptions from a JSON file. Sections or fields missing from
    /// the file keep their defaults.
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let assumptions = serde_json::from_reader(BufReader::new(file))?;
        log::info!("Loaded cost assumptions from {}", path.display());
        Ok(assumptions)
    }
}
