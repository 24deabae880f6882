//! Recurring operating cost assumptions

use serde::{Deserialize, Serialize};

use crate::market::UnitTable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatingAssumptions {
    /// Average days in a month used to turn occupancy into occupied days
    pub days_per_month: f64,

    /// Cleaner cost per occupied day
    pub cleaning_rate: UnitTable<f64>,

    pub internet: f64,
    pub electricity: UnitTable<f64>,
    pub water: UnitTable<f64>,

    /// TV / streaming add-on, off unless requested
    pub entertainment: f64,

    /// Percent of gross revenue; 0 means self-managed
    pub management_fee_percent: f64,

    /// Booking platform commission, percent of gross revenue
    pub platform_fee_percent: f64,

    /// Percent of gross revenue set aside for repairs
    pub maintenance_reserve_percent: f64,
}

impl Default for OperatingAssumptions {
    fn default() -> Self {
        Self {
            days_per_month: 30.5,
            // Studios turn over cheaply; 3BR units are usually on a weekly contract
            cleaning_rate: UnitTable::new(250.0, 750.0, 750.0, 500.0),
            internet: 3_000.0,
            electricity: UnitTable::new(2_500.0, 3_500.0, 5_000.0, 7_000.0),
            water: UnitTable::new(500.0, 1_000.0, 1_500.0, 2_000.0),
            entertainment: 0.0,
            management_fee_percent: 0.0,
            platform_fee_percent: 3.0,
            maintenance_reserve_percent: 0.0,
        }
    }
}
