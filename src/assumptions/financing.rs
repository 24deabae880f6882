//! Mortgage defaults for the buy strategy

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancingAssumptions {
    /// Percent of purchase price paid up front
    pub down_payment_percent: f64,

    /// Annual mortgage rate in percent
    pub interest_rate_percent: f64,

    pub loan_term_years: u32,
}

impl Default for FinancingAssumptions {
    fn default() -> Self {
        Self {
            down_payment_percent: 20.0,
            interest_rate_percent: 14.5,
            loan_term_years: 15,
        }
    }
}
