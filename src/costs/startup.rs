//! Startup capital required before the unit takes its first booking

use serde::{Deserialize, Serialize};

use super::EffectiveParameters;
use crate::strategy::AcquisitionStrategy;

/// One-time costs. `total` is the plain sum of the five components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupCostBreakdown {
    pub furnishing: f64,

    /// Down payment (buy) or deposit plus advance rent (sublease)
    pub acquisition: f64,

    pub legal_admin: f64,
    pub utility_deposit: f64,
    pub fixtures: f64,
    pub total: f64,
}

impl StartupCostBreakdown {
    fn new(furnishing: f64, acquisition: f64, legal_admin: f64, utility_deposit: f64, fixtures: f64) -> Self {
        Self {
            furnishing,
            acquisition,
            legal_admin,
            utility_deposit,
            fixtures,
            total: furnishing + acquisition + legal_admin + utility_deposit + fixtures,
        }
    }
}

/// Down payment on the purchase price
pub fn down_payment(params: &EffectiveParameters) -> f64 {
    params.purchase_price * params.down_payment_percent / 100.0
}

/// Landlord deposit plus rent paid in advance
pub fn lease_entry_cost(params: &EffectiveParameters) -> f64 {
    params.monthly_rent * params.deposit_months as f64
        + params.monthly_rent * params.advance_rent_months as f64
}

pub fn estimate_startup_costs(params: &EffectiveParameters) -> StartupCostBreakdown {
    let acquisition = match params.strategy {
        AcquisitionStrategy::Buy => down_payment(params),
        AcquisitionStrategy::Sublease => lease_entry_cost(params),
    };

    StartupCostBreakdown::new(
        params.furnishing_cost,
        acquisition,
        params.legal_admin_fee,
        params.utility_deposit,
        params.fixtures,
    )
}
