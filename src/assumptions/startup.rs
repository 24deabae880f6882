//! One-time startup cost assumptions: furnishing, deposits and fees

use serde::{Deserialize, Serialize};

use crate::market::UnitTable;
use crate::strategy::{FurnishingTier, UnitType};

/// Furnishing cost multipliers by tier, applied to the mid-range base cost
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierMultipliers {
    pub budget: f64,
    pub mid: f64,
    pub premium: f64,
}

impl TierMultipliers {
    pub fn get(&self, tier: FurnishingTier) -> f64 {
        match tier {
            FurnishingTier::Budget => self.budget,
            FurnishingTier::Mid => self.mid,
            FurnishingTier::Premium => self.premium,
        }
    }
}

impl Default for TierMultipliers {
    fn default() -> Self {
        Self {
            budget: 0.7,
            mid: 1.0,
            premium: 1.6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupAssumptions {
    /// Mid-range furnishing cost by unit type
    pub furnishing_base: UnitTable<f64>,

    pub furnishing_multipliers: TierMultipliers,

    /// Security deposit held by the landlord (sublease)
    pub deposit_months: u32,

    /// Rent paid up front (sublease)
    pub advance_rent_months: u32,

    /// Lease agreement / admin fee (sublease)
    pub sublease_legal_fee: f64,

    /// Closing costs estimate (buy)
    pub purchase_legal_fee: f64,

    /// Water and electricity connection deposit
    pub utility_deposit: f64,

    /// WiFi install, locks, small decor
    pub fixtures: f64,
}

impl StartupAssumptions {
    /// Furnishing cost for a unit type at a given tier
    pub fn furnishing_cost(&self, unit_type: UnitType, tier: FurnishingTier) -> f64 {
        self.furnishing_base.get(unit_type) * self.furnishing_multipliers.get(tier)
    }
}

impl Default for StartupAssumptions {
    fn default() -> Self {
        Self {
            furnishing_base: UnitTable::new(250_000.0, 400_000.0, 650_000.0, 900_000.0),
            furnishing_multipliers: TierMultipliers::default(),
            deposit_months: 2,
            advance_rent_months: 1,
            sublease_legal_fee: 5_000.0,
            purchase_legal_fee: 150_000.0,
            utility_deposit: 7_500.0,
            fixtures: 20_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        let startup = StartupAssumptions::default();
        for unit in UnitType::ALL {
            let budget = startup.furnishing_cost(unit, FurnishingTier::Budget);
            let mid = startup.furnishing_cost(unit, FurnishingTier::Mid);
            let premium = startup.furnishing_cost(unit, FurnishingTier::Premium);
            assert!(budget < mid && mid < premium, "tier order broken for {}", unit);
        }
    }

    #[test]
    fn test_mid_range_is_base_cost() {
        let startup = StartupAssumptions::default();
        assert_eq!(startup.furnishing_cost(UnitType::OneBedroom, FurnishingTier::Mid), 400_000.0);
    }
}
