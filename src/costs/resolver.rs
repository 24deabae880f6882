//! Merge caller overrides with market baselines and assumption defaults

use serde::{Deserialize, Serialize};

use crate::assumptions::Assumptions;
use crate::error::{EngineError, Result};
use crate::market::{MarketBaselineProvider, RegionMarketProfile};
use crate::strategy::{AcquisitionStrategy, FurnishingTier, StrategyInputs, UnitType};

/// Fully resolved parameter set: every field has a concrete value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectiveParameters {
    pub region_id: String,
    pub unit_type: UnitType,
    pub strategy: AcquisitionStrategy,
    pub furnishing: FurnishingTier,

    // Revenue drivers
    pub occupancy: f64,
    pub nightly_rate: f64,

    // Acquisition
    pub monthly_rent: f64,
    pub purchase_price: f64,
    pub furnishing_cost: f64,
    pub down_payment_percent: f64,
    pub interest_rate_percent: f64,
    pub loan_term_years: u32,
    pub deposit_months: u32,
    pub advance_rent_months: u32,
    pub legal_admin_fee: f64,
    pub utility_deposit: f64,
    pub fixtures: f64,

    // Operating
    pub days_per_month: f64,
    pub cleaning_rate: f64,
    pub internet_cost: f64,
    pub electricity_cost: f64,
    pub water_cost: f64,
    pub entertainment_cost: f64,
    pub management_fee_percent: f64,
    pub platform_fee_percent: f64,
    pub maintenance_reserve_percent: f64,
}

impl EffectiveParameters {
    /// Loan term in months, saturating for terms that only assumption files can supply
    pub fn loan_term_months(&self) -> u32 {
        self.loan_term_years.saturating_mul(12)
    }
}

/// Resolve inputs against a profile that must belong to the requested region.
///
/// Order per field: override, then region baseline, then assumption default.
pub fn resolve(
    inputs: &StrategyInputs,
    profile: &RegionMarketProfile,
    assumptions: &Assumptions,
) -> Result<EffectiveParameters> {
    if profile.id != inputs.region_id {
        return Err(EngineError::UnknownRegion(inputs.region_id.clone()));
    }

    let o = &inputs.overrides;
    let unit = inputs.unit_type;
    let startup = &assumptions.startup;
    let operating = &assumptions.operating;
    let financing = &assumptions.financing;

    let legal_admin_fee = match inputs.strategy {
        AcquisitionStrategy::Buy => startup.purchase_legal_fee,
        AcquisitionStrategy::Sublease => startup.sublease_legal_fee,
    };

    Ok(EffectiveParameters {
        region_id: inputs.region_id.clone(),
        unit_type: unit,
        strategy: inputs.strategy,
        furnishing: inputs.furnishing,

        occupancy: o.occupancy.unwrap_or(profile.avg_occupancy),
        nightly_rate: o.nightly_rate.unwrap_or_else(|| profile.nightly_rate.get(unit)),

        monthly_rent: o.monthly_rent.unwrap_or_else(|| profile.monthly_rent.get(unit)),
        purchase_price: o.purchase_price.unwrap_or_else(|| profile.purchase_price.get(unit)),
        furnishing_cost: o
            .furnishing_cost
            .unwrap_or_else(|| startup.furnishing_cost(unit, inputs.furnishing)),
        down_payment_percent: o.down_payment_percent.unwrap_or(financing.down_payment_percent),
        interest_rate_percent: o.interest_rate_percent.unwrap_or(financing.interest_rate_percent),
        loan_term_years: o.loan_term_years.unwrap_or(financing.loan_term_years),
        deposit_months: o.deposit_months.unwrap_or(startup.deposit_months),
        advance_rent_months: startup.advance_rent_months,
        legal_admin_fee,
        utility_deposit: startup.utility_deposit,
        fixtures: startup.fixtures,

        days_per_month: operating.days_per_month,
        cleaning_rate: o.cleaning_rate.unwrap_or_else(|| operating.cleaning_rate.get(unit)),
        internet_cost: o.internet_cost.unwrap_or(operating.internet),
        electricity_cost: o
            .electricity_cost
            .unwrap_or_else(|| operating.electricity.get(unit)),
        water_cost: o.water_cost.unwrap_or_else(|| operating.water.get(unit)),
        entertainment_cost: o.entertainment_cost.unwrap_or(operating.entertainment),
        management_fee_percent: o
            .management_fee_percent
            .unwrap_or(operating.management_fee_percent),
        platform_fee_percent: operating.platform_fee_percent,
        maintenance_reserve_percent: o
            .maintenance_reserve_percent
            .unwrap_or(operating.maintenance_reserve_percent),
    })
}

/// Look the region up through a provider, then resolve
pub fn resolve_from<P: MarketBaselineProvider + ?Sized>(
    inputs: &StrategyInputs,
    provider: &P,
    assumptions: &Assumptions,
) -> Result<EffectiveParameters> {
    let profile = provider
        .profile(&inputs.region_id)
        .ok_or_else(|| EngineError::UnknownRegion(inputs.region_id.clone()))?;
    resolve(inputs, profile, assumptions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::MarketTable;
    use crate::strategy::Overrides;

    fn westlands_sublease() -> StrategyInputs {
        StrategyInputs::new(
            "nbo-westlands",
            UnitType::OneBedroom,
            AcquisitionStrategy::Sublease,
            FurnishingTier::Mid,
        )
    }

    #[test]
    fn test_baseline_fallback() {
        let params = resolve(
            &westlands_sublease(),
            &RegionMarketProfile::westlands(),
            &Assumptions::default_kenya(),
        )
        .unwrap();

        assert_eq!(params.occupancy, 0.68);
        assert_eq!(params.nightly_rate, 6_500.0);
        assert_eq!(params.monthly_rent, 75_000.0);
        assert_eq!(params.furnishing_cost, 400_000.0);
        assert_eq!(params.cleaning_rate, 750.0);
        assert_eq!(params.legal_admin_fee, 5_000.0);
        assert_eq!(params.loan_term_years, 15);
    }

    #[test]
    fn test_override_beats_baseline_even_when_zero() {
        let inputs = westlands_sublease().with_overrides(Overrides {
            occupancy: Some(0.0),
            nightly_rate: Some(8_000.0),
            cleaning_rate: Some(0.0),
            ..Default::default()
        });
        let params = resolve(
            &inputs,
            &RegionMarketProfile::westlands(),
            &Assumptions::default_kenya(),
        )
        .unwrap();

        assert_eq!(params.occupancy, 0.0);
        assert_eq!(params.nightly_rate, 8_000.0);
        assert_eq!(params.cleaning_rate, 0.0);
    }

    #[test]
    fn test_mismatched_profile_is_unknown_region() {
        let result = resolve(
            &westlands_sublease(),
            &RegionMarketProfile::nyali(),
            &Assumptions::default_kenya(),
        );
        assert!(matches!(result, Err(EngineError::UnknownRegion(id)) if id == "nbo-westlands"));
    }

    #[test]
    fn test_provider_lookup() {
        let table = MarketTable::default_kenya();
        let mut inputs = westlands_sublease();
        assert!(resolve_from(&inputs, &table, &Assumptions::default_kenya()).is_ok());

        inputs.region_id = "nbo-karen".to_string();
        assert!(matches!(
            resolve_from(&inputs, &table, &Assumptions::default_kenya()),
            Err(EngineError::UnknownRegion(_))
        ));
    }
}
