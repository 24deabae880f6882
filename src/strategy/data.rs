//! Strategy inputs as supplied by the caller

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Longest mortgage term accepted as an override
pub const MAX_LOAN_TERM_YEARS: u32 = 50;

/// Highest annual mortgage rate accepted as an override, in percent
pub const MAX_INTEREST_RATE_PERCENT: f64 = 100.0;

/// Unit size being hosted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    Studio,
    OneBedroom,
    TwoBedroom,
    ThreeBedroom,
}

impl UnitType {
    pub const ALL: [UnitType; 4] = [
        UnitType::Studio,
        UnitType::OneBedroom,
        UnitType::TwoBedroom,
        UnitType::ThreeBedroom,
    ];

    /// Human-readable label used in reports and CSV files
    pub fn label(&self) -> &'static str {
        match self {
            UnitType::Studio => "Studio",
            UnitType::OneBedroom => "1 Bedroom",
            UnitType::TwoBedroom => "2 Bedroom",
            UnitType::ThreeBedroom => "3 Bedroom",
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UnitType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "studio" => Ok(UnitType::Studio),
            "1br" | "1 bedroom" | "one_bedroom" | "1bed" => Ok(UnitType::OneBedroom),
            "2br" | "2 bedroom" | "two_bedroom" | "2bed" => Ok(UnitType::TwoBedroom),
            "3br" | "3 bedroom" | "three_bedroom" | "3bed" => Ok(UnitType::ThreeBedroom),
            _ => Err(EngineError::UnknownVariant {
                kind: "unit type",
                value: s.to_string(),
            }),
        }
    }
}

/// How the operator gets control of the unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcquisitionStrategy {
    /// Purchase the unit (down payment + mortgage)
    Buy,
    /// Lease the unit and re-let it short-term (rent-to-rent)
    Sublease,
}

impl AcquisitionStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            AcquisitionStrategy::Buy => "Buy",
            AcquisitionStrategy::Sublease => "Sublease (Rent-to-Rent)",
        }
    }

    pub fn is_buy(&self) -> bool {
        matches!(self, AcquisitionStrategy::Buy)
    }
}

impl fmt::Display for AcquisitionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AcquisitionStrategy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" | "purchase" => Ok(AcquisitionStrategy::Buy),
            "sublease" | "rent-to-rent" | "rent_to_rent" | "sublease (rent-to-rent)" => {
                Ok(AcquisitionStrategy::Sublease)
            }
            _ => Err(EngineError::UnknownVariant {
                kind: "acquisition strategy",
                value: s.to_string(),
            }),
        }
    }
}

/// Furnishing standard, ordered by cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FurnishingTier {
    Budget,
    Mid,
    Premium,
}

impl FurnishingTier {
    pub fn label(&self) -> &'static str {
        match self {
            FurnishingTier::Budget => "Budget",
            FurnishingTier::Mid => "Mid-Range",
            FurnishingTier::Premium => "Premium",
        }
    }
}

impl fmt::Display for FurnishingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FurnishingTier {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "budget" => Ok(FurnishingTier::Budget),
            "mid" | "mid-range" | "mid_range" | "midrange" => Ok(FurnishingTier::Mid),
            "premium" => Ok(FurnishingTier::Premium),
            _ => Err(EngineError::UnknownVariant {
                kind: "furnishing tier",
                value: s.to_string(),
            }),
        }
    }
}

/// Optional per-field overrides. `None` means "use the baseline or default";
/// `Some(0.0)` is a real zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Overrides {
    /// Fraction of nights booked (0-1)
    pub occupancy: Option<f64>,
    pub nightly_rate: Option<f64>,
    pub monthly_rent: Option<f64>,
    pub purchase_price: Option<f64>,
    pub furnishing_cost: Option<f64>,
    /// Cleaning cost per occupied day
    pub cleaning_rate: Option<f64>,
    pub internet_cost: Option<f64>,
    pub electricity_cost: Option<f64>,
    pub water_cost: Option<f64>,
    /// TV / streaming package
    pub entertainment_cost: Option<f64>,
    /// Percent of gross revenue (0-100)
    pub management_fee_percent: Option<f64>,
    /// Percent of gross revenue (0-100)
    pub maintenance_reserve_percent: Option<f64>,
    /// Percent of purchase price (0-100)
    pub down_payment_percent: Option<f64>,
    /// Annual rate in percent
    pub interest_rate_percent: Option<f64>,
    pub loan_term_years: Option<u32>,
    pub deposit_months: Option<u32>,
}

impl Overrides {
    /// Strict range check: rejects anything out of range.
    pub fn validate(&self) -> Result<()> {
        if let Some(occupancy) = self.occupancy {
            if !occupancy.is_finite() || !(0.0..=1.0).contains(&occupancy) {
                return Err(EngineError::InvalidOverride {
                    field: "occupancy",
                    value: occupancy,
                    reason: "must be between 0 and 1",
                });
            }
        }

        for (field, value) in self.monetary_fields() {
            check_amount(field, value)?;
        }

        for (field, value) in self.percent_fields() {
            if let Some(pct) = value {
                if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
                    return Err(EngineError::InvalidOverride {
                        field,
                        value: pct,
                        reason: "must be a percentage between 0 and 100",
                    });
                }
            }
        }

        if let Some(rate) = self.interest_rate_percent {
            if !rate.is_finite() || !(0.0..=MAX_INTEREST_RATE_PERCENT).contains(&rate) {
                return Err(EngineError::InvalidOverride {
                    field: "interest_rate_percent",
                    value: rate,
                    reason: "must be an annual rate between 0 and 100 percent",
                });
            }
        }

        if let Some(years) = self.loan_term_years {
            if years == 0 || years > MAX_LOAN_TERM_YEARS {
                return Err(EngineError::InvalidOverride {
                    field: "loan_term_years",
                    value: years as f64,
                    reason: "must be between 1 and 50 years",
                });
            }
        }

        Ok(())
    }

    /// Pull occupancy and percentage overrides back into range.
    /// Monetary values are left untouched.
    pub fn clamp_ranges(&mut self) {
        if let Some(occupancy) = self.occupancy {
            if occupancy.is_finite() && !(0.0..=1.0).contains(&occupancy) {
                let clamped = occupancy.clamp(0.0, 1.0);
                log::warn!("Clamping occupancy override {} to {}", occupancy, clamped);
                self.occupancy = Some(clamped);
            }
        }

        for (field, slot) in [
            ("management_fee_percent", &mut self.management_fee_percent),
            ("maintenance_reserve_percent", &mut self.maintenance_reserve_percent),
            ("down_payment_percent", &mut self.down_payment_percent),
        ] {
            if let Some(pct) = *slot {
                if pct.is_finite() && !(0.0..=100.0).contains(&pct) {
                    let clamped = pct.clamp(0.0, 100.0);
                    log::warn!("Clamping {} override {} to {}", field, pct, clamped);
                    *slot = Some(clamped);
                }
            }
        }
    }

    fn monetary_fields(&self) -> [(&'static str, Option<f64>); 9] {
        [
            ("nightly_rate", self.nightly_rate),
            ("monthly_rent", self.monthly_rent),
            ("purchase_price", self.purchase_price),
            ("furnishing_cost", self.furnishing_cost),
            ("cleaning_rate", self.cleaning_rate),
            ("internet_cost", self.internet_cost),
            ("electricity_cost", self.electricity_cost),
            ("water_cost", self.water_cost),
            ("entertainment_cost", self.entertainment_cost),
        ]
    }

    fn percent_fields(&self) -> [(&'static str, Option<f64>); 3] {
        [
            ("management_fee_percent", self.management_fee_percent),
            ("maintenance_reserve_percent", self.maintenance_reserve_percent),
            ("down_payment_percent", self.down_payment_percent),
        ]
    }
}

fn check_amount(field: &'static str, value: Option<f64>) -> Result<()> {
    match value {
        Some(amount) if !amount.is_finite() || amount < 0.0 => Err(EngineError::InvalidOverride {
            field,
            value: amount,
            reason: "must be a finite, non-negative amount",
        }),
        _ => Ok(()),
    }
}

/// Everything the caller chooses for one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyInputs {
    pub region_id: String,
    pub unit_type: UnitType,
    pub strategy: AcquisitionStrategy,
    pub furnishing: FurnishingTier,
    #[serde(default)]
    pub overrides: Overrides,
}

impl StrategyInputs {
    /// Inputs with no overrides
    pub fn new(
        region_id: impl Into<String>,
        unit_type: UnitType,
        strategy: AcquisitionStrategy,
        furnishing: FurnishingTier,
    ) -> Self {
        Self {
            region_id: region_id.into(),
            unit_type,
            strategy,
            furnishing,
            overrides: Overrides::default(),
        }
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Same inputs under a different acquisition strategy
    pub fn with_strategy(&self, strategy: AcquisitionStrategy) -> Self {
        Self {
            strategy,
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.overrides.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unit_types() {
        assert_eq!("Studio".parse::<UnitType>().unwrap(), UnitType::Studio);
        assert_eq!("1br".parse::<UnitType>().unwrap(), UnitType::OneBedroom);
        assert_eq!("2 Bedroom".parse::<UnitType>().unwrap(), UnitType::TwoBedroom);
        assert_eq!("three_bedroom".parse::<UnitType>().unwrap(), UnitType::ThreeBedroom);
        assert!("penthouse".parse::<UnitType>().is_err());
    }

    #[test]
    fn test_parse_strategy_and_tier() {
        assert_eq!("Buy".parse::<AcquisitionStrategy>().unwrap(), AcquisitionStrategy::Buy);
        assert_eq!(
            "Sublease (Rent-to-Rent)".parse::<AcquisitionStrategy>().unwrap(),
            AcquisitionStrategy::Sublease
        );
        assert_eq!("Mid-Range".parse::<FurnishingTier>().unwrap(), FurnishingTier::Mid);
        assert!(FurnishingTier::Budget < FurnishingTier::Mid);
        assert!(FurnishingTier::Mid < FurnishingTier::Premium);
    }

    #[test]
    fn test_validate_rejects_out_of_range_occupancy() {
        let overrides = Overrides {
            occupancy: Some(1.2),
            ..Default::default()
        };
        match overrides.validate() {
            Err(EngineError::InvalidOverride { field, .. }) => assert_eq!(field, "occupancy"),
            other => panic!("expected InvalidOverride, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_money() {
        let overrides = Overrides {
            monthly_rent: Some(-1.0),
            ..Default::default()
        };
        assert!(overrides.validate().is_err());

        let zero_is_fine = Overrides {
            monthly_rent: Some(0.0),
            nightly_rate: Some(0.0),
            ..Default::default()
        };
        assert!(zero_is_fine.validate().is_ok());
    }

    #[test]
    fn test_validate_loan_term_bounds() {
        for years in [0, MAX_LOAN_TERM_YEARS + 1, 400_000_000] {
            let overrides = Overrides {
                loan_term_years: Some(years),
                ..Default::default()
            };
            assert!(overrides.validate().is_err(), "{} years accepted", years);
        }

        let longest = Overrides {
            loan_term_years: Some(MAX_LOAN_TERM_YEARS),
            ..Default::default()
        };
        assert!(longest.validate().is_ok());
    }

    #[test]
    fn test_validate_interest_rate_bounds() {
        let absurd = Overrides {
            interest_rate_percent: Some(1.0e6),
            ..Default::default()
        };
        assert!(absurd.validate().is_err());

        let usury = Overrides {
            interest_rate_percent: Some(MAX_INTEREST_RATE_PERCENT),
            ..Default::default()
        };
        assert!(usury.validate().is_ok());
    }

    #[test]
    fn test_clamp_leaves_money_alone() {
        let mut overrides = Overrides {
            occupancy: Some(1.4),
            down_payment_percent: Some(-5.0),
            monthly_rent: Some(-100.0),
            ..Default::default()
        };
        overrides.clamp_ranges();

        assert_eq!(overrides.occupancy, Some(1.0));
        assert_eq!(overrides.down_payment_percent, Some(0.0));
        assert_eq!(overrides.monthly_rent, Some(-100.0));
        assert!(overrides.validate().is_err());
    }

    #[test]
    fn test_inputs_json_defaults_overrides() {
        let json = r#"{
            "region_id": "nbo-westlands",
            "unit_type": "one_bedroom",
            "strategy": "sublease",
            "furnishing": "mid"
        }"#;
        let inputs: StrategyInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.overrides, Overrides::default());
        assert_eq!(inputs.unit_type, UnitType::OneBedroom);
    }
}
