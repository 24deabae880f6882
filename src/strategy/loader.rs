//! Load batches of strategy inputs from a scenarios CSV

use super::{AcquisitionStrategy, FurnishingTier, Overrides, StrategyInputs, UnitType};
use crate::error::Result;
use csv::Reader;
use std::path::Path;

/// Default path to the sample scenarios file
pub const DEFAULT_SCENARIOS_PATH: &str = "data/scenarios.csv";

/// Raw CSV row. Empty override cells deserialize to `None`.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    region_id: String,
    unit_type: String,
    strategy: String,
    furnishing: String,
    #[serde(default)]
    occupancy: Option<f64>,
    #[serde(default)]
    nightly_rate: Option<f64>,
    #[serde(default)]
    monthly_rent: Option<f64>,
    #[serde(default)]
    purchase_price: Option<f64>,
    #[serde(default)]
    furnishing_cost: Option<f64>,
    #[serde(default)]
    cleaning_rate: Option<f64>,
    #[serde(default)]
    internet_cost: Option<f64>,
    #[serde(default)]
    electricity_cost: Option<f64>,
    #[serde(default)]
    water_cost: Option<f64>,
    #[serde(default)]
    entertainment_cost: Option<f64>,
    #[serde(default)]
    management_fee_percent: Option<f64>,
    #[serde(default)]
    maintenance_reserve_percent: Option<f64>,
    #[serde(default)]
    down_payment_percent: Option<f64>,
    #[serde(default)]
    interest_rate_percent: Option<f64>,
    #[serde(default)]
    loan_term_years: Option<u32>,
    #[serde(default)]
    deposit_months: Option<u32>,
}

impl CsvRow {
    fn to_inputs(self) -> Result<StrategyInputs> {
        let unit_type: UnitType = self.unit_type.parse()?;
        let strategy: AcquisitionStrategy = self.strategy.parse()?;
        let furnishing: FurnishingTier = self.furnishing.parse()?;

        let overrides = Overrides {
            occupancy: self.occupancy,
            nightly_rate: self.nightly_rate,
            monthly_rent: self.monthly_rent,
            purchase_price: self.purchase_price,
            furnishing_cost: self.furnishing_cost,
            cleaning_rate: self.cleaning_rate,
            internet_cost: self.internet_cost,
            electricity_cost: self.electricity_cost,
            water_cost: self.water_cost,
            entertainment_cost: self.entertainment_cost,
            management_fee_percent: self.management_fee_percent,
            maintenance_reserve_percent: self.maintenance_reserve_percent,
            down_payment_percent: self.down_payment_percent,
            interest_rate_percent: self.interest_rate_percent,
            loan_term_years: self.loan_term_years,
            deposit_months: self.deposit_months,
        };

        Ok(StrategyInputs::new(self.region_id, unit_type, strategy, furnishing)
            .with_overrides(overrides))
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<StrategyInputs>> {
    let reader = Reader::from_path(path.as_ref())?;
    let scenarios = read_scenarios(reader)?;
    log::info!("Loaded {} scenarios from {}", scenarios.len(), path.as_ref().display());
    Ok(scenarios)
}

/// Load scenarios from any reader (e.g., string buffer, request body)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<StrategyInputs>> {
    read_scenarios(Reader::from_reader(reader))
}

fn read_scenarios<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<StrategyInputs>> {
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_inputs()?);
    }

    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_reader_with_blank_overrides() {
        let data = "\
region_id,unit_type,strategy,furnishing,occupancy,nightly_rate,monthly_rent,down_payment_percent,loan_term_years
nbo-westlands,1br,sublease,mid,,,,,
nbo-kilimani,2 Bedroom,buy,premium,0.8,9000,,30,20
";
        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 2);

        assert_eq!(scenarios[0].overrides, Overrides::default());

        let buy = &scenarios[1];
        assert_eq!(buy.strategy, AcquisitionStrategy::Buy);
        assert_eq!(buy.furnishing, FurnishingTier::Premium);
        assert_eq!(buy.overrides.occupancy, Some(0.8));
        assert_eq!(buy.overrides.monthly_rent, None);
        assert_eq!(buy.overrides.loan_term_years, Some(20));
    }

    #[test]
    fn test_unknown_unit_type_is_an_error() {
        let data = "region_id,unit_type,strategy,furnishing\nnbo-westlands,villa,buy,mid\n";
        assert!(load_scenarios_from_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn test_load_default_scenarios() {
        let scenarios = load_scenarios(DEFAULT_SCENARIOS_PATH).expect("Failed to load scenarios");
        assert!(!scenarios.is_empty());
        assert!(scenarios.iter().all(|s| s.validate().is_ok()));
    }
}
