//! CSV-based market profile loader
//!
//! Loads region baselines from data/markets.csv

use super::{RegionMarketProfile, UnitTable};
use crate::error::Result;
use csv::Reader;
use std::path::Path;

/// Default path to the market profile table
pub const DEFAULT_MARKETS_PATH: &str = "data/markets.csv";

/// Raw CSV row: one region, unit-type columns spread wide
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    id: String,
    name: String,
    county: String,
    demand_score: f64,
    avg_occupancy: f64,
    nightly_studio: f64,
    nightly_1br: f64,
    nightly_2br: f64,
    nightly_3br: f64,
    rent_studio: f64,
    rent_1br: f64,
    rent_2br: f64,
    rent_3br: f64,
    price_studio: f64,
    price_1br: f64,
    price_2br: f64,
    price_3br: f64,
}

impl CsvRow {
    fn to_profile(self) -> RegionMarketProfile {
        RegionMarketProfile {
            id: self.id,
            name: self.name,
            county: self.county,
            demand_score: self.demand_score,
            avg_occupancy: self.avg_occupancy,
            nightly_rate: UnitTable::new(
                self.nightly_studio,
                self.nightly_1br,
                self.nightly_2br,
                self.nightly_3br,
            ),
            monthly_rent: UnitTable::new(self.rent_studio, self.rent_1br, self.rent_2br, self.rent_3br),
            purchase_price: UnitTable::new(
                self.price_studio,
                self.price_1br,
                self.price_2br,
                self.price_3br,
            ),
        }
    }
}

/// Load all region profiles from a CSV file
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<RegionMarketProfile>> {
    let reader = Reader::from_path(path.as_ref())?;
    let profiles = read_profiles(reader)?;
    log::info!("Loaded {} market profiles from {}", profiles.len(), path.as_ref().display());
    Ok(profiles)
}

/// Load region profiles from any reader
pub fn load_profiles_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<RegionMarketProfile>> {
    read_profiles(Reader::from_reader(reader))
}

fn read_profiles<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<RegionMarketProfile>> {
    let mut profiles = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        profiles.push(row.to_profile());
    }

    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::UnitType;

    #[test]
    fn test_load_default_markets() {
        let profiles = load_profiles(DEFAULT_MARKETS_PATH).expect("Failed to load markets");
        assert_eq!(profiles.len(), 3);

        // CSV must agree with the built-in table
        let westlands = profiles.iter().find(|p| p.id == "nbo-westlands").unwrap();
        assert_eq!(*westlands, RegionMarketProfile::westlands());
    }

    #[test]
    fn test_load_from_reader() {
        let data = "\
id,name,county,demand_score,avg_occupancy,nightly_studio,nightly_1br,nightly_2br,nightly_3br,rent_studio,rent_1br,rent_2br,rent_3br,price_studio,price_1br,price_2br,price_3br
ksm-milimani,Milimani,Kisumu,6.5,0.5,2500,4000,6000,8000,20000,30000,45000,60000,3000000,5000000,8000000,11000000
";
        let profiles = load_profiles_from_reader(data.as_bytes()).unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].county, "Kisumu");
        assert_eq!(profiles[0].purchase_price.get(UnitType::TwoBedroom), 8_000_000.0);
    }
}
