//! Market baselines: per-region, per-unit-type defaults

mod profile;
pub mod loader;

pub use profile::{RegionMarketProfile, UnitTable};
pub use loader::{load_profiles, load_profiles_from_reader};

use std::path::Path;

use crate::error::Result;

/// Anything that can hand out a region profile by id.
///
/// The engine only consumes the profile shape; whether the data comes from a
/// static table, a file or an upstream service is up to the implementor.
pub trait MarketBaselineProvider {
    fn profile(&self, region_id: &str) -> Option<&RegionMarketProfile>;
}

/// In-memory table of region profiles
#[derive(Debug, Clone, Default)]
pub struct MarketTable {
    profiles: Vec<RegionMarketProfile>,
}

impl MarketTable {
    pub fn new(profiles: Vec<RegionMarketProfile>) -> Self {
        Self { profiles }
    }

    /// Built-in Kenyan regions
    pub fn default_kenya() -> Self {
        Self::new(vec![
            RegionMarketProfile::kilimani(),
            RegionMarketProfile::westlands(),
            RegionMarketProfile::nyali(),
        ])
    }

    /// Load the table from the default CSV location (data/markets.csv)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_MARKETS_PATH))
    }

    pub fn from_csv_path(path: &Path) -> Result<Self> {
        Ok(Self::new(load_profiles(path)?))
    }

    pub fn profiles(&self) -> &[RegionMarketProfile] {
        &self.profiles
    }

    pub fn region_ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.id.as_str())
    }
}

impl MarketBaselineProvider for MarketTable {
    fn profile(&self, region_id: &str) -> Option<&RegionMarketProfile> {
        self.profiles.iter().find(|p| p.id == region_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let table = MarketTable::default_kenya();
        assert_eq!(table.profile("msa-nyali").map(|p| p.county.as_str()), Some("Mombasa"));
        assert!(table.profile("nbo-karen").is_none());
        assert_eq!(table.region_ids().count(), 3);
    }
}
