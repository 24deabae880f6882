//! Recurring monthly operating costs driven by occupancy and revenue

use serde::{Deserialize, Serialize};

use super::EffectiveParameters;
use crate::strategy::AcquisitionStrategy;

const DAYS_PER_YEAR: f64 = 365.0;

/// Monthly recurring costs. Rent and mortgage are mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyOpexBreakdown {
    pub rent: f64,
    pub mortgage: f64,
    pub cleaning: f64,
    pub internet: f64,
    pub electricity: f64,
    pub water: f64,
    pub entertainment: f64,
    pub management: f64,
    pub platform: f64,
    pub maintenance: f64,
}

impl MonthlyOpexBreakdown {
    pub fn total(&self) -> f64 {
        self.rent
            + self.mortgage
            + self.cleaning
            + self.utilities()
            + self.management
            + self.platform
            + self.maintenance
    }

    /// Internet, power, water and entertainment
    pub fn utilities(&self) -> f64 {
        self.internet + self.electricity + self.water + self.entertainment
    }

    /// Rent or mortgage, whichever applies
    pub fn fixed_occupancy_cost(&self) -> f64 {
        self.rent + self.mortgage
    }
}

/// Gross monthly revenue: nightly rate x 365 x occupancy / 12
pub fn gross_monthly_revenue(params: &EffectiveParameters) -> f64 {
    params.nightly_rate * DAYS_PER_YEAR * params.occupancy / 12.0
}

/// Build the monthly opex breakdown.
///
/// Percent-of-revenue fees apply to gross revenue, never to a net figure.
pub fn monthly_operating_expenses(
    params: &EffectiveParameters,
    monthly_revenue: f64,
    debt_service: f64,
) -> MonthlyOpexBreakdown {
    let occupied_days = params.days_per_month * params.occupancy;
    let (rent, mortgage) = match params.strategy {
        AcquisitionStrategy::Buy => (0.0, debt_service),
        AcquisitionStrategy::Sublease => (params.monthly_rent, 0.0),
    };

    MonthlyOpexBreakdown {
        rent,
        mortgage,
        cleaning: occupied_days * params.cleaning_rate,
        internet: params.internet_cost,
        electricity: params.electricity_cost,
        water: params.water_cost,
        entertainment: params.entertainment_cost,
        management: monthly_revenue * params.management_fee_percent / 100.0,
        platform: monthly_revenue * params.platform_fee_percent / 100.0,
        maintenance: monthly_revenue * params.maintenance_reserve_percent / 100.0,
    }
}
