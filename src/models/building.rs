//! Building model

use serde::{Deserialize, Serialize};

use super::estate::Estate;
use super::ids::BuildingId;
use super::money::Money;

/// Unit breakdown and lease length for a building
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TenancyMix {
    pub residential_units: u32,
    pub commercial_units: u32,
    /// Average lease term in months
    pub avg_lease_term_months: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketTrends {
    pub price_trend: String,
    pub demand_level: String,
    pub future_outlook: String,
}

/// Street address and neighbourhood indicators
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub market_trends: MarketTrends,
    pub walkability_score: u32,
    pub transportation_access: String,
    pub crime_rate: String,
}

impl Location {
    /// Single-line address, e.g. "Bergmannstraße 100, 10961 Berlin"
    pub fn one_line(&self) -> String {
        format!("{}, {} {}", self.address, self.postal_code, self.city)
    }
}

/// A physical structure containing estates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingId,
    pub name: String,

    /// Use label ("residential", "mixed-use")
    pub building_type: String,

    pub units: u32,

    /// Reported occupancy in percent
    pub occupancy_rate: f64,

    #[serde(default)]
    pub construction_year: Option<u16>,
    #[serde(default)]
    pub energy_rating: Option<String>,
    #[serde(default)]
    pub certification: Option<String>,
    #[serde(default)]
    pub last_year_income: Option<Money>,
    #[serde(default)]
    pub maintenance_history: Vec<String>,
    /// Quarterly occupancy readings in percent, oldest first
    #[serde(default)]
    pub occupancy_trend: Vec<f64>,
    #[serde(default)]
    pub maintenance_cost: Option<Money>,
    #[serde(default)]
    pub tenancy_mix: Option<TenancyMix>,
    #[serde(default)]
    pub cap_rate: Option<f64>,
    #[serde(default)]
    pub vacancy_rate: Option<f64>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub estates: Vec<Estate>,
}

impl Building {
    pub fn new(
        id: impl Into<BuildingId>,
        name: impl Into<String>,
        building_type: impl Into<String>,
        units: u32,
        occupancy_rate: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            building_type: building_type.into(),
            units,
            occupancy_rate,
            construction_year: None,
            energy_rating: None,
            certification: None,
            last_year_income: None,
            maintenance_history: Vec::new(),
            occupancy_trend: Vec::new(),
            maintenance_cost: None,
            tenancy_mix: None,
            cap_rate: None,
            vacancy_rate: None,
            location: None,
            estates: Vec::new(),
        }
    }

    /// Find an estate in this building by id
    pub fn estate(&self, id: &str) -> Option<&Estate> {
        self.estates.iter().find(|e| e.id.as_str() == id)
    }
}
