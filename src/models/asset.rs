//! Asset model
//!
//! An asset is a real-estate holding composed of one or more buildings.
//! Screening candidates are assets too; they simply carry no buildings.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::building::Building;
use super::ids::AssetId;
use super::money::Money;

/// Qualitative decarbonization rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DecarbonizationRating {
    High,
    #[default]
    Medium,
    Low,
}

impl fmt::Display for DecarbonizationRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

impl std::str::FromStr for DecarbonizationRating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(format!("Unknown decarbonization rating: {}", other)),
        }
    }
}

/// Liquidity grade, A being the most liquid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LiquidityRating {
    A,
    #[default]
    B,
    C,
}

impl fmt::Display for LiquidityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
        }
    }
}

impl std::str::FromStr for LiquidityRating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            other => Err(format!("Unknown liquidity rating: {}", other)),
        }
    }
}

/// Where an asset entered the system from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssetSource {
    /// Screening results list
    #[default]
    Screening,
    /// Held directly in the portfolio
    Direct,
    /// Added through bulk upload or CSV import
    Upload,
    /// Entered by hand in the upload dialog
    Manual,
}

impl fmt::Display for AssetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Screening => write!(f, "Screening"),
            Self::Direct => write!(f, "Direct"),
            Self::Upload => write!(f, "Manually Uploaded"),
            Self::Manual => write!(f, "Manual"),
        }
    }
}

/// Operating figures reported for an asset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Reported (contractual) occupancy in percent
    pub occupancy_rate: f64,
    pub operating_expenses: Money,
    pub net_operating_income: Money,
}

/// Forward-looking qualitative assessment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FuturePotential {
    pub value_appreciation: String,
    #[serde(default)]
    pub development_opportunities: Vec<String>,
    pub market_outlook: String,
}

/// A real-estate investment holding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    pub location: String,

    /// Free-form type label ("Residential", "Multi Family Home")
    pub asset_type: String,

    pub portfolio_value: Money,

    /// Return on investment in percent
    pub roi: f64,

    pub decarbonization: DecarbonizationRating,

    /// Sustainability rating on a 0-100 scale
    #[serde(default)]
    pub decarbonization_score: Option<f64>,

    pub liquidity_rating: LiquidityRating,
    pub source: AssetSource,

    /// Fit against screening criteria, 0-100
    #[serde(default)]
    pub matching_score: Option<f64>,

    #[serde(default)]
    pub performance: Option<PerformanceMetrics>,

    #[serde(default)]
    pub future_potential: Option<FuturePotential>,

    #[serde(default)]
    pub buildings: Vec<Building>,
}

impl Asset {
    /// Create a bare asset with only the listing fields set
    pub fn new(
        id: impl Into<AssetId>,
        name: impl Into<String>,
        location: impl Into<String>,
        asset_type: impl Into<String>,
        portfolio_value: Money,
        roi: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            asset_type: asset_type.into(),
            portfolio_value,
            roi,
            decarbonization: DecarbonizationRating::default(),
            decarbonization_score: None,
            liquidity_rating: LiquidityRating::default(),
            source: AssetSource::default(),
            matching_score: None,
            performance: None,
            future_potential: None,
            buildings: Vec::new(),
        }
    }

    /// Find a building of this asset by id
    pub fn building(&self, id: &str) -> Option<&Building> {
        self.buildings.iter().find(|b| b.id.as_str() == id)
    }

    /// Total number of units across all buildings
    pub fn unit_count(&self) -> u32 {
        self.buildings.iter().map(|b| b.units).sum()
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_asset_defaults() {
        let asset = Asset::new(
            "7",
            "Moabit Apartments",
            "Berlin, Germany",
            "Residential",
            Money::from_euros(2_100_000),
            8.7,
        );
        assert_eq!(asset.id.as_str(), "7");
        assert_eq!(asset.source, AssetSource::Screening);
        assert!(asset.buildings.is_empty());
        assert_eq!(asset.unit_count(), 0);
    }

    #[test]
    fn test_rating_parsing() {
        assert_eq!("high".parse::<DecarbonizationRating>().unwrap(), DecarbonizationRating::High);
        assert_eq!(" b ".parse::<LiquidityRating>().unwrap(), LiquidityRating::B);
        assert!("excellent".parse::<DecarbonizationRating>().is_err());
    }

    #[test]
    fn test_source_display() {
        assert_eq!(AssetSource::Upload.to_string(), "Manually Uploaded");
        assert_eq!(AssetSource::Direct.to_string(), "Direct");
    }
}
