//! Risk and decarbonization profiles used by the risk assessment step

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AssetId;
use super::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Emissions and retrofit economics for one asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub asset_id: AssetId,
    pub asset_name: String,
    /// Current emissions in tons CO2 per year
    pub current_emissions: f64,
    /// Achievable reduction in percent
    pub potential_reduction: f64,
    pub required_investment: Money,
    pub risk_level: RiskLevel,
    /// Expected ROI of the retrofit in percent
    pub roi: f64,
    pub decarbonization_potential: RiskLevel,
}

/// Slider inputs of the what-if simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInputs {
    pub investment: Money,
    /// Expected energy savings in percent
    pub energy_savings_pct: f64,
    /// Targeted carbon reduction in percent
    pub carbon_reduction_pct: f64,
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self {
            investment: Money::from_euros(500_000),
            energy_savings_pct: 30.0,
            carbon_reduction_pct: 50.0,
        }
    }
}
