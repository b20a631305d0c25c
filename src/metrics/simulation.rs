//! What-if retrofit simulation
//!
//! Runs on the slider inputs alone; the selected assets do not feed in.

use serde::Serialize;

use super::round1;
use crate::models::{RiskEstimate, RiskLevel, SimulationInputs};

/// Baseline emissions the carbon slider is applied to, in tons per year
pub const BASELINE_EMISSIONS_TONS: f64 = 350.0;

/// Projected ROI below this percentage triggers a warning
pub const LOW_ROI_THRESHOLD: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationResult {
    /// Projected ROI in percent, one decimal
    pub projected_roi: f64,
    pub carbon_reduction_tons: u32,
    /// Years until the investment pays back, `None` when ROI is zero
    pub payback_years: Option<u32>,
    pub low_roi_warning: bool,
}

pub fn simulate(inputs: &SimulationInputs) -> SimulationResult {
    let investment = inputs.investment.as_f64();
    let projected_roi = if investment > 0.0 {
        let annual_savings = inputs.energy_savings_pct / 100.0 * investment;
        round1(annual_savings / investment * 100.0)
    } else {
        0.0
    };

    let carbon = (BASELINE_EMISSIONS_TONS * inputs.carbon_reduction_pct / 100.0).round();
    let carbon_reduction_tons = carbon.max(0.0) as u32;

    let payback_years = if projected_roi > 0.0 {
        Some((100.0 / projected_roi).ceil() as u32)
    } else {
        None
    };

    SimulationResult {
        projected_roi,
        carbon_reduction_tons,
        payback_years,
        low_roi_warning: projected_roi < LOW_ROI_THRESHOLD,
    }
}

/// Capture a simulation run as the draft's risk estimate
///
/// The decarbonization potential follows the targeted carbon reduction:
/// 50% and above is High, 25% and above is Medium.
pub fn risk_estimate(inputs: &SimulationInputs) -> RiskEstimate {
    let result = simulate(inputs);
    let decarbonization_potential = match inputs.carbon_reduction_pct {
        pct if pct >= 50.0 => RiskLevel::High,
        pct if pct >= 25.0 => RiskLevel::Medium,
        _ => RiskLevel::Low,
    };
    RiskEstimate {
        inputs: *inputs,
        roi_estimate: result.projected_roi,
        carbon_reduction_tons: result.carbon_reduction_tons,
        decarbonization_potential,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_default_inputs() {
        let result = simulate(&SimulationInputs::default());
        assert_eq!(result.projected_roi, 30.0);
        assert_eq!(result.carbon_reduction_tons, 175);
        assert_eq!(result.payback_years, Some(4));
        assert!(!result.low_roi_warning);
    }

    #[test]
    fn test_low_roi_warning() {
        let inputs = SimulationInputs {
            energy_savings_pct: 3.0,
            ..SimulationInputs::default()
        };
        let result = simulate(&inputs);
        assert_eq!(result.projected_roi, 3.0);
        assert_eq!(result.payback_years, Some(34));
        assert!(result.low_roi_warning);
    }

    #[test]
    fn test_zero_investment() {
        let inputs = SimulationInputs {
            investment: Money::zero(),
            ..SimulationInputs::default()
        };
        let result = simulate(&inputs);
        assert_eq!(result.projected_roi, 0.0);
        assert_eq!(result.payback_years, None);
        assert!(result.low_roi_warning);
    }

    #[test]
    fn test_risk_estimate_levels() {
        let estimate = risk_estimate(&SimulationInputs::default());
        assert_eq!(estimate.roi_estimate, 30.0);
        assert_eq!(estimate.carbon_reduction_tons, 175);
        assert_eq!(estimate.decarbonization_potential, RiskLevel::High);

        let modest = SimulationInputs {
            carbon_reduction_pct: 20.0,
            ..SimulationInputs::default()
        };
        assert_eq!(risk_estimate(&modest).decarbonization_potential, RiskLevel::Low);
    }
}
