//! Decarbonization risk report
//!
//! The risk step's charts as tables: one row per profile, the aggregate
//! summary and the what-if simulation for the given inputs.

use crate::metrics::{risk_summary, simulate, RiskSummary, SimulationResult, LOW_ROI_THRESHOLD};
use crate::models::{RiskProfile, SimulationInputs};

use crate::display::percent;

#[derive(Debug, Clone)]
pub struct RiskReport {
    pub profiles: Vec<RiskProfile>,
    pub summary: RiskSummary,
    pub inputs: SimulationInputs,
    pub simulation: SimulationResult,
}

impl RiskReport {
    pub fn generate(profiles: &[RiskProfile], inputs: SimulationInputs) -> Self {
        Self {
            profiles: profiles.to_vec(),
            summary: risk_summary(profiles),
            inputs,
            simulation: simulate(&inputs),
        }
    }

    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Risk Assessment\n");
        output.push_str(&"=".repeat(84));
        output.push('\n');

        if self.profiles.is_empty() {
            output.push_str("No risk profiles for the selected assets.\n");
        } else {
            output.push_str(&format!(
                "{:<32} {:>10} {:>10} {:>12} {:>6} {:<7} {}\n",
                "Asset", "Emissions", "Reduction", "Investment", "ROI", "Risk", "Decarb."
            ));
            output.push_str(&"-".repeat(84));
            output.push('\n');
            for profile in &self.profiles {
                output.push_str(&format!(
                    "{:<32} {:>10} {:>10} {:>12} {:>6} {:<7} {}\n",
                    profile.asset_name,
                    format!("{:.0} t", profile.current_emissions),
                    format!("{:.0}%", profile.potential_reduction),
                    profile.required_investment.format_thousands(),
                    format!("{:.1}%", profile.roi),
                    profile.risk_level.to_string(),
                    profile.decarbonization_potential,
                ));
            }
        }

        output.push('\n');
        output.push_str(&format!(
            "Total Investment:  {}\n",
            self.summary.total_investment.format_whole()
        ));
        output.push_str(&format!(
            "Total Reduction:   {:.0} tons/year\n",
            self.summary.total_reduction
        ));
        output.push_str(&format!("Average ROI:       {}\n", percent(self.summary.average_roi)));
        output.push_str(&format!(
            "High Risk Assets:  {} of {}\n",
            self.summary.high_risk_count, self.summary.asset_count
        ));

        output.push_str("\nWhat-if Simulation\n");
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "Investment:        {}\n",
            self.inputs.investment.format_whole()
        ));
        output.push_str(&format!(
            "Energy Savings:    {:.0}%\n",
            self.inputs.energy_savings_pct
        ));
        output.push_str(&format!(
            "Carbon Target:     {:.0}%\n",
            self.inputs.carbon_reduction_pct
        ));
        output.push_str(&format!(
            "Projected ROI:     {:.1}%\n",
            self.simulation.projected_roi
        ));
        output.push_str(&format!(
            "Carbon Reduction:  {} tons/year\n",
            self.simulation.carbon_reduction_tons
        ));
        output.push_str(&format!(
            "Payback:           {}\n",
            self.simulation
                .payback_years
                .map(|y| format!("{} years", y))
                .unwrap_or_else(|| "never".into())
        ));
        if self.simulation.low_roi_warning {
            output.push_str(&format!(
                "Warning: projected ROI is below {:.0}%\n",
                LOW_ROI_THRESHOLD
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use crate::models::Money;

    #[test]
    fn test_risk_report() {
        let report = RiskReport::generate(&fixtures::risk_profiles(), SimulationInputs::default());
        let output = report.format_terminal();
        assert!(output.contains("Total Investment:  €1,250,000"));
        assert!(output.contains("Total Reduction:   155 tons/year"));
        assert!(output.contains("Projected ROI:     30.0%"));
        assert!(output.contains("Carbon Reduction:  175 tons/year"));
        assert!(output.contains("Payback:           4 years"));
        assert!(!output.contains("Warning"));
    }

    #[test]
    fn test_low_roi_warning() {
        let inputs = SimulationInputs {
            investment: Money::from_euros(100_000),
            energy_savings_pct: 2.0,
            carbon_reduction_pct: 10.0,
        };
        let report = RiskReport::generate(&[], inputs);
        let output = report.format_terminal();
        assert!(output.contains("No risk profiles"));
        assert!(output.contains("Average ROI:       Not available"));
        assert!(output.contains("Warning: projected ROI is below 5%"));
    }
}
