//! Report CLI commands

use clap::Subcommand;

use crate::catalog::Catalog;
use crate::error::{DealDeskError, DealResult};
use crate::models::{Money, SelectedAsset, SimulationInputs};
use crate::reports::{PortfolioReport, RiskReport};

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Per-asset economics of the portfolio
    Portfolio,
    /// Decarbonization risk with a what-if simulation
    Risk {
        /// Asset IDs to include (all profiles when omitted)
        #[arg(short, long = "asset")]
        assets: Vec<String>,
        /// Retrofit investment, e.g. 500k or 1.2M
        #[arg(long, default_value = "500k")]
        investment: String,
        /// Expected energy savings in percent
        #[arg(long, default_value_t = 30.0)]
        savings: f64,
        /// Targeted carbon reduction in percent
        #[arg(long, default_value_t = 50.0)]
        carbon: f64,
    },
}

pub fn handle_report_command(catalog: &Catalog, cmd: ReportCommands) -> DealResult<()> {
    match cmd {
        ReportCommands::Portfolio => {
            print!(
                "{}",
                PortfolioReport::generate(catalog.assets()).format_terminal()
            );
        }

        ReportCommands::Risk {
            assets,
            investment,
            savings,
            carbon,
        } => {
            let investment = Money::parse(&investment)
                .map_err(|e| DealDeskError::Validation(e.to_string()))?;
            if investment.is_negative() {
                return Err(DealDeskError::Validation(
                    "Investment cannot be negative".into(),
                ));
            }
            for (label, value) in [("savings", savings), ("carbon", carbon)] {
                if !(0.0..=100.0).contains(&value) {
                    return Err(DealDeskError::Validation(format!(
                        "{} must be between 0 and 100",
                        label
                    )));
                }
            }

            let profiles = if assets.is_empty() {
                catalog.risk_profiles().to_vec()
            } else {
                let selected = assets
                    .iter()
                    .map(|id| catalog.asset(id).map(SelectedAsset::from))
                    .collect::<DealResult<Vec<_>>>()?;
                catalog.risk_profiles_for(&selected)
            };

            let inputs = SimulationInputs {
                investment,
                energy_savings_pct: savings,
                carbon_reduction_pct: carbon,
            };
            print!("{}", RiskReport::generate(&profiles, inputs).format_terminal());
        }
    }
    Ok(())
}
