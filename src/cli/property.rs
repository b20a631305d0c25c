//! Building and estate CLI commands

use clap::Subcommand;

use crate::catalog::Catalog;
use crate::config::settings::Settings;
use crate::display::{format_building_details, format_estate_details};
use crate::error::DealResult;

#[derive(Subcommand)]
pub enum BuildingCommands {
    /// Show a building with its units
    Show {
        /// Asset ID
        asset: String,
        /// Building ID
        building: String,
    },
}

#[derive(Subcommand)]
pub enum EstateCommands {
    /// Show a unit with its tenant and lease
    Show {
        /// Asset ID
        asset: String,
        /// Building ID
        building: String,
        /// Estate ID
        estate: String,
    },
}

pub fn handle_building_command(catalog: &Catalog, cmd: BuildingCommands) -> DealResult<()> {
    match cmd {
        BuildingCommands::Show { asset, building } => {
            print!(
                "{}",
                format_building_details(catalog.building(&asset, &building)?)
            );
        }
    }
    Ok(())
}

pub fn handle_estate_command(
    catalog: &Catalog,
    settings: &Settings,
    cmd: EstateCommands,
) -> DealResult<()> {
    match cmd {
        EstateCommands::Show {
            asset,
            building,
            estate,
        } => {
            let estate = catalog.estate(&asset, &building, &estate)?;
            print!("{}", format_estate_details(estate, &settings.date_format));
        }
    }
    Ok(())
}
