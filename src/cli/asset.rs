//! Asset CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::catalog::Catalog;
use crate::display::{format_asset_details, format_asset_list};
use crate::error::{DealDeskError, DealResult};
use crate::services::{AssetImporter, AssetService, CSV_HEADER};
use crate::storage::Storage;

/// Asset subcommands
#[derive(Subcommand)]
pub enum AssetCommands {
    /// List portfolio assets
    List {
        /// List the screening universe (built-in and imported) instead
        #[arg(short, long)]
        screening: bool,
    },
    /// Show an asset with its performance and buildings
    Show {
        /// Asset ID
        asset: String,
    },
    /// Import screening assets from a CSV file
    Import {
        /// Path to the CSV file
        file: PathBuf,
        /// Field delimiter
        #[arg(short, long, default_value = ",")]
        delimiter: char,
        /// Parse and report without storing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the CSV header expected by import
    Template,
}

/// Handle an asset command
pub fn handle_asset_command(
    catalog: &Catalog,
    storage: &Storage,
    cmd: AssetCommands,
) -> DealResult<()> {
    let service = AssetService::new(catalog, storage);

    match cmd {
        AssetCommands::List { screening } => {
            if screening {
                print!("{}", format_asset_list(&service.screening_universe()?));
            } else {
                print!("{}", format_asset_list(service.portfolio()));
            }
            println!();
        }

        AssetCommands::Show { asset } => {
            print!("{}", format_asset_details(service.get(&asset)?));
        }

        AssetCommands::Import {
            file,
            delimiter,
            dry_run,
        } => {
            if !delimiter.is_ascii() {
                return Err(DealDeskError::Validation(format!(
                    "Delimiter must be a single ASCII character, got '{}'",
                    delimiter
                )));
            }
            let report = AssetImporter::new()
                .with_delimiter(delimiter as u8)
                .parse_file(&file)?;

            for error in &report.errors {
                eprintln!("Line {}: {}", error.line, error.message);
            }

            if dry_run {
                println!(
                    "Dry run: {} assets would be imported, {} rows skipped.",
                    report.imported.len(),
                    report.errors.len()
                );
                return Ok(());
            }

            let stored = service.save_imported(&report)?;
            println!(
                "Imported {} assets, {} rows skipped.",
                stored,
                report.errors.len()
            );
        }

        AssetCommands::Template => {
            println!("{}", CSV_HEADER);
        }
    }

    Ok(())
}
