//! Transaction CLI commands

use std::io;
use std::path::PathBuf;

use clap::Subcommand;
use tracing::info;

use crate::catalog::Catalog;
use crate::config::settings::Settings;
use crate::display::{format_transaction_details, format_transaction_list};
use crate::error::{DealDeskError, DealResult};
use crate::export::{
    export_report_json, export_report_yaml, export_transactions_csv, ReportFormat,
    TransactionReport,
};
use crate::services::TransactionService;
use crate::storage::{write_string_atomic, Storage};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// List sample and committed transactions
    List {
        /// Only show transactions that are not completed
        #[arg(short, long)]
        active: bool,
        /// Write the list as CSV to this file instead
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Show a transaction report
    Show {
        /// Transaction ID
        id: String,
    },
    /// Export a transaction report as JSON or YAML
    Export {
        /// Transaction ID
        id: String,
        /// Output format (json or yaml)
        #[arg(short, long, default_value = "json")]
        format: String,
        /// Output file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn handle_transaction_command(
    catalog: &Catalog,
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> DealResult<()> {
    let service = TransactionService::new(catalog, storage);

    match cmd {
        TransactionCommands::List { active, csv } => {
            let mut records = service.list()?;
            if active {
                records.retain(|r| r.is_active());
            }

            match csv {
                Some(path) => {
                    let mut buffer = Vec::new();
                    export_transactions_csv(&records, &mut buffer)?;
                    let text = String::from_utf8(buffer)
                        .map_err(|e| DealDeskError::Export(e.to_string()))?;
                    write_string_atomic(&path, &text)?;
                    println!("Wrote {} transactions to {}", records.len(), path.display());
                }
                None => {
                    print!(
                        "{}",
                        format_transaction_list(&records, &settings.date_format)
                    );
                    println!();
                }
            }
        }

        TransactionCommands::Show { id } => {
            let record = service.get(&id)?;
            print!(
                "{}",
                format_transaction_details(&record, &settings.date_format)
            );
        }

        TransactionCommands::Export { id, format, output } => {
            let format: ReportFormat = format.parse().map_err(DealDeskError::Validation)?;
            let report = TransactionReport::new(service.get(&id)?);

            let mut buffer = Vec::new();
            match format {
                ReportFormat::Json => export_report_json(&report, &mut buffer, true)?,
                ReportFormat::Yaml => export_report_yaml(&report, &mut buffer)?,
            }
            let text =
                String::from_utf8(buffer).map_err(|e| DealDeskError::Export(e.to_string()))?;

            match output {
                Some(path) => {
                    write_string_atomic(&path, &text)?;
                    info!(id = %id, path = %path.display(), %format, "Exported transaction report");
                    println!("Exported {} report to {}", format, path.display());
                }
                None => {
                    use io::Write;
                    let mut stdout = io::stdout().lock();
                    stdout.write_all(text.as_bytes())?;
                    writeln!(stdout)?;
                }
            }
        }
    }

    Ok(())
}
