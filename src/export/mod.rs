//! Export module for DealDesk
//!
//! Transaction reports and listings in several formats:
//! - JSON: machine-readable transaction report
//! - YAML: human-readable transaction report
//! - CSV: the transaction list, spreadsheet-compatible

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::str::FromStr;

pub use self::csv::export_transactions_csv;
pub use json::{export_report_json, import_report_json, TransactionReport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_report_yaml;

/// Output format for a single transaction report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Json,
    Yaml,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("Unknown report format: {} (expected json or yaml)", other)),
        }
    }
}
