//! JSON report export
//!
//! A report wraps one transaction record with the figures derived from it
//! and a schema version.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DealDeskError, DealResult};
use crate::metrics::{average_roi, round1, total_value};
use crate::models::{Money, TransactionRecord};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A transaction report as exported to a file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionReport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub transaction: TransactionRecord,
    pub figures: ReportFigures,
}

/// Figures recomputed from the record at export time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportFigures {
    /// Sum of the selected assets' portfolio values
    pub total_asset_value: Money,
    pub average_roi: Option<f64>,
    pub stakeholder_count: usize,
    pub approved_count: usize,
    pub document_count: usize,
}

impl TransactionReport {
    pub fn new(record: TransactionRecord) -> Self {
        let figures = match &record.detail {
            Some(detail) => ReportFigures {
                total_asset_value: total_value(&detail.selected_assets),
                average_roi: average_roi(&detail.selected_assets).map(round1),
                stakeholder_count: detail.stakeholders.len(),
                approved_count: detail
                    .stakeholders
                    .iter()
                    .filter(|s| s.status == crate::models::ApprovalStatus::Approved)
                    .count(),
                document_count: detail.due_diligence.documents.len(),
            },
            None => ReportFigures {
                total_asset_value: Money::zero(),
                average_roi: None,
                stakeholder_count: 0,
                approved_count: 0,
                document_count: 0,
            },
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transaction: record,
            figures,
        }
    }

    /// Check the schema version of a report read back from disk
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }
        Ok(())
    }
}

pub fn export_report_json<W: Write>(
    report: &TransactionReport,
    writer: &mut W,
    pretty: bool,
) -> DealResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, report)
    } else {
        serde_json::to_writer(writer, report)
    }
    .map_err(|e| DealDeskError::Export(e.to_string()))
}

/// Read a JSON report back, for verification
pub fn import_report_json(json_str: &str) -> DealResult<TransactionReport> {
    let report: TransactionReport =
        serde_json::from_str(json_str).map_err(|e| DealDeskError::Import(e.to_string()))?;
    report.validate().map_err(DealDeskError::Import)?;
    Ok(report)
}
