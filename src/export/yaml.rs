//! YAML report export

use std::io::Write;

use crate::error::{DealDeskError, DealResult};
use crate::export::json::TransactionReport;

/// Write a report as YAML with a short comment header
pub fn export_report_yaml<W: Write>(report: &TransactionReport, writer: &mut W) -> DealResult<()> {
    let export_err = |e: std::io::Error| DealDeskError::Export(e.to_string());

    writeln!(writer, "# DealDesk Transaction Report").map_err(export_err)?;
    writeln!(writer, "# Transaction: {}", report.transaction.name).map_err(export_err)?;
    writeln!(writer, "# Generated: {}", report.exported_at).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, report).map_err(|e| DealDeskError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    #[test]
    fn test_yaml_export() {
        let report = TransactionReport::new(fixtures::transactions().remove(0));
        let mut buffer = Vec::new();
        export_report_yaml(&report, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("# DealDesk Transaction Report"));
        assert!(text.contains("name: Berlin Portfolio Acquisition"));

        let parsed: TransactionReport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.transaction, report.transaction);
    }
}
