//! CSV export of the transaction list

use std::io::Write;

use crate::error::{DealDeskError, DealResult};
use crate::models::TransactionRecord;

/// Write one row per transaction
///
/// Values are whole euros so spreadsheets read them as numbers.
pub fn export_transactions_csv<W: Write>(
    records: &[TransactionRecord],
    writer: W,
) -> DealResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["ID", "Name", "Type", "Value", "Assets", "Status", "Date"])?;
    for record in records {
        let value = record.value.euros().to_string();
        let assets = record.asset_count.to_string();
        let status = record.status.to_string();
        let date = record.date.format("%Y-%m-%d").to_string();
        csv_writer.write_record([
            record.id.as_str(),
            record.name.as_str(),
            record.kind.as_str(),
            value.as_str(),
            assets.as_str(),
            status.as_str(),
            date.as_str(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| DealDeskError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    #[test]
    fn test_csv_export() {
        let mut buffer = Vec::new();
        export_transactions_csv(&fixtures::transactions(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "ID,Name,Type,Value,Assets,Status,Date");
        assert_eq!(
            lines[1],
            "1,Berlin Portfolio Acquisition,Acquisition,1250000,2,In Progress,2024-03-15"
        );
        assert_eq!(lines.len(), 4);
    }
}
