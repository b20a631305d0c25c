//! CSV asset import
//!
//! Parses screening assets from a CSV file with a header row. Each row is
//! validated on its own; bad rows are reported and the rest still import.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{DealDeskError, DealResult};
use crate::models::{Asset, AssetId, AssetSource, Money};

/// Header row of the import template
pub const CSV_HEADER: &str = "name,location,type,portfolio_value,roi,decarbonization,decarbonization_score,liquidity_rating,matching_score";

const REQUIRED_COLUMNS: [&str; 4] = ["name", "location", "portfolio_value", "roi"];

const DEFAULT_ASSET_TYPE: &str = "Multi Family Home";

#[derive(Debug, Deserialize)]
struct RawRow {
    name: String,
    location: String,
    #[serde(rename = "type", default)]
    asset_type: Option<String>,
    portfolio_value: String,
    roi: String,
    #[serde(default)]
    decarbonization: Option<String>,
    #[serde(default)]
    decarbonization_score: Option<String>,
    #[serde(default)]
    liquidity_rating: Option<String>,
    #[serde(default)]
    matching_score: Option<String>,
}

/// A row that could not be imported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// Line in the file, counting the header as line 1
    pub line: usize,
    pub message: String,
}

/// Outcome of parsing an import file
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub imported: Vec<Asset>,
    pub errors: Vec<RowError>,
}

impl ImportReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// CSV parser for screening assets
#[derive(Debug, Clone)]
pub struct AssetImporter {
    delimiter: u8,
}

impl Default for AssetImporter {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl AssetImporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn parse_file(&self, path: &Path) -> DealResult<ImportReport> {
        let file = File::open(path).map_err(|e| {
            DealDeskError::Import(format!("Cannot open {}: {}", path.display(), e))
        })?;
        self.parse_reader(file)
    }

    /// Parse CSV data
    ///
    /// Fails only when the header is unusable; row problems are collected
    /// into the report.
    pub fn parse_reader<R: Read>(&self, reader: R) -> DealResult<ImportReport> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|col| !headers.iter().any(|h| h == *col))
            .collect();
        if !missing.is_empty() {
            return Err(DealDeskError::Import(format!(
                "Missing required columns: {}",
                missing.join(", ")
            )));
        }

        let mut report = ImportReport::default();
        for (index, result) in reader.deserialize::<RawRow>().enumerate() {
            let line = index + 2;
            let outcome = result
                .map_err(|e| e.to_string())
                .and_then(asset_from_row);
            match outcome {
                Ok(asset) => report.imported.push(asset),
                Err(message) => {
                    warn!(line, %message, "Skipping import row");
                    report.errors.push(RowError { line, message });
                }
            }
        }

        debug!(
            imported = report.imported.len(),
            errors = report.errors.len(),
            "Parsed asset import"
        );
        Ok(report)
    }
}

fn asset_from_row(raw: RawRow) -> Result<Asset, String> {
    if raw.name.is_empty() {
        return Err("name is required".into());
    }
    if raw.location.is_empty() {
        return Err("location is required".into());
    }

    let value = Money::parse(&raw.portfolio_value)
        .map_err(|e| format!("portfolio_value: {}", e))?;
    if !value.is_positive() {
        return Err("portfolio_value must be positive".into());
    }

    let roi = parse_percent("roi", &raw.roi)?;

    let asset_type = raw
        .asset_type
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_ASSET_TYPE.to_string());

    let id = AssetId::new(format!("imp-{}", &Uuid::new_v4().simple().to_string()[..8]));
    let mut asset = Asset::new(id, raw.name, raw.location, asset_type, value, roi);
    asset.source = AssetSource::Upload;

    if let Some(rating) = non_empty(raw.decarbonization) {
        asset.decarbonization = rating.parse()?;
    }
    if let Some(rating) = non_empty(raw.liquidity_rating) {
        asset.liquidity_rating = rating.parse()?;
    }
    if let Some(score) = non_empty(raw.decarbonization_score) {
        asset.decarbonization_score = Some(parse_percent("decarbonization_score", &score)?);
    }
    if let Some(score) = non_empty(raw.matching_score) {
        asset.matching_score = Some(parse_percent("matching_score", &score)?);
    }

    Ok(asset)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// A number in 0..=100, with or without a trailing percent sign
fn parse_percent(column: &str, value: &str) -> Result<f64, String> {
    let number: f64 = value
        .trim_end_matches('%')
        .trim()
        .parse()
        .map_err(|_| format!("{}: not a number: {}", column, value))?;
    if !(0.0..=100.0).contains(&number) {
        return Err(format!("{}: {} is outside 0-100", column, number));
    }
    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DecarbonizationRating, LiquidityRating};

    #[test]
    fn test_parse_valid_rows() {
        let data = format!(
            "{}\nMoabit Apartments,\"Berlin, Germany\",,\"€2,100,000\",8.7,High,78,A,91\nSpandau Homes,\"Berlin, Germany\",Residential,1.5M,7.2%,,,,\n",
            CSV_HEADER
        );
        let report = AssetImporter::new().parse_reader(data.as_bytes()).unwrap();
        assert!(!report.has_errors());
        assert_eq!(report.imported.len(), 2);

        let moabit = &report.imported[0];
        assert_eq!(moabit.asset_type, "Multi Family Home");
        assert_eq!(moabit.portfolio_value, Money::from_euros(2_100_000));
        assert_eq!(moabit.decarbonization, DecarbonizationRating::High);
        assert_eq!(moabit.liquidity_rating, LiquidityRating::A);
        assert_eq!(moabit.matching_score, Some(91.0));
        assert_eq!(moabit.source, AssetSource::Upload);
        assert!(moabit.id.as_str().starts_with("imp-"));

        let spandau = &report.imported[1];
        assert_eq!(spandau.roi, 7.2);
        assert_eq!(spandau.decarbonization_score, None);
        assert_eq!(spandau.liquidity_rating, LiquidityRating::B);
    }

    #[test]
    fn test_bad_rows_are_reported() {
        let data = "name,location,portfolio_value,roi\n\
                    Good,Berlin,1000000,8\n\
                    ,Berlin,1000000,8\n\
                    Cheap,Berlin,-5,8\n\
                    Greedy,Berlin,1000000,180\n";
        let report = AssetImporter::new().parse_reader(data.as_bytes()).unwrap();
        assert_eq!(report.imported.len(), 1);
        let lines: Vec<usize> = report.errors.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![3, 4, 5]);
        assert_eq!(report.errors[0].message, "name is required");
    }

    #[test]
    fn test_malformed_value_rows_are_reported() {
        let data = "name,location,portfolio_value,roi\n\
                    Good,Berlin,1000000,8\n\
                    Euro Cents,Berlin,1.€,8\n\
                    Signed Cents,Berlin,1.-5,8\n\
                    Huge,Berlin,99999999999999999,8\n";
        let report = AssetImporter::new().parse_reader(data.as_bytes()).unwrap();
        assert_eq!(report.imported.len(), 1);
        let lines: Vec<usize> = report.errors.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![3, 4, 5]);
        assert!(report.errors[0].message.starts_with("portfolio_value"));
    }

    #[test]
    fn test_missing_columns_fail() {
        let err = AssetImporter::new()
            .parse_reader("name,location\nA,B\n".as_bytes())
            .unwrap_err();
        assert!(err.to_string().contains("portfolio_value, roi"));
    }

    #[test]
    fn test_semicolon_delimiter() {
        let data = "name;location;portfolio_value;roi\nA;Berlin;900000;6.5\n";
        let report = AssetImporter::new()
            .with_delimiter(b';')
            .parse_reader(data.as_bytes())
            .unwrap();
        assert_eq!(report.imported.len(), 1);
    }
}
