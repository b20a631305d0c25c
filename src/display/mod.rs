//! Display formatting for terminal output
//!
//! Formats catalog entities, transactions and the wizard summary bar as
//! plain-text tables and detail blocks.

pub mod asset;
pub mod building;
pub mod estate;
pub mod summary;
pub mod transaction;

pub use asset::{format_asset_details, format_asset_list};
pub use building::format_building_details;
pub use estate::format_estate_details;
pub use summary::format_summary_bar;
pub use transaction::{format_transaction_details, format_transaction_list};

use crate::wizard::NOT_AVAILABLE;

/// A percentage with one decimal, or "Not available"
pub fn percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.1}%", v),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Column width fitting a header and every value
pub(crate) fn column_width<'a, I>(header: &str, values: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.chars().count())
}

/// Bulleted list, or a dash line when empty
pub(crate) fn bullet_list(items: &[String], indent: &str) -> String {
    if items.is_empty() {
        return format!("{}-\n", indent);
    }
    items
        .iter()
        .map(|item| format!("{}• {}\n", indent, item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        assert_eq!(percent(Some(63.708)), "63.7%");
        assert_eq!(percent(None), "Not available");
        assert_eq!(percent(Some(f64::NAN)), "Not available");
    }

    #[test]
    fn test_column_width() {
        assert_eq!(column_width("Name", ["Bergmannstraße", "B"]), 14);
        assert_eq!(column_width("Status", std::iter::empty()), 6);
    }
}
