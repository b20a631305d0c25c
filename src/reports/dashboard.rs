//! Dashboard report
//!
//! Headline figures over every known transaction plus the most recent ones.

use crate::metrics::{dashboard_metrics, DashboardMetrics};
use crate::models::TransactionRecord;

const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub metrics: DashboardMetrics,
    /// Most recent first
    pub recent: Vec<TransactionRecord>,
}

impl DashboardReport {
    pub fn generate(records: &[TransactionRecord]) -> Self {
        let mut recent = records.to_vec();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(RECENT_LIMIT);

        Self {
            metrics: dashboard_metrics(records),
            recent,
        }
    }

    pub fn format_terminal(&self, date_format: &str) -> String {
        let mut output = String::new();

        output.push_str("Dashboard\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total Portfolio Value: {:>16}\n",
            self.metrics.total_value.format_millions()
        ));
        output.push_str(&format!(
            "Total Assets:          {:>16}\n",
            self.metrics.total_assets
        ));
        output.push_str(&format!(
            "Active Transactions:   {:>16}\n",
            format!(
                "{} of {}",
                self.metrics.active_transactions, self.metrics.transaction_count
            )
        ));
        output.push('\n');

        output.push_str("Recent Transactions\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        if self.recent.is_empty() {
            output.push_str("No transactions yet.\n");
        }
        for record in &self.recent {
            output.push_str(&format!(
                "{:<32} {:>10} {:<12} {}\n",
                record.name,
                record.value.format_millions(),
                record.status.to_string(),
                record.date.format(date_format)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use crate::models::Money;

    #[test]
    fn test_dashboard_figures() {
        let report = DashboardReport::generate(&fixtures::transactions());
        assert_eq!(report.metrics.total_value, Money::from_euros(7_550_000));
        assert_eq!(report.metrics.total_assets, 6);
        assert_eq!(report.metrics.active_transactions, 2);
        assert_eq!(report.recent[0].name, "Berlin Portfolio Acquisition");

        let output = report.format_terminal("%b %-d, %Y");
        assert!(output.contains("€3.5M"));
        assert!(output.contains("2 of 3"));
    }

    #[test]
    fn test_empty_dashboard() {
        let report = DashboardReport::generate(&[]);
        let output = report.format_terminal("%Y-%m-%d");
        assert!(output.contains("No transactions yet."));
    }
}
