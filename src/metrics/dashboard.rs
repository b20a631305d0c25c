//! Headline figures for the dashboard

use serde::Serialize;

use crate::models::{Money, TransactionRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    pub total_value: Money,
    pub total_assets: u32,
    pub active_transactions: usize,
    pub transaction_count: usize,
}

pub fn dashboard_metrics(records: &[TransactionRecord]) -> DashboardMetrics {
    DashboardMetrics {
        total_value: records.iter().map(|r| r.value).sum(),
        total_assets: records.iter().map(|r| r.asset_count).sum(),
        active_transactions: records.iter().filter(|r| r.is_active()).count(),
        transaction_count: records.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    #[test]
    fn test_fixture_dashboard() {
        let metrics = dashboard_metrics(&fixtures::transactions());
        assert_eq!(metrics.total_value, Money::from_euros(7_550_000));
        assert_eq!(metrics.total_assets, 6);
        assert_eq!(metrics.active_transactions, 2);
        assert_eq!(metrics.transaction_count, 3);
    }

    #[test]
    fn test_empty() {
        let metrics = dashboard_metrics(&[]);
        assert_eq!(metrics.total_value, Money::zero());
        assert_eq!(metrics.active_transactions, 0);
    }
}
