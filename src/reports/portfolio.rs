//! Portfolio report
//!
//! Per-asset economics with portfolio totals.

use crate::metrics::{cap_rate, occupancy};
use crate::models::{Asset, Money};

use crate::display::percent;

#[derive(Debug, Clone)]
pub struct AssetEconomics {
    pub name: String,
    pub value: Money,
    pub roi: f64,
    pub net_operating_income: Option<Money>,
    pub cap_rate: Option<f64>,
    pub reported_occupancy: Option<f64>,
    /// Area-weighted over every tracked estate of the asset
    pub physical_occupancy: Option<f64>,
    pub units: u32,
}

#[derive(Debug, Clone)]
pub struct PortfolioReport {
    pub rows: Vec<AssetEconomics>,
    pub total_value: Money,
    pub total_noi: Money,
    /// NOI-weighted over assets reporting NOI
    pub portfolio_cap_rate: Option<f64>,
}

impl PortfolioReport {
    pub fn generate(assets: &[Asset]) -> Self {
        let rows: Vec<AssetEconomics> = assets
            .iter()
            .map(|asset| {
                let noi = asset.performance.as_ref().map(|p| p.net_operating_income);
                let estates: Vec<_> = asset
                    .buildings
                    .iter()
                    .flat_map(|b| b.estates.iter().cloned())
                    .collect();
                AssetEconomics {
                    name: asset.name.clone(),
                    value: asset.portfolio_value,
                    roi: asset.roi,
                    net_operating_income: noi,
                    cap_rate: noi.and_then(|n| cap_rate(n, asset.portfolio_value)),
                    reported_occupancy: asset.performance.as_ref().map(|p| p.occupancy_rate),
                    physical_occupancy: occupancy(&estates).rate,
                    units: asset.unit_count(),
                }
            })
            .collect();

        let total_value = rows.iter().map(|r| r.value).sum();
        let total_noi: Money = rows.iter().filter_map(|r| r.net_operating_income).sum();
        let noi_value: Money = rows
            .iter()
            .filter(|r| r.net_operating_income.is_some())
            .map(|r| r.value)
            .sum();

        Self {
            rows,
            total_value,
            total_noi,
            portfolio_cap_rate: cap_rate(total_noi, noi_value),
        }
    }

    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Portfolio Report\n");
        output.push_str(&"=".repeat(96));
        output.push('\n');
        output.push_str(&format!(
            "{:<32} {:>12} {:>6} {:>10} {:>8} {:>9} {:>9} {:>5}\n",
            "Asset", "Value", "ROI", "NOI", "Cap", "Reported", "Physical", "Units"
        ));
        output.push_str(&"-".repeat(96));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<32} {:>12} {:>6} {:>10} {:>8} {:>9} {:>9} {:>5}\n",
                row.name,
                row.value.format_millions(),
                format!("{:.1}%", row.roi),
                row.net_operating_income
                    .map(|n| n.format_thousands())
                    .unwrap_or_else(|| "-".into()),
                row.cap_rate
                    .map(|c| format!("{:.1}%", c))
                    .unwrap_or_else(|| "-".into()),
                row.reported_occupancy
                    .map(|o| format!("{:.1}%", o))
                    .unwrap_or_else(|| "-".into()),
                row.physical_occupancy
                    .map(|o| format!("{:.1}%", o))
                    .unwrap_or_else(|| "-".into()),
                row.units,
            ));
        }

        output.push_str(&"-".repeat(96));
        output.push('\n');
        output.push_str(&format!(
            "{:<32} {:>12} {:>6} {:>10} {:>8}\n",
            "TOTAL",
            self.total_value.format_millions(),
            "",
            self.total_noi.format_thousands(),
            percent(self.portfolio_cap_rate),
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    #[test]
    fn test_portfolio_report() {
        let report = PortfolioReport::generate(&fixtures::portfolio_assets());
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.total_value, Money::from_euros(22_300_000));
        assert_eq!(report.total_noi, Money::from_euros(980_000));

        let kreuzberg = &report.rows[0];
        assert_eq!(kreuzberg.units, 42);
        assert!(kreuzberg.physical_occupancy.is_some());
        assert!(report.rows[1].cap_rate.is_none());

        let output = report.format_terminal();
        assert!(output.contains("€980k"));
        assert!(output.contains("€22.3M"));
    }
}
