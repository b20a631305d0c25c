//! Aggregates over selected assets and risk profiles

use serde::Serialize;

use crate::models::{Money, RiskLevel, RiskProfile, SelectedAsset};

/// Sum of portfolio values
pub fn total_value(assets: &[SelectedAsset]) -> Money {
    assets.iter().map(|a| a.portfolio_value).sum()
}

/// Mean ROI in percent, `None` for an empty selection
pub fn average_roi(assets: &[SelectedAsset]) -> Option<f64> {
    mean(assets.iter().map(|a| a.roi))
}

/// Mean decarbonization score over assets that carry one
pub fn average_decarbonization_score(assets: &[SelectedAsset]) -> Option<f64> {
    mean(assets.iter().filter_map(|a| a.decarbonization_score))
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Portfolio-level risk aggregates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSummary {
    pub total_investment: Money,
    /// Sum of the potential reductions, reported in tons per year
    pub total_reduction: f64,
    pub average_roi: Option<f64>,
    pub high_risk_count: usize,
    pub asset_count: usize,
    /// Highest risk level present, if any profile exists
    pub overall_risk: Option<RiskLevel>,
}

pub fn risk_summary(profiles: &[RiskProfile]) -> RiskSummary {
    RiskSummary {
        total_investment: profiles.iter().map(|p| p.required_investment).sum(),
        total_reduction: profiles.iter().map(|p| p.potential_reduction).sum(),
        average_roi: mean(profiles.iter().map(|p| p.roi)),
        high_risk_count: profiles
            .iter()
            .filter(|p| p.risk_level == RiskLevel::High)
            .count(),
        asset_count: profiles.len(),
        overall_risk: profiles.iter().map(|p| p.risk_level).max(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use crate::models::{Asset, SelectedAsset};
    use proptest::prelude::*;

    fn selected(value: i64, roi: f64) -> SelectedAsset {
        SelectedAsset::from(&Asset::new(
            "x",
            "Asset",
            "Berlin, Germany",
            "Residential",
            Money::from_euros(value),
            roi,
        ))
    }

    #[test]
    fn test_two_asset_example() {
        let assets = vec![selected(12_500_000, 7.8), selected(9_800_000, 8.9)];
        assert_eq!(total_value(&assets), Money::from_euros(22_300_000));
        let avg = average_roi(&assets).unwrap();
        assert!((avg - 8.35).abs() < 1e-9);
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(total_value(&[]), Money::zero());
        assert_eq!(average_roi(&[]), None);
        assert_eq!(average_decarbonization_score(&[]), None);
    }

    #[test]
    fn test_decarbonization_skips_missing_scores() {
        let mut a = selected(1, 5.0);
        a.decarbonization_score = Some(85.0);
        let b = selected(1, 5.0);
        assert_eq!(average_decarbonization_score(&[a, b]), Some(85.0));
    }

    #[test]
    fn test_risk_summary_over_fixtures() {
        let summary = risk_summary(&fixtures::risk_profiles());
        assert_eq!(summary.total_investment, Money::from_euros(1_250_000));
        assert_eq!(summary.total_reduction, 155.0);
        assert!((summary.average_roi.unwrap() - 8.35).abs() < 1e-9);
        assert_eq!(summary.high_risk_count, 0);
        assert_eq!(summary.overall_risk, Some(RiskLevel::Medium));
    }

    #[test]
    fn test_risk_summary_empty() {
        let summary = risk_summary(&[]);
        assert_eq!(summary.average_roi, None);
        assert_eq!(summary.overall_risk, None);
        assert_eq!(summary.asset_count, 0);
    }

    proptest! {
        #[test]
        fn average_roi_is_sum_over_length(
            rows in prop::collection::vec((0i64..50_000_000, 0.0f64..25.0), 1..20)
        ) {
            let assets: Vec<_> = rows.iter().map(|(v, r)| selected(*v, *r)).collect();
            let expected_roi = rows.iter().map(|(_, r)| r).sum::<f64>() / rows.len() as f64;
            let expected_value: i64 = rows.iter().map(|(v, _)| v).sum();

            let avg = average_roi(&assets).unwrap();
            prop_assert!((avg - expected_roi).abs() < 1e-9);
            prop_assert_eq!(total_value(&assets), Money::from_euros(expected_value));
        }

        #[test]
        fn average_roi_lies_within_bounds(
            rois in prop::collection::vec(0.0f64..25.0, 1..20)
        ) {
            let assets: Vec<_> = rois.iter().map(|r| selected(1, *r)).collect();
            let avg = average_roi(&assets).unwrap();
            let min = rois.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = rois.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(avg >= min - 1e-9 && avg <= max + 1e-9);
            prop_assert!(!avg.is_nan());
        }
    }
}
