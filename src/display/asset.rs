//! Asset display formatting

use crate::metrics::{cap_rate, occupancy, unit_occupancy};
use crate::models::Asset;

use super::{bullet_list, column_width, percent};

/// Format assets as a table
pub fn format_asset_list(assets: &[Asset]) -> String {
    if assets.is_empty() {
        return "No assets found.".to_string();
    }

    let id_width = column_width("ID", assets.iter().map(|a| a.id.as_str()));
    let name_width = column_width("Name", assets.iter().map(|a| a.name.as_str()));
    let type_width = column_width("Type", assets.iter().map(|a| a.asset_type.as_str()));

    let mut output = String::new();
    output.push_str(&format!(
        "{:<id_width$}  {:<name_width$}  {:<type_width$}  {:>14}  {:>6}  {:<8}  {:<9}  {}\n",
        "ID", "Name", "Type", "Value", "ROI", "Decarb.", "Liquidity", "Source",
    ));
    output.push_str(&format!(
        "{:-<id_width$}  {:-<name_width$}  {:-<type_width$}  {:->14}  {:->6}  {:-<8}  {:-<9}  {:-<10}\n",
        "", "", "", "", "", "", "", "",
    ));

    for asset in assets {
        output.push_str(&format!(
            "{:<id_width$}  {:<name_width$}  {:<type_width$}  {:>14}  {:>6}  {:<8}  {:<9}  {}\n",
            asset.id.as_str(),
            asset.name,
            asset.asset_type,
            asset.portfolio_value.format_whole(),
            format!("{:.1}%", asset.roi),
            asset.decarbonization.to_string(),
            asset.liquidity_rating.to_string(),
            asset.source,
        ));
    }

    let total: crate::models::Money = assets.iter().map(|a| a.portfolio_value).sum();
    output.push_str(&format!(
        "{:<id_width$}  {:<name_width$}  {:<type_width$}  {:>14}\n",
        "", "TOTAL", "", total.format_whole(),
    ));

    output
}

/// Format one asset with its performance and buildings
pub fn format_asset_details(asset: &Asset) -> String {
    let mut output = String::new();

    output.push_str(&format!("Asset: {}\n", asset.name));
    output.push_str(&format!("  ID:              {}\n", asset.id));
    output.push_str(&format!("  Location:        {}\n", asset.location));
    output.push_str(&format!("  Type:            {}\n", asset.asset_type));
    output.push_str(&format!(
        "  Portfolio Value: {}\n",
        asset.portfolio_value.format_whole()
    ));
    output.push_str(&format!("  ROI:             {:.1}%\n", asset.roi));
    output.push_str(&format!(
        "  Decarbonization: {}{}\n",
        asset.decarbonization,
        asset
            .decarbonization_score
            .map(|s| format!(" ({:.0}/100)", s))
            .unwrap_or_default()
    ));
    output.push_str(&format!("  Liquidity:       {}\n", asset.liquidity_rating));
    if let Some(score) = asset.matching_score {
        output.push_str(&format!("  Matching Score:  {:.0}%\n", score));
    }

    if let Some(perf) = &asset.performance {
        let income = perf.net_operating_income + perf.operating_expenses;
        output.push_str("\nPerformance\n");
        output.push_str(&format!(
            "  Reported Occupancy:   {:.1}%\n",
            perf.occupancy_rate
        ));
        output.push_str(&format!("  Gross Income:         {}\n", income.format_whole()));
        output.push_str(&format!(
            "  Operating Expenses:   {}\n",
            perf.operating_expenses.format_whole()
        ));
        output.push_str(&format!(
            "  Net Operating Income: {}\n",
            perf.net_operating_income.format_whole()
        ));
        output.push_str(&format!(
            "  Cap Rate:             {}\n",
            percent(cap_rate(perf.net_operating_income, asset.portfolio_value))
        ));
    }

    if let Some(future) = &asset.future_potential {
        output.push_str("\nFuture Potential\n");
        output.push_str(&format!(
            "  Value Appreciation: {}\n",
            future.value_appreciation
        ));
        output.push_str(&format!("  Market Outlook:     {}\n", future.market_outlook));
        output.push_str("  Development Opportunities:\n");
        output.push_str(&bullet_list(&future.development_opportunities, "    "));
    }

    if !asset.buildings.is_empty() {
        output.push_str(&format!(
            "\nBuildings ({} units total)\n",
            asset.unit_count()
        ));
        let name_width = column_width("Name", asset.buildings.iter().map(|b| b.name.as_str()));
        output.push_str(&format!(
            "  {:<4}  {:<name_width$}  {:<12}  {:>5}  {:>9}  {:>9}\n",
            "ID", "Name", "Type", "Units", "Reported", "Physical",
        ));
        for building in &asset.buildings {
            let physical = if building.estates.is_empty() {
                "-".to_string()
            } else {
                percent(occupancy(&building.estates).rate)
            };
            output.push_str(&format!(
                "  {:<4}  {:<name_width$}  {:<12}  {:>5}  {:>9}  {:>9}\n",
                building.id.as_str(),
                building.name,
                building.building_type,
                building.units,
                format!("{:.1}%", building.occupancy_rate),
                physical,
            ));
        }
        let estates: Vec<_> = asset
            .buildings
            .iter()
            .flat_map(|b| b.estates.iter().cloned())
            .collect();
        let units = unit_occupancy(&estates);
        if units.total > 0 {
            output.push_str(&format!(
                "  Tracked units occupied: {}/{}\n",
                units.occupied, units.total
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    #[test]
    fn test_asset_list() {
        let output = format_asset_list(&fixtures::portfolio_assets());
        assert!(output.contains("Kreuzberg Residential Complex"));
        assert!(output.contains("€12,500,000"));
        assert!(output.contains("€22,300,000"));
        assert!(output.contains("Direct"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_asset_list(&[]), "No assets found.");
    }

    #[test]
    fn test_asset_details() {
        let assets = fixtures::portfolio_assets();
        let output = format_asset_details(&assets[0]);
        assert!(output.contains("Decarbonization: High (85/100)"));
        assert!(output.contains("Net Operating Income: €980,000"));
        assert!(output.contains("Gross Income:         €1,430,000"));
        assert!(output.contains("Cap Rate:             7.8%"));
        assert!(output.contains("Bergmannstraße Building"));
        assert!(output.contains("63.7%"));
        assert!(output.contains("Tracked units occupied: 2/3"));
    }
}
