//! Transaction display formatting
//!
//! The list mirrors the transactions page; details mirror the transaction
//! report with its charts rendered as tables.

use crate::models::{ApprovalStatus, TransactionRecord};
use crate::wizard::NOT_SET;

use super::{bullet_list, column_width};

/// Format transactions as a table
pub fn format_transaction_list(records: &[TransactionRecord], date_format: &str) -> String {
    if records.is_empty() {
        return "No transactions found.".to_string();
    }

    let id_width = column_width("ID", records.iter().map(|r| r.id.as_str()));
    let name_width = column_width("Name", records.iter().map(|r| r.name.as_str()));
    let kind_width = column_width("Type", records.iter().map(|r| r.kind.as_str()));

    let mut output = String::new();
    output.push_str(&format!(
        "{:<id_width$}  {:<name_width$}  {:<kind_width$}  {:>12}  {:>6}  {:<11}  {}\n",
        "ID", "Name", "Type", "Value", "Assets", "Status", "Date",
    ));
    output.push_str(&format!(
        "{:-<id_width$}  {:-<name_width$}  {:-<kind_width$}  {:->12}  {:->6}  {:-<11}  {:-<12}\n",
        "", "", "", "", "", "", "",
    ));

    for record in records {
        output.push_str(&format!(
            "{:<id_width$}  {:<name_width$}  {:<kind_width$}  {:>12}  {:>6}  {:<11}  {}\n",
            record.id.as_str(),
            record.name,
            record.kind,
            record.value.format_whole(),
            record.asset_count,
            record.status.to_string(),
            record.date.format(date_format),
        ));
    }

    output
}

/// Format one transaction with its full report when available
pub fn format_transaction_details(record: &TransactionRecord, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", record.name));
    output.push_str(&format!("  ID:     {}\n", record.id));
    output.push_str(&format!("  Type:   {}\n", record.kind));
    output.push_str(&format!("  Value:  {}\n", record.value.format_whole()));
    output.push_str(&format!("  Assets: {}\n", record.asset_count));
    output.push_str(&format!("  Status: {}\n", record.status));
    output.push_str(&format!("  Date:   {}\n", record.date.format(date_format)));

    let Some(detail) = &record.detail else {
        output.push_str("\nNo detailed report available.\n");
        return output;
    };

    output.push_str("\nOverview\n");
    output.push_str(&format!("  Template:       {}\n", detail.template));
    output.push_str(&format!(
        "  Budget:         {}\n",
        detail
            .budget
            .map(|b| b.format_whole())
            .unwrap_or_else(|| NOT_SET.into())
    ));
    output.push_str(&format!(
        "  Strategic Goal: {}\n",
        detail
            .strategic_goal
            .map(|g| g.to_string())
            .unwrap_or_else(|| NOT_SET.into())
    ));
    if !detail.market.market_phase.is_empty() {
        output.push_str(&format!("  Market Phase:   {}\n", detail.market.market_phase));
    }
    if !detail.market.competition_level.is_empty() {
        output.push_str(&format!(
            "  Competition:    {}\n",
            detail.market.competition_level
        ));
    }
    if !detail.market.regulatory_environment.is_empty() {
        output.push_str(&format!(
            "  Regulation:     {}\n",
            detail.market.regulatory_environment
        ));
    }

    if !detail.selected_assets.is_empty() {
        output.push_str("\nSelected Assets\n");
        let name_width = column_width(
            "Name",
            detail.selected_assets.iter().map(|a| a.name.as_str()),
        );
        for asset in &detail.selected_assets {
            output.push_str(&format!(
                "  {:<name_width$}  {:>12}  {:>6}  {}\n",
                asset.name,
                asset.portfolio_value.format_whole(),
                format!("{:.1}%", asset.roi),
                asset.location,
            ));
        }
    }

    let dd = &detail.due_diligence;
    output.push_str(&format!(
        "\nDue Diligence: {} ({:.0}% complete)\n",
        dd.status, dd.completion_rate
    ));
    for doc in &dd.documents {
        output.push_str(&format!(
            "  {:<32}  {:<10}  {}\n",
            doc.name,
            doc.status,
            doc.date.format(date_format)
        ));
    }
    if !dd.key_findings.is_empty() {
        output.push_str("  Key Findings:\n");
        output.push_str(&bullet_list(&dd.key_findings, "    "));
    }

    let risk = &detail.risk;
    output.push_str(&format!("\nRisk Assessment: {}\n", risk.overall_risk));
    output.push_str(&format!(
        "  Total Investment:  {}\n",
        risk.total_investment.format_whole()
    ));
    output.push_str(&format!(
        "  Expected ROI:      {}\n",
        risk.expected_roi
            .map(|r| format!("{:.1}%", r))
            .unwrap_or_else(|| NOT_SET.into())
    ));
    output.push_str(&format!(
        "  Carbon Reduction:  {:.0} tons/year\n",
        risk.carbon_reduction
    ));
    for (label, items) in [
        ("Financial", &risk.financial_risks),
        ("Operational", &risk.operational_risks),
        ("Strategic", &risk.strategic_risks),
    ] {
        if !items.is_empty() {
            output.push_str(&format!("  {} Risks:\n", label));
            output.push_str(&bullet_list(items, "    "));
        }
    }

    if !detail.stakeholders.is_empty() {
        let approved = detail
            .stakeholders
            .iter()
            .filter(|s| s.status == ApprovalStatus::Approved)
            .count();
        output.push_str(&format!(
            "\nStakeholders ({}/{} approved)\n",
            approved,
            detail.stakeholders.len()
        ));
        for stakeholder in &detail.stakeholders {
            output.push_str(&format!(
                "  {:<40}  {}\n",
                stakeholder.to_string(),
                stakeholder.status
            ));
        }
    }

    let closing = &detail.closing;
    output.push_str("\nClosing\n");
    output.push_str(&format!(
        "  Target Date:    {}\n",
        closing
            .target_date
            .map(|d| d.format(date_format).to_string())
            .unwrap_or_else(|| NOT_SET.into())
    ));
    output.push_str(&format!(
        "  Payment Method: {}\n",
        closing
            .payment_method
            .map(|m| m.to_string())
            .unwrap_or_else(|| NOT_SET.into())
    ));
    if !closing.conditions.is_empty() {
        output.push_str("  Conditions:\n");
        output.push_str(&bullet_list(&closing.conditions, "    "));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    const FMT: &str = "%b %-d, %Y";

    #[test]
    fn test_transaction_list() {
        let output = format_transaction_list(&fixtures::transactions(), FMT);
        assert!(output.contains("Berlin Portfolio Acquisition"));
        assert!(output.contains("€1,250,000"));
        assert!(output.contains("Mar 15, 2024"));
        assert!(output.contains("In Progress"));
        assert_eq!(format_transaction_list(&[], FMT), "No transactions found.");
    }

    #[test]
    fn test_transaction_report() {
        let record = fixtures::transactions().remove(0);
        let output = format_transaction_details(&record, FMT);
        assert!(output.contains("Template:       Standard Acquisition"));
        assert!(output.contains("Due Diligence: In Progress (75% complete)"));
        assert!(output.contains("Risk Assessment: Medium"));
        assert!(output.contains("Expected ROI:      8.4%"));
        assert!(output.contains("Stakeholders (2/3 approved)"));
        assert!(output.contains("Payment Method: Bank Transfer"));
    }

    #[test]
    fn test_record_without_report() {
        let record = fixtures::transactions().remove(1);
        let output = format_transaction_details(&record, FMT);
        assert!(output.contains("No detailed report available."));
    }
}
