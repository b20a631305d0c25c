//! Cross-step summary bar
//!
//! An ordered list of label/value pairs shown above every wizard step. Fields
//! accumulate as the cursor advances; later steps may override earlier values.

use serde::Serialize;

use crate::metrics::{
    average_decarbonization_score, average_roi, draft_progress, risk_summary, total_value,
};
use crate::models::{ApprovalStatus, RiskProfile, TransactionDraft};

use super::gate::missing_fields;
use super::step::WizardStep;

pub const NOT_SET: &str = "Not set";
pub const NOT_AVAILABLE: &str = "Not available";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryBar {
    pub step: WizardStep,
    pub fields: Vec<SummaryField>,
}

impl SummaryBar {
    /// Build the bar for `step`
    ///
    /// `profiles` are the risk profiles of the selected assets.
    pub fn for_step(
        step: WizardStep,
        draft: &TransactionDraft,
        profiles: &[RiskProfile],
        date_format: &str,
    ) -> Self {
        let mut bar = Self {
            step,
            fields: Vec::new(),
        };
        let n = step.number();

        bar.set(
            "Type",
            draft
                .transaction_type
                .map(|t| t.to_string())
                .unwrap_or_else(|| NOT_SET.into()),
        );
        bar.set("Status", draft.status.to_string());
        bar.set(
            "Date Initiated",
            draft
                .target_date
                .map(|d| d.format(date_format).to_string())
                .unwrap_or_else(|| NOT_SET.into()),
        );
        bar.set("Date Closed", NOT_AVAILABLE.into());
        bar.set(
            "Budget",
            draft
                .budget
                .map(|b| b.format_whole())
                .unwrap_or_else(|| NOT_SET.into()),
        );
        bar.set("Total Value", NOT_AVAILABLE.into());
        bar.set("Expected ROI", NOT_AVAILABLE.into());
        bar.set("Transaction Risk", NOT_AVAILABLE.into());
        bar.set(
            "Strategic Goal",
            draft
                .strategic_goal
                .map(|g| g.to_string())
                .unwrap_or_else(|| NOT_SET.into()),
        );
        bar.set("Market Conditions", NOT_AVAILABLE.into());

        if n >= 2 {
            let assets = &draft.selected_assets;
            bar.set(
                "Total Value",
                if assets.is_empty() {
                    NOT_SET.into()
                } else {
                    total_value(assets).format_whole()
                },
            );
            bar.set(
                "Expected ROI",
                average_roi(assets)
                    .map(|roi| format!("{:.1}%", roi))
                    .unwrap_or_else(|| NOT_SET.into()),
            );
            bar.set("Assets", assets.len().to_string());
            bar.set(
                "Transaction Risk",
                risk_summary(profiles)
                    .overall_risk
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| NOT_AVAILABLE.into()),
            );
            bar.set(
                "Market Conditions",
                draft
                    .region
                    .map(|r| format!("Focus on {} market", r))
                    .unwrap_or_else(|| NOT_AVAILABLE.into()),
            );
        }

        if n >= 3 {
            bar.set(
                "Due Diligence",
                format!("{:.0}% Complete", draft_progress(&draft.diligence)),
            );
            bar.set("Documents", draft.document_count().to_string());
        }

        if n >= 4 {
            bar.set(
                "Sustainability Score",
                average_decarbonization_score(&draft.selected_assets)
                    .map(|s| format!("{:.0}/100", s))
                    .unwrap_or_else(|| NOT_AVAILABLE.into()),
            );
            bar.set(
                "ROI Estimate",
                draft
                    .risk
                    .as_ref()
                    .map(|r| format!("{:.1}%", r.roi_estimate))
                    .unwrap_or_else(|| NOT_SET.into()),
            );
        }

        if n >= 5 {
            bar.set("Approval Status", approval_status(draft));
            bar.set("Stakeholders", draft.stakeholders.len().to_string());
            bar.set(
                "Next Approver",
                draft
                    .stakeholders
                    .iter()
                    .find(|s| s.status == ApprovalStatus::Pending)
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| NOT_AVAILABLE.into()),
            );
        }

        if n >= 6 {
            bar.set(
                "Status",
                if draft.is_completed() {
                    draft.status.to_string()
                } else {
                    "Ready for Closing".into()
                },
            );
            bar.set("Completion", format!("{:.0}%", completion(draft)));
            bar.set(
                "Closing Date",
                draft
                    .closing_date
                    .map(|d| d.format(date_format).to_string())
                    .unwrap_or_else(|| NOT_SET.into()),
            );
            if draft.is_completed() {
                bar.set(
                    "Date Closed",
                    draft
                        .closing_date
                        .map(|d| d.format(date_format).to_string())
                        .unwrap_or_else(|| NOT_SET.into()),
                );
            }
        }

        bar
    }

    /// Value for a label, if present
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }

    fn set(&mut self, label: &'static str, value: String) {
        match self.fields.iter_mut().find(|f| f.label == label) {
            Some(field) => field.value = value,
            None => self.fields.push(SummaryField { label, value }),
        }
    }
}

fn approval_status(draft: &TransactionDraft) -> String {
    let statuses: Vec<ApprovalStatus> = draft.stakeholders.iter().map(|s| s.status).collect();
    if statuses.is_empty() {
        NOT_SET.into()
    } else if statuses.contains(&ApprovalStatus::Rejected) {
        ApprovalStatus::Rejected.to_string()
    } else if statuses.iter().all(|s| *s == ApprovalStatus::Approved) {
        ApprovalStatus::Approved.to_string()
    } else {
        ApprovalStatus::Pending.to_string()
    }
}

/// Share of steps 1 to 5 whose required fields are present, in percent
fn completion(draft: &TransactionDraft) -> f64 {
    let steps = &WizardStep::ALL[..5];
    let done = steps
        .iter()
        .filter(|s| missing_fields(**s, draft).is_empty())
        .count();
    done as f64 / steps.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::{Money, Region, SelectedAsset, TransactionType};
    use crate::wizard::action::DraftAction;
    use crate::wizard::reducer::reduce;

    const FMT: &str = "%b %-d, %Y";

    #[test]
    fn test_empty_draft_shows_defaults() {
        let draft = TransactionDraft::new();
        for step in WizardStep::ALL {
            let bar = SummaryBar::for_step(step, &draft, &[], FMT);
            assert!(bar.fields.iter().all(|f| !f.value.contains("NaN")));
        }

        let bar = SummaryBar::for_step(WizardStep::Initiation, &draft, &[], FMT);
        assert_eq!(bar.get("Type"), Some(NOT_SET));
        assert_eq!(bar.get("Budget"), Some(NOT_SET));
        assert_eq!(bar.get("Total Value"), Some(NOT_AVAILABLE));
        assert_eq!(bar.get("Assets"), None);

        let bar = SummaryBar::for_step(WizardStep::AssetScreening, &draft, &[], FMT);
        assert_eq!(bar.get("Expected ROI"), Some(NOT_SET));
        assert_eq!(bar.get("Assets"), Some("0"));
    }

    #[test]
    fn test_fields_accumulate() {
        let catalog = Catalog::builtin();
        let assets: Vec<_> = catalog
            .assets()
            .iter()
            .map(SelectedAsset::from)
            .collect();
        let mut draft = TransactionDraft::new();
        for action in [
            DraftAction::SetTransactionType(TransactionType::Acquisition),
            DraftAction::SetBudget(Some(Money::from_euros(1_250_000))),
            DraftAction::SetRegion(Some(Region::Berlin)),
            DraftAction::AddAssets(assets),
        ] {
            draft = reduce(draft, action);
        }
        let profiles = catalog.risk_profiles_for(&draft.selected_assets);

        let bar = SummaryBar::for_step(WizardStep::AssetScreening, &draft, &profiles, FMT);
        assert_eq!(bar.get("Type"), Some("Acquisition"));
        assert_eq!(bar.get("Budget"), Some("€1,250,000"));
        assert_eq!(bar.get("Total Value"), Some("€22,300,000"));
        assert!(bar.get("Expected ROI").unwrap().starts_with("8."));
        assert_eq!(bar.get("Market Conditions"), Some("Focus on Berlin market"));
        assert_eq!(bar.get("Transaction Risk"), Some("Medium"));
        assert_eq!(bar.get("Due Diligence"), None);

        let bar = SummaryBar::for_step(WizardStep::DueDiligence, &draft, &profiles, FMT);
        assert_eq!(bar.get("Due Diligence"), Some("0% Complete"));
        assert_eq!(bar.get("Documents"), Some("0"));

        let bar = SummaryBar::for_step(WizardStep::RiskAssessment, &draft, &profiles, FMT);
        assert_eq!(bar.get("Sustainability Score"), Some("85/100"));

        let bar = SummaryBar::for_step(WizardStep::Closing, &draft, &profiles, FMT);
        assert_eq!(bar.get("Status"), Some("Ready for Closing"));
        assert_eq!(bar.get("Approval Status"), Some(NOT_SET));
        assert_eq!(bar.get("Completion"), Some("60%"));
    }
}
