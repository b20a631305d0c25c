//! Transition guards
//!
//! A step's required fields must be present before `next()` leaves it.

use serde::{Deserialize, Serialize};

use crate::models::TransactionDraft;

use super::step::WizardStep;

/// Whether `next()` enforces required fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GatePolicy {
    /// Refuse to leave a step with missing fields
    #[default]
    Strict,
    /// Always advance, even with an empty draft
    Permissive,
}

impl GatePolicy {
    pub fn from_setting(validation_gating: bool) -> Self {
        if validation_gating {
            Self::Strict
        } else {
            Self::Permissive
        }
    }
}

/// Labels of the fields a step still needs
pub fn missing_fields(step: WizardStep, draft: &TransactionDraft) -> Vec<&'static str> {
    let mut missing = Vec::new();
    match step {
        WizardStep::Initiation => {
            if draft.transaction_type.is_none() {
                missing.push("transaction type");
            }
            if draft.name.trim().is_empty() {
                missing.push("transaction name");
            }
            if !draft.budget.is_some_and(|b| b.is_positive()) {
                missing.push("budget");
            }
        }
        WizardStep::AssetScreening => {
            if draft.selected_assets.is_empty() {
                missing.push("at least one selected asset");
            }
        }
        WizardStep::DueDiligence | WizardStep::RiskAssessment | WizardStep::Closing => {}
        WizardStep::TransactionDetails => {
            if draft.closing_date.is_none() {
                missing.push("closing date");
            }
            if draft.stakeholders.is_empty() {
                missing.push("at least one stakeholder");
            }
        }
    }
    missing
}

/// Steps before `step` that still have missing fields
pub fn incomplete_steps(step: WizardStep, draft: &TransactionDraft) -> Vec<WizardStep> {
    WizardStep::ALL
        .iter()
        .copied()
        .filter(|s| *s < step && !missing_fields(*s, draft).is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};

    #[test]
    fn test_initiation_requirements() {
        let mut draft = TransactionDraft::new();
        assert_eq!(
            missing_fields(WizardStep::Initiation, &draft),
            vec!["transaction type", "transaction name", "budget"]
        );

        draft.transaction_type = Some(TransactionType::Acquisition);
        draft.name = "Berlin Portfolio".into();
        draft.budget = Some(Money::zero());
        assert_eq!(missing_fields(WizardStep::Initiation, &draft), vec!["budget"]);

        draft.budget = Some(Money::from_euros(1_250_000));
        assert!(missing_fields(WizardStep::Initiation, &draft).is_empty());
    }

    #[test]
    fn test_steps_without_requirements() {
        let draft = TransactionDraft::new();
        assert!(missing_fields(WizardStep::DueDiligence, &draft).is_empty());
        assert!(missing_fields(WizardStep::RiskAssessment, &draft).is_empty());
        assert_eq!(
            incomplete_steps(WizardStep::Closing, &draft),
            vec![
                WizardStep::Initiation,
                WizardStep::AssetScreening,
                WizardStep::TransactionDetails
            ]
        );
    }

    #[test]
    fn test_policy_from_setting() {
        assert_eq!(GatePolicy::from_setting(true), GatePolicy::Strict);
        assert_eq!(GatePolicy::from_setting(false), GatePolicy::Permissive);
    }
}
