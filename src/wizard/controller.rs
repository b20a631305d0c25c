//! Wizard controller
//!
//! Owns the in-progress draft and the step cursor. All draft changes go
//! through `dispatch` (one action) or `replace` (whole draft).

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::{DealDeskError, DealResult};
use crate::models::{ApprovalStatus, TransactionDraft};

use super::action::DraftAction;
use super::gate::{incomplete_steps, missing_fields, GatePolicy};
use super::reducer::{check, reduce};
use super::step::WizardStep;

/// Default pause between finalizing and returning to the dashboard
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(500);

/// Result of a `next()` or `previous()` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The cursor moved to this step
    Moved(WizardStep),
    /// Already at the boundary; nothing changed
    Unchanged(WizardStep),
    /// Required fields of the current step are missing
    Blocked {
        step: WizardStep,
        missing: Vec<&'static str>,
    },
    /// On the last step; the caller should ask for confirmation and call `finalize`
    AwaitingConfirmation,
}

/// Returned by a confirmed `finalize`
#[derive(Debug, Clone, PartialEq)]
pub struct FinalizeOutcome {
    /// The completed draft
    pub draft: TransactionDraft,
    /// How long to wait before navigating to the dashboard
    pub redirect_after: Duration,
}

#[derive(Debug, Clone)]
pub struct WizardController {
    draft: TransactionDraft,
    step: WizardStep,
    policy: GatePolicy,
    redirect_delay: Duration,
}

impl WizardController {
    /// Start a wizard on step 1 with an empty draft
    pub fn new(policy: GatePolicy) -> Self {
        Self {
            draft: TransactionDraft::new(),
            step: WizardStep::FIRST,
            policy,
            redirect_delay: DEFAULT_REDIRECT_DELAY,
        }
    }

    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }

    pub fn draft(&self) -> &TransactionDraft {
        &self.draft
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn policy(&self) -> GatePolicy {
        self.policy
    }

    /// Replace the whole draft
    pub fn replace(&mut self, draft: TransactionDraft) {
        debug!(draft = %draft.id, "draft replaced");
        self.draft = draft;
    }

    /// Apply one action through the reducer
    pub fn dispatch(&mut self, action: DraftAction) -> DealResult<()> {
        if self.draft.is_completed() {
            return Err(DealDeskError::Wizard(
                "Transaction is already finalized".into(),
            ));
        }
        check(&self.draft, &action)?;

        debug!(draft = %self.draft.id, action = action.name(), step = self.step.number(), "dispatch");
        let draft = std::mem::take(&mut self.draft);
        self.draft = reduce(draft, action);
        Ok(())
    }

    /// Fields the current step still needs
    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing_fields(self.step, &self.draft)
    }

    /// Advance one step
    pub fn next(&mut self) -> StepOutcome {
        if self.step.is_last() {
            return StepOutcome::AwaitingConfirmation;
        }

        if self.policy == GatePolicy::Strict {
            let missing = self.missing_fields();
            if !missing.is_empty() {
                debug!(step = self.step.number(), ?missing, "transition blocked");
                return StepOutcome::Blocked {
                    step: self.step,
                    missing,
                };
            }
        }

        self.step = self.step.next();
        debug!(step = self.step.number(), "advanced");
        StepOutcome::Moved(self.step)
    }

    /// Go back one step; a no-op on step 1
    pub fn previous(&mut self) -> StepOutcome {
        if self.step.is_first() {
            return StepOutcome::Unchanged(self.step);
        }
        self.step = self.step.previous();
        StepOutcome::Moved(self.step)
    }

    /// Complete the transaction
    ///
    /// Without confirmation nothing changes and `Ok(None)` is returned. A
    /// confirmed call completes the draft exactly once; later calls fail.
    pub fn finalize(&mut self, confirmed: bool) -> DealResult<Option<FinalizeOutcome>> {
        if !self.step.is_last() {
            return Err(DealDeskError::Wizard(format!(
                "Finalize is only available on step 6 (currently on step {})",
                self.step.number()
            )));
        }
        if self.draft.is_completed() {
            return Err(DealDeskError::Wizard(
                "Transaction is already finalized".into(),
            ));
        }
        if !confirmed {
            return Ok(None);
        }

        if let Some(rejected) = self
            .draft
            .stakeholders
            .iter()
            .find(|s| s.status == ApprovalStatus::Rejected)
        {
            warn!(draft = %self.draft.id, stakeholder = %rejected, "finalize refused");
            return Err(DealDeskError::Wizard(format!(
                "Cannot finalize: {} rejected the transaction",
                rejected
            )));
        }

        if self.policy == GatePolicy::Strict {
            let incomplete = incomplete_steps(self.step, &self.draft);
            if let Some(step) = incomplete.first() {
                let missing = missing_fields(*step, &self.draft).join(", ");
                return Err(DealDeskError::Validation(format!(
                    "Step {} is incomplete: missing {}",
                    step.number(),
                    missing
                )));
            }
        }

        let draft = std::mem::take(&mut self.draft);
        self.draft = reduce(draft, DraftAction::MarkCompleted);
        info!(draft = %self.draft.id, name = %self.draft.name, "transaction finalized");

        Ok(Some(FinalizeOutcome {
            draft: self.draft.clone(),
            redirect_after: self.redirect_delay,
        }))
    }
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new(GatePolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use crate::models::{
        DraftStatus, Money, SelectedAsset, Stakeholder, TransactionType,
    };
    use chrono::NaiveDate;

    fn complete_wizard() -> WizardController {
        let mut wizard = WizardController::new(GatePolicy::Strict);
        wizard
            .dispatch(DraftAction::SetTransactionType(TransactionType::Acquisition))
            .unwrap();
        wizard
            .dispatch(DraftAction::SetName("Berlin Portfolio".into()))
            .unwrap();
        wizard
            .dispatch(DraftAction::SetBudget(Some(Money::from_euros(1_250_000))))
            .unwrap();
        assert_eq!(wizard.next(), StepOutcome::Moved(WizardStep::AssetScreening));

        let assets: Vec<_> = fixtures::screening_assets()
            .iter()
            .take(2)
            .map(SelectedAsset::from)
            .collect();
        wizard.dispatch(DraftAction::AddAssets(assets)).unwrap();
        assert_eq!(wizard.next(), StepOutcome::Moved(WizardStep::DueDiligence));
        assert_eq!(wizard.next(), StepOutcome::Moved(WizardStep::RiskAssessment));
        assert_eq!(
            wizard.next(),
            StepOutcome::Moved(WizardStep::TransactionDetails)
        );

        wizard
            .dispatch(DraftAction::SetClosingDate(NaiveDate::from_ymd_opt(2024, 5, 15)))
            .unwrap();
        wizard
            .dispatch(DraftAction::AddStakeholder(
                fixtures::stakeholder_directory()[0].clone(),
            ))
            .unwrap();
        assert_eq!(wizard.next(), StepOutcome::Moved(WizardStep::Closing));
        wizard
    }

    #[test]
    fn test_previous_is_noop_on_first_step() {
        let mut wizard = WizardController::default();
        assert_eq!(wizard.previous(), StepOutcome::Unchanged(WizardStep::Initiation));
        assert_eq!(wizard.step(), WizardStep::Initiation);
        assert_eq!(wizard.draft().status, DraftStatus::Draft);
    }

    #[test]
    fn test_strict_gate_blocks() {
        let mut wizard = WizardController::new(GatePolicy::Strict);
        match wizard.next() {
            StepOutcome::Blocked { step, missing } => {
                assert_eq!(step, WizardStep::Initiation);
                assert_eq!(missing.len(), 3);
            }
            other => panic!("expected Blocked, got {:?}", other),
        }
        assert_eq!(wizard.step(), WizardStep::Initiation);
    }

    #[test]
    fn test_permissive_reaches_last_step_empty() {
        let mut wizard = WizardController::new(GatePolicy::Permissive);
        for _ in 0..10 {
            wizard.next();
        }
        assert_eq!(wizard.step(), WizardStep::Closing);
        assert_eq!(wizard.next(), StepOutcome::AwaitingConfirmation);

        let outcome = wizard.finalize(true).unwrap().unwrap();
        assert_eq!(outcome.draft.status, DraftStatus::Completed);
    }

    #[test]
    fn test_finalize_exactly_once() {
        let mut wizard = complete_wizard();
        assert_eq!(wizard.next(), StepOutcome::AwaitingConfirmation);

        assert_eq!(wizard.finalize(false).unwrap(), None);
        assert_eq!(wizard.draft().status, DraftStatus::InProgress);

        let outcome = wizard.finalize(true).unwrap().unwrap();
        assert_eq!(outcome.redirect_after, Duration::from_millis(500));
        assert!(wizard.draft().is_completed());

        let err = wizard.finalize(true).unwrap_err();
        assert!(matches!(err, DealDeskError::Wizard(_)));

        let err = wizard
            .dispatch(DraftAction::SetName("edit".into()))
            .unwrap_err();
        assert!(matches!(err, DealDeskError::Wizard(_)));
    }

    #[test]
    fn test_finalize_refused_on_rejection() {
        let mut wizard = complete_wizard();
        let rejecting = Stakeholder::new("Michael Chen", "Risk Manager", "michael.chen@example.com");
        let id = rejecting.id;
        wizard.dispatch(DraftAction::AddStakeholder(rejecting)).unwrap();
        wizard
            .dispatch(DraftAction::SetStakeholderStatus {
                id,
                status: ApprovalStatus::Rejected,
            })
            .unwrap();

        let err = wizard.finalize(true).unwrap_err();
        assert!(err.to_string().contains("Michael Chen"));
        assert!(!wizard.draft().is_completed());
    }

    #[test]
    fn test_finalize_requires_last_step() {
        let mut wizard = WizardController::default();
        assert!(wizard.finalize(true).is_err());
    }

    #[test]
    fn test_strict_finalize_checks_replaced_draft() {
        let mut wizard = complete_wizard();
        let mut draft = wizard.draft().clone();
        draft.selected_assets.clear();
        wizard.replace(draft);

        let err = wizard.finalize(true).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_custom_redirect_delay() {
        let mut wizard = WizardController::new(GatePolicy::Permissive)
            .with_redirect_delay(Duration::from_millis(50));
        while wizard.next() != StepOutcome::AwaitingConfirmation {}
        let outcome = wizard.finalize(true).unwrap().unwrap();
        assert_eq!(outcome.redirect_after, Duration::from_millis(50));
    }
}
