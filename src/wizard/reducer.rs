//! The draft reducer
//!
//! `reduce` is the only place a `TransactionDraft` changes. It takes the draft
//! by value and returns the updated one; actions that reference unknown
//! assets, tasks or stakeholders leave it untouched. `check` reports those
//! references as errors before an action is applied.

use std::collections::HashSet;

use crate::error::{DealDeskError, DealResult};
use crate::models::{
    AssetDiligence, AssetId, DraftStatus, TaskId, TaskStatus, TransactionDraft,
};

use super::action::DraftAction;

/// Apply one action to a draft
pub fn reduce(mut draft: TransactionDraft, action: DraftAction) -> TransactionDraft {
    match action {
        DraftAction::SetTransactionType(t) => draft.transaction_type = Some(t),
        DraftAction::SetTemplate(t) => draft.template = Some(t),
        DraftAction::SetName(name) => draft.name = name,
        DraftAction::SetBudget(budget) => draft.budget = budget,
        DraftAction::SetTargetDate(date) => draft.target_date = date,
        DraftAction::SetStrategicGoal(goal) => draft.strategic_goal = goal,

        DraftAction::SetRegion(region) => draft.region = region,
        DraftAction::SetAssetType(t) => draft.asset_type = t,
        DraftAction::SetBudgetRange { min, max } => {
            draft.criteria.budget_min = min;
            draft.criteria.budget_max = max;
        }
        DraftAction::SetCriteria(criteria) => draft.criteria = criteria,
        DraftAction::AddAssets(assets) => {
            let mut seen: HashSet<AssetId> =
                draft.selected_assets.iter().map(|a| a.id.clone()).collect();
            for asset in assets {
                if !seen.insert(asset.id.clone()) {
                    continue;
                }
                if draft.diligence_for(&asset.id).is_none() {
                    draft
                        .diligence
                        .push(AssetDiligence::with_default_tasks(asset.id.clone()));
                }
                draft.selected_assets.push(asset);
            }
        }
        DraftAction::RemoveAsset(id) => {
            draft.selected_assets.retain(|a| a.id != id);
            draft.diligence.retain(|d| d.asset_id != id);
        }

        DraftAction::AttachDocument { asset_id, document } => {
            if let Some(dd) = diligence_mut(&mut draft, &asset_id) {
                if let Some(task_id) = document.task_id {
                    if let Some(task) = dd.task_mut(task_id) {
                        if task.status == TaskStatus::NotStarted {
                            task.status = TaskStatus::InProgress;
                        }
                    }
                }
                dd.documents.push(document);
            }
        }
        DraftAction::SetTaskStatus {
            asset_id,
            task_id,
            status,
        } => {
            if let Some(task) = task_mut(&mut draft, &asset_id, task_id) {
                task.status = status;
            }
        }
        DraftAction::AssignTask {
            asset_id,
            task_id,
            assignee,
        } => {
            if let Some(task) = task_mut(&mut draft, &asset_id, task_id) {
                task.assignee = assignee.filter(|a| !a.trim().is_empty());
            }
        }
        DraftAction::SetTaskDueDate {
            asset_id,
            task_id,
            due_date,
        } => {
            if let Some(task) = task_mut(&mut draft, &asset_id, task_id) {
                task.due_date = due_date;
            }
        }

        DraftAction::SetRiskEstimate(estimate) => draft.risk = Some(estimate),

        DraftAction::SetPaymentMethod(method) => draft.payment_method = method,
        DraftAction::SetClosingDate(date) => draft.closing_date = date,
        DraftAction::AddStakeholder(stakeholder) => {
            if !draft.stakeholders.iter().any(|s| s.same_person(&stakeholder)) {
                draft.stakeholders.push(stakeholder);
            }
        }
        DraftAction::SetStakeholderStatus { id, status } => {
            if let Some(s) = draft.stakeholders.iter_mut().find(|s| s.id == id) {
                s.status = status;
            }
        }
        DraftAction::RemoveStakeholder(id) => draft.stakeholders.retain(|s| s.id != id),

        DraftAction::MarkCompleted => {
            draft.status = DraftStatus::Completed;
            return draft;
        }
    }

    if draft.status == DraftStatus::Draft {
        draft.status = DraftStatus::InProgress;
    }
    draft
}

fn diligence_mut<'a>(
    draft: &'a mut TransactionDraft,
    asset_id: &AssetId,
) -> Option<&'a mut AssetDiligence> {
    draft.diligence.iter_mut().find(|d| &d.asset_id == asset_id)
}

fn task_mut<'a>(
    draft: &'a mut TransactionDraft,
    asset_id: &AssetId,
    task_id: TaskId,
) -> Option<&'a mut crate::models::Task> {
    diligence_mut(draft, asset_id).and_then(|d| d.task_mut(task_id))
}

/// Verify that the references an action carries exist in the draft
pub fn check(draft: &TransactionDraft, action: &DraftAction) -> DealResult<()> {
    match action {
        DraftAction::SetName(name) if name.chars().count() > 120 => Err(
            DealDeskError::Validation("Transaction name must be at most 120 characters".into()),
        ),
        DraftAction::SetBudget(Some(budget)) if budget.is_negative() => Err(
            DealDeskError::Validation("Budget cannot be negative".into()),
        ),
        DraftAction::SetBudgetRange { min, max } if min > max => Err(DealDeskError::Validation(
            format!("Budget range minimum {} exceeds maximum {}", min, max),
        )),
        DraftAction::RemoveAsset(id) => {
            if draft.is_selected(id) {
                Ok(())
            } else {
                Err(DealDeskError::asset_not_found(id.as_str()))
            }
        }
        DraftAction::AttachDocument { asset_id, document } => {
            let dd = draft
                .diligence_for(asset_id)
                .ok_or_else(|| DealDeskError::asset_not_found(asset_id.as_str()))?;
            match document.task_id {
                Some(task_id) if dd.task(task_id).is_none() => {
                    Err(DealDeskError::task_not_found(task_id.to_string()))
                }
                _ => Ok(()),
            }
        }
        DraftAction::SetTaskStatus {
            asset_id, task_id, ..
        }
        | DraftAction::AssignTask {
            asset_id, task_id, ..
        }
        | DraftAction::SetTaskDueDate {
            asset_id, task_id, ..
        } => {
            let dd = draft
                .diligence_for(asset_id)
                .ok_or_else(|| DealDeskError::asset_not_found(asset_id.as_str()))?;
            dd.task(*task_id)
                .map(|_| ())
                .ok_or_else(|| DealDeskError::task_not_found(task_id.to_string()))
        }
        DraftAction::SetStakeholderStatus { id, .. } | DraftAction::RemoveStakeholder(id) => {
            if draft.stakeholders.iter().any(|s| &s.id == id) {
                Ok(())
            } else {
                Err(DealDeskError::stakeholder_not_found(id.to_string()))
            }
        }
        _ => Ok(()),
    }
}
