//! Draft update actions
//!
//! Every field write a wizard step performs is one of these. Steps emit
//! actions; only the reducer changes the draft.

use chrono::NaiveDate;

use crate::models::{
    ApprovalStatus, AssetId, AssetTypeFilter, Document, Money, PaymentMethod, Region,
    RiskEstimate, ScreeningCriteria, SelectedAsset, Stakeholder, StakeholderId, StrategicGoal,
    TaskId, TaskStatus, TemplateChoice, TransactionType,
};

#[derive(Debug, Clone, PartialEq)]
pub enum DraftAction {
    // Initiation
    SetTransactionType(TransactionType),
    SetTemplate(TemplateChoice),
    SetName(String),
    SetBudget(Option<Money>),
    SetTargetDate(Option<NaiveDate>),
    SetStrategicGoal(Option<StrategicGoal>),

    // Screening
    SetRegion(Option<Region>),
    SetAssetType(AssetTypeFilter),
    SetBudgetRange { min: Money, max: Money },
    SetCriteria(ScreeningCriteria),
    /// Append assets in order, skipping ids already selected
    AddAssets(Vec<SelectedAsset>),
    /// Remove an asset together with its diligence entry
    RemoveAsset(AssetId),

    // Due diligence
    AttachDocument { asset_id: AssetId, document: Document },
    SetTaskStatus { asset_id: AssetId, task_id: TaskId, status: TaskStatus },
    AssignTask { asset_id: AssetId, task_id: TaskId, assignee: Option<String> },
    SetTaskDueDate { asset_id: AssetId, task_id: TaskId, due_date: Option<NaiveDate> },

    // Risk
    SetRiskEstimate(RiskEstimate),

    // Details
    SetPaymentMethod(Option<PaymentMethod>),
    SetClosingDate(Option<NaiveDate>),
    AddStakeholder(Stakeholder),
    SetStakeholderStatus { id: StakeholderId, status: ApprovalStatus },
    RemoveStakeholder(StakeholderId),

    MarkCompleted,
}

impl DraftAction {
    /// Short name for log events
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetTransactionType(_) => "set_transaction_type",
            Self::SetTemplate(_) => "set_template",
            Self::SetName(_) => "set_name",
            Self::SetBudget(_) => "set_budget",
            Self::SetTargetDate(_) => "set_target_date",
            Self::SetStrategicGoal(_) => "set_strategic_goal",
            Self::SetRegion(_) => "set_region",
            Self::SetAssetType(_) => "set_asset_type",
            Self::SetBudgetRange { .. } => "set_budget_range",
            Self::SetCriteria(_) => "set_criteria",
            Self::AddAssets(_) => "add_assets",
            Self::RemoveAsset(_) => "remove_asset",
            Self::AttachDocument { .. } => "attach_document",
            Self::SetTaskStatus { .. } => "set_task_status",
            Self::AssignTask { .. } => "assign_task",
            Self::SetTaskDueDate { .. } => "set_task_due_date",
            Self::SetRiskEstimate(_) => "set_risk_estimate",
            Self::SetPaymentMethod(_) => "set_payment_method",
            Self::SetClosingDate(_) => "set_closing_date",
            Self::AddStakeholder(_) => "add_stakeholder",
            Self::SetStakeholderStatus { .. } => "set_stakeholder_status",
            Self::RemoveStakeholder(_) => "remove_stakeholder",
            Self::MarkCompleted => "mark_completed",
        }
    }
}
