//! Transaction service
//!
//! Lists the built-in sample transactions together with the ones finalized
//! through the wizard, and turns a completed draft into a stored record.

use chrono::Local;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::error::{DealDeskError, DealResult};
use crate::metrics::{average_roi, draft_progress, risk_summary, round1, total_value};
use crate::models::{
    ClosingDetails, DiligenceSummary, DocumentStatus, MarketConditions, RecordStatus,
    RiskAssessmentSummary, TemplateChoice, TransactionDetail, TransactionDraft, TransactionId,
    TransactionRecord, TransactionType,
};
use crate::storage::Storage;

pub struct TransactionService<'a> {
    catalog: &'a Catalog,
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    pub fn new(catalog: &'a Catalog, storage: &'a Storage) -> Self {
        Self { catalog, storage }
    }

    /// Sample transactions followed by committed ones
    pub fn list(&self) -> DealResult<Vec<TransactionRecord>> {
        let mut records = self.catalog.transactions().to_vec();
        records.extend(self.storage.transactions.get_all()?);
        Ok(records)
    }

    pub fn get(&self, id: &str) -> DealResult<TransactionRecord> {
        if let Ok(record) = self.catalog.transaction(id) {
            return Ok(record.clone());
        }
        self.storage
            .transactions
            .get(&TransactionId::new(id))?
            .ok_or_else(|| DealDeskError::transaction_not_found(id))
    }

    /// Persist a finalized draft as a transaction record
    pub fn commit(&self, draft: &TransactionDraft) -> DealResult<TransactionRecord> {
        if !draft.is_completed() {
            return Err(DealDeskError::Wizard(
                "Only finalized transactions can be committed".into(),
            ));
        }

        let record = record_from_draft(draft, self.catalog);
        self.storage.transactions.insert(record.clone())?;
        if let Err(e) = self.storage.transactions.save() {
            // Memory must not hold a record the file lacks
            self.storage.transactions.remove(&record.id)?;
            warn!(id = %record.id, error = %e, "Commit failed, record rolled back");
            return Err(e);
        }

        info!(
            id = %record.id,
            name = %record.name,
            value = %record.value,
            "Committed transaction"
        );
        Ok(record)
    }
}

/// Build the listing and report shape of a finalized draft
pub fn record_from_draft(draft: &TransactionDraft, catalog: &Catalog) -> TransactionRecord {
    let assets = &draft.selected_assets;
    let profiles = catalog.risk_profiles_for(assets);
    let summary = risk_summary(&profiles);
    let asset_total = total_value(assets);

    let name = match draft.name.trim() {
        "" => "Untitled Transaction".to_string(),
        name => name.to_string(),
    };
    let kind = draft
        .transaction_type
        .unwrap_or(TransactionType::Acquisition)
        .to_string();

    let progress = draft_progress(&draft.diligence);
    let diligence_status = if draft.diligence.is_empty() || progress == 0.0 {
        "Not Started"
    } else if progress >= 100.0 {
        "Completed"
    } else {
        "In Progress"
    };
    let documents = draft
        .diligence
        .iter()
        .flat_map(|d| d.documents.iter())
        .map(|doc| DocumentStatus {
            name: doc.name.clone(),
            status: "Uploaded".into(),
            date: doc.uploaded_at.date_naive(),
        })
        .collect();

    let carbon_reduction = match &draft.risk {
        Some(estimate) => f64::from(estimate.carbon_reduction_tons),
        None => summary.total_reduction,
    };

    TransactionRecord {
        id: TransactionId::new(draft.id.to_string()),
        name,
        kind,
        value: draft.budget.unwrap_or(asset_total),
        asset_count: assets.len() as u32,
        status: RecordStatus::Completed,
        date: draft
            .closing_date
            .unwrap_or_else(|| Local::now().date_naive()),
        detail: Some(TransactionDetail {
            template: draft
                .template
                .unwrap_or(TemplateChoice::Standard)
                .to_string(),
            budget: draft.budget,
            strategic_goal: draft.strategic_goal,
            market: MarketConditions {
                market_phase: draft
                    .region
                    .map(|r| format!("Focus on {} market", r))
                    .unwrap_or_default(),
                ..MarketConditions::default()
            },
            selected_assets: assets.clone(),
            due_diligence: DiligenceSummary {
                status: diligence_status.into(),
                completion_rate: round1(progress),
                documents,
                key_findings: Vec::new(),
            },
            risk: RiskAssessmentSummary {
                overall_risk: summary
                    .overall_risk
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "Not assessed".into()),
                total_investment: asset_total,
                expected_roi: average_roi(assets).map(round1),
                carbon_reduction,
                ..RiskAssessmentSummary::default()
            },
            stakeholders: draft.stakeholders.clone(),
            closing: ClosingDetails {
                target_date: draft.closing_date,
                payment_method: draft.payment_method,
                conditions: Vec::new(),
            },
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::DealDeskPaths;
    use crate::models::{Money, SelectedAsset, Stakeholder};
    use crate::storage::TransactionRepository;
    use crate::wizard::{DraftAction, GatePolicy, WizardController};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = DealDeskPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn finalized_draft(catalog: &Catalog) -> TransactionDraft {
        let mut wizard = WizardController::new(GatePolicy::Strict);
        let assets: Vec<_> = catalog
            .screening_assets()
            .iter()
            .take(2)
            .map(SelectedAsset::from)
            .collect();
        for action in [
            DraftAction::SetTransactionType(TransactionType::Acquisition),
            DraftAction::SetName("Berlin Core Plus".into()),
            DraftAction::SetBudget(Some(Money::from_euros(20_000_000))),
            DraftAction::AddAssets(assets),
            DraftAction::SetClosingDate(NaiveDate::from_ymd_opt(2024, 9, 30)),
            DraftAction::AddStakeholder(Stakeholder::new(
                "Michael Chen",
                "Risk Manager",
                "michael.chen@example.com",
            )),
        ] {
            wizard.dispatch(action).unwrap();
        }
        while !wizard.step().is_last() {
            wizard.next();
        }
        wizard.finalize(true).unwrap().unwrap().draft
    }

    #[test]
    fn test_commit_and_list() {
        let (_temp_dir, storage) = create_test_storage();
        let catalog = Catalog::builtin();
        let service = TransactionService::new(&catalog, &storage);
        let draft = finalized_draft(&catalog);

        let record = service.commit(&draft).unwrap();
        assert_eq!(record.name, "Berlin Core Plus");
        assert_eq!(record.asset_count, 2);
        assert_eq!(record.status, RecordStatus::Completed);
        assert_eq!(record.value, Money::from_euros(20_000_000));
        assert_eq!(record.id.as_str(), draft.id.to_string());

        let detail = record.detail.as_ref().unwrap();
        assert_eq!(detail.risk.total_investment, Money::from_euros(22_300_000));
        assert_eq!(detail.risk.overall_risk, "Medium");
        assert_eq!(detail.due_diligence.status, "Not Started");

        let list = service.list().unwrap();
        assert_eq!(list.len(), 4);
        assert_eq!(service.get(record.id.as_str()).unwrap(), record);

        assert!(service.commit(&draft).is_err());
    }

    #[test]
    fn test_failed_save_rolls_back_commit() {
        let (_temp_dir, storage) = create_test_storage();
        let catalog = Catalog::builtin();
        let service = TransactionService::new(&catalog, &storage);
        let draft = finalized_draft(&catalog);

        // A directory at the file path makes the final rename fail
        let blocker = storage.paths().transactions_file();
        std::fs::create_dir(&blocker).unwrap();

        let err = service.commit(&draft).unwrap_err();
        assert!(matches!(err, DealDeskError::Storage(_)));
        assert_eq!(storage.transactions.count().unwrap(), 0);
        assert!(storage
            .transactions
            .get(&TransactionId::new(draft.id.to_string()))
            .unwrap()
            .is_none());

        std::fs::remove_dir(&blocker).unwrap();
        let record = service.commit(&draft).unwrap();
        assert_eq!(storage.transactions.count().unwrap(), 1);

        let reloaded = TransactionRepository::new(blocker);
        reloaded.load().unwrap();
        assert_eq!(reloaded.get(&record.id).unwrap(), Some(record));
    }

    #[test]
    fn test_commit_requires_finalized_draft() {
        let (_temp_dir, storage) = create_test_storage();
        let catalog = Catalog::builtin();
        let service = TransactionService::new(&catalog, &storage);
        let err = service.commit(&TransactionDraft::new()).unwrap_err();
        assert!(matches!(err, DealDeskError::Wizard(_)));
    }

    #[test]
    fn test_get_unknown_is_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let catalog = Catalog::builtin();
        let service = TransactionService::new(&catalog, &storage);
        assert_eq!(service.get("1").unwrap().name, "Berlin Portfolio Acquisition");
        assert!(service.get("999").unwrap_err().is_not_found());
    }
}
