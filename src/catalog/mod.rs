//! In-memory catalog of portfolio data
//!
//! Lookups by id return `NotFound` errors for unknown keys so that route
//! parameters are honoured rather than ignored.

pub mod fixtures;

use crate::error::{DealDeskError, DealResult};
use crate::models::{
    Asset, Building, Estate, RiskProfile, SelectedAsset, Stakeholder, TransactionRecord,
};

/// Read-only collection of assets, transactions and reference data
#[derive(Debug, Clone)]
pub struct Catalog {
    assets: Vec<Asset>,
    screening: Vec<Asset>,
    risk_profiles: Vec<RiskProfile>,
    transactions: Vec<TransactionRecord>,
    stakeholders: Vec<Stakeholder>,
}

impl Catalog {
    /// Build the catalog from the built-in fixtures
    pub fn builtin() -> Self {
        Self {
            assets: fixtures::portfolio_assets(),
            screening: fixtures::screening_assets(),
            risk_profiles: fixtures::risk_profiles(),
            transactions: fixtures::transactions(),
            stakeholders: fixtures::stakeholder_directory(),
        }
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn asset(&self, id: &str) -> DealResult<&Asset> {
        self.assets
            .iter()
            .find(|a| a.id.as_str() == id)
            .ok_or_else(|| DealDeskError::asset_not_found(id))
    }

    pub fn building(&self, asset_id: &str, building_id: &str) -> DealResult<&Building> {
        self.asset(asset_id)?
            .building(building_id)
            .ok_or_else(|| DealDeskError::building_not_found(building_id))
    }

    pub fn estate(&self, asset_id: &str, building_id: &str, estate_id: &str) -> DealResult<&Estate> {
        self.building(asset_id, building_id)?
            .estate(estate_id)
            .ok_or_else(|| DealDeskError::estate_not_found(estate_id))
    }

    /// Candidates listed on the screening step
    pub fn screening_assets(&self) -> &[Asset] {
        &self.screening
    }

    pub fn risk_profiles(&self) -> &[RiskProfile] {
        &self.risk_profiles
    }

    /// Risk profiles of the given selection, in selection order
    ///
    /// Assets without a profile are skipped.
    pub fn risk_profiles_for(&self, selected: &[SelectedAsset]) -> Vec<RiskProfile> {
        selected
            .iter()
            .filter_map(|s| self.risk_profiles.iter().find(|p| p.asset_id == s.id))
            .cloned()
            .collect()
    }

    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    pub fn transaction(&self, id: &str) -> DealResult<&TransactionRecord> {
        self.transactions
            .iter()
            .find(|t| t.id.as_str() == id)
            .ok_or_else(|| DealDeskError::transaction_not_found(id))
    }

    /// People available as approvers
    pub fn stakeholder_directory(&self) -> &[Stakeholder] {
        &self.stakeholders
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_lookup() {
        let catalog = Catalog::builtin();
        let estate = catalog.estate("1", "b1", "e3").unwrap();
        assert_eq!(estate.unit_number, "201");
    }

    #[test]
    fn test_unknown_ids_are_not_found() {
        let catalog = Catalog::builtin();
        assert!(catalog.asset("99").unwrap_err().is_not_found());
        assert!(catalog.building("1", "b9").unwrap_err().is_not_found());
        assert!(catalog.estate("1", "b1", "e9").unwrap_err().is_not_found());
        assert!(catalog.transaction("nope").unwrap_err().is_not_found());

        let err = catalog.building("99", "b1").unwrap_err();
        assert_eq!(err.to_string(), "Asset not found: 99");
    }

    #[test]
    fn test_risk_profiles_follow_selection() {
        let catalog = Catalog::builtin();
        let selected: Vec<SelectedAsset> = catalog
            .screening_assets()
            .iter()
            .rev()
            .map(SelectedAsset::from)
            .collect();
        let profiles = catalog.risk_profiles_for(&selected);
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].asset_id.as_str(), "2");
    }
}
