//! Finalized transaction repository
//!
//! Persists records committed by the wizard to transactions.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::DealDeskError;
use crate::models::{TransactionId, TransactionRecord};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<TransactionRecord>,
}

/// Repository for committed transactions
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, TransactionRecord>>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load records from disk
    pub fn load(&self) -> Result<(), DealDeskError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            DealDeskError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.clear();
        for record in file_data.transactions {
            data.insert(record.id.clone(), record);
        }
        Ok(())
    }

    /// Save records to disk, oldest first
    pub fn save(&self) -> Result<(), DealDeskError> {
        let file_data = TransactionData {
            transactions: self.get_all()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: &TransactionId) -> Result<Option<TransactionRecord>, DealDeskError> {
        let data = self.data.read().map_err(|e| {
            DealDeskError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.get(id).cloned())
    }

    /// All records sorted by date, then id
    pub fn get_all(&self) -> Result<Vec<TransactionRecord>, DealDeskError> {
        let data = self.data.read().map_err(|e| {
            DealDeskError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        let mut records: Vec<_> = data.values().cloned().collect();
        records.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        Ok(records)
    }

    /// Insert a record, failing if the id is already taken
    pub fn insert(&self, record: TransactionRecord) -> Result<(), DealDeskError> {
        let mut data = self.data.write().map_err(|e| {
            DealDeskError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        if data.contains_key(&record.id) {
            return Err(DealDeskError::Storage(format!(
                "Transaction {} is already committed",
                record.id
            )));
        }
        data.insert(record.id.clone(), record);
        Ok(())
    }

    /// Remove a record, returning it if it was present
    pub fn remove(&self, id: &TransactionId) -> Result<Option<TransactionRecord>, DealDeskError> {
        let mut data = self.data.write().map_err(|e| {
            DealDeskError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        Ok(data.remove(id))
    }

    pub fn count(&self) -> Result<usize, DealDeskError> {
        let data = self.data.read().map_err(|e| {
            DealDeskError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        (temp_dir, TransactionRepository::new(path))
    }

    #[test]
    fn test_insert_save_load() {
        let (_temp_dir, repo) = create_test_repo();
        let records = fixtures::transactions();
        for record in records.clone() {
            repo.insert(record).unwrap();
        }
        repo.save().unwrap();

        let reloaded = TransactionRepository::new(repo.path.clone());
        reloaded.load().unwrap();
        assert_eq!(reloaded.count().unwrap(), 3);

        let all = reloaded.get_all().unwrap();
        assert_eq!(all[0].name, "Munich Residential Development");
        assert_eq!(
            reloaded.get(&TransactionId::new("1")).unwrap().unwrap(),
            records[0]
        );
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let (_temp_dir, repo) = create_test_repo();
        let record = fixtures::transactions().remove(0);
        repo.insert(record.clone()).unwrap();
        assert!(repo.insert(record).is_err());
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, repo) = create_test_repo();
        let record = fixtures::transactions().remove(0);
        repo.insert(record.clone()).unwrap();

        assert_eq!(repo.remove(&record.id).unwrap(), Some(record.clone()));
        assert_eq!(repo.count().unwrap(), 0);
        assert_eq!(repo.remove(&record.id).unwrap(), None);
        repo.insert(record).unwrap();
    }
}
