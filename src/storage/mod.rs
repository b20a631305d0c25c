//! Storage layer for DealDesk
//!
//! JSON file storage with atomic writes and automatic directory creation.
//! Built-in portfolio data lives in the catalog; storage only holds what the
//! user adds: committed transactions and imported assets.

pub mod assets;
pub mod file_io;
pub mod transactions;

pub use assets::AssetRepository;
pub use file_io::{read_json, write_json_atomic, write_string_atomic};
pub use transactions::TransactionRepository;

use crate::config::paths::DealDeskPaths;
use crate::error::DealDeskError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: DealDeskPaths,
    pub transactions: TransactionRepository,
    pub assets: AssetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: DealDeskPaths) -> Result<Self, DealDeskError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            assets: AssetRepository::new(paths.assets_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &DealDeskPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), DealDeskError> {
        self.transactions.load()?;
        self.assets.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), DealDeskError> {
        self.transactions.save()?;
        self.assets.save()?;
        Ok(())
    }

    /// Check if storage has been initialized (has a config file)
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DealDeskPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }
}
