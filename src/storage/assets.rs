//! Imported asset repository
//!
//! Screening assets added through CSV import live in assets.json and are
//! listed after the built-in screening universe.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::DealDeskError;
use crate::models::Asset;

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct AssetData {
    assets: Vec<Asset>,
}

pub struct AssetRepository {
    path: PathBuf,
    data: RwLock<Vec<Asset>>,
}

impl AssetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    pub fn load(&self) -> Result<(), DealDeskError> {
        let file_data: AssetData = read_json(&self.path)?;
        let mut data = self.data.write().map_err(|e| {
            DealDeskError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = file_data.assets;
        Ok(())
    }

    pub fn save(&self) -> Result<(), DealDeskError> {
        let file_data = AssetData {
            assets: self.get_all()?,
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// All imported assets in import order
    pub fn get_all(&self) -> Result<Vec<Asset>, DealDeskError> {
        let data = self.data.read().map_err(|e| {
            DealDeskError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.clone())
    }

    /// Append assets, preserving order
    pub fn append(&self, assets: Vec<Asset>) -> Result<(), DealDeskError> {
        let mut data = self.data.write().map_err(|e| {
            DealDeskError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.extend(assets);
        Ok(())
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
    use crate::models::Money;
    use tempfile::TempDir;

    #[test]
    fn test_append_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("assets.json");
        let repo = AssetRepository::new(path.clone());
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);

        repo.append(vec![Asset::new(
            "u1",
            "Moabit Apartments",
            "Berlin, Germany",
            "Multi Family Home",
            Money::from_euros(2_100_000),
            8.7,
        )])
        .unwrap();
        repo.save().unwrap();

        let reloaded = AssetRepository::new(path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.get_all().unwrap()[0].name, "Moabit Apartments");
    }
}
