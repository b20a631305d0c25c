//! Path management for DealDesk
//!
//! Provides XDG-compliant path resolution for configuration, data and logs.
//!
//! ## Path Resolution Order
//!
//! 1. `DEALDESK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/dealdesk` or `~/.config/dealdesk`
//! 3. Windows: `%APPDATA%\dealdesk`

use std::path::PathBuf;

use crate::error::DealDeskError;

/// Manages all paths used by DealDesk
#[derive(Debug, Clone)]
pub struct DealDeskPaths {
    /// Base directory for all DealDesk data
    base_dir: PathBuf,
}

impl DealDeskPaths {
    /// Create a new DealDeskPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home directory can be
    /// determined.
    pub fn new() -> Result<Self, DealDeskError> {
        let base_dir = if let Ok(custom) = std::env::var("DEALDESK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create DealDeskPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("dealdesk.log")
    }

    /// Get the path to transactions.json (finalized transactions)
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Get the path to assets.json (imported screening assets)
    pub fn assets_file(&self) -> PathBuf {
        self.data_dir().join("assets.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), DealDeskError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DealDeskError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| DealDeskError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if DealDesk has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, DealDeskError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                DealDeskError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("dealdesk"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, DealDeskError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| DealDeskError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("dealdesk"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DealDeskPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.log_file(), temp_dir.path().join("dealdesk.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DealDeskPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DealDeskPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.transactions_file(),
            temp_dir.path().join("data").join("transactions.json")
        );
    }
}
