//! User settings for DealDesk
//!
//! Manages display preferences, wizard gating and TUI timing.

use serde::{Deserialize, Serialize};

use super::paths::DealDeskPaths;
use crate::error::DealDeskError;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// User settings for DealDesk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Refuse to leave a wizard step until its required fields are filled
    #[serde(default = "default_validation_gating")]
    pub validation_gating: bool,

    /// Delay between finalizing a transaction and returning to the dashboard
    #[serde(default = "default_redirect_delay_ms")]
    pub finalize_redirect_ms: u64,

    /// TUI tick rate
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}

fn default_validation_gating() -> bool {
    true
}

fn default_redirect_delay_ms() -> u64 {
    500
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            validation_gating: default_validation_gating(),
            finalize_redirect_ms: default_redirect_delay_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            log_format: LogFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &DealDeskPaths) -> Result<Self, DealDeskError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                DealDeskError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                DealDeskError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DealDeskPaths) -> Result<(), DealDeskError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            DealDeskError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            DealDeskError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.date_format, "%b %-d, %Y");
        assert!(settings.validation_gating);
        assert_eq!(settings.finalize_redirect_ms, 500);
        assert_eq!(settings.log_format, LogFormat::Text);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DealDeskPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.validation_gating = false;
        settings.log_format = LogFormat::Json;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.validation_gating);
        assert_eq!(loaded.log_format, LogFormat::Json);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"date_format":"%Y-%m-%d"}"#).unwrap();
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.tick_rate_ms, 250);
        assert!(settings.validation_gating);
    }
}
