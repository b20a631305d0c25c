//! Custom error types for DealDesk
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for DealDesk operations
#[derive(Error, Debug)]
pub enum DealDeskError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for user input and draft fields
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A path that does not match any known route
    #[error("Unknown route: {0}")]
    Route(String),

    /// Wizard state machine errors (blocked transitions, double finalize)
    #[error("Wizard error: {0}")]
    Wizard(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DealDeskError {
    /// Create a "not found" error for assets
    pub fn asset_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Asset",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for buildings
    pub fn building_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Building",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for estates
    pub fn estate_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Estate",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for stakeholders
    pub fn stakeholder_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Stakeholder",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for due-diligence tasks
    pub fn task_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Task",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for DealDeskError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DealDeskError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for DealDeskError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for DealDeskError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for DealDesk operations
pub type DealResult<T> = Result<T, DealDeskError>;
