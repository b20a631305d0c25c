//! DealDesk - Terminal dashboard for real-estate investment transactions
//!
//! This library provides the core of the DealDesk application: a catalog of
//! portfolio assets with their buildings and units, a six-step transaction
//! wizard with guarded transitions and a live summary bar, derived investment
//! metrics, and CLI and TUI front ends over them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, settings and log setup
//! - `error`: Custom error types
//! - `models`: Core data models (assets, buildings, estates, drafts, records)
//! - `catalog`: Built-in portfolio data and lookups by id
//! - `routes`: Route paths of the resource hierarchy
//! - `metrics`: Pure derived-metric functions
//! - `wizard`: Transaction wizard state machine and summary bar
//! - `storage`: JSON file storage for committed transactions and imports
//! - `services`: Business logic over catalog and storage
//! - `display`, `reports`, `export`: Terminal output and file exports
//! - `cli`, `tui`: Front ends
//!
//! # Example
//!
//! ```rust,ignore
//! use dealdesk_cli::wizard::{DraftAction, GatePolicy, WizardController};
//! use dealdesk_cli::models::TransactionType;
//!
//! let mut wizard = WizardController::new(GatePolicy::Strict);
//! wizard.dispatch(DraftAction::SetTransactionType(TransactionType::Acquisition))?;
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod metrics;
pub mod models;
pub mod reports;
pub mod routes;
pub mod services;
pub mod storage;
pub mod tui;
pub mod wizard;

pub use error::{DealDeskError, DealResult};
