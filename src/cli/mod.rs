//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod asset;
pub mod open;
pub mod property;
pub mod report;
pub mod transaction;

pub use asset::{handle_asset_command, AssetCommands};
pub use open::handle_open_command;
pub use property::{handle_building_command, handle_estate_command, BuildingCommands, EstateCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
