//! Service layer for DealDesk
//!
//! Services combine the read-only catalog with what the user stored locally,
//! handling validation and cross-entity operations.

pub mod asset;
pub mod diligence;
pub mod import;
pub mod transaction;

pub use asset::{append_bulk_upload, AssetService};
pub use diligence::{document_from_path, reminder_message, Reminder};
pub use import::{AssetImporter, ImportReport, RowError, CSV_HEADER};
pub use transaction::TransactionService;
