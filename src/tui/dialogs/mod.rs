//! Dialog modules for the TUI
//!
//! Modal dialogs drawn over the active view

pub mod confirm;
pub mod details;
pub mod help;
