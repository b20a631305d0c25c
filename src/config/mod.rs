//! Configuration module for DealDesk
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Log subscriber setup

pub mod logging;
pub mod paths;
pub mod settings;

pub use paths::DealDeskPaths;
pub use settings::{LogFormat, Settings};
