//! Terminal User Interface module
//!
//! A ratatui front end with the dashboard, asset and transaction views,
//! detail pages for every route and the six-step transaction wizard.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Wizard steps
pub mod steps;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
