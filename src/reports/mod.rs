//! Reports module for DealDesk
//!
//! Terminal reports over the catalog and committed transactions: the
//! dashboard headline figures, a portfolio economics summary and the
//! decarbonization risk overview with its what-if simulation.

pub mod dashboard;
pub mod portfolio;
pub mod risk;

pub use dashboard::DashboardReport;
pub use portfolio::{AssetEconomics, PortfolioReport};
pub use risk::RiskReport;
