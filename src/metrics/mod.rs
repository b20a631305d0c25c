//! Derived metrics
//!
//! Pure functions over slices of draft and catalog data. Later wizard steps
//! and the detail views compute their aggregates from these; nothing here
//! touches storage or holds state.

pub mod dashboard;
pub mod occupancy;
pub mod portfolio;
pub mod progress;
pub mod simulation;

pub use dashboard::{dashboard_metrics, DashboardMetrics};
pub use occupancy::{
    cap_rate, net_operating_income, occupancy, payment_reliability, rent_per_sqm,
    unit_occupancy, Occupancy, UnitOccupancy,
};
pub use portfolio::{
    average_decarbonization_score, average_roi, risk_summary, total_value, RiskSummary,
};
pub use progress::{diligence_progress, draft_progress};
pub use simulation::{risk_estimate, simulate, SimulationResult, LOW_ROI_THRESHOLD};

/// Round to one decimal place, the precision used for every percentage
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
