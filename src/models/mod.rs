//! Core data models for DealDesk
//!
//! This module contains the data structures of the investment domain:
//! assets with their buildings and estates, transaction drafts and records,
//! due-diligence artifacts, stakeholders and risk profiles.

pub mod asset;
pub mod building;
pub mod diligence;
pub mod estate;
pub mod ids;
pub mod money;
pub mod risk;
pub mod stakeholder;
pub mod transaction;

pub use asset::{
    Asset, AssetSource, DecarbonizationRating, FuturePotential, LiquidityRating,
    PerformanceMetrics,
};
pub use building::{Building, Location, MarketTrends, TenancyMix};
pub use diligence::{AssetDiligence, Document, DocumentKind, Task, TaskStatus, DEFAULT_TASKS};
pub use estate::{
    Estate, LeaseTerms, OccupancyStatus, PaymentHistory, TenantProfile, UnitCondition, UnitKind,
};
pub use ids::{
    AssetId, BuildingId, DocumentId, DraftId, EstateId, StakeholderId, TaskId, TransactionId,
};
pub use money::{Money, MoneyParseError};
pub use risk::{RiskLevel, RiskProfile, SimulationInputs};
pub use stakeholder::{ApprovalStatus, Stakeholder};
pub use transaction::{
    AssetTypeFilter, ClosingDetails, DiligenceSummary, DocumentStatus, DraftStatus,
    MarketConditions, PaymentMethod, PercentRange, RecordStatus, Region, RiskAssessmentSummary,
    RiskEstimate, ScreeningCriteria, SelectedAsset, StrategicGoal, TemplateChoice,
    TransactionDetail, TransactionDraft, TransactionRecord, TransactionType,
};
