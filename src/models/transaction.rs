//! Transaction models
//!
//! `TransactionDraft` is the aggregate the wizard builds up step by step.
//! `TransactionRecord` is the listing/detail shape for committed and
//! catalog transactions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::asset::{Asset, AssetSource, DecarbonizationRating, LiquidityRating};
use super::diligence::AssetDiligence;
use super::ids::{AssetId, DraftId, TransactionId};
use super::money::Money;
use super::risk::{RiskLevel, SimulationInputs};
use super::stakeholder::Stakeholder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Acquisition,
    Exit,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [Self::Acquisition, Self::Exit];
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Acquisition => write!(f, "Acquisition"),
            Self::Exit => write!(f, "Exit"),
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "acquisition" => Ok(Self::Acquisition),
            "exit" => Ok(Self::Exit),
            other => Err(format!("Unknown transaction type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateChoice {
    Standard,
    Custom,
}

impl TemplateChoice {
    pub const ALL: [TemplateChoice; 2] = [Self::Standard, Self::Custom];
}

impl fmt::Display for TemplateChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "Standard Template"),
            Self::Custom => write!(f, "Start from Scratch"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategicGoal {
    YieldMaximization,
    PortfolioDiversification,
    MarketExpansion,
    RiskReduction,
    SustainabilityEnhancement,
    ValueAddOpportunity,
}

impl StrategicGoal {
    pub const ALL: [StrategicGoal; 6] = [
        Self::YieldMaximization,
        Self::PortfolioDiversification,
        Self::MarketExpansion,
        Self::RiskReduction,
        Self::SustainabilityEnhancement,
        Self::ValueAddOpportunity,
    ];
}

impl fmt::Display for StrategicGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::YieldMaximization => "Yield Maximization",
            Self::PortfolioDiversification => "Portfolio Diversification",
            Self::MarketExpansion => "Market Expansion",
            Self::RiskReduction => "Risk Reduction",
            Self::SustainabilityEnhancement => "Sustainability Enhancement",
            Self::ValueAddOpportunity => "Value-Add Opportunity",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Berlin,
    Hamburg,
    Munich,
    Frankfurt,
    Dusseldorf,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Self::Berlin,
        Self::Hamburg,
        Self::Munich,
        Self::Frankfurt,
        Self::Dusseldorf,
    ];
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Berlin => "Berlin",
            Self::Hamburg => "Hamburg",
            Self::Munich => "Munich",
            Self::Frankfurt => "Frankfurt",
            Self::Dusseldorf => "Düsseldorf",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssetTypeFilter {
    #[default]
    MultiFamily,
}

impl fmt::Display for AssetTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MultiFamily => write!(f, "Multi Family Home"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    BankTransfer,
    Escrow,
    Financing,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [Self::BankTransfer, Self::Escrow, Self::Financing];
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BankTransfer => write!(f, "Bank Transfer"),
            Self::Escrow => write!(f, "Escrow"),
            Self::Financing => write!(f, "Financing"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DraftStatus {
    #[default]
    Draft,
    InProgress,
    Completed,
}

impl fmt::Display for DraftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "Draft"),
            Self::InProgress => write!(f, "In Progress"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// Inclusive range of percentages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentRange {
    pub min: f64,
    pub max: f64,
}

impl PercentRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl fmt::Display for PercentRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% - {}%", self.min, self.max)
    }
}

/// Filters captured on the asset screening step
///
/// These are recorded on the draft but do not filter the screening list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningCriteria {
    pub budget_min: Money,
    pub budget_max: Money,
    pub roi: PercentRange,
    pub occupancy: PercentRange,
    pub tenant_stability: PercentRange,
    pub energy_efficiency: PercentRange,
}

impl Default for ScreeningCriteria {
    fn default() -> Self {
        Self {
            budget_min: Money::from_euros(100_000),
            budget_max: Money::from_euros(5_000_000),
            roi: PercentRange::new(5.0, 15.0),
            occupancy: PercentRange::new(70.0, 100.0),
            tenant_stability: PercentRange::new(60.0, 100.0),
            energy_efficiency: PercentRange::new(50.0, 100.0),
        }
    }
}

/// Snapshot of an asset taken when it was added to a draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedAsset {
    pub id: AssetId,
    pub name: String,
    pub location: String,
    pub asset_type: String,
    pub portfolio_value: Money,
    pub roi: f64,
    pub decarbonization: DecarbonizationRating,
    #[serde(default)]
    pub decarbonization_score: Option<f64>,
    pub liquidity_rating: LiquidityRating,
    pub source: AssetSource,
    #[serde(default)]
    pub matching_score: Option<f64>,
}

impl From<&Asset> for SelectedAsset {
    fn from(asset: &Asset) -> Self {
        Self {
            id: asset.id.clone(),
            name: asset.name.clone(),
            location: asset.location.clone(),
            asset_type: asset.asset_type.clone(),
            portfolio_value: asset.portfolio_value,
            roi: asset.roi,
            decarbonization: asset.decarbonization,
            decarbonization_score: asset.decarbonization_score,
            liquidity_rating: asset.liquidity_rating,
            source: asset.source,
            matching_score: asset.matching_score,
        }
    }
}

/// Figures captured on the risk assessment step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskEstimate {
    pub inputs: SimulationInputs,
    /// Projected ROI in percent
    pub roi_estimate: f64,
    pub carbon_reduction_tons: u32,
    pub decarbonization_potential: RiskLevel,
}

/// An in-progress transaction built up by the wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub id: DraftId,

    // Initiation
    pub transaction_type: Option<TransactionType>,
    pub template: Option<TemplateChoice>,
    #[serde(default)]
    pub name: String,
    pub budget: Option<Money>,
    pub target_date: Option<NaiveDate>,
    pub strategic_goal: Option<StrategicGoal>,

    // Screening
    pub region: Option<Region>,
    #[serde(default)]
    pub asset_type: AssetTypeFilter,
    #[serde(default)]
    pub criteria: ScreeningCriteria,
    #[serde(default)]
    pub selected_assets: Vec<SelectedAsset>,

    // Due diligence, one entry per selected asset
    #[serde(default)]
    pub diligence: Vec<AssetDiligence>,

    // Risk
    pub risk: Option<RiskEstimate>,

    // Details
    pub payment_method: Option<PaymentMethod>,
    pub closing_date: Option<NaiveDate>,
    #[serde(default)]
    pub stakeholders: Vec<Stakeholder>,

    #[serde(default)]
    pub status: DraftStatus,

    pub created_at: DateTime<Utc>,
}

impl TransactionDraft {
    /// Create an empty draft
    pub fn new() -> Self {
        Self {
            id: DraftId::new(),
            transaction_type: None,
            template: None,
            name: String::new(),
            budget: None,
            target_date: None,
            strategic_goal: None,
            region: None,
            asset_type: AssetTypeFilter::default(),
            criteria: ScreeningCriteria::default(),
            selected_assets: Vec::new(),
            diligence: Vec::new(),
            risk: None,
            payment_method: None,
            closing_date: None,
            stakeholders: Vec::new(),
            status: DraftStatus::Draft,
            created_at: Utc::now(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == DraftStatus::Completed
    }

    pub fn is_selected(&self, id: &AssetId) -> bool {
        self.selected_assets.iter().any(|a| &a.id == id)
    }

    pub fn diligence_for(&self, id: &AssetId) -> Option<&AssetDiligence> {
        self.diligence.iter().find(|d| &d.asset_id == id)
    }

    pub fn document_count(&self) -> usize {
        self.diligence.iter().map(|d| d.documents.len()).sum()
    }
}

impl Default for TransactionDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle status shown in the transaction list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    #[default]
    Initiated,
    InProgress,
    Completed,
}

impl RecordStatus {
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Completed)
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initiated => write!(f, "Initiated"),
            Self::InProgress => write!(f, "In Progress"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketConditions {
    pub market_phase: String,
    pub competition_level: String,
    pub regulatory_environment: String,
}

/// A due-diligence document line on a transaction report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentStatus {
    pub name: String,
    pub status: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiligenceSummary {
    pub status: String,
    /// Completion in percent
    pub completion_rate: f64,
    #[serde(default)]
    pub documents: Vec<DocumentStatus>,
    #[serde(default)]
    pub key_findings: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessmentSummary {
    pub overall_risk: String,
    #[serde(default)]
    pub financial_risks: Vec<String>,
    #[serde(default)]
    pub operational_risks: Vec<String>,
    #[serde(default)]
    pub strategic_risks: Vec<String>,
    pub total_investment: Money,
    pub expected_roi: Option<f64>,
    /// Carbon reduction in tons per year
    pub carbon_reduction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosingDetails {
    pub target_date: Option<NaiveDate>,
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub conditions: Vec<String>,
}

/// Full report of a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDetail {
    pub template: String,
    pub budget: Option<Money>,
    pub strategic_goal: Option<StrategicGoal>,
    pub market: MarketConditions,
    #[serde(default)]
    pub selected_assets: Vec<SelectedAsset>,
    pub due_diligence: DiligenceSummary,
    pub risk: RiskAssessmentSummary,
    #[serde(default)]
    pub stakeholders: Vec<Stakeholder>,
    pub closing: ClosingDetails,
}

/// A transaction as listed on `/transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: TransactionId,
    pub name: String,
    /// Type label ("Acquisition", "Due Diligence", "Development")
    pub kind: String,
    pub value: Money,
    pub asset_count: u32,
    pub status: RecordStatus,
    pub date: NaiveDate,
    #[serde(default)]
    pub detail: Option<TransactionDetail>,
}

impl TransactionRecord {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_is_empty() {
        let draft = TransactionDraft::new();
        assert_eq!(draft.status, DraftStatus::Draft);
        assert!(draft.selected_assets.is_empty());
        assert!(draft.transaction_type.is_none());
        assert_eq!(draft.criteria.budget_min, Money::from_euros(100_000));
        assert_eq!(draft.document_count(), 0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Region::Dusseldorf.to_string(), "Düsseldorf");
        assert_eq!(StrategicGoal::ValueAddOpportunity.to_string(), "Value-Add Opportunity");
        assert_eq!(PaymentMethod::BankTransfer.to_string(), "Bank Transfer");
        assert_eq!(TemplateChoice::Custom.to_string(), "Start from Scratch");
        assert_eq!("EXIT".parse::<TransactionType>().unwrap(), TransactionType::Exit);
    }

    #[test]
    fn test_record_status_active() {
        assert!(RecordStatus::Initiated.is_active());
        assert!(RecordStatus::InProgress.is_active());
        assert!(!RecordStatus::Completed.is_active());
    }

    #[test]
    fn test_percent_range() {
        let r = PercentRange::new(5.0, 15.0);
        assert!(r.contains(5.0));
        assert!(r.contains(15.0));
        assert!(!r.contains(15.1));
        assert_eq!(r.to_string(), "5% - 15%");
    }

    #[test]
    fn test_draft_serialization() {
        let mut draft = TransactionDraft::new();
        draft.name = "Berlin Portfolio".into();
        draft.transaction_type = Some(TransactionType::Acquisition);
        let json = serde_json::to_string(&draft).unwrap();
        let back: TransactionDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(back, draft);
    }
}
