//! Wizard step cursor

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six transaction wizard steps, numbered 1 to 6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum WizardStep {
    #[default]
    Initiation,
    AssetScreening,
    DueDiligence,
    RiskAssessment,
    TransactionDetails,
    Closing,
}

impl WizardStep {
    pub const ALL: [WizardStep; 6] = [
        Self::Initiation,
        Self::AssetScreening,
        Self::DueDiligence,
        Self::RiskAssessment,
        Self::TransactionDetails,
        Self::Closing,
    ];

    pub const FIRST: WizardStep = Self::Initiation;
    pub const LAST: WizardStep = Self::Closing;

    /// 1-based position
    pub fn number(&self) -> u8 {
        match self {
            Self::Initiation => 1,
            Self::AssetScreening => 2,
            Self::DueDiligence => 3,
            Self::RiskAssessment => 4,
            Self::TransactionDetails => 5,
            Self::Closing => 6,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Initiation => "Initiate Transaction",
            Self::AssetScreening => "Screen Assets",
            Self::DueDiligence => "Due Diligence",
            Self::RiskAssessment => "Risk Assessment",
            Self::TransactionDetails => "Transaction Details",
            Self::Closing => "Close Transaction",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Initiation => "Define transaction type and details",
            Self::AssetScreening => "Add and screen market opportunities",
            Self::DueDiligence => "Manage documents and performance data",
            Self::RiskAssessment => "Evaluate risks and ROI",
            Self::TransactionDetails => "Confirm final details",
            Self::Closing => "Review and finalize",
        }
    }

    /// The following step, clamped at the last one
    pub fn next(&self) -> Self {
        Self::from_number(self.number() + 1).unwrap_or(Self::LAST)
    }

    /// The preceding step, clamped at the first one
    pub fn previous(&self) -> Self {
        Self::from_number(self.number().saturating_sub(1)).unwrap_or(Self::FIRST)
    }

    pub fn is_first(&self) -> bool {
        *self == Self::FIRST
    }

    pub fn is_last(&self) -> bool {
        *self == Self::LAST
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of 6: {}", self.number(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering() {
        for (i, step) in WizardStep::ALL.iter().enumerate() {
            assert_eq!(step.number() as usize, i + 1);
            assert_eq!(WizardStep::from_number(step.number()), Some(*step));
        }
        assert_eq!(WizardStep::from_number(0), None);
        assert_eq!(WizardStep::from_number(7), None);
    }

    #[test]
    fn test_clamping() {
        assert_eq!(WizardStep::Initiation.previous(), WizardStep::Initiation);
        assert_eq!(WizardStep::Closing.next(), WizardStep::Closing);
        assert_eq!(WizardStep::DueDiligence.next(), WizardStep::RiskAssessment);
        assert_eq!(WizardStep::DueDiligence.previous(), WizardStep::AssetScreening);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            WizardStep::RiskAssessment.to_string(),
            "Step 4 of 6: Risk Assessment"
        );
        assert_eq!(WizardStep::Closing.description(), "Review and finalize");
    }
}
