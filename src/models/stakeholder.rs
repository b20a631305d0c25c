//! Approval participants

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::StakeholderId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Approved => write!(f, "Approved"),
            Self::Rejected => write!(f, "Rejected"),
        }
    }
}

impl std::str::FromStr for ApprovalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(format!("Unknown approval status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stakeholder {
    pub id: StakeholderId,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub status: ApprovalStatus,
}

impl Stakeholder {
    pub fn new(name: impl Into<String>, role: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: StakeholderId::new(),
            name: name.into(),
            role: role.into(),
            email: email.into(),
            status: ApprovalStatus::Pending,
        }
    }

    pub fn with_status(mut self, status: ApprovalStatus) -> Self {
        self.status = status;
        self
    }

    /// Two entries are the same participant when name and role match
    pub fn same_person(&self, other: &Stakeholder) -> bool {
        self.name.eq_ignore_ascii_case(&other.name) && self.role.eq_ignore_ascii_case(&other.role)
    }
}

impl fmt::Display for Stakeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.role)
    }
}
