//! Estate (leasable unit) model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EstateId;
use super::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    #[default]
    Apartment,
    Commercial,
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Apartment => write!(f, "Apartment"),
            Self::Commercial => write!(f, "Commercial"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyStatus {
    Occupied,
    #[default]
    Vacant,
}

impl OccupancyStatus {
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied)
    }
}

impl fmt::Display for OccupancyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Occupied => write!(f, "Occupied"),
            Self::Vacant => write!(f, "Vacant"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitCondition {
    Excellent,
    #[default]
    Good,
    Fair,
    Poor,
}

impl fmt::Display for UnitCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excellent => write!(f, "Excellent"),
            Self::Good => write!(f, "Good"),
            Self::Fair => write!(f, "Fair"),
            Self::Poor => write!(f, "Poor"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentHistory {
    pub on_time: u32,
    pub late: u32,
    pub total: u32,
}

/// Who lives in the unit and how they pay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantProfile {
    pub tenant_type: String,
    pub lease_start: NaiveDate,
    /// Lease duration in months
    pub lease_duration_months: u32,
    #[serde(default)]
    pub history: Vec<String>,
    pub payments: PaymentHistory,
    #[serde(default)]
    pub special_requirements: Vec<String>,
}

/// Contract terms of the current lease
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaseTerms {
    pub monthly_rent: Money,
    pub security_deposit: Money,
    pub payment_terms: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub renewal_options: String,
    #[serde(default)]
    pub included_utilities: Vec<String>,
    #[serde(default)]
    pub special_conditions: Vec<String>,
}

/// A leasable space within a building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estate {
    pub id: EstateId,
    pub unit_number: String,
    pub kind: UnitKind,
    /// Floor area in square meters
    pub size_sqm: f64,
    pub current_rent: Money,
    pub occupancy: OccupancyStatus,
    #[serde(default)]
    pub tenant: Option<TenantProfile>,
    #[serde(default)]
    pub lease: Option<LeaseTerms>,
    #[serde(default)]
    pub turnover_costs: Option<Money>,
    #[serde(default)]
    pub condition: UnitCondition,
}

impl Estate {
    pub fn new(
        id: impl Into<EstateId>,
        unit_number: impl Into<String>,
        kind: UnitKind,
        size_sqm: f64,
        current_rent: Money,
        occupancy: OccupancyStatus,
    ) -> Self {
        Self {
            id: id.into(),
            unit_number: unit_number.into(),
            kind,
            size_sqm,
            current_rent,
            occupancy,
            tenant: None,
            lease: None,
            turnover_costs: None,
            condition: UnitCondition::default(),
        }
    }

    /// Lease end date derived from the tenant profile
    pub fn lease_end(&self) -> Option<NaiveDate> {
        self.tenant.as_ref().and_then(|t| {
            t.lease_start
                .checked_add_months(chrono::Months::new(t.lease_duration_months))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lease_end_from_profile() {
        let mut estate = Estate::new(
            "e1",
            "101",
            UnitKind::Apartment,
            85.5,
            Money::from_euros(1450),
            OccupancyStatus::Occupied,
        );
        assert!(estate.lease_end().is_none());

        estate.tenant = Some(TenantProfile {
            tenant_type: "Family".into(),
            lease_start: NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
            lease_duration_months: 24,
            history: Vec::new(),
            payments: PaymentHistory::default(),
            special_requirements: Vec::new(),
        });
        assert_eq!(estate.lease_end(), NaiveDate::from_ymd_opt(2024, 6, 1));
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&OccupancyStatus::Occupied).unwrap();
        assert_eq!(json, "\"occupied\"");
        assert!(OccupancyStatus::Occupied.is_occupied());
        assert!(!OccupancyStatus::Vacant.is_occupied());
    }
}
