//! Built-in portfolio data
//!
//! The dashboard ships with a small Berlin portfolio, a screening universe,
//! retrofit risk profiles, three sample transactions and a stakeholder
//! directory. Everything here is static and rebuilt on each call.

use chrono::NaiveDate;

use crate::models::{
    ApprovalStatus, Asset, AssetSource, Building, ClosingDetails, DecarbonizationRating,
    DiligenceSummary, DocumentStatus, Estate, FuturePotential, LeaseTerms, LiquidityRating,
    Location, MarketConditions, MarketTrends, Money, OccupancyStatus, PaymentHistory,
    PaymentMethod, PerformanceMetrics, RecordStatus, RiskAssessmentSummary, RiskLevel,
    RiskProfile, SelectedAsset, Stakeholder, TenancyMix, TenantProfile, TransactionDetail,
    StrategicGoal, TransactionId, TransactionRecord, UnitCondition, UnitKind,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Portfolio assets shown on `/assets`
pub fn portfolio_assets() -> Vec<Asset> {
    let mut kreuzberg = Asset::new(
        "1",
        "Kreuzberg Residential Complex",
        "Berlin, Germany",
        "Residential",
        Money::from_euros(12_500_000),
        7.8,
    );
    kreuzberg.decarbonization = DecarbonizationRating::High;
    kreuzberg.decarbonization_score = Some(85.0);
    kreuzberg.liquidity_rating = LiquidityRating::A;
    kreuzberg.source = AssetSource::Direct;
    kreuzberg.matching_score = Some(89.0);
    kreuzberg.performance = Some(PerformanceMetrics {
        occupancy_rate: 95.0,
        operating_expenses: Money::from_euros(450_000),
        net_operating_income: Money::from_euros(980_000),
    });
    kreuzberg.future_potential = Some(FuturePotential {
        value_appreciation: "High".into(),
        development_opportunities: strings(&["Rooftop Solar Installation", "EV Charging Stations"]),
        market_outlook: "Positive".into(),
    });
    kreuzberg.buildings = vec![
        bergmannstrasse_building(),
        Building::new("b2", "Building B", "mixed-use", 18, 92.0),
    ];

    let mut prenzlauer = Asset::new(
        "2",
        "Prenzlauer Berg Apartments",
        "Berlin, Germany",
        "Residential",
        Money::from_euros(9_800_000),
        8.9,
    );
    prenzlauer.decarbonization = DecarbonizationRating::Medium;
    prenzlauer.liquidity_rating = LiquidityRating::B;
    prenzlauer.source = AssetSource::Direct;
    prenzlauer.matching_score = Some(76.0);

    vec![kreuzberg, prenzlauer]
}

fn bergmannstrasse_building() -> Building {
    let mut building = Building::new("b1", "Bergmannstraße Building", "residential", 24, 96.0);
    building.construction_year = Some(1985);
    building.energy_rating = Some("B".into());
    building.certification = Some("LEED Gold".into());
    building.last_year_income = Some(Money::from_euros(980_000));
    building.maintenance_history = strings(&[
        "2023: HVAC System Upgrade",
        "2022: Facade Renovation",
        "2021: Solar Panel Installation",
    ]);
    building.occupancy_trend = vec![92.0, 94.0, 95.0, 96.0];
    building.maintenance_cost = Some(Money::from_euros(45_000));
    building.tenancy_mix = Some(TenancyMix {
        residential_units: 24,
        commercial_units: 2,
        avg_lease_term_months: 36,
    });
    building.cap_rate = Some(4.5);
    building.vacancy_rate = Some(4.0);
    building.location = Some(Location {
        address: "Bergmannstraße 100".into(),
        city: "Berlin".into(),
        postal_code: "10961".into(),
        latitude: 52.4889,
        longitude: 13.4094,
        market_trends: MarketTrends {
            price_trend: "Increasing".into(),
            demand_level: "High".into(),
            future_outlook: "Positive".into(),
        },
        walkability_score: 85,
        transportation_access: "Excellent".into(),
        crime_rate: "low".into(),
    });

    let mut e1 = Estate::new(
        "e1",
        "101",
        UnitKind::Apartment,
        85.5,
        Money::from_euros(1450),
        OccupancyStatus::Occupied,
    );
    e1.tenant = Some(TenantProfile {
        tenant_type: "Family".into(),
        lease_start: date(2022, 6, 1),
        lease_duration_months: 24,
        history: strings(&[
            "Previous 2-year lease completed successfully",
            "No major incidents reported",
            "Regular maintenance requests handled promptly",
        ]),
        payments: PaymentHistory {
            on_time: 22,
            late: 1,
            total: 23,
        },
        special_requirements: strings(&["Pet-friendly accommodation", "Additional storage space"]),
    });
    e1.lease = Some(LeaseTerms {
        monthly_rent: Money::from_euros(1450),
        security_deposit: Money::from_euros(4350),
        payment_terms: "Due by 3rd of each month".into(),
        start_date: date(2022, 6, 1),
        end_date: date(2024, 5, 31),
        renewal_options: "Option to renew for 2 years with 3% increase".into(),
        included_utilities: strings(&["Water", "Building maintenance", "Garbage collection"]),
        special_conditions: strings(&[
            "No short-term subletting",
            "Annual property inspection required",
        ]),
    });
    e1.turnover_costs = Some(Money::from_euros(2800));
    e1.condition = UnitCondition::Excellent;

    let e2 = Estate::new(
        "e2",
        "102",
        UnitKind::Apartment,
        76.0,
        Money::from_euros(1280),
        OccupancyStatus::Occupied,
    );
    let e3 = Estate::new(
        "e3",
        "201",
        UnitKind::Apartment,
        92.0,
        Money::from_euros(1650),
        OccupancyStatus::Vacant,
    );

    building.estates = vec![e1, e2, e3];
    building
}

fn screening_asset(
    id: &str,
    name: &str,
    value: i64,
    roi: f64,
    decarbonization: DecarbonizationRating,
) -> Asset {
    let mut asset = Asset::new(
        id,
        name,
        "Berlin, Germany",
        "Multi Family Home",
        Money::from_euros(value),
        roi,
    );
    asset.decarbonization = decarbonization;
    asset.source = AssetSource::Screening;
    asset
}

/// Market opportunities listed on the screening step
pub fn screening_assets() -> Vec<Asset> {
    use DecarbonizationRating::{High, Medium};
    vec![
        screening_asset("1", "Kreuzberg Residential Complex", 12_500_000, 9.2, High),
        screening_asset("2", "Prenzlauer Berg Apartments", 9_800_000, 8.5, Medium),
        screening_asset("3", "Charlottenburg Manor", 8_400_000, 10.1, High),
        screening_asset("4", "Mitte Residential Tower", 15_200_000, 7.8, Medium),
        screening_asset("5", "Friedrichshain Complex", 6_900_000, 9.7, High),
    ]
}

/// The asset appended by the screening step's bulk upload button
pub fn bulk_upload_asset(id: &str) -> Asset {
    let mut asset = screening_asset(
        id,
        "Uploaded Property Complex",
        4_500_000,
        8.9,
        DecarbonizationRating::Medium,
    );
    asset.source = AssetSource::Upload;
    asset
}

/// Retrofit profiles for the risk assessment step
pub fn risk_profiles() -> Vec<RiskProfile> {
    vec![
        RiskProfile {
            asset_id: "1".into(),
            asset_name: "Kreuzberg Residential Complex".into(),
            current_emissions: 150.0,
            potential_reduction: 75.0,
            required_investment: Money::from_euros(500_000),
            risk_level: RiskLevel::Medium,
            roi: 7.8,
            decarbonization_potential: RiskLevel::High,
        },
        RiskProfile {
            asset_id: "2".into(),
            asset_name: "Prenzlauer Berg Apartments".into(),
            current_emissions: 200.0,
            potential_reduction: 80.0,
            required_investment: Money::from_euros(750_000),
            risk_level: RiskLevel::Low,
            roi: 8.9,
            decarbonization_potential: RiskLevel::Medium,
        },
    ]
}

/// People who can be added as approvers
pub fn stakeholder_directory() -> Vec<Stakeholder> {
    vec![
        Stakeholder::new("Sarah Johnson", "Investment Director", "sarah.johnson@example.com")
            .with_status(ApprovalStatus::Approved),
        Stakeholder::new("Michael Chen", "Risk Manager", "michael.chen@example.com"),
        Stakeholder::new("Anna Schmidt", "Sustainability Officer", "anna.schmidt@example.com"),
    ]
}

/// Sample transactions shown on `/transactions`
pub fn transactions() -> Vec<TransactionRecord> {
    let portfolio = portfolio_assets();
    let selected: Vec<SelectedAsset> = portfolio.iter().map(SelectedAsset::from).collect();

    let berlin = TransactionRecord {
        id: TransactionId::new("1"),
        name: "Berlin Portfolio Acquisition".into(),
        kind: "Acquisition".into(),
        value: Money::from_euros(1_250_000),
        asset_count: 2,
        status: RecordStatus::InProgress,
        date: date(2024, 3, 15),
        detail: Some(TransactionDetail {
            template: "Standard Acquisition".into(),
            budget: Some(Money::from_euros(1_250_000)),
            strategic_goal: Some(StrategicGoal::PortfolioDiversification),
            market: MarketConditions {
                market_phase: "Growth".into(),
                competition_level: "Medium".into(),
                regulatory_environment: "Stable".into(),
            },
            selected_assets: selected,
            due_diligence: DiligenceSummary {
                status: "In Progress".into(),
                completion_rate: 75.0,
                documents: vec![
                    DocumentStatus {
                        name: "Financial Statements".into(),
                        status: "Verified".into(),
                        date: date(2024, 3, 16),
                    },
                    DocumentStatus {
                        name: "Property Inspection Reports".into(),
                        status: "Pending".into(),
                        date: date(2024, 3, 17),
                    },
                    DocumentStatus {
                        name: "Environmental Assessment".into(),
                        status: "In Review".into(),
                        date: date(2024, 3, 18),
                    },
                ],
                key_findings: strings(&[
                    "Strong financial performance",
                    "Minor maintenance backlog",
                    "High tenant satisfaction",
                ]),
            },
            risk: RiskAssessmentSummary {
                overall_risk: "Medium".into(),
                financial_risks: strings(&["Market volatility", "Interest rate changes"]),
                operational_risks: strings(&["Maintenance requirements", "Tenant turnover"]),
                strategic_risks: strings(&["Regulatory changes", "Market competition"]),
                total_investment: Money::from_euros(22_300_000),
                expected_roi: Some(8.4),
                carbon_reduction: 155.0,
            },
            stakeholders: vec![
                Stakeholder::new("Sarah Schmidt", "Investment Manager", "")
                    .with_status(ApprovalStatus::Approved),
                Stakeholder::new("Michael Weber", "Legal Counsel", ""),
                Stakeholder::new("Thomas Müller", "Technical Advisor", "")
                    .with_status(ApprovalStatus::Approved),
            ],
            closing: ClosingDetails {
                target_date: Some(date(2024, 5, 15)),
                payment_method: Some(PaymentMethod::BankTransfer),
                conditions: strings(&[
                    "Board approval",
                    "Regulatory clearance",
                    "Due diligence completion",
                ]),
            },
        }),
    };

    vec![
        berlin,
        TransactionRecord {
            id: TransactionId::new("2"),
            name: "Hamburg Office Complex".into(),
            kind: "Due Diligence".into(),
            value: Money::from_euros(3_500_000),
            asset_count: 1,
            status: RecordStatus::Initiated,
            date: date(2024, 3, 10),
            detail: None,
        },
        TransactionRecord {
            id: TransactionId::new("3"),
            name: "Munich Residential Development".into(),
            kind: "Development".into(),
            value: Money::from_euros(2_800_000),
            asset_count: 3,
            status: RecordStatus::Completed,
            date: date(2024, 3, 1),
            detail: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_shape() {
        let assets = portfolio_assets();
        assert_eq!(assets.len(), 2);
        let kreuzberg = &assets[0];
        assert_eq!(kreuzberg.buildings.len(), 2);
        let b1 = kreuzberg.building("b1").unwrap();
        assert_eq!(b1.estates.len(), 3);
        assert!(b1.estate("e1").unwrap().tenant.is_some());
    }

    #[test]
    fn test_screening_universe() {
        let assets = screening_assets();
        assert_eq!(assets.len(), 5);
        assert!(assets.iter().all(|a| a.source == AssetSource::Screening));
        assert_eq!(bulk_upload_asset("6").source, AssetSource::Upload);
    }

    #[test]
    fn test_transactions() {
        let records = transactions();
        assert_eq!(records.len(), 3);
        assert!(records[0].detail.is_some());
        assert_eq!(records.iter().filter(|r| r.is_active()).count(), 2);
    }
}
