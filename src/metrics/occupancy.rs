//! Building and unit economics
//!
//! Two occupancy figures exist side by side. `occupancy` is the physical,
//! area-weighted rate computed from estates; the `occupancy_rate` fields on
//! assets and buildings are reported values. Callers label them separately.

use serde::Serialize;

use crate::models::{Estate, Money, PaymentHistory};

/// Area-weighted occupancy
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Occupancy {
    pub occupied_area: f64,
    pub total_area: f64,
    /// Physical occupancy in percent, `None` when there is no floor area
    pub rate: Option<f64>,
}

pub fn occupancy(estates: &[Estate]) -> Occupancy {
    let total_area: f64 = estates.iter().map(|e| e.size_sqm).sum();
    let occupied_area: f64 = estates
        .iter()
        .filter(|e| e.occupancy.is_occupied())
        .map(|e| e.size_sqm)
        .sum();
    let rate = if total_area > 0.0 {
        Some(occupied_area / total_area * 100.0)
    } else {
        None
    };
    Occupancy {
        occupied_area,
        total_area,
        rate,
    }
}

/// Unit-count occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnitOccupancy {
    pub occupied: usize,
    pub total: usize,
}

impl UnitOccupancy {
    pub fn rate(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.occupied as f64 / self.total as f64 * 100.0)
        }
    }
}

pub fn unit_occupancy(estates: &[Estate]) -> UnitOccupancy {
    UnitOccupancy {
        occupied: estates.iter().filter(|e| e.occupancy.is_occupied()).count(),
        total: estates.len(),
    }
}

/// Rental income minus operating expenses
pub fn net_operating_income(income: Money, expenses: Money) -> Money {
    income - expenses
}

/// NOI over value in percent, `None` for a zero value
pub fn cap_rate(noi: Money, value: Money) -> Option<f64> {
    if value.is_zero() {
        None
    } else {
        Some(noi.as_f64() / value.as_f64() * 100.0)
    }
}

/// Monthly rent per square meter
pub fn rent_per_sqm(rent: Money, size_sqm: f64) -> Option<f64> {
    if size_sqm > 0.0 {
        Some(rent.as_f64() / size_sqm)
    } else {
        None
    }
}

/// Share of payments made on time, in percent
pub fn payment_reliability(history: &PaymentHistory) -> Option<f64> {
    if history.total == 0 {
        None
    } else {
        Some(history.on_time as f64 / history.total as f64 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use crate::metrics::round1;
    use crate::models::{OccupancyStatus, UnitKind};

    fn bergmann_estates() -> Vec<Estate> {
        let assets = fixtures::portfolio_assets();
        assets[0].building("b1").unwrap().estates.clone()
    }

    #[test]
    fn test_area_occupancy_example() {
        let occ = occupancy(&bergmann_estates());
        assert!((occ.occupied_area - 161.5).abs() < 1e-9);
        assert!((occ.total_area - 253.5).abs() < 1e-9);
        assert_eq!(round1(occ.rate.unwrap()), 63.7);
    }

    #[test]
    fn test_unit_occupancy() {
        let units = unit_occupancy(&bergmann_estates());
        assert_eq!(units.occupied, 2);
        assert_eq!(units.total, 3);
        assert_eq!(round1(units.rate().unwrap()), 66.7);
    }

    #[test]
    fn test_no_area() {
        assert_eq!(occupancy(&[]).rate, None);
        assert_eq!(unit_occupancy(&[]).rate(), None);

        let zero = Estate::new(
            "z",
            "0",
            UnitKind::Commercial,
            0.0,
            Money::zero(),
            OccupancyStatus::Occupied,
        );
        assert_eq!(occupancy(&[zero]).rate, None);
    }

    #[test]
    fn test_noi_and_cap_rate() {
        let noi = net_operating_income(Money::from_euros(980_000), Money::from_euros(450_000));
        assert_eq!(noi, Money::from_euros(530_000));
        let rate = cap_rate(Money::from_euros(980_000), Money::from_euros(12_500_000)).unwrap();
        assert_eq!(round1(rate), 7.8);
        assert_eq!(cap_rate(noi, Money::zero()), None);
    }

    #[test]
    fn test_rent_per_sqm() {
        let per_sqm = rent_per_sqm(Money::from_euros(1450), 85.5).unwrap();
        assert!((per_sqm - 16.959).abs() < 0.001);
        assert_eq!(rent_per_sqm(Money::from_euros(1450), 0.0), None);
    }

    #[test]
    fn test_payment_reliability() {
        let history = PaymentHistory {
            on_time: 22,
            late: 1,
            total: 23,
        };
        assert_eq!(round1(payment_reliability(&history).unwrap()), 95.7);
        assert_eq!(payment_reliability(&PaymentHistory::default()), None);
    }
}
