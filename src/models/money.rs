//! Money type for representing euro amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and the compact formats used
//! throughout the dashboard (`€12.5M`, `€450k`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount in euros, stored as cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use dealdesk_cli::models::Money;
    /// let amount = Money::from_cents(1050); // €10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole euros
    ///
    /// # Examples
    /// ```
    /// use dealdesk_cli::models::Money;
    /// let value = Money::from_euros(12_500_000);
    /// assert_eq!(value.format_millions(), "€12.5M");
    /// ```
    pub const fn from_euros(euros: i64) -> Self {
        Self(euros * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole euros portion (truncated toward zero)
    pub const fn euros(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount in euros as a float, for ratios
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "500000", "500000.50", "€500,000", "1.2M" and "450k".
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s: String = s
            .trim()
            .chars()
            .filter(|c| *c != ',' && *c != '_' && !c.is_whitespace())
            .collect();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped.to_string()),
            None => (false, s),
        };
        let s = s.strip_prefix('€').unwrap_or(&s);

        let (number, multiplier) = match s.chars().last() {
            Some('M') | Some('m') => (&s[..s.len() - 1], 1_000_000),
            Some('K') | Some('k') => (&s[..s.len() - 1], 1_000),
            _ => (s, 1),
        };

        if number.is_empty() {
            return Err(MoneyParseError::InvalidFormat(original.to_string()));
        }

        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let (whole, frac) = number.split_once('.').unwrap_or((number, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) || (whole.is_empty() && frac.is_empty()) {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        // Digits past the cent are truncated
        let frac_cents: i64 = match frac.get(..2) {
            Some(two) => two.parse().map_err(|_| invalid())?,
            None if frac.is_empty() => 0,
            None => frac.parse::<i64>().map_err(|_| invalid())? * 10,
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .and_then(|c| c.checked_mul(multiplier))
            .ok_or_else(invalid)?;
        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format whole euros with thousands separators: `€12,500,000`
    pub fn format_whole(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}€{}", sign, group_thousands(self.euros().unsigned_abs()))
    }

    /// Format in millions with one decimal: `€12.5M`
    pub fn format_millions(&self) -> String {
        format!("€{:.1}M", self.as_f64() / 1_000_000.0)
    }

    /// Format in thousands without decimals: `€450k`
    pub fn format_thousands(&self) -> String {
        format!("€{:.0}k", self.as_f64() / 1_000.0)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(
            f,
            "{}€{}.{:02}",
            sign,
            group_thousands(self.euros().unsigned_abs()),
            self.cents_part()
        )
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_euros() {
        let m = Money::from_euros(450_000);
        assert_eq!(m.cents(), 45_000_000);
        assert_eq!(m.euros(), 450_000);
        assert_eq!(m.cents_part(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "€10.50");
        assert_eq!(Money::from_euros(12_500_000).to_string(), "€12,500,000.00");
        assert_eq!(Money::from_cents(-105_000).to_string(), "-€1,050.00");
        assert_eq!(Money::zero().to_string(), "€0.00");
    }

    #[test]
    fn test_compact_formats() {
        assert_eq!(Money::from_euros(22_300_000).format_millions(), "€22.3M");
        assert_eq!(Money::from_euros(1_250_000).format_whole(), "€1,250,000");
        assert_eq!(Money::from_euros(450_000).format_thousands(), "€450k");
        assert_eq!(Money::from_euros(980).format_whole(), "€980");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("500000").unwrap(), Money::from_euros(500_000));
        assert_eq!(Money::parse("€500,000").unwrap(), Money::from_euros(500_000));
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("1.25M").unwrap(), Money::from_euros(1_250_000));
        assert_eq!(Money::parse("450k").unwrap(), Money::from_euros(450_000));
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("M").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse(".").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_fraction() {
        assert!(Money::parse("1.€").is_err());
        assert!(Money::parse("1.€5").is_err());
        assert!(Money::parse("1.-5").is_err());
        assert!(Money::parse("1.+5").is_err());
        assert!(Money::parse("--5").is_err());
        assert_eq!(Money::parse("1.999").unwrap().cents(), 199);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(Money::parse("99999999999999999").is_err());
        assert!(Money::parse("99999999999999M").is_err());
        assert!(Money::parse("999999999999999999999").is_err());
        assert!(matches!(
            Money::parse("90000000000000000"),
            Err(MoneyParseError::InvalidFormat(s)) if s == "90000000000000000"
        ));
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_euros(12_500_000);
        let b = Money::from_euros(9_800_000);
        assert_eq!(a + b, Money::from_euros(22_300_000));
        assert_eq!(a - b, Money::from_euros(2_700_000));

        let total: Money = [a, b].iter().sum();
        assert_eq!(total, Money::from_euros(22_300_000));
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
