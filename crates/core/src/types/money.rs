//! Decimal money amounts.
//!
//! Prices, discounts, and totals are decimal values with no currency
//! dimension (the dashboard displays a single implicit currency). Line
//! totals can legitimately go negative when a discount exceeds the line
//! value, so `Money` itself carries no sign constraint; forms enforce
//! non-negativity where the rules call for it.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, Sub};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Money`] amount.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The input string is empty.
    #[error("amount cannot be empty")]
    Empty,
    /// The input is not a valid decimal number.
    #[error("amount must be a valid number")]
    Invalid,
}

/// A decimal money amount.
///
/// ## Examples
///
/// ```
/// use orderdesk_core::Money;
///
/// let price = Money::parse("1200").unwrap();
/// let discount = Money::parse("100").unwrap();
/// assert_eq!(price * 2 - discount, Money::parse("2300").unwrap());
///
/// // Oversized discounts produce negative amounts, by policy unclamped.
/// let total = Money::parse("10").unwrap() - Money::parse("25").unwrap();
/// assert!(total.is_negative());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a `Money` from a raw decimal.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Parse a `Money` amount from form input.
    ///
    /// Leading and trailing whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty or not a decimal
    /// number.
    pub fn parse(s: &str) -> Result<Self, MoneyError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyError::Empty);
        }

        trimmed
            .parse::<Decimal>()
            .map(Self)
            .map_err(|_| MoneyError::Invalid)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is strictly below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0 * Decimal::from(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_parse_valid_amounts() {
        assert_eq!(Money::parse("1200").unwrap(), Money::new(dec!(1200)));
        assert_eq!(Money::parse("19.99").unwrap(), Money::new(dec!(19.99)));
        assert_eq!(Money::parse("0").unwrap(), Money::ZERO);
        assert_eq!(Money::parse(" 42.5 ").unwrap(), Money::new(dec!(42.5)));
        assert_eq!(Money::parse("-3").unwrap(), Money::new(dec!(-3)));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Money::parse(""), Err(MoneyError::Empty));
        assert_eq!(Money::parse("   "), Err(MoneyError::Empty));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(Money::parse("abc"), Err(MoneyError::Invalid));
        assert_eq!(Money::parse("12,50"), Err(MoneyError::Invalid));
    }

    #[test]
    fn test_arithmetic() {
        let price = Money::new(dec!(100));
        assert_eq!(price * 3, Money::new(dec!(300)));
        assert_eq!(price * 3 - Money::new(dec!(15)), Money::new(dec!(285)));
        assert_eq!(price + Money::new(dec!(0.5)), Money::new(dec!(100.5)));
    }

    #[test]
    fn test_negative_amounts_are_representable() {
        let total = Money::new(dec!(10)) - Money::new(dec!(25));
        assert!(total.is_negative());
        assert_eq!(total, Money::new(dec!(-15)));
    }

    #[test]
    fn test_sum() {
        let totals = [Money::new(dec!(1100)), Money::new(dec!(1550))];
        assert_eq!(totals.into_iter().sum::<Money>(), Money::new(dec!(2650)));

        let empty: [Money; 0] = [];
        assert_eq!(empty.into_iter().sum::<Money>(), Money::ZERO);
    }

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(Money::new(dec!(1200)).to_string(), "1200.00");
        assert_eq!(Money::new(dec!(-15.5)).to_string(), "-15.50");
    }
}
