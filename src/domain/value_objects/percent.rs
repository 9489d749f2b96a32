//! # Percent
//!
//! Non-negative percentage in human units (10 means 10%).
//!
//! Commission and profit figures are expressed as percentages of a base
//! fare. [`Percent::of`] performs the `amount * pct / 100` computation
//! through checked arithmetic.
//!
//! # Examples
//!
//! ```
//! use rate_engine::domain::value_objects::{Money, Percent};
//! use rust_decimal::Decimal;
//!
//! let commission = Percent::new(Decimal::new(10, 0))?;
//! let base = Money::new(Decimal::new(400, 0))?;
//! assert_eq!(commission.of(base)?.amount(), Decimal::new(40, 0));
//! # Ok::<(), rate_engine::domain::errors::DomainError>(())
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::CheckedArithmetic;
use crate::domain::value_objects::money::Money;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A non-negative percentage, stored in human units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Default)]
#[serde(transparent)]
pub struct Percent(Decimal);

impl<'de> Deserialize<'de> for Percent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl Percent {
    /// Zero percent.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a percentage.
    ///
    /// Values above 100 are allowed (a markup can exceed the base fare).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPercent` if `value` is negative.
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::invalid_percent(format!(
                "percentage cannot be negative: {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the percentage in human units.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true if this is zero percent.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Computes this percentage of a monetary amount.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` on overflow.
    pub fn of(&self, amount: Money) -> DomainResult<Money> {
        let raw = amount
            .amount()
            .safe_mul(self.0)?
            .safe_div(Decimal::ONE_HUNDRED)?;
        Money::new(raw)
    }

    /// Rounds to two decimal places, midpoint away from zero.
    ///
    /// The result always carries exactly two decimal places, matching
    /// the scale of rounded monetary amounts.
    #[inline]
    #[must_use]
    pub fn round2(self) -> Self {
        let mut value = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(2);
        Self(value)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pct(value: i64, scale: u32) -> Percent {
        Percent::new(Decimal::new(value, scale)).unwrap()
    }

    fn money(value: i64, scale: u32) -> Money {
        Money::new(Decimal::new(value, scale)).unwrap()
    }

    #[test]
    fn accepts_zero_and_above_hundred() {
        assert!(Percent::new(Decimal::ZERO).is_ok());
        assert!(Percent::new(Decimal::new(150, 0)).is_ok());
    }

    #[test]
    fn rejects_negative() {
        let err = Percent::new(Decimal::new(-10, 0)).unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn of_computes_share_of_amount() {
        let commission = pct(10, 0).of(money(400, 0)).unwrap();
        assert_eq!(commission.amount(), Decimal::new(40, 0));
    }

    #[test]
    fn of_with_fractional_percent() {
        let share = pct(125, 1).of(money(200, 0)).unwrap(); // 12.5% of 200
        assert_eq!(share.amount(), Decimal::new(25, 0));
    }

    #[test]
    fn zero_percent_of_anything_is_zero() {
        assert!(Percent::ZERO.of(money(999, 0)).unwrap().is_zero());
    }

    #[test]
    fn round2_rounds_midpoint_away_from_zero() {
        let value = Percent::new(Decimal::new(10005, 3)).unwrap(); // 10.005
        assert_eq!(value.round2().value(), Decimal::new(1001, 2));
    }

    #[test]
    fn display_appends_percent_sign() {
        assert_eq!(pct(15, 0).to_string(), "15%");
    }

    #[test]
    fn rejects_negative_on_deserialize() {
        let result: Result<Percent, _> = serde_json::from_str("-10");
        assert!(result.is_err());
    }
}
