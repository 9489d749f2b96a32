//! # Money
//!
//! Non-negative monetary amount backed by `rust_decimal`.
//!
//! [`Money`] wraps a [`Decimal`] that is guaranteed non-negative at
//! construction. Intermediate fare figures keep their full precision;
//! [`Money::round2`] produces the two-decimal commercial rounding
//! (midpoint away from zero) applied to every amount that leaves the
//! engine.
//!
//! Serialization is transparent: a `Money` value appears on the wire as
//! the decimal string `rust_decimal` emits, e.g. `"400.00"`.
//!
//! # Examples
//!
//! ```
//! use rate_engine::domain::value_objects::money::Money;
//! use rust_decimal::Decimal;
//!
//! let fare = Money::new(Decimal::new(4005, 1))?; // 400.5
//! assert_eq!(fare.round2().amount(), Decimal::new(40050, 2));
//! assert!(Money::new(Decimal::new(-1, 0)).is_err());
//! # Ok::<(), rate_engine::domain::errors::DomainError>(())
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::CheckedArithmetic;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A non-negative monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Default)]
#[serde(transparent)]
pub struct Money(Decimal);

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a monetary amount.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if `amount` is negative.
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::invalid_amount(format!(
                "amount cannot be negative: {amount}"
            )));
        }
        Ok(Self(amount))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Rounds to two decimal places, midpoint away from zero.
    ///
    /// The result always carries exactly two decimal places, so whole
    /// amounts serialize as `"125.00"` rather than `"125"`.
    #[inline]
    #[must_use]
    pub fn round2(self) -> Self {
        let mut amount = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        amount.rescale(2);
        Self(amount)
    }

    /// Returns true if the amount is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive.
    #[inline]
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Adds another amount.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` on overflow.
    pub fn safe_add(self, rhs: Self) -> DomainResult<Self> {
        Ok(Self(self.0.safe_add(rhs.0)?))
    }

    /// Multiplies by a non-negative factor.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if `factor` is negative and
    /// `DomainError::Arithmetic` on overflow.
    pub fn safe_mul(self, factor: Decimal) -> DomainResult<Self> {
        if factor.is_sign_negative() && !factor.is_zero() {
            return Err(DomainError::invalid_amount(format!(
                "factor cannot be negative: {factor}"
            )));
        }
        Ok(Self(self.0.safe_mul(factor)?))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}
