//! # Checked Arithmetic
//!
//! Traits and utilities for safe decimal arithmetic.
//!
//! This module provides:
//! - [`ArithmeticError`] - Error type for arithmetic failures
//! - [`CheckedArithmetic`] - Trait for safe arithmetic operations
//!
//! Fare computation multiplies rates by quantities and layers percentages
//! on top; every step goes through these checked operations so overflow
//! and division by zero surface as errors instead of panics.
//!
//! # Examples
//!
//! ```
//! use rate_engine::domain::value_objects::arithmetic::CheckedArithmetic;
//! use rust_decimal::Decimal;
//!
//! let rate = Decimal::new(25, 1); // 2.5
//! let distance = Decimal::new(50, 0);
//! let fare = rate.safe_mul(distance);
//! assert_eq!(fare, Ok(Decimal::new(125, 0)));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Error type for arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Arithmetic operation resulted in overflow.
    #[error("arithmetic overflow")]
    Overflow,

    /// Arithmetic operation resulted in underflow.
    #[error("arithmetic underflow")]
    Underflow,

    /// Division by zero attempted.
    #[error("division by zero")]
    DivisionByZero,

    /// Invalid value provided (e.g., negative when positive required).
    #[error("invalid value: {0}")]
    InvalidValue(&'static str),
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Trait for checked arithmetic operations.
///
/// Provides safe arithmetic methods that return `Result` instead of
/// panicking on overflow, underflow, or division by zero.
pub trait CheckedArithmetic: Sized {
    /// Safely add two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely subtract two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Underflow` if the result would underflow.
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely multiply two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely divide two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::DivisionByZero` if the divisor is zero.
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_sub(rhs).ok_or(ArithmeticError::Underflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        self.checked_div(rhs).ok_or(ArithmeticError::Overflow)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod arithmetic_error {
        use super::*;

        #[test]
        fn display_formats_correctly() {
            assert_eq!(ArithmeticError::Overflow.to_string(), "arithmetic overflow");
            assert_eq!(
                ArithmeticError::Underflow.to_string(),
                "arithmetic underflow"
            );
            assert_eq!(
                ArithmeticError::DivisionByZero.to_string(),
                "division by zero"
            );
            assert_eq!(
                ArithmeticError::InvalidValue("negative").to_string(),
                "invalid value: negative"
            );
        }
    }

    mod checked_arithmetic_decimal {
        use super::*;

        #[test]
        fn safe_add_works() {
            let a = Decimal::new(100, 0);
            let b = Decimal::new(50, 0);
            assert_eq!(a.safe_add(b).unwrap(), Decimal::new(150, 0));
        }

        #[test]
        fn safe_sub_works() {
            let a = Decimal::new(100, 0);
            let b = Decimal::new(50, 0);
            assert_eq!(a.safe_sub(b).unwrap(), Decimal::new(50, 0));
        }

        #[test]
        fn safe_mul_works() {
            let a = Decimal::new(10, 0);
            let b = Decimal::new(5, 0);
            assert_eq!(a.safe_mul(b).unwrap(), Decimal::new(50, 0));
        }

        #[test]
        fn safe_mul_fractional_rate() {
            let rate = Decimal::new(375, 2); // 3.75
            let distance = Decimal::new(40, 0);
            assert_eq!(rate.safe_mul(distance).unwrap(), Decimal::new(150, 0));
        }

        #[test]
        fn safe_div_works() {
            let a = Decimal::new(100, 0);
            let b = Decimal::new(5, 0);
            assert_eq!(a.safe_div(b).unwrap(), Decimal::new(20, 0));
        }

        #[test]
        fn safe_div_by_zero_fails() {
            let a = Decimal::new(100, 0);
            assert_eq!(a.safe_div(Decimal::ZERO), Err(ArithmeticError::DivisionByZero));
        }

        #[test]
        fn safe_mul_overflow_fails() {
            assert_eq!(
                Decimal::MAX.safe_mul(Decimal::new(2, 0)),
                Err(ArithmeticError::Overflow)
            );
        }
    }
}
