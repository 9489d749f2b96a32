//! # Domain Errors
//!
//! Error types for domain-level validation and pricing failures.
//!
//! [`DomainError`] covers the failures a quote request can produce before
//! any infrastructure is involved: missing or non-positive input fields,
//! malformed amounts and percentages, rules that fail their own internal
//! consistency checks, and the "no price available" outcome where neither
//! a rule nor a manual override yields a usable base rate.
//!
//! # Examples
//!
//! ```
//! use rate_engine::domain::errors::DomainError;
//!
//! let err = DomainError::missing("vehicle_type");
//! assert_eq!(err.to_string(), "vehicle_type is required");
//! assert!(err.is_client_input());
//!
//! let err = DomainError::NoPriceAvailable;
//! assert!(!err.is_client_input());
//! ```

use crate::domain::value_objects::arithmetic::ArithmeticError;
use thiserror::Error;

/// Domain layer error.
///
/// Client-input variants map to HTTP 400 at the API boundary; the
/// remaining variants surface as server faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required request field was absent.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A numeric request field was zero or negative where a strictly
    /// positive value is required.
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),

    /// A monetary amount failed validation.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A percentage failed validation.
    #[error("invalid percentage: {0}")]
    InvalidPercent(String),

    /// The request body could not be interpreted.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// A pricing rule failed its internal consistency checks.
    #[error("invalid pricing rule: {0}")]
    InvalidRule(String),

    /// Neither a matched rule nor a manual override produced a usable
    /// base rate.
    #[error("no price available")]
    NoPriceAvailable,

    /// Checked arithmetic failed while computing fare figures.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

impl DomainError {
    /// Creates a missing-field error.
    #[must_use]
    pub const fn missing(field: &'static str) -> Self {
        Self::MissingField(field)
    }

    /// Creates a non-positive-quantity error.
    #[must_use]
    pub const fn not_positive(field: &'static str) -> Self {
        Self::NotPositive(field)
    }

    /// Creates an invalid-amount error.
    #[must_use]
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::InvalidAmount(message.into())
    }

    /// Creates an invalid-percentage error.
    #[must_use]
    pub fn invalid_percent(message: impl Into<String>) -> Self {
        Self::InvalidPercent(message.into())
    }

    /// Creates an invalid-body error.
    #[must_use]
    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::InvalidBody(message.into())
    }

    /// Creates an invalid-rule error.
    #[must_use]
    pub fn invalid_rule(message: impl Into<String>) -> Self {
        Self::InvalidRule(message.into())
    }

    /// Returns true if this error was caused by the caller's input.
    #[must_use]
    pub const fn is_client_input(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_)
                | Self::NotPositive(_)
                | Self::InvalidAmount(_)
                | Self::InvalidPercent(_)
                | Self::InvalidBody(_)
        )
    }

    /// Returns true if this is the no-price-available outcome.
    #[must_use]
    pub const fn is_no_price(&self) -> bool {
        matches!(self, Self::NoPriceAvailable)
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_display() {
        let err = DomainError::missing("distance_km");
        assert_eq!(err.to_string(), "distance_km is required");
    }

    #[test]
    fn not_positive_display() {
        let err = DomainError::not_positive("nights");
        assert_eq!(err.to_string(), "nights must be greater than zero");
    }

    #[test]
    fn invalid_amount_display() {
        let err = DomainError::invalid_amount("negative base fare");
        assert_eq!(err.to_string(), "invalid amount: negative base fare");
    }

    #[test]
    fn invalid_percent_display() {
        let err = DomainError::invalid_percent("negative commission");
        assert_eq!(err.to_string(), "invalid percentage: negative commission");
    }

    #[test]
    fn no_price_available_display() {
        assert_eq!(
            DomainError::NoPriceAvailable.to_string(),
            "no price available"
        );
    }

    #[test]
    fn client_input_predicate() {
        assert!(DomainError::missing("city").is_client_input());
        assert!(DomainError::not_positive("distance_km").is_client_input());
        assert!(DomainError::invalid_percent("bad").is_client_input());
        assert!(DomainError::invalid_body("not json").is_client_input());
        assert!(!DomainError::NoPriceAvailable.is_client_input());
        assert!(!DomainError::invalid_rule("min > max").is_client_input());
    }

    #[test]
    fn no_price_predicate() {
        assert!(DomainError::NoPriceAvailable.is_no_price());
        assert!(!DomainError::missing("city").is_no_price());
    }

    #[test]
    fn from_arithmetic_error() {
        let err: DomainError = ArithmeticError::DivisionByZero.into();
        assert_eq!(err.to_string(), "arithmetic error: division by zero");
        assert!(!err.is_client_input());
    }
}
