//! # Domain Enums
//!
//! Enumeration types for domain concepts.
//!
//! This module provides the core enumerations used throughout the rate
//! engine:
//!
//! - [`ServiceType`] - Product line a rule or quote applies to
//! - [`PricingMode`] - How a rule derives its base fare
//! - [`CommissionType`] - Percent vs flat agent commission
//! - [`BookingStatus`] - Lifecycle state of a transport booking
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`,
//! `Hash`, `Display`, `FromStr`, and Serde traits. Wire and storage
//! values are lowercase snake_case.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an enum from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEnumError {
    /// The string does not name a known variant.
    #[error("invalid {0}: {1}")]
    InvalidValue(&'static str, String),
}

/// Product line a pricing rule, quote, or log entry applies to.
///
/// # Examples
///
/// ```
/// use rate_engine::domain::value_objects::enums::ServiceType;
///
/// let hotel = ServiceType::Hotel;
/// assert_eq!(hotel.to_string(), "hotel");
/// assert_eq!("HOTEL".parse::<ServiceType>(), Ok(hotel));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ServiceType {
    /// Ground transport (vehicle hire, transfers).
    Transport = 0,
    /// Hotel stays.
    Hotel = 1,
    /// Flights.
    Flight = 2,
}

impl ServiceType {
    /// Returns the lowercase storage representation.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Hotel => "hotel",
            Self::Flight => "flight",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "transport" => Ok(Self::Transport),
            "hotel" => Ok(Self::Hotel),
            "flight" => Ok(Self::Flight),
            _ => Err(ParseEnumError::InvalidValue("ServiceType", s.to_string())),
        }
    }
}

/// How a pricing rule derives its base fare.
///
/// # Examples
///
/// ```
/// use rate_engine::domain::value_objects::enums::PricingMode;
///
/// assert_eq!(PricingMode::PerUnit.to_string(), "per_unit");
/// assert!(PricingMode::Flat.is_flat());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum PricingMode {
    /// A single flat amount regardless of quantity.
    Flat = 0,
    /// A rate multiplied by the product quantity (km, nights).
    PerUnit = 1,
}

impl PricingMode {
    /// Returns true for flat pricing.
    #[inline]
    #[must_use]
    pub const fn is_flat(self) -> bool {
        matches!(self, Self::Flat)
    }

    /// Returns true for per-unit pricing.
    #[inline]
    #[must_use]
    pub const fn is_per_unit(self) -> bool {
        matches!(self, Self::PerUnit)
    }

    /// Returns the lowercase storage representation.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::PerUnit => "per_unit",
        }
    }
}

impl fmt::Display for PricingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PricingMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "flat" => Ok(Self::Flat),
            "per_unit" | "perunit" => Ok(Self::PerUnit),
            _ => Err(ParseEnumError::InvalidValue("PricingMode", s.to_string())),
        }
    }
}

/// How an agent commission rule expresses its rate.
///
/// # Examples
///
/// ```
/// use rate_engine::domain::value_objects::enums::CommissionType;
///
/// assert_eq!(CommissionType::Percent.to_string(), "percent");
/// assert_eq!("flat".parse::<CommissionType>(), Ok(CommissionType::Flat));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CommissionType {
    /// A percentage applied to the computed price.
    Percent = 0,
    /// A fixed amount independent of the price.
    Flat = 1,
}

impl CommissionType {
    /// Returns the lowercase storage representation.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Percent => "percent",
            Self::Flat => "flat",
        }
    }
}

impl fmt::Display for CommissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CommissionType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "percent" => Ok(Self::Percent),
            "flat" => Ok(Self::Flat),
            _ => Err(ParseEnumError::InvalidValue(
                "CommissionType",
                s.to_string(),
            )),
        }
    }
}

/// Lifecycle state of a transport booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BookingStatus {
    /// Created, awaiting confirmation.
    Pending = 0,
    /// Confirmed by the operator.
    Confirmed = 1,
    /// Cancelled.
    Cancelled = 2,
}

impl BookingStatus {
    /// Returns the lowercase storage representation.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseEnumError::InvalidValue("BookingStatus", s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod service_type {
        use super::*;

        #[test]
        fn display_is_lowercase() {
            assert_eq!(ServiceType::Transport.to_string(), "transport");
            assert_eq!(ServiceType::Hotel.to_string(), "hotel");
            assert_eq!(ServiceType::Flight.to_string(), "flight");
        }

        #[test]
        fn from_str_is_case_insensitive() {
            assert_eq!(
                "Transport".parse::<ServiceType>(),
                Ok(ServiceType::Transport)
            );
            assert_eq!("FLIGHT".parse::<ServiceType>(), Ok(ServiceType::Flight));
        }

        #[test]
        fn from_str_rejects_unknown() {
            let err = "cruise".parse::<ServiceType>().unwrap_err();
            assert_eq!(err.to_string(), "invalid ServiceType: cruise");
        }

        #[test]
        fn serde_round_trip() {
            let json = serde_json::to_string(&ServiceType::Hotel).unwrap();
            assert_eq!(json, "\"hotel\"");
            let back: ServiceType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, ServiceType::Hotel);
        }
    }

    mod pricing_mode {
        use super::*;

        #[test]
        fn predicates() {
            assert!(PricingMode::Flat.is_flat());
            assert!(!PricingMode::Flat.is_per_unit());
            assert!(PricingMode::PerUnit.is_per_unit());
        }

        #[test]
        fn from_str_accepts_variants() {
            assert_eq!("per_unit".parse::<PricingMode>(), Ok(PricingMode::PerUnit));
            assert_eq!("per-unit".parse::<PricingMode>(), Ok(PricingMode::PerUnit));
            assert_eq!("perUnit".parse::<PricingMode>(), Ok(PricingMode::PerUnit));
            assert_eq!("flat".parse::<PricingMode>(), Ok(PricingMode::Flat));
        }

        #[test]
        fn serde_uses_snake_case() {
            let json = serde_json::to_string(&PricingMode::PerUnit).unwrap();
            assert_eq!(json, "\"per_unit\"");
        }
    }

    mod commission_type {
        use super::*;

        #[test]
        fn round_trips_through_str() {
            for value in [CommissionType::Percent, CommissionType::Flat] {
                assert_eq!(value.as_str().parse::<CommissionType>(), Ok(value));
            }
        }
    }

    mod booking_status {
        use super::*;

        #[test]
        fn round_trips_through_str() {
            for value in [
                BookingStatus::Pending,
                BookingStatus::Confirmed,
                BookingStatus::Cancelled,
            ] {
                assert_eq!(value.as_str().parse::<BookingStatus>(), Ok(value));
            }
        }
    }
}
