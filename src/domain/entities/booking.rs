//! # Booking Entity
//!
//! A transport booking created through the agent API.
//!
//! The booking stores the price quoted at creation time together with the
//! commission resolved for the creating agent, so later rate changes
//! never alter what was agreed.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{AgentId, BookingId, BookingStatus, Money, Percent};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A transport booking with its locked-in price and commission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    id: BookingId,
    agent_id: AgentId,
    vehicle_type: String,
    pickup_location: String,
    dropoff_location: String,
    travel_date: Option<NaiveDate>,
    distance_km: Decimal,
    price: Money,
    commission_amount: Money,
    commission_percent: Percent,
    status: BookingStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a pending booking with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` for empty route fields and
    /// `DomainError::NotPositive` for a non-positive distance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        agent_id: AgentId,
        vehicle_type: impl Into<String>,
        pickup_location: impl Into<String>,
        dropoff_location: impl Into<String>,
        travel_date: Option<NaiveDate>,
        distance_km: Decimal,
        price: Money,
        commission_amount: Money,
        commission_percent: Percent,
    ) -> DomainResult<Self> {
        let now = Utc::now();
        Self::from_parts(
            BookingId::new(),
            agent_id,
            vehicle_type.into(),
            pickup_location.into(),
            dropoff_location.into(),
            travel_date,
            distance_km,
            price,
            commission_amount,
            commission_percent,
            BookingStatus::Pending,
            now,
            now,
        )
    }

    /// Reconstructs a booking from stored fields.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` for empty route fields and
    /// `DomainError::NotPositive` for a non-positive distance.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: BookingId,
        agent_id: AgentId,
        vehicle_type: String,
        pickup_location: String,
        dropoff_location: String,
        travel_date: Option<NaiveDate>,
        distance_km: Decimal,
        price: Money,
        commission_amount: Money,
        commission_percent: Percent,
        status: BookingStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if vehicle_type.trim().is_empty() {
            return Err(DomainError::missing("vehicle_type"));
        }
        if pickup_location.trim().is_empty() {
            return Err(DomainError::missing("pickup_location"));
        }
        if dropoff_location.trim().is_empty() {
            return Err(DomainError::missing("dropoff_location"));
        }
        if distance_km <= Decimal::ZERO {
            return Err(DomainError::not_positive("distance_km"));
        }
        Ok(Self {
            id,
            agent_id,
            vehicle_type,
            pickup_location,
            dropoff_location,
            travel_date,
            distance_km,
            price,
            commission_amount,
            commission_percent,
            status,
            created_at,
            updated_at,
        })
    }

    /// Returns the booking identifier.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> BookingId {
        self.id
    }

    /// Returns the creating agent.
    #[inline]
    #[must_use]
    pub const fn agent_id(&self) -> AgentId {
        self.agent_id
    }

    /// Returns the booked vehicle type.
    #[inline]
    #[must_use]
    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    /// Returns the pickup location.
    #[inline]
    #[must_use]
    pub fn pickup_location(&self) -> &str {
        &self.pickup_location
    }

    /// Returns the dropoff location.
    #[inline]
    #[must_use]
    pub fn dropoff_location(&self) -> &str {
        &self.dropoff_location
    }

    /// Returns the travel date, when one was given.
    #[inline]
    #[must_use]
    pub const fn travel_date(&self) -> Option<NaiveDate> {
        self.travel_date
    }

    /// Returns the route distance in km.
    #[inline]
    #[must_use]
    pub const fn distance_km(&self) -> Decimal {
        self.distance_km
    }

    /// Returns the locked-in customer price.
    #[inline]
    #[must_use]
    pub const fn price(&self) -> Money {
        self.price
    }

    /// Returns the resolved commission amount.
    #[inline]
    #[must_use]
    pub const fn commission_amount(&self) -> Money {
        self.commission_amount
    }

    /// Returns the commission as a percentage of the price.
    #[inline]
    #[must_use]
    pub const fn commission_percent(&self) -> Percent {
        self.commission_percent
    }

    /// Returns the booking status.
    #[inline]
    #[must_use]
    pub const fn status(&self) -> BookingStatus {
        self.status
    }

    /// Creation timestamp.
    #[inline]
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last update timestamp.
    #[inline]
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "booking {} [{}] {} -> {} at {}",
            self.id, self.status, self.pickup_location, self.dropoff_location, self.price
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn money(value: i64) -> Money {
        Money::new(Decimal::new(value, 0)).unwrap()
    }

    fn sample() -> DomainResult<Booking> {
        Booking::new(
            AgentId::new(),
            "sedan",
            "Airport",
            "Marina",
            None,
            Decimal::new(50, 0),
            money(125),
            money(10),
            Percent::new(Decimal::new(8, 0)).unwrap(),
        )
    }

    #[test]
    fn new_booking_starts_pending() {
        let booking = sample().unwrap();
        assert_eq!(booking.status(), BookingStatus::Pending);
        assert_eq!(booking.price(), money(125));
    }

    #[test]
    fn rejects_empty_route_fields() {
        let err = Booking::new(
            AgentId::new(),
            "sedan",
            " ",
            "Marina",
            None,
            Decimal::new(50, 0),
            money(125),
            money(10),
            Percent::ZERO,
        )
        .unwrap_err();
        assert_eq!(err, DomainError::missing("pickup_location"));
    }

    #[test]
    fn rejects_non_positive_distance() {
        let err = Booking::new(
            AgentId::new(),
            "sedan",
            "Airport",
            "Marina",
            None,
            Decimal::ZERO,
            money(125),
            money(10),
            Percent::ZERO,
        )
        .unwrap_err();
        assert_eq!(err, DomainError::not_positive("distance_km"));
    }
}
