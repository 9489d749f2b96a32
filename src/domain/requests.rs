//! # Quote Requests
//!
//! Validated request types for the three quote flows and the agent
//! booking flow.
//!
//! Constructors take the raw optional fields as they arrive on the wire
//! and enforce the validation preconditions: required identifying fields
//! must be present and non-empty, numeric quantities strictly positive.
//! A violation is a client-input error and short-circuits before any rule
//! lookup happens. Field names in error messages match the wire names.
//!
//! # Examples
//!
//! ```
//! use rate_engine::domain::requests::{PercentOverrides, TransportQuoteRequest};
//! use rust_decimal::Decimal;
//!
//! let request = TransportQuoteRequest::new(
//!     Some("gmc".into()),
//!     Some(Decimal::new(100, 0)),
//!     PercentOverrides::none(),
//! )?;
//! assert_eq!(request.vehicle_type(), "gmc");
//!
//! let missing = TransportQuoteRequest::new(None, Some(Decimal::ONE), PercentOverrides::none());
//! assert_eq!(missing.unwrap_err().to_string(), "vehicle_type is required");
//! # Ok::<(), rate_engine::domain::errors::DomainError>(())
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{Money, Percent};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Optional percentage overrides carried by every quote request.
///
/// A present override beats the matched rule's percentage; when neither
/// is present the percentage defaults to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PercentOverrides {
    agent_commission_percent: Option<Percent>,
    profit_percent: Option<Percent>,
}

impl PercentOverrides {
    /// No overrides; rule percentages (or zero) apply.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            agent_commission_percent: None,
            profit_percent: None,
        }
    }

    /// Validates raw override values.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPercent` if either value is negative.
    pub fn new(
        agent_commission_percent: Option<Decimal>,
        profit_percent: Option<Decimal>,
    ) -> DomainResult<Self> {
        Ok(Self {
            agent_commission_percent: agent_commission_percent.map(Percent::new).transpose()?,
            profit_percent: profit_percent.map(Percent::new).transpose()?,
        })
    }

    /// Commission override, when supplied.
    #[inline]
    #[must_use]
    pub const fn agent_commission_percent(&self) -> Option<Percent> {
        self.agent_commission_percent
    }

    /// Profit override, when supplied.
    #[inline]
    #[must_use]
    pub const fn profit_percent(&self) -> Option<Percent> {
        self.profit_percent
    }
}

/// Common surface of the three quote request types.
pub trait QuoteInput {
    /// The percentage overrides carried by the request.
    fn overrides(&self) -> &PercentOverrides;
}

/// A validated transport quote request.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportQuoteRequest {
    vehicle_type: String,
    distance_km: Decimal,
    overrides: PercentOverrides,
}

impl TransportQuoteRequest {
    /// Validates the raw request fields.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` or `DomainError::NotPositive`
    /// when a precondition fails.
    pub fn new(
        vehicle_type: Option<String>,
        distance_km: Option<Decimal>,
        overrides: PercentOverrides,
    ) -> DomainResult<Self> {
        let vehicle_type = required_text(vehicle_type, "vehicle_type")?;
        let distance_km = distance_km.ok_or(DomainError::missing("distance_km"))?;
        if distance_km <= Decimal::ZERO {
            return Err(DomainError::not_positive("distance_km"));
        }
        Ok(Self {
            vehicle_type,
            distance_km,
            overrides,
        })
    }

    /// Returns the requested vehicle type.
    #[inline]
    #[must_use]
    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    /// Returns the route distance in km.
    #[inline]
    #[must_use]
    pub const fn distance_km(&self) -> Decimal {
        self.distance_km
    }
}

impl QuoteInput for TransportQuoteRequest {
    fn overrides(&self) -> &PercentOverrides {
        &self.overrides
    }
}

/// A validated hotel quote request.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelQuoteRequest {
    city: String,
    star_rating: Option<i16>,
    room_type: String,
    nights: i32,
    base_per_night_manual: Option<Money>,
    overrides: PercentOverrides,
}

impl HotelQuoteRequest {
    /// Validates the raw request fields.
    ///
    /// A manual per-night value is kept only when strictly positive;
    /// zero or negative values are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` or `DomainError::NotPositive`
    /// when a precondition fails.
    pub fn new(
        city: Option<String>,
        star_rating: Option<i16>,
        room_type: Option<String>,
        nights: Option<i32>,
        base_per_night_manual: Option<Decimal>,
        overrides: PercentOverrides,
    ) -> DomainResult<Self> {
        let city = required_text(city, "city")?;
        let room_type = required_text(room_type, "room_type")?;
        let nights = nights.ok_or(DomainError::missing("nights"))?;
        if nights <= 0 {
            return Err(DomainError::not_positive("nights"));
        }
        let base_per_night_manual = base_per_night_manual
            .filter(|value| *value > Decimal::ZERO)
            .map(Money::new)
            .transpose()?;
        Ok(Self {
            city,
            star_rating,
            room_type,
            nights,
            base_per_night_manual,
            overrides,
        })
    }

    /// Returns the requested city.
    #[inline]
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the requested star rating, when supplied.
    #[inline]
    #[must_use]
    pub const fn star_rating(&self) -> Option<i16> {
        self.star_rating
    }

    /// Returns the requested room type.
    #[inline]
    #[must_use]
    pub fn room_type(&self) -> &str {
        &self.room_type
    }

    /// Returns the number of nights.
    #[inline]
    #[must_use]
    pub const fn nights(&self) -> i32 {
        self.nights
    }

    /// Returns the manual per-night override, when a positive one was
    /// supplied.
    #[inline]
    #[must_use]
    pub const fn base_per_night_manual(&self) -> Option<Money> {
        self.base_per_night_manual
    }
}

impl QuoteInput for HotelQuoteRequest {
    fn overrides(&self) -> &PercentOverrides {
        &self.overrides
    }
}

/// A validated flight quote request.
///
/// The manual base fare is mandatory: flight rules only ever contribute
/// commission and profit percentages.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightQuoteRequest {
    origin: String,
    destination: String,
    cabin_class: String,
    airline_code: Option<String>,
    base_fare_manual: Money,
    overrides: PercentOverrides,
}

impl FlightQuoteRequest {
    /// Validates the raw request fields.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` or `DomainError::NotPositive`
    /// when a precondition fails.
    pub fn new(
        origin: Option<String>,
        destination: Option<String>,
        cabin_class: Option<String>,
        airline_code: Option<String>,
        base_fare_manual: Option<Decimal>,
        overrides: PercentOverrides,
    ) -> DomainResult<Self> {
        let origin = required_text(origin, "from")?;
        let destination = required_text(destination, "to")?;
        let cabin_class = required_text(cabin_class, "cabin_class")?;
        let base_fare_manual =
            base_fare_manual.ok_or(DomainError::missing("base_fare_manual"))?;
        if base_fare_manual <= Decimal::ZERO {
            return Err(DomainError::not_positive("base_fare_manual"));
        }
        Ok(Self {
            origin,
            destination,
            cabin_class,
            airline_code: optional_text(airline_code),
            base_fare_manual: Money::new(base_fare_manual)?,
            overrides,
        })
    }

    /// Returns the origin airport or city.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the destination airport or city.
    #[inline]
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the cabin class.
    #[inline]
    #[must_use]
    pub fn cabin_class(&self) -> &str {
        &self.cabin_class
    }

    /// Returns the airline code, when supplied.
    #[inline]
    #[must_use]
    pub fn airline_code(&self) -> Option<&str> {
        self.airline_code.as_deref()
    }

    /// Returns the manually supplied base fare.
    #[inline]
    #[must_use]
    pub const fn base_fare_manual(&self) -> Money {
        self.base_fare_manual
    }
}

impl QuoteInput for FlightQuoteRequest {
    fn overrides(&self) -> &PercentOverrides {
        &self.overrides
    }
}

/// A validated agent booking request for transport.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportBookingRequest {
    vehicle_type: String,
    distance_km: Decimal,
    pickup_location: String,
    dropoff_location: String,
    travel_date: Option<NaiveDate>,
}

impl TransportBookingRequest {
    /// Validates the raw request fields.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` or `DomainError::NotPositive`
    /// when a precondition fails.
    pub fn new(
        vehicle_type: Option<String>,
        distance_km: Option<Decimal>,
        pickup_location: Option<String>,
        dropoff_location: Option<String>,
        travel_date: Option<NaiveDate>,
    ) -> DomainResult<Self> {
        let vehicle_type = required_text(vehicle_type, "vehicle_type")?;
        let pickup_location = required_text(pickup_location, "pickup_location")?;
        let dropoff_location = required_text(dropoff_location, "dropoff_location")?;
        let distance_km = distance_km.ok_or(DomainError::missing("distance_km"))?;
        if distance_km <= Decimal::ZERO {
            return Err(DomainError::not_positive("distance_km"));
        }
        Ok(Self {
            vehicle_type,
            distance_km,
            pickup_location,
            dropoff_location,
            travel_date,
        })
    }

    /// Returns the booked vehicle type.
    #[inline]
    #[must_use]
    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    /// Returns the route distance in km.
    #[inline]
    #[must_use]
    pub const fn distance_km(&self) -> Decimal {
        self.distance_km
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

    /// Derives the quote request used to price this booking.
    ///
    /// Bookings never carry percentage overrides; the matched rule's
    /// percentages (or zero) apply.
    #[must_use]
    pub fn quote_request(&self) -> TransportQuoteRequest {
        TransportQuoteRequest {
            vehicle_type: self.vehicle_type.clone(),
            distance_km: self.distance_km,
            overrides: PercentOverrides::none(),
        }
    }
}

fn required_text(value: Option<String>, field: &'static str) -> DomainResult<String> {
    match value {
        Some(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Err(DomainError::missing(field))
            } else {
                Ok(trimmed.to_owned())
            }
        }
        None => Err(DomainError::missing(field)),
    }
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod transport {
        use super::*;

        #[test]
        fn accepts_valid_request() {
            let request = TransportQuoteRequest::new(
                Some("sedan".into()),
                Some(Decimal::new(50, 0)),
                PercentOverrides::none(),
            )
            .unwrap();
            assert_eq!(request.vehicle_type(), "sedan");
            assert_eq!(request.distance_km(), Decimal::new(50, 0));
        }

        #[test]
        fn requires_vehicle_type() {
            let err = TransportQuoteRequest::new(
                Some("  ".into()),
                Some(Decimal::ONE),
                PercentOverrides::none(),
            )
            .unwrap_err();
            assert_eq!(err, DomainError::missing("vehicle_type"));
        }

        #[test]
        fn requires_positive_distance() {
            let err = TransportQuoteRequest::new(
                Some("sedan".into()),
                Some(Decimal::ZERO),
                PercentOverrides::none(),
            )
            .unwrap_err();
            assert_eq!(err, DomainError::not_positive("distance_km"));
        }

        #[test]
        fn requires_distance_presence() {
            let err =
                TransportQuoteRequest::new(Some("sedan".into()), None, PercentOverrides::none())
                    .unwrap_err();
            assert_eq!(err, DomainError::missing("distance_km"));
        }
    }

    mod hotel {
        use super::*;

        fn valid() -> DomainResult<HotelQuoteRequest> {
            HotelQuoteRequest::new(
                Some("Dubai".into()),
                Some(5),
                Some("double".into()),
                Some(3),
                None,
                PercentOverrides::none(),
            )
        }

        #[test]
        fn accepts_valid_request() {
            let request = valid().unwrap();
            assert_eq!(request.city(), "Dubai");
            assert_eq!(request.nights(), 3);
            assert_eq!(request.star_rating(), Some(5));
        }

        #[test]
        fn requires_city_room_type_and_nights() {
            let err = HotelQuoteRequest::new(
                None,
                None,
                Some("double".into()),
                Some(3),
                None,
                PercentOverrides::none(),
            )
            .unwrap_err();
            assert_eq!(err, DomainError::missing("city"));

            let err = HotelQuoteRequest::new(
                Some("Dubai".into()),
                None,
                Some("double".into()),
                Some(0),
                None,
                PercentOverrides::none(),
            )
            .unwrap_err();
            assert_eq!(err, DomainError::not_positive("nights"));
        }

        #[test]
        fn non_positive_manual_rate_is_ignored() {
            let request = HotelQuoteRequest::new(
                Some("Dubai".into()),
                None,
                Some("double".into()),
                Some(2),
                Some(Decimal::new(-350, 0)),
                PercentOverrides::none(),
            )
            .unwrap();
            assert!(request.base_per_night_manual().is_none());

            let request = HotelQuoteRequest::new(
                Some("Dubai".into()),
                None,
                Some("double".into()),
                Some(2),
                Some(Decimal::new(350, 0)),
                PercentOverrides::none(),
            )
            .unwrap();
            assert_eq!(
                request.base_per_night_manual().unwrap().amount(),
                Decimal::new(350, 0)
            );
        }
    }

    mod flight {
        use super::*;

        #[test]
        fn error_fields_use_wire_names() {
            let err = FlightQuoteRequest::new(
                None,
                Some("LHR".into()),
                Some("economy".into()),
                None,
                Some(Decimal::new(400, 0)),
                PercentOverrides::none(),
            )
            .unwrap_err();
            assert_eq!(err.to_string(), "from is required");
        }

        #[test]
        fn manual_fare_is_mandatory() {
            let err = FlightQuoteRequest::new(
                Some("DXB".into()),
                Some("LHR".into()),
                Some("economy".into()),
                None,
                None,
                PercentOverrides::none(),
            )
            .unwrap_err();
            assert_eq!(err, DomainError::missing("base_fare_manual"));
        }

        #[test]
        fn manual_fare_must_be_positive() {
            let err = FlightQuoteRequest::new(
                Some("DXB".into()),
                Some("LHR".into()),
                Some("economy".into()),
                None,
                Some(Decimal::new(-400, 0)),
                PercentOverrides::none(),
            )
            .unwrap_err();
            assert_eq!(err, DomainError::not_positive("base_fare_manual"));
        }

        #[test]
        fn empty_airline_code_is_absent() {
            let request = FlightQuoteRequest::new(
                Some("DXB".into()),
                Some("LHR".into()),
                Some("economy".into()),
                Some("".into()),
                Some(Decimal::new(400, 0)),
                PercentOverrides::none(),
            )
            .unwrap();
            assert!(request.airline_code().is_none());
        }
    }

    mod overrides {
        use super::*;

        #[test]
        fn rejects_negative_values() {
            let err =
                PercentOverrides::new(Some(Decimal::new(-5, 0)), None).unwrap_err();
            assert!(matches!(err, DomainError::InvalidPercent(_)));
        }

        #[test]
        fn none_has_no_values() {
            let overrides = PercentOverrides::none();
            assert!(overrides.agent_commission_percent().is_none());
            assert!(overrides.profit_percent().is_none());
        }
    }

    mod booking {
        use super::*;

        #[test]
        fn derives_quote_request_without_overrides() {
            let request = TransportBookingRequest::new(
                Some("gmc".into()),
                Some(Decimal::new(100, 0)),
                Some("Airport".into()),
                Some("Palm".into()),
                None,
            )
            .unwrap();
            let quote_request = request.quote_request();
            assert_eq!(quote_request.vehicle_type(), "gmc");
            assert!(quote_request.overrides().agent_commission_percent().is_none());
        }

        #[test]
        fn requires_route_fields() {
            let err = TransportBookingRequest::new(
                Some("gmc".into()),
                Some(Decimal::new(100, 0)),
                None,
                Some("Palm".into()),
                None,
            )
            .unwrap_err();
            assert_eq!(err, DomainError::missing("pickup_location"));
        }
    }
}
