//! # Product Quoters
//!
//! Per-product adapters for the generic quote flow.
//!
//! Each adapter supplies its service type, the structural match
//! predicate evaluated against a pricing rule, and the base fare
//! derivation. Everything else (rule selection, percentage layering,
//! auditing) is shared by [`QuoteService`].
//!
//! - [`TransportQuoter`]: flat or per-km rule fares with a configurable
//!   per-vehicle fallback table
//! - [`HotelQuoter`]: per-night resolution with manual-override
//!   precedence
//! - [`FlightQuoter`]: manually supplied base fares; rules contribute
//!   percentages only
//!
//! [`QuoteService`]: crate::application::services::quote_service::QuoteService

use crate::application::services::rule_selector::{matches_exact, matches_text, within_range};
use crate::domain::entities::{BaseFare, PricingRule};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::requests::{
    FlightQuoteRequest, HotelQuoteRequest, QuoteInput, TransportQuoteRequest,
};
use crate::domain::value_objects::{Money, PricingMode, ServiceType};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fmt;

/// A product-specific adapter for the quote flow.
pub trait ProductQuoter: Send + Sync + fmt::Debug {
    /// The validated request type this quoter prices.
    type Request: QuoteInput + Send + Sync;

    /// The service type whose rules this quoter consumes.
    fn service_type(&self) -> ServiceType;

    /// Whether all of a rule's structural criteria pass for the request.
    fn matches(&self, rule: &PricingRule, request: &Self::Request) -> bool;

    /// Derives the base fare from the selected rule (if any) and request.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NoPriceAvailable` when no usable base rate
    /// resolves, or `DomainError::Arithmetic` on fare overflow.
    fn base_fare(
        &self,
        rule: Option<&PricingRule>,
        request: &Self::Request,
    ) -> DomainResult<BaseFare>;
}

/// Per-vehicle default rates used when no rule prices a transport
/// request.
///
/// Lookups are case-insensitive; unknown vehicle types fall back to the
/// standard rate.
#[derive(Debug, Clone)]
pub struct FallbackRateTable {
    rates: HashMap<String, Decimal>,
    standard: Decimal,
}

impl Default for FallbackRateTable {
    fn default() -> Self {
        let rates = HashMap::from([
            ("sedan".to_owned(), Decimal::new(25, 1)),
            ("hiace".to_owned(), Decimal::new(30, 1)),
            ("coaster".to_owned(), Decimal::new(375, 2)),
            ("gmc".to_owned(), Decimal::new(40, 1)),
        ]);
        Self {
            rates,
            standard: Decimal::new(30, 1),
        }
    }
}

impl FallbackRateTable {
    /// Creates a table from configured per-vehicle rates and a standard
    /// rate for unknown vehicle types.
    #[must_use]
    pub fn new(rates: HashMap<String, Decimal>, standard: Decimal) -> Self {
        let rates = rates
            .into_iter()
            .map(|(vehicle, rate)| (vehicle.to_lowercase(), rate))
            .collect();
        Self { rates, standard }
    }

    /// Returns the per-km rate for a vehicle type.
    #[must_use]
    pub fn rate_for(&self, vehicle_type: &str) -> Decimal {
        self.rates
            .get(&vehicle_type.to_lowercase())
            .copied()
            .unwrap_or(self.standard)
    }

    /// The rate applied to unknown vehicle types.
    #[inline]
    #[must_use]
    pub const fn standard(&self) -> Decimal {
        self.standard
    }
}

/// Quoter for transport requests.
#[derive(Debug, Clone)]
pub struct TransportQuoter {
    fallback: FallbackRateTable,
}

impl TransportQuoter {
    /// Creates a transport quoter with the given fallback rates.
    #[must_use]
    pub fn new(fallback: FallbackRateTable) -> Self {
        Self { fallback }
    }
}

impl Default for TransportQuoter {
    fn default() -> Self {
        Self::new(FallbackRateTable::default())
    }
}

impl ProductQuoter for TransportQuoter {
    type Request = TransportQuoteRequest;

    fn service_type(&self) -> ServiceType {
        ServiceType::Transport
    }

    fn matches(&self, rule: &PricingRule, request: &Self::Request) -> bool {
        matches_text(rule.vehicle_type(), Some(request.vehicle_type()))
            && within_range(
                rule.min_distance_km(),
                rule.max_distance_km(),
                request.distance_km(),
            )
    }

    fn base_fare(
        &self,
        rule: Option<&PricingRule>,
        request: &Self::Request,
    ) -> DomainResult<BaseFare> {
        let derived = match rule {
            Some(rule) => rule_transport_fare(rule, request.distance_km())?,
            None => None,
        };
        // A matched rule with a missing or non-positive fare still falls
        // back to the default table; its id and percentages are kept.
        match derived.filter(Money::is_positive) {
            Some(amount) => Ok(BaseFare::flat(amount)),
            None => {
                let rate = Money::new(self.fallback.rate_for(request.vehicle_type()))?;
                Ok(BaseFare::flat(rate.safe_mul(request.distance_km())?))
            }
        }
    }
}

fn rule_transport_fare(rule: &PricingRule, distance_km: Decimal) -> DomainResult<Option<Money>> {
    match rule.pricing_mode() {
        PricingMode::Flat => Ok(rule.base_flat()),
        PricingMode::PerUnit => rule
            .base_per_unit()
            .map(|rate| rate.safe_mul(distance_km))
            .transpose(),
    }
}

/// Quoter for hotel requests.
#[derive(Debug, Clone, Default)]
pub struct HotelQuoter;

impl HotelQuoter {
    /// Creates a hotel quoter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ProductQuoter for HotelQuoter {
    type Request = HotelQuoteRequest;

    fn service_type(&self) -> ServiceType {
        ServiceType::Hotel
    }

    fn matches(&self, rule: &PricingRule, request: &Self::Request) -> bool {
        matches_text(rule.city(), Some(request.city()))
            && matches_exact(rule.star_rating(), request.star_rating())
            && matches_text(rule.room_type(), Some(request.room_type()))
            && within_range(rule.min_nights(), rule.max_nights(), request.nights())
    }

    fn base_fare(
        &self,
        rule: Option<&PricingRule>,
        request: &Self::Request,
    ) -> DomainResult<BaseFare> {
        let per_night = request
            .base_per_night_manual()
            .or_else(|| rule.and_then(rule_per_night))
            .ok_or(DomainError::NoPriceAvailable)?;
        let amount = per_night.safe_mul(Decimal::from(request.nights()))?;
        Ok(BaseFare::per_unit(amount, per_night))
    }
}

fn rule_per_night(rule: &PricingRule) -> Option<Money> {
    rule.base_per_unit()
        .filter(Money::is_positive)
        .or_else(|| rule.base_flat().filter(Money::is_positive))
}

/// Quoter for flight requests.
#[derive(Debug, Clone, Default)]
pub struct FlightQuoter;

impl FlightQuoter {
    /// Creates a flight quoter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ProductQuoter for FlightQuoter {
    type Request = FlightQuoteRequest;

    fn service_type(&self) -> ServiceType {
        ServiceType::Flight
    }

    fn matches(&self, rule: &PricingRule, request: &Self::Request) -> bool {
        matches_text(rule.origin(), Some(request.origin()))
            && matches_text(rule.destination(), Some(request.destination()))
            && matches_text(rule.cabin_class(), Some(request.cabin_class()))
            && matches_text(rule.airline_code(), request.airline_code())
    }

    fn base_fare(
        &self,
        _rule: Option<&PricingRule>,
        request: &Self::Request,
    ) -> DomainResult<BaseFare> {
        Ok(BaseFare::flat(request.base_fare_manual()))
    }
}
