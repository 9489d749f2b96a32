//! # Pricing Rule Entity
//!
//! A pricing rule describes when it applies (match criteria, range
//! constraints, validity window) and what it contributes (base fare
//! derivation plus commission and profit percentages).
//!
//! Rules are read-only inputs to the resolver: it never mutates them.
//! Match criteria left unset act as wildcards; range bounds are inclusive
//! on both ends.
//!
//! The per-unit rate lives in its own field for every product: per km for
//! transport, per night for hotels. Legacy data that stored the nightly
//! rate in the flat-amount column keeps working because the hotel fare
//! derivation falls back to `base_flat` when `base_per_unit` is unset.
//!
//! # Examples
//!
//! ```
//! use rate_engine::domain::entities::PricingRule;
//! use rate_engine::domain::value_objects::{PricingMode, ServiceType};
//! use rust_decimal::Decimal;
//!
//! let rule = PricingRule::builder(ServiceType::Transport, 1)
//!     .vehicle_type("gmc")
//!     .pricing_mode(PricingMode::PerUnit)
//!     .base_per_unit(Decimal::new(4, 0))
//!     .agent_commission_percent(Decimal::new(10, 0))
//!     .profit_percent(Decimal::new(15, 0))
//!     .build()?;
//!
//! assert!(rule.active());
//! assert_eq!(rule.priority(), 1);
//! # Ok::<(), rate_engine::domain::errors::DomainError>(())
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{Money, Percent, PricingMode, RuleId, ServiceType};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rule matched against quote requests to derive fares and percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRule {
    id: RuleId,
    service_type: ServiceType,
    active: bool,
    priority: i32,
    vehicle_type: Option<String>,
    city: Option<String>,
    star_rating: Option<i16>,
    room_type: Option<String>,
    origin: Option<String>,
    destination: Option<String>,
    cabin_class: Option<String>,
    airline_code: Option<String>,
    min_distance_km: Option<Decimal>,
    max_distance_km: Option<Decimal>,
    min_nights: Option<i32>,
    max_nights: Option<i32>,
    pricing_mode: PricingMode,
    base_flat: Option<Money>,
    base_per_unit: Option<Money>,
    agent_commission_percent: Option<Percent>,
    profit_percent: Option<Percent>,
    valid_from: Option<NaiveDate>,
    valid_to: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PricingRule {
    /// Starts building a rule for a service type at the given priority.
    ///
    /// Lower priority values are evaluated first.
    #[must_use]
    pub fn builder(service_type: ServiceType, priority: i32) -> PricingRuleBuilder {
        PricingRuleBuilder::new(service_type, priority)
    }

    /// Returns the rule identifier.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> RuleId {
        self.id
    }

    /// Returns the service type this rule applies to.
    #[inline]
    #[must_use]
    pub const fn service_type(&self) -> ServiceType {
        self.service_type
    }

    /// Returns true if the rule is active.
    #[inline]
    #[must_use]
    pub const fn active(&self) -> bool {
        self.active
    }

    /// Returns the evaluation priority; lower wins.
    #[inline]
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// Vehicle type criterion (transport); `None` matches anything.
    #[inline]
    #[must_use]
    pub fn vehicle_type(&self) -> Option<&str> {
        self.vehicle_type.as_deref()
    }

    /// City criterion (hotel); `None` matches anything.
    #[inline]
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Star rating criterion (hotel); `None` matches anything.
    #[inline]
    #[must_use]
    pub const fn star_rating(&self) -> Option<i16> {
        self.star_rating
    }

    /// Room type criterion (hotel); `None` matches anything.
    #[inline]
    #[must_use]
    pub fn room_type(&self) -> Option<&str> {
        self.room_type.as_deref()
    }

    /// Origin criterion (flight); `None` matches anything.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Destination criterion (flight); `None` matches anything.
    #[inline]
    #[must_use]
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    /// Cabin class criterion (flight); `None` matches anything.
    #[inline]
    #[must_use]
    pub fn cabin_class(&self) -> Option<&str> {
        self.cabin_class.as_deref()
    }

    /// Airline code criterion (flight); `None` matches anything.
    #[inline]
    #[must_use]
    pub fn airline_code(&self) -> Option<&str> {
        self.airline_code.as_deref()
    }

    /// Lower distance bound in km, inclusive; `None` is open.
    #[inline]
    #[must_use]
    pub const fn min_distance_km(&self) -> Option<Decimal> {
        self.min_distance_km
    }

    /// Upper distance bound in km, inclusive; `None` is open.
    #[inline]
    #[must_use]
    pub const fn max_distance_km(&self) -> Option<Decimal> {
        self.max_distance_km
    }

    /// Lower nights bound, inclusive; `None` is open.
    #[inline]
    #[must_use]
    pub const fn min_nights(&self) -> Option<i32> {
        self.min_nights
    }

    /// Upper nights bound, inclusive; `None` is open.
    #[inline]
    #[must_use]
    pub const fn max_nights(&self) -> Option<i32> {
        self.max_nights
    }

    /// Returns how the base fare is derived.
    #[inline]
    #[must_use]
    pub const fn pricing_mode(&self) -> PricingMode {
        self.pricing_mode
    }

    /// Flat base amount, when set.
    #[inline]
    #[must_use]
    pub const fn base_flat(&self) -> Option<Money> {
        self.base_flat
    }

    /// Per-unit rate (per km or per night), when set.
    #[inline]
    #[must_use]
    pub const fn base_per_unit(&self) -> Option<Money> {
        self.base_per_unit
    }

    /// Agent commission percentage contributed by this rule.
    #[inline]
    #[must_use]
    pub const fn agent_commission_percent(&self) -> Option<Percent> {
        self.agent_commission_percent
    }

    /// Profit percentage contributed by this rule.
    #[inline]
    #[must_use]
    pub const fn profit_percent(&self) -> Option<Percent> {
        self.profit_percent
    }

    /// First day the rule is in effect; `None` is open.
    #[inline]
    #[must_use]
    pub const fn valid_from(&self) -> Option<NaiveDate> {
        self.valid_from
    }

    /// Last day the rule is in effect, inclusive; `None` is open.
    #[inline]
    #[must_use]
    pub const fn valid_to(&self) -> Option<NaiveDate> {
        self.valid_to
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

    /// Returns true if the validity window covers the given day.
    ///
    /// Both bounds are inclusive; an unset bound is open.
    #[must_use]
    pub fn is_in_effect(&self, on: NaiveDate) -> bool {
        self.valid_from.is_none_or(|from| from <= on)
            && self.valid_to.is_none_or(|to| on <= to)
    }
}

impl fmt::Display for PricingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rule {} [{}] priority {}",
            self.id, self.service_type, self.priority
        )
    }
}

/// Builder for [`PricingRule`].
///
/// Monetary rates and percentages are supplied as raw decimals and
/// validated in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct PricingRuleBuilder {
    id: Option<RuleId>,
    service_type: ServiceType,
    active: bool,
    priority: i32,
    vehicle_type: Option<String>,
    city: Option<String>,
    star_rating: Option<i16>,
    room_type: Option<String>,
    origin: Option<String>,
    destination: Option<String>,
    cabin_class: Option<String>,
    airline_code: Option<String>,
    min_distance_km: Option<Decimal>,
    max_distance_km: Option<Decimal>,
    min_nights: Option<i32>,
    max_nights: Option<i32>,
    pricing_mode: PricingMode,
    base_flat: Option<Decimal>,
    base_per_unit: Option<Decimal>,
    agent_commission_percent: Option<Decimal>,
    profit_percent: Option<Decimal>,
    valid_from: Option<NaiveDate>,
    valid_to: Option<NaiveDate>,
    timestamps: Option<(DateTime<Utc>, DateTime<Utc>)>,
}

impl PricingRuleBuilder {
    fn new(service_type: ServiceType, priority: i32) -> Self {
        Self {
            id: None,
            service_type,
            active: true,
            priority,
            vehicle_type: None,
            city: None,
            star_rating: None,
            room_type: None,
            origin: None,
            destination: None,
            cabin_class: None,
            airline_code: None,
            min_distance_km: None,
            max_distance_km: None,
            min_nights: None,
            max_nights: None,
            pricing_mode: PricingMode::Flat,
            base_flat: None,
            base_per_unit: None,
            agent_commission_percent: None,
            profit_percent: None,
            valid_from: None,
            valid_to: None,
            timestamps: None,
        }
    }

    /// Uses an existing identifier instead of generating one.
    #[must_use]
    pub fn id(mut self, id: RuleId) -> Self {
        self.id = Some(id);
        self
    }

    /// Marks the rule inactive.
    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Sets the active flag explicitly.
    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Sets the vehicle type criterion.
    #[must_use]
    pub fn vehicle_type(mut self, value: impl Into<String>) -> Self {
        self.vehicle_type = Some(value.into());
        self
    }

    /// Sets the city criterion.
    #[must_use]
    pub fn city(mut self, value: impl Into<String>) -> Self {
        self.city = Some(value.into());
        self
    }

    /// Sets the star rating criterion.
    #[must_use]
    pub fn star_rating(mut self, value: i16) -> Self {
        self.star_rating = Some(value);
        self
    }

    /// Sets the room type criterion.
    #[must_use]
    pub fn room_type(mut self, value: impl Into<String>) -> Self {
        self.room_type = Some(value.into());
        self
    }

    /// Sets the origin criterion.
    #[must_use]
    pub fn origin(mut self, value: impl Into<String>) -> Self {
        self.origin = Some(value.into());
        self
    }

    /// Sets the destination criterion.
    #[must_use]
    pub fn destination(mut self, value: impl Into<String>) -> Self {
        self.destination = Some(value.into());
        self
    }

    /// Sets the cabin class criterion.
    #[must_use]
    pub fn cabin_class(mut self, value: impl Into<String>) -> Self {
        self.cabin_class = Some(value.into());
        self
    }

    /// Sets the airline code criterion.
    #[must_use]
    pub fn airline_code(mut self, value: impl Into<String>) -> Self {
        self.airline_code = Some(value.into());
        self
    }

    /// Sets the lower distance bound in km.
    #[must_use]
    pub fn min_distance_km(mut self, value: Decimal) -> Self {
        self.min_distance_km = Some(value);
        self
    }

    /// Sets the upper distance bound in km.
    #[must_use]
    pub fn max_distance_km(mut self, value: Decimal) -> Self {
        self.max_distance_km = Some(value);
        self
    }

    /// Sets the lower nights bound.
    #[must_use]
    pub fn min_nights(mut self, value: i32) -> Self {
        self.min_nights = Some(value);
        self
    }

    /// Sets the upper nights bound.
    #[must_use]
    pub fn max_nights(mut self, value: i32) -> Self {
        self.max_nights = Some(value);
        self
    }

    /// Sets the fare derivation mode.
    #[must_use]
    pub fn pricing_mode(mut self, mode: PricingMode) -> Self {
        self.pricing_mode = mode;
        self
    }

    /// Sets the flat base amount.
    #[must_use]
    pub fn base_flat(mut self, amount: Decimal) -> Self {
        self.base_flat = Some(amount);
        self
    }

    /// Sets the per-unit rate (per km or per night).
    #[must_use]
    pub fn base_per_unit(mut self, rate: Decimal) -> Self {
        self.base_per_unit = Some(rate);
        self
    }

    /// Sets the agent commission percentage.
    #[must_use]
    pub fn agent_commission_percent(mut self, value: Decimal) -> Self {
        self.agent_commission_percent = Some(value);
        self
    }

    /// Sets the profit percentage.
    #[must_use]
    pub fn profit_percent(mut self, value: Decimal) -> Self {
        self.profit_percent = Some(value);
        self
    }

    /// Sets the first day the rule is in effect.
    #[must_use]
    pub fn valid_from(mut self, date: NaiveDate) -> Self {
        self.valid_from = Some(date);
        self
    }

    /// Sets the last day the rule is in effect, inclusive.
    #[must_use]
    pub fn valid_to(mut self, date: NaiveDate) -> Self {
        self.valid_to = Some(date);
        self
    }

    /// Uses stored timestamps instead of the current time.
    ///
    /// Intended for reconstructing persisted rows.
    #[must_use]
    pub fn timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.timestamps = Some((created_at, updated_at));
        self
    }

    /// Validates the accumulated fields and produces the rule.
    ///
    /// Empty or whitespace-only text criteria are normalized to unset so
    /// they behave as wildcards rather than literal match values.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRule` when a range or validity window
    /// is inverted, `DomainError::InvalidAmount` for negative rates, and
    /// `DomainError::InvalidPercent` for negative percentages.
    pub fn build(self) -> DomainResult<PricingRule> {
        if let Some((min, max)) = self.min_distance_km.zip(self.max_distance_km) {
            if min > max {
                return Err(DomainError::invalid_rule(format!(
                    "min_distance_km {min} exceeds max_distance_km {max}"
                )));
            }
        }
        if self
            .min_distance_km
            .is_some_and(|min| min.is_sign_negative())
        {
            return Err(DomainError::invalid_rule(
                "min_distance_km cannot be negative",
            ));
        }
        if let Some((min, max)) = self.min_nights.zip(self.max_nights) {
            if min > max {
                return Err(DomainError::invalid_rule(format!(
                    "min_nights {min} exceeds max_nights {max}"
                )));
            }
        }
        if self.min_nights.is_some_and(|min| min < 0) {
            return Err(DomainError::invalid_rule("min_nights cannot be negative"));
        }
        if let Some((from, to)) = self.valid_from.zip(self.valid_to) {
            if from > to {
                return Err(DomainError::invalid_rule(format!(
                    "valid_from {from} is after valid_to {to}"
                )));
            }
        }

        let (created_at, updated_at) = self.timestamps.unwrap_or_else(|| {
            let now = Utc::now();
            (now, now)
        });

        Ok(PricingRule {
            id: self.id.unwrap_or_default(),
            service_type: self.service_type,
            active: self.active,
            priority: self.priority,
            vehicle_type: normalize(self.vehicle_type),
            city: normalize(self.city),
            star_rating: self.star_rating,
            room_type: normalize(self.room_type),
            origin: normalize(self.origin),
            destination: normalize(self.destination),
            cabin_class: normalize(self.cabin_class),
            airline_code: normalize(self.airline_code),
            min_distance_km: self.min_distance_km,
            max_distance_km: self.max_distance_km,
            min_nights: self.min_nights,
            max_nights: self.max_nights,
            pricing_mode: self.pricing_mode,
            base_flat: self.base_flat.map(Money::new).transpose()?,
            base_per_unit: self.base_per_unit.map(Money::new).transpose()?,
            agent_commission_percent: self
                .agent_commission_percent
                .map(Percent::new)
                .transpose()?,
            profit_percent: self.profit_percent.map(Percent::new).transpose()?,
            valid_from: self.valid_from,
            valid_to: self.valid_to,
            created_at,
            updated_at,
        })
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
