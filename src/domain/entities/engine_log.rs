//! # Engine Log Entity
//!
//! Append-only audit record of a rate resolution attempt.
//!
//! Exactly one entry exists per resolver invocation, success or failure.
//! The entry captures the full raw request payload, the selected rule id
//! (or none), the computed fare figures (or none on failure), and the
//! error message (or none on success). The resolver never reads these
//! entries back.

use crate::domain::entities::quote::Quote;
use crate::domain::value_objects::{LogId, Money, RuleId, ServiceType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One audit row for one resolution attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineLogEntry {
    id: LogId,
    service_type: ServiceType,
    request: serde_json::Value,
    rule_id: Option<RuleId>,
    base_fare: Option<Money>,
    agent_commission: Option<Money>,
    total_price: Option<Money>,
    error: Option<String>,
    created_at: DateTime<Utc>,
}

impl EngineLogEntry {
    /// Records a successful resolution.
    #[must_use]
    pub fn success(service_type: ServiceType, request: serde_json::Value, quote: &Quote) -> Self {
        Self {
            id: LogId::new(),
            service_type,
            request,
            rule_id: quote.rule_id(),
            base_fare: Some(quote.base_fare()),
            agent_commission: Some(quote.agent_commission()),
            total_price: Some(quote.total_price()),
            error: None,
            created_at: Utc::now(),
        }
    }

    /// Records a failed resolution.
    #[must_use]
    pub fn failure(
        service_type: ServiceType,
        request: serde_json::Value,
        error: impl Into<String>,
    ) -> Self {
        Self {
            id: LogId::new(),
            service_type,
            request,
            rule_id: None,
            base_fare: None,
            agent_commission: None,
            total_price: None,
            error: Some(error.into()),
            created_at: Utc::now(),
        }
    }

    /// Reconstructs an entry from stored fields.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub const fn from_parts(
        id: LogId,
        service_type: ServiceType,
        request: serde_json::Value,
        rule_id: Option<RuleId>,
        base_fare: Option<Money>,
        agent_commission: Option<Money>,
        total_price: Option<Money>,
        error: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            service_type,
            request,
            rule_id,
            base_fare,
            agent_commission,
            total_price,
            error,
            created_at,
        }
    }

    /// Returns the entry identifier.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> LogId {
        self.id
    }

    /// Returns the service type of the logged invocation.
    #[inline]
    #[must_use]
    pub const fn service_type(&self) -> ServiceType {
        self.service_type
    }

    /// Returns the raw request payload.
    #[inline]
    #[must_use]
    pub const fn request(&self) -> &serde_json::Value {
        &self.request
    }

    /// Returns the selected rule id, when one matched.
    #[inline]
    #[must_use]
    pub const fn rule_id(&self) -> Option<RuleId> {
        self.rule_id
    }

    /// Returns the computed base fare, when the invocation succeeded.
    #[inline]
    #[must_use]
    pub const fn base_fare(&self) -> Option<Money> {
        self.base_fare
    }

    /// Returns the computed commission, when the invocation succeeded.
    #[inline]
    #[must_use]
    pub const fn agent_commission(&self) -> Option<Money> {
        self.agent_commission
    }

    /// Returns the computed total, when the invocation succeeded.
    #[inline]
    #[must_use]
    pub const fn total_price(&self) -> Option<Money> {
        self.total_price
    }

    /// Returns the error message, when the invocation failed.
    #[inline]
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns true if the logged invocation succeeded.
    #[inline]
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Creation timestamp.
    #[inline]
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Display for EngineLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = if self.is_success() { "ok" } else { "failed" };
        write!(f, "log {} [{}] {}", self.id, self.service_type, outcome)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::quote::BaseFare;
    use crate::domain::value_objects::{Money, Percent};
    use rust_decimal::Decimal;
    use serde_json::json;

    fn sample_quote() -> Quote {
        Quote::compute(
            Some(RuleId::new()),
            BaseFare::flat(Money::new(Decimal::new(400, 0)).unwrap()),
            Percent::new(Decimal::new(10, 0)).unwrap(),
            Percent::new(Decimal::new(15, 0)).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn success_entry_copies_quote_figures() {
        let quote = sample_quote();
        let request = json!({"vehicle_type": "gmc", "distance_km": 100});
        let entry = EngineLogEntry::success(ServiceType::Transport, request.clone(), &quote);

        assert!(entry.is_success());
        assert_eq!(entry.request(), &request);
        assert_eq!(entry.rule_id(), quote.rule_id());
        assert_eq!(entry.base_fare(), Some(quote.base_fare()));
        assert_eq!(entry.agent_commission(), Some(quote.agent_commission()));
        assert_eq!(entry.total_price(), Some(quote.total_price()));
        assert!(entry.error().is_none());
    }

    #[test]
    fn failure_entry_has_error_and_no_figures() {
        let entry = EngineLogEntry::failure(
            ServiceType::Flight,
            json!({"from": "DXB"}),
            "base_fare_manual is required",
        );

        assert!(!entry.is_success());
        assert_eq!(entry.error(), Some("base_fare_manual is required"));
        assert!(entry.base_fare().is_none());
        assert!(entry.rule_id().is_none());
    }

    #[test]
    fn display_shows_outcome() {
        let ok = EngineLogEntry::success(ServiceType::Hotel, json!({}), &sample_quote());
        assert!(ok.to_string().ends_with("ok"));

        let failed = EngineLogEntry::failure(ServiceType::Hotel, json!({}), "boom");
        assert!(failed.to_string().ends_with("failed"));
    }
}
