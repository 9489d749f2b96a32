//! # Booking Service
//!
//! API-key authenticated transport bookings for agents.
//!
//! A booking prices its route through the regular transport quote flow
//! (which audits the attempt), resolves the agent's commission on the
//! computed price, and persists the booking with both locked in. The
//! agent lookup happens first: an unknown key or an inactive agent is
//! rejected before any pricing work.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::commission_resolver::resolve_agent_commission;
use crate::application::services::products::TransportQuoter;
use crate::application::services::quote_service::QuoteService;
use crate::domain::entities::Booking;
use crate::domain::errors::DomainResult;
use crate::domain::requests::TransportBookingRequest;
use crate::domain::value_objects::ServiceType;
use crate::infrastructure::persistence::traits::{AgentRepository, BookingRepository};
use chrono::NaiveDate;
use std::sync::Arc;

/// Creates agent bookings with engine-resolved pricing.
#[derive(Debug, Clone)]
pub struct BookingService {
    quotes: QuoteService<TransportQuoter>,
    agents: Arc<dyn AgentRepository>,
    bookings: Arc<dyn BookingRepository>,
}

impl BookingService {
    /// Creates a booking service from its collaborators.
    #[must_use]
    pub fn new(
        quotes: QuoteService<TransportQuoter>,
        agents: Arc<dyn AgentRepository>,
        bookings: Arc<dyn BookingRepository>,
    ) -> Self {
        Self {
            quotes,
            agents,
            bookings,
        }
    }

    /// Creates one booking for the agent holding `api_key`.
    ///
    /// `raw` is the request payload as received, `request` its
    /// validation outcome, and `today` the date used for rule validity
    /// windows.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::UnknownAgent` for an unrecognized key,
    /// `ApplicationError::AgentInactive` for a deactivated agent, the
    /// validation error for invalid input, or a repository error when
    /// storage fails.
    pub async fn create_booking(
        &self,
        api_key: &str,
        raw: serde_json::Value,
        request: DomainResult<TransportBookingRequest>,
        today: NaiveDate,
    ) -> ApplicationResult<Booking> {
        let agent = self
            .agents
            .find_by_api_key(api_key)
            .await?
            .ok_or(ApplicationError::UnknownAgent)?;
        if !agent.is_active() {
            return Err(ApplicationError::AgentInactive);
        }

        let request = request?;
        let quote = self
            .quotes
            .quote(raw, Ok(request.quote_request()), today)
            .await?;

        let rules = self
            .agents
            .find_commission_rules(agent.id(), ServiceType::Transport)
            .await?;
        let commission =
            resolve_agent_commission(&agent, &rules, quote.total_price(), today)?;

        let booking = Booking::new(
            agent.id(),
            request.vehicle_type(),
            request.pickup_location(),
            request.dropoff_location(),
            request.travel_date(),
            request.distance_km(),
            quote.total_price(),
            commission.amount(),
            commission.percent(),
        )?;
        self.bookings.save(&booking).await?;

        tracing::info!(
            booking = %booking.id(),
            agent = %agent.id(),
            price = %booking.price(),
            commission = %booking.commission_amount(),
            "booking created"
        );
        Ok(booking)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::application::services::audit::AuditLogger;
    use crate::application::services::products::FallbackRateTable;
    use crate::domain::entities::{Agent, AgentCommissionRule, PricingRule};
    use crate::domain::value_objects::{CommissionType, PricingMode};
    use crate::infrastructure::persistence::in_memory::{
        InMemoryAgentRepository, InMemoryBookingRepository, InMemoryEngineLogRepository,
        InMemoryPricingRuleRepository,
    };
    use crate::infrastructure::persistence::traits::{EngineLogRepository, PricingRuleRepository};
    use rust_decimal::Decimal;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn request() -> DomainResult<TransportBookingRequest> {
        TransportBookingRequest::new(
            Some("gmc".to_owned()),
            Some(Decimal::new(100, 0)),
            Some("Airport T1".to_owned()),
            Some("Palm Resort".to_owned()),
            NaiveDate::from_ymd_opt(2025, 6, 10),
        )
    }

    struct Harness {
        service: BookingService,
        rules: Arc<InMemoryPricingRuleRepository>,
        agents: Arc<InMemoryAgentRepository>,
        bookings: Arc<InMemoryBookingRepository>,
        logs: Arc<InMemoryEngineLogRepository>,
    }

    fn harness() -> Harness {
        let rules = Arc::new(InMemoryPricingRuleRepository::new());
        let agents = Arc::new(InMemoryAgentRepository::new());
        let bookings = Arc::new(InMemoryBookingRepository::new());
        let logs = Arc::new(InMemoryEngineLogRepository::new());
        let quotes = QuoteService::new(
            TransportQuoter::new(FallbackRateTable::default()),
            rules.clone(),
            AuditLogger::new(logs.clone()),
        );
        let service = BookingService::new(quotes, agents.clone(), bookings.clone());
        Harness {
            service,
            rules,
            agents,
            bookings,
            logs,
        }
    }

    async fn seed_agent(h: &Harness, default_percent: Option<i64>) -> Agent {
        let agent = Agent::new(
            "Desert Tours",
            "key-123",
            default_percent.map(|value| Decimal::new(value, 0)),
        )
        .unwrap();
        h.agents.save(&agent).await.unwrap();
        agent
    }

    async fn seed_gmc_rule(h: &Harness) -> PricingRule {
        let rule = PricingRule::builder(ServiceType::Transport, 1)
            .vehicle_type("gmc")
            .pricing_mode(PricingMode::PerUnit)
            .base_per_unit(Decimal::new(40, 1))
            .profit_percent(Decimal::new(15, 0))
            .build()
            .unwrap();
        h.rules.save(&rule).await.unwrap();
        rule
    }

    #[tokio::test]
    async fn books_with_rule_commission_on_computed_price() {
        let h = harness();
        let agent = seed_agent(&h, Some(20)).await;
        seed_gmc_rule(&h).await;
        let rule = AgentCommissionRule::new(
            agent.id(),
            ServiceType::Transport,
            1,
            CommissionType::Percent,
            Decimal::new(10, 0),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            None,
        )
        .unwrap();
        h.agents.save_commission_rule(&rule).await.unwrap();

        let booking = h
            .service
            .create_booking("key-123", json!({}), request(), today())
            .await
            .unwrap();

        // 4.0/km * 100km = 400, +15% profit = 460; 10% commission on 460
        assert_eq!(booking.price().amount(), Decimal::new(46000, 2));
        assert_eq!(booking.commission_amount().amount(), Decimal::new(4600, 2));
        assert_eq!(booking.commission_percent().value(), Decimal::new(10, 0));
        assert_eq!(h.bookings.find_by_agent(agent.id()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn flat_commission_is_reported_as_percent() {
        let h = harness();
        let agent = seed_agent(&h, None).await;
        seed_gmc_rule(&h).await;
        let rule = AgentCommissionRule::new(
            agent.id(),
            ServiceType::Transport,
            1,
            CommissionType::Flat,
            Decimal::new(46, 0),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            None,
        )
        .unwrap();
        h.agents.save_commission_rule(&rule).await.unwrap();

        let booking = h
            .service
            .create_booking("key-123", json!({}), request(), today())
            .await
            .unwrap();

        assert_eq!(booking.commission_amount().amount(), Decimal::new(4600, 2));
        // 46 of 460 is 10%
        assert_eq!(booking.commission_percent().value(), Decimal::new(1000, 2));
    }

    #[tokio::test]
    async fn default_percent_applies_without_rules() {
        let h = harness();
        seed_agent(&h, Some(5)).await;

        let booking = h
            .service
            .create_booking("key-123", json!({}), request(), today())
            .await
            .unwrap();

        // fallback 4.0/km * 100km = 400, no profit percent
        assert_eq!(booking.price().amount(), Decimal::new(40000, 2));
        assert_eq!(booking.commission_amount().amount(), Decimal::new(2000, 2));
    }

    #[tokio::test]
    async fn unknown_api_key_is_rejected_before_pricing() {
        let h = harness();

        let err = h
            .service
            .create_booking("missing", json!({}), request(), today())
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::UnknownAgent));
        assert_eq!(h.logs.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn inactive_agent_is_rejected() {
        let h = harness();
        let agent = seed_agent(&h, None).await;
        let deactivated = Agent::from_parts(
            agent.id(),
            agent.name().to_owned(),
            agent.api_key().to_owned(),
            None,
            false,
            agent.created_at(),
            agent.updated_at(),
        )
        .unwrap();
        h.agents.save(&deactivated).await.unwrap();

        let err = h
            .service
            .create_booking("key-123", json!({}), request(), today())
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::AgentInactive));
    }

    #[tokio::test]
    async fn pricing_is_audited_like_a_quote() {
        let h = harness();
        seed_agent(&h, None).await;

        h.service
            .create_booking("key-123", json!({"vehicle_type": "gmc"}), request(), today())
            .await
            .unwrap();

        assert_eq!(h.logs.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn invalid_request_is_rejected_after_auth() {
        let h = harness();
        let agent = seed_agent(&h, None).await;
        let invalid = TransportBookingRequest::new(
            Some("gmc".to_owned()),
            Some(Decimal::new(100, 0)),
            None,
            Some("Palm Resort".to_owned()),
            None,
        );

        let err = h
            .service
            .create_booking("key-123", json!({}), invalid, today())
            .await
            .unwrap_err();

        assert!(err.is_client_error());
        assert!(h.bookings.find_by_agent(agent.id()).await.unwrap().is_empty());
    }
}
