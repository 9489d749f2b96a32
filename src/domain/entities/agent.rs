//! # Agent Entities
//!
//! Booking agents and their commission rules.
//!
//! An [`Agent`] authenticates to the booking API with an API key and may
//! carry a default commission percentage. [`AgentCommissionRule`] rows
//! refine that default per service type: the first active, in-effect rule
//! by ascending priority wins, the agent default comes next, and zero is
//! the final fallback.
//!
//! Unlike pricing rules, a commission rule's `valid_from` is mandatory;
//! only the end of the window may be open.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{AgentId, AgentRuleId, CommissionType, Percent, ServiceType};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A booking agent identified by an API key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    id: AgentId,
    name: String,
    api_key: String,
    default_commission_percent: Option<Percent>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Agent {
    /// Creates an active agent with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` if `name` or `api_key` is
    /// empty and `DomainError::InvalidPercent` for a negative default
    /// commission.
    pub fn new(
        name: impl Into<String>,
        api_key: impl Into<String>,
        default_commission_percent: Option<Decimal>,
    ) -> DomainResult<Self> {
        let now = Utc::now();
        Self::from_parts(
            AgentId::new(),
            name.into(),
            api_key.into(),
            default_commission_percent,
            true,
            now,
            now,
        )
    }

    /// Reconstructs an agent from stored fields.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` if `name` or `api_key` is
    /// empty and `DomainError::InvalidPercent` for a negative default
    /// commission.
    pub fn from_parts(
        id: AgentId,
        name: String,
        api_key: String,
        default_commission_percent: Option<Decimal>,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if name.trim().is_empty() {
            return Err(DomainError::missing("name"));
        }
        if api_key.trim().is_empty() {
            return Err(DomainError::missing("api_key"));
        }
        Ok(Self {
            id,
            name,
            api_key,
            default_commission_percent: default_commission_percent
                .map(Percent::new)
                .transpose()?,
            active,
            created_at,
            updated_at,
        })
    }

    /// Returns the agent identifier.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> AgentId {
        self.id
    }

    /// Returns the agent name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the API key the agent authenticates with.
    #[inline]
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the default commission percentage, when configured.
    #[inline]
    #[must_use]
    pub const fn default_commission_percent(&self) -> Option<Percent> {
        self.default_commission_percent
    }

    /// Returns true if the agent may create bookings.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
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

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent {} ({})", self.id, self.name)
    }
}

/// A per-agent, product-scoped commission rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentCommissionRule {
    id: AgentRuleId,
    agent_id: AgentId,
    service_type: ServiceType,
    priority: i32,
    commission_type: CommissionType,
    rate: Decimal,
    valid_from: NaiveDate,
    valid_to: Option<NaiveDate>,
    active: bool,
    created_at: DateTime<Utc>,
}

impl AgentCommissionRule {
    /// Creates an active rule with a fresh identifier.
    ///
    /// `rate` is a percentage for [`CommissionType::Percent`] rules and a
    /// monetary amount for [`CommissionType::Flat`] ones.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRule` for a negative rate or an
    /// inverted validity window.
    pub fn new(
        agent_id: AgentId,
        service_type: ServiceType,
        priority: i32,
        commission_type: CommissionType,
        rate: Decimal,
        valid_from: NaiveDate,
        valid_to: Option<NaiveDate>,
    ) -> DomainResult<Self> {
        Self::from_parts(
            AgentRuleId::new(),
            agent_id,
            service_type,
            priority,
            commission_type,
            rate,
            valid_from,
            valid_to,
            true,
            Utc::now(),
        )
    }

    /// Reconstructs a rule from stored fields.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRule` for a negative rate or an
    /// inverted validity window.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: AgentRuleId,
        agent_id: AgentId,
        service_type: ServiceType,
        priority: i32,
        commission_type: CommissionType,
        rate: Decimal,
        valid_from: NaiveDate,
        valid_to: Option<NaiveDate>,
        active: bool,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if rate.is_sign_negative() {
            return Err(DomainError::invalid_rule(format!(
                "commission rate cannot be negative: {rate}"
            )));
        }
        if valid_to.is_some_and(|to| valid_from > to) {
            return Err(DomainError::invalid_rule(format!(
                "valid_from {valid_from} is after valid_to"
            )));
        }
        Ok(Self {
            id,
            agent_id,
            service_type,
            priority,
            commission_type,
            rate,
            valid_from,
            valid_to,
            active,
            created_at,
        })
    }

    /// Returns the rule identifier.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> AgentRuleId {
        self.id
    }

    /// Returns the agent this rule belongs to.
    #[inline]
    #[must_use]
    pub const fn agent_id(&self) -> AgentId {
        self.agent_id
    }

    /// Returns the product line the rule is scoped to.
    #[inline]
    #[must_use]
    pub const fn service_type(&self) -> ServiceType {
        self.service_type
    }

    /// Returns the evaluation priority; lower wins.
    #[inline]
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// Returns how the rate is interpreted.
    #[inline]
    #[must_use]
    pub const fn commission_type(&self) -> CommissionType {
        self.commission_type
    }

    /// Returns the raw rate (a percentage or a flat amount).
    #[inline]
    #[must_use]
    pub const fn rate(&self) -> Decimal {
        self.rate
    }

    /// First day the rule is in effect.
    #[inline]
    #[must_use]
    pub const fn valid_from(&self) -> NaiveDate {
        self.valid_from
    }

    /// Last day the rule is in effect, inclusive; `None` is open-ended.
    #[inline]
    #[must_use]
    pub const fn valid_to(&self) -> Option<NaiveDate> {
        self.valid_to
    }

    /// Returns true if the rule is active.
    #[inline]
    #[must_use]
    pub const fn active(&self) -> bool {
        self.active
    }

    /// Creation timestamp.
    #[inline]
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns true if the validity window covers the given day.
    #[must_use]
    pub fn is_in_effect(&self, on: NaiveDate) -> bool {
        self.valid_from <= on && self.valid_to.is_none_or(|to| on <= to)
    }
}

impl fmt::Display for AgentCommissionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "agent rule {} [{} {}] priority {}",
            self.id, self.service_type, self.commission_type, self.priority
        )
    }
}
