//! # Repository Traits
//!
//! Port definitions for persistence abstraction.
//!
//! This module defines the repository traits (ports) that abstract
//! persistence operations. Implementations can use different backends
//! like PostgreSQL or in-memory storage.
//!
//! # Available Repositories
//!
//! - [`PricingRuleRepository`]: Persistence for pricing rules
//! - [`EngineLogRepository`]: Append-only engine audit log
//! - [`AgentRepository`]: Agents and their commission rules
//! - [`BookingRepository`]: Persistence for agent bookings
//!
//! # Examples
//!
//! ```ignore
//! use rate_engine::infrastructure::persistence::traits::PricingRuleRepository;
//! use rate_engine::domain::value_objects::ServiceType;
//!
//! async fn count_transport_rules(repo: &impl PricingRuleRepository) {
//!     let rules = repo.find_active(ServiceType::Transport).await.unwrap();
//!     println!("Found {} active transport rules", rules.len());
//! }
//! ```

use crate::domain::entities::{Agent, AgentCommissionRule, Booking, EngineLogEntry, PricingRule};
use crate::domain::value_objects::{AgentId, BookingId, RuleId, ServiceType};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Entity not found.
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Duplicate entity.
    #[error("Duplicate entity: {entity_type} with id {id} already exists")]
    Duplicate {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query error.
    #[error("Query error: {0}")]
    Query(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a duplicate error.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for pricing rules.
///
/// Rules are read-only inputs to the quote flow; writes exist for
/// administration and test setup.
///
/// # Examples
///
/// ```ignore
/// use rate_engine::infrastructure::persistence::traits::PricingRuleRepository;
/// use rate_engine::domain::value_objects::ServiceType;
///
/// async fn example(repo: &impl PricingRuleRepository) {
///     let rules = repo.find_active(ServiceType::Hotel).await?;
///     for rule in rules {
///         println!("{rule}");
///     }
/// }
/// ```
#[async_trait]
pub trait PricingRuleRepository: Send + Sync + fmt::Debug {
    /// Finds active rules for the given service type.
    ///
    /// Results are ordered by ascending priority; ties keep a stable
    /// order across calls.
    async fn find_active(&self, service_type: ServiceType) -> RepositoryResult<Vec<PricingRule>>;

    /// Gets a rule by ID.
    ///
    /// Returns `None` if the rule does not exist.
    async fn get(&self, id: RuleId) -> RepositoryResult<Option<PricingRule>>;

    /// Saves a rule.
    ///
    /// If the rule already exists, it will be updated.
    async fn save(&self, rule: &PricingRule) -> RepositoryResult<()>;
}

/// Append-only repository for engine audit log entries.
///
/// The quote flow only ever appends; entries are never read back to
/// influence pricing.
#[async_trait]
pub trait EngineLogRepository: Send + Sync + fmt::Debug {
    /// Appends one log entry.
    async fn append(&self, entry: &EngineLogEntry) -> RepositoryResult<()>;

    /// Returns the most recent entries, newest first.
    async fn recent(&self, limit: u32) -> RepositoryResult<Vec<EngineLogEntry>>;

    /// Counts all entries.
    async fn count(&self) -> RepositoryResult<u64>;
}

/// Repository for agents and their commission rules.
#[async_trait]
pub trait AgentRepository: Send + Sync + fmt::Debug {
    /// Finds an agent by its API key.
    ///
    /// Returns `None` when no agent holds the key.
    async fn find_by_api_key(&self, api_key: &str) -> RepositoryResult<Option<Agent>>;

    /// Finds an agent's commission rules for one service type.
    ///
    /// Includes inactive and out-of-window rules; eligibility is the
    /// caller's concern. Results are ordered by ascending priority.
    async fn find_commission_rules(
        &self,
        agent_id: AgentId,
        service_type: ServiceType,
    ) -> RepositoryResult<Vec<AgentCommissionRule>>;

    /// Saves an agent.
    ///
    /// If the agent already exists, it will be updated.
    async fn save(&self, agent: &Agent) -> RepositoryResult<()>;

    /// Saves a commission rule.
    ///
    /// If the rule already exists, it will be updated.
    async fn save_commission_rule(&self, rule: &AgentCommissionRule) -> RepositoryResult<()>;
}

/// Repository for agent bookings.
#[async_trait]
pub trait BookingRepository: Send + Sync + fmt::Debug {
    /// Saves a booking.
    ///
    /// If the booking already exists, it will be updated.
    async fn save(&self, booking: &Booking) -> RepositoryResult<()>;

    /// Gets a booking by ID.
    ///
    /// Returns `None` if the booking does not exist.
    async fn get(&self, id: BookingId) -> RepositoryResult<Option<Booking>>;

    /// Finds all bookings created by the given agent.
    async fn find_by_agent(&self, agent_id: AgentId) -> RepositoryResult<Vec<Booking>>;
}
