//! # Persistence Layer
//!
//! Repository traits and their implementations.
//!
//! ## Repository Traits (Ports)
//!
//! - [`PricingRuleRepository`]: Persistence for pricing rules
//! - [`EngineLogRepository`]: Append-only engine audit log
//! - [`AgentRepository`]: Agents and their commission rules
//! - [`BookingRepository`]: Persistence for agent bookings
//!
//! ## Implementations
//!
//! - `in_memory`: In-memory implementations for testing
//! - `postgres`: PostgreSQL implementations backed by `sqlx`

pub mod in_memory;
pub mod postgres;
pub mod traits;

pub use traits::{
    AgentRepository, BookingRepository, EngineLogRepository, PricingRuleRepository,
    RepositoryError, RepositoryResult,
};
