//! # In-Memory Repositories
//!
//! In-memory implementations for testing without database dependencies.
//!
//! ## Available Repositories
//!
//! - [`InMemoryPricingRuleRepository`]: Pricing rule persistence
//! - [`InMemoryEngineLogRepository`]: Engine audit log
//! - [`InMemoryAgentRepository`]: Agents and commission rules
//! - [`InMemoryBookingRepository`]: Booking persistence
//!
//! ## Thread Safety
//!
//! All implementations use `Arc<RwLock<..>>` for thread-safe access.

pub mod agent_repository;
pub mod booking_repository;
pub mod engine_log_repository;
pub mod pricing_rule_repository;

pub use agent_repository::InMemoryAgentRepository;
pub use booking_repository::InMemoryBookingRepository;
pub use engine_log_repository::InMemoryEngineLogRepository;
pub use pricing_rule_repository::InMemoryPricingRuleRepository;
