//! # Domain Entities
//!
//! Aggregate roots and entities representing core business concepts.
//!
//! ## Aggregates
//!
//! - [`PricingRule`]: Configurable rate rule with match criteria
//! - [`Booking`]: Agent transport booking with locked-in pricing
//! - [`Agent`]: API-key authenticated sales agent
//!
//! ## Entities
//!
//! - [`Quote`]: Computed fare breakdown for a request
//! - [`EngineLogEntry`]: Audit record of one engine invocation
//! - [`AgentCommissionRule`]: Per-agent commission override

pub mod agent;
pub mod booking;
pub mod engine_log;
pub mod pricing_rule;
pub mod quote;

pub use agent::{Agent, AgentCommissionRule};
pub use booking::Booking;
pub use engine_log::EngineLogEntry;
pub use pricing_rule::{PricingRule, PricingRuleBuilder};
pub use quote::{BaseFare, Quote};
