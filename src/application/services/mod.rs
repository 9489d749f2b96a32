//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! This module provides application-level services including:
//! - [`QuoteService`]: The generic quote flow shared by all products
//! - [`BookingService`]: Agent bookings with engine-resolved pricing
//! - [`select_rule`]: Priority-ordered first-match rule selection
//!
//! [`select_rule`]: rule_selector::select_rule

pub mod audit;
pub mod booking_service;
pub mod commission_resolver;
pub mod fare_calculator;
pub mod products;
pub mod quote_service;
pub mod rule_selector;

pub use audit::AuditLogger;
pub use booking_service::BookingService;
pub use commission_resolver::{CommissionSource, ResolvedCommission, resolve_agent_commission};
pub use fare_calculator::{build_quote, resolve_percent};
pub use products::{
    FallbackRateTable, FlightQuoter, HotelQuoter, ProductQuoter, TransportQuoter,
};
pub use quote_service::QuoteService;
pub use rule_selector::{SelectableRule, matches_exact, matches_text, select_rule, within_range};
