//! # Domain Layer
//!
//! Pure business logic for rate resolution and commission handling.
//! No IO, no framework types; everything here is deterministic and
//! unit-testable in isolation.
//!
//! ## Structure
//!
//! - [`value_objects`]: Validated primitives ([`Money`], [`Percent`], ids, enums)
//! - [`entities`]: Aggregates and entities ([`PricingRule`], [`Quote`], [`Booking`])
//! - [`requests`]: Validated quote and booking inputs
//! - [`errors`]: The [`DomainError`] taxonomy
//!
//! [`Money`]: value_objects::Money
//! [`Percent`]: value_objects::Percent
//! [`PricingRule`]: entities::PricingRule
//! [`Quote`]: entities::Quote
//! [`Booking`]: entities::Booking
//! [`DomainError`]: errors::DomainError

pub mod entities;
pub mod errors;
pub mod requests;
pub mod value_objects;

pub use entities::{
    Agent, AgentCommissionRule, BaseFare, Booking, EngineLogEntry, PricingRule,
    PricingRuleBuilder, Quote,
};
pub use errors::{DomainError, DomainResult};
pub use requests::{
    FlightQuoteRequest, HotelQuoteRequest, PercentOverrides, QuoteInput, TransportBookingRequest,
    TransportQuoteRequest,
};
pub use value_objects::{
    AgentId, AgentRuleId, ArithmeticError, ArithmeticResult, BookingId, BookingStatus,
    CheckedArithmetic, CommissionType, LogId, Money, ParseEnumError, Percent, PricingMode, RuleId,
    ServiceType,
};
