//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`RuleId`], [`AgentRuleId`], [`LogId`], [`AgentId`], [`BookingId`]:
//!   UUID-based identifiers
//!
//! ## Numeric Types
//!
//! - [`Money`]: Non-negative monetary amount with two-decimal rounding
//! - [`Percent`]: Non-negative percentage in human units
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`]: Error type for arithmetic failures
//! - [`CheckedArithmetic`]: Trait for safe arithmetic operations
//!
//! ## Domain Enums
//!
//! - [`ServiceType`]: transport, hotel or flight
//! - [`PricingMode`]: flat or per-unit fare derivation
//! - [`CommissionType`]: percent or flat agent commission
//! - [`BookingStatus`]: booking lifecycle states

pub mod arithmetic;
pub mod enums;
pub mod ids;
pub mod money;
pub mod percent;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic};
pub use enums::{BookingStatus, CommissionType, ParseEnumError, PricingMode, ServiceType};
pub use ids::{AgentId, AgentRuleId, BookingId, LogId, RuleId};
pub use money::Money;
pub use percent::Percent;
