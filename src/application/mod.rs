//! # Application Layer
//!
//! Use-case orchestration on top of the domain.
//!
//! The [`services`] module wires rule selection, fare computation, and
//! auditing into the quote and booking flows; [`error`] defines the
//! [`ApplicationError`] those flows surface.
//!
//! [`ApplicationError`]: error::ApplicationError

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use services::{AuditLogger, BookingService, QuoteService};
