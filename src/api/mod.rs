//! # API Layer
//!
//! External interfaces to the rate engine.
//!
//! ## Modules
//!
//! - [`rest`]: HTTP endpoints for quotes, agent bookings, and health

pub mod rest;

pub use rest::{AppState, create_router};
