//! # Rate Engine
//!
//! Rule-based rate and commission quote engine for travel products:
//! transport, hotel, and flight fares with configurable markup and
//! agent commissions.
//!
//! ## Architecture
//!
//! The crate is layered; dependencies point inward only:
//!
//! - [`domain`]: Entities, value objects, validated requests, and the
//!   pricing arithmetic. No I/O.
//! - [`application`]: The quote and booking flows: rule selection,
//!   fare derivation, percentage layering, commission resolution, and
//!   the audit trail.
//! - [`infrastructure`]: Configuration loading plus in-memory and
//!   PostgreSQL repositories.
//! - [`api`]: The axum HTTP surface.
//!
//! ## Quote flow
//!
//! Every quote request walks the same path: validate input, fetch the
//! active rules for the product, pick the first full structural match
//! by ascending priority, derive the base fare (rule value, fallback
//! table, or manual override depending on the product), apply
//! commission and profit percentages, and append exactly one audit log
//! entry, success or failure.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
