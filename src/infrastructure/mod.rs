//! # Infrastructure Layer
//!
//! Adapters to the outside world: configuration loading and persistence
//! backends.
//!
//! ## Modules
//!
//! - [`config`]: Layered application configuration
//! - [`persistence`]: Repository traits plus in-memory and PostgreSQL
//!   implementations

pub mod config;
pub mod persistence;

pub use config::AppConfig;
pub use persistence::{RepositoryError, RepositoryResult};
