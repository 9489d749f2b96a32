//! # PostgreSQL Persistence
//!
//! PostgreSQL repository implementations and pool setup.
//!
//! ## Available Repositories
//!
//! - [`PostgresPricingRuleRepository`]: Pricing rule persistence
//! - [`PostgresEngineLogRepository`]: Engine audit log
//! - [`PostgresAgentRepository`]: Agents and commission rules
//! - [`PostgresBookingRepository`]: Booking persistence
//!
//! Schema migrations live under `migrations/` and are embedded into the
//! binary at compile time.

pub mod agent_repository;
pub mod booking_repository;
pub mod engine_log_repository;
pub mod pricing_rule_repository;

pub use agent_repository::PostgresAgentRepository;
pub use booking_repository::PostgresBookingRepository;
pub use engine_log_repository::PostgresEngineLogRepository;
pub use pricing_rule_repository::PostgresPricingRuleRepository;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing::info;

/// Opens a connection pool against the given database URL.
///
/// # Errors
///
/// Returns `sqlx::Error` when the database is unreachable or the URL is
/// invalid.
pub async fn connect_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect(url)
        .await
}

/// Runs the embedded schema migrations.
///
/// # Errors
///
/// Returns `sqlx::migrate::MigrateError` when a migration fails to
/// apply.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("running database migrations");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("migrations completed");
    Ok(())
}
