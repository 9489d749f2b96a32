//! Rate engine HTTP server.

use rate_engine::api::rest::AppState;
use rate_engine::api::rest::create_router;
use rate_engine::application::services::{
    AuditLogger, BookingService, FlightQuoter, HotelQuoter, QuoteService, TransportQuoter,
};
use rate_engine::infrastructure::config::AppConfig;
use rate_engine::infrastructure::persistence::postgres::{
    PostgresAgentRepository, PostgresBookingRepository, PostgresEngineLogRepository,
    PostgresPricingRuleRepository, connect_pool, run_migrations,
};
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rate_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;
    tracing::info!(addr = %config.server.bind_addr(), "starting rate engine");

    let pool = connect_pool(&config.database.url, config.database.max_connections).await?;
    run_migrations(&pool).await?;

    let rules = Arc::new(PostgresPricingRuleRepository::new(pool.clone()));
    let logs = Arc::new(PostgresEngineLogRepository::new(pool.clone()));
    let agents = Arc::new(PostgresAgentRepository::new(pool.clone()));
    let bookings = Arc::new(PostgresBookingRepository::new(pool));

    let audit = AuditLogger::new(logs);
    let transport_quotes = QuoteService::new(
        TransportQuoter::new(config.engine.rate_table()),
        rules.clone(),
        audit.clone(),
    );
    let hotel_quotes = QuoteService::new(HotelQuoter, rules.clone(), audit.clone());
    let flight_quotes = QuoteService::new(FlightQuoter, rules, audit);
    let booking_service = BookingService::new(transport_quotes.clone(), agents, bookings);

    let state = Arc::new(AppState {
        transport_quotes,
        hotel_quotes,
        flight_quotes,
        bookings: booking_service,
    });
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.server.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;

    Ok(())
}
