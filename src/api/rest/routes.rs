//! # REST Routes
//!
//! Route table and middleware wiring for the HTTP API.

use crate::api::rest::handlers::{self, AppState};
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the application router with all endpoints and middleware.
#[must_use]
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/rates/transport/quote", post(handlers::quote_transport))
        .route("/rates/hotel/quote", post(handlers::quote_hotel))
        .route("/rates/flight/quote", post(handlers::quote_flight))
        .route(
            "/agent/transport/bookings",
            post(handlers::create_agent_booking),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
