//! # REST API
//!
//! REST endpoints using axum for the quote and booking flows.
//!
//! # Endpoints
//!
//! ## Quotes
//! - `POST /rates/transport/quote` - Price a transport trip
//! - `POST /rates/hotel/quote` - Price a hotel stay
//! - `POST /rates/flight/quote` - Price a flight
//!
//! ## Agent bookings
//! - `POST /agent/transport/bookings` - Create a booking
//!   (authenticated via the `X-Api-Key` header)
//!
//! ## Health
//! - `GET /health` - Health check endpoint
//!
//! # Usage
//!
//! ```ignore
//! use rate_engine::api::rest::{AppState, create_router};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState {
//!     transport_quotes: /* ... */,
//!     hotel_quotes: /* ... */,
//!     flight_quotes: /* ... */,
//!     bookings: /* ... */,
//! });
//!
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{ApiError, AppState, BookingResponse, HealthResponse, QuoteResponse};
pub use routes::create_router;
