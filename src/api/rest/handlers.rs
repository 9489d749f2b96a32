//! # REST Handlers
//!
//! Request handlers, wire DTOs, and the HTTP error envelope.
//!
//! Quote bodies are read as raw JSON first so the audit log always
//! captures the payload exactly as received, then mapped onto the typed
//! domain requests. Missing and malformed fields therefore surface as
//! domain validation errors (HTTP 400) rather than framework rejections.
//!
//! ## Error mapping
//!
//! - client input and "no price available" -> `400 { "error": .. }`
//! - unknown API key -> `401 { "error": .. }`
//! - inactive agent -> `403 { "error": .. }`
//! - everything else -> `500 { "error": .., "details": .. }`

use crate::application::error::ApplicationError;
use crate::application::services::{
    BookingService, FlightQuoter, HotelQuoter, QuoteService, TransportQuoter,
};
use crate::domain::entities::{Booking, Quote};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::requests::{
    FlightQuoteRequest, HotelQuoteRequest, PercentOverrides, TransportBookingRequest,
    TransportQuoteRequest,
};
use crate::domain::value_objects::{BookingId, BookingStatus, Money, Percent, RuleId};
use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Shared state for all REST handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Transport quote flow.
    pub transport_quotes: QuoteService<TransportQuoter>,
    /// Hotel quote flow.
    pub hotel_quotes: QuoteService<HotelQuoter>,
    /// Flight quote flow.
    pub flight_quotes: QuoteService<FlightQuoter>,
    /// Agent booking flow.
    pub bookings: BookingService,
}

/// Error envelope returned by all handlers.
#[derive(Debug)]
pub struct ApiError(ApplicationError);

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = self.0;
        if error.is_client_error() {
            let body = json!({ "error": error.to_string() });
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
        match error {
            ApplicationError::UnknownAgent => {
                let body = json!({ "error": error.to_string() });
                (StatusCode::UNAUTHORIZED, Json(body)).into_response()
            }
            ApplicationError::AgentInactive => {
                let body = json!({ "error": error.to_string() });
                (StatusCode::FORBIDDEN, Json(body)).into_response()
            }
            other => {
                tracing::error!(error = %other, "request failed");
                let body = json!({
                    "error": "internal server error",
                    "details": other.to_string(),
                });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

/// Quote payload returned by the three quote endpoints.
///
/// `rule_id` is always present and `null` when no rule matched;
/// `per_night` appears only on hotel quotes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// Nightly rate the base fare was derived from (hotel only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_night: Option<Money>,
    /// Base fare before markup.
    pub base_fare: Money,
    /// Agent commission, computed on the base fare.
    pub agent_commission: Money,
    /// Customer-facing total price.
    pub total_price: Money,
    /// The rule that priced the quote, when one matched.
    pub rule_id: Option<RuleId>,
}

impl QuoteResponse {
    fn from_quote(quote: &Quote) -> Self {
        Self {
            per_night: quote.per_unit(),
            base_fare: quote.base_fare(),
            agent_commission: quote.agent_commission(),
            total_price: quote.total_price(),
            rule_id: quote.rule_id(),
        }
    }
}

/// Booking payload returned by the agent booking endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    /// Identifier of the created booking.
    pub booking_id: BookingId,
    /// Lifecycle status, `pending` on creation.
    pub status: BookingStatus,
    /// Booked vehicle type.
    pub vehicle_type: String,
    /// Pickup location.
    pub pickup_location: String,
    /// Dropoff location.
    pub dropoff_location: String,
    /// Travel date, when one was given.
    pub travel_date: Option<NaiveDate>,
    /// Route distance in km.
    pub distance_km: Decimal,
    /// Locked-in customer price.
    pub price: Money,
    /// Resolved commission amount.
    pub commission_amount: Money,
    /// Commission as a percentage of the price.
    pub commission_percent: Percent,
}

impl BookingResponse {
    fn from_booking(booking: &Booking) -> Self {
        Self {
            booking_id: booking.id(),
            status: booking.status(),
            vehicle_type: booking.vehicle_type().to_owned(),
            pickup_location: booking.pickup_location().to_owned(),
            dropoff_location: booking.dropoff_location().to_owned(),
            travel_date: booking.travel_date(),
            distance_km: booking.distance_km(),
            price: booking.price(),
            commission_amount: booking.commission_amount(),
            commission_percent: booking.commission_percent(),
        }
    }
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"healthy"` when the service responds.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TransportQuoteBody {
    vehicle_type: Option<String>,
    distance_km: Option<Decimal>,
    agent_commission_percent: Option<Decimal>,
    profit_percent: Option<Decimal>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HotelQuoteBody {
    city: Option<String>,
    hotel_star: Option<i16>,
    room_type: Option<String>,
    nights: Option<i32>,
    base_per_night_manual: Option<Decimal>,
    agent_commission_percent: Option<Decimal>,
    profit_percent: Option<Decimal>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FlightQuoteBody {
    from: Option<String>,
    to: Option<String>,
    cabin_class: Option<String>,
    airline_code: Option<String>,
    base_fare_manual: Option<Decimal>,
    agent_commission_percent: Option<Decimal>,
    profit_percent: Option<Decimal>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BookingBody {
    vehicle_type: Option<String>,
    distance_km: Option<Decimal>,
    pickup_location: Option<String>,
    dropoff_location: Option<String>,
    travel_date: Option<NaiveDate>,
}

fn parse_body<T: serde::de::DeserializeOwned>(raw: &serde_json::Value) -> DomainResult<T> {
    serde_json::from_value(raw.clone()).map_err(|e| DomainError::invalid_body(e.to_string()))
}

fn transport_request(raw: &serde_json::Value) -> DomainResult<TransportQuoteRequest> {
    let body: TransportQuoteBody = parse_body(raw)?;
    let overrides = PercentOverrides::new(body.agent_commission_percent, body.profit_percent)?;
    TransportQuoteRequest::new(body.vehicle_type, body.distance_km, overrides)
}

fn hotel_request(raw: &serde_json::Value) -> DomainResult<HotelQuoteRequest> {
    let body: HotelQuoteBody = parse_body(raw)?;
    let overrides = PercentOverrides::new(body.agent_commission_percent, body.profit_percent)?;
    HotelQuoteRequest::new(
        body.city,
        body.hotel_star,
        body.room_type,
        body.nights,
        body.base_per_night_manual,
        overrides,
    )
}

fn flight_request(raw: &serde_json::Value) -> DomainResult<FlightQuoteRequest> {
    let body: FlightQuoteBody = parse_body(raw)?;
    let overrides = PercentOverrides::new(body.agent_commission_percent, body.profit_percent)?;
    FlightQuoteRequest::new(
        body.from,
        body.to,
        body.cabin_class,
        body.airline_code,
        body.base_fare_manual,
        overrides,
    )
}

fn booking_request(raw: &serde_json::Value) -> DomainResult<TransportBookingRequest> {
    let body: BookingBody = parse_body(raw)?;
    TransportBookingRequest::new(
        body.vehicle_type,
        body.distance_km,
        body.pickup_location,
        body.dropoff_location,
        body.travel_date,
    )
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// `POST /rates/transport/quote`
///
/// # Errors
///
/// Returns [`ApiError`] for invalid input or a failed resolution.
pub async fn quote_transport(
    State(state): State<Arc<AppState>>,
    Json(raw): Json<serde_json::Value>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let request = transport_request(&raw);
    let quote = state.transport_quotes.quote(raw, request, today()).await?;
    Ok(Json(QuoteResponse::from_quote(&quote)))
}

/// `POST /rates/hotel/quote`
///
/// # Errors
///
/// Returns [`ApiError`] for invalid input, no resolvable nightly rate,
/// or a failed resolution.
pub async fn quote_hotel(
    State(state): State<Arc<AppState>>,
    Json(raw): Json<serde_json::Value>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let request = hotel_request(&raw);
    let quote = state.hotel_quotes.quote(raw, request, today()).await?;
    Ok(Json(QuoteResponse::from_quote(&quote)))
}

/// `POST /rates/flight/quote`
///
/// # Errors
///
/// Returns [`ApiError`] for invalid input or a failed resolution.
pub async fn quote_flight(
    State(state): State<Arc<AppState>>,
    Json(raw): Json<serde_json::Value>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let request = flight_request(&raw);
    let quote = state.flight_quotes.quote(raw, request, today()).await?;
    Ok(Json(QuoteResponse::from_quote(&quote)))
}

/// `POST /agent/transport/bookings`
///
/// Authenticates the agent via the `X-Api-Key` header, prices the trip
/// through the transport quote flow, resolves the agent's commission,
/// and persists the booking.
///
/// # Errors
///
/// Returns [`ApiError`] for a missing or unknown key, an inactive
/// agent, invalid input, or a storage failure.
pub async fn create_agent_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(raw): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiError> {
    let api_key = headers
        .get("x-api-key")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let request = booking_request(&raw);
    let booking = state
        .bookings
        .create_booking(api_key, raw, request, today())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(BookingResponse::from_booking(&booking)),
    ))
}

/// `GET /health`
#[allow(clippy::unused_async)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_owned(),
        service: env!("CARGO_PKG_NAME").to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}
