//! # PostgreSQL Booking Repository
//!
//! PostgreSQL implementation of [`BookingRepository`] using sqlx.

use crate::domain::entities::Booking;
use crate::domain::value_objects::enums::ParseEnumError;
use crate::domain::value_objects::{AgentId, BookingId, BookingStatus, Money, Percent};
use crate::infrastructure::persistence::traits::{
    BookingRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

const SELECT_COLUMNS: &str = r"
    SELECT id, agent_id, vehicle_type, pickup_location, dropoff_location,
           travel_date, distance_km, price, commission_amount,
           commission_percent, status, created_at, updated_at
    FROM bookings
";

/// PostgreSQL implementation of [`BookingRepository`].
///
/// Uses connection pooling via `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresBookingRepository {
    pool: PgPool,
}

impl PostgresBookingRepository {
    /// Creates a new PostgreSQL booking repository.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepository {
    async fn save(&self, booking: &Booking) -> RepositoryResult<()> {
        sqlx::query(
            r"
            INSERT INTO bookings (
                id, agent_id, vehicle_type, pickup_location, dropoff_location,
                travel_date, distance_km, price, commission_amount,
                commission_percent, status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (id) DO UPDATE SET
                vehicle_type = EXCLUDED.vehicle_type,
                pickup_location = EXCLUDED.pickup_location,
                dropoff_location = EXCLUDED.dropoff_location,
                travel_date = EXCLUDED.travel_date,
                distance_km = EXCLUDED.distance_km,
                price = EXCLUDED.price,
                commission_amount = EXCLUDED.commission_amount,
                commission_percent = EXCLUDED.commission_percent,
                status = EXCLUDED.status,
                updated_at = EXCLUDED.updated_at
            ",
        )
        .bind(booking.id().as_uuid())
        .bind(booking.agent_id().as_uuid())
        .bind(booking.vehicle_type())
        .bind(booking.pickup_location())
        .bind(booking.dropoff_location())
        .bind(booking.travel_date())
        .bind(booking.distance_km())
        .bind(booking.price().amount())
        .bind(booking.commission_amount().amount())
        .bind(booking.commission_percent().value())
        .bind(booking.status().as_str())
        .bind(booking.created_at())
        .bind(booking.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(())
    }

    async fn get(&self, id: BookingId) -> RepositoryResult<Option<Booking>> {
        let query = format!("{SELECT_COLUMNS} WHERE id = $1");
        let row: Option<BookingRow> = sqlx::query_as(&query)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::query(e.to_string()))?;

        row.map(|r| r.try_into_booking()).transpose()
    }

    async fn find_by_agent(&self, agent_id: AgentId) -> RepositoryResult<Vec<Booking>> {
        let query = format!("{SELECT_COLUMNS} WHERE agent_id = $1 ORDER BY created_at ASC, id ASC");
        let rows: Vec<BookingRow> = sqlx::query_as(&query)
            .bind(agent_id.as_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::query(e.to_string()))?;

        rows.into_iter().map(|r| r.try_into_booking()).collect()
    }
}

/// Row type for booking queries.
#[derive(Debug, sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    agent_id: Uuid,
    vehicle_type: String,
    pickup_location: String,
    dropoff_location: String,
    travel_date: Option<NaiveDate>,
    distance_km: Decimal,
    price: Decimal,
    commission_amount: Decimal,
    commission_percent: Decimal,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BookingRow {
    /// Converts the row into a Booking.
    fn try_into_booking(self) -> RepositoryResult<Booking> {
        let status: BookingStatus = self
            .status
            .parse()
            .map_err(|e: ParseEnumError| RepositoryError::serialization(e.to_string()))?;
        let price =
            Money::new(self.price).map_err(|e| RepositoryError::serialization(e.to_string()))?;
        let commission_amount = Money::new(self.commission_amount)
            .map_err(|e| RepositoryError::serialization(e.to_string()))?;
        let commission_percent = Percent::new(self.commission_percent)
            .map_err(|e| RepositoryError::serialization(e.to_string()))?;

        Booking::from_parts(
            BookingId::from_uuid(self.id),
            AgentId::from_uuid(self.agent_id),
            self.vehicle_type,
            self.pickup_location,
            self.dropoff_location,
            self.travel_date,
            self.distance_km,
            price,
            commission_amount,
            commission_percent,
            status,
            self.created_at,
            self.updated_at,
        )
        .map_err(|e| RepositoryError::serialization(e.to_string()))
    }
}
