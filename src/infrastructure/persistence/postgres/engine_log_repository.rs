//! # PostgreSQL Engine Log Repository
//!
//! PostgreSQL implementation of [`EngineLogRepository`] using sqlx.
//!
//! This implementation provides append-only audit storage with JSONB
//! serialization for the raw request payload. Entries are only ever
//! inserted, never updated or deleted.

use crate::domain::entities::EngineLogEntry;
use crate::domain::value_objects::enums::ParseEnumError;
use crate::domain::value_objects::{LogId, Money, RuleId, ServiceType};
use crate::infrastructure::persistence::traits::{
    EngineLogRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of [`EngineLogRepository`].
///
/// Uses connection pooling via `sqlx::PgPool` and JSONB for request
/// payloads.
#[derive(Debug, Clone)]
pub struct PostgresEngineLogRepository {
    pool: PgPool,
}

impl PostgresEngineLogRepository {
    /// Creates a new PostgreSQL engine log repository.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EngineLogRepository for PostgresEngineLogRepository {
    async fn append(&self, entry: &EngineLogEntry) -> RepositoryResult<()> {
        sqlx::query(
            r"
            INSERT INTO rate_engine_logs (
                id, service_type, request, rule_id,
                base_fare, agent_commission, total_price,
                error, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(entry.id().as_uuid())
        .bind(entry.service_type().as_str())
        .bind(entry.request())
        .bind(entry.rule_id().map(|id| id.as_uuid()))
        .bind(entry.base_fare().map(|m| m.amount()))
        .bind(entry.agent_commission().map(|m| m.amount()))
        .bind(entry.total_price().map(|m| m.amount()))
        .bind(entry.error())
        .bind(entry.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(())
    }

    async fn recent(&self, limit: u32) -> RepositoryResult<Vec<EngineLogEntry>> {
        let rows: Vec<EngineLogRow> = sqlx::query_as(
            r"
            SELECT id, service_type, request, rule_id,
                   base_fare, agent_commission, total_price,
                   error, created_at
            FROM rate_engine_logs
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            ",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        rows.into_iter().map(|r| r.try_into_entry()).collect()
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM rate_engine_logs")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(count.unsigned_abs())
    }
}

/// Row type for engine log queries.
#[derive(Debug, sqlx::FromRow)]
struct EngineLogRow {
    id: Uuid,
    service_type: String,
    request: serde_json::Value,
    rule_id: Option<Uuid>,
    base_fare: Option<Decimal>,
    agent_commission: Option<Decimal>,
    total_price: Option<Decimal>,
    error: Option<String>,
    created_at: DateTime<Utc>,
}

impl EngineLogRow {
    /// Converts the row into an EngineLogEntry.
    fn try_into_entry(self) -> RepositoryResult<EngineLogEntry> {
        let service_type: ServiceType = self
            .service_type
            .parse()
            .map_err(|e: ParseEnumError| RepositoryError::serialization(e.to_string()))?;
        let base_fare = money_field(self.base_fare)?;
        let agent_commission = money_field(self.agent_commission)?;
        let total_price = money_field(self.total_price)?;

        Ok(EngineLogEntry::from_parts(
            LogId::from_uuid(self.id),
            service_type,
            self.request,
            self.rule_id.map(RuleId::from_uuid),
            base_fare,
            agent_commission,
            total_price,
            self.error,
            self.created_at,
        ))
    }
}

fn money_field(value: Option<Decimal>) -> RepositoryResult<Option<Money>> {
    value
        .map(Money::new)
        .transpose()
        .map_err(|e| RepositoryError::serialization(e.to_string()))
}
