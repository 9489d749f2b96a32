//! # PostgreSQL Pricing Rule Repository
//!
//! PostgreSQL implementation of [`PricingRuleRepository`] using sqlx.
//!
//! Match criteria and fare columns are nullable so unset criteria behave
//! as wildcards exactly as the domain entity defines them.

use crate::domain::entities::PricingRule;
use crate::domain::value_objects::enums::ParseEnumError;
use crate::domain::value_objects::{PricingMode, RuleId, ServiceType};
use crate::infrastructure::persistence::traits::{
    PricingRuleRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

const SELECT_COLUMNS: &str = r"
    SELECT id, service_type, active, priority,
           vehicle_type, city, star_rating, room_type,
           origin, destination, cabin_class, airline_code,
           min_distance_km, max_distance_km, min_nights, max_nights,
           pricing_mode, base_flat, base_per_unit,
           agent_commission_percent, profit_percent,
           valid_from, valid_to, created_at, updated_at
    FROM rate_rules
";

/// PostgreSQL implementation of [`PricingRuleRepository`].
///
/// Uses connection pooling via `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresPricingRuleRepository {
    pool: PgPool,
}

impl PostgresPricingRuleRepository {
    /// Creates a new PostgreSQL pricing rule repository.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PricingRuleRepository for PostgresPricingRuleRepository {
    async fn find_active(&self, service_type: ServiceType) -> RepositoryResult<Vec<PricingRule>> {
        let query = format!(
            "{SELECT_COLUMNS} WHERE service_type = $1 AND active = TRUE \
             ORDER BY priority ASC, created_at ASC, id ASC"
        );
        let rows: Vec<PricingRuleRow> = sqlx::query_as(&query)
            .bind(service_type.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::query(e.to_string()))?;

        rows.into_iter().map(|r| r.try_into_rule()).collect()
    }

    async fn get(&self, id: RuleId) -> RepositoryResult<Option<PricingRule>> {
        let query = format!("{SELECT_COLUMNS} WHERE id = $1");
        let row: Option<PricingRuleRow> = sqlx::query_as(&query)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::query(e.to_string()))?;

        row.map(|r| r.try_into_rule()).transpose()
    }

    async fn save(&self, rule: &PricingRule) -> RepositoryResult<()> {
        sqlx::query(
            r"
            INSERT INTO rate_rules (
                id, service_type, active, priority,
                vehicle_type, city, star_rating, room_type,
                origin, destination, cabin_class, airline_code,
                min_distance_km, max_distance_km, min_nights, max_nights,
                pricing_mode, base_flat, base_per_unit,
                agent_commission_percent, profit_percent,
                valid_from, valid_to, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                      $13, $14, $15, $16, $17, $18, $19, $20, $21, $22,
                      $23, $24, $25)
            ON CONFLICT (id) DO UPDATE SET
                service_type = EXCLUDED.service_type,
                active = EXCLUDED.active,
                priority = EXCLUDED.priority,
                vehicle_type = EXCLUDED.vehicle_type,
                city = EXCLUDED.city,
                star_rating = EXCLUDED.star_rating,
                room_type = EXCLUDED.room_type,
                origin = EXCLUDED.origin,
                destination = EXCLUDED.destination,
                cabin_class = EXCLUDED.cabin_class,
                airline_code = EXCLUDED.airline_code,
                min_distance_km = EXCLUDED.min_distance_km,
                max_distance_km = EXCLUDED.max_distance_km,
                min_nights = EXCLUDED.min_nights,
                max_nights = EXCLUDED.max_nights,
                pricing_mode = EXCLUDED.pricing_mode,
                base_flat = EXCLUDED.base_flat,
                base_per_unit = EXCLUDED.base_per_unit,
                agent_commission_percent = EXCLUDED.agent_commission_percent,
                profit_percent = EXCLUDED.profit_percent,
                valid_from = EXCLUDED.valid_from,
                valid_to = EXCLUDED.valid_to,
                updated_at = EXCLUDED.updated_at
            ",
        )
        .bind(rule.id().as_uuid())
        .bind(rule.service_type().as_str())
        .bind(rule.active())
        .bind(rule.priority())
        .bind(rule.vehicle_type())
        .bind(rule.city())
        .bind(rule.star_rating())
        .bind(rule.room_type())
        .bind(rule.origin())
        .bind(rule.destination())
        .bind(rule.cabin_class())
        .bind(rule.airline_code())
        .bind(rule.min_distance_km())
        .bind(rule.max_distance_km())
        .bind(rule.min_nights())
        .bind(rule.max_nights())
        .bind(rule.pricing_mode().as_str())
        .bind(rule.base_flat().map(|m| m.amount()))
        .bind(rule.base_per_unit().map(|m| m.amount()))
        .bind(rule.agent_commission_percent().map(|p| p.value()))
        .bind(rule.profit_percent().map(|p| p.value()))
        .bind(rule.valid_from())
        .bind(rule.valid_to())
        .bind(rule.created_at())
        .bind(rule.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(())
    }
}

/// Row type for pricing rule queries.
#[derive(Debug, sqlx::FromRow)]
struct PricingRuleRow {
    id: Uuid,
    service_type: String,
    active: bool,
    priority: i32,
    vehicle_type: Option<String>,
    city: Option<String>,
    star_rating: Option<i16>,
    room_type: Option<String>,
    origin: Option<String>,
    destination: Option<String>,
    cabin_class: Option<String>,
    airline_code: Option<String>,
    min_distance_km: Option<Decimal>,
    max_distance_km: Option<Decimal>,
    min_nights: Option<i32>,
    max_nights: Option<i32>,
    pricing_mode: String,
    base_flat: Option<Decimal>,
    base_per_unit: Option<Decimal>,
    agent_commission_percent: Option<Decimal>,
    profit_percent: Option<Decimal>,
    valid_from: Option<NaiveDate>,
    valid_to: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PricingRuleRow {
    /// Converts the row into a PricingRule.
    fn try_into_rule(self) -> RepositoryResult<PricingRule> {
        let service_type: ServiceType = self
            .service_type
            .parse()
            .map_err(|e: ParseEnumError| RepositoryError::serialization(e.to_string()))?;
        let pricing_mode: PricingMode = self
            .pricing_mode
            .parse()
            .map_err(|e: ParseEnumError| RepositoryError::serialization(e.to_string()))?;

        let mut builder = PricingRule::builder(service_type, self.priority)
            .id(RuleId::from_uuid(self.id))
            .active(self.active)
            .pricing_mode(pricing_mode)
            .timestamps(self.created_at, self.updated_at);
        if let Some(value) = self.vehicle_type {
            builder = builder.vehicle_type(value);
        }
        if let Some(value) = self.city {
            builder = builder.city(value);
        }
        if let Some(value) = self.star_rating {
            builder = builder.star_rating(value);
        }
        if let Some(value) = self.room_type {
            builder = builder.room_type(value);
        }
        if let Some(value) = self.origin {
            builder = builder.origin(value);
        }
        if let Some(value) = self.destination {
            builder = builder.destination(value);
        }
        if let Some(value) = self.cabin_class {
            builder = builder.cabin_class(value);
        }
        if let Some(value) = self.airline_code {
            builder = builder.airline_code(value);
        }
        if let Some(value) = self.min_distance_km {
            builder = builder.min_distance_km(value);
        }
        if let Some(value) = self.max_distance_km {
            builder = builder.max_distance_km(value);
        }
        if let Some(value) = self.min_nights {
            builder = builder.min_nights(value);
        }
        if let Some(value) = self.max_nights {
            builder = builder.max_nights(value);
        }
        if let Some(value) = self.base_flat {
            builder = builder.base_flat(value);
        }
        if let Some(value) = self.base_per_unit {
            builder = builder.base_per_unit(value);
        }
        if let Some(value) = self.agent_commission_percent {
            builder = builder.agent_commission_percent(value);
        }
        if let Some(value) = self.profit_percent {
            builder = builder.profit_percent(value);
        }
        if let Some(value) = self.valid_from {
            builder = builder.valid_from(value);
        }
        if let Some(value) = self.valid_to {
            builder = builder.valid_to(value);
        }

        builder
            .build()
            .map_err(|e| RepositoryError::serialization(e.to_string()))
    }
}
