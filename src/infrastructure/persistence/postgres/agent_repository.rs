//! # PostgreSQL Agent Repository
//!
//! PostgreSQL implementation of [`AgentRepository`] using sqlx.
//!
//! Agents and their commission rules live in separate tables joined by
//! the agent id; rule rows cascade when an agent is deleted.

use crate::domain::entities::{Agent, AgentCommissionRule};
use crate::domain::value_objects::enums::ParseEnumError;
use crate::domain::value_objects::{AgentId, AgentRuleId, CommissionType, ServiceType};
use crate::infrastructure::persistence::traits::{
    AgentRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of [`AgentRepository`].
///
/// Uses connection pooling via `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresAgentRepository {
    pool: PgPool,
}

impl PostgresAgentRepository {
    /// Creates a new PostgreSQL agent repository.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AgentRepository for PostgresAgentRepository {
    async fn find_by_api_key(&self, api_key: &str) -> RepositoryResult<Option<Agent>> {
        let row: Option<AgentRow> = sqlx::query_as(
            r"
            SELECT id, name, api_key, default_commission_percent,
                   active, created_at, updated_at
            FROM agents
            WHERE api_key = $1
            ",
        )
        .bind(api_key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        row.map(|r| r.try_into_agent()).transpose()
    }

    async fn find_commission_rules(
        &self,
        agent_id: AgentId,
        service_type: ServiceType,
    ) -> RepositoryResult<Vec<AgentCommissionRule>> {
        let rows: Vec<AgentRuleRow> = sqlx::query_as(
            r"
            SELECT id, agent_id, service_type, priority, commission_type,
                   rate, valid_from, valid_to, active, created_at
            FROM agent_commission_rules
            WHERE agent_id = $1 AND service_type = $2
            ORDER BY priority ASC, created_at ASC, id ASC
            ",
        )
        .bind(agent_id.as_uuid())
        .bind(service_type.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        rows.into_iter().map(|r| r.try_into_rule()).collect()
    }

    async fn save(&self, agent: &Agent) -> RepositoryResult<()> {
        sqlx::query(
            r"
            INSERT INTO agents (
                id, name, api_key, default_commission_percent,
                active, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                api_key = EXCLUDED.api_key,
                default_commission_percent = EXCLUDED.default_commission_percent,
                active = EXCLUDED.active,
                updated_at = EXCLUDED.updated_at
            ",
        )
        .bind(agent.id().as_uuid())
        .bind(agent.name())
        .bind(agent.api_key())
        .bind(agent.default_commission_percent().map(|p| p.value()))
        .bind(agent.is_active())
        .bind(agent.created_at())
        .bind(agent.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(())
    }

    async fn save_commission_rule(&self, rule: &AgentCommissionRule) -> RepositoryResult<()> {
        sqlx::query(
            r"
            INSERT INTO agent_commission_rules (
                id, agent_id, service_type, priority, commission_type,
                rate, valid_from, valid_to, active, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (id) DO UPDATE SET
                agent_id = EXCLUDED.agent_id,
                service_type = EXCLUDED.service_type,
                priority = EXCLUDED.priority,
                commission_type = EXCLUDED.commission_type,
                rate = EXCLUDED.rate,
                valid_from = EXCLUDED.valid_from,
                valid_to = EXCLUDED.valid_to,
                active = EXCLUDED.active
            ",
        )
        .bind(rule.id().as_uuid())
        .bind(rule.agent_id().as_uuid())
        .bind(rule.service_type().as_str())
        .bind(rule.priority())
        .bind(rule.commission_type().as_str())
        .bind(rule.rate())
        .bind(rule.valid_from())
        .bind(rule.valid_to())
        .bind(rule.active())
        .bind(rule.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;

        Ok(())
    }
}

/// Row type for agent queries.
#[derive(Debug, sqlx::FromRow)]
struct AgentRow {
    id: Uuid,
    name: String,
    api_key: String,
    default_commission_percent: Option<Decimal>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AgentRow {
    /// Converts the row into an Agent.
    fn try_into_agent(self) -> RepositoryResult<Agent> {
        Agent::from_parts(
            AgentId::from_uuid(self.id),
            self.name,
            self.api_key,
            self.default_commission_percent,
            self.active,
            self.created_at,
            self.updated_at,
        )
        .map_err(|e| RepositoryError::serialization(e.to_string()))
    }
}

/// Row type for commission rule queries.
#[derive(Debug, sqlx::FromRow)]
struct AgentRuleRow {
    id: Uuid,
    agent_id: Uuid,
    service_type: String,
    priority: i32,
    commission_type: String,
    rate: Decimal,
    valid_from: NaiveDate,
    valid_to: Option<NaiveDate>,
    active: bool,
    created_at: DateTime<Utc>,
}

impl AgentRuleRow {
    /// Converts the row into an AgentCommissionRule.
    fn try_into_rule(self) -> RepositoryResult<AgentCommissionRule> {
        let service_type: ServiceType = self
            .service_type
            .parse()
            .map_err(|e: ParseEnumError| RepositoryError::serialization(e.to_string()))?;
        let commission_type: CommissionType = self
            .commission_type
            .parse()
            .map_err(|e: ParseEnumError| RepositoryError::serialization(e.to_string()))?;

        AgentCommissionRule::from_parts(
            AgentRuleId::from_uuid(self.id),
            AgentId::from_uuid(self.agent_id),
            service_type,
            self.priority,
            commission_type,
            self.rate,
            self.valid_from,
            self.valid_to,
            self.active,
            self.created_at,
        )
        .map_err(|e| RepositoryError::serialization(e.to_string()))
    }
}
