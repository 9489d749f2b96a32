//! # In-Memory Agent Repository
//!
//! In-memory implementation of [`AgentRepository`] for testing.
//!
//! Agents and their commission rules live in two thread-safe maps;
//! API-key lookup scans the agent map.

use crate::domain::entities::{Agent, AgentCommissionRule};
use crate::domain::value_objects::{AgentId, AgentRuleId, ServiceType};
use crate::infrastructure::persistence::traits::{AgentRepository, RepositoryResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`AgentRepository`].
#[derive(Debug, Clone)]
pub struct InMemoryAgentRepository {
    agents: Arc<RwLock<HashMap<AgentId, Agent>>>,
    rules: Arc<RwLock<HashMap<AgentRuleId, AgentCommissionRule>>>,
}

impl InMemoryAgentRepository {
    /// Creates a new empty in-memory agent repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            agents: Arc::new(RwLock::new(HashMap::new())),
            rules: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clears all agents and commission rules.
    pub async fn clear(&self) {
        self.agents.write().await.clear();
        self.rules.write().await.clear();
    }
}

impl Default for InMemoryAgentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AgentRepository for InMemoryAgentRepository {
    async fn find_by_api_key(&self, api_key: &str) -> RepositoryResult<Option<Agent>> {
        let agents = self.agents.read().await;
        Ok(agents
            .values()
            .find(|agent| agent.api_key() == api_key)
            .cloned())
    }

    async fn find_commission_rules(
        &self,
        agent_id: AgentId,
        service_type: ServiceType,
    ) -> RepositoryResult<Vec<AgentCommissionRule>> {
        let rules = self.rules.read().await;
        let mut matching: Vec<AgentCommissionRule> = rules
            .values()
            .filter(|rule| rule.agent_id() == agent_id && rule.service_type() == service_type)
            .cloned()
            .collect();
        matching.sort_by_key(|rule| (rule.priority(), rule.created_at(), rule.id().as_uuid()));
        Ok(matching)
    }

    async fn save(&self, agent: &Agent) -> RepositoryResult<()> {
        let mut agents = self.agents.write().await;
        agents.insert(agent.id(), agent.clone());
        Ok(())
    }

    async fn save_commission_rule(&self, rule: &AgentCommissionRule) -> RepositoryResult<()> {
        let mut rules = self.rules.write().await;
        rules.insert(rule.id(), rule.clone());
        Ok(())
    }
}
