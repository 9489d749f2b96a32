//! # In-Memory Pricing Rule Repository
//!
//! In-memory implementation of [`PricingRuleRepository`] for testing.
//!
//! This implementation uses a thread-safe `HashMap` for storage,
//! making it suitable for unit tests without database dependencies.

use crate::domain::entities::PricingRule;
use crate::domain::value_objects::{RuleId, ServiceType};
use crate::infrastructure::persistence::traits::{
    PricingRuleRepository, RepositoryResult,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`PricingRuleRepository`].
///
/// Uses a thread-safe `HashMap` for storage. Suitable for unit tests
/// without database dependencies.
#[derive(Debug, Clone)]
pub struct InMemoryPricingRuleRepository {
    storage: Arc<RwLock<HashMap<RuleId, PricingRule>>>,
}

impl InMemoryPricingRuleRepository {
    /// Creates a new empty in-memory rule repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clears all rules from the repository.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

impl Default for InMemoryPricingRuleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PricingRuleRepository for InMemoryPricingRuleRepository {
    async fn find_active(&self, service_type: ServiceType) -> RepositoryResult<Vec<PricingRule>> {
        let storage = self.storage.read().await;
        let mut rules: Vec<PricingRule> = storage
            .values()
            .filter(|rule| rule.service_type() == service_type && rule.active())
            .cloned()
            .collect();
        // deterministic tie order regardless of map iteration
        rules.sort_by_key(|rule| (rule.priority(), rule.created_at(), rule.id().as_uuid()));
        Ok(rules)
    }

    async fn get(&self, id: RuleId) -> RepositoryResult<Option<PricingRule>> {
        let storage = self.storage.read().await;
        Ok(storage.get(&id).cloned())
    }

    async fn save(&self, rule: &PricingRule) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        storage.insert(rule.id(), rule.clone());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn rule(service_type: ServiceType, priority: i32, active: bool) -> PricingRule {
        PricingRule::builder(service_type, priority)
            .active(active)
            .base_flat(Decimal::new(100, 0))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn save_and_get() {
        let repo = InMemoryPricingRuleRepository::new();
        let rule = rule(ServiceType::Transport, 1, true);

        repo.save(&rule).await.unwrap();

        let retrieved = repo.get(rule.id()).await.unwrap();
        assert_eq!(retrieved, Some(rule));
    }

    #[tokio::test]
    async fn get_nonexistent_returns_none() {
        let repo = InMemoryPricingRuleRepository::new();
        assert!(repo.get(RuleId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_active_filters_service_type_and_flag() {
        let repo = InMemoryPricingRuleRepository::new();
        repo.save(&rule(ServiceType::Transport, 1, true)).await.unwrap();
        repo.save(&rule(ServiceType::Transport, 2, false)).await.unwrap();
        repo.save(&rule(ServiceType::Hotel, 1, true)).await.unwrap();

        let transport = repo.find_active(ServiceType::Transport).await.unwrap();
        assert_eq!(transport.len(), 1);
        assert_eq!(transport[0].priority(), 1);
    }

    #[tokio::test]
    async fn find_active_orders_by_priority() {
        let repo = InMemoryPricingRuleRepository::new();
        repo.save(&rule(ServiceType::Flight, 30, true)).await.unwrap();
        repo.save(&rule(ServiceType::Flight, 10, true)).await.unwrap();
        repo.save(&rule(ServiceType::Flight, 20, true)).await.unwrap();

        let rules = repo.find_active(ServiceType::Flight).await.unwrap();
        let priorities: Vec<i32> = rules.iter().map(PricingRule::priority).collect();
        assert_eq!(priorities, vec![10, 20, 30]);
    }

    #[tokio::test]
    async fn save_replaces_existing_rule() {
        let repo = InMemoryPricingRuleRepository::new();
        let original = rule(ServiceType::Hotel, 1, true);
        repo.save(&original).await.unwrap();

        let updated = PricingRule::builder(ServiceType::Hotel, 5)
            .id(original.id())
            .build()
            .unwrap();
        repo.save(&updated).await.unwrap();

        let retrieved = repo.get(original.id()).await.unwrap().unwrap();
        assert_eq!(retrieved.priority(), 5);
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let repo = InMemoryPricingRuleRepository::new();
        repo.save(&rule(ServiceType::Transport, 1, true)).await.unwrap();

        repo.clear().await;

        assert!(repo.find_active(ServiceType::Transport).await.unwrap().is_empty());
    }
}
