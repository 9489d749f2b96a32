//! # In-Memory Engine Log Repository
//!
//! In-memory implementation of [`EngineLogRepository`] for testing.
//!
//! Entries are held in an append-ordered `Vec` behind a lock, matching
//! the append-only contract of the trait.

use crate::domain::entities::EngineLogEntry;
use crate::infrastructure::persistence::traits::{EngineLogRepository, RepositoryResult};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`EngineLogRepository`].
#[derive(Debug, Clone)]
pub struct InMemoryEngineLogRepository {
    storage: Arc<RwLock<Vec<EngineLogEntry>>>,
}

impl InMemoryEngineLogRepository {
    /// Creates a new empty in-memory log repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Clears all entries from the repository.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

impl Default for InMemoryEngineLogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EngineLogRepository for InMemoryEngineLogRepository {
    async fn append(&self, entry: &EngineLogEntry) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        storage.push(entry.clone());
        Ok(())
    }

    async fn recent(&self, limit: u32) -> RepositoryResult<Vec<EngineLogEntry>> {
        let storage = self.storage.read().await;
        Ok(storage
            .iter()
            .rev()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.len() as u64)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ServiceType;
    use serde_json::json;

    fn entry(marker: i64) -> EngineLogEntry {
        EngineLogEntry::failure(
            ServiceType::Transport,
            json!({ "marker": marker }),
            "no price available",
        )
    }

    #[tokio::test]
    async fn new_repository_is_empty() {
        let repo = InMemoryEngineLogRepository::new();
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn append_grows_the_log() {
        let repo = InMemoryEngineLogRepository::new();
        repo.append(&entry(1)).await.unwrap();
        repo.append(&entry(2)).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn recent_returns_newest_first() {
        let repo = InMemoryEngineLogRepository::new();
        for marker in 1..=3 {
            repo.append(&entry(marker)).await.unwrap();
        }

        let entries = repo.recent(2).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].request(), &json!({ "marker": 3 }));
        assert_eq!(entries[1].request(), &json!({ "marker": 2 }));
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let repo = InMemoryEngineLogRepository::new();
        repo.append(&entry(1)).await.unwrap();

        repo.clear().await;

        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
