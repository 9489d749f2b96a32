//! # In-Memory Booking Repository
//!
//! In-memory implementation of [`BookingRepository`] for testing.

use crate::domain::entities::Booking;
use crate::domain::value_objects::{AgentId, BookingId};
use crate::infrastructure::persistence::traits::{BookingRepository, RepositoryResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`BookingRepository`].
#[derive(Debug, Clone)]
pub struct InMemoryBookingRepository {
    storage: Arc<RwLock<HashMap<BookingId, Booking>>>,
}

impl InMemoryBookingRepository {
    /// Creates a new empty in-memory booking repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clears all bookings from the repository.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

impl Default for InMemoryBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn save(&self, booking: &Booking) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        storage.insert(booking.id(), booking.clone());
        Ok(())
    }

    async fn get(&self, id: BookingId) -> RepositoryResult<Option<Booking>> {
        let storage = self.storage.read().await;
        Ok(storage.get(&id).cloned())
    }

    async fn find_by_agent(&self, agent_id: AgentId) -> RepositoryResult<Vec<Booking>> {
        let storage = self.storage.read().await;
        let mut bookings: Vec<Booking> = storage
            .values()
            .filter(|booking| booking.agent_id() == agent_id)
            .cloned()
            .collect();
        bookings.sort_by_key(|booking| (booking.created_at(), booking.id().as_uuid()));
        Ok(bookings)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Money, Percent};
    use rust_decimal::Decimal;

    fn booking(agent_id: AgentId) -> Booking {
        Booking::new(
            agent_id,
            "gmc",
            "Airport T1",
            "Palm Resort",
            None,
            Decimal::new(100, 0),
            Money::new(Decimal::new(460, 0)).unwrap(),
            Money::new(Decimal::new(46, 0)).unwrap(),
            Percent::new(Decimal::new(10, 0)).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn save_and_get() {
        let repo = InMemoryBookingRepository::new();
        let booking = booking(AgentId::new());

        repo.save(&booking).await.unwrap();

        let retrieved = repo.get(booking.id()).await.unwrap();
        assert_eq!(retrieved, Some(booking));
    }

    #[tokio::test]
    async fn get_nonexistent_returns_none() {
        let repo = InMemoryBookingRepository::new();
        assert!(repo.get(BookingId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_agent_filters_other_agents() {
        let repo = InMemoryBookingRepository::new();
        let agent = AgentId::new();
        let other = AgentId::new();

        repo.save(&booking(agent)).await.unwrap();
        repo.save(&booking(agent)).await.unwrap();
        repo.save(&booking(other)).await.unwrap();

        let bookings = repo.find_by_agent(agent).await.unwrap();
        assert_eq!(bookings.len(), 2);
        assert!(bookings.iter().all(|b| b.agent_id() == agent));
    }
}
