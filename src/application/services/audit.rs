//! # Audit Logger
//!
//! Best-effort persistence of one engine log entry per resolution
//! attempt.
//!
//! Every quote invocation, successful or not, produces exactly one
//! [`EngineLogEntry`]. A failing log write never masks the primary
//! outcome: write errors are reported to server-side diagnostics and
//! otherwise swallowed.

use crate::domain::entities::{EngineLogEntry, Quote};
use crate::domain::value_objects::ServiceType;
use crate::infrastructure::persistence::traits::EngineLogRepository;
use std::sync::Arc;

/// Writes engine log entries without ever failing the caller.
#[derive(Debug, Clone)]
pub struct AuditLogger {
    logs: Arc<dyn EngineLogRepository>,
}

impl AuditLogger {
    /// Creates an audit logger over the given log repository.
    #[must_use]
    pub fn new(logs: Arc<dyn EngineLogRepository>) -> Self {
        Self { logs }
    }

    /// Records a successful resolution.
    pub async fn record_success(
        &self,
        service_type: ServiceType,
        request: serde_json::Value,
        quote: &Quote,
    ) {
        self.append(EngineLogEntry::success(service_type, request, quote))
            .await;
    }

    /// Records a failed resolution with its error message.
    pub async fn record_failure(
        &self,
        service_type: ServiceType,
        request: serde_json::Value,
        error: impl Into<String>,
    ) {
        self.append(EngineLogEntry::failure(service_type, request, error))
            .await;
    }

    async fn append(&self, entry: EngineLogEntry) {
        if let Err(error) = self.logs.append(&entry).await {
            tracing::warn!(log_id = %entry.id(), error = %error, "engine log write failed");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::entities::BaseFare;
    use crate::domain::value_objects::{Money, Percent};
    use crate::infrastructure::persistence::in_memory::InMemoryEngineLogRepository;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn quote() -> Quote {
        Quote::compute(
            None,
            BaseFare::flat(Money::new(Decimal::new(125, 0)).unwrap()),
            Percent::ZERO,
            Percent::ZERO,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn success_appends_one_entry() {
        let logs = Arc::new(InMemoryEngineLogRepository::new());
        let audit = AuditLogger::new(logs.clone());

        audit
            .record_success(
                ServiceType::Transport,
                json!({"vehicle_type": "sedan"}),
                &quote(),
            )
            .await;

        assert_eq!(logs.count().await.unwrap(), 1);
        let entries = logs.recent(10).await.unwrap();
        assert!(entries[0].is_success());
    }

    #[tokio::test]
    async fn failure_appends_one_entry_with_message() {
        let logs = Arc::new(InMemoryEngineLogRepository::new());
        let audit = AuditLogger::new(logs.clone());

        audit
            .record_failure(ServiceType::Hotel, json!({}), "no price available")
            .await;

        let entries = logs.recent(10).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].error(), Some("no price available"));
    }
}
