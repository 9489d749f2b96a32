//! # Application Errors
//!
//! Error types for the application layer.
//!
//! These errors represent failures during quote or booking execution,
//! spanning domain violations, storage failures, and agent
//! authentication.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)          - Validation and pricing failures
//! ├── Repository(RepositoryError)  - Storage failures
//! ├── UnknownAgent                 - API key matches no agent
//! ├── AgentInactive                - Agent exists but is deactivated
//! └── Internal(String)             - Unexpected failures
//! ```
//!
//! Domain errors pass through unchanged so the caller sees the exact
//! validation message (e.g. `"vehicle_type is required"`).
//!
//! # Examples
//!
//! ```
//! use rate_engine::application::error::ApplicationError;
//! use rate_engine::domain::errors::DomainError;
//!
//! let err: ApplicationError = DomainError::missing("distance_km").into();
//! assert!(err.is_client_error());
//! assert_eq!(err.to_string(), "distance_km is required");
//! ```

use crate::domain::errors::DomainError;
use crate::infrastructure::persistence::traits::RepositoryError;
use thiserror::Error;

/// Application layer error.
///
/// Wraps domain and repository errors with the agent-authentication
/// outcomes the booking flow adds.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from validation or pricing.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Storage failure.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// The presented API key matches no agent.
    #[error("unknown api key")]
    UnknownAgent,

    /// The agent exists but has been deactivated.
    #[error("agent is not active")]
    AgentInactive,

    /// Unexpected failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if the caller's input caused this error.
    ///
    /// Client errors map to HTTP 400; everything else that is not an
    /// authentication outcome is a server fault.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Domain(error) if error.is_client_input() || error.is_no_price())
    }

    /// Returns true if this is an agent authentication failure.
    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::UnknownAgent | Self::AgentInactive)
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_pass_through_unprefixed() {
        let err: ApplicationError = DomainError::missing("vehicle_type").into();
        assert_eq!(err.to_string(), "vehicle_type is required");

        let err: ApplicationError = DomainError::NoPriceAvailable.into();
        assert_eq!(err.to_string(), "no price available");
    }

    #[test]
    fn validation_and_pricing_errors_are_client_errors() {
        assert!(ApplicationError::from(DomainError::missing("city")).is_client_error());
        assert!(ApplicationError::from(DomainError::not_positive("nights")).is_client_error());
        assert!(ApplicationError::from(DomainError::NoPriceAvailable).is_client_error());
    }

    #[test]
    fn repository_errors_are_server_faults() {
        let err: ApplicationError = RepositoryError::query("connection reset").into();
        assert!(!err.is_client_error());
        assert!(err.to_string().contains("repository error"));
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn auth_outcomes_are_neither_client_nor_server_faults() {
        assert!(ApplicationError::UnknownAgent.is_auth_error());
        assert!(ApplicationError::AgentInactive.is_auth_error());
        assert!(!ApplicationError::UnknownAgent.is_client_error());
    }

    #[test]
    fn internal_error_carries_message() {
        let err = ApplicationError::internal("unexpected state");
        assert!(err.to_string().contains("unexpected state"));
        assert!(!err.is_client_error());
        assert!(!err.is_auth_error());
    }
}
