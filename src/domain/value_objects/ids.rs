//! # Identifier Types
//!
//! UUID-backed identifiers for the engine's aggregates.
//!
//! Each identifier is a distinct newtype so a rule id can never be passed
//! where a booking id is expected. All of them serialize transparently as
//! the underlying UUID.
//!
//! # Examples
//!
//! ```
//! use rate_engine::domain::value_objects::ids::RuleId;
//!
//! let id = RuleId::new();
//! assert_ne!(id, RuleId::new());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wraps an existing UUID.
            #[must_use]
            pub const fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Returns the underlying UUID.
            #[inline]
            #[must_use]
            pub const fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }
    };
}

uuid_id!(
    /// Identifier of a pricing rule.
    RuleId
);

uuid_id!(
    /// Identifier of an agent-specific commission rule.
    AgentRuleId
);

uuid_id!(
    /// Identifier of an audit log entry.
    LogId
);

uuid_id!(
    /// Identifier of a booking agent.
    AgentId
);

uuid_id!(
    /// Identifier of a transport booking.
    BookingId
);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_generates_unique_ids() {
        assert_ne!(RuleId::new(), RuleId::new());
        assert_ne!(BookingId::new(), BookingId::new());
    }

    #[test]
    fn from_uuid_round_trips() {
        let raw = Uuid::new_v4();
        let id = AgentId::from_uuid(raw);
        assert_eq!(id.as_uuid(), raw);
    }

    #[test]
    fn display_matches_uuid() {
        let raw = Uuid::new_v4();
        assert_eq!(LogId::from_uuid(raw).to_string(), raw.to_string());
    }

    #[test]
    fn serde_is_transparent() {
        let raw = Uuid::new_v4();
        let id = RuleId::from_uuid(raw);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{raw}\""));
        let back: RuleId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
