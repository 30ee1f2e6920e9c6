//! Session provider port.
//!
//! The profile view never reads global auth state; it is handed a
//! [`SessionProvider`] and reacts to the statuses it publishes.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::user::Identity;

/// Authentication status published by a session provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SessionStatus {
    /// The provider has not decided yet.
    Resolving,
    /// A user is signed in.
    Authenticated(Identity),
    /// No user is signed in.
    Unauthenticated,
}

impl SessionStatus {
    /// The authenticated identity, if any.
    pub fn identity(&self) -> Option<Identity> {
        match self {
            SessionStatus::Authenticated(identity) => Some(*identity),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, SessionStatus::Resolving)
    }
}

impl Default for SessionStatus {
    fn default() -> Self {
        SessionStatus::Resolving
    }
}

/// Supplies the current identity and notifies about changes.
pub trait SessionProvider: Send + Sync {
    /// Current status snapshot.
    fn status(&self) -> SessionStatus;

    /// Receiver that observes every status change from now on.
    fn subscribe(&self) -> watch::Receiver<SessionStatus>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_only_when_authenticated() {
        assert_eq!(SessionStatus::Resolving.identity(), None);
        assert_eq!(SessionStatus::Unauthenticated.identity(), None);
        assert_eq!(
            SessionStatus::Authenticated(Identity(3)).identity(),
            Some(Identity(3))
        );
    }

    #[test]
    fn test_default_is_resolving() {
        assert!(!SessionStatus::default().is_resolved());
        assert!(SessionStatus::Unauthenticated.is_resolved());
    }
}
