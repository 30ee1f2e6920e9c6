//! In-memory session provider backed by a `tokio::sync::watch` channel.

use tokio::sync::watch;

use vitae_core::session::{SessionProvider, SessionStatus};
use vitae_core::user::Identity;

/// Session provider whose status is set by the host application.
///
/// Starts in [`SessionStatus::Resolving`] unless built with an initial status.
#[derive(Debug, Clone)]
pub struct WatchSessionProvider {
    sender: watch::Sender<SessionStatus>,
}

impl WatchSessionProvider {
    pub fn new() -> Self {
        Self::with_status(SessionStatus::Resolving)
    }

    pub fn with_status(status: SessionStatus) -> Self {
        let (sender, _receiver) = watch::channel(status);
        Self { sender }
    }

    pub fn set_status(&self, status: SessionStatus) {
        tracing::debug!("[WatchSessionProvider] status -> {:?}", status);
        self.sender.send_replace(status);
    }

    pub fn set_authenticated(&self, identity: Identity) {
        self.set_status(SessionStatus::Authenticated(identity));
    }

    pub fn set_unauthenticated(&self) {
        self.set_status(SessionStatus::Unauthenticated);
    }
}

impl Default for WatchSessionProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionProvider for WatchSessionProvider {
    fn status(&self) -> SessionStatus {
        *self.sender.borrow()
    }

    fn subscribe(&self) -> watch::Receiver<SessionStatus> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_updates_without_subscribers() {
        let provider = WatchSessionProvider::new();
        assert_eq!(provider.status(), SessionStatus::Resolving);

        provider.set_authenticated(Identity(9));
        assert_eq!(provider.status(), SessionStatus::Authenticated(Identity(9)));
    }

    #[tokio::test]
    async fn test_subscribers_observe_changes() {
        let provider = WatchSessionProvider::new();
        let mut receiver = provider.subscribe();

        provider.set_unauthenticated();

        receiver.changed().await.unwrap();
        assert_eq!(*receiver.borrow_and_update(), SessionStatus::Unauthenticated);
    }
}
