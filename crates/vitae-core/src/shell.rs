//! Ports to the surrounding application shell.
//!
//! Navigation and user-facing acknowledgments are owned by whatever hosts the
//! view (a desktop window, a terminal, a test).

/// Performs one-way navigation away from the current view.
pub trait Navigator: Send + Sync {
    fn redirect(&self, route: &str);
}

/// Shows a blocking, alert-style acknowledgment to the user.
///
/// Implementations return once the user has seen the message.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}
