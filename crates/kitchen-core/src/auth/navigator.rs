//! Navigation signals raised by the auth controller
//!
//! The core never moves the user anywhere itself. It tells the collaborator
//! that the login surface should be shown and lets it decide what that means
//! (a page redirect, a CLI hint, nothing at all).

/// Receives navigation requests from the auth controller
pub trait Navigator: Send + Sync {
    /// The user must (re)authenticate
    fn redirect_to_login(&self);
}

/// Navigator that ignores every signal
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn redirect_to_login(&self) {}
}
