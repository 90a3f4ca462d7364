//! Route-guard decision for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same three-way branch. Keeping it a pure
//! function of `(loading, authenticated)` lets the component layer re-run it
//! on each render without side effects.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// What a protected route should render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Startup recovery is still running; show a placeholder and wait.
    Placeholder,
    /// No session; navigate to `to`, replacing the current history entry.
    Redirect { to: String, replace: bool },
    /// Render the protected view unchanged.
    PassThrough,
}

/// Decide how a protected route renders.
///
/// A pending startup lookup always wins, so a user with a stored session is
/// never bounced to the login page before recovery finishes.
pub fn decide(loading: bool, authenticated: bool, login_path: &str) -> GuardDecision {
    if loading {
        GuardDecision::Placeholder
    } else if !authenticated {
        GuardDecision::Redirect { to: login_path.to_owned(), replace: true }
    } else {
        GuardDecision::PassThrough
    }
}
