//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages should apply identical behavior when the backend rejects the current
//! access token: drop the session and let the route guard redirect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::ApiError;
use crate::state::auth::AuthSession;

/// Turn an authorized-call failure into a user-facing message.
///
/// A 401 logs the user out and returns `None`; the protected route then
/// redirects to the login page on its next render.
pub fn handle_api_error(session: &AuthSession, err: &ApiError) -> Option<String> {
    if matches!(err, ApiError::Unauthorized) {
        log::info!("auth: backend rejected access token, signing out");
        if let Err(e) = session.logout() {
            log::warn!("auth: sign-out after 401 left stored tokens behind: {e}");
        }
        return None;
    }
    Some(err.to_string())
}

/// Access token for an authorized call, or `None` once signed out.
pub fn require_token(session: &AuthSession) -> Option<String> {
    let token = session.access_token();
    if token.is_none() {
        log::debug!("auth: skipping authorized call without a session");
    }
    token
}
