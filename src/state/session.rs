//! Session state machine and write-through token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the single source of truth for whether the browser user
//! is signed in. Route guards read it on every render; only the login form and
//! the logout action mutate it.
//!
//! DESIGN
//! ======
//! Durable storage mirrors the in-memory state. Each mutation writes (or
//! clears) both token entries while holding the state write lock and swaps the
//! in-memory value last, so readers never see a new token with a stale flag or
//! a state that storage does not back.
//!
//! Recovery fails closed: any uncertainty while reading storage at startup
//! resolves to `Unauthenticated`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::{RefreshTokenPolicy, SessionConfig};
use crate::net::types::TokenPair;
use crate::util::storage::{StorageError, TokenStorage};

/// Errors surfaced by session mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),
    #[error("invalid token pair: {0}")]
    InvalidTokenPair(&'static str),
}

/// Authentication state of the current browser user.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Startup storage lookup has not completed.
    #[default]
    Unresolved,
    /// Tokens were issued by a login or recovered from storage.
    Authenticated { access_token: String, refresh_token: Option<String> },
    /// Never signed in, signed out, or recovery found nothing usable.
    Unauthenticated,
}

impl SessionState {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn access_token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { access_token, .. } => Some(access_token),
            Self::Unresolved | Self::Unauthenticated => None,
        }
    }

    pub fn refresh_token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { refresh_token, .. } => refresh_token.as_deref(),
            Self::Unresolved | Self::Unauthenticated => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Unresolved => "unresolved",
            Self::Authenticated { .. } => "authenticated",
            Self::Unauthenticated => "unauthenticated",
        }
    }
}

// Tokens never reach logs.
impl fmt::Debug for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authenticated { refresh_token, .. } => f
                .debug_struct("Authenticated")
                .field("access_token", &"<redacted>")
                .field("refresh_token", &refresh_token.as_ref().map(|_| "<redacted>"))
                .finish(),
            Self::Unresolved => f.write_str("Unresolved"),
            Self::Unauthenticated => f.write_str("Unauthenticated"),
        }
    }
}

/// Reject tokens that could not have come from the token endpoint.
pub fn validate_token_pair(pair: &TokenPair) -> Result<(), SessionError> {
    validate_token(&pair.access, "access token is empty", "access token contains whitespace")?;
    validate_token(&pair.refresh, "refresh token is empty", "refresh token contains whitespace")
}

fn validate_token(token: &str, empty: &'static str, whitespace: &'static str) -> Result<(), SessionError> {
    if token.trim().is_empty() {
        return Err(SessionError::InvalidTokenPair(empty));
    }
    if token.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(SessionError::InvalidTokenPair(whitespace));
    }
    Ok(())
}

/// Process-wide session holder over a durable token store.
pub struct SessionStore<S> {
    config: SessionConfig,
    storage: S,
    state: RwLock<SessionState>,
}

impl<S: TokenStorage> SessionStore<S> {
    pub fn new(config: SessionConfig, storage: S) -> Self {
        Self { config, storage, state: RwLock::new(SessionState::Unresolved) }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Recover a persisted session. Only the first call reads storage; later
    /// calls return the current state unchanged.
    pub fn initialize(&self) -> SessionState {
        let mut state = self.write();
        if state.is_resolved() {
            log::debug!("session: initialize skipped, already {}", state.label());
            return state.clone();
        }
        let recovered = self.recover();
        log::info!("session: resolved {} from storage", recovered.label());
        *state = recovered.clone();
        recovered
    }

    /// Persist a freshly issued token pair and mark the session authenticated.
    ///
    /// Does no network I/O; the caller has already exchanged credentials.
    pub fn login(&self, pair: &TokenPair) -> Result<(), SessionError> {
        validate_token_pair(pair)?;
        let mut state = self.write();
        let previous_access = self.snapshot(&self.config.access_key, state.access_token());
        let previous_refresh = self.snapshot(&self.config.refresh_key, state.refresh_token());

        if let Err(e) = self.storage.set(&self.config.access_key, &pair.access) {
            log::warn!("session: login could not persist access token: {e}");
            return Err(e.into());
        }
        if let Err(e) = self.storage.set(&self.config.refresh_key, &pair.refresh) {
            log::warn!("session: login could not persist refresh token: {e}");
            self.restore_entry(&self.config.access_key, previous_access.as_deref());
            self.restore_entry(&self.config.refresh_key, previous_refresh.as_deref());
            return Err(e.into());
        }

        *state = SessionState::Authenticated {
            access_token: pair.access.clone(),
            refresh_token: Some(pair.refresh.clone()),
        };
        log::info!("session: logged in");
        Ok(())
    }

    /// Clear persisted tokens and mark the session unauthenticated.
    ///
    /// Safe to call when already signed out. The in-memory state always ends
    /// unauthenticated, even if storage refuses the removal.
    pub fn logout(&self) -> Result<(), SessionError> {
        let mut state = self.write();
        let access = self.storage.remove(&self.config.access_key);
        let refresh = self.storage.remove(&self.config.refresh_key);
        *state = SessionState::Unauthenticated;

        match access.and(refresh) {
            Ok(()) => {
                log::info!("session: logged out");
                Ok(())
            }
            Err(e) => {
                log::warn!("session: logout could not clear stored tokens: {e}");
                Err(e.into())
            }
        }
    }

    pub fn access_token(&self) -> Option<String> {
        self.read().access_token().map(str::to_owned)
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    /// True until `initialize` (or a login) resolves the startup lookup.
    pub fn loading(&self) -> bool {
        !self.read().is_resolved()
    }

    /// `(loading, is_authenticated)` observed under one lock.
    pub fn status(&self) -> (bool, bool) {
        let state = self.read();
        (!state.is_resolved(), state.is_authenticated())
    }

    pub fn state(&self) -> SessionState {
        self.read().clone()
    }

    fn recover(&self) -> SessionState {
        let access = match self.storage.get(&self.config.access_key) {
            Ok(Some(token)) if !token.trim().is_empty() => token,
            Ok(_) => return SessionState::Unauthenticated,
            Err(e) => {
                log::warn!("session: access token lookup failed, failing closed: {e}");
                return SessionState::Unauthenticated;
            }
        };
        let refresh = match self.storage.get(&self.config.refresh_key) {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(e) => {
                log::warn!("session: refresh token lookup failed, failing closed: {e}");
                return SessionState::Unauthenticated;
            }
        };

        match (refresh, self.config.refresh_policy) {
            (Some(refresh), _) => SessionState::Authenticated { access_token: access, refresh_token: Some(refresh) },
            (None, RefreshTokenPolicy::Optional) => SessionState::Authenticated { access_token: access, refresh_token: None },
            (None, RefreshTokenPolicy::Required) => {
                log::info!("session: stored access token has no refresh token, discarding");
                if let Err(e) = self.storage.remove(&self.config.access_key) {
                    log::warn!("session: could not discard stale access token: {e}");
                }
                SessionState::Unauthenticated
            }
        }
    }

    /// What storage holds for `key` before a login overwrites it; the
    /// in-memory value stands in when the read fails.
    fn snapshot(&self, key: &str, in_memory: Option<&str>) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("session: could not snapshot {key} before login: {e}");
                in_memory.map(str::to_owned)
            }
        }
    }

    /// Put `key` back to `previous` after a half-applied login.
    fn restore_entry(&self, key: &str, previous: Option<&str>) {
        let result = match previous {
            Some(value) => self.storage.set(key, value),
            None => self.storage.remove(key),
        };
        if let Err(e) = result {
            log::warn!("session: rollback of {key} failed: {e}");
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
