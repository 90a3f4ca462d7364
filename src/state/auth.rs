//! Reactive auth-session handle for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The handle is passed to those
//! components as a required prop; there is no ambient lookup that could be
//! missing at runtime.
//!
//! DESIGN
//! ======
//! `SessionStore` stays the source of truth. The handle only adds a revision
//! signal that is bumped after every mutation, so reads made inside reactive
//! scopes re-run when the session changes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::net::types::TokenPair;
use crate::state::session::{SessionError, SessionState, SessionStore};
use crate::util::guard::{GuardDecision, decide};
use crate::util::storage::{BrowserStorage, TokenStorage};

/// Shared, cheaply cloneable session handle.
#[derive(Clone)]
pub struct AuthSession {
    store: Arc<SessionStore<Box<dyn TokenStorage>>>,
    login_path: Arc<str>,
    home_path: Arc<str>,
    revision: RwSignal<u64>,
}

impl AuthSession {
    pub fn new(config: &AppConfig, storage: impl TokenStorage + 'static) -> Self {
        let storage: Box<dyn TokenStorage> = Box::new(storage);
        Self {
            store: Arc::new(SessionStore::new(config.session.clone(), storage)),
            login_path: Arc::from(config.login_path.as_str()),
            home_path: Arc::from(config.home_path.as_str()),
            revision: RwSignal::new(0),
        }
    }

    /// Session persisted in `window.localStorage`.
    pub fn browser(config: &AppConfig) -> Self {
        Self::new(config, BrowserStorage)
    }

    pub fn initialize(&self) -> SessionState {
        let state = self.store.initialize();
        self.bump();
        state
    }

    pub fn login(&self, pair: &TokenPair) -> Result<(), SessionError> {
        let result = self.store.login(pair);
        self.bump();
        result
    }

    pub fn logout(&self) -> Result<(), SessionError> {
        let result = self.store.logout();
        self.bump();
        result
    }

    pub fn loading(&self) -> bool {
        self.revision.track();
        self.store.loading()
    }

    pub fn is_authenticated(&self) -> bool {
        self.revision.track();
        self.store.is_authenticated()
    }

    pub fn access_token(&self) -> Option<String> {
        self.revision.track();
        self.store.access_token()
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn home_path(&self) -> &str {
        &self.home_path
    }

    /// Route-guard decision for the current session.
    pub fn guard(&self) -> GuardDecision {
        self.revision.track();
        let (loading, authenticated) = self.store.status();
        decide(loading, authenticated, &self.login_path)
    }

    fn bump(&self) {
        self.revision.update(|r| *r = r.wrapping_add(1));
    }
}
