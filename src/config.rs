//! Application configuration.
//!
//! Values are fixed at build time. The API base may be overridden by setting
//! `HOUSE_API_BASE` when compiling the WASM bundle.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_HOME_PATH: &str = "/";
/// Router segments mounted for the default paths above.
pub const LOGIN_SEGMENT: &str = "login";
pub const HOME_SEGMENT: &str = "";
pub const DEFAULT_ACCESS_TOKEN_KEY: &str = "access_token";
pub const DEFAULT_REFRESH_TOKEN_KEY: &str = "refresh_token";

/// What session recovery does when storage holds an access token but no
/// refresh token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshTokenPolicy {
    /// Recover the session with the access token alone.
    #[default]
    Optional,
    /// Treat the leftover access token as stale and resolve unauthenticated.
    Required,
}

/// Session persistence settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub access_key: String,
    pub refresh_key: String,
    pub refresh_policy: RefreshTokenPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            access_key: DEFAULT_ACCESS_TOKEN_KEY.to_owned(),
            refresh_key: DEFAULT_REFRESH_TOKEN_KEY.to_owned(),
            refresh_policy: RefreshTokenPolicy::default(),
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn with_refresh_policy(mut self, policy: RefreshTokenPolicy) -> Self {
        self.refresh_policy = policy;
        self
    }
}

/// Top-level client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// REST API prefix, without a trailing slash.
    pub api_base: String,
    /// Route that unauthenticated visitors are redirected to.
    pub login_path: String,
    /// Landing route after sign-in.
    pub home_path: String,
    pub session: SessionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: normalize_api_base(option_env!("HOUSE_API_BASE").unwrap_or(DEFAULT_API_BASE)),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            home_path: DEFAULT_HOME_PATH.to_owned(),
            session: SessionConfig::default(),
        }
    }
}

fn normalize_api_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_owned()
    } else {
        trimmed.to_owned()
    }
}
