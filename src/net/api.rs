//! REST API helpers for the house backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call returns
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed `Result`s instead of panics so auth and fetch failures
//! degrade page behavior without crashing hydration. A 401 is reported as
//! [`ApiError::Unauthorized`] so pages can fail closed and drop the session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use super::types::{Credentials, House, HouseDraft, TokenPair};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("session expired or not authorized")]
    Unauthorized,
    #[error("request failed: {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Map an HTTP status to success or a typed error.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn check_status(status: u16) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401 => Err(ApiError::Unauthorized),
        other => Err(ApiError::Status(other)),
    }
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn bearer(access_token: &str) -> String {
    format!("Bearer {access_token}")
}

/// Backend client bound to an API base such as `/api`.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base: Arc<str>,
}

impl ApiClient {
    pub fn new(base: &str) -> Self {
        Self { base: Arc::from(base.trim_end_matches('/')) }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    #[cfg(any(test, feature = "hydrate"))]
    pub(crate) fn token_endpoint(&self) -> String {
        format!("{}/token/", self.base)
    }

    #[cfg(any(test, feature = "hydrate"))]
    pub(crate) fn register_endpoint(&self) -> String {
        format!("{}/user/register/", self.base)
    }

    #[cfg(any(test, feature = "hydrate"))]
    pub(crate) fn houses_endpoint(&self) -> String {
        format!("{}/houses/", self.base)
    }

    #[cfg(any(test, feature = "hydrate"))]
    pub(crate) fn house_endpoint(&self, id: i64) -> String {
        format!("{}/houses/{id}/", self.base)
    }

    /// Exchange credentials for a token pair via `POST {base}/token/`.
    pub async fn obtain_token(&self, credentials: &Credentials) -> Result<TokenPair, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = gloo_net::http::Request::post(&self.token_endpoint())
                .json(credentials)
                .map_err(network)?;
            let resp = send(req).await?;
            resp.json::<TokenPair>().await.map_err(decode)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    /// Create an account via `POST {base}/user/register/`.
    pub async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = gloo_net::http::Request::post(&self.register_endpoint())
                .json(credentials)
                .map_err(network)?;
            send(req).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    /// List the signed-in user's houses.
    pub async fn list_houses(&self, access_token: &str) -> Result<Vec<House>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = gloo_net::http::Request::get(&self.houses_endpoint())
                .header("Authorization", &bearer(access_token))
                .build()
                .map_err(network)?;
            let resp = send(req).await?;
            resp.json::<Vec<House>>().await.map_err(decode)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = access_token;
            Err(ApiError::Unavailable)
        }
    }

    pub async fn get_house(&self, access_token: &str, id: i64) -> Result<House, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = gloo_net::http::Request::get(&self.house_endpoint(id))
                .header("Authorization", &bearer(access_token))
                .build()
                .map_err(network)?;
            let resp = send(req).await?;
            resp.json::<House>().await.map_err(decode)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (access_token, id);
            Err(ApiError::Unavailable)
        }
    }

    pub async fn create_house(&self, access_token: &str, draft: &HouseDraft) -> Result<House, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = gloo_net::http::Request::post(&self.houses_endpoint())
                .header("Authorization", &bearer(access_token))
                .json(draft)
                .map_err(network)?;
            let resp = send(req).await?;
            resp.json::<House>().await.map_err(decode)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (access_token, draft);
            Err(ApiError::Unavailable)
        }
    }

    pub async fn update_house(&self, access_token: &str, id: i64, draft: &HouseDraft) -> Result<House, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = gloo_net::http::Request::put(&self.house_endpoint(id))
                .header("Authorization", &bearer(access_token))
                .json(draft)
                .map_err(network)?;
            let resp = send(req).await?;
            resp.json::<House>().await.map_err(decode)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (access_token, id, draft);
            Err(ApiError::Unavailable)
        }
    }

    pub async fn delete_house(&self, access_token: &str, id: i64) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = gloo_net::http::Request::delete(&self.house_endpoint(id))
                .header("Authorization", &bearer(access_token))
                .build()
                .map_err(network)?;
            send(req).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (access_token, id);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn send(req: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
    let url = req.url();
    let resp = req.send().await.map_err(network)?;
    if let Err(e) = check_status(resp.status()) {
        log::warn!("api: {url} -> {e}");
        return Err(e);
    }
    Ok(resp)
}

#[cfg(feature = "hydrate")]
fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(feature = "hydrate")]
fn decode(e: gloo_net::Error) -> ApiError {
    ApiError::Decode(e.to_string())
}
