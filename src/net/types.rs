//! REST DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Field names match the backend JSON bodies so serde handles the mapping
//! without per-field renames.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Access + refresh token pair issued by the token endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

impl TokenPair {
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self { access: access.into(), refresh: refresh.into() }
    }
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenPair")
            .field("access", &"<redacted>")
            .field("refresh", &"<redacted>")
            .finish()
    }
}

/// Username/password body shared by the token and register endpoints.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A house owned by the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct House {
    /// Backend-assigned identifier.
    pub id: i64,
    pub name: String,
    pub address: String,
    /// Footprint length in metres.
    pub length: f64,
    /// Footprint width in metres.
    pub width: f64,
    /// Height in metres.
    pub height: f64,
}

impl House {
    /// Floor area in square metres.
    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// Enclosed volume in cubic metres.
    pub fn volume(&self) -> f64 {
        self.area() * self.height
    }

    /// Writable fields, used to prefill the edit form.
    pub fn to_draft(&self) -> HouseDraft {
        HouseDraft {
            name: self.name.clone(),
            address: self.address.clone(),
            length: self.length,
            width: self.width,
            height: self.height,
        }
    }
}

/// Create/update body for a house.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HouseDraft {
    pub name: String,
    pub address: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}
