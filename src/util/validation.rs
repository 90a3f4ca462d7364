//! Form validation rules for the login, register and house forms.
//!
//! Each validator returns the normalized value on success or the message of
//! the first failing rule, ready to show under the form.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::{Credentials, HouseDraft};

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 150;
pub const PASSWORD_MIN_LEN: usize = 8;
pub const HOUSE_NAME_MAX_LEN: usize = 100;
/// Largest accepted house dimension, in metres.
pub const MAX_DIMENSION_M: f64 = 1000.0;

/// Validate the login form.
pub fn validate_login(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Username is required.");
    }
    if password.is_empty() {
        return Err("Password is required.");
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

/// Validate the register form.
pub fn validate_register(username: &str, password: &str, confirm: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Username is required.");
    }
    let len = username.chars().count();
    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
        return Err("Username must be between 3 and 150 characters.");
    }
    if !username.chars().all(is_username_char) {
        return Err("Username may only contain letters, digits and @.+-_");
    }
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

fn is_username_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_')
}

/// Raw text fields of the house form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HouseFormInput {
    pub name: String,
    pub address: String,
    pub length: String,
    pub width: String,
    pub height: String,
}

impl HouseFormInput {
    /// Prefill from an existing house for editing.
    pub fn from_draft(draft: &HouseDraft) -> Self {
        Self {
            name: draft.name.clone(),
            address: draft.address.clone(),
            length: draft.length.to_string(),
            width: draft.width.to_string(),
            height: draft.height.to_string(),
        }
    }
}

/// Validate the house form.
pub fn validate_house(input: &HouseFormInput) -> Result<HouseDraft, &'static str> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err("Name is required.");
    }
    if name.chars().count() > HOUSE_NAME_MAX_LEN {
        return Err("Name must be at most 100 characters.");
    }
    let address = input.address.trim();
    if address.is_empty() {
        return Err("Address is required.");
    }
    let length = parse_dimension(&input.length, "Length must be a positive number.", "Length must be at most 1000 m.")?;
    let width = parse_dimension(&input.width, "Width must be a positive number.", "Width must be at most 1000 m.")?;
    let height = parse_dimension(&input.height, "Height must be a positive number.", "Height must be at most 1000 m.")?;
    Ok(HouseDraft { name: name.to_owned(), address: address.to_owned(), length, width, height })
}

fn parse_dimension(raw: &str, invalid: &'static str, too_large: &'static str) -> Result<f64, &'static str> {
    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or(invalid)?;
    if value > MAX_DIMENSION_M {
        return Err(too_large);
    }
    Ok(value)
}
