//! Application state.
//!
//! ARCHITECTURE
//! ============
//! `session` holds the framework-free auth state machine; `auth` wraps it for
//! reactive views. `houses` is dashboard list state.

pub mod auth;
pub mod houses;
pub mod session;
