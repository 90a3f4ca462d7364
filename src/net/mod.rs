//! Network layer: REST calls and their DTOs.

pub mod api;
pub mod types;
