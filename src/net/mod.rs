//! Wire types and REST helpers for the authentication API.

pub mod api;
pub mod types;
