//! HTTP inbound adapter exposing REST endpoints.

pub mod coins;
pub mod error;
pub mod health;
pub mod messages;
pub mod scores;
pub mod shop;
pub mod state;
pub mod validation;

pub use crate::domain::ApiResult;
