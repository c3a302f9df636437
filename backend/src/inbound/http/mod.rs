//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod session;
pub mod session_config;
pub mod shopping_cart;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
