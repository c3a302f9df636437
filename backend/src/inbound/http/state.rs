//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::ShoppingListQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Builds the shopping list for the session user.
    pub shopping_list: Arc<dyn ShoppingListQuery>,
}

impl HttpState {
    /// Construct state from the port implementations.
    pub fn new(shopping_list: Arc<dyn ShoppingListQuery>) -> Self {
        Self { shopping_list }
    }
}
