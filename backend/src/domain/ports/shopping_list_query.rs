//! Driving port for shopping-list exports.
//!
//! Inbound adapters call this port to obtain the aggregated, rendered
//! shopping list for the authenticated user without touching persistence.

use async_trait::async_trait;
use shopping_list::{AggregatedLine, ShoppingListDocument};

use crate::domain::{Error, UserId};

/// Aggregated lines together with their rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListExport {
    /// One line per distinct ingredient and unit, sorted.
    pub lines: Vec<AggregatedLine>,
    /// The rendered plain-text list.
    pub document: ShoppingListDocument,
}

/// Domain use-case port for exporting a user's shopping list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShoppingListQuery: Send + Sync {
    /// Build the shopping list for `user_id`'s cart.
    async fn shopping_list(&self, user_id: &UserId) -> Result<ShoppingListExport, Error>;
}
