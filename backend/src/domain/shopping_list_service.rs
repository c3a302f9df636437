//! Shopping-list export service.
//!
//! Implements [`ShoppingListQuery`] by reading raw cart lines from the
//! [`CartLineRepository`], validating them, then aggregating and rendering
//! with the `shopping_list` crate.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use shopping_list::{CartLine, ShoppingListError, aggregate, render};
use tracing::{debug, error};

use crate::domain::ports::{
    CartLineRecord, CartLineRepository, CartLineRepositoryError, ShoppingListExport,
    ShoppingListQuery,
};
use crate::domain::{Error, UserId};

/// Service composing cart storage with aggregation and rendering.
#[derive(Clone)]
pub struct ShoppingListService<R> {
    cart_lines: Arc<R>,
}

impl<R> ShoppingListService<R> {
    /// Create a new service reading cart lines from `cart_lines`.
    pub fn new(cart_lines: Arc<R>) -> Self {
        Self { cart_lines }
    }
}

impl<R> ShoppingListService<R>
where
    R: CartLineRepository,
{
    fn map_repository_error(error: CartLineRepositoryError) -> Error {
        match error {
            CartLineRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("cart line repository unavailable: {message}"))
            }
            CartLineRepositoryError::Query { message } => {
                Error::internal(format!("cart line repository error: {message}"))
            }
        }
    }

    fn map_invalid_record(user_id: &UserId, error: &ShoppingListError) -> Error {
        error!(
            user_id = %user_id,
            field = error.field(),
            error = %error,
            "stored cart line failed validation"
        );
        Error::internal("stored cart line is invalid").with_details(json!({
            "field": error.field(),
        }))
    }

    fn validate(user_id: &UserId, records: Vec<CartLineRecord>) -> Result<Vec<CartLine>, Error> {
        records
            .into_iter()
            .map(|record| {
                CartLine::try_new(record.ingredient_name, record.measurement_unit, record.amount)
                    .map_err(|err| Self::map_invalid_record(user_id, &err))
            })
            .collect()
    }
}

#[async_trait]
impl<R> ShoppingListQuery for ShoppingListService<R>
where
    R: CartLineRepository,
{
    async fn shopping_list(&self, user_id: &UserId) -> Result<ShoppingListExport, Error> {
        let records = self
            .cart_lines
            .cart_lines(user_id)
            .await
            .map_err(Self::map_repository_error)?;
        let record_count = records.len();

        let lines = aggregate(Self::validate(user_id, records)?);
        let document = render(&lines);
        debug!(
            user_id = %user_id,
            records = record_count,
            rows = lines.len(),
            "shopping list rendered"
        );

        Ok(ShoppingListExport { lines, document })
    }
}

#[cfg(test)]
#[path = "shopping_list_service_tests.rs"]
mod tests;
