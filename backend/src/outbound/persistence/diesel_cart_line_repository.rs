//! PostgreSQL-backed `CartLineRepository` implementation using Diesel ORM.
//!
//! Joins `ingredient_amounts` with `ingredients` and with `shopping_carts` on
//! the recipe, filtered by the cart owner.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::UserId;
use crate::domain::ports::{CartLineRecord, CartLineRepository, CartLineRepositoryError};

use super::models::CartLineRow;
use super::pool::{DbPool, PoolError};
use super::schema::{ingredient_amounts, ingredients, shopping_carts};

/// Diesel-backed implementation of the `CartLineRepository` port.
#[derive(Clone)]
pub struct DieselCartLineRepository {
    pool: DbPool,
}

impl DieselCartLineRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CartLineRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            CartLineRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> CartLineRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::QueryBuilderError(_) => CartLineRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            CartLineRepositoryError::connection("database connection error")
        }
        DieselError::DeserializationError(_) => {
            CartLineRepositoryError::query("unexpected column data")
        }
        _ => CartLineRepositoryError::query("database error"),
    }
}

#[async_trait]
impl CartLineRepository for DieselCartLineRepository {
    async fn cart_lines(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<CartLineRecord>, CartLineRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CartLineRow> = ingredient_amounts::table
            .inner_join(ingredients::table)
            .inner_join(
                shopping_carts::table.on(shopping_carts::recipe_id.eq(ingredient_amounts::recipe_id)),
            )
            .filter(shopping_carts::user_id.eq(user_id.as_uuid()))
            .select((
                ingredients::name,
                ingredients::measurement_unit,
                ingredient_amounts::amount,
            ))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(user_id = %user_id, rows = rows.len(), "loaded cart lines");
        Ok(rows.into_iter().map(CartLineRecord::from).collect())
    }
}

#[cfg(test)]
mod tests {
    //! Error mapping and row conversion. The query itself is covered by
    //! `tests/diesel_cart_line_repository.rs` against embedded PostgreSQL.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PoolError::checkout("connection refused"))]
    #[case(PoolError::build("invalid URL"))]
    fn pool_errors_map_to_connection_errors(#[case] error: PoolError) {
        let repo_err = map_pool_error(error);
        assert!(matches!(repo_err, CartLineRepositoryError::Connection { .. }));
    }

    #[rstest]
    fn not_found_maps_to_query_error() {
        let repo_err = map_diesel_error(diesel::result::Error::NotFound);
        assert_eq!(repo_err, CartLineRepositoryError::query("database error"));
    }

    #[rstest]
    fn closed_connection_maps_to_connection_error() {
        let info: Box<dyn diesel::result::DatabaseErrorInformation + Send + Sync> =
            Box::new("server closed the connection".to_owned());
        let repo_err = map_diesel_error(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::ClosedConnection,
            info,
        ));
        assert!(matches!(repo_err, CartLineRepositoryError::Connection { .. }));
    }

    #[rstest]
    fn rows_widen_amounts_into_records() {
        let row = CartLineRow {
            ingredient_name: "Egg".to_owned(),
            measurement_unit: "pcs".to_owned(),
            amount: 3,
        };
        assert_eq!(
            CartLineRecord::from(row),
            CartLineRecord::new("Egg", "pcs", 3)
        );
    }
}
