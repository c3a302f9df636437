//! Port for reading the ingredient lines of a user's shopping cart.
//!
//! Adapters return one [`CartLineRecord`] per ingredient amount of every
//! recipe in the cart. Records are raw store values; the domain validates
//! them before aggregation.

use async_trait::async_trait;

use crate::domain::UserId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by cart line repository adapters.
    pub enum CartLineRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "cart line repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "cart line repository query failed: {message}",
    }
}

/// One ingredient amount from one recipe in a cart, exactly as stored.
///
/// `amount` is signed so values the store should never hold (zero or
/// negative) still reach validation instead of failing a cast in the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineRecord {
    /// Ingredient name.
    pub ingredient_name: String,
    /// Measurement unit the amount is expressed in.
    pub measurement_unit: String,
    /// Amount of the ingredient the recipe calls for.
    pub amount: i64,
}

impl CartLineRecord {
    /// Build a record from its parts.
    pub fn new(
        ingredient_name: impl Into<String>,
        measurement_unit: impl Into<String>,
        amount: i64,
    ) -> Self {
        Self {
            ingredient_name: ingredient_name.into(),
            measurement_unit: measurement_unit.into(),
            amount,
        }
    }
}

/// Read-only access to cart contents.
///
/// Order of the returned records is unspecified. A user with an empty cart
/// (or no cart at all) yields an empty list, not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartLineRepository: Send + Sync {
    /// Return every ingredient line for recipes in `user_id`'s cart.
    async fn cart_lines(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<CartLineRecord>, CartLineRepositoryError>;
}

/// Fixture repository reporting an empty cart for every user.
///
/// The server runs [`crate::domain::ShoppingListService`] over it when no
/// database is configured, so every download is the title line alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCartLineRepository;

#[async_trait]
impl CartLineRepository for FixtureCartLineRepository {
    async fn cart_lines(
        &self,
        _user_id: &UserId,
    ) -> Result<Vec<CartLineRecord>, CartLineRepositoryError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_repository_reports_empty_cart() {
        let records = FixtureCartLineRepository
            .cart_lines(&UserId::random())
            .await
            .expect("fixture never fails");
        assert!(records.is_empty());
    }

    #[rstest]
    fn error_messages_name_the_failure() {
        assert_eq!(
            CartLineRepositoryError::connection("refused").to_string(),
            "cart line repository connection failed: refused"
        );
        assert_eq!(
            CartLineRepositoryError::query("syntax").to_string(),
            "cart line repository query failed: syntax"
        );
    }
}
