//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use crate::domain::ports::CartLineRecord;

/// One `(name, measurement_unit, amount)` tuple from the cart join.
///
/// Field order matches the select clause in
/// [`super::DieselCartLineRepository`].
#[derive(Debug, Clone, Queryable)]
pub(crate) struct CartLineRow {
    pub ingredient_name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

impl From<CartLineRow> for CartLineRecord {
    fn from(row: CartLineRow) -> Self {
        Self::new(
            row.ingredient_name,
            row.measurement_unit,
            i64::from(row.amount),
        )
    }
}
