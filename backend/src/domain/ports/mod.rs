//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports ([`CartLineRepository`]) describe what the domain needs from
//! infrastructure. Driving ports ([`ShoppingListQuery`]) describe the use
//! cases inbound adapters may call.

mod macros;
pub(crate) use macros::define_port_error;

mod cart_line_repository;
mod shopping_list_query;

#[cfg(test)]
pub use cart_line_repository::MockCartLineRepository;
pub use cart_line_repository::{
    CartLineRecord, CartLineRepository, CartLineRepositoryError, FixtureCartLineRepository,
};
#[cfg(test)]
pub use shopping_list_query::MockShoppingListQuery;
pub use shopping_list_query::{ShoppingListExport, ShoppingListQuery};
