//! Shopping-list aggregation and rendering for recipe carts.
//!
//! The crate turns the ingredient lines of every recipe in a user's cart
//! into a deduplicated, deterministically ordered list and lays that list out
//! as numbered text. It performs no I/O: callers fetch cart lines from their
//! store, hand them over, and deliver the rendered text however they like.
//!
//! # Overview
//!
//! - [`CartLine`] is one validated `(ingredient, unit, amount)` tuple.
//! - [`aggregate`] groups lines by ingredient name and unit, sums amounts,
//!   and sorts the result.
//! - [`render`] produces a [`ShoppingListDocument`]: a title line followed by
//!   one numbered row per aggregated line.
//!
//! # Example
//!
//! ```
//! use shopping_list::{CartLine, aggregate, render};
//!
//! let lines = [
//!     CartLine::try_new("Egg", "pcs", 2).expect("valid line"),
//!     CartLine::try_new("Flour", "g", 500).expect("valid line"),
//!     CartLine::try_new("Egg", "pcs", 3).expect("valid line"),
//! ];
//!
//! let aggregated = aggregate(lines);
//! let document = render(&aggregated);
//!
//! assert_eq!(document.body(), "1.  Egg - 5 pcs\n2.  Flour - 500 g");
//! ```

mod aggregate;
mod error;
mod line;
mod render;

pub use aggregate::aggregate;
pub use error::ShoppingListError;
pub use line::{AggregatedLine, CartLine};
pub use render::{DEFAULT_TITLE, ShoppingListDocument, render, render_with_title};
