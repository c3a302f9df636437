//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module. Connections come from a `bb8` pool driven by
//! `diesel-async`.
//!
//! # Example
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselCartLineRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/recipes")).await?;
//! let repo = DieselCartLineRepository::new(pool);
//! ```

mod diesel_cart_line_repository;
mod models;
mod pool;
mod schema;

pub use diesel_cart_line_repository::DieselCartLineRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
