//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM.
//!
//! Adapters only convert between domain types and infrastructure
//! representations. They contain no business logic.

pub mod persistence;
