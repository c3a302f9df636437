//! Recipe backend library: shopping-list export over HTTP.
//!
//! Layout follows a hexagonal split:
//! - [`domain`]: errors, identifiers, ports and the shopping-list service.
//! - [`inbound`]: Actix handlers, sessions and error mapping.
//! - [`outbound`]: Diesel/PostgreSQL adapters.
//! - [`middleware`]: request tracing.
//! - [`settings`]: OrthoConfig-backed runtime configuration.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use domain::TraceId;
pub use middleware::Trace;
