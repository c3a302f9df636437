//! Domain primitives, ports and services.
//!
//! Purpose: keep the shopping-list use case free of HTTP and database
//! details. Inbound adapters call driving ports, services implement them,
//! and outbound adapters implement the driven ports the services need.
//!
//! Public surface:
//! - [`Error`] and [`ErrorCode`]: transport-agnostic failure payload.
//! - [`TraceId`]: request-scoped correlation identifier.
//! - [`UserId`]: identifier of the cart owner.
//! - [`ShoppingListService`]: implementation of
//!   [`ports::ShoppingListQuery`].

pub mod error;
pub mod ports;
pub mod shopping_list_service;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::shopping_list_service::ShoppingListService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{UserId, UserIdValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
