//! Domain primitives, ports, and page state.
//!
//! Purpose: Model user records and the behaviour of the list and form pages
//! independently of HTTP. Adapters in `inbound` and `outbound` translate to
//! and from these types.
//!
//! Public surface:
//! - Error (alias to `error::Error`): domain error payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - User, UserDraft, UserId: user records as the backend stores them.
//! - TraceId: request correlation identifier.

pub mod error;
pub mod notification;
pub mod ports;
pub mod search;
pub mod trace_id;
pub mod user;
pub mod user_form;
pub mod user_list;
pub mod validation;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDraft, UserId};

/// Convenient page result alias.
///
/// # Examples
/// ```
/// use webapp::domain::{Error, PageResult};
///
/// fn load() -> PageResult<()> {
///     Err(Error::not_found("no such user"))
/// }
/// assert!(load().is_err());
/// ```
pub type PageResult<T> = Result<T, Error>;
