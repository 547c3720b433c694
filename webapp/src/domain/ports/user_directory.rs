//! Driven port for the users backend.
//!
//! Pages and form components talk to the backend only through
//! [`UserDirectory`]. Each call maps to exactly one outbound request; adapters
//! must not retry, cache, or coalesce calls.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Error, User, UserDraft, UserId};

define_port_error! {
    /// Errors surfaced while calling the users backend.
    pub enum UserDirectoryError {
        /// The backend could not be reached.
        Transport { message: String } =>
            "users backend unreachable: {message}",
        /// The backend did not answer within the configured timeout.
        Timeout { message: String } =>
            "users backend timed out: {message}",
        /// The backend answered with a non-success status.
        Status { status: u16, message: String } =>
            "users backend returned status {status}: {message}",
        /// The backend response body could not be decoded.
        Decode { message: String } =>
            "users backend response invalid: {message}",
        /// The adapter refused to build the request.
        InvalidRequest { message: String } =>
            "users backend request invalid: {message}",
    }
}

impl From<UserDirectoryError> for Error {
    fn from(value: UserDirectoryError) -> Self {
        match value {
            UserDirectoryError::InvalidRequest { message } => Self::invalid_request(message),
            other => Self::service_unavailable(other.to_string()),
        }
    }
}

/// Port for reading and mutating user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch every stored user.
    async fn list_users(&self) -> Result<Vec<User>, UserDirectoryError>;

    /// Fetch one user; `Ok(None)` when the backend reports no such record.
    async fn get_user(&self, id: &UserId) -> Result<Option<User>, UserDirectoryError>;

    /// Store a new user. The backend assigns the identifier.
    async fn create_user(&self, draft: &UserDraft) -> Result<(), UserDirectoryError>;

    /// Replace an existing user. `draft` must carry an identifier.
    async fn update_user(&self, draft: &UserDraft) -> Result<(), UserDirectoryError>;

    /// Remove a user.
    async fn delete_user(&self, id: &UserId) -> Result<(), UserDirectoryError>;
}
