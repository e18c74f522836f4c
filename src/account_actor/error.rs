//! Error types for the Account actor.

use thiserror::Error;

/// Errors that can occur during account operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccountError {
    /// An account with the same email and role already exists.
    #[error("Email already registered for this role")]
    AlreadyRegistered,

    /// Unknown account or wrong password; deliberately indistinguishable.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// A required registration field was empty.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// A profile edit touched fields that belong to the other role.
    #[error("Profile field does not apply to this role: {0}")]
    ProfileMismatch(&'static str),

    /// The requested account was not found.
    #[error("Account not found: {0}")]
    NotFound(String),

    /// The password could not be hashed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// An underlying storage error occurred.
    #[error("Account database error: {0}")]
    DatabaseError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for AccountError {
    fn from(msg: String) -> Self {
        AccountError::ActorCommunicationError(msg)
    }
}
