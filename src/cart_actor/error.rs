//! Error types for the Cart actor.

use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// Adding, listing and clearing have no business failures of their own; only the storage
/// and the actor channel can fail.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// An underlying storage error occurred.
    #[error("Cart database error: {0}")]
    DatabaseError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
