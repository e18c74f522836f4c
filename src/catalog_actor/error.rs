//! Error types for the Catalog actor.

use thiserror::Error;

/// Errors that can occur while managing dish inventories.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// A required dish field was left empty.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// The price was negative or not a number.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// Only restaurant accounts own inventories.
    #[error("Not a restaurant account: {0}")]
    NotRestaurant(String),

    /// An underlying storage error occurred.
    #[error("Catalog database error: {0}")]
    DatabaseError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::ActorCommunicationError(msg)
    }
}
