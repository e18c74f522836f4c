//! Error types for the Review actor.

use crate::order_actor::OrderError;
use thiserror::Error;

/// Errors that can occur while submitting or reading reviews.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReviewError {
    /// Rating or comment failed validation.
    #[error("Invalid review: {0}")]
    Validation(String),

    /// The reviewed order does not exist.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Only completed orders can be reviewed.
    #[error("Order {0} is not completed")]
    NotCompleted(String),

    /// This order has already been reviewed for this restaurant.
    #[error("Already reviewed: {0}")]
    AlreadyReviewed(String),

    /// Consulting the order ledger failed.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// An underlying storage error occurred.
    #[error("Review database error: {0}")]
    DatabaseError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ReviewError {
    fn from(msg: String) -> Self {
        ReviewError::ActorCommunicationError(msg)
    }
}
