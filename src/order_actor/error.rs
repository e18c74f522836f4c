//! Error types for the Order actor.

use crate::cart_actor::CartError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// Checkout was attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The payment provider could not be reached; nothing was recorded.
    #[error("Payment unavailable: {0}")]
    PaymentUnavailable(String),

    /// Reading or clearing the cart failed.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// An underlying storage error occurred.
    #[error("Order database error: {0}")]
    DatabaseError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
