//! # Framework Errors
//!
//! Common error types shared by every actor and client. Entity-specific failures travel
//! boxed inside [`FrameworkError::EntityError`] and are recovered with
//! [`FrameworkError::downcast`].

use crate::storage::StorageError;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type, handing back `self` when it is something else.
    pub fn downcast<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(inner) => Err(FrameworkError::EntityError(inner)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("out of stock")]
    struct OutOfStock;

    #[test]
    fn test_downcast_recovers_entity_error() {
        let err = FrameworkError::EntityError(Box::new(OutOfStock));
        assert_eq!(err.downcast::<OutOfStock>().unwrap(), OutOfStock);
    }

    #[test]
    fn test_downcast_keeps_other_errors() {
        let err = FrameworkError::NotFound("order_1".into());
        assert!(matches!(
            err.downcast::<OutOfStock>(),
            Err(FrameworkError::NotFound(id)) if id == "order_1"
        ));

        let err = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        assert!(matches!(
            err.downcast::<OutOfStock>(),
            Err(FrameworkError::EntityError(_))
        ));
    }
}
