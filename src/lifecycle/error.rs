//! Errors surfaced by [`RestaurantSystem`](super::RestaurantSystem).

use super::session::SessionError;
use crate::account_actor::AccountError;
use crate::cart_actor::CartError;
use crate::catalog_actor::CatalogError;
use crate::order_actor::OrderError;
use crate::review_actor::ReviewError;
use actor_store::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Account(#[from] AccountError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Review(#[from] ReviewError),

    /// The configured store could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// An actor task panicked or was cancelled.
    #[error("Shutdown failed: {0}")]
    Shutdown(String),
}
