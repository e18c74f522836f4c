//! # Cart Client

use crate::cart_actor::CartError;
use crate::model::{CartLine, Dish};
use actor_store::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartLine>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<CartLine>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<CartLine> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<CartLine> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast::<CartError>() {
            Ok(err) => err,
            Err(FrameworkError::Storage(e)) => CartError::DatabaseError(e.to_string()),
            Err(other) => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CartClient {
    /// Puts one more of `dish` in the cart and returns its line.
    #[instrument(skip(self, dish), fields(dish_id = %dish.id))]
    pub async fn add(&self, dish: Dish) -> Result<CartLine, CartError> {
        debug!("Sending request");
        let line = self.inner.create(dish).await.map_err(Self::map_error)?;
        info!(quantity = line.quantity, "Added to cart");
        Ok(line)
    }

    /// Current lines in the order their dishes were first added.
    pub async fn lines(&self) -> Result<Vec<CartLine>, CartError> {
        self.list().await
    }

    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<(), CartError> {
        debug!("Sending request");
        self.inner.clear().await.map_err(Self::map_error)
    }
}
