//! # Review Actor
//!
//! Customer reviews of completed orders, persisted under `reviews`.
//!
//! - [`entity`] - [`ActorEntity`](actor_store::ActorEntity) implementation for [`Review`]
//! - [`error`] - [`ReviewError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! The actor must be started with an [`OrderClient`] as its context:
//!
//! ```rust,ignore
//! let (review_actor, reviews) = review_actor::new(32, store, orders.clone());
//! tokio::spawn(review_actor.run(orders));
//! ```

pub mod entity;
pub mod error;

pub use entity::*;
pub use error::*;

use crate::clients::{OrderClient, ReviewClient};
use crate::model::Review;
use actor_store::{KeyValueStore, ResourceActor};
use std::sync::Arc;

/// Creates a new Review actor and its client.
///
/// `orders` is kept by the client for [`ReviewClient::can_review`]; the actor receives its
/// own copy when it is started.
pub fn new(
    buffer_size: usize,
    storage: Arc<dyn KeyValueStore>,
    orders: OrderClient,
) -> (ResourceActor<Review>, ReviewClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, storage);
    (actor, ReviewClient::new(generic_client, orders))
}
