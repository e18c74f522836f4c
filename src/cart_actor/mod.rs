//! # Cart Actor
//!
//! The customer's cart, persisted under `cart` as an ordered list of [`CartLine`]s.
//!
//! - [`entity`] - [`ActorEntity`](actor_store::ActorEntity) implementation for [`CartLine`]
//! - [`error`] - [`CartError`]
//! - [`totals`] - [`compute_totals`]
//!
//! A line is keyed by its dish id: adding a dish already in the cart increments that
//! line's quantity (through `on_conflict`) rather than appending a second line.

pub mod entity;
pub mod error;
pub mod totals;

pub use entity::*;
pub use error::*;
pub use totals::*;

use crate::clients::CartClient;
use crate::model::CartLine;
use actor_store::{KeyValueStore, ResourceActor};
use std::sync::Arc;

/// Creates a new Cart actor and its client.
pub fn new(
    buffer_size: usize,
    storage: Arc<dyn KeyValueStore>,
) -> (ResourceActor<CartLine>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, storage);
    (actor, CartClient::new(generic_client))
}
