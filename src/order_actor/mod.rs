//! # Order Actor
//!
//! The order ledger, persisted under `orders`.
//!
//! - [`entity`] - [`ActorEntity`](actor_store::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`checkout`] - [`CheckoutTerms`] and minor-unit conversion
//!
//! Orders enter the ledger only through
//! [`OrderClient::checkout`](crate::clients::OrderClient::checkout), after the payment
//! provider has authorized the cart total. Afterwards only their status changes.

pub mod checkout;
pub mod entity;
pub mod error;

pub use checkout::*;
pub use entity::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use actor_store::{KeyValueStore, ResourceActor};
use std::sync::Arc;

/// Creates a new Order actor and its client.
pub fn new(
    buffer_size: usize,
    storage: Arc<dyn KeyValueStore>,
) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, storage);
    (actor, OrderClient::new(generic_client))
}
