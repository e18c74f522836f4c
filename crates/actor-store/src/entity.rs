//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every persisted resource (accounts, dish
//! inventories, cart lines, orders, reviews) implements to be managed by the generic
//! [`ResourceActor`](crate::ResourceActor). It names the collection the records live under
//! in the key-value store, how a record is built from its creation payload, and the hooks
//! the actor calls around every mutation.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`] - async validation after construction (may consult other actors)
//! - [`ActorEntity::on_conflict`] - what to do when a record with the same id already exists
//! - [`ActorEntity::on_update`] - defaults to a no-op for records that are never edited
//!
//! Only [`ActorEntity::from_create_params`] and [`ActorEntity::handle_action`] are required.

use crate::stamp::Stamp;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// Outcome of creating a record whose id is already present in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    /// Leave the stored record untouched and answer `FrameworkError::AlreadyExists`.
    Reject,
    /// The stored record absorbed the incoming one and must be persisted.
    Merged,
    /// The stored record is answered as is; nothing is written.
    Keep,
}

/// Trait that any persisted resource must implement to be managed by `ResourceActor`.
///
/// # Persistence
/// Every entity lives in exactly one collection, stored as a JSON array under
/// [`ActorEntity::COLLECTION`]. The actor keeps the collection in insertion order and
/// rewrites it in full after each mutation.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can call other actors. The `Context` type is injected
/// into every hook when the actor starts (late binding of dependencies).
#[async_trait]
pub trait ActorEntity: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Identity of a record inside its collection (a surrogate id or a natural key).
    type Id: PartialEq + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new record.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing record.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per resource rather than one per message: clients deal with a single
    /// error type and match on the variants they care about.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Storage key of the persisted collection.
    const COLLECTION: &'static str;

    /// The identity of this record.
    fn id(&self) -> Self::Id;

    /// Highest stamp id embedded in this record, if it carries any.
    /// Used after a reload so freshly issued ids never collide with stored ones.
    fn max_stamp_id(&self) -> Option<u64> {
        None
    }

    /// Construct the full record from a fresh stamp and the creation payload.
    /// Called synchronously before `on_create`; this is where payload validation lives.
    fn from_create_params(stamp: Stamp, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks ---

    /// Called after the record is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called on the stored record when a create produces an id that already exists.
    fn on_conflict(&mut self, _incoming: Self) -> Conflict {
        Conflict::Reject
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        _update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
