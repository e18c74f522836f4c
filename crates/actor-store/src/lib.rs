//! # Actor Store
//!
//! Persistent resource actors on Tokio. Each actor owns one collection of records, processes
//! requests sequentially, and keeps the collection mirrored in a shared key-value store as a
//! single JSON document.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the records and their business rules
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing, persistence, rollback
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe async calls
//! 4. **Storage Layer** ([`KeyValueStore`]) - [`MemoryStore`] or [`SqliteStore`]
//!
//! ## Context Injection
//!
//! Dependencies are injected when an actor starts, not when it is built, so actors can
//! depend on clients of actors created after them:
//!
//! ```rust,ignore
//! let (order_actor, order_client) = ResourceActor::<Order>::new(32, store.clone());
//! let (review_actor, review_client) = ResourceActor::<Review>::new(32, store.clone());
//!
//! tokio::spawn(order_actor.run(()));
//! // reviews consult the order ledger before accepting a submission
//! tokio::spawn(review_actor.run(order_client.clone()));
//! ```
//!
//! ## Persistence Model
//!
//! - The collection is loaded once, when `run` starts
//! - Every mutation rewrites the whole collection (no partial writes)
//! - Unreadable or corrupted collections load as empty, with a warning
//! - Several actors (or several systems) may share one store; for a given key the last
//!   writer's snapshot wins
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient` from scripted expectations, for
//! testing an actor against mocked neighbours.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod stamp;
pub mod storage;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{ActorEntity, Conflict};
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use stamp::Stamp;
pub use storage::{
    load_collection, load_value, save_collection, save_value, KeyValueStore, MemoryStore,
    SqliteStore, StorageError,
};
