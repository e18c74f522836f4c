//! # Catalog Actor
//!
//! Per-restaurant dish inventories, persisted under `restaurant_dishes`.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_store::ActorEntity) implementation for [`Inventory`]
//! - [`actions`] - [`CatalogAction`] and [`CatalogActionResult`]
//! - [`error`] - [`CatalogError`]
//! - [`image`] - [`ImageUpload`] to `data:` URL encoding
//! - [`browse`] - [`MenuQuery`] search and category filtering
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Source of Truth
//!
//! Each owner's inventory is the only copy of their dishes. The global menu is flattened
//! from the inventories on every read (owners in insertion order, then dishes in insertion
//! order), so it can never drift from them.
//!
//! ```rust
//! use actor_store::MemoryStore;
//! use platter::catalog_actor;
//! use platter::model::{Account, DishDraft, Profile};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, catalog) = catalog_actor::new(32, Arc::new(MemoryStore::new()));
//!     tokio::spawn(actor.run(()));
//!
//!     let owner = Account {
//!         email: "chef@x.com".into(),
//!         password_hash: String::new(),
//!         phone: String::new(),
//!         profile: Profile::Restaurant {
//!             owner_name: "Ravi".into(),
//!             restaurant_name: "Spice Route".into(),
//!         },
//!         registered_at: chrono::Utc::now(),
//!     };
//!     let dish = catalog.add_dish(&owner, DishDraft::new("Dal", 120.0, "data:,")).await?;
//!     assert_eq!(catalog.list_global().await?, vec![dish]);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod browse;
pub mod entity;
pub mod error;
pub mod image;

pub use actions::*;
pub use browse::*;
pub use error::*;
pub use image::*;

use crate::clients::CatalogClient;
use crate::model::Inventory;
use actor_store::{KeyValueStore, ResourceActor};
use std::sync::Arc;

/// Creates a new Catalog actor and its client.
pub fn new(
    buffer_size: usize,
    storage: Arc<dyn KeyValueStore>,
) -> (ResourceActor<Inventory>, CatalogClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, storage);
    (actor, CatalogClient::new(generic_client))
}
