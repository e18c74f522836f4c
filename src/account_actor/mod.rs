//! # Account Actor
//!
//! Registered customers and restaurant operators, persisted under `app_users`.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_store::ActorEntity) implementation for [`Account`]
//! - [`error`] - [`AccountError`]
//! - [`password`] - Argon2 hashing and verification
//! - [`new()`] - Factory function that creates the actor and client
//!
//! Accounts are keyed by `(email, role)`, so the same email can hold one customer and one
//! restaurant account. Passwords are hashed by the client before the account reaches the
//! actor; the actor never sees plaintext.
//!
//! ```rust
//! use actor_store::MemoryStore;
//! use platter::account_actor;
//! use platter::model::{Registration, Role};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = account_actor::new(32, Arc::new(MemoryStore::new()));
//!     tokio::spawn(actor.run(()));
//!
//!     client.register(Registration::customer("Asha", "a@x.com", "pw1")).await?;
//!     let account = client.authenticate(Role::Customer, "a@x.com", "pw1").await?;
//!     assert_eq!(account.display_name(), "Asha");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod password;

pub use entity::*;
pub use error::*;

use crate::clients::AccountClient;
use crate::model::Account;
use actor_store::{KeyValueStore, ResourceActor};
use std::sync::Arc;

/// Creates a new Account actor and its client.
pub fn new(
    buffer_size: usize,
    storage: Arc<dyn KeyValueStore>,
) -> (ResourceActor<Account>, AccountClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, storage);
    (actor, AccountClient::new(generic_client))
}
