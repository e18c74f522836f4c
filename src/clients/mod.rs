//! Type-safe wrappers around [`ResourceClient`](actor_store::ResourceClient), one per actor.
//!
//! Each client implements [`ActorClient`](actor_store::ActorClient) for `get`/`list` and
//! maps framework errors onto its actor's error enum.

pub mod account_client;
pub mod cart_client;
pub mod catalog_client;
pub mod order_client;
pub mod review_client;

pub use account_client::*;
pub use cart_client::*;
pub use catalog_client::*;
pub use order_client::*;
pub use review_client::*;
