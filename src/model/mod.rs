//! Plain data records. Each persisted record implements
//! [`ActorEntity`](actor_store::ActorEntity) in its actor module.

pub mod account;
pub mod cart;
pub mod dish;
pub mod order;
pub mod review;

pub use account::*;
pub use cart::*;
pub use dish::*;
pub use order::*;
pub use review::*;
