//! # System Lifecycle & Orchestration
//!
//! [`RestaurantSystem`] creates every actor, starts each with the context it needs, restores
//! the session and shuts everything down again. It is also the surface a UI shell calls.
//!
//! ## Wiring
//!
//! ```text
//! accounts ──(session)──► catalog / order management
//! catalog ──► menu ──► cart ──checkout──► orders ──Completed──► reviews
//! ```
//!
//! Only the review actor has a dependency: it is started with an [`OrderClient`] so its
//! `on_create` hook can check the order's status.
//!
//! ## Graceful Shutdown
//!
//! 1. Drop every client, closing the actors' channels
//! 2. Each actor finishes its queued requests and exits its loop
//! 3. Await every actor task
//!
//! The review actor's context holds an `OrderClient` clone; since the dependency graph is
//! acyclic, the order actor stops once the review actor has.
//!
//! [`OrderClient`]: crate::clients::OrderClient

pub mod config;
pub mod error;
pub mod restaurant_system;
pub mod session;
pub mod tracing;

pub use config::*;
pub use error::*;
pub use restaurant_system::*;
pub use session::*;
pub use self::tracing::*;
