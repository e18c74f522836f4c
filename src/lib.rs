//! # Platter
//!
//! The data layer of a restaurant-ordering app: accounts, per-restaurant dish inventories,
//! a cart, an order ledger and reviews, all kept in one key-value store.
//!
//! Every persisted collection is owned by a resource actor from [`actor_store`]: one Tokio
//! task that loads the collection when it starts, handles requests one at a time, and
//! rewrites the collection after each change.
//!
//! ## Module Tour
//!
//! - [`model`] - the records (`Account`, `Dish`, `Inventory`, `CartLine`, `Order`, `Review`)
//! - [`account_actor`], [`catalog_actor`], [`cart_actor`], [`order_actor`], [`review_actor`] -
//!   `ActorEntity` implementations, errors and factories
//! - [`clients`] - typed clients for each actor
//! - [`payment`] - the [`PaymentProvider`](payment::PaymentProvider) checkout depends on
//! - [`lifecycle`] - [`RestaurantSystem`](lifecycle::RestaurantSystem), session, config and
//!   tracing setup
//!
//! ## Flow
//!
//! Restaurants add dishes to their inventory; the menu is the flatten of all inventories.
//! Customers add dishes to the cart and check out: the cart total is authorized by the
//! payment provider, recorded as an order, and the cart is emptied. Restaurants move orders
//! through their statuses, and once an order is `Completed` its customer may review it.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod account_actor;
pub mod cart_actor;
pub mod catalog_actor;
pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod payment;
pub mod review_actor;
