//! Custom actions for the Catalog actor.
//!
//! Dishes are never stored on their own: each one lives inside its owner's
//! [`Inventory`](crate::model::Inventory), so adding or relabelling dishes are actions on
//! that inventory.

use crate::model::{Dish, DishDraft};

#[derive(Debug, Clone)]
pub enum CatalogAction {
    /// Validates the draft, assigns a fresh id, and appends the dish.
    AddDish(DishDraft),
    /// Rewrites the restaurant label on the inventory and on every dish in it.
    Relabel(String),
}

/// Results from CatalogActions; variants match 1:1 with CatalogAction.
#[derive(Debug, Clone)]
pub enum CatalogActionResult {
    AddDish(Dish),
    Relabel(usize),
}
