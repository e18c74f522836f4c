use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Time-based dish identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(pub u64);

impl Display for DishId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "dish_{}", self.0)
    }
}

/// A menu item, owned by exactly one restaurant account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    /// Self-describing `data:` URL.
    pub image: String,
    /// Display label of the owning restaurant.
    pub restaurant: String,
}

/// Dish form as submitted by a restaurant operator.
///
/// Name, price and image are required; category and description may be left empty.
#[derive(Debug, Clone, Default)]
pub struct DishDraft {
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub category: String,
    pub image: Option<String>,
}

impl DishDraft {
    pub fn new(name: impl Into<String>, price: f64, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: Some(price),
            image: Some(image.into()),
            ..Self::default()
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// One restaurant's dishes, in the order they were added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    /// Owner's email.
    pub owner: String,
    pub restaurant: String,
    pub dishes: Vec<Dish>,
}

/// Payload for opening an inventory.
#[derive(Debug, Clone)]
pub struct InventoryCreate {
    pub owner: String,
    pub restaurant: String,
}
