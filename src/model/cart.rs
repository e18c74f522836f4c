use crate::model::Dish;
use serde::{Deserialize, Serialize};

/// A dish in the cart with its quantity (always at least 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub dish: Dish,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.dish.price * f64::from(self.quantity)
    }
}

/// Money breakdown of a cart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}
