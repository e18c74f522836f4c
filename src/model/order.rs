//! Placed orders.
//!
//! # Actor Framework
//! Managed by a [`ResourceActor`](actor_store::ResourceActor) under the `orders` collection.
//! Only `status` changes after creation; orders are never deleted.

use crate::model::CartLine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Time-based order identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Fulfilment state. Any status may be set from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Placed,
    Pending,
    Preparing,
    #[serde(rename = "Out for delivery")]
    OutForDelivery,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Every status, in the order operators pick from.
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Placed,
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "Placed",
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OutForDelivery => "Out for delivery",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<CartLine>,
    pub date: DateTime<Utc>,
    pub total: f64,
    pub status: OrderStatus,
    pub payment_id: String,
}

impl Order {
    /// Restaurant the order is attributed to: the first item's.
    ///
    /// Carts mixing restaurants are not modelled; every item after the first is assumed to
    /// come from the same restaurant.
    pub fn restaurant(&self) -> Option<&str> {
        self.items.first().map(|line| line.dish.restaurant.as_str())
    }
}

/// Payload for recording a paid order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub items: Vec<CartLine>,
    pub total: f64,
    pub payment_id: String,
}

/// Outcome of a checkout that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    Placed(Order),
    /// The customer closed the payment flow; nothing was recorded.
    Dismissed,
}
