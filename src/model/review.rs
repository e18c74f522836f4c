use crate::model::OrderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Longest accepted review comment, in characters.
pub const MAX_COMMENT_CHARS: usize = 350;

/// At most one review exists per order and restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewKey {
    pub order_id: OrderId,
    pub restaurant: String,
}

impl Display for ReviewKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.order_id, self.restaurant)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: u64,
    pub order_id: OrderId,
    pub restaurant: String,
    pub customer: String,
    pub rating: u8,
    pub comment: String,
    pub date: DateTime<Utc>,
}

impl Review {
    pub fn key(&self) -> ReviewKey {
        ReviewKey {
            order_id: self.order_id,
            restaurant: self.restaurant.clone(),
        }
    }
}

/// Review form. `rating` is `None` when the customer picked no stars.
#[derive(Debug, Clone)]
pub struct ReviewSubmission {
    pub order_id: OrderId,
    pub restaurant: String,
    pub rating: Option<u8>,
    pub comment: String,
    pub customer: String,
}
