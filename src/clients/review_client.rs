//! # Review Client

use crate::clients::OrderClient;
use crate::model::{OrderId, OrderStatus, Review, ReviewKey, ReviewSubmission};
use crate::review_actor::ReviewError;
use actor_store::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{info, instrument};

/// Client for interacting with the Review actor.
#[derive(Clone)]
pub struct ReviewClient {
    inner: ResourceClient<Review>,
    orders: OrderClient,
}

impl ReviewClient {
    pub fn new(inner: ResourceClient<Review>, orders: OrderClient) -> Self {
        Self { inner, orders }
    }
}

#[async_trait]
impl ActorClient<Review> for ReviewClient {
    type Error = ReviewError;

    fn inner(&self) -> &ResourceClient<Review> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast::<ReviewError>() {
            Ok(err) => err,
            Err(FrameworkError::AlreadyExists(key)) => ReviewError::AlreadyReviewed(key),
            Err(FrameworkError::Storage(e)) => ReviewError::DatabaseError(e.to_string()),
            Err(other) => ReviewError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ReviewClient {
    /// True iff the order exists, is `Completed`, and has no review for `restaurant` yet.
    #[instrument(skip(self))]
    pub async fn can_review(&self, order_id: OrderId, restaurant: &str) -> Result<bool, ReviewError> {
        let completed = self
            .orders
            .get(order_id)
            .await?
            .is_some_and(|order| order.status == OrderStatus::Completed);
        if !completed {
            return Ok(false);
        }
        let key = ReviewKey {
            order_id,
            restaurant: restaurant.to_string(),
        };
        Ok(self.get(key).await?.is_none())
    }

    /// Stores a review. Validation runs first, then the order check, then the duplicate
    /// check; the first failure is returned and nothing is written.
    #[instrument(skip(self, submission), fields(order_id = %submission.order_id))]
    pub async fn submit(&self, submission: ReviewSubmission) -> Result<Review, ReviewError> {
        let review = self
            .inner
            .create(submission)
            .await
            .map_err(Self::map_error)?;
        info!(key = %review.key(), rating = review.rating, "Review submitted");
        Ok(review)
    }

    /// Every review, most recent first.
    pub async fn list_all(&self) -> Result<Vec<Review>, ReviewError> {
        let mut reviews = self.list().await?;
        reviews.reverse();
        Ok(reviews)
    }

    /// Reviews of `restaurant`, most recent first.
    pub async fn list_for_restaurant(&self, restaurant: &str) -> Result<Vec<Review>, ReviewError> {
        Ok(self
            .list_all()
            .await?
            .into_iter()
            .filter(|review| review.restaurant == restaurant)
            .collect())
    }
}
