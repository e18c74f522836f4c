//! [`ActorEntity`] implementation for [`Review`].
//!
//! The review ledger runs with an [`OrderClient`] as its context: `on_create` consults the
//! order ledger so a review can only be stored for an order that is `Completed` at that
//! moment. Duplicate `(order, restaurant)` keys are rejected by the default `on_conflict`.

use crate::clients::OrderClient;
use crate::model::{OrderStatus, Review, ReviewKey, ReviewSubmission, MAX_COMMENT_CHARS};
use crate::review_actor::ReviewError;
use actor_store::{ActorClient, ActorEntity, Stamp};
use async_trait::async_trait;
use tracing::debug;

/// Reviews have no custom actions.
#[derive(Debug)]
pub enum ReviewAction {}

/// Name recorded for reviews submitted while signed out.
pub const ANONYMOUS: &str = "Anonymous";

/// Checks the form fields, returning the rating and the trimmed comment.
pub fn validate_submission(submission: &ReviewSubmission) -> Result<(u8, &str), ReviewError> {
    let rating = submission
        .rating
        .ok_or_else(|| ReviewError::Validation("please select a rating".into()))?;
    if !(1..=5).contains(&rating) {
        return Err(ReviewError::Validation(format!(
            "rating must be between 1 and 5, got {rating}"
        )));
    }
    let comment = submission.comment.trim();
    if comment.is_empty() {
        return Err(ReviewError::Validation("please write a comment".into()));
    }
    let length = comment.chars().count();
    if length > MAX_COMMENT_CHARS {
        return Err(ReviewError::Validation(format!(
            "comment is {length} characters, the limit is {MAX_COMMENT_CHARS}"
        )));
    }
    Ok((rating, comment))
}

#[async_trait]
impl ActorEntity for Review {
    type Id = ReviewKey;
    type Create = ReviewSubmission;
    type Update = ();
    type Action = ReviewAction;
    type ActionResult = ();
    type Context = OrderClient;
    type Error = ReviewError;

    const COLLECTION: &'static str = "reviews";

    fn id(&self) -> ReviewKey {
        self.key()
    }

    fn max_stamp_id(&self) -> Option<u64> {
        Some(self.id)
    }

    fn from_create_params(stamp: Stamp, params: ReviewSubmission) -> Result<Self, ReviewError> {
        let (rating, comment) = validate_submission(&params)?;
        let comment = comment.to_string();
        let customer = match params.customer.trim() {
            "" => ANONYMOUS.to_string(),
            name => name.to_string(),
        };
        Ok(Self {
            id: stamp.id,
            order_id: params.order_id,
            restaurant: params.restaurant,
            customer,
            rating,
            comment,
            date: stamp.at,
        })
    }

    async fn on_create(&mut self, orders: &OrderClient) -> Result<(), ReviewError> {
        debug!(order_id = %self.order_id, "Checking order status");
        let order = orders
            .get(self.order_id)
            .await?
            .ok_or_else(|| ReviewError::OrderNotFound(self.order_id.to_string()))?;
        if order.status != OrderStatus::Completed {
            return Err(ReviewError::NotCompleted(order.id.to_string()));
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ReviewAction,
        _ctx: &OrderClient,
    ) -> Result<(), ReviewError> {
        match action {}
    }
}
