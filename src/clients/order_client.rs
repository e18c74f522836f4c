//! # Order Client
//!
//! Checkout and status tracking on top of `ResourceClient<Order>`.

use crate::cart_actor::compute_totals;
use crate::clients::CartClient;
use crate::model::{CheckoutOutcome, DishId, Order, OrderCreate, OrderId, OrderStatus};
use crate::order_actor::{amount_minor, CheckoutTerms, OrderError};
use crate::payment::{PaymentError, PaymentOutcome, PaymentProvider, PaymentRequest};
use actor_store::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(FrameworkError::Storage(e)) => OrderError::DatabaseError(e.to_string()),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl OrderClient {
    /// Turns the current cart into a paid order.
    ///
    /// The cart is snapshotted once; the totals, the payment request and the recorded order
    /// all come from that snapshot. The order is recorded only after the provider authorizes
    /// the payment, and the cart is cleared only after the order is recorded. Once recorded,
    /// the order is returned even if clearing the cart fails. A dismissed or unavailable
    /// payment leaves the cart and the ledger as they were.
    #[instrument(skip(self, cart, payment, terms))]
    pub async fn checkout(
        &self,
        cart: &CartClient,
        payment: &dyn PaymentProvider,
        terms: &CheckoutTerms,
    ) -> Result<CheckoutOutcome, OrderError> {
        let items = cart.lines().await?;
        if items.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        let totals = compute_totals(&items, terms.tax_rate);
        debug!(?totals, lines = items.len(), "Checkout snapshot");

        let request = PaymentRequest {
            amount_minor: amount_minor(totals.total),
            currency: terms.currency.clone(),
            description: format!("Order of {} item(s)", items.len()),
        };
        let reference = match payment.authorize(request).await {
            Ok(PaymentOutcome::Authorized { reference }) => reference,
            Ok(PaymentOutcome::Dismissed) => {
                info!("Payment dismissed");
                return Ok(CheckoutOutcome::Dismissed);
            }
            Err(PaymentError::Unavailable(reason)) => {
                warn!(%reason, "Payment provider unavailable");
                return Err(OrderError::PaymentUnavailable(reason));
            }
        };

        let order = self
            .inner
            .create(OrderCreate {
                items,
                total: totals.total,
                payment_id: reference,
            })
            .await
            .map_err(Self::map_error)?;
        info!(order_id = %order.id, total = order.total, "Order placed");

        // The payment is taken and the order recorded; a stale cart must not fail checkout.
        if let Err(e) = cart.clear().await {
            warn!(order_id = %order.id, error = %e, "Cart not cleared after checkout");
        }
        Ok(CheckoutOutcome::Placed(order))
    }

    /// Moves an order to `status`.
    #[instrument(skip(self))]
    pub async fn set_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        let order = self.inner.update(id, status).await.map_err(Self::map_error)?;
        info!(order_id = %order.id, status = %order.status, "Order status updated");
        Ok(order)
    }

    /// Every order, most recent first.
    pub async fn list_recent(&self) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.list().await?;
        orders.reverse();
        Ok(orders)
    }

    /// Orders attributed to `restaurant`, most recent first.
    pub async fn list_for_restaurant(&self, restaurant: &str) -> Result<Vec<Order>, OrderError> {
        Ok(self
            .list_recent()
            .await?
            .into_iter()
            .filter(|order| order.restaurant() == Some(restaurant))
            .collect())
    }

    /// Orders whose first item is one of `dishes`, most recent first.
    ///
    /// Dish ids never change, so this attribution survives a restaurant renaming itself.
    pub async fn list_for_dishes(
        &self,
        dishes: &HashSet<DishId>,
    ) -> Result<Vec<Order>, OrderError> {
        Ok(self
            .list_recent()
            .await?
            .into_iter()
            .filter(|order| {
                order
                    .items
                    .first()
                    .is_some_and(|line| dishes.contains(&line.dish.id))
            })
            .collect())
    }
}
