//! [`ActorEntity`] implementation for [`Order`].
//!
//! Orders are created from a paid cart snapshot and afterwards only change `status`.

use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use crate::order_actor::OrderError;
use actor_store::{ActorEntity, Stamp};
use async_trait::async_trait;

/// Orders have no custom actions; status changes go through `Update`.
#[derive(Debug)]
pub enum OrderAction {}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderStatus;
    type Action = OrderAction;
    type ActionResult = ();
    type Context = ();
    type Error = OrderError;

    const COLLECTION: &'static str = "orders";

    fn id(&self) -> OrderId {
        self.id
    }

    fn max_stamp_id(&self) -> Option<u64> {
        Some(self.id.0)
    }

    fn from_create_params(stamp: Stamp, params: OrderCreate) -> Result<Self, OrderError> {
        if params.items.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        Ok(Self {
            id: OrderId(stamp.id),
            items: params.items,
            date: stamp.at,
            total: params.total,
            status: OrderStatus::Placed,
            payment_id: params.payment_id,
        })
    }

    /// Any status may follow any other.
    async fn on_update(&mut self, status: OrderStatus, _ctx: &()) -> Result<(), OrderError> {
        self.status = status;
        Ok(())
    }

    async fn handle_action(&mut self, action: OrderAction, _ctx: &()) -> Result<(), OrderError> {
        match action {}
    }
}
