//! [`ActorEntity`] implementation for [`CartLine`].

use crate::cart_actor::CartError;
use crate::model::{CartLine, Dish, DishId};
use actor_store::{ActorEntity, Conflict, Stamp};
use async_trait::async_trait;

/// Cart lines have no custom actions.
#[derive(Debug)]
pub enum CartAction {}

#[async_trait]
impl ActorEntity for CartLine {
    type Id = DishId;
    type Create = Dish;
    type Update = ();
    type Action = CartAction;
    type ActionResult = ();
    type Context = ();
    type Error = CartError;

    const COLLECTION: &'static str = "cart";

    fn id(&self) -> DishId {
        self.dish.id
    }

    fn from_create_params(_stamp: Stamp, dish: Dish) -> Result<Self, CartError> {
        Ok(Self { dish, quantity: 1 })
    }

    /// Adding a dish that is already in the cart bumps its quantity instead.
    fn on_conflict(&mut self, _incoming: Self) -> Conflict {
        self.quantity += 1;
        Conflict::Merged
    }

    async fn handle_action(&mut self, action: CartAction, _ctx: &()) -> Result<(), CartError> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(id: u64) -> Dish {
        Dish {
            id: DishId(id),
            name: "Dal".into(),
            description: String::new(),
            price: 100.0,
            category: String::new(),
            image: String::new(),
            restaurant: "Spice Route".into(),
        }
    }

    #[test]
    fn test_repeat_add_merges_into_quantity() {
        let mut line = CartLine::from_create_params(Stamp::next(), dish(7)).unwrap();
        assert_eq!(line.quantity, 1);

        let again = CartLine::from_create_params(Stamp::next(), dish(7)).unwrap();
        assert_eq!(line.on_conflict(again), Conflict::Merged);
        assert_eq!(line.quantity, 2);
        assert_eq!(line.id(), DishId(7));
    }
}
