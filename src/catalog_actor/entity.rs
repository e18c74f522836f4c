//! [`ActorEntity`] implementation for [`Inventory`].
//!
//! One record per restaurant owner, persisted under `restaurant_dishes` in owner insertion
//! order. The global menu is the flatten of these records and is never stored.

use super::actions::{CatalogAction, CatalogActionResult};
use crate::catalog_actor::CatalogError;
use crate::model::{Dish, DishDraft, DishId, Inventory, InventoryCreate};
use actor_store::{ActorEntity, Conflict, Stamp};
use async_trait::async_trait;

/// Checks the required dish fields, returning the price and image.
pub fn validate_draft(draft: &DishDraft) -> Result<(f64, &str), CatalogError> {
    if draft.name.trim().is_empty() {
        return Err(CatalogError::MissingField("name"));
    }
    let price = draft.price.ok_or(CatalogError::MissingField("price"))?;
    if !price.is_finite() || price < 0.0 {
        return Err(CatalogError::InvalidPrice(price));
    }
    let image = draft
        .image
        .as_deref()
        .filter(|image| !image.trim().is_empty())
        .ok_or(CatalogError::MissingField("image"))?;
    Ok((price, image))
}

#[async_trait]
impl ActorEntity for Inventory {
    type Id = String;
    type Create = InventoryCreate;
    type Update = ();
    type Action = CatalogAction;
    type ActionResult = CatalogActionResult;
    type Context = ();
    type Error = CatalogError;

    const COLLECTION: &'static str = "restaurant_dishes";

    fn id(&self) -> String {
        self.owner.clone()
    }

    fn max_stamp_id(&self) -> Option<u64> {
        self.dishes.iter().map(|dish| dish.id.0).max()
    }

    fn from_create_params(_stamp: Stamp, params: InventoryCreate) -> Result<Self, CatalogError> {
        Ok(Self {
            owner: params.owner,
            restaurant: params.restaurant,
            dishes: Vec::new(),
        })
    }

    /// Opening an inventory that already exists is a no-op and writes nothing.
    fn on_conflict(&mut self, _incoming: Self) -> Conflict {
        Conflict::Keep
    }

    async fn handle_action(
        &mut self,
        action: CatalogAction,
        _ctx: &(),
    ) -> Result<CatalogActionResult, CatalogError> {
        match action {
            CatalogAction::AddDish(draft) => {
                let (price, image) = validate_draft(&draft)?;
                let dish = Dish {
                    id: DishId(Stamp::next().id),
                    name: draft.name.trim().to_string(),
                    description: draft.description.trim().to_string(),
                    price,
                    category: draft.category.trim().to_string(),
                    image: image.to_string(),
                    restaurant: self.restaurant.clone(),
                };
                self.dishes.push(dish.clone());
                Ok(CatalogActionResult::AddDish(dish))
            }
            CatalogAction::Relabel(label) => {
                for dish in &mut self.dishes {
                    dish.restaurant = label.clone();
                }
                self.restaurant = label;
                Ok(CatalogActionResult::Relabel(self.dishes.len()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory() -> Inventory {
        Inventory::from_create_params(
            Stamp::next(),
            InventoryCreate {
                owner: "chef@x.com".into(),
                restaurant: "Spice Route".into(),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_required_fields() {
        let mut draft = DishDraft::new("Dal", 120.0, "data:image/png;base64,AA==");
        assert!(validate_draft(&draft).is_ok());

        draft.name = "  ".into();
        assert_eq!(validate_draft(&draft), Err(CatalogError::MissingField("name")));

        let mut draft = DishDraft::new("Dal", 120.0, "");
        assert_eq!(validate_draft(&draft), Err(CatalogError::MissingField("image")));
        draft.image = None;
        assert_eq!(validate_draft(&draft), Err(CatalogError::MissingField("image")));

        let mut draft = DishDraft::new("Dal", 120.0, "img");
        draft.price = None;
        assert_eq!(validate_draft(&draft), Err(CatalogError::MissingField("price")));
        draft.price = Some(-1.0);
        assert_eq!(validate_draft(&draft), Err(CatalogError::InvalidPrice(-1.0)));
    }

    #[tokio::test]
    async fn test_add_dish_stamps_owner_label() {
        let mut inventory = inventory();
        let result = inventory
            .handle_action(
                CatalogAction::AddDish(DishDraft::new(" Dal ", 120.0, "img").category("Mains")),
                &(),
            )
            .await
            .unwrap();
        let CatalogActionResult::AddDish(dish) = result else {
            panic!("expected AddDish result");
        };
        assert_eq!(dish.name, "Dal");
        assert_eq!(dish.restaurant, "Spice Route");
        assert_eq!(dish.description, "");
        assert_eq!(inventory.dishes, vec![dish.clone()]);
        assert_eq!(inventory.max_stamp_id(), Some(dish.id.0));
    }

    #[test]
    fn test_reopening_keeps_stored_inventory() {
        let mut stored = inventory();
        stored.dishes.push(Dish {
            id: DishId(1),
            name: "Dal".into(),
            description: String::new(),
            price: 120.0,
            category: String::new(),
            image: "img".into(),
            restaurant: "Spice Route".into(),
        });
        let before = stored.clone();

        assert_eq!(stored.on_conflict(inventory()), Conflict::Keep);
        assert_eq!(stored, before);
    }

    #[tokio::test]
    async fn test_relabel_rewrites_every_dish() {
        let mut inventory = inventory();
        for name in ["Dal", "Naan"] {
            inventory
                .handle_action(CatalogAction::AddDish(DishDraft::new(name, 50.0, "img")), &())
                .await
                .unwrap();
        }
        inventory
            .handle_action(CatalogAction::Relabel("Route 66".into()), &())
            .await
            .unwrap();
        assert_eq!(inventory.restaurant, "Route 66");
        assert!(inventory.dishes.iter().all(|d| d.restaurant == "Route 66"));
    }
}
