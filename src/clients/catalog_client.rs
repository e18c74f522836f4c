//! # Catalog Client
//!
//! Dish management and menu reads on top of `ResourceClient<Inventory>`.

use crate::catalog_actor::entity::validate_draft;
use crate::catalog_actor::{CatalogAction, CatalogActionResult, CatalogError, MenuQuery};
use crate::model::{Account, Dish, DishDraft, Inventory, InventoryCreate};
use actor_store::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Inventory>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Inventory>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Inventory> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Inventory> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast::<CatalogError>() {
            Ok(err) => err,
            Err(FrameworkError::Storage(e)) => CatalogError::DatabaseError(e.to_string()),
            Err(other) => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CatalogClient {
    /// Adds a dish to `owner`'s inventory, opening the inventory on first use.
    ///
    /// The draft is validated before anything is written, so a rejected dish never leaves
    /// an empty inventory behind.
    #[instrument(skip(self, owner, draft), fields(owner = %owner.email))]
    pub async fn add_dish(&self, owner: &Account, draft: DishDraft) -> Result<Dish, CatalogError> {
        let label = owner
            .restaurant_label()
            .ok_or_else(|| CatalogError::NotRestaurant(owner.email.clone()))?;
        validate_draft(&draft)?;

        debug!("Opening inventory");
        self.inner
            .create(InventoryCreate {
                owner: owner.email.clone(),
                restaurant: label,
            })
            .await
            .map_err(Self::map_error)?;

        match self
            .inner
            .perform_action(owner.email.clone(), CatalogAction::AddDish(draft))
            .await
            .map_err(Self::map_error)?
        {
            CatalogActionResult::AddDish(dish) => {
                info!(dish_id = %dish.id, "Dish added");
                Ok(dish)
            }
            other => Err(unexpected(other)),
        }
    }

    /// The owner's dishes in insertion order; empty if they never added one.
    #[instrument(skip(self))]
    pub async fn list_for_owner(&self, owner_email: &str) -> Result<Vec<Dish>, CatalogError> {
        debug!("Sending request");
        Ok(self
            .get(owner_email.to_string())
            .await?
            .map(|inventory| inventory.dishes)
            .unwrap_or_default())
    }

    /// Every dish of every restaurant: owners in insertion order, then dishes in insertion
    /// order. Recomputed from the inventories on each call.
    #[instrument(skip(self))]
    pub async fn list_global(&self) -> Result<Vec<Dish>, CatalogError> {
        debug!("Sending request");
        Ok(self
            .list()
            .await?
            .into_iter()
            .flat_map(|inventory| inventory.dishes)
            .collect())
    }

    /// The global menu narrowed by `query`.
    #[instrument(skip(self))]
    pub async fn menu(&self, query: &MenuQuery) -> Result<Vec<Dish>, CatalogError> {
        Ok(query.apply(self.list_global().await?))
    }

    /// Re-stamps the owner's inventory with a new restaurant label. Returns how many dishes
    /// were relabelled (zero when the owner has no inventory yet).
    #[instrument(skip(self))]
    pub async fn relabel(&self, owner_email: &str, label: &str) -> Result<usize, CatalogError> {
        if self.get(owner_email.to_string()).await?.is_none() {
            return Ok(0);
        }
        match self
            .inner
            .perform_action(
                owner_email.to_string(),
                CatalogAction::Relabel(label.to_string()),
            )
            .await
            .map_err(Self::map_error)?
        {
            CatalogActionResult::Relabel(count) => Ok(count),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: CatalogActionResult) -> CatalogError {
    CatalogError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}
