use super::config::SystemConfig;
use super::error::SystemError;
use super::session::{Session, SessionError, SessionStore};
use crate::cart_actor::compute_totals;
use crate::catalog_actor::{categories, MenuQuery};
use crate::clients::{AccountClient, CartClient, CatalogClient, OrderClient, ReviewClient};
use crate::model::{
    Account, AccountKey, CartLine, CheckoutOutcome, Dish, DishDraft, DishId, Order, OrderId,
    OrderStatus, ProfileUpdate, Registration, Review, ReviewSubmission, Role, Totals,
};
use crate::payment::PaymentProvider;
use crate::review_actor::{ReviewError, ANONYMOUS};
use crate::{account_actor, cart_actor, catalog_actor, order_actor, review_actor};
use actor_store::{ActorClient, KeyValueStore, MemoryStore, SqliteStore};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{error, info};

/// The application state: every actor, the session and the payment provider, wired to one
/// shared store.
///
/// One system per store at a time is the supported setup. Two systems over the same store
/// each keep their own copy of every collection and rewrite it whole on each mutation, so
/// the last writer's snapshot wins.
///
/// # Example
///
/// ```ignore
/// let system = RestaurantSystem::new(SystemConfig::default(), store, payment);
/// system.register(Registration::customer("Asha", "a@x.com", "pw1")).await?;
/// system.login(Role::Customer, "a@x.com", "pw1").await?;
/// // ... browse, fill the cart, check out ...
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    pub accounts: AccountClient,
    pub catalog: CatalogClient,
    pub cart: CartClient,
    pub orders: OrderClient,
    pub reviews: ReviewClient,
    session: SessionStore,
    payment: Arc<dyn PaymentProvider>,
    config: SystemConfig,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Starts every actor over `storage` and restores the persisted session.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(
        config: SystemConfig,
        storage: Arc<dyn KeyValueStore>,
        payment: Arc<dyn PaymentProvider>,
    ) -> Self {
        let size = config.mailbox_size;

        // 1. Create actors
        let (account_actor, accounts) = account_actor::new(size, storage.clone());
        let (catalog_actor, catalog) = catalog_actor::new(size, storage.clone());
        let (cart_actor, cart) = cart_actor::new(size, storage.clone());
        let (order_actor, orders) = order_actor::new(size, storage.clone());
        let (review_actor, reviews) = review_actor::new(size, storage.clone(), orders.clone());

        // 2. Start them; reviews consult the order ledger
        let handles = vec![
            tokio::spawn(account_actor.run(())),
            tokio::spawn(catalog_actor.run(())),
            tokio::spawn(cart_actor.run(())),
            tokio::spawn(order_actor.run(())),
            tokio::spawn(review_actor.run(orders.clone())),
        ];

        let session = SessionStore::restore(storage);
        info!(actors = handles.len(), "System started");

        Self {
            accounts,
            catalog,
            cart,
            orders,
            reviews,
            session,
            payment,
            config,
            handles,
        }
    }

    /// Like [`new`](Self::new), over the store `config` names: the SQLite file at
    /// `database_path`, or a fresh in-memory store.
    pub fn open(
        config: SystemConfig,
        payment: Arc<dyn PaymentProvider>,
    ) -> Result<Self, SystemError> {
        let storage: Arc<dyn KeyValueStore> = match &config.database_path {
            Some(path) => {
                info!(path = %path.display(), "Opening SQLite store");
                Arc::new(SqliteStore::open(path)?)
            }
            None => Arc::new(MemoryStore::new()),
        };
        Ok(Self::new(config, storage, payment))
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    // --- Accounts & session ---

    pub async fn register(&self, registration: Registration) -> Result<Account, SystemError> {
        Ok(self.accounts.register(registration).await?)
    }

    /// Authenticates and makes the account the current session.
    pub async fn login(
        &self,
        role: Role,
        email: &str,
        password: &str,
    ) -> Result<Session, SystemError> {
        let account = self.accounts.authenticate(role, email, password).await?;
        Ok(self.session.sign_in(&account)?)
    }

    pub fn logout(&self) -> Result<(), SystemError> {
        Ok(self.session.sign_out()?)
    }

    pub fn current_session(&self) -> Option<Session> {
        self.session.current()
    }

    /// Edits a profile, then brings the session and the restaurant's dish labels in line
    /// with the new names.
    pub async fn update_profile(
        &self,
        key: AccountKey,
        update: ProfileUpdate,
    ) -> Result<Account, SystemError> {
        let account = self.accounts.update_profile(key, update).await?;
        self.session.refresh(&account)?;
        if let Some(label) = account.restaurant_label() {
            let relabelled = self.catalog.relabel(&account.email, &label).await?;
            info!(relabelled, "Inventory relabelled");
        }
        Ok(account)
    }

    /// The signed-in restaurant account.
    async fn restaurant_account(&self) -> Result<Account, SystemError> {
        let session = self.session.require_role(Role::Restaurant)?;
        match self.accounts.get(session.key.clone()).await? {
            Some(account) => Ok(account),
            None => Err(SessionError::NotSignedIn.into()),
        }
    }

    /// Ids of the signed-in restaurant's dishes.
    async fn owned_dish_ids(&self) -> Result<HashSet<DishId>, SystemError> {
        let session = self.session.require_role(Role::Restaurant)?;
        Ok(self
            .catalog
            .list_for_owner(&session.key.email)
            .await?
            .iter()
            .map(|dish| dish.id)
            .collect())
    }

    // --- Catalog ---

    /// Adds a dish to the signed-in restaurant's inventory.
    pub async fn add_dish(&self, draft: DishDraft) -> Result<Dish, SystemError> {
        let owner = self.restaurant_account().await?;
        Ok(self.catalog.add_dish(&owner, draft).await?)
    }

    pub async fn my_dishes(&self) -> Result<Vec<Dish>, SystemError> {
        let session = self.session.require_role(Role::Restaurant)?;
        Ok(self.catalog.list_for_owner(&session.key.email).await?)
    }

    pub async fn menu(&self, query: &MenuQuery) -> Result<Vec<Dish>, SystemError> {
        Ok(self.catalog.menu(query).await?)
    }

    pub async fn menu_categories(&self) -> Result<Vec<String>, SystemError> {
        Ok(categories(&self.catalog.list_global().await?))
    }

    // --- Cart ---

    pub async fn add_to_cart(&self, dish: Dish) -> Result<CartLine, SystemError> {
        Ok(self.cart.add(dish).await?)
    }

    pub async fn cart_lines(&self) -> Result<Vec<CartLine>, SystemError> {
        Ok(self.cart.lines().await?)
    }

    pub async fn cart_totals(&self) -> Result<Totals, SystemError> {
        let lines = self.cart.lines().await?;
        Ok(compute_totals(&lines, self.config.tax_rate))
    }

    // --- Orders ---

    pub async fn checkout(&self) -> Result<CheckoutOutcome, SystemError> {
        let terms = self.config.checkout_terms();
        Ok(self
            .orders
            .checkout(&self.cart, self.payment.as_ref(), &terms)
            .await?)
    }

    /// Every order, most recent first.
    pub async fn orders(&self) -> Result<Vec<Order>, SystemError> {
        Ok(self.orders.list_recent().await?)
    }

    pub async fn set_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, SystemError> {
        self.session.require_role(Role::Restaurant)?;
        Ok(self.orders.set_status(id, status).await?)
    }

    /// Orders whose first item is one of the signed-in restaurant's dishes, most recent
    /// first. Unaffected by profile renames.
    pub async fn restaurant_orders(&self) -> Result<Vec<Order>, SystemError> {
        let dishes = self.owned_dish_ids().await?;
        Ok(self.orders.list_for_dishes(&dishes).await?)
    }

    // --- Reviews ---

    /// Whether `order_id` may be reviewed now, for the restaurant of its first item.
    pub async fn can_review(&self, order_id: OrderId) -> Result<bool, SystemError> {
        let Some(order) = self.orders.get(order_id).await? else {
            return Ok(false);
        };
        let Some(restaurant) = order.restaurant() else {
            return Ok(false);
        };
        Ok(self.reviews.can_review(order_id, restaurant).await?)
    }

    /// Reviews `order_id` as the signed-in customer, or as "Anonymous" when signed out.
    pub async fn submit_review(
        &self,
        order_id: OrderId,
        rating: Option<u8>,
        comment: &str,
    ) -> Result<Review, SystemError> {
        let order = self
            .orders
            .get(order_id)
            .await?
            .ok_or_else(|| ReviewError::OrderNotFound(order_id.to_string()))?;
        let customer = self
            .session
            .current()
            .map_or_else(|| ANONYMOUS.to_string(), |session| session.display_name);
        let submission = ReviewSubmission {
            order_id,
            restaurant: order.restaurant().unwrap_or_default().to_string(),
            rating,
            comment: comment.to_string(),
            customer,
        };
        Ok(self.reviews.submit(submission).await?)
    }

    /// Reviews of the signed-in restaurant's orders, most recent first, including those
    /// recorded under an earlier restaurant name.
    pub async fn restaurant_reviews(&self) -> Result<Vec<Review>, SystemError> {
        let orders: HashSet<OrderId> = self
            .restaurant_orders()
            .await?
            .iter()
            .map(|order| order.id)
            .collect();
        Ok(self
            .reviews
            .list_all()
            .await?
            .into_iter()
            .filter(|review| orders.contains(&review.order_id))
            .collect())
    }

    /// Drops every client, then waits for each actor to drain its queue and stop.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        // Closing the channels ends each actor's loop; the review actor's own OrderClient
        // is dropped when it stops.
        drop(self.accounts);
        drop(self.catalog);
        drop(self.cart);
        drop(self.orders);
        drop(self.reviews);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::Shutdown(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
