//! Runs one customer and one restaurant through the whole flow: menu, cart, checkout,
//! fulfilment and review.
//!
//! Uses the store named by `PLATTER_DB` (in-memory when unset) and a payment provider that
//! approves everything.

use platter::account_actor::AccountError;
use platter::catalog_actor::{ImageUpload, MenuQuery};
use platter::lifecycle::{setup_tracing, RestaurantSystem, SystemConfig, SystemError};
use platter::model::{CheckoutOutcome, DishDraft, OrderStatus, Registration, Role};
use platter::payment::SimulatedPaymentProvider;
use std::sync::Arc;
use tracing::{error, info, warn, Instrument};

/// Registers, treating an existing account as success so the demo can rerun on a file store.
async fn ensure_registered(
    system: &RestaurantSystem,
    registration: Registration,
) -> Result<(), SystemError> {
    match system.register(registration).await {
        Ok(account) => {
            info!(key = %account.key(), "Account registered");
            Ok(())
        }
        Err(SystemError::Account(AccountError::AlreadyRegistered)) => {
            info!("Account already registered");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    setup_tracing();

    let config = SystemConfig::from_env();
    info!(?config, "Starting platter");
    let system = RestaurantSystem::open(config, Arc::new(SimulatedPaymentProvider::approving()))?;

    // Restaurant stocks its menu
    let span = tracing::info_span!("restaurant_setup");
    let (dal, naan) = async {
        ensure_registered(
            &system,
            Registration::restaurant("Ravi", "Spice Route", "chef@x.com", "chefpw"),
        )
        .await?;
        system.login(Role::Restaurant, "chef@x.com", "chefpw").await?;

        let image = ImageUpload::new("image/png", vec![0x89, b'P', b'N', b'G']).to_data_url();
        let dal = system
            .add_dish(DishDraft::new("Dal Makhani", 100.0, image.clone()).category("Mains"))
            .await?;
        let naan = system
            .add_dish(DishDraft::new("Butter Naan", 50.0, image).category("Breads"))
            .await?;
        system.logout()?;
        Ok::<_, SystemError>((dal, naan))
    }
    .instrument(span)
    .await?;

    // Customer signs up and signs in
    ensure_registered(&system, Registration::customer("Asha", "a@x.com", "pw1")).await?;
    match system.login(Role::Customer, "a@x.com", "wrong").await {
        Ok(_) => warn!("Wrong password was accepted"),
        Err(e) => info!(error = %e, "Wrong password rejected"),
    }
    let session = system.login(Role::Customer, "a@x.com", "pw1").await?;
    info!(name = %session.display_name, "Signed in");

    // Browse and fill the cart
    let mains = system.menu(&MenuQuery::default().category("Mains")).await?;
    let categories = system.menu_categories().await?;
    info!(mains = mains.len(), ?categories, "Menu loaded");

    system.add_to_cart(dal.clone()).await?;
    system.add_to_cart(dal).await?;
    system.add_to_cart(naan).await?;
    let totals = system.cart_totals().await?;
    info!(
        subtotal = totals.subtotal,
        tax = totals.tax,
        total = totals.total,
        "Cart totals"
    );

    let span = tracing::info_span!("checkout");
    let order = match system.checkout().instrument(span).await? {
        CheckoutOutcome::Placed(order) => order,
        CheckoutOutcome::Dismissed => {
            warn!("Payment dismissed");
            return system.shutdown().await;
        }
    };
    info!(order_id = %order.id, total = order.total, "Order placed");

    // Restaurant fulfils the order
    system.logout()?;
    system.login(Role::Restaurant, "chef@x.com", "chefpw").await?;
    for status in [OrderStatus::Preparing, OrderStatus::Completed] {
        system.set_order_status(order.id, status).await?;
    }
    system.logout()?;

    // Customer reviews it
    system.login(Role::Customer, "a@x.com", "pw1").await?;
    info!(allowed = system.can_review(order.id).await?, "Review check");
    let review = system.submit_review(order.id, Some(4), "Good").await?;
    info!(key = %review.key(), rating = review.rating, "Review stored");

    match system.submit_review(order.id, Some(5), "Again").await {
        Ok(_) => warn!("Duplicate review was accepted"),
        Err(e) => info!(error = %e, "Duplicate review rejected"),
    }

    if let Err(e) = system.shutdown().await {
        error!(error = %e, "Shutdown failed");
        return Err(e);
    }
    info!("Demo completed successfully");
    Ok(())
}
