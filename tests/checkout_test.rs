//! Checkout through the whole system with each payment outcome.

use actor_store::MemoryStore;
use platter::cart_actor::compute_totals;
use platter::lifecycle::{RestaurantSystem, SystemConfig, SystemError};
use platter::model::{CheckoutOutcome, Dish, DishId, OrderStatus};
use platter::order_actor::OrderError;
use platter::payment::SimulatedPaymentProvider;
use std::sync::Arc;

fn dish(id: u64, price: f64) -> Dish {
    Dish {
        id: DishId(id),
        name: format!("Dish {id}"),
        description: String::new(),
        price,
        category: String::new(),
        image: String::new(),
        restaurant: "Spice Route".into(),
    }
}

fn start(config: SystemConfig, payment: &Arc<SimulatedPaymentProvider>) -> RestaurantSystem {
    RestaurantSystem::new(config, Arc::new(MemoryStore::new()), payment.clone())
}

#[tokio::test]
async fn test_approved_payment_snapshots_cart() {
    let payment = Arc::new(SimulatedPaymentProvider::approving());
    let system = start(SystemConfig::default(), &payment);
    system.add_to_cart(dish(7, 100.0)).await.unwrap();
    system.add_to_cart(dish(7, 100.0)).await.unwrap();
    system.add_to_cart(dish(8, 50.0)).await.unwrap();
    let snapshot = system.cart_lines().await.unwrap();

    let CheckoutOutcome::Placed(order) = system.checkout().await.unwrap() else {
        panic!("payment was approved");
    };

    assert_eq!(order.items, snapshot);
    assert_eq!(order.total, compute_totals(&snapshot, 0.05).total);
    assert_eq!(order.status, OrderStatus::Placed);
    assert!(order.payment_id.starts_with("pay_sim_"));
    assert!(system.cart_lines().await.unwrap().is_empty());
    assert_eq!(system.orders().await.unwrap(), vec![order]);

    let requests = payment.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].amount_minor, 26250);
    assert_eq!(requests[0].currency, "INR");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_dismissed_payment_keeps_cart() {
    let payment = Arc::new(SimulatedPaymentProvider::dismissing());
    let system = start(SystemConfig::default(), &payment);
    system.add_to_cart(dish(7, 100.0)).await.unwrap();

    assert_eq!(
        system.checkout().await.unwrap(),
        CheckoutOutcome::Dismissed
    );
    assert_eq!(system.cart_lines().await.unwrap().len(), 1);
    assert!(system.orders().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unavailable_provider_keeps_cart() {
    let payment = Arc::new(SimulatedPaymentProvider::unavailable());
    let system = start(SystemConfig::default(), &payment);
    system.add_to_cart(dish(7, 100.0)).await.unwrap();

    let result = system.checkout().await;
    assert!(matches!(
        result,
        Err(SystemError::Order(OrderError::PaymentUnavailable(_)))
    ));
    assert_eq!(system.cart_lines().await.unwrap().len(), 1);
    assert!(system.orders().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_cart_is_rejected_before_payment() {
    let payment = Arc::new(SimulatedPaymentProvider::approving());
    let system = start(SystemConfig::default(), &payment);

    let result = system.checkout().await;
    assert!(matches!(
        result,
        Err(SystemError::Order(OrderError::EmptyCart))
    ));
    assert!(payment.requests().is_empty());
    assert!(system.orders().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_configured_terms_are_charged() {
    let payment = Arc::new(SimulatedPaymentProvider::approving());
    let config = SystemConfig {
        tax_rate: 0.18,
        currency: "USD".into(),
        ..SystemConfig::default()
    };
    let system = start(config, &payment);
    system.add_to_cart(dish(1, 10.0)).await.unwrap();

    let totals = system.cart_totals().await.unwrap();
    assert!((totals.total - 11.8).abs() < 1e-9);
    let CheckoutOutcome::Placed(order) = system.checkout().await.unwrap() else {
        panic!("payment was approved");
    };
    assert_eq!(order.total, totals.total);
    assert_eq!(payment.requests()[0].amount_minor, 1180);
    assert_eq!(payment.requests()[0].currency, "USD");

    system.shutdown().await.unwrap();
}
