//! # Payment
//!
//! The checkout's only external boundary. A [`PaymentProvider`] is asked to authorize an
//! amount and either returns a reference, reports that the customer dismissed the flow, or
//! fails because it could not be reached.
//!
//! [`SimulatedPaymentProvider`] answers with a fixed outcome and records every request; the
//! demo binary and the tests use it in place of a real gateway.

pub mod simulated;

pub use simulated::SimulatedPaymentProvider;

use async_trait::async_trait;
use thiserror::Error;

/// What the customer is asked to pay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    /// Amount in the currency's minor unit (paise for INR).
    pub amount_minor: u64,
    pub currency: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Authorized { reference: String },
    /// The customer closed the payment flow without paying.
    Dismissed,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    #[error("Payment provider unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait PaymentProvider: Send + Sync {
    async fn authorize(&self, request: PaymentRequest) -> Result<PaymentOutcome, PaymentError>;
}
