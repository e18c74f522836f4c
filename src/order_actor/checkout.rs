//! Checkout terms and amount conversion.

use crate::cart_actor::DEFAULT_TAX_RATE;

/// Money settings applied at checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutTerms {
    pub tax_rate: f64,
    pub currency: String,
}

impl Default for CheckoutTerms {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            currency: "INR".to_string(),
        }
    }
}

/// `total` in minor units, rounded to the nearest one.
pub fn amount_minor(total: f64) -> u64 {
    (total * 100.0).round().max(0.0) as u64
}
