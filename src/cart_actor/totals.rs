//! Cart money arithmetic, shared by the cart display and checkout.

use crate::model::{CartLine, Totals};

/// Tax rate applied when no other is configured.
pub const DEFAULT_TAX_RATE: f64 = 0.05;

/// `subtotal = Σ price × quantity`, `tax = subtotal × tax_rate`, `total = subtotal + tax`.
pub fn compute_totals(lines: &[CartLine], tax_rate: f64) -> Totals {
    let subtotal: f64 = lines.iter().map(CartLine::line_total).sum();
    let tax = subtotal * tax_rate;
    Totals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dish, DishId};

    fn line(id: u64, price: f64, quantity: u32) -> CartLine {
        CartLine {
            dish: Dish {
                id: DishId(id),
                name: format!("Dish {id}"),
                description: String::new(),
                price,
                category: String::new(),
                image: String::new(),
                restaurant: "Spice Route".into(),
            },
            quantity,
        }
    }

    #[test]
    fn test_totals_with_default_rate() {
        let totals = compute_totals(&[line(7, 100.0, 2), line(8, 50.0, 1)], DEFAULT_TAX_RATE);
        assert_eq!(totals.subtotal, 250.0);
        assert!((totals.tax - 12.5).abs() < 1e-9);
        assert!((totals.total - 262.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_cart_is_zero() {
        let totals = compute_totals(&[], DEFAULT_TAX_RATE);
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.total, 0.0);
    }
}
