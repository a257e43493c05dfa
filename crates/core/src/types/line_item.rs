//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Product;

/// One product entry in the cart with its quantity.
///
/// Invariants (enforced by [`crate::cart::CartStore`]):
/// - `quantity` is always >= 1; a decrement to zero removes the line item
/// - at most one line item per product ID exists in a cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Snapshot of the product captured at add time.
    pub product: Product,
    /// Units of the product in the cart.
    pub quantity: u32,
}

impl LineItem {
    /// Price of this line: unit price times quantity, full precision.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}
