//! Receipt and total computation.
//!
//! A [`Receipt`] is derived data, never stored: a pure function of a cart
//! snapshot, a customer name, and a point in time. It carries everything an
//! exporter needs to produce a document - no raw cart access required.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::types::LineItem;

/// Default sales tax rate applied at checkout (16%).
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(16, 0, 0, false, 2);

/// Display width the line description is truncated to, in characters.
///
/// Sized so a quantity column, the description, and a price column fit a
/// 35-character thermal-style ticket line.
pub const DESCRIPTION_WIDTH: usize = 23;

/// One line of a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptLine {
    /// Units purchased.
    pub quantity: u32,
    /// Product title, truncated to [`DESCRIPTION_WIDTH`] characters.
    pub description: String,
    /// Price per unit, rounded to two decimals.
    pub unit_price: Decimal,
}

/// Derived summary of a completed cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// One entry per cart line item, in cart order.
    pub lines: Vec<ReceiptLine>,
    /// Sum of `unit price x quantity` over all lines.
    pub subtotal: Decimal,
    /// Tax rate applied (e.g. `0.16` for 16%).
    pub tax_rate: Decimal,
    /// `subtotal x tax_rate`.
    pub tax_amount: Decimal,
    /// `subtotal + tax_amount`.
    pub total: Decimal,
    /// Name the receipt was issued to.
    pub customer_name: String,
    /// When the receipt was issued.
    pub issued_at: DateTime<Utc>,
}

impl Receipt {
    /// Compute a receipt from a cart snapshot.
    ///
    /// An empty snapshot yields a valid receipt with zero amounts, not an
    /// error. All monetary amounts in the result are rounded to two
    /// decimals; intermediate arithmetic keeps full precision.
    #[must_use]
    pub fn compute(
        items: &[LineItem],
        customer_name: &str,
        issued_at: DateTime<Utc>,
        tax_rate: Decimal,
    ) -> Self {
        let subtotal: Decimal = items.iter().map(LineItem::line_total).sum();
        let tax_amount = subtotal * tax_rate;
        let total = subtotal + tax_amount;

        let lines = items
            .iter()
            .map(|item| ReceiptLine {
                quantity: item.quantity,
                description: truncate_description(&item.product.title),
                unit_price: round_amount(item.product.price),
            })
            .collect();

        Self {
            lines,
            subtotal: round_amount(subtotal),
            tax_rate,
            tax_amount: round_amount(tax_amount),
            total: round_amount(total),
            customer_name: customer_name.to_string(),
            issued_at,
        }
    }
}

/// Round a monetary amount to two decimals, half away from zero.
fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Truncate a title to [`DESCRIPTION_WIDTH`] characters.
///
/// Character-based, so multi-byte titles cannot split a code point.
fn truncate_description(title: &str) -> String {
    title.chars().take(DESCRIPTION_WIDTH).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Product, ProductId};
    use chrono::TimeZone;
    use std::str::FromStr;

    fn line_item(id: i64, title: &str, price: &str, quantity: u32) -> LineItem {
        LineItem {
            product: Product {
                id: ProductId::new(id),
                title: title.to_string(),
                price: Decimal::from_str(price).expect("price"),
                description: String::new(),
                category: "test".to_string(),
                image: String::new(),
            },
            quantity,
        }
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).expect("decimal")
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, 14, 30, 0).single().expect("timestamp")
    }

    #[test]
    fn test_empty_cart_yields_zero_receipt() {
        let receipt = Receipt::compute(&[], "Ana", now(), DEFAULT_TAX_RATE);
        assert!(receipt.lines.is_empty());
        assert_eq!(receipt.subtotal, Decimal::ZERO);
        assert_eq!(receipt.tax_amount, Decimal::ZERO);
        assert_eq!(receipt.total, Decimal::ZERO);
        assert_eq!(receipt.customer_name, "Ana");
    }

    #[test]
    fn test_worked_example() {
        // [{id:1, price:10.00, qty:2}, {id:2, price:5.50, qty:1}]
        // -> subtotal 25.50, tax 4.08, total 29.58
        let items = vec![
            line_item(1, "First", "10.00", 2),
            line_item(2, "Second", "5.50", 1),
        ];
        let receipt = Receipt::compute(&items, "Ana", now(), DEFAULT_TAX_RATE);

        assert_eq!(receipt.subtotal, dec("25.50"));
        assert_eq!(receipt.tax_amount, dec("4.08"));
        assert_eq!(receipt.total, dec("29.58"));
        assert_eq!(receipt.lines.len(), 2);
    }

    #[test]
    fn test_lines_follow_cart_order() {
        let items = vec![
            line_item(3, "Third", "1.00", 1),
            line_item(1, "First", "1.00", 1),
        ];
        let receipt = Receipt::compute(&items, "Ana", now(), DEFAULT_TAX_RATE);
        let descriptions: Vec<&str> = receipt
            .lines
            .iter()
            .map(|line| line.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["Third", "First"]);
    }

    #[test]
    fn test_description_truncated_to_display_width() {
        let items = vec![line_item(
            1,
            "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "109.95",
            1,
        )];
        let receipt = Receipt::compute(&items, "Ana", now(), DEFAULT_TAX_RATE);

        let line = receipt.lines.first().expect("line");
        assert_eq!(line.description.chars().count(), DESCRIPTION_WIDTH);
        assert_eq!(line.description, "Fjallraven - Foldsack N");
    }

    #[test]
    fn test_custom_tax_rate() {
        let items = vec![line_item(1, "First", "100.00", 1)];
        let receipt = Receipt::compute(&items, "Ana", now(), dec("0.07"));
        assert_eq!(receipt.tax_amount, dec("7.00"));
        assert_eq!(receipt.total, dec("107.00"));
    }

    #[test]
    fn test_amounts_rounded_to_two_decimals() {
        // 3 x 0.333 = 0.999 subtotal; tax 0.15984 -> 0.16
        let items = vec![line_item(1, "Odd", "0.333", 3)];
        let receipt = Receipt::compute(&items, "Ana", now(), DEFAULT_TAX_RATE);
        assert_eq!(receipt.subtotal, dec("1.00"));
        assert_eq!(receipt.tax_amount, dec("0.16"));
    }
}
