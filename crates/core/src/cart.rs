//! The cart state machine.
//!
//! [`CartStore`] owns an ordered sequence of [`LineItem`]s and all mutation
//! logic over it. It is deliberately I/O-free: persistence is layered on top
//! by the storefront crate, which inspects the [`CartMutation`] outcome of
//! each operation to decide whether a write is needed.
//!
//! # Contract
//!
//! Malformed mutation requests (non-positive quantities, unknown product
//! IDs) never error and never change state - they report
//! [`CartMutation::Ignored`]. The cart always holds at most one line item
//! per product ID, every quantity is at least 1, and insertion order is
//! preserved across quantity updates.

use rust_decimal::Decimal;

use crate::types::{LineItem, Product, ProductId};

/// Outcome of a cart mutation.
///
/// `Ignored` means the request was malformed or targeted a missing item and
/// the cart is unchanged, so callers can skip the persistence write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartMutation {
    /// A new line item was appended with this quantity.
    Added {
        /// Quantity of the new line item.
        quantity: u32,
    },
    /// An existing line item now has this quantity.
    Updated {
        /// Resulting quantity of the line item.
        quantity: u32,
    },
    /// The line item was removed from the cart.
    Removed,
    /// The request was invalid or targeted nothing; state is unchanged.
    Ignored,
}

impl CartMutation {
    /// Whether this mutation changed cart state (and so must be persisted).
    #[must_use]
    pub const fn changed_state(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Coerce free-form quantity input into a usable quantity.
///
/// Returns `None` for anything that is not a positive integer, matching the
/// cart contract of silently rejecting malformed input.
///
/// # Example
///
/// ```rust
/// # use shopmaster_core::parse_quantity;
/// assert_eq!(parse_quantity("2"), Some(2));
/// assert_eq!(parse_quantity(" 3 "), Some(3));
/// assert_eq!(parse_quantity("0"), None);
/// assert_eq!(parse_quantity("-1"), None);
/// assert_eq!(parse_quantity("abc"), None);
/// ```
#[must_use]
pub fn parse_quantity(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|q| *q >= 1)
}

/// Ordered collection of cart line items, keyed by product ID.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartStore {
    items: Vec<LineItem>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuild a cart from previously persisted line items.
    ///
    /// Hydration replays each item through [`add`](Self::add), so data that
    /// violates the invariants (zero quantities, duplicate product IDs) is
    /// dropped or merged instead of corrupting the cart.
    #[must_use]
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut store = Self::new();
        for item in items {
            store.add(&item.product, i64::from(item.quantity));
        }
        store
    }

    /// Add `quantity` units of `product` to the cart.
    ///
    /// A non-positive quantity is ignored. If a line item for the product
    /// already exists its quantity is incremented; otherwise a snapshot of
    /// the product is appended as a new line item.
    pub fn add(&mut self, product: &Product, quantity: i64) -> CartMutation {
        let Ok(quantity) = u32::try_from(quantity) else {
            return CartMutation::Ignored;
        };
        if quantity == 0 {
            return CartMutation::Ignored;
        }

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product.id == product.id)
        {
            item.quantity = item.quantity.saturating_add(quantity);
            return CartMutation::Updated {
                quantity: item.quantity,
            };
        }

        self.items.push(LineItem {
            product: product.clone(),
            quantity,
        });
        CartMutation::Added { quantity }
    }

    /// Add `delta` (typically +1 or -1) to the quantity of a line item.
    ///
    /// An unknown product ID is ignored. If the resulting quantity drops to
    /// zero or below the line item is removed entirely.
    pub fn update_quantity(&mut self, id: ProductId, delta: i64) -> CartMutation {
        let Some(pos) = self.items.iter().position(|item| item.product.id == id) else {
            return CartMutation::Ignored;
        };
        let Some(item) = self.items.get_mut(pos) else {
            return CartMutation::Ignored;
        };

        let next = i64::from(item.quantity).saturating_add(delta);
        if next <= 0 {
            self.items.remove(pos);
            return CartMutation::Removed;
        }

        item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        CartMutation::Updated {
            quantity: item.quantity,
        }
    }

    /// Remove the line item for `id`, if present. Idempotent.
    pub fn remove(&mut self, id: ProductId) -> CartMutation {
        let before = self.items.len();
        self.items.retain(|item| item.product.id != id);
        if self.items.len() == before {
            CartMutation::Ignored
        } else {
            CartMutation::Removed
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Read-only view of the line items in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart holds no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Sum of all line item quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum()
    }

    /// Sum of `price x quantity` over all line items, full precision.
    ///
    /// Rounding to two decimals happens at presentation time only.
    #[must_use]
    pub fn total_amount(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }
}
