//! The storefront application service.
//!
//! [`Storefront`] owns the catalog client, the cart session, and the
//! notification port, and exposes the use-case methods a frontend calls.
//! There is no ambient shared cart: frontends hold a `Storefront` and pass
//! it to their handlers explicitly.
//!
//! Control flow follows the demo's event loop: browse the catalog, mutate
//! the cart (each mutation is persisted before the call returns), then
//! check out to produce a receipt and empty the cart. A catalog failure
//! aborts the triggering action with the cart untouched.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::instrument;

use shopmaster_core::{CartMutation, CartStore, Product, ProductId, Receipt};

use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::notify::{Notice, Notifier};
use crate::session::CartSession;
use crate::storage::CartStorage;

// =============================================================================
// Cart display views
// =============================================================================

/// Cart item display data for frontends.
#[derive(Debug, Clone)]
pub struct CartItemView {
    /// Product ID, for follow-up mutations.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Units in the cart.
    pub quantity: u32,
    /// Formatted unit price.
    pub price: String,
    /// Formatted line total.
    pub line_price: String,
}

/// Cart display data for frontends.
#[derive(Debug, Clone)]
pub struct CartView {
    /// One entry per line item, in cart order.
    pub items: Vec<CartItemView>,
    /// Formatted cart total (pre-tax).
    pub total: String,
    /// Sum of all quantities.
    pub item_count: u64,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: "$0.00".to_string(),
            item_count: 0,
        }
    }
}

/// Format an amount as a two-decimal price string.
fn format_price(amount: Decimal) -> String {
    format!("${amount:.2}")
}

impl From<&CartStore> for CartView {
    fn from(cart: &CartStore) -> Self {
        Self {
            items: cart
                .snapshot()
                .iter()
                .map(|item| CartItemView {
                    id: item.product.id,
                    title: item.product.title.clone(),
                    quantity: item.quantity,
                    price: format_price(item.product.price),
                    line_price: format_price(item.line_total()),
                })
                .collect(),
            total: format_price(cart.total_amount()),
            item_count: cart.total_quantity(),
        }
    }
}

// =============================================================================
// Storefront
// =============================================================================

/// Application service tying the catalog, cart, and notifier together.
pub struct Storefront {
    config: StorefrontConfig,
    catalog: CatalogClient,
    session: CartSession,
    notifier: Arc<dyn Notifier>,
}

impl Storefront {
    /// Build a storefront from configuration, hydrating the cart.
    #[must_use]
    pub fn new(config: StorefrontConfig, notifier: Arc<dyn Notifier>) -> Self {
        let catalog = CatalogClient::new(&config.api_url);
        let session = CartSession::open(CartStorage::new(&config.data_dir));
        Self {
            config,
            catalog,
            session,
            notifier,
        }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Read-only view of the cart store.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        self.session.store()
    }

    /// Display view of the current cart.
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        CartView::from(self.cart())
    }

    /// Fetch the product listing.
    ///
    /// # Errors
    ///
    /// Returns a catalog error (after notifying) if the listing cannot be
    /// fetched.
    pub async fn products(&self) -> Result<Vec<Product>> {
        match self.catalog.list_products().await {
            Ok(products) => Ok(products),
            Err(e) => {
                self.notifier.notify(&Notice::CatalogUnavailable {
                    detail: e.to_string(),
                });
                Err(e.into())
            }
        }
    }

    /// Fetch a single product.
    ///
    /// # Errors
    ///
    /// Returns a catalog error if the product cannot be fetched.
    pub async fn product(&self, id: ProductId) -> Result<Product> {
        Ok(self.catalog.get_product(id).await?)
    }

    /// Look up a product and add it to the cart.
    ///
    /// The lookup completes before the cart is touched; a failed lookup
    /// leaves the cart unchanged. Thanks to the catalog cache this is a
    /// local operation for any product already seen in a listing.
    ///
    /// # Errors
    ///
    /// Returns a catalog error if the product cannot be resolved, or a
    /// storage error if the mutation could not be persisted.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn add_to_cart(&mut self, id: ProductId, quantity: i64) -> Result<CartMutation> {
        let product = match self.catalog.get_product(id).await {
            Ok(product) => product,
            Err(e) => {
                self.notifier.notify(&Notice::CatalogUnavailable {
                    detail: e.to_string(),
                });
                return Err(e.into());
            }
        };

        let mutation = self.session.add(&product, quantity)?;
        if let CartMutation::Added { quantity } | CartMutation::Updated { quantity } = mutation {
            self.notifier.notify(&Notice::ItemAdded {
                title: product.title,
                quantity,
            });
        }
        Ok(mutation)
    }

    /// Apply a signed quantity delta to a cart line.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the mutation could not be persisted.
    pub fn update_quantity(&mut self, id: ProductId, delta: i64) -> Result<CartMutation> {
        let title = self.line_title(id);
        let mutation = self.session.update_quantity(id, delta)?;
        if mutation == CartMutation::Removed
            && let Some(title) = title
        {
            self.notifier.notify(&Notice::ItemRemoved { title });
        }
        Ok(mutation)
    }

    /// Remove a line item from the cart.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the mutation could not be persisted.
    pub fn remove_from_cart(&mut self, id: ProductId) -> Result<CartMutation> {
        let title = self.line_title(id);
        let mutation = self.session.remove(id)?;
        if mutation == CartMutation::Removed
            && let Some(title) = title
        {
            self.notifier.notify(&Notice::ItemRemoved { title });
        }
        Ok(mutation)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the empty state could not be persisted.
    pub fn clear_cart(&mut self) -> Result<()> {
        self.session.clear()?;
        Ok(())
    }

    /// Simulate checkout: compute the receipt, then clear the cart.
    ///
    /// An empty cart checks out to a valid zero-amount receipt.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the emptied cart could not be persisted.
    #[instrument(skip(self, customer_name))]
    pub fn checkout(&mut self, customer_name: &str) -> Result<Receipt> {
        let receipt = Receipt::compute(
            self.cart().snapshot(),
            customer_name,
            Utc::now(),
            self.config.tax_rate,
        );
        self.session.clear()?;
        self.notifier.notify(&Notice::CheckoutComplete {
            customer: receipt.customer_name.clone(),
            total: receipt.total,
        });
        Ok(receipt)
    }

    fn line_title(&self, id: ProductId) -> Option<String> {
        self.cart()
            .snapshot()
            .iter()
            .find(|item| item.product.id == id)
            .map(|item| item.product.title.clone())
    }
}
