//! Catalog API client.
//!
//! # Architecture
//!
//! - Plain JSON-over-HTTP against a fakestore-style catalog API
//! - The catalog is the source of truth - no local sync, direct API calls
//! - In-memory caching via `moka` for API responses (5 minute TTL)
//!
//! Listing responses also prime the per-product cache, so "add to cart"
//! after browsing the listing never issues a second fetch for the same
//! product (and cannot race one).
//!
//! # Example
//!
//! ```rust,ignore
//! use shopmaster_storefront::catalog::CatalogClient;
//!
//! let client = CatalogClient::new("https://fakestoreapi.com");
//!
//! let products = client.list_products().await?;
//! let product = client.get_product(products[0].id).await?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use thiserror::Error;
use tracing::{debug, instrument};

use shopmaster_core::{Product, ProductId};

/// Cache key for the full product listing.
const LISTING_CACHE_KEY: &str = "products";

/// Errors that can occur when talking to the catalog.
///
/// Everything except `NotFound` means the catalog is unavailable; the
/// triggering action is aborted and the cart left unchanged.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog returned a non-success status code.
    #[error("Catalog returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Product not found.
    #[error("Product not found: {0}")]
    NotFound(ProductId),
}

impl CatalogError {
    /// Whether this error means the catalog itself was unreachable or
    /// returned garbage (as opposed to a well-formed "no such product").
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        !matches!(self, Self::NotFound(_))
    }
}

#[derive(Clone)]
enum CacheValue {
    Product(Box<Product>),
    Listing(Arc<Vec<Product>>),
}

/// Client for the remote product catalog.
///
/// Cheap to clone; product and listing responses are cached for 5 minutes.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
    cache: Cache<String, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog client for the given API base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: base_url.trim_end_matches('/').to_string(),
                cache,
            }),
        }
    }

    /// Fetch the full product listing.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the request fails or the response does
    /// not parse.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        if let Some(CacheValue::Listing(products)) = self.inner.cache.get(LISTING_CACHE_KEY).await {
            debug!("Cache hit for product listing");
            return Ok(products.as_ref().clone());
        }

        let url = format!("{}/products", self.inner.base_url);
        let products: Vec<Product> = self.fetch_json(&url).await?;

        self.inner
            .cache
            .insert(
                LISTING_CACHE_KEY.to_string(),
                CacheValue::Listing(Arc::new(products.clone())),
            )
            .await;

        // Prime the per-product cache so a later add-to-cart for a listed
        // product is served locally instead of refetching by id.
        for product in &products {
            self.inner
                .cache
                .insert(
                    product_cache_key(product.id),
                    CacheValue::Product(Box::new(product.clone())),
                )
                .await;
        }

        Ok(products)
    }

    /// Fetch a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the catalog has no such product,
    /// or another `CatalogError` if the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let cache_key = product_cache_key(id);

        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(*product);
        }

        let url = format!("{}/products/{id}", self.inner.base_url);
        // The catalog answers unknown IDs with a literal `null` body.
        let product: Option<Product> = self.fetch_json(&url).await?;
        let product = product.ok_or(CatalogError::NotFound(id))?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
            .await;

        Ok(product)
    }

    /// Execute a GET request and decode the JSON body.
    async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, CatalogError> {
        let response = self.inner.client.get(url).send().await?;
        let status = response.status();

        // Get response body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(200).collect::<String>(),
                "Catalog returned non-success status"
            );
            return Err(CatalogError::Status(status));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(200).collect::<String>(),
                "Failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })
    }
}

fn product_cache_key(id: ProductId) -> String {
    format!("product:{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::NotFound(ProductId::new(123));
        assert_eq!(err.to_string(), "Product not found: 123");
    }

    #[test]
    fn test_not_found_is_not_unavailable() {
        assert!(!CatalogError::NotFound(ProductId::new(1)).is_unavailable());
        assert!(CatalogError::Status(reqwest::StatusCode::BAD_GATEWAY).is_unavailable());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = CatalogClient::new("https://example.com/");
        assert_eq!(client.inner.base_url, "https://example.com");
    }

    #[test]
    fn test_product_cache_key() {
        assert_eq!(product_cache_key(ProductId::new(7)), "product:7");
    }
}
