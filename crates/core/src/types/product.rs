//! Product records as returned by the catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProductId;

/// A product as listed by the catalog.
///
/// The catalog is the source of truth for these fields; the cart stores a
/// snapshot taken at add time and never re-reads them afterwards, so a
/// later catalog price change does not affect items already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog product ID.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price in the store currency. Never negative.
    pub price: Decimal,
    /// Long-form description.
    pub description: String,
    /// Catalog category name.
    pub category: String,
    /// Product image URL.
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_catalog_record() {
        // The catalog API serves prices as JSON numbers.
        let json = r#"{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://example.com/81fPKd-2AYL.jpg"
        }"#;

        let product: Product = serde_json::from_str(json).expect("deserialize");
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price, Decimal::from_str("109.95").expect("price"));
        assert_eq!(product.category, "men's clothing");
    }

    #[test]
    fn test_extra_catalog_fields_ignored() {
        // Real catalog responses carry fields we never use (e.g. ratings).
        let json = r#"{
            "id": 2,
            "title": "Mens Casual T-Shirt",
            "price": 22.3,
            "description": "Slim-fitting style",
            "category": "men's clothing",
            "image": "https://example.com/71-3HjGNDUL.jpg",
            "rating": { "rate": 4.1, "count": 259 }
        }"#;

        let product: Product = serde_json::from_str(json).expect("deserialize");
        assert_eq!(product.id, ProductId::new(2));
    }
}
