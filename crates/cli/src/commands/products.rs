//! Catalog browsing commands.

use shopmaster_core::ProductId;
use shopmaster_storefront::{Storefront, StorefrontError};

/// List all catalog products as an ID/title/price/category table.
pub async fn list(storefront: &Storefront) -> Result<(), StorefrontError> {
    let products = storefront.products().await?;

    println!("{:>4}  {:<48} {:>9}  CATEGORY", "ID", "TITLE", "PRICE");
    for product in products {
        let title: String = product.title.chars().take(48).collect();
        println!(
            "{:>4}  {:<48} {:>9}  {}",
            product.id,
            title,
            format!("${:.2}", product.price),
            product.category
        );
    }
    Ok(())
}

/// Show one product in detail.
pub async fn show(storefront: &Storefront, id: i64) -> Result<(), StorefrontError> {
    let product = storefront.product(ProductId::new(id)).await?;

    println!("{}", product.title);
    println!("Price:    ${:.2}", product.price);
    println!("Category: {}", product.category);
    println!("Image:    {}", product.image);
    println!();
    println!("{}", product.description);
    Ok(())
}
