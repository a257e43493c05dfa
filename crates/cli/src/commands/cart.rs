//! Cart management commands.

use shopmaster_core::{CartMutation, ProductId, parse_quantity};
use shopmaster_storefront::{Storefront, StorefrontError};

/// Add units of a product to the cart.
///
/// The quantity arrives as free-form text and is coerced the way the cart
/// contract demands: anything that is not a positive integer is rejected
/// without touching the cart.
pub async fn add(
    storefront: &mut Storefront,
    id: i64,
    quantity: &str,
) -> Result<(), StorefrontError> {
    let Some(quantity) = parse_quantity(quantity) else {
        println!("Ignoring invalid quantity {quantity:?}; cart unchanged.");
        return Ok(());
    };

    let mutation = storefront
        .add_to_cart(ProductId::new(id), i64::from(quantity))
        .await?;
    report(mutation, id);
    Ok(())
}

/// Apply a signed quantity delta to a cart line.
pub fn update(storefront: &mut Storefront, id: i64, delta: i64) -> Result<(), StorefrontError> {
    let mutation = storefront.update_quantity(ProductId::new(id), delta)?;
    report(mutation, id);
    Ok(())
}

/// Remove a product from the cart.
pub fn remove(storefront: &mut Storefront, id: i64) -> Result<(), StorefrontError> {
    let mutation = storefront.remove_from_cart(ProductId::new(id))?;
    report(mutation, id);
    Ok(())
}

/// Print the cart contents and totals.
pub fn show(storefront: &Storefront) {
    let view = storefront.cart_view();

    if view.items.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    for item in &view.items {
        println!(
            "{:>4}  {:<40} x{:<3} {:>8}  ({} each)",
            item.id,
            item.title.chars().take(40).collect::<String>(),
            item.quantity,
            item.line_price,
            item.price
        );
    }
    println!();
    println!("{} items, total {}", view.item_count, view.total);
}

/// Empty the cart.
pub fn clear(storefront: &mut Storefront) -> Result<(), StorefrontError> {
    storefront.clear_cart()?;
    println!("Cart cleared.");
    Ok(())
}

fn report(mutation: CartMutation, id: i64) {
    match mutation {
        CartMutation::Added { quantity } => println!("Added product {id} x{quantity}."),
        CartMutation::Updated { quantity } => {
            println!("Product {id} now at quantity {quantity}.");
        }
        CartMutation::Removed => println!("Product {id} removed from cart."),
        CartMutation::Ignored => println!("No matching cart item for product {id}; cart unchanged."),
    }
}
