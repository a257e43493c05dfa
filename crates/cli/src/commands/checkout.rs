//! Checkout command: receipt computation plus ticket output.

use shopmaster_storefront::export::render_ticket;
use shopmaster_storefront::{Storefront, StorageError, StorefrontError};

/// Simulate checkout, print the ticket, and optionally save it to a file.
pub fn run(storefront: &mut Storefront, name: &str, save: bool) -> Result<(), StorefrontError> {
    if storefront.cart().is_empty() {
        println!("Cart is empty; the ticket will have no lines.");
    }

    let receipt = storefront.checkout(name)?;
    let ticket = render_ticket(&receipt, &storefront.config().store_name);

    println!("{ticket}");

    if save {
        let path = format!(
            "ticket_shopmaster_{}.txt",
            receipt.issued_at.timestamp_millis()
        );
        std::fs::write(&path, &ticket).map_err(StorageError::from)?;
        println!("Ticket saved to {path}");
    }

    Ok(())
}
