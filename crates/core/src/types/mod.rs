//! Domain types shared across Shopmaster components.

mod id;
mod line_item;
mod product;

pub use id::ProductId;
pub use line_item::LineItem;
pub use product::Product;
