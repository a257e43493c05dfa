//! Shopmaster Core - Cart and receipt domain logic.
//!
//! This crate provides the pure domain logic shared by all Shopmaster
//! components:
//! - `storefront` - Application layer (catalog client, persistence, checkout)
//! - `cli` - Command-line storefront driver
//!
//! # Architecture
//!
//! The core crate contains only types and logic - no I/O, no HTTP clients,
//! no filesystem access. Persistence and catalog access live in the
//! storefront crate; this keeps the cart state machine and the receipt
//! calculator independently testable.
//!
//! # Modules
//!
//! - [`types`] - Product records, line items, and type-safe IDs
//! - [`cart`] - The [`cart::CartStore`] state machine
//! - [`receipt`] - Pure receipt/total computation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod receipt;
pub mod types;

pub use cart::{CartMutation, CartStore, parse_quantity};
pub use receipt::{Receipt, ReceiptLine};
pub use types::*;
