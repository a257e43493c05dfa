//! Command implementations for the Shopmaster CLI.

pub mod cart;
pub mod checkout;
pub mod products;
