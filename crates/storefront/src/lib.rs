//! Shopmaster storefront application layer.
//!
//! Wires the pure cart/receipt core to the outside world: the remote
//! product catalog, the durable cart slot on disk, and a notification
//! port for reporting outcomes. The `cli` crate drives this layer; the
//! core never sees I/O.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration
//! - [`catalog`] - HTTP catalog client with in-memory caching
//! - [`storage`] - Cart persistence adapter
//! - [`session`] - Cart store with write-through persistence
//! - [`notify`] - Notification port
//! - [`export`] - Fixed-width ticket rendering
//! - [`state`] - The [`state::Storefront`] application service

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod notify;
pub mod session;
pub mod state;
pub mod storage;

pub use catalog::{CatalogClient, CatalogError};
pub use config::{ConfigError, StorefrontConfig};
pub use error::{Result, StorefrontError};
pub use notify::{Notice, Notifier, TracingNotifier};
pub use session::CartSession;
pub use state::{CartItemView, CartView, Storefront};
pub use storage::{CartStorage, StorageError};
