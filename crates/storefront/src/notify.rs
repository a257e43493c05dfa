//! Notification port.
//!
//! The application reports outcomes through the [`Notifier`] trait instead
//! of depending on a concrete UI toolkit, so the same flows drive a console
//! frontend, a log sink, or a test double. The provided [`TracingNotifier`]
//! routes notices to the tracing subscriber.

use rust_decimal::Decimal;

/// An outcome worth surfacing to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// A product was added to the cart.
    ItemAdded {
        /// Product title.
        title: String,
        /// Units added in this action.
        quantity: u32,
    },
    /// A line item left the cart.
    ItemRemoved {
        /// Product title.
        title: String,
    },
    /// Checkout completed and the ticket was generated.
    CheckoutComplete {
        /// Name the receipt was issued to.
        customer: String,
        /// Final total including tax.
        total: Decimal,
    },
    /// The catalog could not be reached or answered with garbage.
    CatalogUnavailable {
        /// Human-readable failure detail.
        detail: String,
    },
}

/// Port for reporting outcomes to whatever frontend is attached.
pub trait Notifier: Send + Sync {
    /// Deliver a notice.
    fn notify(&self, notice: &Notice);
}

/// Notifier that reports through the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::ItemAdded { title, quantity } => {
                tracing::info!(%title, quantity, "Added to cart");
            }
            Notice::ItemRemoved { title } => {
                tracing::info!(%title, "Removed from cart");
            }
            Notice::CheckoutComplete { customer, total } => {
                tracing::info!(%customer, %total, "Checkout complete");
            }
            Notice::CatalogUnavailable { detail } => {
                tracing::warn!(%detail, "Catalog unavailable");
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::Mutex;

    /// Notifier that records every notice for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        pub notices: Mutex<Vec<Notice>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: &Notice) {
            self.notices
                .lock()
                .expect("notifier lock")
                .push(notice.clone());
        }
    }
}
