//! Checkout coordination.
//!
//! The [`Coordinator`] owns one session's catalog, cart and order draft. UI
//! actions arrive as [`UiEvent`] values; the coordinator mutates state,
//! decides which [`Screen`] the modal shows next, submits the order, and
//! publishes [`StoreEvent`] notifications on its event bus.
//!
//! ```text
//! Catalog -> Product -> Cart -> Payment -> Contact -> Success
//!                        ^         |          |
//!                        |     errors stay  alert stays
//!                        +-- modal close from any screen
//! ```

mod coordinator;
mod events;
mod screen;

use larek_core::ValidationError;
use thiserror::Error;

pub use coordinator::{CheckoutState, Coordinator};
pub use events::{StoreEvent, StoreEventKind, UiEvent, UiEventKind};
pub use screen::{ContactForm, Modal, PaymentForm, Screen, ScreenKind};

use crate::api::ApiError;

/// Why a UI event did not complete.
///
/// Both kinds are recoverable: the current screen already shows the problem
/// and the customer can retry by interacting again.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// A form step did not validate; no transition happened.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The order submission failed; the cart is untouched.
    #[error("Order submission failed: {0}")]
    Network(#[from] ApiError),

    /// Checkout was requested with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,
}
