//! Events flowing into and out of the checkout coordinator.

use larek_core::{BusEvent, OrderId, PaymentMethod, Price, Product, ProductId};

use super::screen::ScreenKind;

/// A user action forwarded by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The product list arrived from the API.
    CatalogLoaded(Vec<Product>),
    /// A catalog card was clicked.
    ProductSelected(ProductId),
    /// "Add to cart" on the product detail screen.
    AddToCart(ProductId),
    /// "Remove" on a cart line.
    RemoveFromCart(ProductId),
    /// The header basket button.
    CartOpened,
    /// "Checkout" on the cart screen.
    CheckoutRequested,
    /// A payment method button on the payment form.
    PaymentMethodSelected(PaymentMethod),
    /// Address typed on the payment form, kept without validation.
    AddressInput(String),
    /// Payment form submit.
    PaymentSubmitted { address: String },
    /// Any keystroke in the contact form.
    ContactInput { email: String, phone: String },
    /// Contact form submit.
    ContactSubmitted { email: String, phone: String },
    /// "To new purchases" on the success screen.
    SuccessClosed,
    /// The modal close button or overlay.
    ModalClosed,
}

/// Discriminant of [`UiEvent`], safe to log (carries no customer data).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiEventKind {
    CatalogLoaded,
    ProductSelected,
    AddToCart,
    RemoveFromCart,
    CartOpened,
    CheckoutRequested,
    PaymentMethodSelected,
    AddressInput,
    PaymentSubmitted,
    ContactInput,
    ContactSubmitted,
    SuccessClosed,
    ModalClosed,
}

impl BusEvent for UiEvent {
    type Kind = UiEventKind;

    fn kind(&self) -> UiEventKind {
        match self {
            Self::CatalogLoaded(_) => UiEventKind::CatalogLoaded,
            Self::ProductSelected(_) => UiEventKind::ProductSelected,
            Self::AddToCart(_) => UiEventKind::AddToCart,
            Self::RemoveFromCart(_) => UiEventKind::RemoveFromCart,
            Self::CartOpened => UiEventKind::CartOpened,
            Self::CheckoutRequested => UiEventKind::CheckoutRequested,
            Self::PaymentMethodSelected(_) => UiEventKind::PaymentMethodSelected,
            Self::AddressInput(_) => UiEventKind::AddressInput,
            Self::PaymentSubmitted { .. } => UiEventKind::PaymentSubmitted,
            Self::ContactInput { .. } => UiEventKind::ContactInput,
            Self::ContactSubmitted { .. } => UiEventKind::ContactSubmitted,
            Self::SuccessClosed => UiEventKind::SuccessClosed,
            Self::ModalClosed => UiEventKind::ModalClosed,
        }
    }
}

/// A state change published by the coordinator after handling a [`UiEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// The catalog was replaced.
    CatalogUpdated { count: usize },
    /// The cart contents changed.
    CartChanged { count: usize, total: Price },
    /// The modal now shows this screen.
    ScreenShown(ScreenKind),
    /// The modal was closed.
    ModalClosed,
    /// The order API accepted the order.
    OrderPlaced { id: OrderId, total: Price },
    /// The order API call failed.
    OrderFailed { message: String },
}

/// Discriminant of [`StoreEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreEventKind {
    CatalogUpdated,
    CartChanged,
    ScreenShown,
    ModalClosed,
    OrderPlaced,
    OrderFailed,
}

impl BusEvent for StoreEvent {
    type Kind = StoreEventKind;

    fn kind(&self) -> StoreEventKind {
        match self {
            Self::CatalogUpdated { .. } => StoreEventKind::CatalogUpdated,
            Self::CartChanged { .. } => StoreEventKind::CartChanged,
            Self::ScreenShown(_) => StoreEventKind::ScreenShown,
            Self::ModalClosed => StoreEventKind::ModalClosed,
            Self::OrderPlaced { .. } => StoreEventKind::OrderPlaced,
            Self::OrderFailed { .. } => StoreEventKind::OrderFailed,
        }
    }
}
