//! Larek Core - Domain model for the Larek storefront.
//!
//! This crate holds the state a storefront session mutates while a customer
//! browses and checks out:
//! - [`catalog`] - Products fetched from the catalog API
//! - [`cart`] - Selected items keyed by product id
//! - [`order`] - The two-step order draft and its validation gates
//! - [`events`] - A typed, synchronous publish/subscribe bus
//!
//! # Architecture
//!
//! The core crate contains only types and in-memory state - no I/O, no HTTP
//! clients, no rendering. The storefront and CLI crates own the network and
//! presentation concerns and drive this state through the checkout
//! coordinator.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product ids, prices, emails, phones and
//!   payment methods

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod events;
pub mod order;
pub mod types;

pub use cart::{Cart, CartItem};
pub use catalog::{Catalog, Product};
pub use events::{BusEvent, EventBus, SubscriptionId};
pub use order::{
    CheckoutStep, FieldError, OrderConfirmation, OrderDraft, OrderId, OrderRequest,
    ValidationError,
};
pub use types::*;
