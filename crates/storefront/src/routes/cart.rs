//! Cart route handlers.

use axum::{Form, extract::State, response::Redirect};
use larek_core::ProductId;
use serde::Deserialize;
use tracing::instrument;

use super::{back_to_page, log_outcome};
use super::catalog::render_page;
use crate::checkout::UiEvent;
use crate::error::{Result, add_breadcrumb};
use crate::sessions::Checkout;
use crate::state::AppState;
use crate::views::{CounterTemplate, IndexTemplate};

/// Add/remove form data.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub product_id: String,
}

/// Open the cart screen.
#[instrument(skip(state, checkout))]
pub async fn show(
    State(state): State<AppState>,
    Checkout(checkout): Checkout,
) -> Result<IndexTemplate> {
    let outcome = checkout.lock().await.dispatch(UiEvent::CartOpened).await;
    log_outcome(&outcome);
    render_page(&state, &checkout).await
}

/// Add a product to the cart.
#[instrument(skip(checkout))]
pub async fn add(Checkout(checkout): Checkout, Form(form): Form<ProductForm>) -> Redirect {
    add_breadcrumb("cart", "Added to cart", &[("product_id", &form.product_id)]);
    let outcome = checkout
        .lock()
        .await
        .dispatch(UiEvent::AddToCart(ProductId::new(form.product_id)))
        .await;
    back_to_page(outcome)
}

/// Remove a product from the cart.
#[instrument(skip(checkout))]
pub async fn remove(Checkout(checkout): Checkout, Form(form): Form<ProductForm>) -> Redirect {
    let outcome = checkout
        .lock()
        .await
        .dispatch(UiEvent::RemoveFromCart(ProductId::new(form.product_id)))
        .await;
    back_to_page(outcome)
}

/// Basket counter fragment.
#[instrument(skip(checkout))]
pub async fn count(Checkout(checkout): Checkout) -> CounterTemplate {
    CounterTemplate {
        count: checkout.lock().await.cart().len(),
    }
}
