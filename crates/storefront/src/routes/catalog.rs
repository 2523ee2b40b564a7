//! Catalog page, product detail, and modal close.

use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use larek_core::ProductId;
use serde::Deserialize;
use tracing::{instrument, warn};

use super::back_to_page;
use crate::checkout::{CheckoutError, UiEvent};
use crate::error::{AppError, Result};
use crate::sessions::{Checkout, SharedCoordinator};
use crate::state::AppState;
use crate::views::{IndexTemplate, ViewContext};

/// Render the page for the coordinator's current state.
pub(crate) async fn render_page(state: &AppState, checkout: &SharedCoordinator) -> Result<IndexTemplate> {
    let mut coordinator = checkout.lock().await;

    // The API may have been down when the session started.
    if coordinator.catalog().is_empty()
        && let Err(e) = coordinator.load_catalog().await
    {
        warn!(error = %e, "Catalog still unavailable");
    }

    Ok(ViewContext::new(coordinator.state(), state.cdn_url()).index()?)
}

/// Catalog page.
#[instrument(skip(state, checkout))]
pub async fn index(
    State(state): State<AppState>,
    Checkout(checkout): Checkout,
) -> Result<IndexTemplate> {
    render_page(&state, &checkout).await
}

/// Open the product detail screen.
///
/// Answers 502 when the catalog has never loaded and the API is still down,
/// 404 when the catalog has no such product.
#[instrument(skip(state, checkout))]
pub async fn product(
    State(state): State<AppState>,
    Checkout(checkout): Checkout,
    Path(id): Path<String>,
) -> Result<IndexTemplate> {
    let id = ProductId::new(id);
    {
        let mut coordinator = checkout.lock().await;
        if coordinator.catalog().is_empty() {
            coordinator.load_catalog().await.map_err(|e| match e {
                CheckoutError::Network(e) => AppError::Api(e),
                other => AppError::Internal(other.to_string()),
            })?;
        }
        if coordinator.catalog().find(&id).is_none() {
            return Err(AppError::NotFound(format!("product {id}")));
        }
        coordinator
            .dispatch(UiEvent::ProductSelected(id))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;
    }
    render_page(&state, &checkout).await
}

/// Close form data.
#[derive(Debug, Default, Deserialize)]
pub struct CloseForm {
    /// `success` when closing the order confirmation.
    #[serde(default)]
    pub reason: Option<String>,
}

/// Close the modal.
#[instrument(skip(checkout))]
pub async fn close_modal(Checkout(checkout): Checkout, Form(form): Form<CloseForm>) -> Redirect {
    let event = if form.reason.as_deref() == Some("success") {
        UiEvent::SuccessClosed
    } else {
        UiEvent::ModalClosed
    };
    let outcome = checkout.lock().await.dispatch(event).await;
    back_to_page(outcome)
}
