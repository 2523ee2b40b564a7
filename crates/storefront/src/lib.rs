//! Larek Storefront library.
//!
//! Server-rendered storefront for the Larek catalog API: a product grid, a
//! modal that walks the customer from product detail through the cart and
//! a two-step checkout, and an order submission to the remote API.
//!
//! # Architecture
//!
//! - [`api`] - `reqwest` client for the catalog and order endpoints
//! - [`checkout`] - the per-session coordinator and its events
//! - [`views`] - view models and askama templates
//! - [`routes`] - axum handlers that turn form posts into coordinator events
//! - [`sessions`] - cookie-keyed registry of live coordinators

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod checkout;
pub mod config;
pub mod error;
mod filters;
pub mod middleware;
pub mod routes;
pub mod sessions;
pub mod state;
pub mod views;

use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{from_fn, from_fn_with_state},
    routing::get,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::api::LarekApi;
use crate::state::AppState;

/// Directory static assets are served from, relative to the workspace root.
pub const STATIC_DIR: &str = "crates/storefront/static";

/// Build the storefront router with its middleware stack.
///
/// Sentry layers are added by the binary on top of this.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::security_headers_middleware,
        ))
        .layer(session_layer)
        .layer(from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        }))
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the catalog cannot be fetched.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.api().get_products().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::test_support::{Client, body};

    #[tokio::test]
    async fn test_health() {
        let mut client = Client::new().await;
        let response = client.get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body(response).await, "ok");
    }

    #[tokio::test]
    async fn test_readiness_uses_catalog() {
        let mut client = Client::new().await;
        let response = client.get("/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_request_id_is_echoed() {
        let mut client = Client::new().await;
        let response = client.get("/health").await;
        assert!(response.headers().contains_key("x-request-id"));
    }
}
