//! Larek catalog and order API client.
//!
//! # Endpoints
//!
//! ```text
//! GET  {base}/product   -> { total, items: Product[] }
//! POST {base}/order     <- OrderRequest
//!                       -> { id, total }
//! ```
//!
//! The catalog response is cached in memory via `moka`. Order submissions
//! are never cached or retried.

mod client;
pub mod types;

use std::future::Future;

use larek_core::{OrderConfirmation, OrderRequest, Product};
use thiserror::Error;

pub use client::LarekClient;

/// Errors that can occur when talking to the Larek API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (connection, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Endpoint URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// The operations the checkout needs from the remote API.
///
/// Implemented by [`LarekClient`] for production and by in-memory fakes in
/// tests.
pub trait LarekApi: Send + Sync {
    /// Fetch the full product list.
    fn get_products(&self) -> impl Future<Output = Result<Vec<Product>, ApiError>> + Send;

    /// Submit an order.
    fn create_order(
        &self,
        order: &OrderRequest,
    ) -> impl Future<Output = Result<OrderConfirmation, ApiError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Api {
            status: 400,
            message: "Неверная сумма заказа".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 400 - Неверная сумма заказа");
    }
}
