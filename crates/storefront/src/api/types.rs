//! Wire types of the Larek API that are not part of the domain model.

use larek_core::Product;
use serde::Deserialize;

/// Response of `GET /product`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductList {
    #[serde(default)]
    pub total: usize,
    pub items: Vec<Product>,
}

/// Error body returned with non-success statuses, e.g.
/// `{"error": "Не указан адрес"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Extract a readable message from an error response body.
///
/// Falls back to the first 200 characters of the raw body when it is not
/// the documented JSON shape.
#[must_use]
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body).map_or_else(
        |_| body.chars().take(200).collect(),
        |parsed| parsed.error,
    )
}
