//! CLI subcommands.

pub mod catalog;
pub mod order;

use larek_core::PaymentMethodError;
use larek_storefront::api::{ApiError, LarekClient};
use larek_storefront::checkout::CheckoutError;
use larek_storefront::config::{ConfigError, LarekApiConfig};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error(transparent)]
    Payment(#[from] PaymentMethodError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Product not in catalog: {0}")]
    UnknownProduct(String),

    #[error("Product has no price and cannot be ordered: {0}")]
    NotPurchasable(String),
}

/// Build an API client from the environment.
fn client() -> Result<LarekClient, CliError> {
    let config = LarekApiConfig::from_env()?;
    tracing::debug!(api = %config.base_url, "Using Larek API");
    Ok(LarekClient::new(&config)?)
}
