//! REST client for the Larek API.

use std::sync::Arc;

use larek_core::{OrderConfirmation, OrderRequest, Product};
use moka::future::Cache;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use super::types::{ProductList, error_message};
use super::{ApiError, LarekApi};
use crate::config::LarekApiConfig;

/// Cache key for API responses.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
enum CacheKey {
    Catalog,
}

/// Client for the Larek catalog and order API.
///
/// Cheap to clone; clones share the HTTP connection pool and catalog cache.
#[derive(Clone)]
pub struct LarekClient {
    inner: Arc<LarekClientInner>,
}

struct LarekClientInner {
    client: reqwest::Client,
    base_url: Url,
    cache: Cache<CacheKey, Arc<Vec<Product>>>,
}

impl LarekClient {
    /// Create a new Larek API client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &LarekApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(config.catalog_ttl)
            .build();

        Ok(Self {
            inner: Arc::new(LarekClientInner {
                client,
                base_url: config.base_url.clone(),
                cache,
            }),
        })
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Pre-fill the catalog cache.
    #[cfg(test)]
    pub(crate) async fn seed_catalog(&self, products: Vec<Product>) {
        self.inner
            .cache
            .insert(CacheKey::Catalog, Arc::new(products))
            .await;
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.inner.base_url.join(path)?)
    }

    /// Read a response, mapping non-success statuses to [`ApiError::Api`].
    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Larek API returned non-success status"
            );
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse Larek API response"
            );
            ApiError::Parse(e)
        })
    }
}

impl LarekApi for LarekClient {
    #[instrument(skip(self))]
    async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        if let Some(products) = self.inner.cache.get(&CacheKey::Catalog).await {
            debug!("Cache hit for catalog");
            return Ok(products.as_ref().clone());
        }

        let response = self
            .inner
            .client
            .get(self.endpoint("product")?)
            .send()
            .await?;
        let list: ProductList = Self::read_json(response).await?;
        debug!(total = list.total, "Fetched catalog");

        self.inner
            .cache
            .insert(CacheKey::Catalog, Arc::new(list.items.clone()))
            .await;

        Ok(list.items)
    }

    #[instrument(skip(self, order), fields(items = order.items.len(), total = %order.total))]
    async fn create_order(&self, order: &OrderRequest) -> Result<OrderConfirmation, ApiError> {
        let response = self
            .inner
            .client
            .post(self.endpoint("order")?)
            .json(order)
            .send()
            .await?;
        let confirmation: OrderConfirmation = Self::read_json(response).await?;
        tracing::info!(order_id = %confirmation.id, "Order created");
        Ok(confirmation)
    }
}
