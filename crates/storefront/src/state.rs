//! Application state shared across handlers.

use std::sync::Arc;

use url::Url;

use crate::api::{ApiError, LarekClient};
use crate::config::StorefrontConfig;
use crate::sessions::SessionRegistry;

/// Application state shared across all handlers.
///
/// Cheap to clone; everything lives behind one `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    api: LarekClient,
    sessions: SessionRegistry,
}

impl AppState {
    /// Create the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, ApiError> {
        let api = LarekClient::new(&config.api)?;
        let sessions = SessionRegistry::new(config.checkout_idle);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                api,
                sessions,
            }),
        })
    }

    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// The Larek API client shared by every checkout session.
    #[must_use]
    pub fn api(&self) -> &LarekClient {
        &self.inner.api
    }

    #[must_use]
    pub fn sessions(&self) -> &SessionRegistry {
        &self.inner.sessions
    }

    /// Base URL for product images.
    #[must_use]
    pub fn cdn_url(&self) -> &Url {
        &self.inner.config.api.cdn_url
    }
}
