//! Per-browser checkout sessions.
//!
//! The session cookie only carries a checkout id. The coordinator it points
//! at lives in process memory, in a `moka` cache that drops sessions after
//! they sit idle for `CHECKOUT_IDLE_SECS`.

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::FromRequestParts, http::request::Parts};
use moka::sync::Cache;
use tokio::sync::Mutex;
use tower_sessions::Session;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::api::LarekClient;
use crate::checkout::Coordinator;
use crate::error::AppError;
use crate::state::AppState;

/// Session key holding the checkout id.
pub const CHECKOUT_KEY: &str = "checkout_id";

/// A coordinator shared between requests of one browser session.
///
/// The mutex serializes requests so each event is handled to completion
/// before the next one starts.
pub type SharedCoordinator = Arc<Mutex<Coordinator<LarekClient>>>;

/// Live checkout sessions keyed by checkout id.
#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Cache<Uuid, SharedCoordinator>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new(idle: Duration) -> Self {
        Self {
            sessions: Cache::builder().time_to_idle(idle).build(),
        }
    }

    #[must_use]
    pub fn get(&self, id: &Uuid) -> Option<SharedCoordinator> {
        self.sessions.get(id)
    }

    pub fn insert(&self, id: Uuid, coordinator: SharedCoordinator) {
        self.sessions.insert(id, coordinator);
    }

    /// Approximate number of live sessions.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.sessions.run_pending_tasks();
        self.sessions.entry_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extractor for the request's checkout coordinator.
///
/// Creates a coordinator (and loads the catalog into it) the first time a
/// browser shows up. A catalog load failure is logged and leaves the
/// catalog empty; the page retries on the next visit.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(Checkout(checkout): Checkout) -> impl IntoResponse {
///     let coordinator = checkout.lock().await;
///     coordinator.cart().len().to_string()
/// }
/// ```
pub struct Checkout(pub SharedCoordinator);

impl FromRequestParts<AppState> for Checkout {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer is not installed".to_string()))?;

        if let Some(id) = session.get::<Uuid>(CHECKOUT_KEY).await? {
            if let Some(coordinator) = state.sessions().get(&id) {
                return Ok(Self(coordinator));
            }
            debug!(checkout_id = %id, "Checkout session expired, starting a new one");
        }

        let id = Uuid::new_v4();
        session.insert(CHECKOUT_KEY, id).await?;

        let mut coordinator = Coordinator::new(state.api().clone());
        if let Err(e) = coordinator.load_catalog().await {
            warn!(error = %e, "Failed to load catalog for new checkout session");
        }

        let shared = Arc::new(Mutex::new(coordinator));
        state.sessions().insert(id, Arc::clone(&shared));
        debug!(checkout_id = %id, "Started checkout session");

        Ok(Self(shared))
    }
}
