//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Catalog page with the modal
//! GET  /products/{id}           - Open product detail
//!
//! # Cart
//! GET  /cart                    - Open cart
//! POST /cart/add                - Add product
//! POST /cart/remove             - Remove product
//! GET  /cart/count              - Basket counter fragment
//!
//! # Checkout
//! POST /checkout                - Start checkout (payment step)
//! POST /checkout/payment        - Select payment method, keep typed address
//! POST /checkout/address        - Submit payment step
//! POST /checkout/contact/input  - Live-validate contact step (JSON)
//! POST /checkout/contact        - Submit order
//!
//! POST /modal/close             - Close the modal
//! ```
//!
//! POST handlers dispatch one event and answer `303 See Other` to `/`.
//! Whatever the coordinator decided (next screen, form errors, failure
//! alert) is rendered there.

pub mod cart;
pub mod catalog;
pub mod checkout;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use tracing::{debug, warn};

use crate::checkout::CheckoutError;
use crate::error::add_breadcrumb;
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(checkout::start))
        .route("/payment", post(checkout::payment))
        .route("/address", post(checkout::address))
        .route("/contact", post(checkout::contact))
        .route("/contact/input", post(checkout::contact_input))
}

/// Create all page routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::index))
        .route("/products/{id}", get(catalog::product))
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
        .route("/modal/close", post(catalog::close_modal))
}

/// Log a dispatched event's outcome.
///
/// Checkout errors are already on screen; they are only logged here.
pub(crate) fn log_outcome(outcome: &Result<(), CheckoutError>) {
    match outcome {
        Ok(()) => {}
        Err(CheckoutError::Network(e)) => {
            warn!(error = %e, "Order submission failed");
            add_breadcrumb("checkout", "Order submission failed", &[]);
        }
        Err(e) => debug!(error = %e, "Checkout step rejected"),
    }
}

/// Back to the page after a dispatched event.
pub(crate) fn back_to_page(outcome: Result<(), CheckoutError>) -> Redirect {
    log_outcome(&outcome);
    Redirect::to("/")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    //! Drive the full router in-process.

    use std::time::Duration;

    use axum::{
        Router,
        body::Body,
        http::{Request, Response, StatusCode, header},
    };
    use larek_core::{Price, Product, ProductId};
    use tower::ServiceExt;

    use crate::config::{LarekApiConfig, StorefrontConfig, parse_base_url};
    use crate::state::AppState;

    /// State whose API client points at a closed local port and whose
    /// catalog cache is pre-filled.
    pub async fn state() -> AppState {
        let state = offline_state();
        state.api().seed_catalog(products()).await;
        state
    }

    /// Same, with nothing cached: every API call fails.
    pub fn offline_state() -> AppState {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            api: LarekApiConfig {
                base_url: parse_base_url("http://127.0.0.1:9/api/weblarek").unwrap(),
                cdn_url: parse_base_url("https://cdn.test/content/weblarek").unwrap(),
                catalog_ttl: Duration::from_secs(3600),
            },
            checkout_idle: Duration::from_secs(600),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        };
        AppState::new(config).unwrap()
    }

    pub fn products() -> Vec<Product> {
        vec![
            product("p1", "HEX", Some(100)),
            product("p2", "Shell", Some(50)),
            product("p3", "Mystery", None),
        ]
    }

    fn product(id: &str, title: &str, price: Option<i64>) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            description: format!("About {title}"),
            price: price.map(Price::from_units),
            image: format!("/{title}.svg"),
            category: "софт-скил".to_string(),
        }
    }

    /// A browser: keeps the session cookie between requests.
    pub struct Client {
        app: Router,
        cookie: Option<String>,
    }

    impl Client {
        pub async fn new() -> Self {
            Self {
                app: crate::app(state().await),
                cookie: None,
            }
        }

        pub async fn get(&mut self, uri: &str) -> Response<Body> {
            self.send(Request::get(uri).body(Body::empty()).unwrap())
                .await
        }

        pub async fn post(&mut self, uri: &str, form: &str) -> Response<Body> {
            let request = Request::post(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap();
            self.send(request).await
        }

        /// POST and assert the redirect back to the page.
        pub async fn submit(&mut self, uri: &str, form: &str) {
            let response = self.post(uri, form).await;
            assert_eq!(response.status(), StatusCode::SEE_OTHER, "POST {uri}");
            assert_eq!(response.headers()[header::LOCATION], "/");
        }

        /// GET `/` and return the page body.
        pub async fn page(&mut self) -> String {
            let response = self.get("/").await;
            assert_eq!(response.status(), StatusCode::OK);
            body(response).await
        }

        /// A browser against a server whose catalog API is down.
        pub fn offline() -> Self {
            Self {
                app: crate::app(offline_state()),
                cookie: None,
            }
        }

        /// Another browser on the same server.
        pub fn other_browser(&self) -> Self {
            Self {
                app: self.app.clone(),
                cookie: None,
            }
        }

        async fn send(&mut self, mut request: Request<Body>) -> Response<Body> {
            if let Some(cookie) = &self.cookie {
                request
                    .headers_mut()
                    .insert(header::COOKIE, cookie.parse().unwrap());
            }
            let response = self.app.clone().oneshot(request).await.unwrap();
            if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
                let pair = set_cookie.to_str().unwrap().split(';').next().unwrap();
                self.cookie = Some(pair.to_string());
            }
            response
        }
    }

    pub async fn body(response: Response<Body>) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }
}
