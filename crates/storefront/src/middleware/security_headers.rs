//! Security headers middleware.
//!
//! Everything is locked to `'self'` except images, which also load from the
//! product CDN.

use axum::{
    extract::{Request, State},
    http::{
        HeaderName, HeaderValue,
        header::{
            CACHE_CONTROL, CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS,
            X_FRAME_OPTIONS,
        },
    },
    middleware::Next,
    response::Response,
};
use url::Url;

use crate::state::AppState;

/// Build the Content-Security-Policy for a given image CDN.
#[must_use]
pub fn content_security_policy(cdn: &Url) -> String {
    let origin = cdn.origin().ascii_serialization();
    format!(
        "default-src 'none'; \
         script-src 'self'; \
         style-src 'self'; \
         img-src 'self' {origin}; \
         connect-src 'self'; \
         form-action 'self'; \
         base-uri 'self'; \
         frame-ancestors 'none'; \
         object-src 'none'"
    )
}

/// Add security headers to all responses.
///
/// - `X-Frame-Options: DENY`
/// - `X-Content-Type-Options: nosniff`
/// - `Referrer-Policy: no-referrer`
/// - `Content-Security-Policy` from [`content_security_policy`]
/// - `Cache-Control: no-store` on pages (cart contents are per session)
/// - `Cross-Origin-Opener-Policy: same-origin`
pub async fn security_headers_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let is_static = request.uri().path().starts_with("/static/");
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(REFERRER_POLICY, HeaderValue::from_static("no-referrer"));
    if let Ok(csp) = HeaderValue::from_str(&content_security_policy(state.cdn_url())) {
        headers.insert(CONTENT_SECURITY_POLICY, csp);
    }
    headers.insert(
        HeaderName::from_static("cross-origin-opener-policy"),
        HeaderValue::from_static("same-origin"),
    );
    if !is_static {
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store, max-age=0"));
    }

    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_csp_allows_cdn_origin_only() {
        let cdn = Url::parse("https://larek-api.nomoreparties.co/content/weblarek/").unwrap();
        let csp = content_security_policy(&cdn);
        assert!(csp.contains("img-src 'self' https://larek-api.nomoreparties.co;"));
        assert!(!csp.contains("/content"));
        assert!(csp.contains("default-src 'none'"));
    }
}
