//! Integration tests for ПёсЛакомка.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p pes-lakomka-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - Cart behaviour against the built-in catalog
//! - `storefront_http` - Full requests through the storefront router
//!
//! No server or network is needed: [`TestClient`] drives the router
//! in-process and carries the session cookie between requests, the way
//! a browser would.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode, header};
use pes_lakomka_storefront::config::StorefrontConfig;
use pes_lakomka_storefront::middleware::SESSION_COOKIE_NAME;
use pes_lakomka_storefront::state::AppState;
use tower::ServiceExt;

/// Upper bound on response bodies read by tests.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// A response with its body already collected.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `Location` header of a redirect.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// Parse the body as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the body is not valid JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is not JSON")
    }
}

/// In-process client for the storefront router with a one-cookie jar.
pub struct TestClient {
    app: Router,
    session_cookie: Option<String>,
}

impl TestClient {
    /// Build a storefront with default configuration and the built-in catalog.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be built.
    #[must_use]
    pub fn new() -> Self {
        let config = StorefrontConfig::from_lookup(|_| None).expect("default config");
        let state = AppState::from_config(config).expect("built-in catalog");
        Self {
            app: pes_lakomka_storefront::app(state),
            session_cookie: None,
        }
    }

    /// A second visitor of the same app, with an empty cookie jar.
    #[must_use]
    pub fn new_visitor(&self) -> Self {
        Self {
            app: self.app.clone(),
            session_cookie: None,
        }
    }

    /// Send a GET request.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send(Request::get(uri), Body::empty()).await
    }

    /// Send a url-encoded form POST.
    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        let builder = Request::post(uri).header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        );
        self.send(builder, Body::from(body)).await
    }

    async fn send(&mut self, mut builder: axum::http::request::Builder, body: Body) -> TestResponse {
        if let Some(cookie) = &self.session_cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = builder.body(body).expect("valid request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(cookie) = session_cookie(response.headers()) {
            self.session_cookie = Some(cookie);
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), MAX_BODY_BYTES)
            .await
            .expect("readable body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract `name=value` of the session cookie from `Set-Cookie` headers.
fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| pair.starts_with(&format!("{SESSION_COOKIE_NAME}=")))
        .map(str::to_string)
}
