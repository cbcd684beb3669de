//! Integration tests for the Bravenza storefront.
//!
//! Each test builds a fresh application - seeded catalog, empty carts and
//! registries - and drives the real router in-process through
//! `tower::ServiceExt::oneshot`. No server, no network, no shared state
//! between tests.
//!
//! # Test Categories
//!
//! - `products_api` - catalog listing, filters, search
//! - `cart_api` - add/merge/update/remove/clear over the wire
//! - `auth_api` - registration and login
//! - `newsletter_contact_api` - subscriptions and the contact form
//! - `checkout_flow` - cart to order snapshot, end to end

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;

use bravenza_storefront::app;
use bravenza_storefront::config::StorefrontConfig;
use bravenza_storefront::state::AppState;
use bravenza_storefront::store::Store;

/// A fresh in-process application.
pub struct TestApp {
    router: Router,
    state: AppState,
}

impl TestApp {
    /// Build an app around a newly seeded store.
    #[must_use]
    pub fn new() -> Self {
        let state = AppState::new(StorefrontConfig::default(), Store::new());
        Self {
            router: app(state.clone()),
            state,
        }
    }

    /// The application state, for tests that reach below the HTTP surface.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send a request; returns the status and the parsed JSON body
    /// (`Value::Null` for non-JSON responses).
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be constructed or sent; tests treat
    /// that as a failure.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request is well-formed");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body is readable");
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    /// GET a path.
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None).await
    }

    /// POST a JSON body.
    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", uri, Some(body)).await
    }

    /// PUT a JSON body.
    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("PUT", uri, Some(body)).await
    }

    /// DELETE a path.
    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request("DELETE", uri, None).await
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Percent-encode spaces for use in a query string.
#[must_use]
pub fn query_encode(s: &str) -> String {
    s.replace(' ', "%20")
}
