//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                      - Liveness check
//!
//! # Auth
//! POST /api/auth/register           - Create an account (response omits the password)
//! POST /api/auth/login              - Verify credentials
//!
//! # Products
//! GET  /api/products                - Catalog listing (?search=, ?category=, ?bestsellers=true)
//! GET  /api/products/{id}           - Single product
//!
//! # Cart
//! GET    /api/cart/{userId}         - A user's lines, joined with products
//! POST   /api/cart                  - Add a line (merges on duplicate product+size)
//! PUT    /api/cart/{id}             - Overwrite a line's quantity
//! DELETE /api/cart/{id}             - Remove a line
//! DELETE /api/cart/user/{userId}    - Clear a user's cart
//!
//! # Newsletter & Contact
//! POST /api/newsletter              - Subscribe an email
//! POST /api/contact                 - Contact form submission
//! ```

pub mod auth;
pub mod cart;
pub mod contact;
pub mod newsletter;
pub mod products;

use axum::{
    Router,
    routing::{delete, get, post},
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Plain confirmation payload for operations with nothing else to return.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
///
/// `GET /{userId}` and `PUT|DELETE /{id}` share a path segment, so they
/// live on one route with per-method handlers; the static `user` segment
/// takes precedence over the parameter for `DELETE /user/{userId}`.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(cart::add))
        .route(
            "/{id}",
            get(cart::list).put(cart::update).delete(cart::remove),
        )
        .route("/user/{user_id}", delete(cart::clear))
}

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth_routes())
        .nest("/api/products", product_routes())
        .nest("/api/cart", cart_routes())
        .route("/api/newsletter", post(newsletter::subscribe))
        .route("/api/contact", post(contact::submit))
}

/// Build the full application router around a state handle.
///
/// Everything except the Sentry tower layers, which only the binary
/// attaches; tests drive this router in-process.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. There are no external
/// dependencies to probe.
async fn health() -> &'static str {
    "ok"
}
