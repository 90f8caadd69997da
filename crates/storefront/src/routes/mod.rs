//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Sections
//! GET  /                       - Home (hero)
//! GET  /{section}              - catalog | about | contacts
//!      ?cart=open              - Render with the cart sheet expanded
//!
//! # Cart (form posts, 303 back to the section)
//! POST /cart/add               - Add one unit of a product
//! POST /cart/update            - Set a line's quantity (below 1 removes)
//! POST /cart/remove            - Remove a line
//!
//! # JSON
//! GET  /api/catalog            - Product catalog
//! GET  /api/cart               - Cart lines and totals
//! ```

pub mod api;
pub mod cart;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
}

/// Create the JSON API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(api::catalog))
        .route("/cart", get(api::cart))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/{section}", get(home::section))
        .nest("/cart", cart_routes())
        .nest("/api", api_routes())
}
