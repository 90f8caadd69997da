//! Read-only JSON views of the catalog and the visitor's cart.

use axum::{Json, extract::State};
use pes_lakomka_core::{CartStore, Catalog, Totals};
use serde::Serialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::routes::cart::load_cart;
use crate::state::AppState;

/// Cart contents with derived totals.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub items: CartStore,
    pub totals: Totals,
}

/// The full product catalog.
#[instrument(skip(state))]
pub async fn catalog(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.catalog().clone())
}

/// The visitor's cart.
#[instrument(skip(session))]
pub async fn cart(session: Session) -> Json<CartResponse> {
    let items = load_cart(&session).await;
    let totals = items.totals();
    Json(CartResponse { items, totals })
}
