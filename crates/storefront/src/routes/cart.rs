//! Cart route handlers.
//!
//! The visitor's `CartStore` is kept in the session. Each handler loads it,
//! applies exactly one cart operation, writes it back and redirects
//! (303 See Other) to the section the form was posted from.

use axum::{
    Form,
    extract::State,
    response::Redirect,
};
use pes_lakomka_core::{CartStore, LineItem, ProductId, Section};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::models::session_keys;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub price: String,
    pub line_price: String,
    pub quantity: u32,
    /// Quantity posted by the minus button; 0 removes the line.
    pub decrement_to: i64,
    /// Quantity posted by the plus button.
    pub increment_to: i64,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u64,
}

impl From<&LineItem> for CartItemView {
    fn from(line: &LineItem) -> Self {
        let quantity = line.quantity();
        Self {
            id: line.id().as_i32(),
            name: line.product.name.clone(),
            image: line.product.image.clone(),
            price: line.product.price.to_string(),
            line_price: line.line_total().to_string(),
            quantity,
            decrement_to: i64::from(quantity) - 1,
            increment_to: i64::from(quantity) + 1,
        }
    }
}

impl From<&CartStore> for CartView {
    fn from(cart: &CartStore) -> Self {
        let totals = cart.totals();
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            total: totals.amount.to_string(),
            item_count: totals.item_count,
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the visitor's cart from the session.
///
/// A missing or unreadable cart is treated as empty.
pub async fn load_cart(session: &Session) -> CartStore {
    match session.get::<CartStore>(session_keys::CART).await {
        Ok(cart) => cart.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Discarding unreadable cart: {e}");
            CartStore::new()
        }
    }
}

/// Store the visitor's cart in the session.
async fn save_cart(session: &Session, cart: &CartStore) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

// =============================================================================
// Forms
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: ProductId,
    #[serde(default)]
    pub return_to: Section,
}

/// Quantity step form data (plus/minus buttons).
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: ProductId,
    pub quantity: i64,
    #[serde(default)]
    pub return_to: Section,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: ProductId,
    #[serde(default)]
    pub return_to: Section,
}

/// Where to send the visitor after editing the open cart sheet.
fn back_to_open_cart(section: Section) -> Redirect {
    Redirect::to(&format!("{}?cart=open", section.path()))
}

/// Record a cart action for Sentry error reports.
fn cart_breadcrumb(message: &str, product_id: ProductId, quantity: Option<i64>) {
    let product_id = product_id.to_string();
    match quantity.map(|q| q.to_string()) {
        Some(quantity) => add_breadcrumb(
            "cart",
            message,
            Some(&[("product_id", product_id.as_str()), ("quantity", quantity.as_str())]),
        ),
        None => add_breadcrumb("cart", message, Some(&[("product_id", product_id.as_str())])),
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Add one unit of a catalog product to the cart.
///
/// # Errors
///
/// Returns 404 if the product is not in the catalog, or 500 if the session
/// cannot be written.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let product = state
        .catalog()
        .get(form.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    let mut cart = load_cart(&session).await;
    let totals = cart.add(product).totals();
    save_cart(&session, &cart).await?;

    cart_breadcrumb("Added to cart", form.product_id, None);
    tracing::info!(
        product_id = %form.product_id,
        item_count = totals.item_count,
        "Added to cart"
    );

    Ok(Redirect::to(form.return_to.path()))
}

/// Set a line's quantity; anything below one removes the line.
///
/// # Errors
///
/// Returns 500 if the session cannot be written.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Result<Redirect> {
    let mut cart = load_cart(&session).await;
    let totals = cart.set_quantity(form.product_id, form.quantity).totals();
    save_cart(&session, &cart).await?;

    cart_breadcrumb("Updated cart quantity", form.product_id, Some(form.quantity));

    tracing::info!(
        product_id = %form.product_id,
        quantity = form.quantity,
        item_count = totals.item_count,
        "Updated cart quantity"
    );

    Ok(back_to_open_cart(form.return_to))
}

/// Remove a line from the cart. Unknown products are ignored.
///
/// # Errors
///
/// Returns 500 if the session cannot be written.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Result<Redirect> {
    let mut cart = load_cart(&session).await;
    let totals = cart.remove(form.product_id).totals();
    save_cart(&session, &cart).await?;

    cart_breadcrumb("Removed from cart", form.product_id, None);
    tracing::info!(
        product_id = %form.product_id,
        item_count = totals.item_count,
        "Removed from cart"
    );

    Ok(back_to_open_cart(form.return_to))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pes_lakomka_core::Catalog;

    use super::*;

    #[test]
    fn test_cart_view_empty() {
        let view = CartView::from(&CartStore::new());
        assert!(view.items.is_empty());
        assert_eq!(view.item_count, 0);
        assert_eq!(view.total, "0 ₽");
    }

    #[test]
    fn test_cart_view_lines_and_steps() {
        let catalog = Catalog::seed();
        let bones = catalog.get(ProductId::new(1)).unwrap();
        let mix = catalog.get(ProductId::new(2)).unwrap();

        let mut cart = CartStore::new();
        cart.add(bones).add(mix).add(bones);
        let view = CartView::from(&cart);

        assert_eq!(view.item_count, 3);
        assert_eq!(view.total, "1580 ₽");

        let first = view.items.first().unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(first.quantity, 2);
        assert_eq!(first.line_price, "900 ₽");
        assert_eq!((first.decrement_to, first.increment_to), (1, 3));

        let second = view.items.get(1).unwrap();
        assert_eq!(second.decrement_to, 0);
    }

    #[test]
    fn test_quantity_update_leaves_breadcrumb() {
        let events = sentry::test::with_captured_events(|| {
            cart_breadcrumb("Updated cart quantity", ProductId::new(2), Some(3));
            sentry::capture_message("checkout", sentry::Level::Info);
        });

        let event = events.first().unwrap();
        let crumb = event.breadcrumbs.values.last().unwrap();
        assert_eq!(crumb.category.as_deref(), Some("cart"));
        assert_eq!(crumb.message.as_deref(), Some("Updated cart quantity"));
        assert_eq!(crumb.data.get("product_id").unwrap(), "2");
        assert_eq!(crumb.data.get("quantity").unwrap(), "3");
    }

    #[test]
    fn test_open_cart_redirect_target() {
        use axum::response::IntoResponse;

        let response = back_to_open_cart(Section::Catalog).into_response();
        assert_eq!(
            response.headers().get("location").unwrap(),
            "/catalog?cart=open"
        );

        let response = back_to_open_cart(Section::Home).into_response();
        assert_eq!(response.headers().get("location").unwrap(), "/?cart=open");
    }
}
