//! Section page handlers.
//!
//! Every section is the same single page; the active [`Section`] decides
//! which panel is rendered and which nav link is highlighted.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use pes_lakomka_core::{Product, Section};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::content::StoreContent;
use crate::error::{AppError, Result};
use crate::filters;
use crate::routes::cart::{CartView, load_cart};
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub image: String,
    pub description: String,
    pub category: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
        }
    }
}

/// A top navigation entry.
#[derive(Clone)]
pub struct NavLink {
    pub title: &'static str,
    pub path: &'static str,
    pub active: bool,
}

impl NavLink {
    fn all(active: Section) -> Vec<Self> {
        Section::ALL
            .into_iter()
            .map(|section| Self {
                title: section.title(),
                path: section.path(),
                active: section == active,
            })
            .collect()
    }
}

/// Query parameters shared by all section pages.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// `open` expands the cart sheet.
    pub cart: Option<String>,
}

impl PageQuery {
    fn cart_open(&self) -> bool {
        self.cart.as_deref() == Some("open")
    }
}

/// The storefront page.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct PageTemplate {
    pub section: Section,
    pub nav: Vec<NavLink>,
    pub content: StoreContent,
    pub products: Vec<ProductView>,
    pub cart: CartView,
    pub cart_open: bool,
}

/// Display the home (hero) section.
#[instrument(skip(state, session))]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> PageTemplate {
    render(&state, &session, Section::Home, &query).await
}

/// Display a section by slug.
///
/// # Errors
///
/// Returns 404 for unknown slugs and for `home`, which lives at `/` only.
#[instrument(skip(state, session))]
pub async fn section(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<PageTemplate> {
    let section = parse_section_slug(&slug)?;

    Ok(render(&state, &session, section, &query).await)
}

/// Sections reachable at `/{slug}`.
fn parse_section_slug(slug: &str) -> Result<Section> {
    match slug.parse::<Section>() {
        Ok(Section::Home) => Err(AppError::NotFound(format!("section {slug}"))),
        Ok(section) => Ok(section),
        Err(e) => Err(AppError::NotFound(e.to_string())),
    }
}

async fn render(
    state: &AppState,
    session: &Session,
    section: Section,
    query: &PageQuery,
) -> PageTemplate {
    let cart = load_cart(session).await;

    // Only the catalog panel lists products
    let products = if section == Section::Catalog {
        state.catalog().iter().map(ProductView::from).collect()
    } else {
        Vec::new()
    };

    PageTemplate {
        section,
        nav: NavLink::all(section),
        content: state.content().clone(),
        products,
        cart: CartView::from(&cart),
        cart_open: query.cart_open(),
    }
}
