//! Application state shared across handlers.

use std::sync::Arc;

use pes_lakomka_core::{Catalog, CatalogError};

use crate::config::StorefrontConfig;
use crate::content::StoreContent;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the read-only catalog, static page content and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    content: StoreContent,
}

impl AppState {
    /// Create application state with an already built catalog.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                content: StoreContent::default(),
            }),
        }
    }

    /// Create application state, loading the catalog named in the config.
    ///
    /// Falls back to the built-in catalog when no path is configured.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the configured catalog file cannot be loaded.
    pub fn from_config(config: StorefrontConfig) -> Result<Self, CatalogError> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                let catalog = Catalog::from_json_file(path)?;
                tracing::info!(path = %path.display(), products = catalog.len(), "Catalog loaded");
                catalog
            }
            None => Catalog::seed(),
        };

        Ok(Self::new(config, catalog))
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the static page content.
    #[must_use]
    pub fn content(&self) -> &StoreContent {
        &self.inner.content
    }
}
