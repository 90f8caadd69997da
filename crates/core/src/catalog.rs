//! The read-only product catalog.
//!
//! A [`Catalog`] is built once at startup, either from the built-in
//! [`Catalog::seed`] or from a JSON file, and is never mutated afterwards.

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CurrencyCode, Price, ProductId};

/// Errors that can occur when building a [`Catalog`].
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    /// The catalog file is not a valid JSON product list.
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two products share an identifier.
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),
    /// A product has a price below zero.
    #[error("product {0} has a negative price")]
    NegativePrice(ProductId),
    /// Products are priced in more than one currency.
    #[error("product {id} is priced in {found}, expected {expected}")]
    MixedCurrency {
        /// Offending product.
        id: ProductId,
        /// Currency of the first product.
        expected: &'static str,
        /// Currency of the offending product.
        found: &'static str,
    },
}

/// A purchasable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Image URL.
    pub image: String,
    pub description: String,
    /// Merchandising label shown as a badge ("Новинка", "Хит", ...).
    pub category: String,
}

/// Fixed, ordered list of products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, checking identifier uniqueness and prices.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if two products share an id, a price is
    /// negative, or products use different currencies.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        let currency = products.first().map(|p| p.price.currency_code);

        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.price.is_negative() {
                return Err(CatalogError::NegativePrice(product.id));
            }
            match currency {
                Some(expected) if product.price.currency_code != expected => {
                    return Err(CatalogError::MixedCurrency {
                        id: product.id,
                        expected: expected.code(),
                        found: product.price.currency_code.code(),
                    });
                }
                _ => {}
            }
        }

        Ok(Self { products })
    }

    /// Load a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed, or if the
    /// products fail validation.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the input is not a valid product list or the
    /// products fail validation.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(raw)?;
        Self::new(products)
    }

    /// The shop's built-in assortment.
    #[must_use]
    pub fn seed() -> Self {
        const IMAGE_BONES: &str = "https://cdn.poehali.dev/projects/4270008b-dcd7-452c-986c-97298adfb589/files/1b340d27-34de-433e-b572-35c75b547df2.jpg";
        const IMAGE_MIX: &str = "https://cdn.poehali.dev/projects/4270008b-dcd7-452c-986c-97298adfb589/files/3fdfa1ec-f290-4d78-8313-6defd61da39f.jpg";

        let product = |id: i32, name: &str, rub: i64, image: &str, description: &str, category: &str| {
            Product {
                id: ProductId::new(id),
                name: name.to_string(),
                price: Price::new(Decimal::from(rub), CurrencyCode::RUB),
                image: image.to_string(),
                description: description.to_string(),
                category: category.to_string(),
            }
        };

        Self {
            products: vec![
                product(1, "Хрустящие косточки", 450, IMAGE_BONES, "Натуральные лакомства в форме косточек", "Бестселлер"),
                product(2, "Мясное ассорти", 680, IMAGE_MIX, "Микс из говядины, курицы и индейки", "Новинка"),
                product(3, "Витаминные снеки", 520, IMAGE_BONES, "С добавлением омега-3 и витаминов", "Хит"),
                product(4, "Сырные палочки", 390, IMAGE_MIX, "Нежные палочки с натуральным сыром", "Популярное"),
                product(5, "Рыбные деликатесы", 720, IMAGE_BONES, "Из лосося и трески премиум-качества", "Премиум"),
                product(6, "Фруктовые кусочки", 480, IMAGE_MIX, "С яблоком и бананом, без сахара", "Новинка"),
            ],
        }
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Currency all products are priced in.
    #[must_use]
    pub fn currency(&self) -> CurrencyCode {
        self.products
            .first()
            .map(|p| p.price.currency_code)
            .unwrap_or_default()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
