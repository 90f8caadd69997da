//! Shopping cart state.
//!
//! [`CartStore`] owns an ordered list of [`LineItem`]s, at most one per
//! product id, and is the only way to change it. Every operation is total:
//! unknown ids are ignored and a quantity below one removes the line.
//!
//! ```
//! use pes_lakomka_core::{Catalog, CartStore, ProductId};
//!
//! let catalog = Catalog::seed();
//! let bones = catalog.get(ProductId::new(1)).expect("seeded");
//!
//! let mut cart = CartStore::new();
//! let totals = cart.add(bones).add(bones).totals();
//! assert_eq!(totals.item_count, 2);
//! assert_eq!(totals.amount.to_string(), "900 ₽");
//! ```

use std::collections::HashSet;
use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{CurrencyCode, Price, ProductId};

/// Errors raised when restoring a cart from serialized data.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Two lines refer to the same product.
    #[error("cart contains product {0} more than once")]
    DuplicateLine(ProductId),
}

/// A product together with how many of it are in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(flatten)]
    pub product: Product,
    quantity: NonZeroU32,
}

impl LineItem {
    const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: NonZeroU32::MIN,
        }
    }

    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Always at least one.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity.get())
    }
}

/// Values derived from the cart contents on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    /// Sum of all line quantities.
    pub item_count: u64,
    /// Sum of unit price times quantity over all lines.
    pub amount: Price,
}

/// The cart: an insertion-ordered list of line items keyed by product id.
///
/// Mutations return the new state so reads can be chained onto them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct CartStore {
    items: Vec<LineItem>,
}

impl CartStore {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line in place, or appends a new line with
    /// quantity 1.
    pub fn add(&mut self, product: &Product) -> &mut Self {
        match self.line_mut(product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.items.push(LineItem::new(product.clone())),
        }
        self
    }

    /// Delete the line for `id`. Absent ids are ignored.
    pub fn remove(&mut self, id: ProductId) -> &mut Self {
        self.items.retain(|line| line.id() != id);
        self
    }

    /// Replace the quantity of the line for `id`.
    ///
    /// A quantity below one removes the line. Quantities beyond `u32::MAX`
    /// are clamped. Absent ids are ignored; no line is ever created here.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> &mut Self {
        let clamped = u32::try_from(quantity).unwrap_or(if quantity < 0 { 0 } else { u32::MAX });

        match NonZeroU32::new(clamped) {
            None => self.remove(id),
            Some(quantity) => {
                if let Some(line) = self.line_mut(id) {
                    line.quantity = quantity;
                }
                self
            }
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> &mut Self {
        self.items.clear();
        self
    }

    /// Item count and amount for the current contents.
    ///
    /// The amount saturates at `Decimal::MAX` rather than overflowing.
    #[must_use]
    pub fn totals(&self) -> Totals {
        let currency = self
            .items
            .first()
            .map_or_else(CurrencyCode::default, |line| line.product.price.currency_code);

        let item_count = self
            .items
            .iter()
            .map(|line| u64::from(line.quantity()))
            .sum();
        let amount = self
            .items
            .iter()
            .map(|line| line.line_total().amount)
            .fold(Decimal::ZERO, Decimal::saturating_add);

        Totals {
            item_count,
            amount: Price::new(amount, currency),
        }
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|line| line.id() == id)
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|line| line.id() == id)
    }
}

impl TryFrom<Vec<LineItem>> for CartStore {
    type Error = CartError;

    fn try_from(items: Vec<LineItem>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(items.len());
        for line in &items {
            if !seen.insert(line.id()) {
                return Err(CartError::DuplicateLine(line.id()));
            }
        }
        Ok(Self { items })
    }
}

impl From<CartStore> for Vec<LineItem> {
    fn from(cart: CartStore) -> Self {
        cart.items
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: i32, rub: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::new(Decimal::from(rub), CurrencyCode::RUB),
            image: format!("https://cdn.example/{id}.jpg"),
            description: String::new(),
            category: String::new(),
        }
    }

    fn quantities(cart: &CartStore) -> Vec<(i32, u32)> {
        cart.items()
            .iter()
            .map(|line| (line.id().as_i32(), line.quantity()))
            .collect()
    }

    #[test]
    fn test_add_new_product_appends_with_quantity_one() {
        let mut cart = CartStore::new();
        cart.add(&product(1, 450));
        assert_eq!(quantities(&cart), vec![(1, 1)]);
    }

    #[test]
    fn test_add_twice_accumulates_quantity() {
        let p = product(7, 100);
        let mut cart = CartStore::new();
        cart.add(&p).add(&p);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(p.id).unwrap().quantity(), 2);
    }

    #[test]
    fn test_add_keeps_position() {
        let (a, b) = (product(1, 10), product(2, 20));
        let mut cart = CartStore::new();
        cart.add(&a).add(&b).add(&a);
        assert_eq!(quantities(&cart), vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn test_add_saturates_at_max() {
        let p = product(1, 1);
        let mut cart = CartStore::new();
        cart.add(&p).set_quantity(p.id, i64::from(u32::MAX)).add(&p);
        assert_eq!(cart.get(p.id).unwrap().quantity(), u32::MAX);
    }

    #[test]
    fn test_remove() {
        let (a, b, c) = (product(1, 10), product(2, 20), product(3, 30));
        let mut cart = CartStore::new();
        cart.add(&a).add(&b).add(&c).remove(b.id);
        assert_eq!(quantities(&cart), vec![(1, 1), (3, 1)]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let p = product(1, 10);
        let mut cart = CartStore::new();
        cart.add(&p).remove(p.id);
        let after_first = cart.clone();
        cart.remove(p.id);
        assert_eq!(cart, after_first);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let p = product(1, 10);
        let mut cart = CartStore::new();
        cart.add(&p);
        cart.remove(ProductId::new(42));
        assert_eq!(quantities(&cart), vec![(1, 1)]);
    }

    #[test]
    fn test_set_quantity_replaces_value() {
        let p = product(1, 10);
        let mut cart = CartStore::new();
        cart.add(&p).set_quantity(p.id, 5);
        assert_eq!(cart.get(p.id).unwrap().quantity(), 5);
    }

    #[test]
    fn test_set_quantity_non_positive_removes() {
        for q in [0, -1, i64::MIN] {
            let p = product(1, 10);
            let mut cart = CartStore::new();
            cart.add(&p).add(&p).set_quantity(p.id, q);
            assert!(cart.is_empty(), "quantity {q} should remove the line");

            let totals = cart.totals();
            assert_eq!(totals.item_count, 0);
            assert_eq!(totals.amount.amount, Decimal::ZERO);
        }
    }

    #[test]
    fn test_set_quantity_absent_does_not_create_line() {
        let mut cart = CartStore::new();
        cart.set_quantity(ProductId::new(1), 3);
        assert!(cart.is_empty());

        cart.set_quantity(ProductId::new(1), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_clamps_huge_values() {
        let p = product(1, 10);
        let mut cart = CartStore::new();
        cart.add(&p).set_quantity(p.id, i64::MAX);
        assert_eq!(cart.get(p.id).unwrap().quantity(), u32::MAX);
    }

    #[test]
    fn test_totals_empty() {
        let totals = CartStore::new().totals();
        assert_eq!(totals.item_count, 0);
        assert_eq!(totals.amount, Price::zero(CurrencyCode::RUB));
    }

    #[test]
    fn test_totals_match_lines() {
        let (a, b, c) = (product(1, 450), product(2, 680), product(3, 390));
        let mut cart = CartStore::new();
        cart.add(&a).add(&b).add(&c).set_quantity(a.id, 4).set_quantity(c.id, 2);

        let totals = cart.totals();
        let expected_count: u64 = cart.items().iter().map(|l| u64::from(l.quantity())).sum();
        assert_eq!(totals.item_count, expected_count);
        assert_eq!(totals.item_count, 7);
        assert_eq!(totals.amount.amount, Decimal::from(450 * 4 + 680 + 390 * 2));
    }

    #[test]
    fn test_totals_are_never_stale() {
        let p = product(1, 100);
        let mut cart = CartStore::new();
        assert_eq!(cart.add(&p).totals().item_count, 1);
        assert_eq!(cart.add(&p).totals().item_count, 2);
        assert_eq!(cart.set_quantity(p.id, 1).totals().item_count, 1);
        assert_eq!(cart.remove(p.id).totals().item_count, 0);
    }

    #[test]
    fn test_totals_saturate_on_huge_prices() {
        let mut p = product(1, 0);
        p.price.amount = Decimal::MAX;
        let q = product(2, 450);

        let mut cart = CartStore::new();
        cart.add(&p).add(&p).add(&q).set_quantity(q.id, i64::MAX);

        let totals = cart.totals();
        assert_eq!(totals.item_count, 2 + u64::from(u32::MAX));
        assert_eq!(totals.amount.amount, Decimal::MAX);
        assert_eq!(cart.get(p.id).unwrap().line_total().amount, Decimal::MAX);
    }

    #[test]
    fn test_fractional_prices() {
        let mut p = product(1, 0);
        p.price.amount = Decimal::new(1999, 2);
        let mut cart = CartStore::new();
        cart.add(&p).set_quantity(p.id, 3);
        assert_eq!(cart.totals().amount.amount, Decimal::new(5997, 2));
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::new();
        cart.add(&product(1, 10)).add(&product(2, 20)).clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_serde_round_trip_preserves_order() {
        let mut cart = CartStore::new();
        cart.add(&product(2, 20)).add(&product(1, 10)).add(&product(2, 20));

        let value = serde_json::to_value(&cart).unwrap();
        assert_eq!(value[0]["id"], 2);
        assert_eq!(value[0]["quantity"], 2);
        assert_eq!(value[1]["name"], "Product 1");

        let back: CartStore = serde_json::from_value(value).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_deserialize_rejects_duplicate_lines() {
        let mut cart = CartStore::new();
        cart.add(&product(1, 10));
        let line = serde_json::to_value(&cart).unwrap()[0].clone();

        let result: Result<CartStore, _> = serde_json::from_value(serde_json::json!([line, line]));
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_zero_quantity() {
        let mut cart = CartStore::new();
        cart.add(&product(1, 10));
        let mut value = serde_json::to_value(&cart).unwrap();
        value[0]["quantity"] = serde_json::json!(0);

        let result: Result<CartStore, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn test_try_from_duplicate() {
        let line = LineItem::new(product(3, 10));
        let err = CartStore::try_from(vec![line.clone(), line]).unwrap_err();
        assert_eq!(err, CartError::DuplicateLine(ProductId::new(3)));
    }
}
