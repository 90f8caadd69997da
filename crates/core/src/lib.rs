//! ПёсЛакомка Core - catalog and cart domain types.
//!
//! This crate provides the types shared by the storefront and its tests:
//! - `storefront` - Server-rendered single-page shop
//! - `integration-tests` - Cross-crate scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure state transitions - no HTTP,
//! no sessions. The only I/O is reading an optional catalog file at startup.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices
//! - [`catalog`] - The read-only product catalog
//! - [`cart`] - `CartStore`, the cart line-item reducer
//! - [`section`] - Page sections used for navigation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod section;
pub mod types;

pub use cart::{CartError, CartStore, LineItem, Totals};
pub use catalog::{Catalog, CatalogError, Product};
pub use section::{ParseSectionError, Section};
pub use types::*;
