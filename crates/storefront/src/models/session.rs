//! Session-related types.

/// Session keys for visitor data.
pub mod keys {
    /// Key for the visitor's cart (`CartStore`, serialized as its line list).
    pub const CART: &str = "cart";
}
