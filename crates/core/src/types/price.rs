//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Amounts are whole currency units (roubles, not kopecks).
///
/// ```
/// use pes_lakomka_core::{CurrencyCode, Price};
/// use rust_decimal::Decimal;
///
/// let price = Price::new(Decimal::from(450), CurrencyCode::RUB);
/// assert_eq!(price.to_string(), "450 ₽");
/// assert_eq!(price.times(2).to_string(), "900 ₽");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Whether the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// This price multiplied by a quantity, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self::new(
            self.amount.saturating_mul(Decimal::from(quantity)),
            self.currency_code,
        )
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.amount.round_dp(2).normalize(),
            self.currency_code.symbol()
        )
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    RUB,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Symbol shown after the amount.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::RUB => "₽",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }

    /// Three-letter ISO code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::RUB => "RUB",
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_trims_trailing_zeros() {
        let price = Price::new(Decimal::new(45000, 2), CurrencyCode::RUB);
        assert_eq!(price.to_string(), "450 ₽");

        let price = Price::new(Decimal::new(450, 2), CurrencyCode::RUB);
        assert_eq!(price.to_string(), "4.5 ₽");
    }

    #[test]
    fn test_times() {
        let price = Price::new(Decimal::from(680), CurrencyCode::RUB);
        assert_eq!(price.times(3).amount, Decimal::from(2040));
        assert_eq!(price.times(0).amount, Decimal::ZERO);
    }

    #[test]
    fn test_times_saturates() {
        let price = Price::new(Decimal::MAX, CurrencyCode::RUB);
        assert_eq!(price.times(u32::MAX).amount, Decimal::MAX);
    }

    #[test]
    fn test_is_negative() {
        assert!(Price::new(Decimal::from(-1), CurrencyCode::RUB).is_negative());
        assert!(!Price::zero(CurrencyCode::RUB).is_negative());
        assert!(!Price::new(Decimal::from(1), CurrencyCode::USD).is_negative());
    }

    #[test]
    fn test_default_currency_is_rub() {
        assert_eq!(CurrencyCode::default(), CurrencyCode::RUB);
        assert_eq!(CurrencyCode::RUB.code(), "RUB");
    }
}
