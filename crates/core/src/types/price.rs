//! Type-safe price representation using decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A ticket price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
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

    /// Create a USD price from a cent amount.
    #[must_use]
    pub fn usd_cents(cents: i64) -> Self {
        Self {
            amount: Decimal::new(cents, 2),
            currency_code: CurrencyCode::USD,
        }
    }

    /// A free (zero-amount) USD price.
    #[must_use]
    pub fn free() -> Self {
        Self::usd_cents(0)
    }

    /// Whether this is a free ticket.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.amount.is_zero()
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_cents() {
        let price = Price::usd_cents(29900);
        assert_eq!(price.amount, Decimal::new(299, 0));
        assert_eq!(price.currency_code, CurrencyCode::USD);
    }

    #[test]
    fn test_free() {
        assert!(Price::free().is_free());
        assert!(!Price::usd_cents(2500).is_free());
    }

    #[test]
    fn test_serde() {
        let price = Price::usd_cents(14950);
        let json = serde_json::to_string(&price).unwrap();
        // rust_decimal serializes with the serde-with-str feature.
        assert!(json.contains("149.50"));
        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }
}
