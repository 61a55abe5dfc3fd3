//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation so that price breakdowns and
//! checkout payloads never go through floating point.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
        }
    }

    /// Number of minor units in one major unit.
    pub fn minor_per_major(&self) -> i64 {
        100
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "CAD" => Some(Currency::CAD),
            "AUD" => Some(Currency::AUD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Largest whole-unit price a catalog or rule may carry.
    ///
    /// Keeps `price * 100 * count` inside `i64` for any `u32` count.
    pub const MAX_UNIT_PRICE: i64 = 10_000_000;

    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from whole currency units.
    ///
    /// ```
    /// use pendant_builder::money::{Money, Currency};
    /// let price = Money::from_units(163, Currency::USD);
    /// assert_eq!(price.amount_cents, 16300);
    /// ```
    pub fn from_units(units: i64, currency: Currency) -> Self {
        Self::new(units.saturating_mul(currency.minor_per_major()), currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Whole units, truncating any minor remainder.
    pub fn units(&self) -> i64 {
        self.amount_cents / self.currency.minor_per_major()
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let minor = self.currency.minor_per_major();
        format!(
            "{}{}.{:02}",
            self.currency.symbol(),
            self.amount_cents / minor,
            (self.amount_cents % minor).abs()
        )
    }

    /// Format without minor units when there are none (e.g., "$235").
    pub fn display_compact(&self) -> String {
        if self.amount_cents % self.currency.minor_per_major() == 0 {
            format!("{}{}", self.currency.symbol(), self.units())
        } else {
            self.display()
        }
    }

    /// Multiply by a scalar, saturating at the `i64` bounds.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor), self.currency)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        debug_assert_eq!(self.currency, other.currency, "Currency mismatch in addition");
        Money::new(self.amount_cents.saturating_add(other.amount_cents), self.currency)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(mut iter: I) -> Money {
        let Some(first) = iter.next() else {
            return Money::default();
        };
        iter.fold(first, |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_units() {
        let m = Money::from_units(140, Currency::USD);
        assert_eq!(m.amount_cents, 14000);
        assert_eq!(m.units(), 140);
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");
        assert_eq!(m.display_compact(), "$49.99");

        let m = Money::from_units(235, Currency::USD);
        assert_eq!(m.display_compact(), "$235");
        assert_eq!(m.to_string(), "$235.00");
    }

    #[test]
    fn test_money_addition_and_sum() {
        let a = Money::from_units(140, Currency::USD);
        let b = Money::from_units(25, Currency::USD);
        assert_eq!((a + b).units(), 165);

        let total: Money = vec![a, b, Money::from_units(70, Currency::USD)]
            .into_iter()
            .sum();
        assert_eq!(total.units(), 235);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::from_units(25, Currency::USD);
        assert_eq!((m * 2).units(), 50);
        assert!(m.multiply(0).is_zero());
    }

    #[test]
    fn test_money_arithmetic_saturates() {
        let huge = Money::from_units(i64::MAX / 10, Currency::USD);
        assert_eq!(huge.amount_cents, i64::MAX);
        assert_eq!((huge * i64::from(u32::MAX)).amount_cents, i64::MAX);
        assert_eq!((huge + Money::from_units(1, Currency::USD)).amount_cents, i64::MAX);
    }

    #[test]
    fn test_max_unit_price_fits_any_count() {
        let m = Money::from_units(Money::MAX_UNIT_PRICE, Currency::USD);
        let cents = Money::MAX_UNIT_PRICE * 100;
        assert_eq!(
            (m * i64::from(u32::MAX)).amount_cents,
            cents * i64::from(u32::MAX)
        );
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
