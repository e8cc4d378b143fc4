//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The platform
//! serves prices as decimal strings ("1999.99"), parsed exactly once at
//! the ingestion boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies of the platform's markets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    ARS,
    BRL,
    CLP,
    COP,
    MXN,
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "ARS").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::ARS => "ARS",
            Currency::BRL => "BRL",
            Currency::CLP => "CLP",
            Currency::COP => "COP",
            Currency::MXN => "MXN",
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::ARS => "$",
            Currency::BRL => "R$",
            Currency::CLP => "$",
            Currency::COP => "$",
            Currency::MXN => "MX$",
            Currency::USD => "US$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::CLP => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "ARS" => Some(Currency::ARS),
            "BRL" => Some(Currency::BRL),
            "CLP" => Some(Currency::CLP),
            "COP" => Some(Currency::COP),
            "MXN" => Some(Currency::MXN),
            "USD" => Some(Currency::USD),
            _ => None,
        }
    }

    /// Smallest-unit multiplier (100 for two-decimal currencies).
    pub(crate) fn scale(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents
/// for ARS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Parse a decimal string into a Money value.
    ///
    /// Fractional digits beyond the currency's precision are truncated.
    /// Returns `None` for anything that is not a plain decimal number.
    ///
    /// ```
    /// use tienda_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal_str("1999.99", Currency::ARS);
    /// assert_eq!(price.unwrap().amount_cents, 199999);
    /// ```
    pub fn from_decimal_str(s: &str, currency: Currency) -> Option<Self> {
        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (digits, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let places = currency.decimal_places() as usize;
        let whole: i64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().ok()?
        };
        let mut frac_digits = frac_part.to_string();
        frac_digits.truncate(places);
        while frac_digits.len() < places {
            frac_digits.push('0');
        }
        let frac: i64 = if frac_digits.is_empty() {
            0
        } else {
            frac_digits.parse().ok()?
        };

        let cents = whole.checked_mul(currency.scale())?.checked_add(frac)?;
        Some(Self::new(if negative { -cents } else { cents }, currency))
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / self.currency.scale() as f64
    }

    /// Whole-unit value rounded down, for range-input lower bounds.
    pub fn floor_units(&self) -> i64 {
        self.amount_cents.div_euclid(self.currency.scale())
    }

    /// Whole-unit value rounded up, for range-input upper bounds.
    pub fn ceil_units(&self) -> i64 {
        let scale = self.currency.scale();
        let floored = self.amount_cents.div_euclid(scale);
        if self.amount_cents.rem_euclid(scale) > 0 {
            floored + 1
        } else {
            floored
        }
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99"), the
    /// shape the platform expects for price fields.
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{:.*}", places, self.to_decimal())
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
    fn test_from_decimal_str() {
        let m = Money::from_decimal_str("49.99", Currency::ARS).unwrap();
        assert_eq!(m.amount_cents, 4999);

        let m = Money::from_decimal_str("100", Currency::ARS).unwrap();
        assert_eq!(m.amount_cents, 10000);

        let m = Money::from_decimal_str("100.5", Currency::ARS).unwrap();
        assert_eq!(m.amount_cents, 10050);

        let m = Money::from_decimal_str(".50", Currency::ARS).unwrap();
        assert_eq!(m.amount_cents, 50);

        let m = Money::from_decimal_str("1500", Currency::CLP).unwrap();
        assert_eq!(m.amount_cents, 1500);
    }

    #[test]
    fn test_from_decimal_str_truncates_extra_digits() {
        let m = Money::from_decimal_str("10.999", Currency::ARS).unwrap();
        assert_eq!(m.amount_cents, 1099);
    }

    #[test]
    fn test_from_decimal_str_rejects_garbage() {
        assert!(Money::from_decimal_str("", Currency::ARS).is_none());
        assert!(Money::from_decimal_str("abc", Currency::ARS).is_none());
        assert!(Money::from_decimal_str("10,50", Currency::ARS).is_none());
        assert!(Money::from_decimal_str("-", Currency::ARS).is_none());
        assert!(Money::from_decimal_str("1.2.3", Currency::ARS).is_none());
    }

    #[test]
    fn test_from_decimal_str_negative() {
        let m = Money::from_decimal_str("-10.50", Currency::ARS).unwrap();
        assert_eq!(m.amount_cents, -1050);
    }

    #[test]
    fn test_to_decimal() {
        let m = Money::new(4999, Currency::ARS);
        assert!((m.to_decimal() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_floor_and_ceil_units() {
        let m = Money::new(4950, Currency::ARS);
        assert_eq!(m.floor_units(), 49);
        assert_eq!(m.ceil_units(), 50);

        let m = Money::new(5000, Currency::ARS);
        assert_eq!(m.floor_units(), 50);
        assert_eq!(m.ceil_units(), 50);
    }

    #[test]
    fn test_display() {
        let m = Money::new(4999, Currency::ARS);
        assert_eq!(m.display(), "$49.99");
        assert_eq!(m.display_amount(), "49.99");

        let m = Money::new(1500, Currency::CLP);
        assert_eq!(m.display_amount(), "1500");
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("ARS"), Some(Currency::ARS));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
