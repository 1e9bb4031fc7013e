mod codec;

pub use codec::{parse, serialize};

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// A 3-letter ISO 4217 currency code, uppercased on construction.
///
/// Codes are not validated here. Unknown codes surface later, when
/// currency metadata is resolved for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// A decimal amount paired with a currency code.
///
/// Values are immutable; an update replaces the whole value rather than
/// mutating the amount in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyValue {
    pub amount: Decimal,
    pub currency: CurrencyCode,
}

impl MoneyValue {
    pub fn new(amount: Decimal, currency: impl Into<CurrencyCode>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    pub fn zero(currency: impl Into<CurrencyCode>) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Round the amount to `decimal_places`, midpoint away from zero, the
    /// same rounding applied when a value is written to storage.
    #[must_use]
    pub fn rounded(&self, decimal_places: u32) -> Self {
        Self {
            amount: self
                .amount
                .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero),
            currency: self.currency.clone(),
        }
    }

    /// Render the amount at `decimal_places` precision, no currency
    /// attached. Rounds midpoint away from zero first; `Decimal`'s own
    /// precision formatting truncates.
    pub fn format_amount(&self, decimal_places: u32) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
        format!("{rounded:.prec$}", prec = decimal_places as usize)
    }
}

impl fmt::Display for MoneyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn currency_code_is_uppercased_and_trimmed() {
        assert_eq!(CurrencyCode::new(" usd ").as_str(), "USD");
        assert_eq!(CurrencyCode::new("GBP").to_string(), "GBP");
    }

    #[test]
    fn rounded_goes_midpoint_away_from_zero() {
        let value = MoneyValue::new(Decimal::from_str("123.455").unwrap(), "USD");
        assert_eq!(
            value.rounded(2).amount,
            Decimal::from_str("123.46").unwrap()
        );

        let negative = MoneyValue::new(Decimal::from_str("-123.455").unwrap(), "USD");
        assert_eq!(
            negative.rounded(2).amount,
            Decimal::from_str("-123.46").unwrap()
        );
    }

    #[test]
    fn format_amount_rounds_at_the_requested_precision() {
        let value = MoneyValue::new(Decimal::from_str("456.78").unwrap(), "GBP");
        assert_eq!(value.format_amount(1), "456.8");
        assert_eq!(value.format_amount(0), "457");

        let thirds = MoneyValue::new(Decimal::from_str("123.321").unwrap(), "EUR");
        assert_eq!(thirds.format_amount(1), "123.3");
        assert_eq!(thirds.format_amount(2), "123.32");
    }

    #[test]
    fn format_amount_pads_short_fractions() {
        let value = MoneyValue::new(Decimal::from_str("100.0").unwrap(), "USD");
        assert_eq!(value.format_amount(1), "100.0");
        assert_eq!(value.format_amount(2), "100.00");
    }

    #[test]
    fn equality_ignores_trailing_zero_scale() {
        let a = MoneyValue::new(Decimal::from_str("100.00").unwrap(), "USD");
        let b = MoneyValue::new(Decimal::from_str("100").unwrap(), "USD");
        assert_eq!(a, b);
    }
}
