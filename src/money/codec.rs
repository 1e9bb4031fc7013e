use rust_decimal::Decimal;
use std::str::FromStr;

use super::{CurrencyCode, MoneyValue};
use crate::config::MoneyConfig;
use crate::error::MoneyError;

/// Render a money value as its canonical `"<amount> <CODE>"` string.
///
/// `None` and zero-amount values normalize to zero in the configured base
/// currency before formatting.
pub fn serialize(value: Option<&MoneyValue>, config: &MoneyConfig) -> String {
    let zero = MoneyValue::zero(config.base_currency.clone());
    let money = match value {
        Some(money) if !money.is_zero() => money,
        _ => &zero,
    };
    format!(
        "{} {}",
        money.format_amount(config.decimal_places),
        money.currency
    )
}

/// Parse the canonical `"<amount> <currency>"` form.
///
/// The currency token is taken verbatim; it is not checked against the ISO
/// registry here.
pub fn parse(input: &str) -> Result<MoneyValue, MoneyError> {
    let mut tokens = input.split(' ');
    let (amount, currency) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(amount), Some(currency), None) if !amount.is_empty() && !currency.is_empty() => {
            (amount, currency)
        }
        _ => {
            return Err(MoneyError::Parse {
                input: input.to_string(),
            })
        }
    };
    // from_str does not accept exponent notation
    let amount = Decimal::from_str(amount)
        .or_else(|_| Decimal::from_scientific(amount))
        .map_err(|_| MoneyError::InvalidAmount {
            amount: amount.to_string(),
        })?;
    Ok(MoneyValue::new(amount, CurrencyCode::new(currency)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(amount: &str, code: &str) -> MoneyValue {
        MoneyValue::new(Decimal::from_str(amount).unwrap(), code)
    }

    #[test]
    fn serialize_renders_amount_and_code() {
        let config = MoneyConfig::default();
        assert_eq!(serialize(Some(&money("100", "USD")), &config), "100.00 USD");
        assert_eq!(
            serialize(Some(&money("123.321", "EUR")), &config),
            "123.32 EUR"
        );
    }

    #[test]
    fn serialize_none_normalizes_to_base_currency() {
        let config = MoneyConfig::default();
        assert_eq!(serialize(None, &config), "0.00 USD");
    }

    #[test]
    fn serialize_zero_normalizes_to_base_currency() {
        let config = MoneyConfig::default();
        assert_eq!(serialize(Some(&MoneyValue::zero("EUR")), &config), "0.00 USD");
    }

    #[test]
    fn serialize_respects_decimal_places() {
        let config = MoneyConfig {
            decimal_places: 3,
            ..MoneyConfig::default()
        };
        assert_eq!(
            serialize(Some(&money("123.321", "EUR")), &config),
            "123.321 EUR"
        );
    }

    #[test]
    fn parse_splits_amount_and_currency() {
        let value = parse("456.78 GBP").unwrap();
        assert_eq!(value.amount, Decimal::from_str("456.78").unwrap());
        assert_eq!(value.currency.as_str(), "GBP");
    }

    #[test]
    fn parse_rejects_wrong_token_count() {
        for input in ["100USD", "1 2 3", "", " USD", "100 "] {
            assert!(
                matches!(parse(input), Err(MoneyError::Parse { .. })),
                "expected parse error for {input:?}"
            );
        }
    }

    #[test]
    fn serialize_rounds_unrounded_amounts() {
        let config = MoneyConfig::default();
        assert_eq!(serialize(Some(&money("0.599", "USD")), &config), "0.60 USD");
        assert_eq!(
            serialize(Some(&money("456.785", "GBP")), &config),
            "456.79 GBP"
        );
    }

    #[test]
    fn parse_accepts_scientific_notation() {
        let value = parse("1e2 USD").unwrap();
        assert_eq!(value.amount, Decimal::from_str("100").unwrap());

        let fractional = parse("4.5678e2 GBP").unwrap();
        assert_eq!(fractional.amount, Decimal::from_str("456.78").unwrap());
    }

    #[test]
    fn parse_rejects_non_numeric_amount() {
        assert!(matches!(
            parse("abc USD"),
            Err(MoneyError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn parse_inverts_serialize_at_configured_precision() {
        let config = MoneyConfig::default();
        for (amount, code) in [
            ("100.00", "USD"),
            ("123.32", "EUR"),
            ("0.01", "JPY"),
            ("456.78", "GBP"),
        ] {
            let value = money(amount, code);
            let round_tripped = parse(&serialize(Some(&value), &config)).unwrap();
            assert_eq!(round_tripped, value);
        }
    }
}
