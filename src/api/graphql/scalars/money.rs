use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use std::fmt;

use crate::config::MoneyConfig;
use crate::money::{self, MoneyValue};

/// Money in its canonical `"<amount> <CODE>"` string form.
///
/// Output values are rendered with the configured decimal places at
/// construction; parsed input keeps the string it arrived as alongside the
/// decoded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringMoney {
    value: MoneyValue,
    canonical: String,
}

impl StringMoney {
    /// Render a value for output. `None` and zero normalize to zero in the
    /// configured base currency.
    pub fn render(value: Option<&MoneyValue>, config: &MoneyConfig) -> Self {
        let canonical = money::serialize(value, config);
        let value = match value {
            Some(money) if !money.is_zero() => money.clone(),
            _ => MoneyValue::zero(config.base_currency.clone()),
        };
        Self { value, canonical }
    }

    pub fn value(&self) -> &MoneyValue {
        &self.value
    }
}

impl fmt::Display for StringMoney {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

#[Scalar(name = "StringMoney")]
impl ScalarType for StringMoney {
    fn parse(value: Value) -> InputValueResult<Self> {
        if let Value::String(s) = value {
            let parsed = money::parse(&s).map_err(InputValueError::custom)?;
            Ok(StringMoney {
                value: parsed,
                canonical: s,
            })
        } else {
            Err(InputValueError::expected_type(value))
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.canonical.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn parse_accepts_the_canonical_string() {
        let scalar =
            <StringMoney as ScalarType>::parse(Value::String("100.00 USD".to_string())).unwrap();

        assert_eq!(scalar.value().amount, Decimal::from_str("100.00").unwrap());
        assert_eq!(scalar.value().currency.as_str(), "USD");
        assert_eq!(scalar.to_value(), Value::String("100.00 USD".to_string()));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(<StringMoney as ScalarType>::parse(Value::String("100USD".to_string())).is_err());
        assert!(<StringMoney as ScalarType>::parse(Value::String("abc USD".to_string())).is_err());
        assert!(<StringMoney as ScalarType>::parse(Value::Boolean(true)).is_err());
    }

    #[test]
    fn render_applies_the_configured_precision() {
        let config = MoneyConfig::default();
        let value = MoneyValue::new(Decimal::from_str("123.321").unwrap(), "EUR");

        let scalar = StringMoney::render(Some(&value), &config);
        assert_eq!(scalar.to_string(), "123.32 EUR");
    }

    #[test]
    fn render_none_normalizes_to_base_currency() {
        let config = MoneyConfig::default();

        let scalar = StringMoney::render(None, &config);
        assert_eq!(scalar.to_string(), "0.00 USD");
        assert!(scalar.value().is_zero());
        assert_eq!(scalar.value().currency.as_str(), "USD");
    }
}
