use async_graphql::InputObject;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use crate::error::MoneyError;
use crate::money::{CurrencyCode, MoneyValue};

/// Mutation payload carrying a money value as its two raw parts.
#[derive(InputObject, Debug, Clone)]
pub struct MoneyInput {
    /// The numerical amount.
    pub amount: String,
    /// The ISO 4217 3-letter currency code.
    pub currency: String,
}

impl MoneyInput {
    /// Build the money value this input describes.
    ///
    /// # Errors
    /// Returns an error if the amount is not a decimal number.
    pub fn money(&self) -> Result<MoneyValue, MoneyError> {
        let raw = self.amount.trim();
        let amount = Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .map_err(|_| MoneyError::InvalidAmount {
                amount: self.amount.clone(),
            })?;
        Ok(MoneyValue::new(amount, CurrencyCode::new(&self.currency)))
    }
}

impl fmt::Display for MoneyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
