use thiserror::Error;

/// Errors raised while parsing or resolving money values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The string form of a money value must be `"<amount> <currency>"`.
    #[error("malformed money string {input:?}: expected \"<amount> <currency>\"")]
    Parse { input: String },

    /// The amount token did not parse as a decimal number.
    #[error("invalid money amount {amount:?}")]
    InvalidAmount { amount: String },

    /// The currency code is absent from the ISO 4217 registry.
    #[error("unknown currency code {0:?}")]
    UnknownCurrency(String),
}
