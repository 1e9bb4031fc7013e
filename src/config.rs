use crate::currency::Locale;
use crate::money::CurrencyCode;

/// Formatting and parsing configuration, threaded explicitly into every call
/// that renders or parses an amount. Read-only after startup.
#[derive(Debug, Clone)]
pub struct MoneyConfig {
    /// Fallback currency used when serializing a missing or zero value.
    pub base_currency: CurrencyCode,
    /// Default number of decimal places for rendered amounts.
    pub decimal_places: u32,
    /// Locale driving currency symbol placement.
    pub locale: Locale,
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self {
            base_currency: CurrencyCode::new("USD"),
            decimal_places: 2,
            locale: Locale::EnUs,
        }
    }
}
