mod locale;
mod registry;

pub use locale::{sign_definition, Locale};
pub use registry::{lookup, CurrencyEntry};

use crate::error::MoneyError;
use crate::money::CurrencyCode;

/// Display metadata for a currency. Resolved once per object against the
/// ISO registry and the locale sign table; the GraphQL field resolvers
/// read the precomputed fields instead of looking the signs up again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyMetadata {
    pub code: String,
    pub name: String,
    pub numeric: String,
    pub symbol: String,
    pub prefix: String,
    pub suffix: String,
}

/// Resolve the metadata for `code` under `locale`.
///
/// # Errors
/// Returns `MoneyError::UnknownCurrency` if the code is not in the ISO
/// registry. A missing sign definition is not an error; it degrades to
/// empty prefix and suffix.
pub fn resolve_metadata(
    code: &CurrencyCode,
    locale: Locale,
) -> Result<CurrencyMetadata, MoneyError> {
    let entry = registry::lookup(code.as_str())
        .ok_or_else(|| MoneyError::UnknownCurrency(code.as_str().to_string()))?;
    let (prefix, suffix) = locale::sign_definition(entry.code, locale);
    let symbol = format!("{prefix}{suffix}").trim().to_string();
    Ok(CurrencyMetadata {
        code: entry.code.to_string(),
        name: entry.name.to_string(),
        numeric: entry.numeric.to_string(),
        symbol,
        prefix: prefix.trim().to_string(),
        suffix: suffix.trim().to_string(),
    })
}
