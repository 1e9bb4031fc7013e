use async_graphql::Object;

use crate::currency::CurrencyMetadata;

/// Currency metadata fields. The sign definition is resolved once when the
/// object is built, so the symbol, prefix and suffix resolvers all read
/// the same precomputed lookup.
pub struct CurrencyObject {
    meta: CurrencyMetadata,
}

impl CurrencyObject {
    pub fn new(meta: CurrencyMetadata) -> Self {
        Self { meta }
    }
}

#[Object(name = "Currency")]
impl CurrencyObject {
    /// An ISO 4217 3-letter currency code. See https://en.wikipedia.org/wiki/ISO_4217#Active_codes
    async fn code(&self) -> &str {
        &self.meta.code
    }

    /// A human readable name, e.g. US Dollar
    async fn name(&self) -> &str {
        &self.meta.name
    }

    /// An ISO 4217 numeric code. See https://en.wikipedia.org/wiki/ISO_4217#Active_codes
    async fn numeric(&self) -> &str {
        &self.meta.numeric
    }

    /// The currency's symbol, e.g. $ for USD
    async fn symbol(&self) -> &str {
        &self.meta.symbol
    }

    /// The currency's prefix, e.g. $ for USD
    async fn prefix(&self) -> &str {
        &self.meta.prefix
    }

    /// The currency's suffix, e.g. € for EUR
    async fn suffix(&self) -> &str {
        &self.meta.suffix
    }
}
