use clap::Parser;

use crate::config::MoneyConfig;
use crate::currency::Locale;
use crate::money::CurrencyCode;

#[derive(Parser, Clone, Debug)]
#[command(version, about = "Money GraphQL Gateway")]
pub struct GatewayOptions {
    /// The host to bind the API server to
    #[arg(long, default_value = "0.0.0.0", env = "MONEY_GATEWAY_HOST")]
    pub listen_host: String,

    /// The port to bind the API server to
    #[arg(short = 'p', long, default_value = "8080", env = "PORT")]
    pub listen_port: u16,

    /// The fallback currency used for missing or zero amounts
    #[arg(long, default_value = "USD", env = "MONEY_GATEWAY_BASE_CURRENCY")]
    pub base_currency: String,

    /// Decimal places used when rendering amounts
    #[arg(long, default_value = "2", env = "MONEY_GATEWAY_DECIMAL_PLACES")]
    pub decimal_places: u32,

    /// Locale driving currency symbol placement
    #[arg(long, default_value = "en_US", env = "MONEY_GATEWAY_LOCALE")]
    pub locale: Locale,
}

impl GatewayOptions {
    /// Build the money config threaded into the schema. The base currency
    /// must exist in the ISO registry.
    ///
    /// # Errors
    /// Returns an error if the base currency code is unknown.
    pub fn money_config(&self) -> anyhow::Result<MoneyConfig> {
        let base_currency = CurrencyCode::new(&self.base_currency);
        if crate::currency::lookup(base_currency.as_str()).is_none() {
            anyhow::bail!("unknown base currency {:?}", self.base_currency);
        }
        Ok(MoneyConfig {
            base_currency,
            decimal_places: self.decimal_places,
            locale: self.locale,
        })
    }
}
