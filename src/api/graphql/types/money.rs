use async_graphql::{Context, Object, Result};
use rust_decimal::prelude::ToPrimitive;

use crate::api::graphql::{context::ApiContext, scalars::StringMoney, types::CurrencyObject};
use crate::currency;
use crate::money::MoneyValue;

/// A money value and its derived representations. Every field is a pure
/// function of the wrapped value plus the gateway's formatting config.
pub struct MoneyObject {
    value: MoneyValue,
}

impl MoneyObject {
    pub fn new(value: MoneyValue) -> Self {
        Self { value }
    }

    fn amount_f64(&self) -> f64 {
        self.value.amount.to_f64().unwrap_or(0.0)
    }

    /// Truncated whole-number amount, saturating at the i64 bounds.
    fn amount_trunc(&self) -> i64 {
        let whole = self.value.amount.trunc();
        whole.to_i64().unwrap_or(if whole.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        })
    }
}

#[Object(name = "Money")]
impl MoneyObject {
    /// The numerical amount.
    async fn amount(&self) -> f64 {
        self.amount_f64()
    }

    /// The string version of the numerical amount.
    async fn amount_str(&self, ctx: &Context<'_>) -> String {
        let config = &ctx.data_unchecked::<ApiContext>().config;
        self.value.format_amount(config.decimal_places)
    }

    /// The amount truncated to a whole number.
    async fn amount_int(&self) -> i64 {
        self.amount_trunc()
    }

    /// The canonical "<amount> <CODE>" rendering of this value.
    async fn as_string(&self, ctx: &Context<'_>) -> StringMoney {
        let config = &ctx.data_unchecked::<ApiContext>().config;
        StringMoney::render(Some(&self.value), config)
    }

    /// The currency this amount is denominated in.
    ///
    /// # Errors
    /// Returns an error if the currency code is not in the ISO registry.
    async fn currency(&self, ctx: &Context<'_>) -> Result<CurrencyObject> {
        let config = &ctx.data_unchecked::<ApiContext>().config;
        let meta = currency::resolve_metadata(&self.value.currency, config.locale)?;
        Ok(CurrencyObject::new(meta))
    }

    /// The amount rendered with an explicit decimal-places count,
    /// overriding the configured default.
    async fn format_amount(&self, decimals: u32) -> String {
        self.value.format_amount(decimals)
    }
}
