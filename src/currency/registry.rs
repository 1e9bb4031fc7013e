/// One row of the static ISO 4217 registry.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub numeric: &'static str,
}

/// Active ISO 4217 codes the gateway knows about.
const REGISTRY: &[CurrencyEntry] = &[
    CurrencyEntry { code: "AUD", name: "Australian Dollar", numeric: "036" },
    CurrencyEntry { code: "BRL", name: "Brazilian Real", numeric: "986" },
    CurrencyEntry { code: "CAD", name: "Canadian Dollar", numeric: "124" },
    CurrencyEntry { code: "CHF", name: "Swiss Franc", numeric: "756" },
    CurrencyEntry { code: "CNY", name: "Yuan Renminbi", numeric: "156" },
    CurrencyEntry { code: "CZK", name: "Czech Koruna", numeric: "203" },
    CurrencyEntry { code: "DKK", name: "Danish Krone", numeric: "208" },
    CurrencyEntry { code: "EUR", name: "Euro", numeric: "978" },
    CurrencyEntry { code: "GBP", name: "Pound Sterling", numeric: "826" },
    CurrencyEntry { code: "HKD", name: "Hong Kong Dollar", numeric: "344" },
    CurrencyEntry { code: "HUF", name: "Forint", numeric: "348" },
    CurrencyEntry { code: "IDR", name: "Rupiah", numeric: "360" },
    CurrencyEntry { code: "ILS", name: "New Israeli Sheqel", numeric: "376" },
    CurrencyEntry { code: "INR", name: "Indian Rupee", numeric: "356" },
    CurrencyEntry { code: "JPY", name: "Yen", numeric: "392" },
    CurrencyEntry { code: "KRW", name: "Won", numeric: "410" },
    CurrencyEntry { code: "MXN", name: "Mexican Peso", numeric: "484" },
    CurrencyEntry { code: "MYR", name: "Malaysian Ringgit", numeric: "458" },
    CurrencyEntry { code: "NOK", name: "Norwegian Krone", numeric: "578" },
    CurrencyEntry { code: "NZD", name: "New Zealand Dollar", numeric: "554" },
    CurrencyEntry { code: "PHP", name: "Philippine Peso", numeric: "608" },
    CurrencyEntry { code: "PLN", name: "Zloty", numeric: "985" },
    CurrencyEntry { code: "RUB", name: "Russian Ruble", numeric: "643" },
    CurrencyEntry { code: "SEK", name: "Swedish Krona", numeric: "752" },
    CurrencyEntry { code: "SGD", name: "Singapore Dollar", numeric: "702" },
    CurrencyEntry { code: "THB", name: "Baht", numeric: "764" },
    CurrencyEntry { code: "TRY", name: "Turkish Lira", numeric: "949" },
    CurrencyEntry { code: "USD", name: "US Dollar", numeric: "840" },
    CurrencyEntry { code: "ZAR", name: "Rand", numeric: "710" },
];

/// Look up a registry entry by its 3-letter code.
pub fn lookup(code: &str) -> Option<&'static CurrencyEntry> {
    REGISTRY.iter().find(|entry| entry.code == code)
}
