use std::fmt;
use std::str::FromStr;

/// Locales with a sign-placement table of their own. A (code, locale) pair
/// with no entry falls back to the default table, then to empty signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    EnUs,
    De,
    Fr,
    Sv,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "en" | "en_us" => Ok(Self::EnUs),
            "de" | "de_de" => Ok(Self::De),
            "fr" | "fr_fr" => Ok(Self::Fr),
            "sv" | "sv_se" => Ok(Self::Sv),
            other => Err(format!("unsupported locale {other:?}")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EnUs => "en_US",
            Self::De => "de",
            Self::Fr => "fr",
            Self::Sv => "sv",
        };
        f.write_str(name)
    }
}

type SignRow = (&'static str, &'static str, &'static str);

/// Default sign placements, used when the locale table has no entry for a
/// code. Registry codes missing here render with no sign at all.
const DEFAULT_SIGNS: &[SignRow] = &[
    ("AUD", "A$", ""),
    ("BRL", "R$", ""),
    ("CAD", "C$", ""),
    ("CHF", "Fr.", ""),
    ("CNY", "\u{a5}", ""),
    ("CZK", "", " K\u{10d}"),
    ("DKK", "", " Dkr"),
    ("EUR", "", " \u{20ac}"),
    ("GBP", "GB\u{a3}", ""),
    ("HKD", "HK$", ""),
    ("INR", "\u{20b9}", ""),
    ("JPY", "\u{a5}", ""),
    ("KRW", "\u{20a9}", ""),
    ("MXN", "Mex$", ""),
    ("NOK", "", " Nkr"),
    ("NZD", "NZ$", ""),
    ("PLN", "", " z\u{142}"),
    ("RUB", "", " \u{20bd}"),
    ("SEK", "", " Skr"),
    ("SGD", "S$", ""),
    ("THB", "\u{e3f}", ""),
    ("TRY", "\u{20ba}", ""),
    ("USD", "$", ""),
    ("ZAR", "R ", ""),
];

const EN_US_SIGNS: &[SignRow] = &[
    ("USD", "$", ""),
    ("GBP", "GB\u{a3}", ""),
    ("EUR", "", " \u{20ac}"),
    ("CAD", "C$", ""),
    ("JPY", "\u{a5}", ""),
];

const DE_SIGNS: &[SignRow] = &[
    ("EUR", "", " \u{20ac}"),
    ("USD", "", " $"),
    ("GBP", "", " \u{a3}"),
    ("CHF", "", " Fr."),
];

const FR_SIGNS: &[SignRow] = &[
    ("EUR", "", " \u{20ac}"),
    ("USD", "", " $US"),
    ("GBP", "", " \u{a3}GB"),
];

const SV_SIGNS: &[SignRow] = &[
    ("SEK", "", " kr"),
    ("EUR", "", " \u{20ac}"),
    ("USD", "", " $"),
];

fn table_for(locale: Locale) -> &'static [SignRow] {
    match locale {
        Locale::EnUs => EN_US_SIGNS,
        Locale::De => DE_SIGNS,
        Locale::Fr => FR_SIGNS,
        Locale::Sv => SV_SIGNS,
    }
}

fn find_in(table: &'static [SignRow], code: &str) -> Option<(&'static str, &'static str)> {
    table
        .iter()
        .copied()
        .find(|&(entry, _, _)| entry == code)
        .map(|(_, prefix, suffix)| (prefix, suffix))
}

/// The (prefix, suffix) sign placement for a code under a locale. A miss
/// is not an error; it degrades to empty signs.
pub fn sign_definition(code: &str, locale: Locale) -> (&'static str, &'static str) {
    find_in(table_for(locale), code)
        .or_else(|| find_in(DEFAULT_SIGNS, code))
        .unwrap_or(("", ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_parses_common_spellings() {
        assert_eq!("en_US".parse::<Locale>().unwrap(), Locale::EnUs);
        assert_eq!("de-DE".parse::<Locale>().unwrap(), Locale::De);
        assert_eq!("SV".parse::<Locale>().unwrap(), Locale::Sv);
        assert!("xx_XX".parse::<Locale>().is_err());
    }

    #[test]
    fn sign_definition_prefers_the_locale_table() {
        assert_eq!(sign_definition("USD", Locale::EnUs), ("$", ""));
        assert_eq!(sign_definition("USD", Locale::De), ("", " $"));
        assert_eq!(sign_definition("EUR", Locale::EnUs), ("", " \u{20ac}"));
    }

    #[test]
    fn sign_definition_falls_back_to_the_default_table() {
        // SEK has no en_US entry but a default one
        assert_eq!(sign_definition("SEK", Locale::EnUs), ("", " Skr"));
    }

    #[test]
    fn sign_definition_degrades_to_empty_signs() {
        assert_eq!(sign_definition("HUF", Locale::EnUs), ("", ""));
        assert_eq!(sign_definition("XXX", Locale::Fr), ("", ""));
    }
}
