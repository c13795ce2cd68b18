//! Locale-aware currency formatting with zero fraction digits.

const NBSP: char = '\u{a0}';

/// Number layout conventions of a locale family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleStyle {
    /// `$1,235` (en-*)
    English,
    /// `1.235 €` (de, nl, es, it, pt, da)
    Continental,
    /// `1 235 kr` (fr, nb, no, nn, sv, fi)
    Spaced,
}

impl LocaleStyle {
    /// Resolve a BCP 47 tag like `nb-NO` by its language subtag.
    pub fn from_locale(locale: &str) -> Self {
        let language = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "de" | "nl" | "es" | "it" | "pt" | "da" => Self::Continental,
            "fr" | "nb" | "no" | "nn" | "sv" | "fi" => Self::Spaced,
            _ => Self::English,
        }
    }

    fn group_separator(&self) -> char {
        match self {
            Self::English => ',',
            Self::Continental => '.',
            Self::Spaced => NBSP,
        }
    }
}

/// Display symbol for a currency code; unknown codes display as the code.
pub fn currency_symbol(code: &str) -> &str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "INR" => "₹",
        "CAD" => "CA$",
        "AUD" => "A$",
        "NOK" | "SEK" | "DKK" => "kr",
        other => other,
    }
}

/// Format `amount` in `code` for `locale`, rounded to whole units.
pub fn format_currency(amount: f64, code: &str, locale: &str) -> String {
    let style = LocaleStyle::from_locale(locale);
    let symbol = currency_symbol(code);
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = group_digits(rounded.abs(), style.group_separator());

    match style {
        LocaleStyle::English if symbol.chars().all(char::is_alphabetic) => {
            format!("{sign}{symbol}{NBSP}{digits}")
        }
        LocaleStyle::English => format!("{sign}{symbol}{digits}"),
        LocaleStyle::Continental | LocaleStyle::Spaced => format!("{sign}{digits}{NBSP}{symbol}"),
    }
}

fn group_digits(value: f64, separator: char) -> String {
    if !value.is_finite() {
        return if value.is_nan() { "NaN".to_string() } else { "∞".to_string() };
    }
    let raw = format!("{value:.0}");
    let len = raw.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_prefix() {
        assert_eq!(format_currency(1234.5, "USD", "en-US"), "$1,235");
        assert_eq!(format_currency(999.4, "GBP", "en-GB"), "£999");
        assert_eq!(format_currency(1_000_000.0, "EUR", "en"), "€1,000,000");
        assert_eq!(format_currency(-1234.0, "USD", "en-US"), "-$1,234");
    }

    #[test]
    fn test_english_with_code_symbol() {
        assert_eq!(format_currency(1500.0, "NOK", "en-US"), "kr\u{a0}1,500");
        assert_eq!(format_currency(1500.0, "CHF", "en-US"), "CHF\u{a0}1,500");
    }

    #[test]
    fn test_continental_suffix() {
        assert_eq!(format_currency(1234.0, "EUR", "de-DE"), "1.234\u{a0}€");
    }

    #[test]
    fn test_spaced_suffix() {
        assert_eq!(format_currency(10500.0, "NOK", "nb-NO"), "10\u{a0}500\u{a0}kr");
        assert_eq!(format_currency(12.0, "SEK", "sv_SE"), "12\u{a0}kr");
    }

    #[test]
    fn test_locale_families() {
        for tag in ["de-DE", "nl", "es-ES", "it", "pt-BR", "da-DK"] {
            assert_eq!(LocaleStyle::from_locale(tag), LocaleStyle::Continental, "{tag}");
        }
        for tag in ["fr-FR", "nb-NO", "no", "nn-NO", "sv_SE", "fi-FI"] {
            assert_eq!(LocaleStyle::from_locale(tag), LocaleStyle::Spaced, "{tag}");
        }
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        assert_eq!(LocaleStyle::from_locale("xx-YY"), LocaleStyle::English);
        assert_eq!(LocaleStyle::from_locale(""), LocaleStyle::English);
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(format_currency(-0.4, "USD", "en-US"), "$0");
    }
}
