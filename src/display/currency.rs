//! Locale- and currency-aware money rendering
//!
//! Two presentation families cover the seeded locales: English-style
//! ("$1,234.56", symbol first) and continental-style ("1.234,56 €",
//! symbol last). Unknown currencies render with their ISO code.

use crate::models::Money;

/// Separator and symbol-placement conventions for one locale family
struct LocaleStyle {
    group_sep: char,
    decimal_sep: char,
    symbol_first: bool,
}

fn style_for(locale: &str) -> LocaleStyle {
    // Language subtag decides the family
    let language = locale.split(['-', '_']).next().unwrap_or("");
    if language.eq_ignore_ascii_case("en") {
        LocaleStyle {
            group_sep: ',',
            decimal_sep: '.',
            symbol_first: true,
        }
    } else {
        LocaleStyle {
            group_sep: '.',
            decimal_sep: ',',
            symbol_first: false,
        }
    }
}

fn symbol_for(currency: &str) -> &str {
    match currency {
        "EUR" => "€",
        "USD" => "$",
        "GBP" => "£",
        "JPY" => "¥",
        other => other,
    }
}

/// Group the major-unit digits of a non-negative value by thousands
fn group_digits(major: i64, sep: char) -> String {
    let digits = major.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(sep);
        }
        grouped.push(c);
    }
    grouped
}

/// Render an amount per locale and currency conventions
pub fn format_currency(amount: Money, locale: &str, currency: &str) -> String {
    let style = style_for(locale);
    let symbol = symbol_for(currency);

    let magnitude = amount.abs();
    let body = format!(
        "{}{}{:02}",
        group_digits(magnitude.major_part(), style.group_sep),
        style.decimal_sep,
        magnitude.minor_part()
    );

    let sign = if amount.is_negative() { "-" } else { "" };
    if style.symbol_first {
        format!("{}{}{}", sign, symbol, body)
    } else {
        format!("{}{} {}", sign, body, symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_style() {
        assert_eq!(
            format_currency(Money::from_minor(123456), "en-US", "USD"),
            "$1,234.56"
        );
        assert_eq!(
            format_currency(Money::from_minor(500000), "en-US", "USD"),
            "$5,000.00"
        );
    }

    #[test]
    fn test_continental_style() {
        assert_eq!(
            format_currency(Money::from_minor(123456), "pt-PT", "EUR"),
            "1.234,56 €"
        );
        assert_eq!(
            format_currency(Money::from_minor(2500000), "de-DE", "EUR"),
            "25.000,00 €"
        );
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(
            format_currency(Money::from_minor(-30650), "pt-PT", "EUR"),
            "-306,50 €"
        );
        assert_eq!(
            format_currency(Money::from_minor(-3000), "en-US", "USD"),
            "-$30.00"
        );
    }

    #[test]
    fn test_small_amounts_have_no_grouping() {
        assert_eq!(
            format_currency(Money::from_minor(7997), "pt-PT", "EUR"),
            "79,97 €"
        );
    }

    #[test]
    fn test_large_grouping() {
        assert_eq!(
            format_currency(Money::from_minor(123456789), "en-US", "USD"),
            "$1,234,567.89"
        );
    }

    #[test]
    fn test_unknown_currency_uses_code() {
        assert_eq!(
            format_currency(Money::from_minor(10000), "en-AU", "AUD"),
            "AUD100.00"
        );
    }
}
