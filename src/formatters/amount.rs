use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::Currency;

/// Locale rules for rendering a currency amount.
struct Convention {
    symbol: &'static str,
    decimal_separator: char,
    group_separator: char,
    symbol_first: bool,
}

const NBSP: char = '\u{a0}';

// en-US
const EN_US: Convention = Convention {
    symbol: "$",
    decimal_separator: '.',
    group_separator: ',',
    symbol_first: true,
};

// de-DE
const DE_DE: Convention = Convention {
    symbol: "€",
    decimal_separator: ',',
    group_separator: '.',
    symbol_first: false,
};

// Arabic locales are simplified on purpose: Latin digits and separators,
// no bidi marks. They do not try to match ICU's ar-SA / ar-AE output.

// ar-SA
const AR_SA: Convention = Convention {
    symbol: "ر.س.",
    decimal_separator: '.',
    group_separator: ',',
    symbol_first: false,
};

// ar-AE
const AR_AE: Convention = Convention {
    symbol: "د.إ.",
    decimal_separator: '.',
    group_separator: ',',
    symbol_first: false,
};

fn convention(currency: &Currency) -> Option<&'static Convention> {
    match currency {
        Currency::Usd => Some(&EN_US),
        Currency::Eur => Some(&DE_DE),
        Currency::Aed => Some(&AR_SA),
        Currency::Sar => Some(&AR_AE),
        Currency::NotSpecified | Currency::Other(_) => None,
    }
}

/// Render `amount` with two decimals using the locale convention tied to
/// `currency`. Without a convention (unspecified or unknown code) the result
/// is a bare `1234.50`.
pub fn format_currency_amount(amount: Decimal, currency: Currency) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = format!("{:.2}", rounded.abs());
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let Some(convention) = convention(&currency) else {
        return format!("{}{}.{}", sign, integer, fraction);
    };

    let number = format!(
        "{}{}{}",
        group_thousands(integer, convention.group_separator),
        convention.decimal_separator,
        fraction
    );

    if convention.symbol_first {
        format!("{}{}{}", sign, convention.symbol, number)
    } else {
        format!("{}{}{}{}", sign, number, NBSP, convention.symbol)
    }
}

fn group_thousands(integer: &str, separator: char) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}
