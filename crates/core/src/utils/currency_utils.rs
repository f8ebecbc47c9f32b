//! Currency display formatting.
//!
//! Pure formatting only: amounts are never converted between currencies.

use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Returns the display symbol for an ISO 4217 code, if one is conventional.
pub fn currency_symbol(currency: &str) -> Option<&'static str> {
    match currency {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "INR" => Some("₹"),
        "BDT" => Some("৳"),
        _ => None,
    }
}

/// Formats an amount with its currency for display.
///
/// Known codes get their symbol (`$1,234.56`), everything else a code
/// prefix (`CHF 1,234.56`). Always 2 decimal places, thousands grouping,
/// sign in front of the symbol.
pub fn format_money(amount: Decimal, currency: &str) -> String {
    let rounded = amount.round_dp(DISPLAY_DECIMAL_PRECISION);
    let text = format!(
        "{:.prec$}",
        rounded.abs(),
        prec = DISPLAY_DECIMAL_PRECISION as usize
    );

    let (integer_part, fraction_part) = match text.split_once('.') {
        Some((i, f)) => (i, f),
        None => (text.as_str(), ""),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    let digits: Vec<char> = integer_part.chars().collect();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    // Sign follows the displayed value: an amount that rounds to zero is
    // shown unsigned.
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    match currency_symbol(currency) {
        Some(symbol) => format!("{}{}{}.{}", sign, symbol, grouped, fraction_part),
        None => format!("{}{} {}.{}", sign, currency, grouped, fraction_part),
    }
}
