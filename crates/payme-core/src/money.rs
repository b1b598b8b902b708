//! Money Formatting
//!
//! Currency-aware display formatting for invoice amounts. A small table of
//! recognized ISO-4217 codes stands in for the browser's locale machinery;
//! unrecognized codes fall back to `"<amount> <currency>"` so a bad code can
//! never fail a render.

use rust_decimal::Decimal;

/// Symbol and minor-unit count for a recognized currency code.
fn currency_format(code: &str) -> Option<(&'static str, u32)> {
    let upper = code.to_ascii_uppercase();
    let format = match upper.as_str() {
        "USD" | "CAD" | "AUD" | "NZD" => ("$", 2),
        "EUR" => ("\u{20ac}", 2),
        "GBP" => ("\u{a3}", 2),
        // The backend's provider is PayFast, so ZAR invoices are the norm.
        "ZAR" => ("R", 2),
        "JPY" => ("\u{a5}", 0),
        "CHF" => ("CHF ", 2),
        "INR" => ("\u{20b9}", 2),
        "BRL" => ("R$", 2),
        _ => return None,
    };
    Some(format)
}

/// Format an amount with its currency code.
///
/// Recognized codes render as `symbol` + grouped digits + minor units
/// (`$1,250.00`); anything else renders as `"<amount> <currency>"`. Never
/// panics.
pub fn format_money(amount: Decimal, currency: &str) -> String {
    let Some((symbol, minor_units)) = currency_format(currency) else {
        return format!("{amount} {currency}");
    };

    let magnitude = format!("{:.*}", minor_units as usize, amount.abs().round_dp(minor_units));
    let (int_part, frac_part) = match magnitude.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (magnitude.as_str(), None),
    };

    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(frac) => format!("{sign}{symbol}{}.{frac}", group_thousands(int_part)),
        None => format!("{sign}{symbol}{}", group_thousands(int_part)),
    }
}

/// Insert `,` separators every three digits, right to left.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
