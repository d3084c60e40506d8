//! Display helpers shared by every front end.

use crate::model::AddedDate;

pub const CURRENCY_SYMBOL: &str = "£";

const MAX_FRACTION_DIGITS: usize = 3;

/// Render an amount as `£1,234,567.5`: thousands separators, at most three
/// fraction digits, no trailing zeros.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{}NaN", CURRENCY_SYMBOL);
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}{}∞", CURRENCY_SYMBOL, sign);
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    let mut out = format!("{}{}{}", CURRENCY_SYMBOL, sign, group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Render a listing date verbatim as `{day} {month} {year}`.
pub fn format_calendar_date(date: &AddedDate) -> String {
    format!("{} {} {}", date.day, date.month, date.year)
}
