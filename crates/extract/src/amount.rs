use rust_decimal::Decimal;
use std::str::FromStr;

/// Normalize a raw numeric token into a decimal amount.
///
/// The token may carry currency symbols, thousands separators in either
/// locale convention, and trailing OCR punctuation. Disambiguation rules:
///
/// - Both `.` and `,` present: whichever appears last is the decimal
///   separator, the other is grouping (`1.234,56` and `1,234.56` both parse
///   as 1234.56).
/// - Only one present: the three-digit rule — exactly three digits after the
///   last occurrence means grouping (`1.272` → 1272), anything else means a
///   decimal point (`50.00` → 50.00, `12,5` → 12.5).
///
/// A genuine three-decimal amount (`123.400` meant as 123.4) is
/// indistinguishable from a grouped integer and parses as 123400. Known
/// limitation.
pub fn parse_price(token: &str) -> Option<Decimal> {
    let cleaned: String = token
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    let cleaned = cleaned.trim_end_matches(['.', ',']);
    if cleaned.is_empty() {
        return None;
    }

    let has_dot = cleaned.contains('.');
    let has_comma = cleaned.contains(',');

    let normalized = if has_dot && has_comma {
        if cleaned.rfind('.') > cleaned.rfind(',') {
            cleaned.replace(',', "")
        } else {
            cleaned.replace('.', "").replace(',', ".")
        }
    } else if has_dot || has_comma {
        let sep = if has_dot { '.' } else { ',' };
        let last_segment = cleaned.rsplit(sep).next().unwrap_or("");
        if last_segment.len() == 3 {
            cleaned.replace(sep, "")
        } else {
            cleaned.replace(sep, ".")
        }
    } else {
        cleaned.to_string()
    };

    Decimal::from_str(&normalized).ok()
}
