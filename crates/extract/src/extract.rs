use regex::Regex;
use rust_decimal::Decimal;

use crate::amount::parse_price;
use crate::lines::normalize_lines;

// ── Keyword tables ───────────────────────────────────────────────────────────
// Explicit constant tables so the heuristics stay auditable and extensible
// per locale.

/// Uppercase substrings that disqualify a line from being the vendor name:
/// document-type boilerplate, fiscal-ID and amount labels, copy markers,
/// party labels, and greeting banners. Matched as substrings of the
/// uppercased line.
const VENDOR_EXCLUSIONS: &[&str] = &[
    "INVOICE", "FACTURA", "RECIBO", "TICKET",
    "RUC", "NIT", "RFC", "TAX ID",
    "TOTAL", "IVA", "ITBMS", "FECHA", "DATE",
    "ORIGINAL", "COPIA", "COPY",
    "CLIENTE", "CUSTOMER",
    "WELCOME", "BIENVENIDO", "GRACIAS", "THANK",
];

const TAX_KEYWORDS: &str = "tax|iva|impuesto|itbms|vat";
const SUBTOTAL_KEYWORDS: &str = "subtotal|sub-total";
const TOTAL_KEYWORDS: &str = "total|pagar|amount|suma";

/// A money-looking token: grouped digits with optional decimals
/// (`1.234.567,89`) or a plain decimal (`50.00`, `12,5`). Bare integers are
/// deliberately excluded — that is what keeps `(10%)` or a street number
/// from being read as an amount.
const NUMBER_TOKEN: &str = r"\d{1,3}(?:[.,]\d{3})+(?:[.,]\d{1,2})?|\d+[.,]\d+";

// ── Patterns ─────────────────────────────────────────────────────────────────

/// Keyword-anchored amount pattern: the label, a lazy same-line gap (so
/// digit-bearing noise like `(10%)` is skipped), an optional `:`/`$`, then
/// the first money token.
fn amount_pattern(keywords: &str) -> String {
    format!(r"(?i)\b(?:{keywords})\b[^\n]*?[:$]?\s*({NUMBER_TOKEN})")
}

re!(re_tax, &amount_pattern(TAX_KEYWORDS));
re!(re_subtotal, &amount_pattern(SUBTOTAL_KEYWORDS));
re!(re_total, &amount_pattern(TOTAL_KEYWORDS));

re!(re_money_token, &format!(r"\b(?:{NUMBER_TOKEN})\b"));

re!(re_address_prefix, r"(?i)^(?:av|avda|ave|blvd|calle|cl|cra|c/)[\s.:]");

re!(re_invoice_number,
    r"(?i:\b(?:invoice|factura|ticket|folio|receipt|number)\b)\s*[:#.]?\s*([A-Z0-9][A-Z0-9-]*)");

// ── Vendor ───────────────────────────────────────────────────────────────────

/// First normalized line that looks like a business name: free of
/// boilerplate keywords, not an address, and short enough to be a header
/// rather than a description. Vendor names usually sit above the fiscal
/// metadata in receipt layouts.
pub fn extract_vendor(text: &str) -> Option<String> {
    normalize_lines(text)
        .into_iter()
        .find(|line| {
            let upper = line.to_uppercase();
            !VENDOR_EXCLUSIONS.iter().any(|word| upper.contains(word))
                && !re_address_prefix().is_match(line)
                && line.chars().count() < 50
        })
        .map(str::to_string)
}

// ── Invoice number ───────────────────────────────────────────────────────────

/// Label alias followed by an optional separator and an uppercase
/// letter/digit/hyphen token. The token class is case-sensitive — OCR'd
/// identifiers are uppercase.
pub fn extract_invoice_number(text: &str) -> Option<String> {
    re_invoice_number()
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

// ── Keyword-anchored amounts ─────────────────────────────────────────────────

fn keyword_amount(re: &Regex, text: &str) -> Option<Decimal> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| parse_price(m.as_str()))
}

pub fn extract_tax(text: &str) -> Option<Decimal> {
    keyword_amount(re_tax(), text)
}

pub fn extract_subtotal(text: &str) -> Option<Decimal> {
    keyword_amount(re_subtotal(), text)
}

pub fn extract_total(text: &str) -> Option<Decimal> {
    keyword_amount(re_total(), text)
}

// ── Fallback total ───────────────────────────────────────────────────────────

/// When no total keyword matched anywhere: normalize every money-looking
/// token in the text and take the largest positive value. On receipts where
/// "total" is missing or OCR-garbled, the biggest figure on the page is
/// usually the grand total. A guess, not a guarantee.
pub fn resolve_fallback_total(text: &str) -> Option<Decimal> {
    re_money_token()
        .find_iter(text)
        .filter_map(|m| parse_price(m.as_str()))
        .filter(|v| *v > Decimal::ZERO)
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ── Vendor ───────────────────────────────────────────────────────────────

    #[test]
    fn vendor_is_first_qualifying_line() {
        let text = "SUPERMARKET ABC\n123 Main Street\nInvoice #123";
        assert_eq!(extract_vendor(text).as_deref(), Some("SUPERMARKET ABC"));
    }

    #[test]
    fn vendor_skips_boilerplate_lines() {
        let text = "FACTURA ORIGINAL\nLA BODEGA CENTRAL\nRUC 8-123-456";
        assert_eq!(extract_vendor(text).as_deref(), Some("LA BODEGA CENTRAL"));
    }

    #[test]
    fn vendor_skips_address_prefix_lines() {
        let text = "AV. Central 123\nCALLE 50\nMERCADO DON JULIO";
        assert_eq!(extract_vendor(text).as_deref(), Some("MERCADO DON JULIO"));
    }

    #[test]
    fn vendor_rejects_long_descriptive_lines() {
        let long = "a store with an extremely long descriptive header line that keeps going";
        let text = format!("{long}\nCORNER SHOP");
        assert_eq!(extract_vendor(&text).as_deref(), Some("CORNER SHOP"));
    }

    #[test]
    fn vendor_absent_when_nothing_qualifies() {
        assert_eq!(extract_vendor("FACTURA\nORIGINAL COPIA"), None);
        assert_eq!(extract_vendor(""), None);
    }

    // ── Invoice number ───────────────────────────────────────────────────────

    #[test]
    fn invoice_number_after_hash_separator() {
        let text = "Invoice #INV-2024-001";
        assert_eq!(extract_invoice_number(text).as_deref(), Some("INV-2024-001"));
    }

    #[test]
    fn invoice_number_spanish_alias() {
        let text = "Factura: A-000123";
        assert_eq!(extract_invoice_number(text).as_deref(), Some("A-000123"));
    }

    #[test]
    fn invoice_number_absent_without_label() {
        assert_eq!(extract_invoice_number("just some text 12345"), None);
    }

    // ── Keyword-anchored amounts ─────────────────────────────────────────────

    #[test]
    fn tax_amount_skips_percentage_noise() {
        assert_eq!(extract_tax("Tax (10%): $8.00"), Some(dec("8.00")));
    }

    #[test]
    fn tax_spanish_aliases() {
        assert_eq!(extract_tax("IVA 7%: 1,05"), Some(dec("1.05")));
        assert_eq!(extract_tax("ITBMS B/. 0,70"), Some(dec("0.70")));
    }

    #[test]
    fn subtotal_does_not_shadow_total() {
        let text = "Subtotal: $80.00\nTOTAL: $88.00";
        assert_eq!(extract_subtotal(text), Some(dec("80.00")));
        assert_eq!(extract_total(text), Some(dec("88.00")));
    }

    #[test]
    fn total_with_latin_grouping() {
        assert_eq!(extract_total("TOTAL A PAGAR 1.234,56"), Some(dec("1234.56")));
    }

    #[test]
    fn amounts_absent_without_keywords() {
        assert_eq!(extract_tax("nothing here 5.00"), None);
        assert_eq!(extract_subtotal("nothing here 5.00"), None);
        assert_eq!(extract_total("nothing here 5.00"), None);
    }

    // ── Fallback total ───────────────────────────────────────────────────────

    #[test]
    fn fallback_picks_largest_positive_amount() {
        let text = "Item 1 $50.00\nItem 2 $30.00\n$88.00";
        assert_eq!(resolve_fallback_total(text), Some(dec("88.00")));
    }

    #[test]
    fn fallback_ignores_bare_integers() {
        // Street numbers and dates have no separators, so they never win.
        let text = "123 Main Street\nref 2024\ncharge 12,50";
        assert_eq!(resolve_fallback_total(text), Some(dec("12.50")));
    }

    #[test]
    fn fallback_absent_when_no_money_tokens() {
        assert_eq!(resolve_fallback_total("no prices here"), None);
        assert_eq!(resolve_fallback_total(""), None);
    }
}
