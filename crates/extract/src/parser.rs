use recibo_core::ReceiptData;
use tracing::debug;

use crate::date::extract_date;
use crate::extract::{
    extract_invoice_number, extract_subtotal, extract_tax, extract_total, extract_vendor,
    resolve_fallback_total,
};

/// Stateless orchestrator over the field extractors. One public operation:
/// raw OCR text in, best-effort record out.
pub struct ReceiptParser;

impl ReceiptParser {
    /// Parse one OCR text blob into a [`ReceiptData`] record.
    ///
    /// Never fails: each extractor degrades to an absent field instead of
    /// raising an error, and absent fields must not be escalated by callers.
    /// The extractors run independently; only the fallback total depends on
    /// the keyword-anchored total finding nothing. Deterministic — the same
    /// text always yields the same record.
    pub fn parse(raw_text: &str) -> ReceiptData {
        let mut receipt = ReceiptData::new(raw_text);

        receipt.vendor_name = extract_vendor(raw_text);
        receipt.date = extract_date(raw_text);
        receipt.invoice_number = extract_invoice_number(raw_text);
        receipt.subtotal_amount = extract_subtotal(raw_text);
        receipt.tax_amount = extract_tax(raw_text);

        receipt.amount = extract_total(raw_text);
        if receipt.amount.is_none() {
            receipt.amount = resolve_fallback_total(raw_text);
            if receipt.amount.is_some() {
                debug!("no total keyword found, used largest-amount fallback");
            }
        }

        debug!(
            vendor = receipt.vendor_name.is_some(),
            date = receipt.date.is_some(),
            invoice = receipt.invoice_number.is_some(),
            subtotal = receipt.subtotal_amount.is_some(),
            tax = receipt.tax_amount.is_some(),
            total = receipt.amount.is_some(),
            "receipt parsed"
        );

        receipt
    }
}
