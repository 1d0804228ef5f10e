use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The best-effort structured record extracted from one OCR text blob.
///
/// Every field except `raw_text` is optional: `None` means "not confidently
/// found", never zero. No cross-field consistency is enforced — `amount`
/// need not equal `subtotal_amount + tax_amount`, because the extractors run
/// independently over noisy text. Identity, timestamps, and storage belong
/// to whoever persists the record, not to this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptData {
    /// The input text, verbatim.
    pub raw_text: String,
    pub vendor_name: Option<String>,
    /// Extracted date as it appeared in the text — not canonicalized.
    pub date: Option<String>,
    pub invoice_number: Option<String>,
    /// Grand total.
    pub amount: Option<Decimal>,
    pub subtotal_amount: Option<Decimal>,
    pub tax_amount: Option<Decimal>,
}

impl ReceiptData {
    /// An empty record carrying only the verbatim input.
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            vendor_name: None,
            date: None,
            invoice_number: None,
            amount: None,
            subtotal_amount: None,
            tax_amount: None,
        }
    }

    /// Whether any field beyond the raw text was extracted.
    pub fn has_fields(&self) -> bool {
        self.vendor_name.is_some()
            || self.date.is_some()
            || self.invoice_number.is_some()
            || self.amount.is_some()
            || self.subtotal_amount.is_some()
            || self.tax_amount.is_some()
    }
}
