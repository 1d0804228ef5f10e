//! Heuristic field extraction from OCR'd receipt and invoice text.
//!
//! The input is whatever an upstream OCR step produced: inconsistent line
//! breaks, mixed languages, locale-ambiguous number formats, substitution
//! errors. Extraction is best-effort — every field degrades to "absent"
//! rather than failing the parse.

// ── Compiled regex cache ─────────────────────────────────────────────────────

macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static regex::Regex {
            static R: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
            R.get_or_init(|| regex::Regex::new($pat).expect("invalid regex"))
        }
    };
}

pub mod amount;
pub mod date;
pub mod extract;
pub mod lines;
pub mod parser;

pub use parser::ReceiptParser;
pub use recibo_core::ReceiptData;
