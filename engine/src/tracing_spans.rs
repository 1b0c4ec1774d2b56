//! Pre-built [`tracing::Span`] constructors for engine operations.

use tracing::{info_span, Span};

/// Span covering a single document verification.
pub fn verify_span(customer_id: &str, document_type: &str) -> Span {
    info_span!("verify_document", customer = %customer_id, document_type = %document_type)
}

/// Span covering one OCR extraction.
pub fn ocr_span(bytes: usize) -> Span {
    info_span!("ocr", bytes = bytes)
}
