//! Identity document verification.
//!
//! A [`DocumentVerifier`] runs a fixed sequence of independent checks over a
//! [`VerificationRequest`](docverify_types::VerificationRequest):
//! 1. **Type**: the document type must be recognized.
//! 2. **Presence**: an image or extracted fields must be supplied.
//! 3. **Cross-check**: name and date of birth must match the customer on file.
//! 4. **Expiry**: the document must not have expired.
//! 5. **Authenticity**: a pluggable heuristic must be confident the document is genuine.
//!
//! Each check may append an issue and deduct from a starting confidence of 100.
//! Checks accumulate rather than short-circuit.
//!
//! The authenticity heuristic, the clock, and the OCR backend are traits so
//! real services and deterministic test doubles can be swapped in.

pub mod authenticity;
pub mod clock;
pub mod error;
pub mod format;
pub mod ocr;
pub mod verifier;

pub use authenticity::{AuthenticityCheck, RandomAuthenticity, AUTHENTICITY_THRESHOLD};
pub use clock::{Clock, SystemClock};
pub use error::{ErrorDomain, VerificationError};
pub use format::validate_document_format;
pub use ocr::{OcrOutput, OcrProvider, SimulatedOcr};
pub use verifier::{DocumentVerifier, PLACEHOLDER_DOCUMENT_NUMBER};
