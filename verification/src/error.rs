use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which part of the system an error originated in.
///
/// Lets callers branch on the failure family without matching every variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorDomain {
    /// Identity and document checks.
    Kyc,
    /// Malformed or missing configuration.
    Config,
    /// The caller sent something that could not be parsed.
    Request,
}

/// Operational failures of the verifier.
///
/// Policy outcomes such as mismatches or expiry are never errors; they are
/// reported through [`VerificationResult::issues`](docverify_types::VerificationResult).
#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("Document verification failed: {0}")]
    DocumentVerification(String),

    #[error("OCR failed: {0}")]
    Ocr(String),
}

impl VerificationError {
    pub fn domain(&self) -> ErrorDomain {
        ErrorDomain::Kyc
    }
}
