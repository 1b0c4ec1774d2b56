//! Nullable OCR backend.

use async_trait::async_trait;
use docverify_verification::{OcrOutput, OcrProvider, VerificationError};
use std::sync::atomic::{AtomicUsize, Ordering};

/// An OCR backend that answers instantly with a fixed outcome.
pub struct NullOcr {
    outcome: Result<OcrOutput, String>,
    calls: AtomicUsize,
}

impl NullOcr {
    /// Always return `output`.
    pub fn returning(output: OcrOutput) -> Self {
        Self {
            outcome: Ok(output),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fail with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OcrProvider for NullOcr {
    fn name(&self) -> &str {
        "null-ocr"
    }

    async fn extract(&self, _image: &[u8]) -> Result<OcrOutput, VerificationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone().map_err(VerificationError::Ocr)
    }
}
