//! OCR backends for reading fields off a document image.
//!
//! [`SimulatedOcr`] returns a fixed payload after a nominal delay. It stands
//! in for a hosted OCR service behind the same [`OcrProvider`] signature.

use crate::error::VerificationError;
use async_trait::async_trait;
use docverify_types::ExtractedData;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Default latency of [`SimulatedOcr`].
pub const DEFAULT_OCR_LATENCY: Duration = Duration::from_millis(100);

/// Text and fields recovered from a document image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrOutput {
    /// Raw recognized text.
    pub text: String,
    /// Recognition confidence in `[0.0, 1.0]`.
    pub confidence: f64,
    pub fields: ExtractedData,
}

/// A pluggable OCR backend.
#[async_trait]
pub trait OcrProvider: Send + Sync {
    /// Human-readable name of this backend.
    fn name(&self) -> &str;

    async fn extract(&self, image: &[u8]) -> Result<OcrOutput, VerificationError>;
}

#[async_trait]
impl<T: OcrProvider + ?Sized> OcrProvider for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn extract(&self, image: &[u8]) -> Result<OcrOutput, VerificationError> {
        (**self).extract(image).await
    }
}

/// Simulated OCR: ignores the image and returns a canned extraction.
#[derive(Clone, Debug)]
pub struct SimulatedOcr {
    latency: Duration,
}

impl SimulatedOcr {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// The canned payload every call resolves to.
    pub fn payload() -> OcrOutput {
        OcrOutput {
            text: "SIMULATED OCR DATA".to_string(),
            confidence: 0.95,
            fields: ExtractedData {
                document_number: Some("SIM123456".to_string()),
                full_name: Some("JOHN DOE".to_string()),
                date_of_birth: Some("1990-01-01".to_string()),
                nationality: None,
                expiry_date: Some("2030-01-01".to_string()),
            },
        }
    }
}

impl Default for SimulatedOcr {
    fn default() -> Self {
        Self::new(DEFAULT_OCR_LATENCY)
    }
}

#[async_trait]
impl OcrProvider for SimulatedOcr {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn extract(&self, image: &[u8]) -> Result<OcrOutput, VerificationError> {
        tracing::debug!(
            bytes = image.len(),
            latency_ms = self.latency.as_millis() as u64,
            "simulated OCR"
        );
        tokio::time::sleep(self.latency).await;
        Ok(Self::payload())
    }
}
