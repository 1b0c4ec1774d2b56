//! The compliance engine.

use docverify_types::{Customer, DocumentType, VerificationRequest, VerificationResult};
use docverify_verification::{DocumentVerifier, OcrOutput, SimulatedOcr};
use serde::{Deserialize, Serialize};
use tracing::Instrument;

use crate::tracing_spans::{ocr_span, verify_span};
use crate::{ApiResponse, EngineConfig, EngineError};

/// Body accepted by [`ComplianceEngine::submit_verification`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmissionBody {
    pub request: VerificationRequest,
    pub customer: Customer,
}

/// Entry point for document verification requests.
#[derive(Debug)]
pub struct ComplianceEngine {
    config: EngineConfig,
    verifier: DocumentVerifier,
}

impl ComplianceEngine {
    /// Create an engine with the default verifier, OCR latency taken from `config`.
    pub fn new(config: EngineConfig) -> Self {
        let verifier = DocumentVerifier::new().with_ocr(SimulatedOcr::new(config.ocr_latency()));
        Self::with_verifier(config, verifier)
    }

    /// Create an engine around a pre-built verifier.
    pub fn with_verifier(config: EngineConfig, verifier: DocumentVerifier) -> Self {
        tracing::info!(
            document_verification = config.document_verification_enabled,
            verifier = ?verifier,
            "compliance engine initialized"
        );
        Self { config, verifier }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Verify a document against the customer on file.
    pub fn verify_document(
        &self,
        request: &VerificationRequest,
        customer: &Customer,
    ) -> Result<VerificationResult, EngineError> {
        if !self.config.document_verification_enabled {
            tracing::warn!(
                customer = %request.customer_id,
                "document verification requested while disabled"
            );
            return Err(EngineError::DocumentVerificationDisabled);
        }

        let _span = verify_span(&request.customer_id, request.document_type.as_str()).entered();
        tracing::info!("verifying document");

        match self.verifier.verify_document(request, customer) {
            Ok(result) => {
                tracing::info!(
                    confidence = result.confidence,
                    valid = result.is_valid,
                    issues = result.issues.len(),
                    "document verification complete"
                );
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(error = %e, "document verification failed");
                Err(e.into())
            }
        }
    }

    /// Run OCR over a document image.
    pub async fn perform_ocr(&self, image: &[u8]) -> Result<OcrOutput, EngineError> {
        async {
            let output = self.verifier.perform_ocr(image).await?;
            tracing::debug!(confidence = output.confidence, "ocr complete");
            Ok::<_, EngineError>(output)
        }
        .instrument(ocr_span(image.len()))
        .await
    }

    pub fn validate_document_format(&self, document_type: &DocumentType, number: &str) -> bool {
        self.verifier.validate_document_format(document_type, number)
    }

    /// Handle a raw JSON `{request, customer}` body and wrap the outcome in
    /// the client envelope.
    pub fn submit_verification(&self, body: &str) -> ApiResponse<VerificationResult> {
        let result = serde_json::from_str::<SubmissionBody>(body)
            .map_err(EngineError::from)
            .and_then(|body| self.verify_document(&body.request, &body.customer));
        if let Err(EngineError::InvalidRequest(ref reason)) = result {
            tracing::warn!(%reason, "rejected verification submission");
        }
        result.into()
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
