//! The document verifier: runs every check and folds them into a verdict.

use crate::authenticity::{
    authenticity_deduction, AuthenticityCheck, RandomAuthenticity, AUTHENTICITY_THRESHOLD,
};
use crate::clock::{Clock, SystemClock};
use crate::error::VerificationError;
use crate::format;
use crate::ocr::{OcrOutput, OcrProvider, SimulatedOcr};
use docverify_types::{
    Customer, DocumentData, DocumentType, ExtractedData, VerificationRequest, VerificationResult,
};
use docverify_utils::parse_document_date;
use std::fmt;
use thiserror::Error;

/// Document number reported when the request does not carry one.
pub const PLACEHOLDER_DOCUMENT_NUMBER: &str = "SIMULATED123456";

const INITIAL_CONFIDENCE: i32 = 100;
const INVALID_TYPE_PENALTY: u32 = 50;
const NO_DOCUMENT_PENALTY: u32 = 60;
const NAME_MISMATCH_PENALTY: u32 = 30;
const DOB_MISMATCH_PENALTY: u32 = 40;
const EXPIRED_PENALTY: u32 = 50;

/// A problem found by one of the checks.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Issue {
    InvalidDocumentType(DocumentType),
    NoDocumentData,
    NameMismatch,
    DateOfBirthMismatch,
    Expired,
    AuthenticityUnverified,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDocumentType(t) => write!(f, "Invalid document type: {t}"),
            Self::NoDocumentData => f.write_str("No document data provided"),
            Self::NameMismatch => {
                f.write_str("Name mismatch between document and customer profile")
            }
            Self::DateOfBirthMismatch => f.write_str("Date of birth mismatch"),
            Self::Expired => f.write_str("Document has expired"),
            Self::AuthenticityUnverified => {
                f.write_str("Document authenticity could not be verified")
            }
        }
    }
}

/// Failures inside a check that are not policy outcomes.
#[derive(Debug, Error)]
enum CheckError {
    #[error("unparsable expiry date '{0}'")]
    InvalidExpiryDate(String),

    #[error("authenticity heuristic '{0}' returned NaN")]
    AuthenticityNaN(String),
}

/// Running confidence and issue list for one verification.
struct Tally {
    deducted: u32,
    issues: Vec<String>,
}

impl Tally {
    fn new() -> Self {
        Self {
            deducted: 0,
            issues: Vec::new(),
        }
    }

    fn flag(&mut self, issue: Issue, penalty: u32) {
        tracing::debug!(%issue, penalty, "verification check flagged");
        self.deducted = self.deducted.saturating_add(penalty);
        self.issues.push(issue.to_string());
    }

    fn confidence(&self) -> u8 {
        (INITIAL_CONFIDENCE - self.deducted.min(INITIAL_CONFIDENCE as u32) as i32) as u8
    }
}

/// Verifies identity documents against a customer profile.
///
/// Stateless between calls: every invocation reads the clock once, calls the
/// authenticity heuristic once, and returns a fresh result.
pub struct DocumentVerifier {
    authenticity: Box<dyn AuthenticityCheck>,
    clock: Box<dyn Clock>,
    ocr: Box<dyn OcrProvider>,
}

impl DocumentVerifier {
    /// A verifier with the random authenticity heuristic, the system clock,
    /// and simulated OCR.
    pub fn new() -> Self {
        Self {
            authenticity: Box::new(RandomAuthenticity),
            clock: Box::new(SystemClock),
            ocr: Box::new(SimulatedOcr::default()),
        }
    }

    pub fn with_authenticity(mut self, authenticity: impl AuthenticityCheck + 'static) -> Self {
        self.authenticity = Box::new(authenticity);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_ocr(mut self, ocr: impl OcrProvider + 'static) -> Self {
        self.ocr = Box::new(ocr);
        self
    }

    /// Verify a document against the customer on file.
    ///
    /// Every policy failure lands in the result. The only error is
    /// [`VerificationError::DocumentVerification`], raised when a check
    /// cannot run at all (for example an unparsable expiry date).
    pub fn verify_document(
        &self,
        request: &VerificationRequest,
        customer: &Customer,
    ) -> Result<VerificationResult, VerificationError> {
        self.run_checks(request, customer)
            .map_err(|e| VerificationError::DocumentVerification(e.to_string()))
    }

    /// Run the configured OCR backend over a document image.
    pub async fn perform_ocr(&self, image: &[u8]) -> Result<OcrOutput, VerificationError> {
        self.ocr.extract(image).await
    }

    /// Whether `document_number` has the expected shape for `document_type`.
    pub fn validate_document_format(
        &self,
        document_type: &DocumentType,
        document_number: &str,
    ) -> bool {
        format::validate_document_format(document_type, document_number)
    }

    fn run_checks(
        &self,
        request: &VerificationRequest,
        customer: &Customer,
    ) -> Result<VerificationResult, CheckError> {
        let now = self.clock.now();
        let mut tally = Tally::new();

        if !request.document_type.is_recognized() {
            tally.flag(
                Issue::InvalidDocumentType(request.document_type.clone()),
                INVALID_TYPE_PENALTY,
            );
        }

        if !request.has_document() {
            tally.flag(Issue::NoDocumentData, NO_DOCUMENT_PENALTY);
        }

        let extracted = request
            .document_data
            .as_ref()
            .map(|data| extract_fields(data, customer))
            .unwrap_or_default();

        if let Some(name) = present(&extracted.full_name) {
            if name.to_lowercase() != customer.name.to_lowercase() {
                tally.flag(Issue::NameMismatch, NAME_MISMATCH_PENALTY);
            }
        }

        if let (Some(on_document), Some(on_file)) = (
            present(&extracted.date_of_birth),
            present(&customer.date_of_birth),
        ) {
            if on_document != on_file {
                tally.flag(Issue::DateOfBirthMismatch, DOB_MISMATCH_PENALTY);
            }
        }

        if let Some(raw) = present(&extracted.expiry_date) {
            let expiry = parse_document_date(raw)
                .ok_or_else(|| CheckError::InvalidExpiryDate(raw.to_string()))?;
            if expiry < now {
                tally.flag(Issue::Expired, EXPIRED_PENALTY);
            }
        }

        let score = self.authenticity.score(request);
        if score.is_nan() {
            return Err(CheckError::AuthenticityNaN(
                self.authenticity.name().to_string(),
            ));
        }
        let score = score.clamp(0.0, 1.0);
        if score < AUTHENTICITY_THRESHOLD {
            tally.flag(Issue::AuthenticityUnverified, authenticity_deduction(score));
        }

        Ok(VerificationResult::new(
            tally.confidence(),
            extracted,
            tally.issues,
            now,
        ))
    }
}

impl Default for DocumentVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DocumentVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentVerifier")
            .field("authenticity", &self.authenticity.name())
            .field("ocr", &self.ocr.name())
            .finish_non_exhaustive()
    }
}

/// Empty strings count as absent.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Build the extracted record, filling gaps from the customer profile.
fn extract_fields(data: &DocumentData, customer: &Customer) -> ExtractedData {
    ExtractedData {
        document_number: Some(
            present(&data.number)
                .unwrap_or(PLACEHOLDER_DOCUMENT_NUMBER)
                .to_string(),
        ),
        full_name: Some(
            present(&data.name)
                .unwrap_or(customer.name.as_str())
                .to_string(),
        ),
        date_of_birth: present(&data.date_of_birth)
            .or(customer.date_of_birth.as_deref())
            .map(str::to_string),
        nationality: present(&data.nationality)
            .or(customer.nationality.as_deref())
            .map(str::to_string),
        expiry_date: data.expiry_date.clone(),
    }
}
