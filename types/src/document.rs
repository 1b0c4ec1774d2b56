//! Document types and the verification request shape.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of identity document being verified.
///
/// Unknown kinds are kept verbatim in [`DocumentType::Other`] so they can be
/// reported as a verification issue instead of failing deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DocumentType {
    Passport,
    NationalId,
    DriversLicense,
    /// Anything not in the recognized set.
    Other(String),
}

impl DocumentType {
    /// The recognized document types, in declaration order.
    pub const RECOGNIZED: [DocumentType; 3] = [
        DocumentType::Passport,
        DocumentType::NationalId,
        DocumentType::DriversLicense,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Passport => "passport",
            Self::NationalId => "national_id",
            Self::DriversLicense => "drivers_license",
            Self::Other(s) => s,
        }
    }

    /// Whether this is one of the document types the verifier accepts.
    pub fn is_recognized(&self) -> bool {
        Self::RECOGNIZED.contains(self)
    }
}

impl DocumentType {
    fn recognized(name: &str) -> Option<Self> {
        Self::RECOGNIZED.into_iter().find(|t| t.as_str() == name)
    }
}

impl From<&str> for DocumentType {
    fn from(s: &str) -> Self {
        Self::recognized(s).unwrap_or_else(|| Self::Other(s.to_string()))
    }
}

impl From<String> for DocumentType {
    fn from(s: String) -> Self {
        Self::recognized(&s).unwrap_or(Self::Other(s))
    }
}

impl From<DocumentType> for String {
    fn from(t: DocumentType) -> Self {
        match t {
            DocumentType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields a caller has already read off the document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

/// A request to verify one identity document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    /// Customer the document belongs to. Only used for log correlation.
    #[serde(default)]
    pub customer_id: String,
    pub document_type: DocumentType,
    /// Raw image bytes, if the caller uploaded a scan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_image: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_data: Option<DocumentData>,
}

impl VerificationRequest {
    pub fn new(document_type: impl Into<DocumentType>) -> Self {
        Self {
            customer_id: String::new(),
            document_type: document_type.into(),
            document_image: None,
            document_data: None,
        }
    }

    pub fn with_customer_id(mut self, id: impl Into<String>) -> Self {
        self.customer_id = id.into();
        self
    }

    pub fn with_image(mut self, image: Vec<u8>) -> Self {
        self.document_image = Some(image);
        self
    }

    pub fn with_data(mut self, data: DocumentData) -> Self {
        self.document_data = Some(data);
        self
    }

    /// Whether the request carries anything at all to verify.
    pub fn has_document(&self) -> bool {
        self.document_image.is_some() || self.document_data.is_some()
    }
}
