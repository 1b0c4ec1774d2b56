use docverify_verification::{ErrorDomain, VerificationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("config error: {0}")]
    Config(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("document verification is disabled")]
    DocumentVerificationDisabled,

    #[error(transparent)]
    Verification(#[from] VerificationError),
}

impl EngineError {
    pub fn domain(&self) -> ErrorDomain {
        match self {
            Self::Config(_) => ErrorDomain::Config,
            Self::InvalidRequest(_) => ErrorDomain::Request,
            Self::DocumentVerificationDisabled => ErrorDomain::Kyc,
            Self::Verification(e) => e.domain(),
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::InvalidRequest(e.to_string())
    }
}
