//! The JSON envelope returned to clients.

use docverify_verification::ErrorDomain;
use serde::Serialize;

use crate::EngineError;

/// `{success: true, data}` on success, `{success: false, error}` on failure.
///
/// A negative verification verdict is still a success: only operational
/// failures produce the error form. Outbound only; the failure domain behind
/// [`ApiResponse::status_code`] is not part of the wire form.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip)]
    domain: Option<ErrorDomain>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            domain: None,
        }
    }

    pub fn err(error: &EngineError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
            domain: Some(error.domain()),
        }
    }

    /// HTTP status a handler should answer with.
    pub fn status_code(&self) -> u16 {
        match (self.success, self.domain) {
            (true, _) => 200,
            (false, Some(ErrorDomain::Request)) => 400,
            (false, _) => 500,
        }
    }
}

impl<T> From<Result<T, EngineError>> for ApiResponse<T> {
    fn from(result: Result<T, EngineError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::err(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docverify_verification::VerificationError;

    #[test]
    fn success_envelope_omits_error() {
        let resp = ApiResponse::ok(42u32);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "data": 42 }));
        assert_eq!(resp.status_code(), 200);
    }

    #[test]
    fn invalid_request_maps_to_400() {
        let resp: ApiResponse<()> = ApiResponse::err(&EngineError::InvalidRequest("bad".into()));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "error": "invalid request: bad" })
        );
        assert_eq!(resp.status_code(), 400);
    }

    #[test]
    fn verification_failure_maps_to_500() {
        let err = EngineError::from(VerificationError::DocumentVerification("boom".into()));
        let resp: ApiResponse<()> = Err(err).into();
        assert_eq!(
            resp.error.as_deref(),
            Some("Document verification failed: boom")
        );
        assert_eq!(resp.status_code(), 500);
    }
}
