//! The verdict produced for a single verification call.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Minimum confidence for a document to be considered valid.
pub const VALIDITY_THRESHOLD: u8 = 60;

/// Identity fields pulled off the document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

impl ExtractedData {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Outcome of verifying one document.
///
/// Policy failures (mismatches, expiry, low authenticity) are reported here
/// through `issues` and `confidence`, never as errors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub is_valid: bool,
    /// Certainty score in `[0, 100]`.
    pub confidence: u8,
    pub extracted_data: ExtractedData,
    /// Every detected problem, in check order.
    pub issues: Vec<String>,
    /// Written as ISO-8601 with millisecond precision, e.g. `2026-03-01T12:00:00.000Z`.
    #[serde(serialize_with = "serialize_iso_millis")]
    pub verified_at: DateTime<Utc>,
}

fn serialize_iso_millis<S: Serializer>(
    at: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&iso_millis(at))
}

fn iso_millis(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl VerificationResult {
    /// Build a result, deriving `is_valid` from the confidence and issue list.
    pub fn new(
        confidence: u8,
        extracted_data: ExtractedData,
        issues: Vec<String>,
        verified_at: DateTime<Utc>,
    ) -> Self {
        let confidence = confidence.min(100);
        Self {
            is_valid: confidence >= VALIDITY_THRESHOLD && issues.is_empty(),
            confidence,
            extracted_data,
            issues,
            verified_at,
        }
    }

    /// `verified_at` as an ISO-8601 string with millisecond precision.
    pub fn verified_at_iso(&self) -> String {
        iso_millis(&self.verified_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn valid_requires_threshold_and_no_issues() {
        let ok = VerificationResult::new(95, ExtractedData::default(), vec![], at());
        assert!(ok.is_valid);

        let low = VerificationResult::new(59, ExtractedData::default(), vec![], at());
        assert!(!low.is_valid);

        let edge = VerificationResult::new(60, ExtractedData::default(), vec![], at());
        assert!(edge.is_valid);
    }

    #[test]
    fn any_issue_invalidates_regardless_of_confidence() {
        let r = VerificationResult::new(
            90,
            ExtractedData::default(),
            vec!["Date of birth mismatch".into()],
            at(),
        );
        assert!(!r.is_valid);
        assert_eq!(r.confidence, 90);
    }

    #[test]
    fn confidence_is_capped_at_100() {
        let r = VerificationResult::new(250, ExtractedData::default(), vec![], at());
        assert_eq!(r.confidence, 100);
    }

    #[test]
    fn serializes_camel_case_and_omits_missing_fields() {
        let data = ExtractedData {
            full_name: Some("Jane Roe".into()),
            ..Default::default()
        };
        let r = VerificationResult::new(100, data, vec![], at());
        let json = serde_json::to_value(&r).expect("serialize");
        assert_eq!(json["isValid"], true);
        assert_eq!(json["extractedData"]["fullName"], "Jane Roe");
        assert!(json["extractedData"].get("documentNumber").is_none());
        assert_eq!(r.verified_at_iso(), "2026-03-01T12:00:00.000Z");
        assert_eq!(json["verifiedAt"], "2026-03-01T12:00:00.000Z");
    }

    #[test]
    fn verified_at_is_written_with_millisecond_precision() {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
            + chrono::Duration::nanoseconds(123_456_789);
        let r = VerificationResult::new(100, ExtractedData::default(), vec![], at);
        let json = serde_json::to_value(&r).expect("serialize");
        assert_eq!(json["verifiedAt"], "2026-03-01T12:00:00.123Z");

        let back: VerificationResult = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back.verified_at, at - chrono::Duration::nanoseconds(456_789));
    }
}
