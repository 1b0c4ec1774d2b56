use proptest::prelude::*;

use chrono::{TimeZone, Utc};
use docverify_types::{DocumentType, ExtractedData, VerificationResult};

proptest! {
    /// Any string outside the recognized set is preserved as `Other`.
    #[test]
    fn unrecognized_names_are_preserved(name in "[a-z_]{1,20}") {
        prop_assume!(!["passport", "national_id", "drivers_license"].contains(&name.as_str()));
        let t = DocumentType::from(name.clone());
        prop_assert!(!t.is_recognized());
        prop_assert_eq!(String::from(t), name);
    }

    /// `is_valid` is exactly `confidence >= 60 && issues.is_empty()`.
    #[test]
    fn validity_matches_threshold_rule(confidence in 0u8..=100, issue_count in 0usize..3) {
        let issues: Vec<String> = (0..issue_count).map(|i| format!("issue {i}")).collect();
        let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let r = VerificationResult::new(confidence, ExtractedData::default(), issues, at);
        prop_assert_eq!(r.is_valid, confidence >= 60 && issue_count == 0);
    }
}
