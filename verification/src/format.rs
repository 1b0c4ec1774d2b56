//! Document number format rules.

use docverify_types::DocumentType;
use regex::Regex;
use std::sync::LazyLock;

static PASSPORT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z0-9]{6,9}$").unwrap());
static NATIONAL_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z0-9]{8,12}$").unwrap());
static DRIVERS_LICENSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{8,15}$").unwrap());

/// Whether `document_number` matches the pattern registered for `document_type`.
///
/// Always false for unrecognized document types.
pub fn validate_document_format(document_type: &DocumentType, document_number: &str) -> bool {
    let pattern = match document_type {
        DocumentType::Passport => &PASSPORT,
        DocumentType::NationalId => &NATIONAL_ID,
        DocumentType::DriversLicense => &DRIVERS_LICENSE,
        DocumentType::Other(_) => return false,
    };
    pattern.is_match(document_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passport_numbers() {
        let t = DocumentType::Passport;
        assert!(validate_document_format(&t, "AB123456"));
        assert!(validate_document_format(&t, "123456"));
        assert!(validate_document_format(&t, "ABCDEFGH9"));
        assert!(!validate_document_format(&t, "123"));
        assert!(!validate_document_format(&t, "ABCDEFGH90"));
        assert!(!validate_document_format(&t, "ab123456"));
        assert!(!validate_document_format(&t, "AB-12345"));
    }

    #[test]
    fn national_id_length_bounds() {
        let t = DocumentType::NationalId;
        assert!(!validate_document_format(&t, "1234567"));
        assert!(validate_document_format(&t, "12345678"));
        assert!(validate_document_format(&t, "ABCDEF123456"));
        assert!(!validate_document_format(&t, "ABCDEF1234567"));
    }

    #[test]
    fn drivers_license_length_bounds() {
        let t = DocumentType::DriversLicense;
        assert!(validate_document_format(&t, "D1234567"));
        assert!(validate_document_format(&t, "D12345678901234"));
        assert!(!validate_document_format(&t, "D123456789012345"));
    }

    #[test]
    fn unknown_type_never_validates() {
        let t = DocumentType::from("unknown_type");
        assert!(!validate_document_format(&t, "AB123456"));
    }

    #[test]
    fn trailing_newline_is_rejected() {
        assert!(!validate_document_format(&DocumentType::Passport, "AB123456\n"));
    }
}
