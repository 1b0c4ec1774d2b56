//! Date parsing for dates printed on identity documents.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Datetime layouts carrying an explicit offset (Postgres style).
const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f %#z",
];

/// Datetime layouts without an offset; taken as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
];

/// Date-only layouts; taken as midnight UTC.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%d %B %Y"];

/// Parse a document date into a UTC instant.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DD HH:MM:SS` with or without an
/// offset, naive datetimes (taken as UTC), and the common date-only forms
/// `YYYY-MM-DD`, `YYYY/MM/DD`, `MM/DD/YYYY`, `January 1, 2000` and
/// `1 January 2000` (midnight UTC).
pub fn parse_document_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = OFFSET_DATETIME_FORMATS
        .iter()
        .find_map(|f| DateTime::parse_from_str(raw, f).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(naive) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
    {
        return Some(naive.and_utc());
    }
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(raw, f).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn bare_date_is_midnight_utc() {
        assert_eq!(
            parse_document_date("2030-01-01"),
            Some(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn rfc3339_offset_is_normalized() {
        assert_eq!(
            parse_document_date("2030-01-01T02:00:00+02:00"),
            Some(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn naive_datetime_is_utc() {
        assert_eq!(
            parse_document_date("2030-06-15T08:30:00"),
            Some(Utc.with_ymd_and_hms(2030, 6, 15, 8, 30, 0).unwrap())
        );
    }

    #[test]
    fn space_separated_datetime_is_accepted() {
        let expected = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_document_date("2000-01-01 00:00:00"), Some(expected));
        assert_eq!(
            parse_document_date("2000-01-01 00:00:00.250"),
            Some(expected + chrono::Duration::milliseconds(250))
        );
        assert_eq!(parse_document_date("2000-01-01 02:00:00+02"), Some(expected));
        assert_eq!(parse_document_date("2000-01-01 02:00:00+02:00"), Some(expected));
        assert_eq!(parse_document_date("2000-01-01 02:00:00 +0200"), Some(expected));
    }

    #[test]
    fn slash_dates_are_accepted() {
        assert_eq!(
            parse_document_date("2000/01/01"),
            Some(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(
            parse_document_date("01/15/2000"),
            Some(Utc.with_ymd_and_hms(2000, 1, 15, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn month_name_dates_are_accepted() {
        let expected = Some(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(parse_document_date("January 1, 2000"), expected);
        assert_eq!(parse_document_date("Jan 1, 2000"), expected);
        assert_eq!(parse_document_date("1 January 2000"), expected);
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(parse_document_date("next tuesday"), None);
        assert_eq!(parse_document_date("2030-13-45"), None);
        assert_eq!(parse_document_date(""), None);
        assert_eq!(parse_document_date("15/01/2000"), None);
        assert_eq!(parse_document_date("2000-01-01 25:00:00"), None);
    }
}
