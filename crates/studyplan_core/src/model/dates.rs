//! Date parsing and day arithmetic for due dates and exam times.
//!
//! All comparisons happen in local wall-clock time. RFC 3339 instants are
//! converted to local time on parse; naive values are taken as local already.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";
const LOCAL_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];
const DISPLAY_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses a `YYYY-MM-DD` due date.
pub fn parse_due_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DUE_DATE_FORMAT).ok()
}

/// Parses an exam date-time into local wall-clock time.
pub fn parse_exam_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.with_timezone(&Local).naive_local());
    }
    LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
}

/// Current local wall-clock time.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Current instant as a UTC RFC 3339 string with millisecond precision.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn format_datetime(value: NaiveDateTime) -> String {
    value.format(DISPLAY_DATETIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::{format_datetime, parse_due_date, parse_exam_datetime, utc_timestamp};
    use chrono::NaiveDate;

    #[test]
    fn due_date_requires_calendar_date() {
        assert_eq!(
            parse_due_date("2026-02-28"),
            NaiveDate::from_ymd_opt(2026, 2, 28)
        );
        assert_eq!(parse_due_date("2026-02-30"), None);
        assert_eq!(parse_due_date(""), None);
        assert_eq!(parse_due_date("tomorrow"), None);
    }

    #[test]
    fn exam_datetime_accepts_local_forms() {
        let full = parse_exam_datetime("2026-03-01T09:30:00").unwrap();
        let short = parse_exam_datetime("2026-03-01T09:30").unwrap();
        let fractional = parse_exam_datetime("2026-03-01T09:30:00.000").unwrap();
        assert_eq!(full, short);
        assert_eq!(full, fractional);
        assert_eq!(format_datetime(full), "2026-03-01 09:30");
    }

    #[test]
    fn exam_datetime_accepts_rfc3339_instants() {
        assert!(parse_exam_datetime("2026-03-01T09:30:00.000Z").is_some());
        assert!(parse_exam_datetime("2026-03-01T09:30:00+02:00").is_some());
        assert!(parse_exam_datetime("not a date").is_none());
        assert!(parse_exam_datetime("  ").is_none());
    }

    #[test]
    fn utc_timestamp_is_itself_a_valid_exam_datetime() {
        let stamp = utc_timestamp();
        assert!(stamp.ends_with('Z'));
        assert!(parse_exam_datetime(&stamp).is_some());
    }
}
