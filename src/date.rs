//! Permissive date parsing for temporal coverage values
//!
//! Portal users type dates in many shapes. Anything recognisable is
//! normalised to an ISO-8601 date-time; components that are missing are
//! taken from `0001-01-01T00:00:00`.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

// Numeric dates read month-first; day-first is the fallback when the
// first number cannot be a month.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m.%d.%Y %H:%M:%S",
    "%m.%d.%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m.%d.%Y",
    "%d.%m.%Y",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%Y/%m/%d",
    "%Y%m%d",
    "%d %B %Y",
    "%d. %B %Y",
    "%B %d %Y",
    "%B %d, %Y",
];

const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M"];

/// Date the parser falls back to for missing components
fn default_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Parse a free-form date and render it in ISO-8601 form
///
/// Returns `None` when the value is not recognisable as a date.
pub fn normalize_date(raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(isoformat_with_offset(&dt));
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M:%S%.f%z"] {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Some(isoformat_with_offset(&dt));
        }
    }

    parse_naive(value).map(|dt| isoformat(&dt))
}

fn parse_naive(value: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    if let Some(date) = parse_partial_date(value).or_else(|| parse_month_name(value)) {
        return date.and_hms_opt(0, 0, 0);
    }
    for format in TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(value, format) {
            return Some(default_date().and_time(time));
        }
    }
    None
}

/// `YYYY-MM`, `MM/YYYY` and bare `YYYY`
fn parse_partial_date(value: &str) -> Option<NaiveDate> {
    let is_year = |s: &str| s.len() == 4 && s.chars().all(|c| c.is_ascii_digit());
    let is_month = |s: &str| (1..=2).contains(&s.len()) && s.chars().all(|c| c.is_ascii_digit());

    if is_year(value) {
        return NaiveDate::from_ymd_opt(value.parse().ok()?, 1, 1);
    }
    let (year, month) = match value.split_once(['-', '/', '.']) {
        Some((y, m)) if is_year(y) && is_month(m) => (y, m),
        Some((m, y)) if is_month(m) && is_year(y) => (y, m),
        _ => return None,
    };
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// Month name and year, e.g. `March 2019` or `Mar 2019`
fn parse_month_name(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("1 {}", value), "%d %B %Y").ok()
}

/// ISO-8601 rendering with microseconds only when present
fn isoformat(dt: &NaiveDateTime) -> String {
    let mut out = dt.format("%Y-%m-%dT%H:%M:%S").to_string();
    let micros = dt.nanosecond() / 1_000;
    if micros != 0 {
        out.push_str(&format!(".{:06}", micros));
    }
    out
}

fn isoformat_with_offset(dt: &DateTime<FixedOffset>) -> String {
    format!("{}{}", isoformat(&dt.naive_local()), dt.format("%:z"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date() {
        assert_eq!(normalize_date("2019-03-01").as_deref(), Some("2019-03-01T00:00:00"));
    }

    #[test]
    fn test_dotted_date_month_first() {
        assert_eq!(normalize_date("01.03.2019").as_deref(), Some("2019-01-03T00:00:00"));
        assert_eq!(
            normalize_date("01.03.2019 14:30").as_deref(),
            Some("2019-01-03T14:30:00")
        );
        assert_eq!(normalize_date("03/01/2019").as_deref(), Some("2019-03-01T00:00:00"));
    }

    #[test]
    fn test_day_first_when_month_impossible() {
        assert_eq!(normalize_date("13.03.2019").as_deref(), Some("2019-03-13T00:00:00"));
        assert_eq!(normalize_date("25/12/2019").as_deref(), Some("2019-12-25T00:00:00"));
        assert_eq!(
            normalize_date("31.01.2020 08:15").as_deref(),
            Some("2020-01-31T08:15:00")
        );
    }

    #[test]
    fn test_month_names() {
        assert_eq!(normalize_date("March 2019").as_deref(), Some("2019-03-01T00:00:00"));
        assert_eq!(normalize_date("Mar 2019").as_deref(), Some("2019-03-01T00:00:00"));
        assert_eq!(normalize_date("5 March 2019").as_deref(), Some("2019-03-05T00:00:00"));
        assert_eq!(normalize_date("Mar 5 2019").as_deref(), Some("2019-03-05T00:00:00"));
    }

    #[test]
    fn test_naive_datetime() {
        assert_eq!(
            normalize_date("2019-03-01T12:05:09").as_deref(),
            Some("2019-03-01T12:05:09")
        );
        assert_eq!(
            normalize_date("2019-03-01 12:05:09.250000").as_deref(),
            Some("2019-03-01T12:05:09.250000")
        );
    }

    #[test]
    fn test_datetime_with_offset() {
        assert_eq!(
            normalize_date("2019-03-01T12:00:00+01:00").as_deref(),
            Some("2019-03-01T12:00:00+01:00")
        );
        assert_eq!(
            normalize_date("2019-03-01T12:00:00Z").as_deref(),
            Some("2019-03-01T12:00:00+00:00")
        );
    }

    #[test]
    fn test_partial_dates_fill_defaults() {
        assert_eq!(normalize_date("2019").as_deref(), Some("2019-01-01T00:00:00"));
        assert_eq!(normalize_date("2019-07").as_deref(), Some("2019-07-01T00:00:00"));
        assert_eq!(normalize_date("10:30").as_deref(), Some("0001-01-01T10:30:00"));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(normalize_date("seit Beginn der Aufzeichnungen"), None);
        assert_eq!(normalize_date(""), None);
        assert_eq!(normalize_date("2019-13-45"), None);
    }
}
