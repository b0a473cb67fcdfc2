//! Row parsing and timestamp helpers shared by the repos.
//!
//! Timestamps are written as RFC 3339 UTC with fixed microsecond precision
//! (`2026-02-09T14:30:00.000000Z`) so that lexical order in SQL matches
//! chronological order.

use chrono::{DateTime, NaiveDate, SecondsFormat, SubsecRound, Utc};
use lingo_core::pagination::PageRequest;

use crate::error::DatabaseError;

/// Current time truncated to the precision that is persisted.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Format a timestamp for storage.
#[must_use]
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 and `SQLite`'s default format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<DateTime<Utc>>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_datetime(s: Option<&str>) -> Result<Option<DateTime<Utc>>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_datetime(s)?)),
        _ => Ok(None),
    }
}

/// Parse the output of SQL `date(...)` (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string is not a calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
}

/// Validate listing arguments.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidArgument` when `page_size` is zero.
pub fn page_request(page: u32, page_size: u32) -> Result<PageRequest, DatabaseError> {
    PageRequest::new(page, page_size).ok_or_else(|| {
        DatabaseError::InvalidArgument(String::from("page_size must be at least 1"))
    })
}

/// Convert a SQL `COUNT(*)` into an unsigned total.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the store reports a negative count.
pub fn to_count(n: i64) -> Result<u64, DatabaseError> {
    u64::try_from(n).map_err(|_| DatabaseError::Query(format!("negative row count {n}")))
}

/// Run a single-row, single-column `COUNT` query.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails or yields no row.
pub async fn query_count(
    conn: &libsql::Connection,
    sql: &str,
    params: impl libsql::params::IntoParams,
) -> Result<u64, DatabaseError> {
    let mut rows = conn.query(sql, params).await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    to_count(row.get::<i64>(0)?)
}

/// Whether `SELECT EXISTS(...)` returned true.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails or yields no row.
pub async fn query_exists(
    conn: &libsql::Connection,
    sql: &str,
    params: impl libsql::params::IntoParams,
) -> Result<bool, DatabaseError> {
    let mut rows = conn.query(sql, params).await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<i64>(0)? != 0)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn timestamp_format_roundtrips() {
        let ts = now();
        let parsed = parse_datetime(&format_timestamp(&ts)).unwrap();
        assert_eq!(parsed, ts);
    }

    #[test]
    fn timestamp_format_is_fixed_width() {
        let whole = Utc.with_ymd_and_hms(2026, 2, 9, 14, 30, 0).unwrap();
        assert_eq!(format_timestamp(&whole), "2026-02-09T14:30:00.000000Z");
    }

    #[test]
    fn parses_sqlite_default_format() {
        let parsed = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 2, 9, 14, 30, 0).unwrap());
    }

    #[test]
    fn rejects_garbage_datetime() {
        assert!(matches!(
            parse_datetime("yesterday"),
            Err(DatabaseError::Query(_))
        ));
    }

    #[test]
    fn optional_datetime_treats_empty_as_none() {
        assert_eq!(parse_optional_datetime(None).unwrap(), None);
        assert_eq!(parse_optional_datetime(Some("")).unwrap(), None);
    }

    #[test]
    fn parses_sql_date() {
        assert_eq!(
            parse_date("2026-10-17").unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
        );
    }

    #[test]
    fn zero_page_size_is_invalid_argument() {
        assert!(matches!(
            page_request(1, 0),
            Err(DatabaseError::InvalidArgument(_))
        ));
        assert_eq!(page_request(2, 5).unwrap().offset(), 5);
    }
}
