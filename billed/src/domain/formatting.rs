//! Display formatting for bill dates and statuses.
//!
//! Dates arrive from the gateway as `YYYY-MM-DD` strings or ISO timestamps
//! and are shown as `4 Avr. 04`: day without padding, a three-letter French month, and the
//! last two digits of the year.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use super::bill::BillStatus;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Raised when a bill date is neither a calendar date nor an ISO timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid bill date {input:?}")]
pub struct DateFormatError {
    input: String,
}

impl DateFormatError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        self.input.as_str()
    }
}

/// Parse a gateway date string down to its calendar date.
///
/// Accepts RFC 3339 timestamps (the offset is ignored), naive timestamps, and
/// plain `YYYY-MM-DD` dates.
pub fn parse_bill_date(raw: &str) -> Result<NaiveDate, DateFormatError> {
    let trimmed = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.date_naive());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|timestamp| timestamp.date())
        .or_else(|| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok())
        .ok_or_else(|| DateFormatError {
            input: raw.to_owned(),
        })
}

/// Format a gateway date for the bills table.
///
/// # Examples
/// ```
/// use billed::domain::format_date;
///
/// assert_eq!(format_date("2004-04-04").as_deref(), Ok("4 Avr. 04"));
/// assert!(format_date("not a date").is_err());
/// ```
pub fn format_date(raw: &str) -> Result<String, DateFormatError> {
    let date = parse_bill_date(raw)?;
    let month = usize::try_from(date.month0())
        .ok()
        .and_then(|index| MONTH_ABBREVIATIONS.get(index))
        .ok_or_else(|| DateFormatError {
            input: raw.to_owned(),
        })?;
    Ok(format!(
        "{day} {month}. {year:02}",
        day = date.day(),
        year = date.year().rem_euclid(100),
    ))
}

/// Human-readable label for a bill status.
pub fn format_status(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => "En attente",
        BillStatus::Accepted => "Accepté",
        BillStatus::Refused => "Refused",
    }
}
