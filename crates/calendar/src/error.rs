//! Error types for the sambat-calendar crate.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::date::CalendarType;

/// Error type for all fallible operations in the sambat-calendar crate.
///
/// Lenient conversions report unsupported dates as `None`; only the
/// checked conversions and table construction return these errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a 1-indexed table month key is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned by checked conversions when the day exceeds the month length.
    #[error("invalid day: {day} for {calendar} {year}-{month:02} (max {max_day})")]
    DayOutOfRange {
        /// Calendar the date was given in.
        calendar: CalendarType,
        /// Year of the rejected date.
        year: i32,
        /// 1-indexed month of the rejected date.
        month: u32,
        /// The day that was rejected.
        day: u32,
        /// The number of days in that month.
        max_day: u32,
    },

    /// Returned by checked conversions when the date is outside table coverage.
    #[error("unsupported {calendar} date: {year}-{month:02}-{day:02} is not covered by the reference table")]
    UnsupportedDate {
        /// Calendar the date was given in.
        calendar: CalendarType,
        /// Year of the rejected date.
        year: i32,
        /// 1-indexed month of the rejected date.
        month: u32,
        /// Day of the rejected date.
        day: u32,
    },

    /// Returned when a month range ends before it starts.
    #[error("inverted range for {year}-{month:02}: {start} is after {end}")]
    InvertedRange {
        /// BS year of the entry.
        year: i32,
        /// 1-indexed BS month of the entry.
        month: u32,
        /// First Gregorian day of the range.
        start: NaiveDate,
        /// Last Gregorian day of the range.
        end: NaiveDate,
    },

    /// Returned when the same (year, month) key is added twice.
    #[error("duplicate table entry for {year}-{month:02}")]
    DuplicateEntry {
        /// BS year of the entry.
        year: i32,
        /// 1-indexed BS month of the entry.
        month: u32,
    },

    /// Returned when a year or month key in a table file is not numeric.
    #[error("invalid table key: {key:?}")]
    InvalidKey {
        /// The offending key.
        key: String,
    },

    /// Wraps a JSON decoding or encoding failure.
    #[error("table format error: {reason}")]
    Format {
        /// Description of the underlying serde_json failure.
        reason: String,
    },

    /// Returned when a table file cannot be read.
    #[error("failed to read {}: {reason}", path.display())]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when one or more table consistency checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}
