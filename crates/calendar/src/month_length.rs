//! Month lengths for both calendars.

use chrono::{Datelike, NaiveDate};

use crate::date::gregorian_date;
use crate::table::ReferenceTable;

/// Length reported for BS months the table does not cover.
///
/// Kept for compatibility with callers that size month grids without
/// checking coverage; use [`try_days_in_bs_month`] to tell the cases apart.
pub const BS_FALLBACK_MONTH_DAYS: u32 = 30;

/// Number of days in a BS month (0-indexed), from the table.
///
/// Untabulated months report [`BS_FALLBACK_MONTH_DAYS`].
pub fn days_in_bs_month(table: &ReferenceTable, year: i32, month: u32) -> u32 {
    try_days_in_bs_month(table, year, month).unwrap_or(BS_FALLBACK_MONTH_DAYS)
}

/// Number of days in a BS month (0-indexed), or `None` if untabulated.
pub fn try_days_in_bs_month(table: &ReferenceTable, year: i32, month: u32) -> Option<u32> {
    table
        .lookup(year, month.checked_add(1)?)
        .map(|range| range.days())
}

/// Number of days in a Gregorian month (0-indexed).
///
/// Computed as the day-of-month of "day 0" of the following month, so months
/// past December roll into following years.
pub fn days_in_ad_month(year: i32, month: u32) -> u32 {
    month
        .checked_add(1)
        .and_then(|next| gregorian_date(year, next, 0))
        .map(|last| last.day())
        .unwrap_or_else(|| days_in_ad_month_fallback(year, month))
}

// Only reached for years at the edge of chrono's range.
fn days_in_ad_month_fallback(year: i32, month: u32) -> u32 {
    match month % 12 {
        1 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}
