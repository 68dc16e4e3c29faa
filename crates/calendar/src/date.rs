//! Calendar-tagged date values.

use std::fmt;

use chrono::{Datelike, NaiveDate, TimeDelta};

/// The calendar system a [`CalendarDate`] is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarType {
    /// Bikram Sambat.
    Bs,
    /// Gregorian.
    Ad,
}

impl CalendarType {
    /// Returns the other calendar system.
    pub fn other(self) -> Self {
        match self {
            Self::Bs => Self::Ad,
            Self::Ad => Self::Bs,
        }
    }
}

impl fmt::Display for CalendarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bs => f.write_str("BS"),
            Self::Ad => f.write_str("AD"),
        }
    }
}

/// A year/month/day triple tagged with its calendar system.
///
/// The month is 0-indexed (0 = Baishakh for BS, 0 = January for AD).
/// Construction does not validate the fields: whether a BS date exists is
/// only known to a reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
    calendar: CalendarType,
}

impl CalendarDate {
    /// Creates a date in the given calendar.
    pub fn new(calendar: CalendarType, year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            calendar,
        }
    }

    /// Creates a Bikram Sambat date.
    pub fn bs(year: i32, month: u32, day: u32) -> Self {
        Self::new(CalendarType::Bs, year, month, day)
    }

    /// Creates a Gregorian date.
    pub fn ad(year: i32, month: u32, day: u32) -> Self {
        Self::new(CalendarType::Ad, year, month, day)
    }

    /// Creates a Gregorian `CalendarDate` from a chrono date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self::ad(date.year(), date.month0(), date.day())
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the 0-indexed month.
    pub fn month(self) -> u32 {
        self.month
    }

    /// Returns the 1-indexed month, as used by table keys and display.
    ///
    /// Saturates at `u32::MAX` for an unvalidated month of `u32::MAX`.
    pub fn month_number(self) -> u32 {
        self.month.saturating_add(1)
    }

    /// Returns the day within the month.
    pub fn day(self) -> u32 {
        self.day
    }

    /// Returns the calendar system.
    pub fn calendar(self) -> CalendarType {
        self.calendar
    }

    /// Returns `(year, month, day)` with a 0-indexed month.
    pub fn ymd(self) -> (i32, u32, u32) {
        (self.year, self.month, self.day)
    }

    /// Returns the chrono date for an AD value, or `None` for BS values and
    /// for fields that do not name a real Gregorian day.
    pub fn to_naive(self) -> Option<NaiveDate> {
        match self.calendar {
            CalendarType::Ad => {
                NaiveDate::from_ymd_opt(self.year, self.month.checked_add(1)?, self.day)
            }
            CalendarType::Bs => None,
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {}",
            self.year,
            self.month_number(),
            self.day,
            self.calendar
        )
    }
}

/// Builds a Gregorian date from a 0-indexed month, normalizing overflow.
///
/// Months past December roll into following years and days past the end of
/// the month roll into following months; day 0 is the last day of the
/// previous month. Returns `None` only when the result is outside chrono's
/// representable range.
pub fn gregorian_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let year = year.checked_add(i32::try_from(month / 12).ok()?)?;
    let first = NaiveDate::from_ymd_opt(year, month % 12 + 1, 1)?;
    first.checked_add_signed(TimeDelta::days(i64::from(day) - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let date = CalendarDate::bs(2082, 0, 1);
        assert_eq!(date.year(), 2082);
        assert_eq!(date.month(), 0);
        assert_eq!(date.month_number(), 1);
        assert_eq!(date.day(), 1);
        assert_eq!(date.calendar(), CalendarType::Bs);
        assert_eq!(date.ymd(), (2082, 0, 1));
    }

    #[test]
    fn equality_includes_calendar() {
        assert_eq!(CalendarDate::bs(2082, 0, 1), CalendarDate::bs(2082, 0, 1));
        assert_ne!(CalendarDate::bs(2025, 3, 14), CalendarDate::ad(2025, 3, 14));
    }

    #[test]
    fn calendar_other() {
        assert_eq!(CalendarType::Bs.other(), CalendarType::Ad);
        assert_eq!(CalendarType::Ad.other(), CalendarType::Bs);
    }

    #[test]
    fn display() {
        assert_eq!(CalendarDate::bs(2082, 0, 1).to_string(), "2082-01-01 BS");
        assert_eq!(CalendarDate::ad(2025, 11, 25).to_string(), "2025-12-25 AD");
    }

    #[test]
    fn from_naive_uses_zero_indexed_month() {
        let date = CalendarDate::from_naive(NaiveDate::from_ymd_opt(2025, 4, 14).unwrap());
        assert_eq!(date, CalendarDate::ad(2025, 3, 14));
    }

    #[test]
    fn to_naive() {
        assert_eq!(
            CalendarDate::ad(2024, 1, 29).to_naive(),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(CalendarDate::ad(2023, 1, 29).to_naive(), None);
        assert_eq!(CalendarDate::bs(2082, 0, 1).to_naive(), None);
    }

    #[test]
    fn oversized_month_does_not_overflow() {
        let date = CalendarDate::ad(2025, u32::MAX, 1);
        assert_eq!(date.to_naive(), None);
        assert_eq!(date.month_number(), u32::MAX);
        assert_eq!(date.to_string(), "2025-4294967295-01 AD");
        assert_eq!(CalendarDate::ad(2025, 12, 1).to_naive(), None);
    }

    #[test]
    fn gregorian_date_plain() {
        assert_eq!(
            gregorian_date(2025, 3, 14),
            NaiveDate::from_ymd_opt(2025, 4, 14)
        );
    }

    #[test]
    fn gregorian_date_day_overflow() {
        assert_eq!(
            gregorian_date(2023, 1, 30),
            NaiveDate::from_ymd_opt(2023, 3, 2)
        );
    }

    #[test]
    fn gregorian_date_day_zero_is_previous_month_end() {
        assert_eq!(
            gregorian_date(2024, 2, 0),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[test]
    fn gregorian_date_month_overflow() {
        assert_eq!(
            gregorian_date(2025, 12, 1),
            NaiveDate::from_ymd_opt(2026, 1, 1)
        );
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<CalendarDate>();
    }
}
