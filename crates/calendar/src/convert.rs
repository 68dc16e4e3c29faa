//! Bidirectional BS <-> AD conversion over a reference table.

use chrono::{NaiveDate, TimeDelta};
use tracing::trace;

use crate::date::{CalendarDate, CalendarType, gregorian_date};
use crate::error::CalendarError;
use crate::month_length::{days_in_ad_month, days_in_bs_month};
use crate::table::ReferenceTable;

/// Converts dates between Bikram Sambat and Gregorian using a borrowed
/// [`ReferenceTable`].
///
/// All months are 0-indexed. Conversions outside the table's coverage
/// return `None`; the `_checked` variants return a [`CalendarError`]
/// instead.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'t> {
    table: &'t ReferenceTable,
}

impl Default for Converter<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'t> Converter<'t> {
    /// Creates a converter over `table`.
    pub fn new(table: &'t ReferenceTable) -> Self {
        Self { table }
    }

    /// Returns the table this converter reads.
    pub fn table(&self) -> &'t ReferenceTable {
        self.table
    }

    /// Number of days in a BS month, with the untabulated fallback.
    pub fn days_in_bs_month(&self, year: i32, month: u32) -> u32 {
        days_in_bs_month(self.table, year, month)
    }

    /// Converts a BS date to AD.
    ///
    /// Day 1 maps onto the month's tabulated start. The day is not checked
    /// against the month length: larger days continue into the following
    /// Gregorian dates. Returns `None` if the month is not tabulated.
    pub fn bs_to_ad(&self, year: i32, month: u32, day: u32) -> Option<CalendarDate> {
        let range = self.table.lookup(year, month.checked_add(1)?)?;
        let date = range
            .start()
            .checked_add_signed(TimeDelta::days(i64::from(day) - 1))?;
        Some(CalendarDate::from_naive(date))
    }

    /// Converts an AD date to BS.
    ///
    /// The AD fields are normalized the way [`gregorian_date`] does, then
    /// table entries are scanned in order and the first span containing the
    /// date wins. Returns `None` if no span contains it.
    pub fn ad_to_bs(&self, year: i32, month: u32, day: u32) -> Option<CalendarDate> {
        let target = gregorian_date(year, month, day)?;
        self.naive_to_bs(target)
    }

    /// Converts a chrono date to BS.
    pub fn naive_to_bs(&self, target: NaiveDate) -> Option<CalendarDate> {
        let found = self.table.iter().find_map(|entry| {
            entry
                .range()
                .day_of(target)
                .map(|day| CalendarDate::bs(entry.year(), entry.month() - 1, day))
        });
        if found.is_none() {
            trace!(%target, "no table entry covers date");
        }
        found
    }

    /// Strict BS to AD conversion.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedDate`] if the month is not
    /// tabulated and [`CalendarError::DayOutOfRange`] if `day` is outside
    /// `1..=days_in_month`.
    pub fn bs_to_ad_checked(
        &self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<CalendarDate, CalendarError> {
        let unsupported = || CalendarError::UnsupportedDate {
            calendar: CalendarType::Bs,
            year,
            month: month.saturating_add(1),
            day,
        };
        let range = month
            .checked_add(1)
            .and_then(|m| self.table.lookup(year, m))
            .ok_or_else(unsupported)?;
        let max_day = range.days();
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::DayOutOfRange {
                calendar: CalendarType::Bs,
                year,
                month: month + 1,
                day,
                max_day,
            });
        }
        self.bs_to_ad(year, month, day).ok_or_else(unsupported)
    }

    /// Strict AD to BS conversion.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] for months past December,
    /// [`CalendarError::DayOutOfRange`] if the fields do not name a real
    /// Gregorian day, and [`CalendarError::UnsupportedDate`] if the
    /// table does not cover it.
    pub fn ad_to_bs_checked(
        &self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<CalendarDate, CalendarError> {
        if month > 11 {
            return Err(CalendarError::InvalidMonth {
                month: month.saturating_add(1),
            });
        }
        let target = CalendarDate::ad(year, month, day)
            .to_naive()
            .ok_or_else(|| CalendarError::DayOutOfRange {
                calendar: CalendarType::Ad,
                year,
                month: month + 1,
                day,
                max_day: days_in_ad_month(year, month),
            })?;
        self.naive_to_bs(target).ok_or(CalendarError::UnsupportedDate {
            calendar: CalendarType::Ad,
            year,
            month: month + 1,
            day,
        })
    }

    /// Converts `date` to the other calendar system.
    pub fn convert(&self, date: CalendarDate) -> Option<CalendarDate> {
        let (year, month, day) = date.ymd();
        match date.calendar() {
            CalendarType::Bs => self.bs_to_ad(year, month, day),
            CalendarType::Ad => self.ad_to_bs(year, month, day),
        }
    }

    /// Expresses `date` in `calendar`, converting only when needed.
    pub fn to_calendar(&self, date: CalendarDate, calendar: CalendarType) -> Option<CalendarDate> {
        if date.calendar() == calendar {
            Some(date)
        } else {
            self.convert(date)
        }
    }

    /// Returns `today` (a Gregorian date supplied by the caller) in BS.
    pub fn today_bs(&self, today: NaiveDate) -> Option<CalendarDate> {
        self.naive_to_bs(today)
    }
}

impl Converter<'static> {
    /// Creates a converter over the compiled-in table.
    pub fn builtin() -> Self {
        Self::new(ReferenceTable::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn bs_to_ad_new_year() {
        let c = Converter::builtin();
        assert_eq!(c.bs_to_ad(2082, 0, 1), Some(CalendarDate::ad(2025, 3, 14)));
    }

    #[test]
    fn bs_to_ad_untabulated() {
        let c = Converter::builtin();
        assert_eq!(c.bs_to_ad(2099, 0, 1), None);
        assert_eq!(c.bs_to_ad(2082, 12, 1), None);
        assert_eq!(c.bs_to_ad(2082, u32::MAX, 1), None);
    }

    #[test]
    fn bs_to_ad_day_overflow_continues() {
        let c = Converter::builtin();
        // Baishakh has 31 days; day 32 lands on Jestha 1's AD date.
        assert_eq!(c.bs_to_ad(2082, 0, 32), c.bs_to_ad(2082, 1, 1));
        // Day 0 is the day before the start.
        assert_eq!(c.bs_to_ad(2082, 0, 0), Some(CalendarDate::ad(2025, 3, 13)));
    }

    #[test]
    fn ad_to_bs_new_year() {
        let c = Converter::builtin();
        assert_eq!(c.ad_to_bs(2025, 3, 14), Some(CalendarDate::bs(2082, 0, 1)));
    }

    #[test]
    fn ad_to_bs_crosses_gregorian_year() {
        let c = Converter::builtin();
        // Poush 2082 runs 2025-12-16 .. 2026-01-14.
        assert_eq!(c.ad_to_bs(2026, 0, 1), Some(CalendarDate::bs(2082, 8, 17)));
    }

    #[test]
    fn ad_to_bs_outside_coverage() {
        let c = Converter::builtin();
        assert_eq!(c.ad_to_bs(2025, 3, 13), None);
        assert_eq!(c.ad_to_bs(2026, 3, 14), None);
    }

    #[test]
    fn ad_to_bs_normalizes_overflowing_day() {
        let c = Converter::builtin();
        // April 31 is May 1.
        assert_eq!(c.ad_to_bs(2025, 3, 31), c.ad_to_bs(2025, 4, 1));
    }

    #[test]
    fn overlapping_ranges_first_entry_wins() {
        let table = ReferenceTable::from_entries([
            (3001, 1, d(2000, 1, 1), d(2000, 1, 31)),
            (3000, 12, d(2000, 1, 10), d(2000, 2, 10)),
        ])
        .unwrap();
        let c = Converter::new(&table);
        assert_eq!(c.ad_to_bs(2000, 0, 15), Some(CalendarDate::bs(3001, 0, 15)));
        assert_eq!(c.ad_to_bs(2000, 1, 1), Some(CalendarDate::bs(3000, 11, 23)));
    }

    #[test]
    fn checked_rejects_out_of_range_day() {
        let c = Converter::builtin();
        assert_eq!(
            c.bs_to_ad_checked(2082, 7, 30).unwrap_err(),
            CalendarError::DayOutOfRange {
                calendar: CalendarType::Bs,
                year: 2082,
                month: 8,
                day: 30,
                max_day: 29,
            }
        );
        assert!(matches!(
            c.bs_to_ad_checked(2082, 0, 0).unwrap_err(),
            CalendarError::DayOutOfRange { max_day: 31, .. }
        ));
    }

    #[test]
    fn checked_rejects_untabulated() {
        let c = Converter::builtin();
        assert_eq!(
            c.bs_to_ad_checked(2099, 0, 1).unwrap_err(),
            CalendarError::UnsupportedDate {
                calendar: CalendarType::Bs,
                year: 2099,
                month: 1,
                day: 1,
            }
        );
    }

    #[test]
    fn checked_accepts_last_day() {
        let c = Converter::builtin();
        assert_eq!(
            c.bs_to_ad_checked(2082, 2, 32).unwrap(),
            CalendarDate::ad(2025, 6, 16)
        );
    }

    #[test]
    fn ad_checked_rejects_impossible_day() {
        let c = Converter::builtin();
        assert_eq!(
            c.ad_to_bs_checked(2025, 1, 29).unwrap_err(),
            CalendarError::DayOutOfRange {
                calendar: CalendarType::Ad,
                year: 2025,
                month: 2,
                day: 29,
                max_day: 28,
            }
        );
        assert_eq!(
            c.ad_to_bs_checked(2025, 12, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn ad_checked_rejects_uncovered() {
        let c = Converter::builtin();
        assert!(matches!(
            c.ad_to_bs_checked(2030, 0, 1).unwrap_err(),
            CalendarError::UnsupportedDate {
                calendar: CalendarType::Ad,
                ..
            }
        ));
        assert_eq!(
            c.ad_to_bs_checked(2025, 3, 14).unwrap(),
            CalendarDate::bs(2082, 0, 1)
        );
    }

    #[test]
    fn convert_toggles_calendar() {
        let c = Converter::builtin();
        let bs = CalendarDate::bs(2082, 5, 10);
        let ad = c.convert(bs).unwrap();
        assert_eq!(ad.calendar(), CalendarType::Ad);
        assert_eq!(c.convert(ad), Some(bs));
    }

    #[test]
    fn to_calendar_is_identity_for_same_calendar() {
        let c = Converter::builtin();
        let date = CalendarDate::bs(2099, 0, 1);
        assert_eq!(c.to_calendar(date, CalendarType::Bs), Some(date));
        assert_eq!(c.to_calendar(date, CalendarType::Ad), None);
    }

    #[test]
    fn today_bs() {
        let c = Converter::builtin();
        assert_eq!(
            c.today_bs(d(2026, 4, 13)),
            Some(CalendarDate::bs(2082, 11, 30))
        );
        assert_eq!(c.today_bs(d(2026, 10, 19)), None);
    }

    #[test]
    fn converter_over_custom_table() {
        let table =
            ReferenceTable::from_entries([(1, 1, d(2000, 1, 1), d(2000, 1, 3))]).unwrap();
        let c = Converter::new(&table);
        assert_eq!(c.days_in_bs_month(1, 0), 3);
        assert_eq!(c.bs_to_ad(1, 0, 3), Some(CalendarDate::ad(2000, 0, 3)));
        assert_eq!(c.ad_to_bs(2000, 0, 4), None);
    }
}
