//! Month stepping and month-grid layout for calendar views.

use chrono::Datelike;

use crate::convert::Converter;
use crate::date::{CalendarType, gregorian_date};
use crate::month_length::days_in_ad_month;

/// Moves `(year, month)` (0-indexed month) by `delta` months, wrapping
/// across year boundaries.
///
/// ```ignore
/// assert_eq!(shift_month(2082, 11, 1), (2083, 0));
/// assert_eq!(shift_month(2082, 0, -1), (2081, 11));
/// ```
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let total = i64::from(year) * 12 + i64::from(month) + i64::from(delta);
    // Years outside i32 saturate; month stays within 0..12.
    let new_year = total.div_euclid(12).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    (new_year, total.rem_euclid(12) as u32)
}

/// Layout of one month as a Sunday-first week grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    /// Empty cells before day 1 (0 = month starts on Sunday).
    pub leading_blanks: u32,
    /// Number of day cells.
    pub days: u32,
}

impl MonthGrid {
    /// Number of week rows needed to show the month.
    pub fn weeks(&self) -> u32 {
        (self.leading_blanks + self.days).div_ceil(7)
    }

    /// Cells in row-major order: `None` for leading blanks, then day numbers.
    pub fn cells(&self) -> impl Iterator<Item = Option<u32>> + '_ {
        (0..self.leading_blanks)
            .map(|_| None)
            .chain((1..=self.days).map(Some))
    }
}

/// Lays out a month (0-indexed) of `calendar` for display.
///
/// BS months take their first weekday from the converted start date. A BS
/// month outside the table starts on Sunday and has the fallback length.
pub fn month_grid(
    converter: &Converter<'_>,
    calendar: CalendarType,
    year: i32,
    month: u32,
) -> MonthGrid {
    let (first, days) = match calendar {
        CalendarType::Bs => (
            converter
                .bs_to_ad(year, month, 1)
                .and_then(|date| date.to_naive()),
            converter.days_in_bs_month(year, month),
        ),
        CalendarType::Ad => (gregorian_date(year, month, 1), days_in_ad_month(year, month)),
    };
    let leading_blanks = first.map_or(0, |d| d.weekday().num_days_from_sunday());
    MonthGrid {
        leading_blanks,
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_within_year() {
        assert_eq!(shift_month(2082, 3, 1), (2082, 4));
        assert_eq!(shift_month(2082, 3, -1), (2082, 2));
        assert_eq!(shift_month(2082, 3, 0), (2082, 3));
    }

    #[test]
    fn shift_wraps_forward() {
        assert_eq!(shift_month(2082, 11, 1), (2083, 0));
        assert_eq!(shift_month(2082, 11, 13), (2084, 0));
    }

    #[test]
    fn shift_wraps_backward() {
        assert_eq!(shift_month(2082, 0, -1), (2081, 11));
        assert_eq!(shift_month(2082, 0, -25), (2079, 11));
    }

    #[test]
    fn bs_grid_baishakh_2082() {
        // 2025-04-14 is a Monday.
        let grid = month_grid(&Converter::builtin(), CalendarType::Bs, 2082, 0);
        assert_eq!(
            grid,
            MonthGrid {
                leading_blanks: 1,
                days: 31,
            }
        );
        assert_eq!(grid.weeks(), 5);
    }

    #[test]
    fn bs_grid_untabulated_month() {
        let grid = month_grid(&Converter::builtin(), CalendarType::Bs, 2099, 4);
        assert_eq!(
            grid,
            MonthGrid {
                leading_blanks: 0,
                days: 30,
            }
        );
    }

    #[test]
    fn ad_grid_february_2026() {
        // 2026-02-01 is a Sunday.
        let grid = month_grid(&Converter::builtin(), CalendarType::Ad, 2026, 1);
        assert_eq!(
            grid,
            MonthGrid {
                leading_blanks: 0,
                days: 28,
            }
        );
        assert_eq!(grid.weeks(), 4);
    }

    #[test]
    fn cells_layout() {
        let grid = MonthGrid {
            leading_blanks: 2,
            days: 3,
        };
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells, vec![None, None, Some(1), Some(2), Some(3)]);
    }
}
