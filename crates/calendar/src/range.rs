//! Gregorian span of a single Bikram Sambat month.

use chrono::NaiveDate;

/// Inclusive Gregorian date span `[start, end]` covered by one BS month.
///
/// `start <= end` always holds; [`ReferenceTable`](crate::ReferenceTable)
/// rejects inverted spans when entries are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BsMonthRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl BsMonthRange {
    /// Creates a range, or `None` when `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// First Gregorian day of the month (BS day 1).
    pub fn start(self) -> NaiveDate {
        self.start
    }

    /// Last Gregorian day of the month.
    pub fn end(self) -> NaiveDate {
        self.end
    }

    /// Number of days in the month, counting both endpoints.
    pub fn days(self) -> u32 {
        // start <= end, so the difference is non-negative.
        (self.end - self.start).num_days() as u32 + 1
    }

    /// Returns `true` if `date` falls within the span, endpoints included.
    pub fn contains(self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns the 1-based BS day number of `date`, if it lies in the span.
    pub fn day_of(self, date: NaiveDate) -> Option<u32> {
        self.contains(date)
            .then(|| (date - self.start).num_days() as u32 + 1)
    }
}
