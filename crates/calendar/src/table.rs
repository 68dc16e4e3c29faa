//! The reference table mapping Bikram Sambat months to Gregorian spans.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{NaiveDate, TimeDelta};
use tracing::debug;

use crate::error::CalendarError;
use crate::range::BsMonthRange;
use crate::validate::ValidationCollector;

/// Compiled-in table data, in the same JSON shape accepted by
/// [`ReferenceTable::from_json_str`].
pub(crate) const BUILTIN_TABLE_JSON: &str = include_str!("../data/reference_table.json");

static BUILTIN: LazyLock<ReferenceTable> = LazyLock::new(|| {
    // The asset is covered by the `builtin_*` tests below.
    ReferenceTable::from_json_str(BUILTIN_TABLE_JSON).expect("built-in reference table is valid")
});

/// One `(year, month) -> range` row of a [`ReferenceTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableEntry {
    year: i32,
    month: u32,
    range: BsMonthRange,
}

impl TableEntry {
    /// BS year of the entry.
    pub fn year(self) -> i32 {
        self.year
    }

    /// 1-indexed BS month of the entry (1 = Baishakh).
    pub fn month(self) -> u32 {
        self.month
    }

    /// Gregorian span of the month.
    pub fn range(self) -> BsMonthRange {
        self.range
    }
}

/// Immutable mapping from `(BS year, BS month 1..=12)` to the Gregorian
/// span of that month.
///
/// Entries keep the order they were supplied in; reverse lookups scan in
/// that order, so the first matching entry wins if curated ranges ever
/// overlap. Forward lookups go through a key index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceTable {
    entries: Vec<TableEntry>,
    index: BTreeMap<(i32, u32), usize>,
}

impl ReferenceTable {
    /// Returns the compiled-in table.
    pub fn builtin() -> &'static ReferenceTable {
        &BUILTIN
    }

    /// Builds a table from `(year, month, start, end)` rows with 1-indexed
    /// months, preserving row order.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] for months outside 1..=12,
    /// [`CalendarError::InvertedRange`] when `start > end`, and
    /// [`CalendarError::DuplicateEntry`] when a key repeats.
    pub fn from_entries<I>(rows: I) -> Result<Self, CalendarError>
    where
        I: IntoIterator<Item = (i32, u32, NaiveDate, NaiveDate)>,
    {
        let mut table = Self::default();
        for (year, month, start, end) in rows {
            table.push(year, month, start, end)?;
        }
        Ok(table)
    }

    fn push(
        &mut self,
        year: i32,
        month: u32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<(), CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let range = BsMonthRange::new(start, end).ok_or(CalendarError::InvertedRange {
            year,
            month,
            start,
            end,
        })?;
        if self.index.contains_key(&(year, month)) {
            return Err(CalendarError::DuplicateEntry { year, month });
        }
        self.index.insert((year, month), self.entries.len());
        self.entries.push(TableEntry { year, month, range });
        Ok(())
    }

    /// Looks up the span of a BS month (1-indexed).
    ///
    /// `None` means the month is outside curated coverage.
    pub fn lookup(&self, year: i32, month: u32) -> Option<BsMonthRange> {
        self.index
            .get(&(year, month))
            .map(|&i| self.entries[i].range)
    }

    /// Iterates entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = TableEntry> + '_ {
        self.entries.iter().copied()
    }

    /// Number of tabulated months.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct BS years with at least one entry, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.index.keys().map(|&(y, _)| y).collect();
        years.dedup();
        years
    }

    /// Earliest start and latest end over all entries.
    pub fn coverage(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.entries.iter().map(|e| e.range.start()).min()?;
        let last = self.entries.iter().map(|e| e.range.end()).max()?;
        Some((first, last))
    }

    /// Checks the curation invariants the converter relies on but never
    /// verifies itself.
    ///
    /// Walks entries in key order and reports every missing month, every
    /// gap between one month's end and the next month's start, and every
    /// overlap.
    ///
    /// # Errors
    ///
    /// Returns a single [`CalendarError::Validation`] listing all problems.
    pub fn validate(&self) -> Result<(), CalendarError> {
        let mut c = ValidationCollector::new();
        let ordered: Vec<TableEntry> = self.index.values().map(|&i| self.entries[i]).collect();

        for pair in ordered.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            let expected_key = if prev.month == 12 {
                (prev.year + 1, 1)
            } else {
                (prev.year, prev.month + 1)
            };
            if (next.year, next.month) != expected_key {
                c.push(format!(
                    "missing month(s) between {}-{:02} and {}-{:02}",
                    prev.year, prev.month, next.year, next.month
                ));
                continue;
            }

            let expected_start = prev.range.end() + TimeDelta::days(1);
            let start = next.range.start();
            if start < expected_start {
                c.push(format!(
                    "{}-{:02} starts {start} but {}-{:02} ends {}",
                    next.year,
                    next.month,
                    prev.year,
                    prev.month,
                    prev.range.end()
                ));
            } else if start > expected_start {
                c.push(format!(
                    "gap between {}-{:02} and {}-{:02}: {expected_start} to {} unmapped",
                    prev.year,
                    prev.month,
                    next.year,
                    next.month,
                    start - TimeDelta::days(1)
                ));
            }
        }

        let result = c.finish();
        if let Err(err) = &result {
            debug!(error = %err, "reference table failed validation");
        }
        result
    }
}
