//! Human-readable date strings.

use sambat_calendar::{CalendarDate, CalendarType};

use crate::names::{Script, month_name};
use crate::numerals::{Numerals, localize_digits};

/// Options for [`format_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    /// Digits for the day and year. Devanagari applies to BS dates only.
    pub numerals: Numerals,
    /// Script for the month name.
    pub script: Script,
}

/// Formats `date` as `"{month name} {day}, {year}"`.
///
/// AD dates always use ASCII digits. A month index past 11 is rendered as
/// its 1-indexed number (see [`CalendarDate::month_number`]) instead of a
/// name.
pub fn format_date(date: CalendarDate, options: FormatOptions) -> String {
    let month = month_name(date.calendar(), date.month(), options.script)
        .map_or_else(|| date.month_number().to_string(), str::to_string);
    let text = format!("{month} {}, {}", date.day(), date.year());
    if date.calendar() == CalendarType::Bs && options.numerals == Numerals::Devanagari {
        localize_digits(&text)
    } else {
        text
    }
}
