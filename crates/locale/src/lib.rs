//! # sambat-locale
//!
//! Nepali presentation helpers for [`sambat_calendar`] dates: Devanagari
//! numerals, month and weekday names, and human-readable date strings.
//!
//! ## Quick Start
//!
//! ```ignore
//! use sambat_calendar::CalendarDate;
//! use sambat_locale::{FormatOptions, Numerals, Script, format_date, to_localized_digits};
//!
//! assert_eq!(to_localized_digits(2082), "२०८२");
//!
//! let opts = FormatOptions { numerals: Numerals::Devanagari, script: Script::Devanagari };
//! assert_eq!(format_date(CalendarDate::bs(2082, 0, 1), opts), "बैशाख १, २०८२");
//! ```

mod format;
mod names;
mod numerals;

pub use format::{FormatOptions, format_date};
pub use names::{Script, month_name, weekday_labels};
pub use numerals::{DEVANAGARI_DIGITS, Numerals, localize_digits, to_localized_digits};
