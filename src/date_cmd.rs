//! Date conversion commands: `to-ad`, `to-bs` and `today`.

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use tracing::{debug, info_span};

use sambat_calendar::{CalendarDate, CalendarType, Converter, ReferenceTable};
use sambat_locale::{FormatOptions, format_date};

use crate::cli::DateArgs;
use crate::convert::Settings;

/// Convert a BS date given on the command line to AD.
pub fn run_to_ad(args: &DateArgs, strict: bool, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("to_ad", strict).entered();
    let ad = to_ad(args, strict, &settings.table)?;
    println!("{}", describe(ad, settings.format));
    Ok(())
}

/// Convert an AD date given on the command line to BS.
pub fn run_to_bs(args: &DateArgs, strict: bool, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("to_bs", strict).entered();
    let bs = to_bs(args, strict, &settings.table)?;
    println!("{}", describe(bs, settings.format));
    Ok(())
}

fn to_ad(args: &DateArgs, strict: bool, table: &ReferenceTable) -> Result<CalendarDate> {
    let converter = Converter::new(table);
    let month = args.month - 1;
    if strict {
        return converter
            .bs_to_ad_checked(args.year, month, args.day)
            .context("conversion failed");
    }
    let requested = CalendarDate::bs(args.year, month, args.day);
    converter
        .bs_to_ad(args.year, month, args.day)
        .ok_or_else(|| unsupported(table, requested))
}

fn to_bs(args: &DateArgs, strict: bool, table: &ReferenceTable) -> Result<CalendarDate> {
    let converter = Converter::new(table);
    let month = args.month - 1;
    if strict {
        return converter
            .ad_to_bs_checked(args.year, month, args.day)
            .context("conversion failed");
    }
    let requested = CalendarDate::ad(args.year, month, args.day);
    converter
        .ad_to_bs(args.year, month, args.day)
        .ok_or_else(|| unsupported(table, requested))
}

/// Print the local date in BS.
pub fn run_today(settings: &Settings) -> Result<()> {
    let _cmd = info_span!("today").entered();
    let today = Local::now().date_naive();
    debug!(%today, "local date");

    let bs = Converter::new(&settings.table)
        .today_bs(today)
        .ok_or_else(|| unsupported(&settings.table, CalendarDate::from_naive(today)))?;

    println!("{}", describe(bs, settings.format));
    Ok(())
}

/// One-line rendering: ISO-style date, calendar tag, then the long form.
pub fn describe(date: CalendarDate, format: FormatOptions) -> String {
    format!("{date} ({})", format_date(date, format))
}

fn unsupported(table: &ReferenceTable, date: CalendarDate) -> anyhow::Error {
    let coverage = match table.coverage() {
        Some((first, last)) => format!("table covers AD {first} to {last}"),
        None => "table is empty".to_string(),
    };
    let kind = match date.calendar() {
        CalendarType::Bs => "month is not tabulated",
        CalendarType::Ad => "date is outside the table",
    };
    anyhow!("{date}: {kind} ({coverage})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sambat_locale::{Numerals, Script};

    #[test]
    fn describe_bs() {
        let format = FormatOptions {
            numerals: Numerals::Devanagari,
            script: Script::Latin,
        };
        assert_eq!(
            describe(CalendarDate::bs(2082, 0, 1), format),
            "2082-01-01 BS (Baishakh १, २०८२)"
        );
    }

    #[test]
    fn describe_ad() {
        assert_eq!(
            describe(CalendarDate::ad(2025, 3, 14), FormatOptions::default()),
            "2025-04-14 AD (April 14, 2025)"
        );
    }

    fn args(year: i32, month: u32, day: u32) -> DateArgs {
        DateArgs { year, month, day }
    }

    #[test]
    fn lenient_to_ad_rolls_over() {
        let ad = to_ad(&args(2082, 1, 32), false, ReferenceTable::builtin()).unwrap();
        assert_eq!(ad, CalendarDate::ad(2025, 4, 15));
    }

    #[test]
    fn strict_to_ad_rejects_overflow() {
        let err = to_ad(&args(2082, 1, 32), true, ReferenceTable::builtin()).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "conversion failed: invalid day: 32 for BS 2082-01 (max 31)"
        );
    }

    #[test]
    fn lenient_to_bs_normalizes() {
        // April 31 is read as May 1.
        let bs = to_bs(&args(2025, 4, 31), false, ReferenceTable::builtin()).unwrap();
        assert_eq!(bs, CalendarDate::bs(2082, 0, 18));
    }

    #[test]
    fn strict_to_bs_rejects_impossible_day() {
        assert!(to_bs(&args(2025, 4, 31), true, ReferenceTable::builtin()).is_err());
    }

    #[test]
    fn unsupported_message_names_coverage() {
        let err = unsupported(ReferenceTable::builtin(), CalendarDate::bs(2099, 0, 1));
        assert_eq!(
            err.to_string(),
            "2099-01-01 BS: month is not tabulated (table covers AD 2025-04-14 to 2026-04-13)"
        );
    }

    #[test]
    fn unsupported_message_empty_table() {
        let err = unsupported(&ReferenceTable::default(), CalendarDate::ad(2025, 0, 1));
        assert_eq!(
            err.to_string(),
            "2025-01-01 AD: date is outside the table (table is empty)"
        );
    }
}
