//! Month command: print one month as a week grid.

use anyhow::Result;
use tracing::{info_span, warn};

use sambat_calendar::{CalendarType, Converter, MonthGrid, month_grid};
use sambat_locale::{FormatOptions, Numerals, localize_digits, month_name, weekday_labels};

use crate::cli::MonthArgs;
use crate::convert::Settings;

/// Run the month grid printer.
pub fn run(args: MonthArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("month").entered();
    let calendar = CalendarType::from(args.calendar);
    let month = args.month - 1;
    let converter = Converter::new(&settings.table);

    if calendar == CalendarType::Bs {
        match settings.table.lookup(args.year, args.month) {
            Some(range) => println!("AD {} to {}", range.start(), range.end()),
            None => warn!(
                year = args.year,
                month = args.month,
                "month not in reference table; showing fallback length"
            ),
        }
    }

    let grid = month_grid(&converter, calendar, args.year, month);
    print!("{}", render(calendar, args.year, month, grid, settings.format));
    Ok(())
}

/// Renders a title line, weekday header and week rows.
pub fn render(
    calendar: CalendarType,
    year: i32,
    month: u32,
    grid: MonthGrid,
    format: FormatOptions,
) -> String {
    let localize = calendar == CalendarType::Bs && format.numerals == Numerals::Devanagari;
    let digits = |s: String| if localize { localize_digits(&s) } else { s };

    let name = month_name(calendar, month, format.script)
        .map_or_else(|| month.saturating_add(1).to_string(), str::to_string);
    let mut out = format!("{name} {}\n", digits(year.to_string()));

    let header: Vec<String> = weekday_labels(calendar)
        .iter()
        .map(|label| format!("{label:>3}"))
        .collect();
    out.push_str(header.join("").trim_end());
    out.push('\n');

    let cells: Vec<String> = grid
        .cells()
        .map(|cell| match cell {
            Some(day) => format!("{:>3}", digits(day.to_string())),
            None => "   ".to_string(),
        })
        .collect();
    for week in cells.chunks(7) {
        out.push_str(week.concat().trim_end());
        out.push('\n');
    }
    out
}
