use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use sambat_calendar::CalendarType;

/// Bikram Sambat / Gregorian date converter.
#[derive(Parser)]
#[command(
    name = "sambat",
    version,
    about = "Convert dates between Bikram Sambat and Gregorian"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: sambat.toml, if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the reference table with a JSON file.
    #[arg(long, global = true)]
    pub table: Option<PathBuf>,

    /// Reject days past the end of the month instead of rolling over.
    #[arg(long, global = true)]
    pub strict: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Bikram Sambat date to Gregorian.
    ToAd(DateArgs),
    /// Convert a Gregorian date to Bikram Sambat.
    ToBs(DateArgs),
    /// Print today's date in Bikram Sambat.
    Today,
    /// Print a month as a week grid.
    Month(MonthArgs),
    /// Inspect the reference table.
    #[command(subcommand)]
    Table(TableCommand),
}

/// Arguments for the `to-ad` and `to-bs` subcommands.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Year.
    pub year: i32,

    /// Month (1-12).
    #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,

    /// Day of month.
    pub day: u32,
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Year.
    pub year: i32,

    /// Month (1-12).
    #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,

    /// Calendar the year and month are given in.
    #[arg(long, value_enum, default_value_t = CalendarArg::Bs)]
    pub calendar: CalendarArg,
}

/// `table` subcommands.
#[derive(Subcommand)]
pub enum TableCommand {
    /// Check that table months are contiguous and non-overlapping.
    Check,
    /// Write the table as JSON.
    Export(ExportArgs),
}

/// Arguments for `table export`.
#[derive(clap::Args)]
pub struct ExportArgs {
    /// Output path; stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Calendar selector on the command line.
#[derive(Clone, Copy, ValueEnum)]
pub enum CalendarArg {
    /// Bikram Sambat.
    Bs,
    /// Gregorian.
    Ad,
}

impl From<CalendarArg> for CalendarType {
    fn from(arg: CalendarArg) -> Self {
        match arg {
            CalendarArg::Bs => CalendarType::Bs,
            CalendarArg::Ad => CalendarType::Ad,
        }
    }
}
