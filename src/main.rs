mod cli;
mod config;
mod convert;
mod date_cmd;
mod logging;
mod month_cmd;
mod table_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command, TableCommand};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let settings = convert::build_settings(&config, cli.table.as_deref())?;

    match cli.command {
        Command::ToAd(args) => date_cmd::run_to_ad(&args, cli.strict, &settings),
        Command::ToBs(args) => date_cmd::run_to_bs(&args, cli.strict, &settings),
        Command::Today => date_cmd::run_today(&settings),
        Command::Month(args) => month_cmd::run(args, &settings),
        Command::Table(TableCommand::Check) => table_cmd::run_check(&settings),
        Command::Table(TableCommand::Export(args)) => table_cmd::run_export(args, &settings),
    }
}
