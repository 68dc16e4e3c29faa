//! Table commands: consistency check and JSON export.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use sambat_calendar::ReferenceTable;

use crate::cli::ExportArgs;
use crate::convert::Settings;

/// Validate the active table and print a summary.
pub fn run_check(settings: &Settings) -> Result<()> {
    let _cmd = info_span!("table_check").entered();
    settings
        .table
        .validate()
        .context("reference table failed validation")?;
    println!("{}", summary(&settings.table));
    Ok(())
}

/// Write the active table as JSON.
pub fn run_export(args: ExportArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("table_export").entered();
    let json = settings
        .table
        .to_json_string()
        .context("failed to encode reference table")?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, format!("{json}\n"))
                .with_context(|| format!("failed to write table: {}", path.display()))?;
            info!(path = %path.display(), months = settings.table.len(), "table written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Short description of a table's extent.
pub fn summary(table: &ReferenceTable) -> String {
    let years = table.years();
    match (years.first(), years.last(), table.coverage()) {
        (Some(first_year), Some(last_year), Some((start, end))) => format!(
            "ok: {} months, BS {first_year} to {last_year}, AD {start} to {end}",
            table.len()
        ),
        _ => "ok: table is empty".to_string(),
    }
}
