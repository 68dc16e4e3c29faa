//! Pure conversion functions: TOML config structs -> crate API types.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use sambat_calendar::ReferenceTable;
use sambat_locale::{FormatOptions, Numerals, Script};

use crate::config::{DisplayToml, SambatConfig, TableToml};

/// Everything a subcommand needs, resolved from config and CLI flags.
#[derive(Debug)]
pub struct Settings {
    pub table: ReferenceTable,
    pub format: FormatOptions,
}

/// Parses a numeral set name into the corresponding enum variant.
pub fn parse_numerals(s: &str) -> Result<Numerals> {
    match s.to_lowercase().as_str() {
        "latin" | "ascii" => Ok(Numerals::Latin),
        "devanagari" | "nepali" => Ok(Numerals::Devanagari),
        other => bail!("unknown numerals: {other:?}"),
    }
}

/// Parses a script name into the corresponding enum variant.
pub fn parse_script(s: &str) -> Result<Script> {
    match s.to_lowercase().as_str() {
        "latin" | "english" => Ok(Script::Latin),
        "devanagari" | "nepali" => Ok(Script::Devanagari),
        other => bail!("unknown script: {other:?}"),
    }
}

/// Builds [`FormatOptions`] from the `[display]` section.
pub fn build_format_options(d: &DisplayToml) -> Result<FormatOptions> {
    Ok(FormatOptions {
        numerals: parse_numerals(&d.numerals)?,
        script: parse_script(&d.script)?,
    })
}

/// Loads the reference table named by `--table`, then `[table].path`,
/// falling back to the built-in table.
pub fn load_table(t: &TableToml, override_path: Option<&Path>) -> Result<ReferenceTable> {
    let table = match override_path.or(t.path.as_deref()) {
        Some(path) => {
            let table = ReferenceTable::from_json_file(path)
                .with_context(|| format!("failed to load reference table: {}", path.display()))?;
            info!(path = %path.display(), months = table.len(), "reference table loaded");
            table
        }
        None => ReferenceTable::builtin().clone(),
    };

    if t.validate
        && let Err(e) = table.validate()
    {
        warn!(error = %e, "reference table is not contiguous; affected dates may not convert");
    }
    Ok(table)
}

/// Resolves config and CLI overrides into [`Settings`].
pub fn build_settings(config: &SambatConfig, table_override: Option<&Path>) -> Result<Settings> {
    Ok(Settings {
        table: load_table(&config.table, table_override)?,
        format: build_format_options(&config.display)?,
    })
}
