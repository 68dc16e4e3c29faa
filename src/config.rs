use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG: &str = "sambat.toml";

/// Top-level sambat configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SambatConfig {
    /// Reference table settings.
    #[serde(default)]
    pub table: TableToml,

    /// Output formatting settings.
    #[serde(default)]
    pub display: DisplayToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableToml {
    /// JSON table file; the built-in table is used when unset.
    pub path: Option<PathBuf>,
    /// Warn at startup if the table has gaps or overlaps.
    #[serde(default = "default_true")]
    pub validate: bool,
}

impl Default for TableToml {
    fn default() -> Self {
        Self {
            path: None,
            validate: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayToml {
    #[serde(default = "default_numerals")]
    pub numerals: String,
    #[serde(default = "default_script")]
    pub script: String,
}

impl Default for DisplayToml {
    fn default() -> Self {
        Self {
            numerals: default_numerals(),
            script: default_script(),
        }
    }
}

fn default_numerals() -> String {
    "latin".to_string()
}
fn default_script() -> String {
    "latin".to_string()
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG`] is read
/// if present and defaults are used otherwise.
pub fn load(path: Option<&Path>) -> Result<SambatConfig> {
    let path = match path {
        Some(p) => p,
        None if Path::new(DEFAULT_CONFIG).is_file() => Path::new(DEFAULT_CONFIG),
        None => {
            debug!("no config file, using defaults");
            return Ok(SambatConfig::default());
        }
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: SambatConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    debug!(path = %path.display(), ?config, "config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: SambatConfig = toml::from_str("").unwrap();
        assert!(config.table.path.is_none());
        assert!(config.table.validate);
        assert_eq!(config.display.numerals, "latin");
        assert_eq!(config.display.script, "latin");
    }

    #[test]
    fn full_config() {
        let config: SambatConfig = toml::from_str(
            r#"
            [table]
            path = "tables/bs.json"
            validate = false

            [display]
            numerals = "devanagari"
            script = "devanagari"
            "#,
        )
        .unwrap();
        assert_eq!(config.table.path, Some(PathBuf::from("tables/bs.json")));
        assert!(!config.table.validate);
        assert_eq!(config.display.numerals, "devanagari");
    }

    #[test]
    fn unknown_field_rejected() {
        let result: Result<SambatConfig, _> = toml::from_str("[display]\ncolor = \"red\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sambat.toml");
        std::fs::write(&path, "[display]\nnumerals = \"devanagari\"\n").unwrap();
        let config = load(Some(&path)).unwrap();
        assert_eq!(config.display.numerals, "devanagari");
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
