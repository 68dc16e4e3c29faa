use tracing::Level;
use tracing_subscriber::EnvFilter;

/// The binary's own target; it follows `-v` directly.
const APP_TARGET: &str = "sambat";

/// Library targets. They trail the binary by one level, so `-v` shows
/// command progress and conversion detail needs `-vv`.
const LIBRARY_TARGETS: &[&str] = &["sambat_calendar", "sambat_locale"];

fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Builds the default filter directives for a `-v` count.
///
/// | flags  | `sambat` | libraries |
/// |--------|----------|-----------|
/// | none   | warn     | warn      |
/// | `-v`   | info     | warn      |
/// | `-vv`  | debug    | info      |
/// | `-vvv` | trace    | debug     |
/// | `-vvvv`| trace    | trace     |
fn default_directives(verbosity: u8) -> String {
    let app = level_for(verbosity);
    let libs = level_for(verbosity.saturating_sub(1));
    std::iter::once(format!("{APP_TARGET}={app}"))
        .chain(LIBRARY_TARGETS.iter().map(|t| format!("{t}={libs}")))
        .collect::<Vec<_>>()
        .join(",")
        .to_lowercase()
}

/// Initialize tracing on stderr from the CLI verbosity.
///
/// `RUST_LOG` replaces the computed directives when set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_by_default() {
        assert_eq!(
            default_directives(0),
            "sambat=warn,sambat_calendar=warn,sambat_locale=warn"
        );
    }

    #[test]
    fn libraries_trail_binary() {
        assert_eq!(
            default_directives(2),
            "sambat=debug,sambat_calendar=info,sambat_locale=info"
        );
    }

    #[test]
    fn high_counts_saturate_at_trace() {
        assert_eq!(
            default_directives(9),
            "sambat=trace,sambat_calendar=trace,sambat_locale=trace"
        );
    }

    #[test]
    fn directives_parse() {
        for v in 0..5 {
            assert!(default_directives(v).parse::<EnvFilter>().is_ok());
        }
    }
}
