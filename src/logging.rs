//! Diagnostic logging for the CLI.
//!
//! Log output goes to stderr alongside lexical diagnostics, so it is
//! off unless `LOX_LOG` asks for it.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable selecting the log level.
pub const LOG_ENV: &str = "LOX_LOG";

/// Parse a level name such as `debug` or `OFF`.
///
/// Unknown or empty values disable logging.
#[must_use]
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .map(str::trim)
        .and_then(|v| v.parse().ok())
        .unwrap_or(LevelFilter::OFF)
}

/// Install the global subscriber using the level from `LOX_LOG`.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_from_env() {
    let level = parse_level(std::env::var(LOG_ENV).ok().as_deref());
    init_with_level(level);
}

/// Install a compact stderr subscriber filtered at `level`.
///
/// Only the first call installs a subscriber; later calls do nothing.
pub fn init_with_level(level: LevelFilter) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_level(true)
        .with_ansi(false)
        .compact()
        .with_filter(level);

    // a subscriber may already be installed, e.g. by a test harness
    let _ = Registry::default().with(layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_off() {
        assert_eq!(parse_level(None), LevelFilter::OFF);
        assert_eq!(parse_level(Some("")), LevelFilter::OFF);
        assert_eq!(parse_level(Some("chatty")), LevelFilter::OFF);
    }

    #[test]
    fn parses_level_names() {
        assert_eq!(parse_level(Some("debug")), LevelFilter::DEBUG);
        assert_eq!(parse_level(Some(" TRACE ")), LevelFilter::TRACE);
        assert_eq!(parse_level(Some("warn")), LevelFilter::WARN);
    }
}
