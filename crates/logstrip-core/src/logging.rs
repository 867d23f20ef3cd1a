use std::error::Error;
use tracing::Level;

/// Error returned when a global subscriber is already installed
pub type InitError = Box<dyn Error + Send + Sync + 'static>;

/// Parse a log level name, falling back to `warn` for anything unrecognized
pub fn parse_level(level: &str) -> Level {
    level.trim().parse().unwrap_or(Level::WARN)
}

/// Install the global fmt subscriber writing to stderr.
///
/// Stdout stays reserved for the per-file report, so diagnostics never mix
/// with it. Fails if a global subscriber has already been set.
pub fn init_logging(level: &str) -> Result<(), InitError> {
    tracing_subscriber::fmt()
        .with_max_level(parse_level(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
