use clap::Parser;
use logstrip_strip::StripArgs;

#[derive(Parser)]
#[command(name = "logstrip")]
#[command(version)]
#[command(about = "Strip logger.info/warn/error/debug calls from a source tree in place", long_about = None)]
struct Cli {
    #[command(flatten)]
    strip: StripArgs,

    /// Log level for diagnostics on stderr
    #[arg(long, env = "LOGSTRIP_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logstrip_core::init_logging(&cli.log_level) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "logstrip starting");

    if let Err(e) = logstrip_strip::run(cli.strip) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["logstrip"]).unwrap();
        assert!(cli.strip.root.is_none());
        assert!(!cli.strip.dry_run);
    }

    #[test]
    fn test_root_and_flags() {
        let cli =
            Cli::try_parse_from(["logstrip", "app/src", "--dry-run", "--log-level", "debug"])
                .unwrap();
        assert_eq!(cli.strip.root.as_deref(), Some("app/src"));
        assert!(cli.strip.dry_run);
        assert_eq!(cli.log_level, "debug");
    }
}
