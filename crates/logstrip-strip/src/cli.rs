use clap::Args;

#[derive(Debug, Default, Args)]
pub struct StripArgs {
    /// Directory to scan (defaults to `src`)
    pub root: Option<String>,

    /// Specify configuration file path
    #[arg(long, env = "LOGSTRIP_CONFIG")]
    pub config: Option<String>,

    /// Report files that would change without writing them
    #[arg(long)]
    pub dry_run: bool,
}
