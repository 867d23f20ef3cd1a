use crate::cli::StripArgs;
use crate::config::Config;
use crate::walker::{report_line, strip_tree, StripSummary, WalkOptions};
use anyhow::Result;
use std::io::{self, Write};
use tracing::debug;

pub fn execute(args: StripArgs) -> Result<()> {
    let config = Config::load(&args)?;
    let stdout = io::stdout();
    strip_and_report(&config.walk_options(), &mut stdout.lock())?;
    Ok(())
}

/// Strip the tree, writing one line per modified file, a blank line and the
/// summary line to `out`
pub(crate) fn strip_and_report<W: Write>(
    options: &WalkOptions,
    out: &mut W,
) -> Result<StripSummary> {
    debug!(
        root = %options.root.display(),
        extensions = ?options.extensions,
        exclude_dirs = ?options.exclude_dirs,
        dry_run = options.dry_run,
        "starting strip run"
    );

    let summary = strip_tree(options, |path| writeln!(out, "{}", report_line(path)))?;

    writeln!(out)?;
    writeln!(out, "{}", summary.summary_line(options.dry_run))?;
    out.flush()?;
    debug!(removed_lines = summary.removed_lines, "strip run finished");

    Ok(summary)
}
