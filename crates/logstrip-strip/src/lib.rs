//! Logging-call removal for TypeScript source trees
//!
//! Walks a directory, removes `logger.info/warn/error/debug(...)` statements
//! (single-line and multi-line) with a textual line scanner, collapses runs
//! of blank lines, and rewrites changed files in place.

mod cli;
mod commands;
mod config;
mod error;
pub mod transform;
pub mod walker;

pub use cli::StripArgs;
pub use config::Config;
pub use error::{StripError, StripResult};
pub use transform::{strip_logging, StripOutcome};
pub use walker::{is_candidate, strip_tree, StripSummary, WalkOptions};

use anyhow::Result;

pub fn run(args: StripArgs) -> Result<()> {
    commands::execute(args)
}
