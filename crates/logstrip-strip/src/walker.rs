//! Source tree traversal and in-place rewriting

use crate::error::{StripError, StripResult};
use crate::transform::strip_logging;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// What to scan and whether to write back
#[derive(Debug, Clone)]
pub struct WalkOptions {
    pub root: PathBuf,
    /// Extensions without the leading dot
    pub extensions: Vec<String>,
    /// Directory names excluded wherever they appear in a path
    pub exclude_dirs: Vec<String>,
    pub dry_run: bool,
}

/// Totals for one run over a tree
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StripSummary {
    pub examined: usize,
    pub modified: Vec<PathBuf>,
    pub removed_lines: usize,
}

impl StripSummary {
    pub fn modified_count(&self) -> usize {
        self.modified.len()
    }

    pub fn summary_line(&self, dry_run: bool) -> String {
        let verb = if dry_run { "would modify" } else { "modified" };
        format!(
            "Processed {} files, {} {} files",
            self.examined,
            verb,
            self.modified_count()
        )
    }
}

/// Line printed for each modified file
pub fn report_line(path: &Path) -> String {
    format!("✓ {}", path.display())
}

fn has_excluded_component(path: &Path, exclude_dirs: &[String]) -> bool {
    path.components().any(|component| {
        let name = component.as_os_str();
        exclude_dirs.iter().any(|dir| name == OsStr::new(dir))
    })
}

fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}

/// Whether a path would be examined: allowed extension and no excluded component
pub fn is_candidate(path: &Path, options: &WalkOptions) -> bool {
    has_allowed_extension(path, &options.extensions)
        && !has_excluded_component(path, &options.exclude_dirs)
}

fn is_excluded_dir(entry: &DirEntry, exclude_dirs: &[String]) -> bool {
    entry.file_type().is_dir()
        && exclude_dirs
            .iter()
            .any(|dir| entry.file_name() == OsStr::new(dir))
}

/// Collect candidate files under the root, pruning excluded directories
pub fn collect_candidates(options: &WalkOptions) -> StripResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(&options.root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry, &options.exclude_dirs));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if is_candidate(entry.path(), options) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Strip one file, writing it back when changed. Returns removed line count
/// when the file was modified.
pub fn strip_file(path: &Path, dry_run: bool) -> StripResult<Option<usize>> {
    let content = fs::read_to_string(path).map_err(|source| StripError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let outcome = strip_logging(&content);
    if outcome.unterminated {
        warn!(
            path = %path.display(),
            "file ends inside an unterminated logger call"
        );
    }
    if !outcome.modified {
        return Ok(None);
    }

    if !dry_run {
        fs::write(path, &outcome.content).map_err(|source| StripError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    info!(
        path = %path.display(),
        removed_lines = outcome.removed_lines,
        dry_run,
        "stripped logger calls"
    );
    Ok(Some(outcome.removed_lines))
}

/// Walk the tree, stripping every candidate file.
///
/// `report` is invoked with each modified path as soon as it is handled.
/// Stops at the first error; files already rewritten stay rewritten.
pub fn strip_tree<F>(options: &WalkOptions, mut report: F) -> StripResult<StripSummary>
where
    F: FnMut(&Path) -> io::Result<()>,
{
    let mut summary = StripSummary::default();

    for path in collect_candidates(options)? {
        debug!(path = %path.display(), "examining");
        summary.examined += 1;

        if let Some(removed) = strip_file(&path, options.dry_run)? {
            report(&path).map_err(StripError::Output)?;
            summary.removed_lines += removed;
            summary.modified.push(path);
        }
    }

    Ok(summary)
}
