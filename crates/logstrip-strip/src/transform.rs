//! Line-oriented removal of `logger.<method>(...)` statements
//!
//! Matching is purely textual. A call is considered closed on the first line
//! containing `);`, with no parenthesis depth tracking, so an argument that
//! itself contains `);` ends the removal early.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Method names whose calls on the `logger` receiver are removed
pub const LOG_METHODS: &[&str] = &["info", "warn", "error", "debug"];

/// Textual marker treated as the end of a call statement
pub const CLOSING_MARKER: &str = ");";

/// Whole-line statement closed on the same line, no `;` inside the arguments
static SINGLE_LINE_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*logger\.(?:info|warn|error|debug)\([^;]*\);\s*$")
        .expect("single-line call pattern is valid")
});

static CALL_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*logger\.(?:info|warn|error|debug)\(").expect("call-start pattern is valid")
});

/// Three or more newlines in a row, i.e. two or more empty lines
static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("blank-run pattern is valid"));

/// Result of stripping one file's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOutcome {
    pub content: String,
    pub modified: bool,
    /// Input lines dropped by call removal, before blank-line collapsing
    pub removed_lines: usize,
    /// The content ended while still inside an unterminated call
    pub unterminated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    Skipping,
}

/// Strip logging calls from `content` and collapse blank-line runs
pub fn strip_logging(content: &str) -> StripOutcome {
    let lines: Vec<&str> = content.split('\n').collect();

    let single_pass = remove_single_line_calls(&lines);
    let (kept, unterminated) = remove_multi_line_calls(&single_pass);
    let removed_lines = lines.len() - kept.len();

    let joined = kept.join("\n");
    let stripped = collapse_blank_runs(&joined).into_owned();
    let modified = stripped != content;

    StripOutcome {
        content: stripped,
        modified,
        removed_lines,
        unterminated,
    }
}

/// Whether a line is a complete single-line logging statement
pub fn is_single_line_call(line: &str) -> bool {
    SINGLE_LINE_CALL.is_match(line)
}

/// Whether a line opens a logging call, closed or not
pub fn is_call_start(line: &str) -> bool {
    CALL_START.is_match(line)
}

fn remove_single_line_calls<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    lines
        .iter()
        .copied()
        .filter(|line| !is_single_line_call(line))
        .collect()
}

/// Returns kept lines and whether the input ended mid-call
fn remove_multi_line_calls<'a>(lines: &[&'a str]) -> (Vec<&'a str>, bool) {
    let mut kept = Vec::with_capacity(lines.len());
    let mut state = ScanState::Normal;

    for &line in lines {
        match state {
            ScanState::Normal if is_call_start(line) => {
                if !line.contains(CLOSING_MARKER) {
                    state = ScanState::Skipping;
                }
            }
            ScanState::Normal => kept.push(line),
            ScanState::Skipping => {
                if line.contains(CLOSING_MARKER) {
                    state = ScanState::Normal;
                }
            }
        }
    }

    (kept, state == ScanState::Skipping)
}

/// Collapse every run of three or more newlines to exactly two, leaving at
/// most one empty line between content lines
pub fn collapse_blank_runs(text: &str) -> Cow<'_, str> {
    BLANK_RUN.replace_all(text, "\n\n")
}
