//! Per-task outcomes and the aggregate report.
//!
//! The engine never fails on a single image; each task yields one
//! `TaskOutcome`, rendered as one line of the report returned to the caller.

use std::fmt;
use std::path::PathBuf;

/// Fixed message returned when the page contains no `img[src]` tags.
pub const NO_IMAGES_SENTINEL: &str = "no images found (check page structure)";

/// Outcome of one image task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    /// WebP payload re-encoded as JPEG at the given path.
    Converted(PathBuf),
    /// Raw bytes written verbatim at the given path.
    Saved(PathBuf),
    /// The task failed; the offending URL (or raw src) and error text.
    Failed { url: String, error: String },
}

impl fmt::Display for TaskOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskOutcome::Converted(path) => write!(f, "converted: {}", path.display()),
            TaskOutcome::Saved(path) => write!(f, "downloaded: {}", path.display()),
            TaskOutcome::Failed { url, error } => write!(f, "failed {}: {}", url, error),
        }
    }
}

/// Joins outcomes into the newline-separated report.
pub fn join_report(outcomes: &[TaskOutcome]) -> String {
    outcomes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
