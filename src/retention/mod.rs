//! Retention sweep: decide which indices are stale and remove them.
//!
//! A sweep is one pass: list the catalog, keep the names matching the
//! partition prefix, derive each survivor's creation date from its name,
//! and delete everything strictly older than the retention window unless
//! the run is a dry run. Deletion order is the sorted plan order, so runs
//! are reproducible and log diffs stay stable.

mod age;
mod sweep;

pub use age::{NameFormatError, SuffixDateParser, exceeds_retention};
pub use sweep::{DeletionResult, SweepRunResult, filter_indices, plan_deletions, run_sweep};

use crate::{catalog::RemoteError, config::ConfigError};

/// Any failure that aborts a sweep.
///
/// No variant is recoverable mid-run: the sweep is idempotent, so callers
/// abort and re-run later rather than resuming partway.
#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    NameFormat(#[from] NameFormatError),

    #[error("failed to write report output: {0}")]
    Report(#[from] std::io::Error),
}

impl SweepError {
    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Report(_) => 1,
            Self::Config(_) => 2,
            Self::Remote(_) => 3,
            Self::NameFormat(_) => 4,
        }
    }
}
