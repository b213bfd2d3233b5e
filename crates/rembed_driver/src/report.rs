//! Run outcomes, serializable for machine-readable CLI output.

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::error::EmbedError;

/// A header (re)generated during a run.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedEntry {
    /// The resource file.
    pub source: PathBuf,
    /// The header written for it.
    pub header: PathBuf,
    /// Why it was regenerated.
    pub reason: &'static str,
}

/// A resource that could not be processed.
#[derive(Debug, Serialize)]
pub struct ResourceFailure {
    /// The resource or spec path.
    pub path: PathBuf,
    /// Short error kind, e.g. `path-not-found`.
    pub kind: &'static str,
    /// What went wrong.
    #[serde(rename = "message", serialize_with = "serialize_display")]
    pub error: EmbedError,
}

impl ResourceFailure {
    /// Creates a failure record for `path`.
    pub fn new(path: &Path, error: EmbedError) -> Self {
        Self {
            path: path.to_path_buf(),
            kind: error.kind(),
            error,
        }
    }
}

/// Everything that happened during one driver run.
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    /// Headers written this run.
    pub generated: Vec<GeneratedEntry>,
    /// Resources whose recorded fingerprint matched.
    pub up_to_date: Vec<PathBuf>,
    /// Non-file entries skipped during directory expansion.
    pub skipped: Vec<PathBuf>,
    /// Resources that failed; the rest of the batch still ran.
    pub failures: Vec<ResourceFailure>,
    /// The aggregator, if it was rewritten.
    pub aggregator: Option<PathBuf>,
}

impl RunReport {
    /// Returns `true` if any header was (re)generated.
    pub fn changed(&self) -> bool {
        !self.generated.is_empty()
    }
}

/// Staleness of one resource, as reported by a dry run.
#[derive(Debug, Clone, Serialize)]
pub struct StatusEntry {
    /// The resource file.
    pub source: PathBuf,
    /// Derived identifier.
    pub id: String,
    /// Whether the next run would regenerate it.
    pub stale: bool,
    /// Short reason, e.g. `content changed`.
    pub reason: &'static str,
}

fn serialize_display<T: std::fmt::Display, S: Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
