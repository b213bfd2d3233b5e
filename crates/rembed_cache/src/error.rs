//! Error types for fingerprint store operations.

use std::path::PathBuf;

use rembed_common::ResourceError;

/// Errors that can occur while checking or writing fingerprint records.
///
/// Reading a record is fail-safe: a missing or corrupt sidecar is reported
/// as a stale resource, never as an error.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// An I/O error occurred while writing a fingerprint record.
    #[error("hash store I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The resource itself could not be inspected or read.
    #[error(transparent)]
    Resource(#[from] ResourceError),
}
