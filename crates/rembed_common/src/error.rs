//! Per-resource error taxonomy.

use std::path::PathBuf;

/// Errors tied to a single resource.
///
/// None of these abort a batch: the driver records the failure against the
/// resource and moves on to the next one.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// The resource path does not exist.
    #[error("path does not exist: {path}")]
    PathNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The path exists but is not a regular file.
    #[error("path is not a file: {path}")]
    NotAFile {
        /// The offending path.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("failed to read resource {path}: {source}")]
    ResourceRead {
        /// The resource path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The resource is not located under the build root.
    #[error("resource {path} is not under build root {root}")]
    PathScope {
        /// The resource path.
        path: PathBuf,
        /// The build root it was expected to live under.
        root: PathBuf,
    },

    /// No identifier can be derived from the path (it has no file name).
    #[error("cannot derive a resource identifier from {path}")]
    InvalidName {
        /// The offending path.
        path: PathBuf,
    },
}

impl ResourceError {
    /// Returns the path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::PathNotFound { path }
            | Self::NotAFile { path }
            | Self::ResourceRead { path, .. }
            | Self::PathScope { path, .. }
            | Self::InvalidName { path } => path,
        }
    }
}
