//! Error types for the embedding driver.

use rembed_cache::CacheError;
use rembed_codegen::CodegenError;
use rembed_common::ResourceError;

/// Any failure surfaced while embedding.
///
/// Per-resource failures are collected into the
/// [`RunReport`](crate::RunReport); only the aggregator step can fail a run.
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    /// The resource path was missing, not a file, unreadable, or outside
    /// the build root.
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// The fingerprint record could not be written.
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// A header or the aggregator could not be written.
    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

impl EmbedError {
    /// Returns the underlying per-resource error, if there is one.
    pub fn resource_error(&self) -> Option<&ResourceError> {
        match self {
            Self::Resource(e)
            | Self::Cache(CacheError::Resource(e))
            | Self::Codegen(CodegenError::Resource(e)) => Some(e),
            _ => None,
        }
    }

    /// Stable short name of the error kind, used in machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self.resource_error() {
            Some(ResourceError::PathNotFound { .. }) => "path-not-found",
            Some(ResourceError::NotAFile { .. }) => "not-a-file",
            Some(ResourceError::ResourceRead { .. }) => "resource-read",
            Some(ResourceError::PathScope { .. }) => "path-scope",
            Some(ResourceError::InvalidName { .. }) => "invalid-name",
            None => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn kind_looks_through_wrappers() {
        let err = EmbedError::from(CodegenError::from(ResourceError::PathScope {
            path: PathBuf::from("/x/a.png"),
            root: PathBuf::from("/p"),
        }));
        assert_eq!(err.kind(), "path-scope");

        let err = EmbedError::from(ResourceError::PathNotFound {
            path: PathBuf::from("a.png"),
        });
        assert_eq!(err.kind(), "path-not-found");
    }

    #[test]
    fn io_kind() {
        let err = EmbedError::from(CacheError::Io {
            path: PathBuf::from("h.hash"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "boom"),
        });
        assert_eq!(err.kind(), "io");
        assert!(err.resource_error().is_none());
        assert!(err.to_string().contains("boom"));
    }
}
