//! Error types for source generation.

use std::path::PathBuf;

use rembed_common::ResourceError;

/// Errors that can occur while generating headers or the aggregator.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// Writing a generated file or scanning the output directory failed.
    #[error("codegen I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The resource could not be read or placed relative to the build root.
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let err = CodegenError::Io {
            path: PathBuf::from("out/EmbedResources/EmbedResources.cxx"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("codegen I/O error at"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn scope_error_passes_through() {
        let err = CodegenError::from(ResourceError::PathScope {
            path: PathBuf::from("/tmp/a.png"),
            root: PathBuf::from("/project"),
        });
        assert!(matches!(
            err,
            CodegenError::Resource(ResourceError::PathScope { .. })
        ));
    }
}
