//! Errors raised while reading `rembed.toml`.

use std::path::PathBuf;

/// Why a configuration file could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// The configuration file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML or does not match the expected tables.
    #[error("malformed rembed.toml: {0}")]
    Parse(String),

    /// A `[codegen]` value would produce broken C++.
    #[error("invalid codegen setting: {0}")]
    Invalid(String),
}
