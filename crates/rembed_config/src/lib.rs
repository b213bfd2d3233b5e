//! Parsing and validation of `rembed.toml` configuration files.
//!
//! This crate reads the project configuration file and produces a strongly-typed
//! [`EmbedConfig`], and parses delimiter-separated resource lists as passed on
//! the command line.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod specs;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_file, load_config_from_str, CONFIG_FILE};
pub use specs::parse_resource_list;
pub use types::*;
