//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::EmbedConfig;
use std::path::Path;

/// Conventional configuration file name looked up in the working directory.
pub const CONFIG_FILE: &str = "rembed.toml";

/// Loads and validates `rembed.toml` from a project directory.
///
/// Returns `Ok(None)` when the directory has no configuration file, so that
/// callers can run from command-line arguments alone.
pub fn load_config(project_dir: &Path) -> Result<Option<EmbedConfig>, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE);
    if !config_path.is_file() {
        return Ok(None);
    }
    load_config_file(&config_path).map(Some)
}

/// Loads and validates a configuration from an explicit file path.
pub fn load_config_file(path: &Path) -> Result<EmbedConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut config = load_config_from_str(&content)?;

    // Relative paths in the file are relative to the file, not to the
    // process working directory.
    let base = config_dir(path);
    let root = config
        .embed
        .build_root
        .take()
        .map_or_else(|| base.to_path_buf(), |r| base.join(r));
    config.embed.build_root = Some(root);
    if let Some(out) = config.embed.output_dir.take() {
        config.embed.output_dir = Some(base.join(out));
    }
    Ok(config)
}

/// Directory holding the configuration file. A bare file name lives in `.`.
fn config_dir(path: &Path) -> &Path {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
}

/// Parses and validates a `rembed.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<EmbedConfig, ConfigError> {
    let config: EmbedConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that codegen settings can produce well-formed output.
fn validate_config(config: &EmbedConfig) -> Result<(), ConfigError> {
    let codegen = &config.codegen;
    if codegen.bytes_per_line == 0 {
        return Err(ConfigError::Invalid(
            "bytes_per_line must be at least 1".to_string(),
        ));
    }
    if codegen.namespace.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "namespace must not be empty".to_string(),
        ));
    }
    if codegen.registry_call.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "registry_call must not be empty".to_string(),
        ));
    }
    if !is_identifier(&codegen.register_function) {
        return Err(ConfigError::Invalid(format!(
            "register_function '{}' is not a valid identifier",
            codegen.register_function
        )));
    }
    if !codegen
        .guard_prefix
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ConfigError::Invalid(format!(
            "guard_prefix '{}' may only contain letters, digits and '_'",
            codegen.guard_prefix
        )));
    }
    Ok(())
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
