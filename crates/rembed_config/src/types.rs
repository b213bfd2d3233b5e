//! Configuration types deserialized from `rembed.toml`.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use std::path::PathBuf;

use crate::specs::parse_resource_list;

/// The top-level configuration parsed from `rembed.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmbedConfig {
    /// Which resources to embed and where to write the output.
    #[serde(default)]
    pub embed: EmbedSection,
    /// Shape of the generated source.
    #[serde(default)]
    pub codegen: CodegenConfig,
}

/// The `[embed]` table: inputs and output location.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmbedSection {
    /// Build root that embedded relative paths are computed against.
    /// Relative values are resolved against the directory holding the
    /// configuration file.
    pub build_root: Option<PathBuf>,
    /// Directory receiving `EmbedResources/`.
    pub output_dir: Option<PathBuf>,
    /// Resource files or directories.
    ///
    /// Accepts a list of paths or a single `|`-separated string.
    #[serde(default, deserialize_with = "deserialize_resource_list")]
    pub resources: Vec<String>,
}

/// The `[codegen]` table controlling generated header and aggregator text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    /// C++ namespace wrapping every generated type.
    pub namespace: String,
    /// Header declaring the resource registry, included by each generated header.
    pub registry_include: String,
    /// Shared foundational header included first by the aggregator.
    pub foundation_include: String,
    /// Callable invoked as `<registry_call><Type>()` to register a resource.
    pub registry_call: String,
    /// Name of the explicit registration function emitted in manifest mode.
    pub register_function: String,
    /// Prefix of every include guard.
    pub guard_prefix: String,
    /// Number of array entries per line in the byte literal.
    pub bytes_per_line: usize,
    /// How generated types are tied into the registry.
    pub registration: RegistrationMode,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            namespace: "ResourceEmbedder::Resources".to_string(),
            registry_include: "Utils/Resources/ResourceEmbedder.h".to_string(),
            foundation_include: "Utils/stdInclude.h".to_string(),
            registry_call: "SR_UTILS_NS::ResourceEmbedder::Instance().RegisterResource"
                .to_string(),
            register_function: "RegisterEmbeddedResources".to_string(),
            guard_prefix: "CODEGEN_".to_string(),
            bytes_per_line: 18,
            registration: RegistrationMode::Manifest,
        }
    }
}

/// How each generated type reaches the process-wide registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegistrationMode {
    /// The aggregator emits a manifest and an explicit registration function
    /// that the application calls once at startup (default).
    #[default]
    Manifest,
    /// Each header registers its type from a static initializer.
    StaticInit,
}

/// Deserializes a resource list given either as an array of paths or as a
/// single delimiter-separated string.
fn deserialize_resource_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ResourceList;

    impl<'de> Visitor<'de> for ResourceList {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(parse_resource_list(value))
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut out = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                out.extend(parse_resource_list(&item));
            }
            Ok(out)
        }
    }

    deserializer.deserialize_any(ResourceList)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codegen_defaults() {
        let cfg = CodegenConfig::default();
        assert_eq!(cfg.namespace, "ResourceEmbedder::Resources");
        assert_eq!(cfg.guard_prefix, "CODEGEN_");
        assert_eq!(cfg.bytes_per_line, 18);
        assert_eq!(cfg.registration, RegistrationMode::Manifest);
    }

    #[test]
    fn registration_mode_names() {
        for (name, expected) in [
            ("manifest", RegistrationMode::Manifest),
            ("static-init", RegistrationMode::StaticInit),
        ] {
            let toml = format!("[codegen]\nregistration = \"{name}\"\n");
            let cfg: EmbedConfig = toml::from_str(&toml).unwrap();
            assert_eq!(cfg.codegen.registration, expected);
        }
    }

    #[test]
    fn resources_as_string() {
        let cfg: EmbedConfig =
            toml::from_str("[embed]\nresources = \"assets/a.png|assets/icons\"\n").unwrap();
        assert_eq!(cfg.embed.resources, vec!["assets/a.png", "assets/icons"]);
    }

    #[test]
    fn resources_as_list() {
        let cfg: EmbedConfig =
            toml::from_str("[embed]\nresources = [\"assets\\\\a.png\", \"b.bin\"]\n").unwrap();
        assert_eq!(cfg.embed.resources, vec!["assets/a.png", "b.bin"]);
    }

    #[test]
    fn partial_codegen_keeps_other_defaults() {
        let cfg: EmbedConfig = toml::from_str("[codegen]\nbytes_per_line = 8\n").unwrap();
        assert_eq!(cfg.codegen.bytes_per_line, 8);
        assert_eq!(cfg.codegen.namespace, "ResourceEmbedder::Resources");
    }

    #[test]
    fn unknown_key_rejected() {
        let result: Result<EmbedConfig, _> = toml::from_str("[codegen]\ncompress = true\n");
        assert!(result.is_err());
    }
}
