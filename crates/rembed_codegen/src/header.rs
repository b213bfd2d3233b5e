//! Per-resource header generation.
//!
//! Each embedded resource becomes one header declaring a non-instantiable
//! type that only carries constant data: the content length, the path the
//! resource had relative to the build root, and the bytes themselves.

use std::path::{Path, PathBuf};

use rembed_common::{OutputLayout, Resource, ResourceId};
use rembed_config::{CodegenConfig, RegistrationMode};

use crate::error::CodegenError;
use crate::format::ByteArrayFormatter;
use crate::{escape_c_string, write_file, PROVENANCE};

/// Describes a header written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedHeader {
    /// Identifier the header was derived from.
    pub id: ResourceId,
    /// Location of the written header.
    pub path: PathBuf,
    /// Resource path relative to the build root, as embedded in the header.
    pub relative_path: String,
}

/// Writes one header per resource into the output layout.
pub struct HeaderGenerator {
    config: CodegenConfig,
    layout: OutputLayout,
}

impl HeaderGenerator {
    /// Creates a generator writing below `output_dir`.
    pub fn new(config: &CodegenConfig, output_dir: &Path) -> Self {
        Self {
            config: config.clone(),
            layout: OutputLayout::new(output_dir),
        }
    }

    /// Reads the resource at `resource_path` and writes its header.
    pub fn generate(
        &self,
        resource_path: &Path,
        build_root: &Path,
    ) -> Result<GeneratedHeader, CodegenError> {
        let resource = Resource::load(resource_path)?;
        self.write(&resource, build_root)
    }

    /// Writes the header for an already-loaded resource, replacing any
    /// existing header with the same identifier.
    pub fn write(
        &self,
        resource: &Resource,
        build_root: &Path,
    ) -> Result<GeneratedHeader, CodegenError> {
        let relative_path = resource.relative_to(build_root)?;
        let content = self.render(resource, &relative_path);

        let dir = self.layout.headers_dir();
        std::fs::create_dir_all(&dir).map_err(|e| CodegenError::Io {
            path: dir,
            source: e,
        })?;
        let path = self.layout.header_path(resource.id());
        write_file(&path, &content)?;
        log::debug!("wrote {} ({} bytes)", path.display(), resource.len());

        Ok(GeneratedHeader {
            id: resource.id().clone(),
            path,
            relative_path,
        })
    }

    /// Renders the header text without touching the filesystem.
    pub fn render(&self, resource: &Resource, relative_path: &str) -> String {
        let id = resource.id();
        let class = id.safe();
        let guard = id.include_guard(&self.config.guard_prefix);
        let static_init = self.config.registration == RegistrationMode::StaticInit;
        let formatter = ByteArrayFormatter::new(self.config.bytes_per_line).with_indent(2);

        let mut out = String::new();
        out.push_str(&format!(
            "{PROVENANCE}\n/// Source: {}\n\n",
            comment_safe(relative_path)
        ));
        out.push_str(&format!("#ifndef {guard}\n#define {guard}\n\n"));
        out.push_str("#include <array>\n#include <cstdint>\n");
        if static_init {
            out.push_str(&format!("#include <{}>\n", self.config.registry_include));
        }
        out.push('\n');

        out.push_str(&format!("namespace {} {{\n", self.config.namespace));
        out.push_str(&format!("\tclass {class} {{\n\tpublic:\n"));
        out.push_str(&format!("\t\t{class}() = delete;\n\n"));
        out.push_str(&format!(
            "\t\tconstexpr static const uint64_t size = {};\n",
            resource.len()
        ));
        out.push_str(&format!(
            "\t\tconstexpr static const char path[] = \"{}\";\n",
            escape_c_string(relative_path)
        ));
        out.push_str(&formatter.declaration("data", resource.bytes()));
        out.push('\n');

        if static_init {
            out.push_str("\n\tprivate:\n");
            out.push_str(&format!(
                "\t\t[[maybe_unused]] inline static const bool codegenRegister = {}<{class}>();\n",
                self.config.registry_call
            ));
        }

        out.push_str("\t};\n}\n\n");
        out.push_str(&format!("#endif // {guard}\n"));
        out
    }
}

/// Keeps a path from terminating or breaking a `///` comment line.
fn comment_safe(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { '?' } else { c })
        .collect()
}
