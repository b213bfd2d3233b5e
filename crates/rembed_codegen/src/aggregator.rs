//! Aggregator translation unit generation.
//!
//! The aggregator includes every header currently present in the headers
//! directory, so the consuming build only has to compile one file when
//! resources change. Its content is a pure function of the directory
//! listing; nothing about which resource triggered the regeneration leaks
//! into it.
//!
//! In manifest mode a small `EmbedResources.h` is written alongside it,
//! declaring the functions the aggregator defines.

use std::path::{Path, PathBuf};

use rembed_common::layout::{DECLARATIONS_FILE, HEADER_EXT};
use rembed_common::{OutputLayout, ResourceId};
use rembed_config::{CodegenConfig, RegistrationMode};

use crate::error::CodegenError;
use crate::{escape_c_string, write_file, PROVENANCE};

/// Writes the umbrella `EmbedResources.cxx` unit.
pub struct AggregatorGenerator {
    config: CodegenConfig,
    layout: OutputLayout,
}

impl AggregatorGenerator {
    /// Creates a generator for the headers below `output_dir`.
    pub fn new(config: &CodegenConfig, output_dir: &Path) -> Self {
        Self {
            config: config.clone(),
            layout: OutputLayout::new(output_dir),
        }
    }

    fn manifest(&self) -> bool {
        self.config.registration == RegistrationMode::Manifest
    }

    /// Lists the resource header file names directly inside the headers
    /// directory. The declaration header is not a resource and is left out.
    ///
    /// Names are sorted so the aggregator is reproducible regardless of the
    /// platform's directory iteration order. A missing directory yields an
    /// empty list.
    pub fn scan(&self) -> Result<Vec<String>, CodegenError> {
        let dir = self.layout.headers_dir();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let io_err = |e| CodegenError::Io {
            path: dir.clone(),
            source: e,
        };

        let suffix = format!(".{HEADER_EXT}");
        let mut headers = Vec::new();
        for entry in std::fs::read_dir(&dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            if !entry.file_type().map_err(io_err)?.is_file() {
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                log::warn!(
                    "skipping header with non UTF-8 name in {}",
                    dir.display()
                );
                continue;
            };
            if name == DECLARATIONS_FILE {
                continue;
            }
            if name.len() > suffix.len() && name.ends_with(&suffix) {
                headers.push(name);
            }
        }
        headers.sort();
        Ok(headers)
    }

    /// Returns `true` if an output this generator owns is missing while
    /// there are headers to aggregate.
    pub fn needs_rebuild(&self) -> Result<bool, CodegenError> {
        let missing = !self.layout.aggregator_path().is_file()
            || (self.manifest() && !self.layout.declarations_path().is_file());
        Ok(missing && !self.scan()?.is_empty())
    }

    /// Renders the aggregator for the given header file names.
    pub fn render(&self, headers: &[String]) -> String {
        let manifest = self.manifest();

        let mut out = String::new();
        out.push_str(PROVENANCE);
        out.push_str("\n\n");
        out.push_str(&format!("#include <{}>\n", self.config.foundation_include));
        if manifest {
            out.push_str(&format!("#include <{}>\n", self.config.registry_include));
            out.push_str("#include <array>\n#include <cstdint>\n\n");
            out.push_str(&format!("#include \"{DECLARATIONS_FILE}\"\n"));
        }
        out.push('\n');
        for header in headers {
            out.push_str(&format!("#include \"{header}\"\n"));
        }

        if manifest {
            out.push('\n');
            out.push_str(&self.render_manifest(headers));
        }
        out
    }

    /// Renders the resource name table and the explicit registration entry
    /// point that replaces per-header static initializers.
    fn render_manifest(&self, headers: &[String]) -> String {
        let ids: Vec<ResourceId> = headers
            .iter()
            .map(|h| {
                let stem = h
                    .strip_suffix(HEADER_EXT)
                    .and_then(|s| s.strip_suffix('.'))
                    .unwrap_or(h);
                ResourceId::from_raw(stem)
            })
            .collect();
        let count = ids.len();
        let func = &self.config.register_function;

        let mut out = String::new();
        out.push_str(&format!("namespace {} {{\n", self.config.namespace));

        out.push_str(&format!(
            "\tstatic constexpr std::array<const char*, {count}> EmbeddedResourceNames = {{"
        ));
        if ids.is_empty() {
            out.push_str("};\n\n");
        } else {
            out.push('\n');
            for id in &ids {
                out.push_str(&format!("\t\t\"{}\",\n", escape_c_string(id.as_str())));
            }
            out.push_str("\t};\n\n");
        }

        out.push_str(
            "\tuint64_t EmbeddedResourceCount() {\n\t\treturn EmbeddedResourceNames.size();\n\t}\n\n",
        );
        out.push_str(
            "\tconst char* EmbeddedResourceName(uint64_t index) {\n\t\t\
             return index < EmbeddedResourceNames.size() ? EmbeddedResourceNames[index] : nullptr;\n\t}\n\n",
        );

        out.push_str(&format!("\tvoid {func}() {{\n"));
        for id in &ids {
            out.push_str(&format!(
                "\t\t{}<{}>();\n",
                self.config.registry_call,
                id.safe()
            ));
        }
        out.push_str("\t}\n}\n");
        out
    }

    /// Renders `EmbedResources.h`, the declarations matching
    /// [`render`](Self::render) in manifest mode.
    pub fn render_declarations(&self) -> String {
        let guard =
            ResourceId::from_raw("EmbedResources").include_guard(&self.config.guard_prefix);
        let mut out = String::new();
        out.push_str(PROVENANCE);
        out.push_str("\n\n");
        out.push_str(&format!("#ifndef {guard}\n#define {guard}\n\n"));
        out.push_str("#include <cstdint>\n\n");
        out.push_str(&format!("namespace {} {{\n", self.config.namespace));
        out.push_str("\tuint64_t EmbeddedResourceCount();\n");
        out.push_str("\tconst char* EmbeddedResourceName(uint64_t index);\n");
        out.push_str(&format!("\tvoid {}();\n", self.config.register_function));
        out.push_str("}\n\n");
        out.push_str(&format!("#endif // {guard}\n"));
        out
    }

    /// Scans the headers directory and (over)writes the aggregator, plus the
    /// declaration header in manifest mode.
    pub fn generate(&self) -> Result<PathBuf, CodegenError> {
        let headers = self.scan()?;
        let dir = self.layout.headers_dir();
        std::fs::create_dir_all(&dir).map_err(|e| CodegenError::Io {
            path: dir,
            source: e,
        })?;
        if self.manifest() {
            write_file(&self.layout.declarations_path(), &self.render_declarations())?;
        }
        let path = self.layout.aggregator_path();
        write_file(&path, &self.render(&headers))?;
        log::info!(
            "wrote {} including {} header(s)",
            path.display(),
            headers.len()
        );
        Ok(path)
    }
}
