//! On-disk layout of everything rembed writes below the output directory.
//!
//! ```text
//! <output>/EmbedResources/<id>.h
//! <output>/EmbedResources/EmbedResources.cxx
//! <output>/EmbedResources/EmbedResources.h
//! <output>/EmbedResources/Hashes/<id>.hash
//! <output>/EmbedResources/Hashes/codegen.settings
//! ```

use std::path::{Path, PathBuf};

use crate::ident::ResourceId;

/// Subdirectory of the output directory holding generated headers.
const HEADERS_SUBDIR: &str = "EmbedResources";

/// Subdirectory of the headers directory holding fingerprint sidecars.
const HASHES_SUBDIR: &str = "Hashes";

/// File name of the aggregator translation unit.
pub const AGGREGATOR_FILE: &str = "EmbedResources.cxx";

/// File name of the header declaring the aggregator's functions.
pub const DECLARATIONS_FILE: &str = "EmbedResources.h";

/// Suffix of generated header files.
pub const HEADER_EXT: &str = "h";

/// Suffix of fingerprint sidecar files.
pub const HASH_EXT: &str = "hash";

/// File recording the codegen settings the current headers were rendered with.
const SETTINGS_FILE: &str = "codegen.settings";

/// Resolves output paths relative to a single output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    output_dir: PathBuf,
}

impl OutputLayout {
    /// Creates a layout rooted at the given output directory.
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
        }
    }

    /// The output directory this layout is rooted at.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Directory holding generated headers and the aggregator.
    pub fn headers_dir(&self) -> PathBuf {
        self.output_dir.join(HEADERS_SUBDIR)
    }

    /// Directory holding fingerprint sidecars.
    pub fn hashes_dir(&self) -> PathBuf {
        self.headers_dir().join(HASHES_SUBDIR)
    }

    /// Path of the generated header for a resource.
    pub fn header_path(&self, id: &ResourceId) -> PathBuf {
        self.headers_dir().join(format!("{id}.{HEADER_EXT}"))
    }

    /// Path of the fingerprint sidecar for a resource.
    pub fn hash_path(&self, id: &ResourceId) -> PathBuf {
        self.hashes_dir().join(format!("{id}.{HASH_EXT}"))
    }

    /// Path of the codegen settings stamp.
    pub fn settings_path(&self) -> PathBuf {
        self.hashes_dir().join(SETTINGS_FILE)
    }

    /// Path of the aggregator translation unit.
    pub fn aggregator_path(&self) -> PathBuf {
        self.headers_dir().join(AGGREGATOR_FILE)
    }

    /// Path of the header declaring the manifest functions.
    pub fn declarations_path(&self) -> PathBuf {
        self.headers_dir().join(DECLARATIONS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_rooted_at_output() {
        let layout = OutputLayout::new(Path::new("/out"));
        let id = ResourceId::from_raw("iconpng");
        assert_eq!(layout.headers_dir(), Path::new("/out/EmbedResources"));
        assert_eq!(layout.hashes_dir(), Path::new("/out/EmbedResources/Hashes"));
        assert_eq!(
            layout.header_path(&id),
            Path::new("/out/EmbedResources/iconpng.h")
        );
        assert_eq!(
            layout.hash_path(&id),
            Path::new("/out/EmbedResources/Hashes/iconpng.hash")
        );
        assert_eq!(
            layout.aggregator_path(),
            Path::new("/out/EmbedResources/EmbedResources.cxx")
        );
        assert_eq!(
            layout.settings_path(),
            Path::new("/out/EmbedResources/Hashes/codegen.settings")
        );
        assert_eq!(
            layout.declarations_path(),
            Path::new("/out/EmbedResources/EmbedResources.h")
        );
    }

    #[test]
    fn header_name_keeps_raw_identifier() {
        let layout = OutputLayout::new(Path::new("out"));
        let id = ResourceId::from_raw("a-bico");
        assert!(layout.header_path(&id).ends_with("EmbedResources/a-bico.h"));
    }
}
