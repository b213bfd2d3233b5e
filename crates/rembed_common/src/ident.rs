//! Identifiers derived from resource file names.

use std::fmt;
use std::path::Path;

/// The identifier derived from a resource's file name.
///
/// Built from the file stem with the extension appended without a
/// separator: `icon.png` becomes `iconpng`, `archive.tar.gz` becomes
/// `archive.targz`. The same identifier keys the generated header file, the
/// fingerprint sidecar, and (after [`ResourceId::safe`]) the generated type.
///
/// Two resources in different directories with the same file name map to the
/// same identifier and overwrite each other's outputs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    /// Derives the identifier from a path's final component.
    ///
    /// Returns `None` if the path has no file name (e.g. `/` or `..`).
    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_name()?;
        let stem = path.file_stem()?.to_string_lossy();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy())
            .unwrap_or_default();
        Some(Self(format!("{stem}{ext}")))
    }

    /// Wraps an already-derived identifier, e.g. a header file stem found
    /// while scanning the output directory.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the identifier as a valid C++ type name.
    ///
    /// Hyphens (and any other character not allowed in an identifier) become
    /// underscores; a leading digit gets an underscore prefix.
    pub fn safe(&self) -> String {
        let mut out: String = self
            .0
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
            out.insert(0, '_');
        }
        out
    }

    /// Returns the include guard token for the generated header.
    ///
    /// The result contains only uppercase ASCII letters, digits and
    /// underscores.
    pub fn include_guard(&self, prefix: &str) -> String {
        format!("{prefix}{}_H", self.0)
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(path: &str) -> ResourceId {
        ResourceId::from_path(Path::new(path)).unwrap()
    }

    #[test]
    fn stem_and_extension_concatenated() {
        assert_eq!(id("/project/assets/icon.png").as_str(), "iconpng");
    }

    #[test]
    fn only_last_extension_is_split() {
        assert_eq!(id("archive.tar.gz").as_str(), "archive.targz");
    }

    #[test]
    fn no_extension() {
        assert_eq!(id("assets/LICENSE").as_str(), "LICENSE");
    }

    #[test]
    fn dotfile_keeps_leading_dot() {
        assert_eq!(id("assets/.hidden").as_str(), ".hidden");
    }

    #[test]
    fn no_file_name() {
        assert!(ResourceId::from_path(Path::new("/")).is_none());
        assert!(ResourceId::from_path(Path::new("..")).is_none());
    }

    #[test]
    fn safe_replaces_hyphens() {
        let rid = id("my-icon.png");
        assert_eq!(rid.as_str(), "my-iconpng");
        assert_eq!(rid.safe(), "my_iconpng");
    }

    #[test]
    fn safe_handles_other_punctuation_and_digits() {
        assert_eq!(id("archive.tar.gz").safe(), "archive_targz");
        assert_eq!(id("9lives.wav").safe(), "_9liveswav");
        assert_eq!(id(".hidden").safe(), "_hidden");
    }

    #[test]
    fn include_guard_charset() {
        let guard = id("my-icon.png").include_guard("CODEGEN_");
        assert_eq!(guard, "CODEGEN_MY_ICONPNG_H");
        assert!(guard
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'));
    }

    #[test]
    fn include_guard_normalizes_prefix() {
        assert_eq!(id("a.b").include_guard("gen-"), "GEN_AB_H");
    }

    #[test]
    fn display_is_raw() {
        assert_eq!(id("a-b.ico").to_string(), "a-bico");
    }
}
