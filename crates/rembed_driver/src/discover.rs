//! Expansion of resource specs into resource files.
//!
//! A spec is a path to either a single file or a directory. Directories are
//! expanded one level deep; anything inside them that is not a regular file
//! (typically a subdirectory) is skipped.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rembed_common::ResourceError;

use crate::report::ResourceFailure;

/// Files found for a list of specs, plus what was skipped or failed.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Resource files in spec order, directory entries sorted by name.
    pub files: Vec<PathBuf>,
    /// Non-file entries found inside expanded directories.
    pub skipped: Vec<PathBuf>,
    /// Specs that could not be resolved.
    pub failures: Vec<ResourceFailure>,
}

/// Resolves a spec against the build root. Absolute specs are kept as-is.
pub fn resolve_spec(spec: &str, build_root: &Path) -> PathBuf {
    let path = Path::new(spec);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        build_root.join(path)
    }
}

/// Expands specs into the list of resource files to process.
///
/// A file reachable through more than one spec is only listed once.
pub fn expand_specs(specs: &[String], build_root: &Path) -> Discovery {
    let mut discovery = Discovery::default();
    let mut seen = HashSet::new();

    for spec in specs {
        let path = resolve_spec(spec, build_root);
        let metadata = match std::fs::metadata(&path) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("path does not exist: {}", path.display());
                discovery.failures.push(ResourceFailure::new(
                    &path,
                    ResourceError::PathNotFound { path: path.clone() }.into(),
                ));
                continue;
            }
            Err(e) => {
                log::warn!("cannot inspect {}: {e}", path.display());
                discovery.failures.push(ResourceFailure::new(
                    &path,
                    ResourceError::ResourceRead {
                        path: path.clone(),
                        source: e,
                    }
                    .into(),
                ));
                continue;
            }
        };

        if metadata.is_file() {
            if seen.insert(path.clone()) {
                discovery.files.push(path);
            }
        } else if metadata.is_dir() {
            expand_directory(&path, &mut discovery, &mut seen);
        } else {
            log::warn!("path is not a file: {}", path.display());
            discovery.failures.push(ResourceFailure::new(
                &path,
                ResourceError::NotAFile { path: path.clone() }.into(),
            ));
        }
    }

    discovery
}

/// Adds the immediate file entries of `dir`, sorted by name.
fn expand_directory(dir: &Path, discovery: &mut Discovery, seen: &mut HashSet<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("cannot list {}: {e}", dir.display());
            discovery.failures.push(ResourceFailure::new(
                dir,
                ResourceError::ResourceRead {
                    path: dir.to_path_buf(),
                    source: e,
                }
                .into(),
            ));
            return;
        }
    };

    let paths = sorted_entries(dir, entries.map(|e| e.map(|e| e.path())));

    for path in paths {
        if path.is_file() {
            if seen.insert(path.clone()) {
                discovery.files.push(path);
            }
        } else {
            log::debug!("skipping non-file entry {}", path.display());
            discovery.skipped.push(path);
        }
    }
}

/// Collects listed paths in name order. Unreadable entries are logged and
/// left out; the rest of the listing is kept.
fn sorted_entries(
    dir: &Path,
    entries: impl Iterator<Item = std::io::Result<PathBuf>>,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => paths.push(path),
            Err(e) => log::warn!("cannot read an entry of {}: {e}", dir.display()),
        }
    }
    paths.sort();
    paths
}
