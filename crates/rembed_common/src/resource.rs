//! In-memory view of a resource file.

use std::path::{Component, Path, PathBuf};

use crate::error::ResourceError;
use crate::hash::ContentHash;
use crate::ident::ResourceId;

/// A resource file read fresh from disk.
///
/// Never mutated after loading. The bytes held here are the ones that get
/// formatted into the header and hashed into the fingerprint record, so
/// both always describe the same content.
#[derive(Debug, Clone)]
pub struct Resource {
    path: PathBuf,
    id: ResourceId,
    bytes: Vec<u8>,
}

impl Resource {
    /// Reads a resource from disk.
    ///
    /// Fails with [`ResourceError::PathNotFound`] if nothing exists at
    /// `path`, [`ResourceError::NotAFile`] if it is a directory or other
    /// non-regular file, and [`ResourceError::ResourceRead`] if the read
    /// itself fails.
    pub fn load(path: &Path) -> Result<Self, ResourceError> {
        let id = check_file(path)?;
        let bytes = std::fs::read(path).map_err(|e| ResourceError::ResourceRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            id,
            bytes,
        })
    }

    /// Builds a resource from bytes already in memory.
    pub fn from_bytes(path: &Path, bytes: Vec<u8>) -> Result<Self, ResourceError> {
        let id = ResourceId::from_path(path).ok_or_else(|| ResourceError::InvalidName {
            path: path.to_path_buf(),
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            id,
            bytes,
        })
    }

    /// The path the resource was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The derived identifier.
    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    /// File name without its extension.
    pub fn base_name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Extension without the leading dot, or an empty string.
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Raw content.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for zero-length resources.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Fingerprint of the current content.
    pub fn content_hash(&self) -> ContentHash {
        ContentHash::from_bytes(&self.bytes)
    }

    /// Returns the resource path relative to `root`, `/`-separated.
    ///
    /// Fails with [`ResourceError::PathScope`] rather than falling back to
    /// the absolute path when the resource is not under `root`.
    pub fn relative_to(&self, root: &Path) -> Result<String, ResourceError> {
        relative_path(&self.path, root)
    }
}

/// Validates that `path` names an existing regular file and derives its id.
pub fn check_file(path: &Path) -> Result<ResourceId, ResourceError> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ResourceError::PathNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ResourceError::ResourceRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    if !metadata.is_file() {
        return Err(ResourceError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    ResourceId::from_path(path).ok_or_else(|| ResourceError::InvalidName {
        path: path.to_path_buf(),
    })
}

/// Expresses `path` relative to `root` with `/` separators.
///
/// Both paths are compared lexically after dropping `.` components; no
/// symlink resolution happens.
pub fn relative_path(path: &Path, root: &Path) -> Result<String, ResourceError> {
    let scope_err = || ResourceError::PathScope {
        path: path.to_path_buf(),
        root: root.to_path_buf(),
    };
    let path = strip_cur_dir(path);
    let root = strip_cur_dir(root);
    let rel = path.strip_prefix(&root).map_err(|_| scope_err())?;

    let mut parts = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            _ => return Err(scope_err()),
        }
    }
    if parts.is_empty() {
        return Err(scope_err());
    }
    Ok(parts.join("/"))
}

fn strip_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
