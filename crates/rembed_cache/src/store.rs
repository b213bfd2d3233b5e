//! Sidecar fingerprint records and staleness checks.
//!
//! Each record is a plain-text file holding exactly the hex digest of the
//! resource content at the time its header was last generated, stored at
//! `<output>/EmbedResources/Hashes/<id>.hash`. Records for resources that
//! were later removed are left in place.
//!
//! A second record, `codegen.settings`, holds a fingerprint of the codegen
//! options the headers were rendered with. When it differs, every header is
//! stale regardless of content.

use std::path::Path;

use rembed_common::resource::check_file;
use rembed_common::{ContentHash, OutputLayout, Resource, ResourceId};

use crate::error::CacheError;

/// Outcome of comparing a resource against its generated outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staleness {
    /// No header has been generated for the resource yet.
    MissingHeader,
    /// A header exists but there is no readable fingerprint record.
    MissingRecord,
    /// The content is unchanged but the headers were rendered with
    /// different codegen settings.
    SettingsChanged,
    /// The recorded fingerprint differs from the current content.
    Changed {
        /// Fingerprint from the record.
        previous: ContentHash,
        /// Fingerprint of the current content.
        current: ContentHash,
    },
    /// The recorded fingerprint matches the current content.
    Fresh,
}

impl Staleness {
    /// Returns `true` if the header must be regenerated.
    pub fn is_stale(&self) -> bool {
        !matches!(self, Self::Fresh)
    }

    /// Short human-readable reason, used in logs and `status` output.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingHeader => "header missing",
            Self::MissingRecord => "hash record missing",
            Self::SettingsChanged => "codegen settings changed",
            Self::Changed { .. } => "content changed",
            Self::Fresh => "up to date",
        }
    }
}

/// Fingerprint store rooted at an output directory.
pub struct HashStore {
    layout: OutputLayout,
}

impl HashStore {
    /// Creates a store for the given output directory.
    pub fn new(output_dir: &Path) -> Self {
        Self {
            layout: OutputLayout::new(output_dir),
        }
    }

    /// The output layout this store reads and writes.
    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// Ensures the sidecar directory exists.
    pub fn ensure_dirs(&self) -> Result<(), CacheError> {
        let dir = self.layout.hashes_dir();
        std::fs::create_dir_all(&dir).map_err(|e| CacheError::Io {
            path: dir,
            source: e,
        })
    }

    /// Reads the stored fingerprint for a resource.
    ///
    /// Returns `None` if the record is missing, unreadable, or does not hold
    /// a well-formed digest.
    pub fn load_record(&self, id: &ResourceId) -> Option<ContentHash> {
        let content = std::fs::read_to_string(self.layout.hash_path(id)).ok()?;
        content.parse().ok()
    }

    /// Deletes the record for a resource so the next run regenerates it.
    /// A missing record is not an error.
    pub fn forget(&self, id: &ResourceId) -> Result<(), CacheError> {
        let path = self.layout.hash_path(id);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CacheError::Io { path, source: e }),
        }
    }

    /// Returns `true` if the stored settings stamp equals `settings`.
    /// A missing or corrupt stamp never matches.
    pub fn settings_match(&self, settings: &ContentHash) -> bool {
        std::fs::read_to_string(self.layout.settings_path())
            .ok()
            .and_then(|s| s.parse::<ContentHash>().ok())
            .is_some_and(|stored| stored == *settings)
    }

    /// Writes the settings stamp.
    pub fn record_settings(&self, settings: &ContentHash) -> Result<(), CacheError> {
        self.ensure_dirs()?;
        let path = self.layout.settings_path();
        std::fs::write(&path, settings.to_string()).map_err(|e| CacheError::Io {
            path: path.clone(),
            source: e,
        })
    }

    /// Classifies an already-loaded resource.
    pub fn check(&self, resource: &Resource) -> Staleness {
        let id = resource.id();
        if !self.layout.header_path(id).is_file() {
            return Staleness::MissingHeader;
        }
        let Some(previous) = self.load_record(id) else {
            return Staleness::MissingRecord;
        };
        let current = resource.content_hash();
        if previous == current {
            Staleness::Fresh
        } else {
            Staleness::Changed { previous, current }
        }
    }

    /// Returns `true` if the resource at `resource_path` needs regenerating.
    ///
    /// The resource content is only read when both a header and a record
    /// exist; otherwise the answer is known from the output directory alone.
    pub fn is_stale(&self, resource_path: &Path) -> Result<bool, CacheError> {
        let id = check_file(resource_path)?;
        if !self.layout.header_path(&id).is_file() || self.load_record(&id).is_none() {
            return Ok(true);
        }
        let resource = Resource::load(resource_path)?;
        Ok(self.check(&resource).is_stale())
    }

    /// Reads the resource at `resource_path` and records its fingerprint.
    pub fn record(&self, resource_path: &Path) -> Result<ContentHash, CacheError> {
        let resource = Resource::load(resource_path)?;
        self.record_resource(&resource)
    }

    /// Writes (or overwrites) the fingerprint record for a loaded resource.
    pub fn record_resource(&self, resource: &Resource) -> Result<ContentHash, CacheError> {
        self.ensure_dirs()?;
        let hash = resource.content_hash();
        let path = self.layout.hash_path(resource.id());
        std::fs::write(&path, hash.to_string()).map_err(|e| CacheError::Io {
            path: path.clone(),
            source: e,
        })?;
        log::debug!("recorded {hash} for {}", resource.id());
        Ok(hash)
    }
}
