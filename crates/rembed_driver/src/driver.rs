//! The embedding pipeline.
//!
//! resource path → staleness check → (if stale) read bytes → format →
//! write header and fingerprint → regenerate the aggregator once at the end
//! if any header changed or the aggregator is missing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rembed_cache::{HashStore, Staleness};
use rembed_codegen::{AggregatorGenerator, HeaderGenerator};
use rembed_common::{ContentHash, Resource, ResourceId};
use rembed_config::{CodegenConfig, RegistrationMode};

use crate::discover::expand_specs;
use crate::error::EmbedError;
use crate::report::{GeneratedEntry, ResourceFailure, RunReport, StatusEntry};

/// Embeds resources into an output directory, one sequential batch at a time.
///
/// Assumes it is the only writer to the output directory for the duration
/// of a run.
pub struct Embedder {
    build_root: PathBuf,
    settings: ContentHash,
    store: HashStore,
    headers: HeaderGenerator,
    aggregator: AggregatorGenerator,
}

impl Embedder {
    /// Creates an embedder writing below `output_dir` and embedding paths
    /// relative to `build_root`.
    pub fn new(config: &CodegenConfig, output_dir: &Path, build_root: &Path) -> Self {
        Self {
            build_root: build_root.to_path_buf(),
            settings: settings_fingerprint(config),
            store: HashStore::new(output_dir),
            headers: HeaderGenerator::new(config, output_dir),
            aggregator: AggregatorGenerator::new(config, output_dir),
        }
    }

    /// Processes every resource reachable from `specs`.
    ///
    /// Failures on individual resources are logged and collected into the
    /// report; the remaining resources are still processed. The only errors
    /// returned are failures to write the aggregator or the settings stamp.
    ///
    /// A missing build root or an empty spec list is a no-op.
    pub fn run(&self, specs: &[String]) -> Result<RunReport, EmbedError> {
        if self.is_noop(specs) {
            return Ok(RunReport::default());
        }

        let settings_changed = !self.store.settings_match(&self.settings);
        if settings_changed {
            log::debug!("codegen settings differ from the recorded ones");
        }

        let discovery = expand_specs(specs, &self.build_root);
        let mut report = RunReport {
            skipped: discovery.skipped,
            failures: discovery.failures,
            ..RunReport::default()
        };
        let mut claimed: HashMap<ResourceId, PathBuf> = HashMap::new();

        for path in discovery.files {
            let resource = match Resource::load(&path) {
                Ok(r) => r,
                Err(e) => {
                    log::warn!("{e}");
                    report.failures.push(ResourceFailure::new(&path, e.into()));
                    continue;
                }
            };
            if let Some(other) = claimed.insert(resource.id().clone(), path.clone()) {
                log::warn!(
                    "{} and {} both map to '{}'; the later one overwrites the earlier",
                    other.display(),
                    path.display(),
                    resource.id()
                );
            }

            let state = self.classify(&resource, settings_changed);
            if !state.is_stale() {
                log::debug!("{} is up to date", path.display());
                report.up_to_date.push(path);
                continue;
            }

            match self.embed(&resource) {
                Ok(header) => {
                    log::info!("embedded {} ({})", path.display(), state.reason());
                    report.generated.push(GeneratedEntry {
                        source: path,
                        header,
                        reason: state.reason(),
                    });
                }
                Err(e) => {
                    log::warn!("failed to embed {}: {e}", path.display());
                    // Whatever header is left behind no longer matches the
                    // record, so drop the record and retry next run.
                    if let Err(forget) = self.store.forget(resource.id()) {
                        log::warn!("{forget}");
                    }
                    report.failures.push(ResourceFailure::new(&path, e));
                }
            }
        }

        if settings_changed && report.changed() {
            self.store.record_settings(&self.settings)?;
        }

        if report.changed() || self.aggregator.needs_rebuild()? {
            report.aggregator = Some(self.aggregator.generate()?);
        } else {
            log::debug!("no headers changed; aggregator left untouched");
        }
        Ok(report)
    }

    /// Reports which resources a run would regenerate, without writing.
    pub fn status(&self, specs: &[String]) -> (Vec<StatusEntry>, Vec<ResourceFailure>) {
        if self.is_noop(specs) {
            return (Vec::new(), Vec::new());
        }

        let settings_changed = !self.store.settings_match(&self.settings);
        let discovery = expand_specs(specs, &self.build_root);
        let mut failures = discovery.failures;
        let mut entries = Vec::new();
        for path in discovery.files {
            match Resource::load(&path) {
                Ok(resource) => {
                    let state = self.classify(&resource, settings_changed);
                    entries.push(StatusEntry {
                        id: resource.id().to_string(),
                        stale: state.is_stale(),
                        reason: state.reason(),
                        source: path,
                    });
                }
                Err(e) => failures.push(ResourceFailure::new(&path, e.into())),
            }
        }
        (entries, failures)
    }

    /// Content staleness, widened to "stale" for every fresh resource when
    /// the codegen settings changed since the headers were written.
    fn classify(&self, resource: &Resource, settings_changed: bool) -> Staleness {
        match self.store.check(resource) {
            Staleness::Fresh if settings_changed => Staleness::SettingsChanged,
            state => state,
        }
    }

    /// Writes the header, then the fingerprint. The record is only written
    /// once the header is on disk, so a failed header never looks fresh.
    fn embed(&self, resource: &Resource) -> Result<PathBuf, EmbedError> {
        let header = self.headers.write(resource, &self.build_root)?;
        self.store.record_resource(resource)?;
        Ok(header.path)
    }

    fn is_noop(&self, specs: &[String]) -> bool {
        if specs.is_empty() {
            log::info!("no resources to embed");
            return true;
        }
        if !self.build_root.is_dir() {
            log::info!(
                "build root {} is not a directory; nothing to do",
                self.build_root.display()
            );
            return true;
        }
        false
    }
}

/// Fingerprint of every codegen option that shapes generated text.
fn settings_fingerprint(config: &CodegenConfig) -> ContentHash {
    let registration = match config.registration {
        RegistrationMode::Manifest => "manifest",
        RegistrationMode::StaticInit => "static-init",
    };
    let bytes_per_line = config.bytes_per_line.to_string();
    let fields: [&str; 8] = [
        &config.namespace,
        &config.registry_include,
        &config.foundation_include,
        &config.registry_call,
        &config.register_function,
        &config.guard_prefix,
        &bytes_per_line,
        registration,
    ];
    ContentHash::from_bytes(fields.join("\n").as_bytes())
}
