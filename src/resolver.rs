//! Alias resolution across configuration sources
//!
//! Sources are read in caller order. Missing or malformed sources contribute
//! nothing. The aggregate is stable-sorted so longer (more specific) finds
//! come first and equal lengths keep declaration order.

use alias_pattern::{try_translate, Alias};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::paths;
use crate::source::{ConfigSource, SourceError};

/// What a single configuration name contributed
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SourceOutcome {
    /// Loaded; `aliases` entries were produced from it
    Loaded { aliases: usize },
    /// No file at the resolved path
    Missing,
    /// File exists but could not be used
    Invalid { reason: String },
}

/// Per-source record of a resolution run
#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    pub name: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: SourceOutcome,
}

/// Resolved aliases plus how each source fared
#[derive(Debug, Clone)]
pub struct Resolution {
    pub aliases: Vec<Alias>,
    pub sources: Vec<SourceReport>,
}

/// Resolves configuration names under a project root.
#[derive(Debug, Clone)]
pub struct Resolver {
    project_root: PathBuf,
}

impl Resolver {
    /// A relative root is taken relative to the working directory.
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            project_root: paths::absolutize(project_root.as_ref()),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Absolute location of a configuration name.
    pub fn source_path(&self, config_name: &str) -> PathBuf {
        paths::resolve_against(&self.project_root, Path::new(config_name))
    }

    /// Resolve `config_names` in order and sort the aggregate by specificity.
    pub fn resolve<S: AsRef<str>>(&self, config_names: &[S]) -> Vec<Alias> {
        self.resolve_with_report(config_names).aliases
    }

    /// Like [`Resolver::resolve`], also reporting each source's outcome.
    pub fn resolve_with_report<S: AsRef<str>>(&self, config_names: &[S]) -> Resolution {
        let mut aliases = Vec::new();
        let mut sources = Vec::with_capacity(config_names.len());

        for name in config_names {
            let name = name.as_ref();
            let path = self.source_path(name);

            let outcome = match ConfigSource::load(&path) {
                Ok(source) => {
                    let before = aliases.len();
                    aliases.extend(source_aliases(&source));
                    let produced = aliases.len() - before;
                    debug!(config = %path.display(), aliases = produced, "loaded path mappings");
                    SourceOutcome::Loaded { aliases: produced }
                }
                Err(SourceError::Missing(_)) => {
                    debug!(config = %path.display(), "config source not found, skipping");
                    SourceOutcome::Missing
                }
                Err(e) => {
                    debug!(error = %e, "config source unusable, skipping");
                    SourceOutcome::Invalid {
                        reason: e.to_string(),
                    }
                }
            };

            sources.push(SourceReport {
                name: name.to_string(),
                path,
                outcome,
            });
        }

        sort_by_specificity(&mut aliases);

        Resolution { aliases, sources }
    }
}

/// Resolve `config_names` under `project_root`.
pub fn resolve<S: AsRef<str>>(project_root: &Path, config_names: &[S]) -> Vec<Alias> {
    Resolver::new(project_root).resolve(config_names)
}

/// Translate every usable mapping of a loaded source, in declaration order.
pub fn source_aliases(source: &ConfigSource) -> Vec<Alias> {
    source
        .path_mappings
        .iter()
        .filter_map(|mapping| {
            let Some(candidate) = mapping.first_candidate() else {
                trace!(key = %mapping.key, "mapping has no target, skipping");
                return None;
            };
            let target = paths::resolve_against(&source.base_directory, Path::new(candidate));
            match try_translate(&mapping.key, &paths::to_alias_string(&target)) {
                Ok(alias) => {
                    trace!(find = %alias.find, replacement = %alias.replacement, "translated mapping");
                    Some(alias)
                }
                Err(e) => {
                    debug!(key_len = mapping.key.len(), error = %e, "mapping key unusable, skipping");
                    None
                }
            }
        })
        .collect()
}

/// Stable sort, longest `find` first.
pub fn sort_by_specificity(aliases: &mut [Alias]) {
    aliases.sort_by(|a, b| b.specificity().cmp(&a.specificity()));
}
