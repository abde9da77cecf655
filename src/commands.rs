//! Command outputs for the `tsconfig-alias` CLI
//!
//! Each command produces a structured value with a JSON form and, where the
//! CLI offers one, a human-readable form. The binary only prints them.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use alias_pattern::Alias;

use crate::config::PluginOptions;
use crate::merge::{merge, ExistingAliases};
use crate::plugin::{HostConfig, TsconfigAlias};
use crate::resolver::{Resolution, Resolver, SourceOutcome, SourceReport};

/// Errors reading a command's input file
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("{}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read and deserialize a JSON document.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CommandError> {
    let contents = fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CommandError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Output of `resolve`
#[derive(Debug, Clone)]
pub struct ResolveOutput {
    pub project_root: PathBuf,
    pub resolution: Resolution,
}

impl ResolveOutput {
    pub fn run(options: &PluginOptions) -> Self {
        let resolver = Resolver::new(&options.root);
        let resolution = resolver.resolve_with_report(&options.config_names);
        Self {
            project_root: resolver.project_root().to_path_buf(),
            resolution,
        }
    }

    /// The alias list alone, as a host would consume it
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.resolution.aliases)
    }

    /// Format as human-readable text
    pub fn to_human(&self) -> String {
        let mut output = format!("Project root: {}\n\nSources:\n", self.project_root.display());
        for report in &self.resolution.sources {
            output.push_str(&format!("  {}\n", describe_source(report)));
        }
        output.push('\n');

        if self.resolution.aliases.is_empty() {
            output.push_str("No aliases resolved.");
            return output;
        }

        output.push_str(&format!(
            "Aliases ({} total, in precedence order):",
            self.resolution.aliases.len()
        ));
        for alias in &self.resolution.aliases {
            output.push_str(&format!("\n  {} -> {}", alias.find, alias.replacement));
        }
        output
    }
}

fn describe_source(report: &SourceReport) -> String {
    match &report.outcome {
        SourceOutcome::Loaded { aliases } => {
            format!("{} ({}): {} alias(es)", report.name, report.path.display(), aliases)
        }
        SourceOutcome::Missing => format!("{} ({}): not found", report.name, report.path.display()),
        SourceOutcome::Invalid { reason } => format!("{}: skipped, {}", report.name, reason),
    }
}

/// `merge`: resolved aliases ahead of the aliases stored at `existing_path`.
pub fn merge_with_file(
    options: &PluginOptions,
    existing_path: &Path,
) -> Result<Vec<Alias>, CommandError> {
    let existing: ExistingAliases = read_json(existing_path)?;
    let resolved = Resolver::new(&options.root).resolve(&options.config_names);
    Ok(merge(Some(&existing), &resolved))
}

/// `apply`: the host configuration at `host_config_path` after the config hook.
pub fn apply_to_file(
    options: PluginOptions,
    host_config_path: &Path,
) -> Result<HostConfig, CommandError> {
    let config: HostConfig = read_json(host_config_path)?;
    Ok(TsconfigAlias::new(options).apply(config))
}

/// Output of `match`: the first alias that rewrites a specifier
#[derive(Debug, Clone, Serialize)]
pub struct MatchOutput {
    pub specifier: String,
    pub matched: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<Alias>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<String>,
}

impl MatchOutput {
    /// Resolve aliases for `options` and try them against `specifier`.
    pub fn run(options: &PluginOptions, specifier: &str) -> Self {
        let aliases = Resolver::new(&options.root).resolve(&options.config_names);
        Self::find(&aliases, specifier)
    }

    /// Try `aliases` in order; the first one that applies wins.
    pub fn find(aliases: &[Alias], specifier: &str) -> Self {
        let hit = aliases
            .iter()
            .find_map(|alias| alias.apply(specifier).map(|rewritten| (alias, rewritten)));

        match hit {
            Some((alias, rewritten)) => Self {
                specifier: specifier.to_string(),
                matched: true,
                alias: Some(alias.clone()),
                resolved: Some(rewritten),
            },
            None => Self {
                specifier: specifier.to_string(),
                matched: false,
                alias: None,
                resolved: None,
            },
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Format as human-readable text
    pub fn to_human(&self) -> String {
        match (&self.alias, &self.resolved) {
            (Some(alias), Some(resolved)) => {
                format!("{}\n  via {} -> {}", resolved, alias.find, alias.replacement)
            }
            _ => format!("No alias matches '{}'.", self.specifier),
        }
    }
}
