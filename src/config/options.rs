//! Effective plugin options with provenance
//!
//! Options are layered: built-in defaults, then an options file
//! (`.tsconfig-alias.toml`), then CLI flags. Each field takes the value of
//! the highest layer that sets it.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::defaults::BuiltinDefaults;
use crate::paths;

/// Options file looked up in the working directory
pub const OPTIONS_FILE_NAME: &str = ".tsconfig-alias.toml";

/// Options recognized by the alias plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginOptions {
    /// Directory configuration names are resolved against
    pub root: PathBuf,

    /// Configuration names consulted in order
    pub config_names: Vec<String>,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self {
            root: paths::absolutize(Path::new(".")),
            config_names: BuiltinDefaults::default().config_names,
        }
    }
}

impl PluginOptions {
    pub fn new(root: impl Into<PathBuf>, config_names: Vec<String>) -> Self {
        Self {
            root: root.into(),
            config_names,
        }
    }

    /// Reject blank configuration names
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.config_names.iter().any(|n| n.trim().is_empty()) {
            return Err(ConfigError::BlankConfigName);
        }
        Ok(())
    }
}

/// One layer of option values; unset fields defer to lower layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsLayer {
    pub root: Option<PathBuf>,
    pub config_names: Option<Vec<String>>,
}

impl OptionsLayer {
    /// Read an options file. A relative `root` is anchored at the file's
    /// directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut layer: OptionsLayer =
            toml::from_str(&contents).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(root) = layer.root.take() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            layer.root = Some(paths::resolve_against(base, &root));
        }
        Ok(layer)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none() && self.config_names.is_none()
    }

    /// Fields set here win; the rest come from `lower`.
    pub fn over(self, lower: OptionsLayer) -> OptionsLayer {
        OptionsLayer {
            root: self.root.or(lower.root),
            config_names: self.config_names.or(lower.config_names),
        }
    }
}

/// Origin of an options layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OptionsOrigin {
    Builtin,
    File,
    Cli,
}

/// A contributing options layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsSource {
    pub origin: OptionsOrigin,

    /// File path (None for builtin/cli)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Options after all layers are combined
#[derive(Debug, Clone, Serialize)]
pub struct EffectiveOptions {
    pub options: PluginOptions,

    /// Contributing layers, lowest first
    pub sources: Vec<OptionsSource>,
}

impl EffectiveOptions {
    /// Combine the builtin defaults, `options_file` (when it exists) and
    /// `cli` overrides. A relative `root` from the CLI is taken relative to
    /// the working directory.
    pub fn build(options_file: Option<&Path>, cli: Option<OptionsLayer>) -> Result<Self, ConfigError> {
        let mut layer = BuiltinDefaults::default().to_layer();
        let mut sources = vec![OptionsSource {
            origin: OptionsOrigin::Builtin,
            path: None,
        }];

        if let Some(path) = options_file.filter(|p| p.exists()) {
            layer = OptionsLayer::from_file(path)?.over(layer);
            sources.push(OptionsSource {
                origin: OptionsOrigin::File,
                path: Some(path.to_path_buf()),
            });
        }

        if let Some(cli) = cli.filter(|c| !c.is_empty()) {
            layer = cli.over(layer);
            sources.push(OptionsSource {
                origin: OptionsOrigin::Cli,
                path: None,
            });
        }

        let options = PluginOptions {
            root: paths::absolutize(layer.root.as_deref().unwrap_or_else(|| Path::new("."))),
            config_names: layer.config_names.unwrap_or_default(),
        };
        options.validate()?;

        Ok(Self { options, sources })
    }

    /// Build from the options file in `dir`, if there is one.
    pub fn discover(dir: &Path, cli: Option<OptionsLayer>) -> Result<Self, ConfigError> {
        let candidate = dir.join(OPTIONS_FILE_NAME);
        Self::build(Some(candidate.as_path()), cli)
    }
}

/// Option loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("{}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("config_names entries cannot be empty")]
    BlankConfigName,
}
