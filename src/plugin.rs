//! Build-tool plugin integration
//!
//! The host calls the `config` hook before its own alias resolution. The hook
//! resolves path mappings and installs `merge(existing, resolved)` as the
//! host's alias configuration.

use alias_pattern::Alias;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use tracing::debug;

use crate::config::PluginOptions;
use crate::merge::{merge, ExistingAliases};
use crate::resolver::Resolver;

/// Name the plugin registers under
pub const PLUGIN_NAME: &str = "vite-plugin-simple-tsconfig-alias";

/// When the host runs the plugin relative to its core plugins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforce {
    Pre,
    Post,
}

impl fmt::Display for Enforce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pre => write!(f, "pre"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// Host configuration document. Only `resolve.alias` is interpreted; every
/// other key is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolve: Option<ResolveConfig>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The host's `resolve` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolveConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<ExistingAliases>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The tsconfig alias plugin
#[derive(Debug, Clone)]
pub struct TsconfigAlias {
    options: PluginOptions,
}

impl Default for TsconfigAlias {
    fn default() -> Self {
        Self::new(PluginOptions::default())
    }
}

impl TsconfigAlias {
    pub fn new(options: PluginOptions) -> Self {
        Self { options }
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    pub fn enforce(&self) -> Enforce {
        Enforce::Pre
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }

    /// Aliases resolved from the configured sources.
    pub fn aliases(&self) -> Vec<Alias> {
        Resolver::new(&self.options.root).resolve(&self.options.config_names)
    }

    /// `config` hook: install the merged alias list into `config`.
    pub fn config(&self, config: &mut HostConfig) {
        let resolved = self.aliases();
        let resolve = config.resolve.get_or_insert_with(ResolveConfig::default);
        let merged = merge(resolve.alias.as_ref(), &resolved);
        debug!(
            resolved = resolved.len(),
            total = merged.len(),
            "installed resolver aliases"
        );
        resolve.alias = Some(ExistingAliases::List(merged));
    }

    /// Pure form of [`TsconfigAlias::config`].
    pub fn apply(&self, mut config: HostConfig) -> HostConfig {
        self.config(&mut config);
        config
    }
}
