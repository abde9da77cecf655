//! tsconfig-alias - path mappings as resolver aliases
//!
//! Translates `compilerOptions.paths` from one or more project configuration
//! files into an ordered find/replace alias list and merges it ahead of the
//! aliases a build tool is already configured with.

pub mod commands;
pub mod config;
pub mod merge;
pub mod paths;
pub mod plugin;
pub mod resolver;
pub mod source;

pub use alias_pattern::{translate, try_translate, Alias, AliasError, Find};
pub use config::{EffectiveOptions, OptionsLayer, PluginOptions};
pub use merge::{merge, ExistingAliases};
pub use plugin::{Enforce, HostConfig, TsconfigAlias, PLUGIN_NAME};
pub use resolver::{resolve, Resolution, Resolver, SourceOutcome};
pub use source::{ConfigSource, SourceError};
