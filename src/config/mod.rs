//! Plugin options
//!
//! Options come from three layers, later layers winning field by field:
//! 1. Built-in defaults
//! 2. Options file (`.tsconfig-alias.toml`)
//! 3. CLI flags

mod defaults;
mod options;

pub use defaults::{BuiltinDefaults, DEFAULT_CONFIG_NAME};
pub use options::{
    ConfigError, EffectiveOptions, OptionsLayer, OptionsOrigin, OptionsSource, PluginOptions,
    OPTIONS_FILE_NAME,
};
