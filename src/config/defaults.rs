//! Built-in option defaults (layer 1)

use serde::{Deserialize, Serialize};

use super::options::OptionsLayer;

/// Conventional configuration file consulted when no names are given
pub const DEFAULT_CONFIG_NAME: &str = "tsconfig.json";

/// Built-in default option values
///
/// `root` has no static default; it falls back to the working directory when
/// the effective options are built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltinDefaults {
    /// Configuration names consulted in order (default: `["tsconfig.json"]`)
    pub config_names: Vec<String>,
}

impl Default for BuiltinDefaults {
    fn default() -> Self {
        Self {
            config_names: vec![DEFAULT_CONFIG_NAME.to_string()],
        }
    }
}

impl BuiltinDefaults {
    /// The defaults as the lowest options layer
    pub fn to_layer(&self) -> OptionsLayer {
        OptionsLayer {
            root: None,
            config_names: Some(self.config_names.clone()),
        }
    }
}
