//! Configuration sources (`tsconfig.json` style documents)
//!
//! A source contributes a base directory and an ordered table of path
//! mappings. Only `compilerOptions.baseUrl` and `compilerOptions.paths` are
//! read; everything else in the document is ignored.

mod jsonc;

use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::paths;

use jsonc::strip_jsonc;

/// Errors loading a single configuration source
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("{}: not found", .0.display())]
    Missing(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("{}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{}: top-level value is not an object", .0.display())]
    NotAnObject(PathBuf),
}

/// One path-mapping entry: a pattern key and its ordered target candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMapping {
    pub key: String,
    pub candidates: Vec<String>,
}

impl PathMapping {
    /// The only candidate that is honored. An empty first candidate counts
    /// as no target at all; later candidates are never consulted.
    pub fn first_candidate(&self) -> Option<&str> {
        self.candidates
            .first()
            .map(String::as_str)
            .filter(|candidate| !candidate.is_empty())
    }
}

/// A loaded configuration document.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Absolute path of the document
    pub path: PathBuf,

    /// Directory relative targets are resolved against
    pub base_directory: PathBuf,

    /// Mappings in declaration order
    pub path_mappings: Vec<PathMapping>,
}

impl ConfigSource {
    /// Load a configuration document from disk.
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        if !path.is_file() {
            return Err(SourceError::Missing(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &contents)
    }

    /// Parse document contents as if read from `path`.
    pub fn parse(path: &Path, contents: &str) -> Result<Self, SourceError> {
        let value: Value =
            serde_json::from_str(&strip_jsonc(contents)).map_err(|source| SourceError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if !value.is_object() {
            return Err(SourceError::NotAnObject(path.to_path_buf()));
        }

        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let compiler = value.get("compilerOptions");

        let base_directory = compiler
            .and_then(|c| c.get("baseUrl"))
            .and_then(Value::as_str)
            .map_or_else(
                || paths::normalize(&config_dir),
                |base_url| paths::resolve_against(&config_dir, Path::new(base_url)),
            );

        let path_mappings = compiler
            .and_then(|c| c.get("paths"))
            .and_then(Value::as_object)
            .map(|table| {
                table
                    .iter()
                    .map(|(key, targets)| PathMapping {
                        key: key.clone(),
                        candidates: target_candidates(targets),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            path: path.to_path_buf(),
            base_directory,
            path_mappings,
        })
    }
}

/// Candidates from a mapping value: an array of strings (non-strings dropped)
/// or a single string.
fn target_candidates(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect(),
        Value::String(s) => vec![s.clone()],
        _ => Vec::new(),
    }
}
