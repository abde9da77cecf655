//! Test fixtures for alias resolution
//!
//! - `tsconfig.json`: exact and wildcard mappings, no baseUrl
//! - `tsconfig.sub.json`: a single wildcard mapping under `baseUrl: ./src`
//! - `tsconfig.broken.json`: not parseable as JSON

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Directory holding the fixture configuration files
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Absolute path expected for `relative` under the fixtures directory
pub fn fixture_path(relative: &str) -> String {
    fixtures_dir().join(relative).to_string_lossy().to_string()
}
