//! Lexical path helpers. Nothing here touches the filesystem.

use std::path::{Component, Path, PathBuf};

/// Join `path` onto `base` unless it is already absolute, then normalize.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    normalize(&base.join(path))
}

/// Make `path` absolute relative to the process working directory.
///
/// Falls back to the path as given when the working directory is unavailable.
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return normalize(path);
    }
    match std::env::current_dir() {
        Ok(cwd) => resolve_against(&cwd, path),
        Err(_) => normalize(path),
    }
}

/// Collapse `.` and `..` components.
///
/// `..` at the root is dropped, `..` leading a relative path is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    normalized.pop();
                    depth -= 1;
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            Component::Normal(part) => {
                normalized.push(part);
                depth += 1;
            }
        }
    }

    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}

/// Render a path the way aliases carry it.
pub fn to_alias_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
