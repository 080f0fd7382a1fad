//! Cross-platform path utilities for Themeweld
//!
//! Paths are matched and emitted with forward slashes regardless of platform,
//! and all relative-path arithmetic is lexical: the output directory may not
//! exist yet when import paths are computed against it.

use std::path::{Component, Path, PathBuf};

/// Render a path with forward slashes for platform-independent matching
/// and for the emitted manifest.
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Resolve `path` against `base` and normalize the result lexically.
///
/// `base` must be absolute. Absolute inputs are normalized as-is.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_lexically(path)
    } else {
        normalize_lexically(&base.join(path))
    }
}

/// Remove `.` components and fold `..` components without touching the
/// filesystem. A `..` at the root of an absolute path is dropped.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(Component::ParentDir.as_os_str()),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Compute the relative path from `base` to `path`, both absolute and
/// lexically normalized. Falls back to `path` itself when the two share no
/// common prefix (e.g. different drives on Windows).
pub fn relative_from(path: &Path, base: &Path) -> String {
    let path_components: Vec<Component> = path.components().collect();
    let base_components: Vec<Component> = base.components().collect();

    let common = path_components
        .iter()
        .zip(base_components.iter())
        .take_while(|(a, b)| a == b)
        .count();
    if common == 0 {
        return to_forward_slashes(path);
    }

    let mut parts: Vec<String> = Vec::new();
    for _ in common..base_components.len() {
        parts.push("..".to_string());
    }
    for component in &path_components[common..] {
        parts.push(component.as_os_str().to_string_lossy().into_owned());
    }

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}
