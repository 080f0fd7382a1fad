//! Candidate discovery via glob expansion
//!
//! The locator walks the base directory once per pattern and matches each
//! entry's forward-slash-normalized relative path with wax. Matches come back
//! in traversal order; nothing downstream may depend on that order for
//! correctness, only for keeping the manifest in discovery order.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use super::{DEPENDENCY_DIR, SCOPED_THEME_FILE};
use crate::config::AggregateOptions;
use crate::error::{Result, ThemeweldError};
use crate::path_utils;

/// Expands glob patterns into candidate paths relative to the base directory
pub struct Locator<'a> {
    base_dir: &'a Path,
    exclude: &'a [String],
}

impl<'a> Locator<'a> {
    pub fn new(base_dir: &'a Path, exclude: &'a [String]) -> Self {
        Self { base_dir, exclude }
    }

    /// Expand a single glob pattern, removing matches that also satisfy any
    /// exclude pattern. A trailing `/` restricts matches to directories.
    /// Zero matches is an empty vector, not an error.
    pub fn find(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let (expression, directories_only) = match pattern.strip_suffix('/') {
            Some(stripped) => (stripped, true),
            None => (pattern, false),
        };

        let glob = compile(expression)?;
        let excludes = self
            .exclude
            .iter()
            .map(|p| compile(p))
            .collect::<Result<Vec<Glob>>>()?;

        let mut matches = Vec::new();
        for entry in WalkDir::new(self.base_dir).follow_links(false) {
            let entry = entry.map_err(|e| ThemeweldError::ScanFailed {
                path: self.base_dir.display().to_string(),
                reason: e.to_string(),
            })?;

            if directories_only && !entry.file_type().is_dir() {
                continue;
            }

            let relative = match entry.path().strip_prefix(self.base_dir) {
                Ok(relative) if !relative.as_os_str().is_empty() => relative,
                // The walk root itself never matches a pattern.
                _ => continue,
            };

            let normalized = path_utils::to_forward_slashes(relative);
            let candidate = CandidatePath::from(normalized.as_str());
            if glob.matched(&candidate).is_none() {
                continue;
            }
            if excludes.iter().any(|ex| ex.matched(&candidate).is_some()) {
                continue;
            }

            matches.push(relative.to_path_buf());
        }

        Ok(matches)
    }

    /// Expand every configured source, concatenated in fixed order: the
    /// packaged theme directory (if installed), the default theme-directory
    /// pattern, the user include patterns, then the scoped-theme patterns.
    pub fn locate_all(&self, options: &AggregateOptions) -> Result<Vec<PathBuf>> {
        let mut candidates = Vec::new();

        if let Some(theme) = &options.theme {
            // An externally-published theme package named after the theme is
            // pulled in wholesale, ahead of everything else.
            let packaged = Path::new(DEPENDENCY_DIR).join(theme);
            if self.base_dir.join(&packaged).is_dir() {
                candidates.push(packaged);
            }

            candidates.extend(self.find(&format!("**/themes/{}/", theme))?);
        }

        for pattern in &options.include {
            candidates.extend(self.find(pattern)?);
        }

        for name in &options.scoped {
            candidates.extend(self.find(&format!(
                "{}/**/themes/{}/{}",
                DEPENDENCY_DIR, name, SCOPED_THEME_FILE
            ))?);
            candidates.extend(self.find(&format!("themes/{}/{}", name, SCOPED_THEME_FILE))?);
        }

        Ok(candidates)
    }
}

fn compile(pattern: &str) -> Result<Glob<'_>> {
    Glob::new(pattern).map_err(|e| ThemeweldError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}
