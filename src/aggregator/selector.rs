//! Reduction of candidate paths to theme files
//!
//! File candidates pass through unchanged. Directory candidates are reduced
//! by the precedence rule: a root-theme.scss beats everything else in its
//! directory, otherwise every direct *.scss sibling contributes. Candidate
//! kind is recomputed by a stat here, never cached, so a path that
//! disappeared since discovery fails the run.

use std::fs;
use std::path::{Path, PathBuf};

use super::ROOT_THEME_FILE;
use crate::error::{Result, ThemeweldError};

/// Picks the file(s) representing each candidate's theme content
pub struct Selector<'a> {
    base_dir: &'a Path,
}

impl<'a> Selector<'a> {
    pub fn new(base_dir: &'a Path) -> Self {
        Self { base_dir }
    }

    /// Classify each candidate with a single stat and flatten directories
    /// through the directory rule, preserving input order.
    pub fn filter(&self, candidates: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for candidate in candidates {
            let metadata =
                fs::metadata(self.base_dir.join(candidate)).map_err(|e| {
                    ThemeweldError::StatFailed {
                        path: candidate.display().to_string(),
                        reason: e.to_string(),
                    }
                })?;

            if metadata.is_dir() {
                files.extend(self.filter_dir(candidate)?);
            } else {
                files.push(candidate.clone());
            }
        }
        Ok(files)
    }

    /// A directory containing a root theme file contributes exactly that
    /// file; sibling fragments are silently ignored. Otherwise it contributes
    /// every *.scss file directly inside it, never recursing.
    fn filter_dir(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let root_file = dir.join(ROOT_THEME_FILE);
        if self.base_dir.join(&root_file).is_file() {
            return Ok(vec![root_file]);
        }

        let absolute = self.base_dir.join(dir);
        let entries = fs::read_dir(&absolute).map_err(|e| ThemeweldError::DirReadFailed {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ThemeweldError::DirReadFailed {
                path: dir.display().to_string(),
                reason: e.to_string(),
            })?;
            let file_type = entry.file_type().map_err(|e| ThemeweldError::StatFailed {
                path: entry.path().display().to_string(),
                reason: e.to_string(),
            })?;
            if !file_type.is_file() {
                continue;
            }
            if Path::new(&entry.file_name())
                .extension()
                .is_some_and(|ext| ext == "scss")
            {
                files.push(dir.join(entry.file_name()));
            }
        }
        Ok(files)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(temp: &TempDir, rel: &str) {
        let path = temp.path().join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "// fragment\n").unwrap();
    }

    #[test]
    fn test_root_theme_file_wins() {
        let temp = TempDir::new().unwrap();
        write_file(&temp, "themes/ocean/root-theme.scss");
        write_file(&temp, "themes/ocean/buttons.scss");
        write_file(&temp, "themes/ocean/forms.scss");

        let selector = Selector::new(temp.path());
        let files = selector
            .filter(&[PathBuf::from("themes/ocean")])
            .unwrap();

        assert_eq!(files, vec![PathBuf::from("themes/ocean/root-theme.scss")]);
    }

    #[test]
    fn test_siblings_flatten_without_root_file() {
        let temp = TempDir::new().unwrap();
        write_file(&temp, "themes/ocean/buttons.scss");
        write_file(&temp, "themes/ocean/forms.scss");

        let selector = Selector::new(temp.path());
        let mut files = selector
            .filter(&[PathBuf::from("themes/ocean")])
            .unwrap();
        files.sort();

        assert_eq!(
            files,
            vec![
                PathBuf::from("themes/ocean/buttons.scss"),
                PathBuf::from("themes/ocean/forms.scss"),
            ]
        );
    }

    #[test]
    fn test_directory_rule_never_recurses() {
        let temp = TempDir::new().unwrap();
        write_file(&temp, "themes/ocean/buttons.scss");
        write_file(&temp, "themes/ocean/partials/deep.scss");

        let selector = Selector::new(temp.path());
        let files = selector
            .filter(&[PathBuf::from("themes/ocean")])
            .unwrap();

        assert_eq!(files, vec![PathBuf::from("themes/ocean/buttons.scss")]);
    }

    #[test]
    fn test_non_scss_siblings_ignored() {
        let temp = TempDir::new().unwrap();
        write_file(&temp, "themes/ocean/buttons.scss");
        write_file(&temp, "themes/ocean/README.md");
        write_file(&temp, "themes/ocean/tokens.json");

        let selector = Selector::new(temp.path());
        let files = selector
            .filter(&[PathBuf::from("themes/ocean")])
            .unwrap();

        assert_eq!(files, vec![PathBuf::from("themes/ocean/buttons.scss")]);
    }

    #[test]
    fn test_file_candidates_pass_through() {
        let temp = TempDir::new().unwrap();
        write_file(&temp, "themes/corp/scoped-theme.scss");

        let selector = Selector::new(temp.path());
        let files = selector
            .filter(&[PathBuf::from("themes/corp/scoped-theme.scss")])
            .unwrap();

        assert_eq!(
            files,
            vec![PathBuf::from("themes/corp/scoped-theme.scss")]
        );
    }

    #[test]
    fn test_missing_candidate_is_fatal() {
        let temp = TempDir::new().unwrap();

        let selector = Selector::new(temp.path());
        let result = selector.filter(&[PathBuf::from("themes/gone")]);
        assert!(matches!(
            result.unwrap_err(),
            ThemeweldError::StatFailed { .. }
        ));
    }

    #[test]
    fn test_input_order_preserved() {
        let temp = TempDir::new().unwrap();
        write_file(&temp, "a/themes/ocean/root-theme.scss");
        write_file(&temp, "b/themes/ocean/root-theme.scss");

        let selector = Selector::new(temp.path());
        let files = selector
            .filter(&[
                PathBuf::from("b/themes/ocean"),
                PathBuf::from("a/themes/ocean"),
            ])
            .unwrap();

        assert_eq!(
            files,
            vec![
                PathBuf::from("b/themes/ocean/root-theme.scss"),
                PathBuf::from("a/themes/ocean/root-theme.scss"),
            ]
        );
    }
}
