//! Aggregation options and configuration file handling
//!
//! Options are built by layering CLI flags over an optional JSON config file
//! over built-in defaults. Validation is a typed result so the CLI layer
//! decides how to exit on misconfiguration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, ThemeweldError};

/// Conventional config filename looked up in the base directory
pub const CONFIG_FILENAME: &str = "themeweld.config.json";

/// Default directory the manifest is written into
pub const DEFAULT_OUTPUT_DIR: &str = "generated-themes";

/// Default header text prepended to every manifest
pub const DEFAULT_DISCLAIMER: &str = include_str!("disclaimer.scss");

/// Deserialized form of themeweld.config.json
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeConfigFile {
    pub theme: Option<String>,
    #[serde(default)]
    pub scoped: Vec<String>,
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    pub output_dir: Option<PathBuf>,
}

impl ThemeConfigFile {
    /// Load a config file from an explicit path. The file must exist and parse.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ThemeweldError::ConfigReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ThemeweldError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Load the conventional config file from a directory.
    ///
    /// Returns the default (empty) config if the file does not exist, as the
    /// config file is optional.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }
}

/// Immutable input to one aggregation run
#[derive(Debug, Clone)]
pub struct AggregateOptions {
    /// Theme name whose directories are discovered project-wide
    pub theme: Option<String>,
    /// Scoped theme names, discovered via their scoped-theme marker files
    pub scoped: Vec<String>,
    /// Additional glob patterns expanded as candidate locations
    pub include: Vec<String>,
    /// Glob patterns removed from every scan's matches
    pub exclude: Vec<String>,
    /// Absolute directory the filesystem scan is rooted at
    pub base_dir: PathBuf,
    /// Absolute directory the manifest is written into
    pub output_dir: PathBuf,
    /// Header text prepended to the manifest
    pub disclaimer: String,
}

/// Outcome of validating aggregation options.
///
/// Returned to the caller instead of terminating the process, so the hosting
/// CLI decides exit behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// Options are complete
    Proceed,
    /// Options are usable but degraded; the run continues
    ProceedWithWarning(String),
    /// Nothing to aggregate; the run stops without writing output
    Abort(String),
}

impl AggregateOptions {
    pub fn validate(&self) -> Validation {
        match (&self.theme, self.scoped.is_empty()) {
            (None, true) => Validation::Abort(
                "No theme or scoped themes specified. Nothing to aggregate.".to_string(),
            ),
            (None, false) => Validation::ProceedWithWarning(
                "No theme specified. Aggregating scoped themes only.".to_string(),
            ),
            (Some(_), _) => Validation::Proceed,
        }
    }
}
