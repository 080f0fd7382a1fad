//! Error types and handling for Themeweld
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Themeweld operations
#[derive(Error, Diagnostic, Debug)]
pub enum ThemeweldError {
    // Configuration errors
    #[error("A theme or at least one scoped theme must be specified")]
    #[diagnostic(
        code(themeweld::config::no_theme),
        help("Pass --theme <NAME> or --scoped <NAME>, or set them in themeweld.config.json")
    )]
    NoThemeSpecified,

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(themeweld::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(
        code(themeweld::config::parse_failed),
        help("The config file must be a JSON object with theme, scoped, include, exclude and outputDir keys")
    )]
    ConfigParseFailed { path: String, reason: String },

    // Pattern errors
    #[error("Invalid glob pattern: {pattern}")]
    #[diagnostic(
        code(themeweld::glob::invalid_pattern),
        help("Patterns use glob syntax, e.g. **/themes/*/ or packages/**/*.scss")
    )]
    InvalidPattern { pattern: String, reason: String },

    // File system errors
    #[error("Failed to scan {path}: {reason}")]
    #[diagnostic(code(themeweld::fs::scan_failed))]
    ScanFailed { path: String, reason: String },

    #[error("Failed to stat {path}: {reason}")]
    #[diagnostic(
        code(themeweld::fs::stat_failed),
        help("A matched path disappeared mid-run; re-run the aggregation")
    )]
    StatFailed { path: String, reason: String },

    #[error("Failed to read directory {path}: {reason}")]
    #[diagnostic(code(themeweld::fs::dir_read_failed))]
    DirReadFailed { path: String, reason: String },

    #[error("Failed to create output directory {path}: {reason}")]
    #[diagnostic(
        code(themeweld::fs::output_dir_create_failed),
        help("Only the last path segment is created; parent directories must already exist")
    )]
    OutputDirCreateFailed { path: String, reason: String },

    #[error("Failed to write manifest {path}: {reason}")]
    #[diagnostic(code(themeweld::fs::manifest_write_failed))]
    ManifestWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(themeweld::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ThemeweldError {
    fn from(err: std::io::Error) -> Self {
        ThemeweldError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ThemeweldError {
    fn from(err: serde_json::Error) -> Self {
        ThemeweldError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ThemeweldError>;
