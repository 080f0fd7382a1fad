//! Theme aggregation pipeline
//!
//! Four stages composed strictly in sequence: the [`Locator`] expands glob
//! patterns into candidate paths, the [`Selector`] reduces directory
//! candidates to the files representing each theme, the [`PathResolver`]
//! rewrites every file into its importable form, and the [`Emitter`] writes
//! the manifest. Every run re-scans the filesystem from scratch; no state is
//! carried across invocations.

pub mod emitter;
pub mod locator;
pub mod resolver;
pub mod selector;

pub use emitter::Emitter;
pub use locator::Locator;
pub use resolver::PathResolver;
pub use selector::Selector;

use std::path::PathBuf;

use crate::config::AggregateOptions;
use crate::error::{Result, ThemeweldError};

/// Directory dependencies are installed into
pub const DEPENDENCY_DIR: &str = "node_modules";

/// Path segment marking a dependency-sourced file
pub const DEPENDENCY_MARKER: &str = "node_modules/";

/// Canonical single-entry-point file inside a theme directory. When present
/// it suppresses aggregation of its sibling fragments.
pub const ROOT_THEME_FILE: &str = "root-theme.scss";

/// Marker file naming a component-scoped theme variant
pub const SCOPED_THEME_FILE: &str = "scoped-theme.scss";

/// Fixed manifest filename inside the output directory
pub const MANIFEST_FILENAME: &str = "aggregated-themes.scss";

/// Result of one aggregation run
#[derive(Debug)]
pub struct AggregateOutcome {
    /// Import paths in discovery order, exactly as emitted
    pub imports: Vec<String>,
    /// Path of the written manifest
    pub manifest_path: PathBuf,
}

/// Run the full pipeline: locate, select, resolve, emit.
pub fn aggregate(options: &AggregateOptions) -> Result<AggregateOutcome> {
    if options.theme.is_none() && options.scoped.is_empty() {
        return Err(ThemeweldError::NoThemeSpecified);
    }

    let locator = Locator::new(&options.base_dir, &options.exclude);
    let candidates = locator.locate_all(options)?;

    let selector = Selector::new(&options.base_dir);
    let files = selector.filter(&candidates)?;

    let resolver = PathResolver::new(&options.base_dir, &options.output_dir);
    let imports: Vec<String> = files.iter().map(|file| resolver.resolve(file)).collect();

    let emitter = Emitter::new(&options.output_dir, &options.disclaimer);
    let manifest_path = emitter.write_manifest(&imports)?;

    Ok(AggregateOutcome {
        imports,
        manifest_path,
    })
}
