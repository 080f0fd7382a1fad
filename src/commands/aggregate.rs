//! Aggregate command implementation
//!
//! Builds the aggregation options by layering CLI flags over the optional
//! config file, validates them, runs the pipeline, and reports the result.

use console::Style;
use std::path::PathBuf;

use crate::aggregator;
use crate::cli::AggregateArgs;
use crate::config::{AggregateOptions, DEFAULT_DISCLAIMER, DEFAULT_OUTPUT_DIR, ThemeConfigFile, Validation};
use crate::error::{Result, ThemeweldError};
use crate::path_utils;
use crate::progress::ScanProgress;

/// Run aggregate command
pub fn run(base_dir: Option<PathBuf>, verbose: bool, args: AggregateArgs) -> Result<()> {
    let options = build_options(base_dir, &args)?;

    match options.validate() {
        Validation::Abort(message) => {
            eprintln!("{}", Style::new().yellow().bold().apply_to(message));
            return Ok(());
        }
        Validation::ProceedWithWarning(message) => {
            eprintln!(
                "{}",
                Style::new()
                    .yellow()
                    .apply_to(format!("Warning: {}", message))
            );
        }
        Validation::Proceed => {}
    }

    let progress = ScanProgress::new(&describe_request(&options));
    let outcome = match aggregator::aggregate(&options) {
        Ok(outcome) => {
            progress.finish();
            outcome
        }
        Err(e) => {
            progress.abandon();
            return Err(e);
        }
    };

    if verbose {
        for import in &outcome.imports {
            println!("  {}", Style::new().dim().apply_to(import));
        }
    }

    println!(
        "Aggregated {} theme file(s) into {}",
        Style::new().bold().apply_to(outcome.imports.len()),
        Style::new()
            .cyan()
            .apply_to(outcome.manifest_path.display()),
    );

    Ok(())
}

/// Layer CLI flags over the config file over defaults. List-valued flags
/// replace the config file's lists rather than appending to them.
fn build_options(base_dir: Option<PathBuf>, args: &AggregateArgs) -> Result<AggregateOptions> {
    let cwd = current_dir()?;
    let base_dir = path_utils::absolutize(&cwd, &base_dir.unwrap_or_else(|| cwd.clone()));

    let file = match &args.config {
        Some(path) => ThemeConfigFile::load(&path_utils::absolutize(&cwd, path))?,
        None => ThemeConfigFile::load_from_dir(&base_dir)?,
    };

    let output_dir = args
        .output_dir
        .clone()
        .or(file.output_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    Ok(AggregateOptions {
        theme: args.theme.clone().or(file.theme),
        scoped: pick_list(&args.scoped, file.scoped),
        include: pick_list(&args.include, file.include),
        exclude: pick_list(&args.exclude, file.exclude),
        base_dir,
        output_dir: path_utils::absolutize(&cwd, &output_dir),
        disclaimer: DEFAULT_DISCLAIMER.to_string(),
    })
}

fn pick_list(from_cli: &[String], from_file: Vec<String>) -> Vec<String> {
    if from_cli.is_empty() {
        from_file
    } else {
        from_cli.to_vec()
    }
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| ThemeweldError::IoError {
        message: format!("Failed to get current directory: {}", e),
    })
}

fn describe_request(options: &AggregateOptions) -> String {
    match &options.theme {
        Some(theme) => format!("theme '{}'", theme),
        None => format!("scoped themes {}", options.scoped.join(", ")),
    }
}
