//! Themeweld - build-time SCSS theme aggregator
//!
//! Discovers theme stylesheet fragments scattered across a project and its
//! installed dependencies and welds them into a single import manifest.

use clap::Parser;

mod aggregator;
mod cli;
mod commands;
mod config;
mod error;
mod path_utils;
mod progress;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Aggregate(args) => commands::aggregate::run(cli.base_dir, cli.verbose, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
