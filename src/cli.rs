//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Themeweld - build-time SCSS theme aggregator
///
/// Weld scattered theme stylesheet fragments into one import manifest.
#[derive(Parser, Debug)]
#[command(
    name = "themeweld",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Aggregates SCSS theme fragments into a single import manifest",
    long_about = "Themeweld discovers theme directories across a project tree and its \
                  installed dependencies, selects the files that represent each theme, \
                  rewrites their paths relative to the emitted output, and writes one \
                  manifest with an import statement per file.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  themeweld aggregate --theme ocean\n    \
                  themeweld aggregate --theme ocean --exclude 'packages/legacy/**'\n    \
                  themeweld aggregate --scoped corp dark\n    \
                  themeweld aggregate --config build/themeweld.config.json\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/themeweld/themeweld"
)]
pub struct Cli {
    /// Base directory the filesystem scan is rooted at (defaults to current directory)
    #[arg(long, short = 'b', global = true)]
    pub base_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Aggregate theme files into an import manifest
    Aggregate(AggregateArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the aggregate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Aggregate a named theme:\n    themeweld aggregate --theme ocean\n\n\
                  Aggregate with extra locations:\n    themeweld aggregate -t ocean -i 'packages/**/overrides/'\n\n\
                  Exclude a subtree from every scan:\n    themeweld aggregate -t ocean -e 'packages/legacy/**'\n\n\
                  Aggregate scoped themes only:\n    themeweld aggregate --scoped corp dark\n\n\
                  Write the manifest somewhere else:\n    themeweld aggregate -t ocean -o src/generated")]
pub struct AggregateArgs {
    /// Theme name to aggregate
    #[arg(long, short = 't', value_name = "NAME")]
    pub theme: Option<String>,

    /// Scoped theme names to aggregate (e.g. --scoped corp dark)
    #[arg(long, short = 's', value_name = "NAME", num_args = 1..)]
    pub scoped: Vec<String>,

    /// Glob patterns for additional theme locations
    #[arg(long, short = 'i', value_name = "PATTERN", num_args = 1..)]
    pub include: Vec<String>,

    /// Glob patterns removed from every scan's matches
    #[arg(long, short = 'e', value_name = "PATTERN", num_args = 1..)]
    pub exclude: Vec<String>,

    /// Directory the manifest is written into
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Configuration file (defaults to themeweld.config.json in the base directory)
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    themeweld completions --shell bash > ~/.bash_completion.d/themeweld\n\n\
                  Generate zsh completions:\n    themeweld completions --shell zsh > ~/.zfunc/_themeweld\n\n\
                  Generate fish completions:\n    themeweld completions --shell fish > ~/.config/fish/completions/themeweld.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
