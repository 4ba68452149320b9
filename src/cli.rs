use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "ud-guard")]
#[command(author, version, about = "Treebank annotation guard - validate UD constraints")]
#[command(long_about = "Validates an annotated CoNLL-U treebank file against \
    language-specific constraints the standard UD validators do not check.\n\n\
    Exit codes:\n  \
    0 - Validation passed\n  \
    1 - Constraint violations found\n  \
    2 - Load or configuration error")]
pub struct Cli {
    /// CoNLL-U file to validate
    pub file: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Path to the fixed-expression lexicon (overrides config)
    #[arg(long)]
    pub fixed_list: Option<PathBuf>,

    /// Treat warnings as failures (exit code 1)
    #[arg(long)]
    pub strict: bool,

    /// Only warn, don't fail on constraint violations
    #[arg(long)]
    pub warn_only: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Validate sentences in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Suppress per-diagnostic output
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
