use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::output::ReportFormat;

#[derive(Parser, Debug)]
#[command(name = "tmdl-slim")]
#[command(author, version, about = "Strip semantic-noise metadata from TMDL model folders")]
#[command(long_about = "Reduces a TMDL model folder to a slim variant that omits metadata\n\
    irrelevant to downstream semantic reasoning, while preserving keys,\n\
    relationships, uniqueness flags and human-authored comments.\n\n\
    Exit codes:\n  \
    0 - Run completed (including the no-documents-found case)\n  \
    1 - Configuration or I/O error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Slim a model folder into a single output document
    Slim(SlimArgs),

    /// Print the effective ordered rule table
    Rules(RulesArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

/// Per-run overrides forcing a metadata group to be kept (toggle off),
/// regardless of configuration.
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct KeepFlags {
    /// Keep annotation entries and extendedProperties blocks
    #[arg(long)]
    pub keep_annotations: bool,

    /// Keep lineageTag / sourceLineageTag properties
    #[arg(long)]
    pub keep_lineage: bool,

    /// Keep linguistic metadata and the cultures subtree
    #[arg(long)]
    pub keep_language_data: bool,

    /// Keep column source metadata (summarizeBy, sourceProviderType, ...)
    #[arg(long)]
    pub keep_column_metadata: bool,

    /// Keep engine-inferred properties (isNameInferred, variations, ...)
    #[arg(long)]
    pub keep_inferred: bool,

    /// Keep display-only properties (isHidden, displayFolder, ...)
    #[arg(long)]
    pub keep_display: bool,
}

#[derive(Parser, Debug)]
pub struct SlimArgs {
    /// Root of the model folder to slim
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Write the slimmed document here (default: <root name>.slim.tmdl)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Summary format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: ReportFormat,

    #[command(flatten)]
    pub keep: KeepFlags,
}

#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub keep: KeepFlags,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".tmdl-slim.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
