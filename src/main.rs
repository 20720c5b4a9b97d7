use std::fs;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use clap::Parser;

use tmdl_slim::cli::{Cli, Commands, InitArgs, KeepFlags, RulesArgs, SlimArgs};
use tmdl_slim::collector::DocumentCollector;
use tmdl_slim::config::{Config, ConfigLoader, FileConfigLoader, StripConfig};
use tmdl_slim::filter::FileFilter;
use tmdl_slim::normalize::normalize;
use tmdl_slim::output::{
    JsonFormatter, ReportFormat, RunSummary, SummaryFormatter, TextFormatter,
};
use tmdl_slim::rules::{RuleKind, RuleSet};
use tmdl_slim::stats::SlimStats;
use tmdl_slim::{EXIT_ERROR, EXIT_SUCCESS, TmdlSlimError};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Slim(args) => run_slim(args, &cli),
        Commands::Rules(args) => run_rules(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_slim(args: &SlimArgs, cli: &Cli) -> i32 {
    match run_slim_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

fn run_slim_impl(args: &SlimArgs, cli: &Cli) -> tmdl_slim::Result<i32> {
    // 1. Load configuration and apply per-run keep overrides
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let strip = apply_keep_flags(config.strip, &args.keep);

    // 2. Build the rule set once; immutable from here on
    let rules = RuleSet::from_config(&strip)?;

    // 3. Collect surviving documents in lexicographic order
    let mut stats = SlimStats::new();
    let collector = DocumentCollector::new(strip.language_data);
    let collection = collector.collect(&args.root, &mut stats)?;

    if collection.total_found == 0 {
        if !cli.quiet {
            println!("No .tmdl documents found under {}", args.root.display());
        }
        return Ok(EXIT_SUCCESS);
    }

    // 4. Filter each document in turn, concatenating kept lines
    let filter = FileFilter::new(&rules);
    let mut buffer: Vec<String> = Vec::new();
    for document in &collection.documents {
        let outcome = filter.filter(&document.content, &mut buffer, &mut stats);
        if cli.verbose > 0 && !cli.quiet {
            println!(
                "{}: kept {} of {} lines",
                document.relative_path, outcome.kept, outcome.total
            );
        }
    }

    // 5. Normalize and prepend the output header
    let body = normalize(&buffer.join("\n"));
    let header = format!(
        "// Source: {}\n// Generated: {}\n",
        args.root.display(),
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    let final_text = format!("{header}{body}");

    // 6. Write the whole output in one go; any failure aborts the run
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.root));
    fs::write(&output_path, &final_text).map_err(|source| TmdlSlimError::OutputWrite {
        path: output_path.clone(),
        source,
    })?;

    // 7. Report
    let summary = RunSummary {
        documents_found: collection.total_found,
        documents_processed: collection.documents.len(),
        input_bytes: collection.input_bytes,
        output_bytes: final_text.len() as u64,
    };
    let report = format_summary(args.format, &summary, &stats)?;
    if !cli.quiet {
        println!("{}", report.trim_end());
        println!("Wrote {}", output_path.display());
    }

    Ok(EXIT_SUCCESS)
}

fn run_rules(args: &RulesArgs, cli: &Cli) -> i32 {
    match run_rules_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

fn run_rules_impl(args: &RulesArgs, cli: &Cli) -> tmdl_slim::Result<()> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let strip = apply_keep_flags(config.strip, &args.keep);
    let rules = RuleSet::from_config(&strip)?;

    if rules.is_empty() {
        println!("No rules active.");
        return Ok(());
    }

    println!("Active rules (first match wins):");
    let width = rules
        .rules()
        .iter()
        .map(|rule| rule.name().len())
        .max()
        .unwrap_or(0);
    for rule in rules.rules() {
        let kind = match rule.kind() {
            RuleKind::SimpleRemoval => "single-line",
            RuleKind::BlockStarter => "block-starter",
        };
        println!("  {:<width$}  {kind}", rule.name());
    }
    if strip.language_data {
        println!("  {:<width$}  subtree exclusion", "cultures/");
    }

    Ok(())
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> tmdl_slim::Result<()> {
    if args.output.exists() && !args.force {
        return Err(TmdlSlimError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            args.output.display()
        )));
    }

    fs::write(&args.output, config_template()).map_err(|source| TmdlSlimError::OutputWrite {
        path: args.output.clone(),
        source,
    })?;

    println!("Created configuration file: {}", args.output.display());
    Ok(())
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> tmdl_slim::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

const fn apply_keep_flags(mut strip: StripConfig, keep: &KeepFlags) -> StripConfig {
    if keep.keep_annotations {
        strip.annotations = false;
    }
    if keep.keep_lineage {
        strip.lineage = false;
    }
    if keep.keep_language_data {
        strip.language_data = false;
    }
    if keep.keep_column_metadata {
        strip.column_metadata = false;
    }
    if keep.keep_inferred {
        strip.inferred = false;
    }
    if keep.keep_display {
        strip.display = false;
    }
    strip
}

fn default_output_path(root: &Path) -> PathBuf {
    let stem = root
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| *name != ".")
        .unwrap_or("model");
    PathBuf::from(format!("{stem}.slim.tmdl"))
}

fn format_summary(
    format: ReportFormat,
    summary: &RunSummary,
    stats: &SlimStats,
) -> tmdl_slim::Result<String> {
    match format {
        ReportFormat::Text => TextFormatter::new().format(summary, stats),
        ReportFormat::Json => JsonFormatter::new().format(summary, stats),
    }
}

fn config_template() -> String {
    r"# tmdl-slim configuration file

# Metadata groups to strip. Every group defaults to true.
[strip]
# annotation entries and extendedProperties blocks
annotations = true

# lineageTag / sourceLineageTag properties
lineage = true

# linguisticMetadata blocks and the cultures/ subtree
language_data = true

# column source metadata (summarizeBy, sourceProviderType, encodingHint)
column_metadata = true

# engine-inferred properties (isNameInferred, isDataTypeInferred, variations)
inferred = true

# display-only properties (isHidden, displayFolder, isAvailableInMdx)
display = true
"
    .to_string()
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
