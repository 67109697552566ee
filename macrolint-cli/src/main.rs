//! macrolint CLI - macro-usage analysis for recorded preprocessing events.
//!
//! The preprocessor itself lives in the host toolchain; this binary replays
//! a JSON dump of macro-definition events (one array entry per `#define`
//! the host observed) through the analyzer and reports the findings.
//!
//! Configuration comes from macrolint.toml in the config directory, with
//! command-line flags taking precedence.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use macrolint_core::{
    init_structured_logging, load_events, load_options, print_json, print_plain, AnalyzerOptions,
    MacroUsageAnalyzer,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Macro-usage analyzer for preprocessing event dumps")]
pub struct Cli {
    /// Path to a JSON dump of macro-definition events
    events: PathBuf,

    /// Directory searched for macrolint.toml
    #[arg(long, default_value = ".")]
    config_dir: PathBuf,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Override the allow-list pattern for the usage-category check
    #[arg(long, value_name = "REGEX")]
    allowed_pattern: Option<String>,

    /// Check macro names for all-uppercase form instead of usage categories
    #[arg(long)]
    caps_only: bool,

    /// Analyze macros defined on the build command line as well
    #[arg(long)]
    include_command_line: bool,
}

/// Merges macrolint.toml options with command-line overrides.
fn resolve_options(cli: &Cli) -> Result<AnalyzerOptions> {
    let mut options = load_options(&cli.config_dir)
        .with_context(|| format!("Failed to load config from {}", cli.config_dir.display()))?
        .unwrap_or_default();

    if let Some(pattern) = &cli.allowed_pattern {
        options.allowed_pattern = Some(pattern.clone());
    }
    if cli.caps_only {
        options.enforce_uppercase_naming = Some(true);
    }
    if cli.include_command_line {
        options.ignore_command_line_definitions = Some(false);
    }

    Ok(options)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_structured_logging();

    let options = resolve_options(&cli)?;
    let analyzer = MacroUsageAnalyzer::from_options(&options)?;

    let events = load_events(&cli.events)
        .with_context(|| format!("Failed to load events from {}", cli.events.display()))?;

    let diagnostics = analyzer.analyze_all(&events);

    if cli.json {
        print_json(&diagnostics);
    } else {
        print_plain(&diagnostics);
    }

    std::process::exit(if diagnostics.is_empty() { 0 } else { 1 });
}
