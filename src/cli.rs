//! Command-line interface module for dirsort.
//!
//! This module handles all CLI-related functionality including:
//! - Flag parsing and mode selection
//! - Configuration loading and validation
//! - Sorting orchestration
//! - User-facing run reporting

use crate::analyzer::{Analyzer, SortReport, TypeAnalyzer};
use crate::config::SortConfig;
use crate::output::OutputFormatter;
use clap::Parser;
use std::path::{Path, PathBuf};

/// One-line usage hint printed when no valid mode is selected.
pub const USAGE_HINT: &str = "Provide sort mode flag: --mode=type";

/// Command-line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "dirsort")]
#[command(version, about = "Sort the files of the current directory into per-type subdirectories", long_about = None)]
pub struct Args {
    /// Sort mode to run (currently only "type")
    #[arg(long)]
    pub mode: Option<String>,

    /// Path to a TOML configuration file overriding the built-in category table
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// The sorting strategies selectable from the command line.
///
/// One variant exists today; a date-based strategy would be a second
/// variant dispatched the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Classify by extension token.
    Type,
}

impl SortMode {
    /// Parses the `--mode` flag value.
    ///
    /// Unknown values select no mode; the binary answers that with the
    /// usage hint and a clean exit rather than an error.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "type" => Some(SortMode::Type),
            _ => None,
        }
    }
}

/// Runs the selected sorting mode over `dir_path` with the default
/// configuration discovery.
///
/// This is the main entry point for CLI operations.
///
/// # Examples
///
/// ```no_run
/// use dirsort::cli::{SortMode, run_cli};
/// use std::path::Path;
///
/// let result = run_cli(SortMode::Type, Path::new("/path/to/directory"));
/// match result {
///     Ok(()) => println!("Run completed successfully"),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run_cli(mode: SortMode, dir_path: &Path) -> Result<(), String> {
    run_cli_with_config(mode, dir_path, None)
}

/// Runs the selected sorting mode with an optional explicit configuration
/// file.
///
/// This function:
/// 1. Loads the category configuration (built-in defaults when absent)
/// 2. Validates and compiles it into a category table
/// 3. Builds the analyzer for the selected mode with the table injected
/// 4. Runs the analyzer and reports the outcome
pub fn run_cli_with_config(
    mode: SortMode,
    dir_path: &Path,
    config_path: Option<&Path>,
) -> Result<(), String> {
    OutputFormatter::info(&format!("Sorting contents of: {}", dir_path.display()));

    let config = SortConfig::load(config_path)
        .map_err(|e| format!("Error loading configuration: {}", e))?;
    let table = config
        .compile()
        .map_err(|e| format!("Error validating configuration: {}", e))?;

    let analyzer: Box<dyn Analyzer> = match mode {
        SortMode::Type => Box::new(TypeAnalyzer::new(dir_path.to_path_buf(), table)),
    };

    let report = analyzer.analyze_and_sort().map_err(|e| e.to_string())?;
    print_report(&report);

    Ok(())
}

/// Prints the outcome of a completed run.
fn print_report(report: &SortReport) {
    if report.is_empty() {
        OutputFormatter::plain("No files found to sort.");
        return;
    }

    if !report.moves.is_empty() {
        OutputFormatter::header("Sorted files:");
        for record in &report.moves {
            OutputFormatter::plain(&format!(" - {} → {}/", record.file, record.destination));
        }
    }

    for file in &report.left_in_place {
        OutputFormatter::warning(&format!("{}: excluded extension, left in place", file));
    }

    OutputFormatter::summary_table(&report.counts_by_destination(), report.total_moved());
    OutputFormatter::success("Sorting complete!");
}
