//! Output formatting and styling.
//!
//! Centralizes all user-facing CLI output: colored status lines, section
//! headers, the per-destination summary table, and progress bars. Normal
//! output goes to stdout; errors go to stderr.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;

/// Manages CLI output with consistent styling.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red to stderr.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message in yellow.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a regular message without styling.
    pub fn plain(message: &str) {
        println!("{}", message);
    }

    /// Prints a bold section header.
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Creates a progress bar sized for `total` file operations.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dirsort::output::OutputFormatter;
    ///
    /// let pb = OutputFormatter::create_progress_bar(100);
    /// pb.inc(1);
    /// pb.finish_with_message("Done");
    /// ```
    pub fn create_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("█▓░"),
        );
        pb
    }

    /// Prints a summary table of move counts by destination directory.
    pub fn summary_table(counts: &HashMap<String, usize>, total_moved: usize) {
        Self::header("SUMMARY");

        // Sort destinations for consistent output
        let mut destinations: Vec<_> = counts.iter().collect();
        destinations.sort_by_key(|&(name, _)| name);

        let name_width = destinations
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0)
            .max("Destination".len());

        println!(
            "{:<width$} | {}",
            "Destination".bold(),
            "Files".bold(),
            width = name_width
        );
        println!("{}", "-".repeat(name_width + 10));

        for (destination, count) in &destinations {
            let file_word = if **count == 1 { "file" } else { "files" };
            println!(
                "{:<width$} | {} {}",
                destination,
                count.to_string().green(),
                file_word,
                width = name_width
            );
        }

        println!("{}", "-".repeat(name_width + 10));
        println!(
            "{:<width$} | {} {}",
            "Total".bold(),
            total_moved.to_string().green().bold(),
            if total_moved == 1 { "file" } else { "files" },
            width = name_width
        );
    }
}
