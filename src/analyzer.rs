//! The sorting engine.
//!
//! An [`Analyzer`] examines the working root and relocates its files; the
//! one implementation today, [`TypeAnalyzer`], classifies by extension
//! token against an injected [`CategoryTable`]. The trait is the seam for
//! future strategies (a date-based variant would slot in here), selected
//! by the mode flag at startup.

use crate::category::{self, CategoryTable};
use crate::fs_ops::{self, SortResult};
use std::collections::HashMap;
use std::path::PathBuf;

/// Destination for files matching no category and not blacklisted.
const MISC_DIR: &str = "misc";

/// A single-file relocation performed during a run.
#[derive(Debug, Clone)]
pub struct MoveRecord {
    /// The file name, preserved across the move.
    pub file: String,
    /// The destination directory name, relative to the working root.
    pub destination: String,
}

/// Describes what a completed run did.
#[derive(Debug, Default)]
pub struct SortReport {
    /// Every relocation, in the order it happened.
    pub moves: Vec<MoveRecord>,
    /// Blacklisted files found during the catch-all pass and left in the
    /// working root.
    pub left_in_place: Vec<String>,
}

impl SortReport {
    fn new() -> Self {
        Self::default()
    }

    /// Total number of files relocated.
    pub fn total_moved(&self) -> usize {
        self.moves.len()
    }

    /// Move counts keyed by destination directory.
    pub fn counts_by_destination(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for record in &self.moves {
            *counts.entry(record.destination.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// True when the run neither moved nor skipped anything.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.left_in_place.is_empty()
    }
}

/// A strategy for analyzing and relocating the files of a working root.
pub trait Analyzer {
    /// Runs the full analysis and returns a report of what moved.
    fn analyze_and_sort(&self) -> SortResult<SortReport>;
}

/// Sorts files into per-type directories by extension token.
///
/// The category table is injected at construction time, so two analyzers
/// over different roots (or with different tables) never share state.
pub struct TypeAnalyzer {
    root: PathBuf,
    table: CategoryTable,
}

impl TypeAnalyzer {
    /// Creates an analyzer over `root` using the given table.
    pub fn new(root: PathBuf, table: CategoryTable) -> Self {
        Self { root, table }
    }

    /// Creates the directory of every category that at least one listed
    /// file belongs to. Categories with no matches get no directory.
    fn provision_category_dirs(&self, files: &[String]) -> SortResult<()> {
        for category in self.table.categories() {
            let matched = files
                .iter()
                .any(|file| category.contains(&category::file_extension(file)));
            if matched {
                fs_ops::ensure_dir(&self.root.join(category.name()))?;
            }
        }

        Ok(())
    }

    /// Moves every listed file whose token belongs to a category into the
    /// existing subdirectory of that name.
    ///
    /// Matching is by directory name against category keys, not by what
    /// provisioning just created: a category directory the user made by
    /// hand receives its files the same way.
    fn move_to_category_dirs(&self, files: &[String], report: &mut SortReport) -> SortResult<()> {
        let dirs = fs_ops::list_dirs(&self.root)?;

        for dir in &dirs {
            let Some(category) = self.table.get(dir) else {
                continue;
            };
            for file in files {
                if category.contains(&category::file_extension(file)) {
                    fs_ops::move_into(&self.root, file, dir)?;
                    report.moves.push(MoveRecord {
                        file: file.clone(),
                        destination: dir.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Re-lists the root and sweeps the leftovers into the catch-all
    /// directory, leaving blacklisted files untouched.
    ///
    /// The re-listing matters: files moved by the primary pass are gone,
    /// so whatever remains matched no category directory.
    fn sweep_to_misc(&self, report: &mut SortReport) -> SortResult<()> {
        let remaining = fs_ops::list_files(&self.root)?;
        if remaining.is_empty() {
            return Ok(());
        }

        let mut survivors = Vec::new();
        for file in remaining {
            if self.table.is_blacklisted(&category::file_extension(&file)) {
                report.left_in_place.push(file);
            } else {
                survivors.push(file);
            }
        }

        if survivors.is_empty() {
            return Ok(());
        }

        fs_ops::ensure_dir(&self.root.join(MISC_DIR))?;
        for file in survivors {
            fs_ops::move_into(&self.root, &file, MISC_DIR)?;
            report.moves.push(MoveRecord {
                file,
                destination: MISC_DIR.to_string(),
            });
        }

        Ok(())
    }
}

impl Analyzer for TypeAnalyzer {
    fn analyze_and_sort(&self) -> SortResult<SortReport> {
        let files = fs_ops::list_files(&self.root)?;

        let mut report = SortReport::new();
        self.provision_category_dirs(&files)?;
        self.move_to_category_dirs(&files, &mut report)?;
        self.sweep_to_misc(&mut report)?;

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_report_counts_by_destination() {
        let mut report = SortReport::new();
        report.moves.push(MoveRecord {
            file: "a.mp3".to_string(),
            destination: "music".to_string(),
        });
        report.moves.push(MoveRecord {
            file: "b.mp3".to_string(),
            destination: "music".to_string(),
        });
        report.moves.push(MoveRecord {
            file: "c.xyz".to_string(),
            destination: "misc".to_string(),
        });

        let counts = report.counts_by_destination();
        assert_eq!(counts.get("music"), Some(&2));
        assert_eq!(counts.get("misc"), Some(&1));
        assert_eq!(report.total_moved(), 3);
        assert!(!report.is_empty());
    }

    #[test]
    fn test_empty_report() {
        let report = SortReport::new();
        assert!(report.is_empty());
        assert_eq!(report.total_moved(), 0);
        assert!(report.counts_by_destination().is_empty());
    }

    #[test]
    fn test_injected_table_drives_classification() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        fs::write(base_path.join("report.txt"), "text").expect("write");

        // "txt" maps to "notes" here, not the default "docs".
        let table = CategoryTable::new(
            vec![Category::new("notes", ["txt"])],
            Vec::<String>::new(),
        );
        let analyzer = TypeAnalyzer::new(base_path.to_path_buf(), table);
        let report = analyzer.analyze_and_sort().expect("run succeeds");

        assert_eq!(report.total_moved(), 1);
        assert!(base_path.join("notes").join("report.txt").exists());
    }

    #[test]
    fn test_two_analyzers_do_not_share_state() {
        let dir_a = TempDir::new().expect("tempdir a");
        let dir_b = TempDir::new().expect("tempdir b");
        fs::write(dir_a.path().join("a.dat"), "x").expect("write");
        fs::write(dir_b.path().join("b.dat"), "x").expect("write");

        let analyzer_a = TypeAnalyzer::new(
            dir_a.path().to_path_buf(),
            CategoryTable::new(
                vec![Category::new("data", ["dat"])],
                Vec::<String>::new(),
            ),
        );
        let analyzer_b = TypeAnalyzer::new(
            dir_b.path().to_path_buf(),
            CategoryTable::new(
                vec![Category::new("blobs", ["dat"])],
                Vec::<String>::new(),
            ),
        );

        analyzer_a.analyze_and_sort().expect("run a");
        analyzer_b.analyze_and_sort().expect("run b");

        assert!(dir_a.path().join("data").join("a.dat").exists());
        assert!(dir_b.path().join("blobs").join("b.dat").exists());
    }
}
