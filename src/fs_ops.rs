//! Filesystem primitives for listing, provisioning, and moving.
//!
//! Every mutating helper in this module performs exactly one filesystem
//! operation and wraps failures with the path involved, so the engine can
//! abort on the first error with usable context.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur during a sorting run.
#[derive(Debug)]
pub enum SortError {
    /// Failed to enumerate the entries of a directory.
    ListFailed { path: PathBuf, source: io::Error },
    /// Failed to create a category directory for a reason other than
    /// pre-existence.
    DirectoryCreationFailed { path: PathBuf, source: io::Error },
    /// Failed to move a file to its destination directory.
    FileMoveFailure {
        source: PathBuf,
        destination: PathBuf,
        source_error: io::Error,
    },
}

impl std::fmt::Display for SortError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ListFailed { path, source } => {
                write!(f, "Failed to list directory {}: {}", path.display(), source)
            }
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::FileMoveFailure {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
        }
    }
}

impl std::error::Error for SortError {}

/// Result type for sorting operations.
pub type SortResult<T> = Result<T, SortError>;

/// Lists the names of the non-directory entries directly under `dir`.
///
/// No recursion: entries inside subdirectories are never visited.
pub fn list_files(dir: &Path) -> SortResult<Vec<String>> {
    list_entries(dir, false)
}

/// Lists the names of the subdirectories directly under `dir`.
pub fn list_dirs(dir: &Path) -> SortResult<Vec<String>> {
    list_entries(dir, true)
}

fn list_entries(dir: &Path, want_dirs: bool) -> SortResult<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| SortError::ListFailed {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SortError::ListFailed {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let file_type = entry.file_type().map_err(|e| SortError::ListFailed {
            path: entry.path(),
            source: e,
        })?;
        if file_type.is_dir() == want_dirs {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }

    Ok(names)
}

/// Ensures that `path` exists as a directory.
///
/// "Already exists" is the expected idempotent case and is not an error;
/// any other failure is reported.
pub fn ensure_dir(path: &Path) -> SortResult<()> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(SortError::DirectoryCreationFailed {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Moves `<root>/<name>` into `<root>/<dest_dir>/<name>`.
///
/// The destination directory must already exist; this helper never creates
/// it. The relocation is a single `rename`, so it is atomic within a
/// volume and there is no copy fallback across volumes.
pub fn move_into(root: &Path, name: &str, dest_dir: &str) -> SortResult<()> {
    let source = root.join(name);
    let destination = root.join(dest_dir).join(name);

    fs::rename(&source, &destination).map_err(|e| SortError::FileMoveFailure {
        source,
        destination,
        source_error: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_files_skips_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        fs::write(base_path.join("test.txt"), "dummy").expect("Failed to write file");
        fs::create_dir(base_path.join("subdir")).expect("Failed to create subdir");

        let files = list_files(base_path).expect("Failed to list files");
        assert_eq!(files, vec!["test.txt".to_string()]);
    }

    #[test]
    fn test_list_dirs_skips_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        fs::write(base_path.join("test.txt"), "dummy").expect("Failed to write file");
        fs::create_dir(base_path.join("subdir")).expect("Failed to create subdir");

        let dirs = list_dirs(base_path).expect("Failed to list dirs");
        assert_eq!(dirs, vec!["subdir".to_string()]);
    }

    #[test]
    fn test_list_files_unreadable_path() {
        let result = list_files(Path::new("/non/existent/path"));
        assert!(matches!(result, Err(SortError::ListFailed { .. })));
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dir_path = temp_dir.path().join("music");

        ensure_dir(&dir_path).expect("First creation should succeed");
        ensure_dir(&dir_path).expect("Second creation should also succeed");

        assert!(dir_path.is_dir());
    }

    #[test]
    fn test_ensure_dir_missing_parent_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dir_path = temp_dir.path().join("missing").join("music");

        let result = ensure_dir(&dir_path);
        assert!(matches!(
            result,
            Err(SortError::DirectoryCreationFailed { .. })
        ));
    }

    #[test]
    fn test_move_into_relocates_preserving_name() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        fs::write(base_path.join("song.mp3"), "audio").expect("Failed to write file");
        fs::create_dir(base_path.join("music")).expect("Failed to create dir");

        move_into(base_path, "song.mp3", "music").expect("Move should succeed");

        assert!(!base_path.join("song.mp3").exists());
        assert!(base_path.join("music").join("song.mp3").exists());
    }

    #[test]
    fn test_move_into_missing_source_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        fs::create_dir(base_path.join("music")).expect("Failed to create dir");

        let result = move_into(base_path, "ghost.mp3", "music");
        assert!(matches!(result, Err(SortError::FileMoveFailure { .. })));
    }

    #[test]
    fn test_move_into_missing_destination_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();

        fs::write(base_path.join("song.mp3"), "audio").expect("Failed to write file");

        let result = move_into(base_path, "song.mp3", "music");
        assert!(matches!(result, Err(SortError::FileMoveFailure { .. })));
        // The source stays put on failure.
        assert!(base_path.join("song.mp3").exists());
    }
}
