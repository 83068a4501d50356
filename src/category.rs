//! File classification by extension token.
//!
//! This module provides the category table used to decide which
//! subdirectory a file belongs to. A category is a named bucket (e.g.
//! "music") with a set of extension tokens; the table keeps categories in
//! declared order and also carries the blacklist of tokens that are exempt
//! from the catch-all sweep.
//!
//! # Examples
//!
//! ```
//! use dirsort::category::{CategoryTable, file_extension};
//!
//! let table = CategoryTable::default();
//! assert_eq!(file_extension("song.MP3"), "mp3");
//! assert_eq!(table.category_for("mp3").map(|c| c.name()), Some("music"));
//! assert!(table.is_blacklisted("exe"));
//! ```

use std::collections::HashSet;

/// Default category table, matching the shipped configuration.
pub(crate) const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    ("video", &["mp4", "mkv", "3gp", "wmv", "flv", "avi", "mpeg", "webm"]),
    ("music", &["mp3", "aac", "wav", "flac"]),
    ("images", &["jpg", "jpeg", "png", "gif", "svg", "tiff"]),
    ("docs", &["docx", "csv", "txt", "xlsx"]),
    ("books", &["pdf", "epub"]),
];

/// Default blacklist: build artifacts and executables stay where they are.
pub(crate) const DEFAULT_BLACKLIST: &[&str] = &["go", "mod", "exe"];

/// Returns the extension token of a file name: the substring after the
/// last `.`, lowercased. Returns an empty string when the name has no dot.
///
/// # Examples
///
/// ```
/// use dirsort::category::file_extension;
///
/// assert_eq!(file_extension("file.mp3"), "mp3");
/// assert_eq!(file_extension("archive.tar.gz"), "gz");
/// assert_eq!(file_extension("no_extension"), "");
/// ```
pub fn file_extension(name: &str) -> String {
    match name.rfind('.') {
        Some(idx) => name[idx + 1..].to_lowercase(),
        None => String::new(),
    }
}

/// A named bucket of extension tokens.
///
/// Tokens are normalized to lowercase on construction, so membership
/// checks are case-insensitive.
#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    extensions: HashSet<String>,
}

impl Category {
    /// Creates a category from a name and its extension tokens.
    pub fn new<S: AsRef<str>>(name: &str, extensions: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions
                .into_iter()
                .map(|ext| ext.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The category name, which doubles as its directory name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the given extension token belongs to this category.
    pub fn contains(&self, ext: &str) -> bool {
        self.extensions.contains(&ext.to_lowercase())
    }

    /// The extension tokens of this category.
    pub fn extensions(&self) -> &HashSet<String> {
        &self.extensions
    }
}

/// The full classification table: categories in declared order plus the
/// blacklist of tokens exempt from the catch-all sweep.
///
/// The table is immutable once built and is handed to the sort engine at
/// construction time. Lookup walks categories in declared order, so the
/// first declared category wins; configuration validation rejects
/// overlapping tokens, which keeps that tie-break from ever mattering.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    categories: Vec<Category>,
    blacklist: HashSet<String>,
}

impl CategoryTable {
    /// Builds a table from already-validated categories and a blacklist.
    pub fn new<S: AsRef<str>>(
        categories: Vec<Category>,
        blacklist: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            categories,
            blacklist: blacklist
                .into_iter()
                .map(|ext| ext.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The categories in declared order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a category by name. Used to match existing subdirectories
    /// against category keys, so the comparison is exact.
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Returns the first declared category containing the given token.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirsort::category::CategoryTable;
    ///
    /// let table = CategoryTable::default();
    /// assert_eq!(table.category_for("pdf").map(|c| c.name()), Some("books"));
    /// assert!(table.category_for("xyz").is_none());
    /// ```
    pub fn category_for(&self, ext: &str) -> Option<&Category> {
        let token = ext.to_lowercase();
        self.categories.iter().find(|c| c.extensions.contains(&token))
    }

    /// Returns true if the token is exempt from the catch-all sweep.
    pub fn is_blacklisted(&self, ext: &str) -> bool {
        self.blacklist.contains(&ext.to_lowercase())
    }

    /// The blacklisted extension tokens.
    pub fn blacklist(&self) -> &HashSet<String> {
        &self.blacklist
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .map(|(name, extensions)| Category::new(name, extensions.iter().copied()))
            .collect();
        Self::new(categories, DEFAULT_BLACKLIST.iter().copied())
    }
}
