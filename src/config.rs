//! Category table and blacklist configuration.
//!
//! This module provides support for adjusting the classification table via
//! TOML configuration files. The shipped defaults are used when no file is
//! found; a config file replaces both the categories and the blacklist
//! wholesale.
//!
//! # Configuration File Format
//!
//! Configuration is stored in TOML format with the following structure:
//!
//! ```toml
//! [sorting]
//! blacklist = ["go", "mod", "exe"]
//!
//! [[sorting.category]]
//! name = "music"
//! extensions = ["mp3", "aac", "wav", "flac"]
//!
//! [[sorting.category]]
//! name = "images"
//! extensions = ["jpg", "jpeg", "png", "gif", "svg", "tiff"]
//! ```
//!
//! Categories keep their declared order, and a token may appear in at most
//! one category; `compile` rejects duplicates instead of letting lookup
//! order decide.

use crate::category::{Category, CategoryTable, DEFAULT_BLACKLIST, DEFAULT_CATEGORIES};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Configuration file not found at the specified path.
    ConfigNotFound(PathBuf),
    /// Invalid TOML syntax or structure.
    ConfigInvalid(String),
    /// A category was declared without a name.
    EmptyCategoryName,
    /// A category was declared with no extension tokens.
    EmptyExtensionList {
        /// The category missing its tokens.
        category: String,
    },
    /// The same extension token appears in two categories (or twice in one).
    DuplicateExtension {
        /// The offending token.
        extension: String,
        /// The category that declared it first.
        first: String,
        /// The category that declared it again.
        second: String,
    },
    /// IO error while reading configuration.
    IoError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ConfigNotFound(path) => {
                write!(f, "Configuration file not found: {}", path.display())
            }
            ConfigError::ConfigInvalid(msg) => write!(f, "Invalid configuration: {}", msg),
            ConfigError::EmptyCategoryName => {
                write!(f, "Invalid configuration: category with an empty name")
            }
            ConfigError::EmptyExtensionList { category } => {
                write!(
                    f,
                    "Invalid configuration: category '{}' has no extensions",
                    category
                )
            }
            ConfigError::DuplicateExtension {
                extension,
                first,
                second,
            } => {
                write!(
                    f,
                    "Invalid configuration: extension '{}' appears in both '{}' and '{}'",
                    extension, first, second
                )
            }
            ConfigError::IoError(msg) => write!(f, "IO error reading configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Top-level configuration for the sorting engine.
///
/// This struct is deserialized from TOML configuration files and contains
/// the category table and the catch-all blacklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortConfig {
    pub sorting: SortRules,
}

/// Root-level sorting rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortRules {
    /// Extension tokens exempt from the catch-all sweep.
    #[serde(default)]
    pub blacklist: Vec<String>,

    /// Categories in precedence order.
    #[serde(default, rename = "category")]
    pub categories: Vec<CategoryRule>,
}

/// A single category declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Category name, which doubles as its directory name.
    pub name: String,

    /// Extension tokens belonging to this category (no leading dot).
    pub extensions: Vec<String>,
}

impl SortConfig {
    /// Load configuration from a file, with fallback to defaults.
    ///
    /// Attempts to load configuration in the following order:
    /// 1. If `config_path` is provided, load from that file
    /// 2. Look for `.dirsortrc.toml` in the current directory
    /// 3. Look for `~/.config/dirsort/config.toml` in home directory
    /// 4. Fall back to default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is explicitly provided but
    /// cannot be read.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        // If explicitly specified, load from that path
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        // Try current directory
        let local_config = PathBuf::from(".dirsortrc.toml");
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        // Try home directory
        if let Ok(home) = std::env::var("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("dirsort")
                .join("config.toml");
            if home_config.exists() {
                return Self::load_from_file(&home_config);
            }
        }

        // Fall back to defaults
        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigNotFound` if file does not exist.
    /// Returns `ConfigError::ConfigInvalid` if TOML parsing fails.
    /// Returns `ConfigError::IoError` if file cannot be read.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::ConfigInvalid(e.to_string()))
    }

    /// Validate the configuration and compile it into a `CategoryTable`.
    ///
    /// Tokens are lowercased during compilation, so `JPG` and `jpg` count
    /// as the same token.
    ///
    /// # Errors
    ///
    /// Returns an error if a category has an empty name or token list, or
    /// if any token appears more than once across the table.
    pub fn compile(self) -> Result<CategoryTable, ConfigError> {
        let mut seen: HashMap<String, String> = HashMap::new();
        let mut categories = Vec::with_capacity(self.sorting.categories.len());

        for rule in &self.sorting.categories {
            if rule.name.is_empty() {
                return Err(ConfigError::EmptyCategoryName);
            }
            if rule.extensions.is_empty() {
                return Err(ConfigError::EmptyExtensionList {
                    category: rule.name.clone(),
                });
            }

            for ext in &rule.extensions {
                let token = ext.to_lowercase();
                if let Some(first) = seen.insert(token.clone(), rule.name.clone()) {
                    return Err(ConfigError::DuplicateExtension {
                        extension: token,
                        first,
                        second: rule.name.clone(),
                    });
                }
            }

            categories.push(Category::new(&rule.name, rule.extensions.iter()));
        }

        Ok(CategoryTable::new(categories, self.sorting.blacklist.iter()))
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            sorting: SortRules {
                blacklist: DEFAULT_BLACKLIST.iter().map(|s| s.to_string()).collect(),
                categories: DEFAULT_CATEGORIES
                    .iter()
                    .map(|(name, extensions)| CategoryRule {
                        name: name.to_string(),
                        extensions: extensions.iter().map(|e| e.to_string()).collect(),
                    })
                    .collect(),
            },
        }
    }
}
