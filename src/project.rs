//! Game settings discovery and configuration
//!
//! An optional `twentyq.toml` in the current directory (or any parent) picks
//! the tree file and the answer a fresh tree starts with:
//!
//! ```toml
//! tree-file = "questions.txt"
//! default-answer = "computer"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const SETTINGS_FILE: &str = "twentyq.toml";
const DEFAULT_TREE_FILE: &str = "questions.txt";
const DEFAULT_ANSWER: &str = "computer";

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("Failed to read twentyq.toml: {0}")]
    ConfigReadError(#[from] std::io::Error),

    #[error("Failed to parse twentyq.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
struct SettingsFile {
    tree_file: Option<String>,
    default_answer: Option<String>,
}

#[derive(Debug)]
pub struct Settings {
    /// Where the question tree is persisted, relative paths anchored at the
    /// settings file's directory
    pub tree_file: PathBuf,
    /// Text of the single leaf a fresh tree starts with
    pub default_answer: String,
}

impl Settings {
    /// Discover settings by searching for `twentyq.toml` upward from the
    /// current directory; fall back to defaults if none exists
    pub fn discover() -> Result<Self, ProjectError> {
        let current_dir = std::env::current_dir()?;

        match Self::find_settings_root(&current_dir) {
            Some(root) => {
                let content = fs::read_to_string(root.join(SETTINGS_FILE))?;
                let file: SettingsFile = toml::from_str(&content)?;
                Ok(Self::from_file(file, &root))
            }
            None => Ok(Self::from_file(SettingsFile::default(), &current_dir)),
        }
    }

    fn from_file(file: SettingsFile, root: &Path) -> Self {
        Settings {
            tree_file: root.join(file.tree_file.as_deref().unwrap_or(DEFAULT_TREE_FILE)),
            default_answer: file
                .default_answer
                .unwrap_or_else(|| DEFAULT_ANSWER.to_string()),
        }
    }

    fn find_settings_root(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(SETTINGS_FILE).exists() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }
}
