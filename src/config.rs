//! Runtime configuration.
//!
//! Everything has a default; a JSON file may override any subset of fields.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::aggregator::Policies;
use crate::error::{Error, Result};

/// Default file name of the complete-syllable table.
pub const DEFAULT_SYLLABLE_FILE: &str = "pinyin.txt";

/// Default file name of the abbreviation table.
pub const DEFAULT_ABBREVIATION_FILE: &str = "jianpin.txt";

/// Candidates shown per UI page.
pub const DEFAULT_PAGE_SIZE: usize = 7;

/// Upper bound on the flattened candidate list.
pub const DEFAULT_MAX_CANDIDATES: usize = 100;

/// Get the default data directory.
/// Returns <data_dir>/t9-pinyin, or `.` when the platform has none.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("t9-pinyin"))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the dictionary files
    pub data_dir: PathBuf,
    pub syllable_file: String,
    pub abbreviation_file: String,
    pub page_size: usize,
    pub max_candidates: usize,
    /// Per-category engine lookup policies
    pub policies: Policies,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: default_data_dir(),
            syllable_file: DEFAULT_SYLLABLE_FILE.to_string(),
            abbreviation_file: DEFAULT_ABBREVIATION_FILE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            policies: Policies::default(),
        }
    }
}

impl Config {
    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::MissingData(path.to_path_buf()));
        }
        Config::from_json(&fs::read_to_string(path)?)
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn syllable_path(&self) -> PathBuf {
        self.data_dir.join(&self.syllable_file)
    }

    pub fn abbreviation_path(&self) -> PathBuf {
        self.data_dir.join(&self.abbreviation_file)
    }
}
