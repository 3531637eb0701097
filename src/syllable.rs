//! Syllable base: the complete-syllable set and the abbreviation trie.
//!
//! Both tables are loaded once, from two line-oriented dictionary files, and
//! are read-only afterwards. A missing or unreadable file degrades to an
//! empty table.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::Config;
use crate::trie::Trie;

/// Longest complete syllable accepted from a dictionary file.
pub const MAX_SYLLABLE_LEN: usize = 9;

/// Longest abbreviated form accepted from a dictionary file.
pub const MAX_ABBREVIATION_LEN: usize = 14;

/// Complete syllable table shipped with the crate.
pub const BUILTIN_SYLLABLES: &str = include_str!("../data/pinyin.txt");

/// Abbreviation table shipped with the crate.
pub const BUILTIN_ABBREVIATIONS: &str = include_str!("../data/jianpin.txt");

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]+$").unwrap());

/// The loaded syllable tables.
#[derive(Debug, Clone, Default)]
pub struct SyllableBase {
    complete: HashSet<String>,
    abbreviations: Trie,
}

impl SyllableBase {
    /// Create an empty base. Every classification against it is rejected.
    pub fn new() -> Self {
        SyllableBase::default()
    }

    /// Build a base from in-memory word lists.
    pub fn from_words<S, A>(syllables: S, abbreviations: A) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        SyllableBase {
            complete: syllables.into_iter().map(Into::into).collect(),
            abbreviations: abbreviations.into_iter().collect(),
        }
    }

    /// The tables compiled into the crate.
    pub fn builtin() -> Self {
        SyllableBase::from_words(
            parse_table(BUILTIN_SYLLABLES, MAX_SYLLABLE_LEN),
            parse_table(BUILTIN_ABBREVIATIONS, MAX_ABBREVIATION_LEN),
        )
    }

    /// Load both tables from the files named by `config`.
    pub fn load(config: &Config) -> Self {
        SyllableBase::from_files(config.syllable_path(), config.abbreviation_path())
    }

    /// Load both tables from explicit paths.
    pub fn from_files(syllables: impl AsRef<Path>, abbreviations: impl AsRef<Path>) -> Self {
        let base = SyllableBase::from_words(
            load_table(syllables.as_ref(), MAX_SYLLABLE_LEN),
            load_table(abbreviations.as_ref(), MAX_ABBREVIATION_LEN),
        );
        info!(
            "loaded {} syllables and {} abbreviations",
            base.syllable_count(),
            base.abbreviation_count()
        );
        base
    }

    /// Exact membership in the complete-syllable set.
    pub fn is_syllable(&self, s: &str) -> bool {
        self.complete.contains(s)
    }

    /// Exact match of an abbreviated form.
    pub fn is_abbreviation(&self, s: &str) -> bool {
        self.abbreviations.search(s)
    }

    pub fn syllable_count(&self) -> usize {
        self.complete.len()
    }

    pub fn abbreviation_count(&self) -> usize {
        self.abbreviations.len()
    }
}

/// Read one dictionary file. Failures are logged and yield an empty table.
pub fn load_table(path: &Path, max_len: usize) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(content) => parse_table(&content, max_len),
        Err(e) => {
            warn!("cannot read {}: {}; using an empty table", path.display(), e);
            Vec::new()
        }
    }
}

/// Parse dictionary content: one token per line, `#` comments, blank lines
/// skipped, tokens outside `[a-z]{1,max_len}` dropped.
pub fn parse_table(content: &str, max_len: usize) -> Vec<String> {
    let mut tokens = Vec::new();

    for (lineno, line) in content.lines().enumerate() {
        let token = line.trim();
        if token.is_empty() || token.starts_with('#') {
            continue;
        }
        if !TOKEN_RE.is_match(token) {
            warn!("line {}: skipping malformed token {:?}", lineno + 1, token);
            continue;
        }
        if token.len() > max_len {
            warn!(
                "line {}: skipping {:?}, longer than {} letters",
                lineno + 1,
                token,
                max_len
            );
            continue;
        }
        tokens.push(token.to_string());
    }

    tokens
}
