//! Decoding engine interface and an in-memory lexicon implementation.
//!
//! The aggregator only talks to [`DecodingEngine`]. [`LexiconEngine`] is a
//! plain dictionary lookup used by the CLI, the benchmarks and the tests; it
//! does no ranking beyond file order.

use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::error::{Error, Result};

/// External phonetic decoding engine.
///
/// Calls are stateful: `parse` sets the current input, a `guess_*` call
/// fills the candidate list, and the accessors read it back.
pub trait DecodingEngine {
    /// Opaque reference to one candidate of the current list.
    type Handle;

    /// Parse a syllable string; returns how many bytes were understood.
    fn parse(&mut self, syllables: &str) -> usize;

    /// Plain candidate guess for the parsed input.
    fn guess_candidates(&mut self, prefix: &str) -> bool;

    /// Candidate guess treating the parsed input as full syllables.
    fn guess_full_syllable_candidates(&mut self, prefix: &str) -> bool;

    /// Sentence guess for the parsed input.
    fn guess_sentence_with_prefix(&mut self, prefix: &str) -> bool;

    fn candidate_count(&self) -> usize;

    fn candidate(&self, index: usize) -> Option<Self::Handle>;

    fn candidate_string(&self, handle: &Self::Handle) -> Option<String>;
}

/// One lexicon line: the pinyin of each character and the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub syllables: Vec<String>,
    pub word: String,
    joined: String,
    abbreviation: String,
}

impl LexiconEntry {
    pub fn new(syllables: Vec<String>, word: impl Into<String>) -> Self {
        let joined = syllables.concat();
        let abbreviation = syllables.iter().filter_map(|s| s.chars().next()).collect();
        LexiconEntry {
            syllables,
            word: word.into(),
            joined,
            abbreviation,
        }
    }

    /// All syllables concatenated
    pub fn joined(&self) -> &str {
        &self.joined
    }

    /// First letter of every syllable
    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }
}

/// Dictionary-backed [`DecodingEngine`].
#[derive(Debug, Clone, Default)]
pub struct LexiconEngine {
    entries: Vec<LexiconEntry>,
    parsed: String,
    candidates: Vec<usize>,
}

impl LexiconEngine {
    pub fn new() -> Self {
        LexiconEngine::default()
    }

    /// Load entries from TSV text: `<syllables>\t<word>` per line, syllables
    /// separated by spaces or `'`. Malformed lines are skipped.
    pub fn load_tsv(&mut self, content: &str) {
        for (lineno, line) in content.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.split('\t');
            let (Some(pinyin), Some(word)) = (parts.next(), parts.next()) else {
                warn!("lexicon line {}: expected <pinyin>\\t<word>", lineno + 1);
                continue;
            };

            let syllables: Vec<String> = pinyin
                .split(|c: char| c == ' ' || c == '\'')
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase)
                .collect();
            let word = word.trim();
            if syllables.is_empty() || word.is_empty() {
                warn!("lexicon line {}: empty pinyin or word", lineno + 1);
                continue;
            }

            self.entries.push(LexiconEntry::new(syllables, word));
        }
    }

    pub fn from_tsv(content: &str) -> Self {
        let mut engine = LexiconEngine::new();
        engine.load_tsv(content);
        engine
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::MissingData(path.to_path_buf()));
        }
        let engine = LexiconEngine::from_tsv(&fs::read_to_string(path)?);
        info!("loaded {} lexicon entries from {}", engine.len(), path.display());
        Ok(engine)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn fill<P>(&mut self, prefix: &str, predicate: P) -> bool
    where
        P: Fn(&LexiconEntry) -> bool,
    {
        self.candidates = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| predicate(e) && e.word.starts_with(prefix))
            .map(|(i, _)| i)
            .collect();
        !self.parsed.is_empty()
    }

    fn full_match(&mut self, prefix: &str) -> bool {
        let parsed = self.parsed.clone();
        self.fill(prefix, |e| e.joined() == parsed || e.abbreviation() == parsed)
    }
}

impl DecodingEngine for LexiconEngine {
    type Handle = usize;

    fn parse(&mut self, syllables: &str) -> usize {
        self.candidates.clear();
        let known = self
            .entries
            .iter()
            .any(|e| e.joined().starts_with(syllables) || e.abbreviation().starts_with(syllables));

        if known && !syllables.is_empty() {
            self.parsed = syllables.to_string();
            syllables.len()
        } else {
            self.parsed.clear();
            0
        }
    }

    fn guess_candidates(&mut self, prefix: &str) -> bool {
        let parsed = self.parsed.clone();
        self.fill(prefix, |e| e.syllables.len() == 1 && e.syllables[0] == parsed)
    }

    fn guess_full_syllable_candidates(&mut self, prefix: &str) -> bool {
        self.full_match(prefix)
    }

    fn guess_sentence_with_prefix(&mut self, prefix: &str) -> bool {
        self.full_match(prefix)
    }

    fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    fn candidate(&self, index: usize) -> Option<usize> {
        self.candidates.get(index).copied()
    }

    fn candidate_string(&self, handle: &usize) -> Option<String> {
        self.entries.get(*handle).map(|e| e.word.clone())
    }
}
