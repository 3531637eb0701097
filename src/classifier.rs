//! Syllable classifier.
//!
//! Each generated string is either given exactly one [`Category`] or
//! rejected. Abbreviated forms are checked first, complete syllables second.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::syllable::SyllableBase;

/// Syllable-shape category of a candidate string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Initials-only abbreviation (jianpin)
    Abbreviated,
    /// One complete syllable
    Single,
    /// Concatenation of several complete syllables.
    ///
    /// Never produced at the moment: no segmentation algorithm has been
    /// validated for it.
    Multi,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Abbreviated => "ABBREVIATED",
            Category::Single => "SINGLE",
            Category::Multi => "MULTI",
        }
    }
}

/// A generated string with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateString {
    pub text: String,
    pub category: Category,
}

impl CandidateString {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        CandidateString {
            text: text.into(),
            category,
        }
    }
}

/// Classifies strings against a shared [`SyllableBase`].
#[derive(Debug, Clone)]
pub struct Classifier {
    base: Arc<SyllableBase>,
}

impl Classifier {
    pub fn new(base: Arc<SyllableBase>) -> Self {
        Classifier { base }
    }

    /// Category of `s`, or `None` when it should not reach the engine.
    pub fn classify(&self, s: &str) -> Option<Category> {
        if s.is_empty() {
            return None;
        }
        if self.base.is_abbreviation(s) {
            return Some(Category::Abbreviated);
        }
        if self.base.is_syllable(s) {
            return Some(Category::Single);
        }
        None
    }
}
