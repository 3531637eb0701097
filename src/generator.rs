//! Pruned combination generator.
//!
//! Expands a digit string into every letter string the keypad allows,
//! depth-first and left to right over each key's letters. A branch whose
//! first letter cannot start a syllable is cut before it is expanded, so
//! the explored tree stays a fraction of the full product.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::error::Result;
use crate::keypad::Keypad;

/// Letters that can begin a syllable as its initial consonant.
pub static INITIALS: Lazy<HashSet<char>> = Lazy::new(|| "bpmfdtlngkhjqxrzcs".chars().collect());

/// Syllables that start with a vowel or a glide instead of an initial.
pub static SPECIAL_SYLLABLES: &[&str] = &[
    "a", "o", "e", "ai", "ei", "ao", "ou", "an", "ang", "en", "eng", "ong", "wu", "wa", "wo",
    "wai", "wei", "wen", "wang", "wan", "weng", "yi", "ya", "ye", "yao", "yu", "yan", "yang",
    "yin", "ying", "yong", "yue", "yuan", "yun",
];

static SPECIAL_STARTS: Lazy<HashSet<char>> = Lazy::new(|| {
    SPECIAL_SYLLABLES
        .iter()
        .filter_map(|s| s.chars().next())
        .collect()
});

/// Whether `c` may be the first letter of a generated string.
pub fn is_valid_start(c: char) -> bool {
    INITIALS.contains(&c) || SPECIAL_STARTS.contains(&c)
}

/// Expands digit strings into candidate letter strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator {
    keypad: Keypad,
}

impl Generator {
    pub fn new(keypad: Keypad) -> Self {
        Generator { keypad }
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Stream every surviving expansion of `digits` to `visit`, in
    /// enumeration order.
    ///
    /// Empty input yields exactly one empty string. A key that carries no
    /// letters (`'0'`, `'1'`) yields nothing. Any non-digit is rejected
    /// before a single string is produced.
    pub fn for_each<F>(&self, digits: &str, mut visit: F) -> Result<()>
    where
        F: FnMut(&str),
    {
        let keys = self.key_letters(digits)?;
        let mut scratch = String::with_capacity(keys.len());
        expand(&keys, &mut scratch, true, &mut visit);
        Ok(())
    }

    /// Collect the pruned expansion.
    pub fn generate(&self, digits: &str) -> Result<Vec<String>> {
        let mut out = Vec::new();
        self.for_each(digits, |s| out.push(s.to_string()))?;
        Ok(out)
    }

    /// Collect the full expansion, without pruning.
    pub fn generate_unpruned(&self, digits: &str) -> Result<Vec<String>> {
        let keys = self.key_letters(digits)?;
        let mut out = Vec::new();
        let mut scratch = String::with_capacity(keys.len());
        expand(&keys, &mut scratch, false, &mut |s: &str| out.push(s.to_string()));
        Ok(out)
    }

    fn key_letters(&self, digits: &str) -> Result<Vec<&'static str>> {
        digits.chars().map(|d| self.keypad.letters(d)).collect()
    }
}

fn expand<F>(keys: &[&str], scratch: &mut String, prune: bool, visit: &mut F)
where
    F: FnMut(&str),
{
    let Some((letters, rest)) = keys.split_first() else {
        visit(scratch);
        return;
    };

    let first = scratch.is_empty();
    for c in letters.chars() {
        if prune && first && !is_valid_start(c) {
            continue;
        }
        scratch.push(c);
        expand(rest, scratch, prune, visit);
        scratch.pop();
    }
}
