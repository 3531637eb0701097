//! Digit-key table.
//!
//! Maps each of the ten phone keys to the Latin letters printed on it.
//! `'1'` and `'0'` carry no letters: the host uses them as erase and
//! mode-toggle keys.

use crate::error::{Error, Result};

/// Letters on each key of a standard phone keypad, indexed by digit value.
pub const STANDARD_LAYOUT: [&str; 10] = [
    "",     // 0
    "",     // 1
    "abc",  // 2
    "def",  // 3
    "ghi",  // 4
    "jkl",  // 5
    "mno",  // 6
    "pqrs", // 7
    "tuv",  // 8
    "wxyz", // 9
];

/// A digit-to-letters table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keypad {
    layout: [&'static str; 10],
}

impl Keypad {
    /// Create a keypad with a custom layout
    pub fn with_layout(layout: [&'static str; 10]) -> Self {
        Keypad { layout }
    }

    /// Letters for a digit, in keypad order.
    ///
    /// Returns `InvalidKey` for anything that is not an ASCII digit.
    pub fn letters(&self, digit: char) -> Result<&'static str> {
        digit
            .to_digit(10)
            .map(|d| self.layout[d as usize])
            .ok_or(Error::InvalidKey(digit))
    }

    /// Whether the digit expands to at least one letter
    pub fn is_letter_key(&self, digit: char) -> bool {
        matches!(self.letters(digit), Ok(letters) if !letters.is_empty())
    }

    /// Number of strings the unpruned expansion of `digits` produces.
    pub fn expansion_size(&self, digits: &str) -> Result<usize> {
        digits
            .chars()
            .try_fold(1usize, |acc, d| Ok(acc.saturating_mul(self.letters(d)?.len())))
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Keypad::with_layout(STANDARD_LAYOUT)
    }
}
