//! Digit buffer to classified candidate strings.
//!
//! The classifier runs on each string as the generator emits it, so rejected
//! strings are never collected.

use std::sync::Arc;

use log::debug;

use crate::classifier::{CandidateString, Classifier};
use crate::error::Result;
use crate::generator::Generator;
use crate::keypad::Keypad;
use crate::syllable::SyllableBase;

#[derive(Debug, Clone)]
pub struct Resolver {
    generator: Generator,
    classifier: Classifier,
}

impl Resolver {
    /// Create a resolver over the standard keypad
    pub fn new(base: Arc<SyllableBase>) -> Self {
        Resolver::with_keypad(base, Keypad::default())
    }

    pub fn with_keypad(base: Arc<SyllableBase>, keypad: Keypad) -> Self {
        Resolver {
            generator: Generator::new(keypad),
            classifier: Classifier::new(base),
        }
    }

    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    /// Classified strings for `digits`, in generator order.
    pub fn resolve(&self, digits: &str) -> Result<Vec<CandidateString>> {
        let mut out = Vec::new();
        let mut generated = 0usize;

        self.generator.for_each(digits, |s| {
            generated += 1;
            if let Some(category) = self.classifier.classify(s) {
                out.push(CandidateString::new(s, category));
            }
        })?;

        debug!(
            "{:?}: {} strings generated, {} classified",
            digits,
            generated,
            out.len()
        );
        Ok(out)
    }
}
