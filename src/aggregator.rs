//! Candidate aggregator.
//!
//! Sends every classified string to the decoding engine with the lookup
//! policy of its category, drops lookups that are too ambiguous, and merges
//! the per-category buckets into one list.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::classifier::{CandidateString, Category};
use crate::config::DEFAULT_MAX_CANDIDATES;
use crate::engine::DecodingEngine;

/// Order in which category buckets are flattened. Single syllables rank
/// first, abbreviations second, multi-syllable sequences last.
pub const BUCKET_ORDER: [Category; 3] = [Category::Single, Category::Abbreviated, Category::Multi];

/// Which engine calls a lookup makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupMode {
    /// `guess_candidates`
    Candidates,
    /// `guess_sentence_with_prefix` followed by `guess_full_syllable_candidates`
    SentenceThenFullSyllable,
}

/// How one category is looked up and how much of the answer is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupPolicy {
    pub mode: LookupMode,
    /// Maximum results taken from one lookup
    pub take: usize,
    /// Lookups reporting more candidates than this are discarded whole
    pub ceiling: Option<usize>,
}

impl LookupPolicy {
    pub const fn new(mode: LookupMode, take: usize, ceiling: Option<usize>) -> Self {
        LookupPolicy {
            mode,
            take,
            ceiling,
        }
    }

    fn exceeds_ceiling(&self, count: usize) -> bool {
        self.ceiling.is_some_and(|ceiling| count > ceiling)
    }
}

/// Lookup policies for each category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policies {
    pub abbreviated: LookupPolicy,
    pub single: LookupPolicy,
    pub multi: LookupPolicy,
}

impl Default for Policies {
    fn default() -> Self {
        Policies {
            abbreviated: LookupPolicy::new(LookupMode::SentenceThenFullSyllable, 10, None),
            single: LookupPolicy::new(LookupMode::Candidates, 16, Some(500)),
            multi: LookupPolicy::new(LookupMode::SentenceThenFullSyllable, 6, Some(100)),
        }
    }
}

impl Policies {
    pub fn get(&self, category: Category) -> &LookupPolicy {
        match category {
            Category::Abbreviated => &self.abbreviated,
            Category::Single => &self.single,
            Category::Multi => &self.multi,
        }
    }
}

fn bucket_index(category: Category) -> usize {
    BUCKET_ORDER
        .iter()
        .position(|c| *c == category)
        .unwrap_or(BUCKET_ORDER.len() - 1)
}

#[derive(Debug, Clone)]
pub struct Aggregator {
    policies: Policies,
    max_candidates: usize,
}

impl Default for Aggregator {
    fn default() -> Self {
        Aggregator::new(Policies::default(), DEFAULT_MAX_CANDIDATES)
    }
}

impl Aggregator {
    pub fn new(policies: Policies, max_candidates: usize) -> Self {
        Aggregator {
            policies,
            max_candidates,
        }
    }

    /// Words for each bucket, in [`BUCKET_ORDER`].
    pub fn buckets<E: DecodingEngine>(
        &self,
        engine: &mut E,
        candidates: &[CandidateString],
    ) -> [Vec<String>; 3] {
        let mut buckets: [Vec<String>; 3] = Default::default();

        for candidate in candidates {
            let words = self.lookup(engine, candidate);
            buckets[bucket_index(candidate.category)].extend(words);
        }

        buckets
    }

    /// The flattened, capped candidate list.
    pub fn aggregate<E: DecodingEngine>(
        &self,
        engine: &mut E,
        candidates: &[CandidateString],
    ) -> Vec<String> {
        self.buckets(engine, candidates)
            .into_iter()
            .flatten()
            .take(self.max_candidates)
            .collect()
    }

    /// Words the engine offers for one classified string.
    pub fn lookup<E: DecodingEngine>(&self, engine: &mut E, candidate: &CandidateString) -> Vec<String> {
        let policy = self.policies.get(candidate.category);
        let text = candidate.text.as_str();

        if engine.parse(text) == 0 {
            debug!("{:?}: not understood by the engine", text);
            return Vec::new();
        }

        let guessed = match policy.mode {
            LookupMode::Candidates => engine.guess_candidates(""),
            LookupMode::SentenceThenFullSyllable => {
                engine.guess_sentence_with_prefix("") && engine.guess_full_syllable_candidates("")
            }
        };
        if !guessed {
            return Vec::new();
        }

        let count = engine.candidate_count();
        if policy.exceeds_ceiling(count) {
            debug!(
                "{:?} ({}): {} candidates over ceiling {:?}, discarded",
                text,
                candidate.category.as_str(),
                count,
                policy.ceiling
            );
            return Vec::new();
        }

        debug!(
            "{:?} ({}): {} candidates, taking {}",
            text,
            candidate.category.as_str(),
            count,
            count.min(policy.take)
        );
        (0..count.min(policy.take))
            .filter_map(|i| engine.candidate(i))
            .filter_map(|h| engine.candidate_string(&h))
            .collect()
    }
}
