//! Integration tests for the resolution pipeline
//!
//! These drive dictionary loading, generation, classification, aggregation
//! and the key state machine through the public API.

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;
use t9_pinyin::{
    Aggregator, CandidateString, Category, Config, DecodingEngine, Generator, KeyAction,
    LexiconEngine, Modifiers, Resolver, Session, SyllableBase, Trie,
};

fn data_dir(syllables: &str, abbreviations: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pinyin.txt"), syllables).unwrap();
    fs::write(dir.path().join("jianpin.txt"), abbreviations).unwrap();
    dir
}

fn texts(classified: &[CandidateString]) -> Vec<&str> {
    classified.iter().map(|c| c.text.as_str()).collect()
}

// =============================================================================
// Dictionary loading
// =============================================================================

#[test]
fn test_load_from_data_dir() {
    let dir = data_dir("a\nma\nni\nhao\n", "nh\nzg\n");
    let config = Config::default().with_data_dir(dir.path());
    let base = SyllableBase::load(&config);

    assert_eq!(base.syllable_count(), 4);
    assert_eq!(base.abbreviation_count(), 2);
    assert!(base.is_syllable("hao"));
    assert!(base.is_abbreviation("zg"));
}

#[test]
fn test_overlong_lines_are_skipped() {
    let dir = data_dir("ma\nabcdefghijk\n", "abcdefghijklmn\nabcdefghijklmno\n");
    let base = SyllableBase::load(&Config::default().with_data_dir(dir.path()));

    assert_eq!(base.syllable_count(), 1);
    assert!(base.is_abbreviation("abcdefghijklmn"));
    assert!(!base.is_abbreviation("abcdefghijklmno"));
}

#[test]
fn test_missing_dictionaries_degrade_to_empty() {
    let dir = TempDir::new().unwrap();
    let base = Arc::new(SyllableBase::load(&Config::default().with_data_dir(dir.path())));
    let resolver = Resolver::new(base);

    assert!(!resolver.generator().generate("64").unwrap().is_empty());
    assert!(resolver.resolve("64").unwrap().is_empty());
}

// =============================================================================
// Generator properties
// =============================================================================

#[test]
fn test_unpruned_size_is_product() {
    let gen = Generator::default();
    for digits in ["2", "79", "234", "9797", "2345678"] {
        let expected: usize = digits
            .chars()
            .map(|d| gen.keypad().letters(d).unwrap().len())
            .product();
        assert_eq!(gen.generate_unpruned(digits).unwrap().len(), expected, "{digits}");
    }
}

#[test]
fn test_pruned_is_subset_of_unpruned() {
    let gen = Generator::default();
    for digits in ["4", "88", "448", "8426"] {
        let full = gen.generate_unpruned(digits).unwrap();
        let pruned = gen.generate(digits).unwrap();
        assert!(pruned.len() < full.len(), "{digits}");
        assert!(pruned.iter().all(|s| full.contains(s)));
    }
}

#[test]
fn test_seven_digits_stay_bounded() {
    let gen = Generator::default();
    // 8 -> tuv: only 't' survives as a first letter
    let pruned = gen.generate("8999999").unwrap();
    assert_eq!(pruned.len(), 4usize.pow(6));
    assert_eq!(gen.generate_unpruned("8999999").unwrap().len(), 3 * 4usize.pow(6));
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn test_scenario_single_digit_two() {
    let base = Arc::new(SyllableBase::from_words(["a"], Vec::<&str>::new()));
    let resolver = Resolver::new(base);

    assert_eq!(resolver.generator().generate("2").unwrap(), vec!["a", "b", "c"]);
    let classified = resolver.resolve("2").unwrap();
    assert_eq!(classified, vec![CandidateString::new("a", Category::Single)]);
}

#[test]
fn test_abbreviation_priority_over_syllable() {
    let dir = data_dir("a\nma\n", "ma\n");
    let base = Arc::new(SyllableBase::load(&Config::default().with_data_dir(dir.path())));
    let resolver = Resolver::new(base);

    let classified = resolver.resolve("62").unwrap();
    assert_eq!(classified, vec![CandidateString::new("ma", Category::Abbreviated)]);
}

#[test]
fn test_categories_are_exclusive() {
    let resolver = Resolver::new(Arc::new(SyllableBase::builtin()));
    for digits in ["2", "64", "426", "94264", "746"] {
        let classified = resolver.resolve(digits).unwrap();
        let mut seen = std::collections::HashSet::new();
        for c in &classified {
            assert!(seen.insert(c.text.clone()), "{} classified twice", c.text);
            assert_ne!(c.category, Category::Multi);
        }
    }
}

#[test]
fn test_resolution_is_deterministic() {
    let resolver = Resolver::new(Arc::new(SyllableBase::builtin()));
    let first = resolver.resolve("94264").unwrap();
    let second = resolver.resolve("94264").unwrap();
    assert_eq!(first, second);
    assert_eq!(texts(&first), vec!["xiang", "zhang"]);
}

// =============================================================================
// Trie
// =============================================================================

#[test]
fn test_trie_round_trip() {
    let mut trie = Trie::new();
    trie.insert("bjdx");
    assert!(trie.search("bjdx"));

    for other in ["nh", "zg", "bj", "bjdxs"] {
        trie.insert(other);
    }
    assert!(trie.search("bjdx"));
    for end in 1..="bjdx".len() {
        assert!(trie.starts_with(&"bjdx"[..end]));
    }
    assert_eq!(trie.len(), 5);
}

// =============================================================================
// Aggregation
// =============================================================================

/// Reports a fixed candidate count for every lookup.
struct NoisyEngine(usize);

impl DecodingEngine for NoisyEngine {
    type Handle = usize;

    fn parse(&mut self, syllables: &str) -> usize {
        syllables.len()
    }
    fn guess_candidates(&mut self, _prefix: &str) -> bool {
        true
    }
    fn guess_full_syllable_candidates(&mut self, _prefix: &str) -> bool {
        true
    }
    fn guess_sentence_with_prefix(&mut self, _prefix: &str) -> bool {
        true
    }
    fn candidate_count(&self) -> usize {
        self.0
    }
    fn candidate(&self, index: usize) -> Option<usize> {
        Some(index)
    }
    fn candidate_string(&self, handle: &usize) -> Option<String> {
        Some(handle.to_string())
    }
}

#[test]
fn test_ambiguity_ceiling_discards_everything() {
    let resolver = Resolver::new(Arc::new(SyllableBase::from_words(["ni", "mi"], Vec::<&str>::new())));
    let classified = resolver.resolve("64").unwrap();
    assert_eq!(classified.len(), 2);

    let aggregator = Aggregator::default();
    assert!(aggregator.aggregate(&mut NoisyEngine(600), &classified).is_empty());
    assert_eq!(aggregator.aggregate(&mut NoisyEngine(20), &classified).len(), 32);
}

#[test]
fn test_lexicon_pipeline() {
    let resolver = Resolver::new(Arc::new(SyllableBase::builtin()));
    let mut engine = LexiconEngine::from_tsv("ni\t你\nxiang\t想\nxi'an\t西安\nzhang\t张\nzhang\t章\n");

    let classified = resolver.resolve("94264").unwrap();
    let words = Aggregator::default().aggregate(&mut engine, &classified);
    assert_eq!(words, vec!["想", "张", "章"]);
}

// =============================================================================
// Session
// =============================================================================

#[test]
fn test_erase_key_is_not_resolved() {
    let mut session = Session::new(
        Arc::new(SyllableBase::builtin()),
        LexiconEngine::from_tsv("o\t哦\n"),
        &Config::default(),
    );

    assert_eq!(session.on_key('6', Modifiers::NONE), KeyAction::ShowCandidates);
    assert_eq!(session.candidates()[0].text, "哦");
    assert_eq!(session.on_key('1', Modifiers::NONE), KeyAction::Clear);
    assert_eq!(session.preedit(), "");
}

#[test]
fn test_session_commit_flow() {
    let mut session = Session::new(
        Arc::new(SyllableBase::builtin()),
        LexiconEngine::from_tsv("ni\t你\nni hao\t你好\n"),
        &Config::default(),
    );

    for key in "64".chars() {
        session.on_key(key, Modifiers::NONE);
    }
    let shown: Vec<_> = session.page_candidates().iter().map(|c| c.text.clone()).collect();
    assert_eq!(shown, vec!["你", "你好"]);

    assert_eq!(session.on_key('0', Modifiers::NONE), KeyAction::UpdateWindow);
    assert_eq!(session.on_key('2', Modifiers::NONE), KeyAction::Commit("你好".to_string()));
    assert!(session.candidates().is_empty());
}
