//! # t9-pinyin
//!
//! Digit-to-syllable resolution core of a T9-style pinyin input method.
//!
//! A digit buffer typed on a phone keypad is expanded into the letter strings
//! it could stand for, each string is classified as an abbreviated form or a
//! complete syllable, and the classified strings are sent to a decoding
//! engine whose answers are merged into one capped candidate list.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use t9_pinyin::{Aggregator, LexiconEngine, Resolver, SyllableBase};
//!
//! let base = Arc::new(SyllableBase::builtin());
//! let resolver = Resolver::new(base);
//!
//! // 6 -> mno, 4 -> ghi
//! let classified = resolver.resolve("64").unwrap();
//! assert!(classified.iter().any(|c| c.text == "ni"));
//!
//! let mut engine = LexiconEngine::from_tsv("ni\t你\nni hao\t你好");
//! let words = Aggregator::default().aggregate(&mut engine, &classified);
//! assert_eq!(words, vec!["你", "你好"]);
//! ```
//!
//! ## Key Handling
//!
//! [`Session`] wraps the pipeline in the two-mode key state machine a host
//! input-method framework drives.

pub mod aggregator;
pub mod classifier;
pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod keypad;
pub mod resolver;
pub mod session;
pub mod syllable;
pub mod trie;

// Re-export main types for convenience
pub use aggregator::{Aggregator, LookupMode, LookupPolicy, Policies, BUCKET_ORDER};
pub use classifier::{CandidateString, Category, Classifier};
pub use config::Config;
pub use engine::{DecodingEngine, LexiconEngine, LexiconEntry};
pub use error::{Error, Result};
pub use generator::Generator;
pub use keypad::Keypad;
pub use resolver::Resolver;
pub use session::{DisplayCandidate, KeyAction, Mode, Modifiers, Session};
pub use syllable::SyllableBase;
pub use trie::{Trie, TrieNode};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
