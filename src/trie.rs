//! Prefix tree over short Latin-letter strings.
//!
//! Used to recognize abbreviated (jianpin) forms with exact-match and
//! prefix-match queries in time proportional to the query length.

use std::collections::HashMap;

/// A node in the Trie
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// Children nodes, keyed by letter
    pub children: HashMap<char, TrieNode>,
    /// Whether this node marks the end of an inserted word
    pub is_leaf: bool,
}

impl TrieNode {
    /// Create a new empty node
    pub fn new() -> Self {
        TrieNode::default()
    }

    /// Check if this node is a valid word ending
    pub fn is_match(&self) -> bool {
        self.is_leaf
    }
}

/// A Trie for storing and looking up short strings
#[derive(Debug, Default, Clone)]
pub struct Trie {
    /// The root node
    root: TrieNode,
    /// Number of distinct words in the trie
    word_count: usize,
}

impl Trie {
    /// Create a new empty Trie
    pub fn new() -> Self {
        Trie::default()
    }

    /// Get the number of words in the trie
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Check if the trie is empty
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Insert a word. Inserting the same word twice leaves the trie unchanged.
    pub fn insert(&mut self, word: &str) {
        let mut current = &mut self.root;

        for c in word.chars() {
            current = current.children.entry(c).or_insert_with(TrieNode::new);
        }

        if !current.is_leaf {
            self.word_count += 1;
        }
        current.is_leaf = true;
    }

    /// Exact-match query: the path exists and ends on an inserted word.
    pub fn search(&self, word: &str) -> bool {
        self.find(word).is_some_and(TrieNode::is_match)
    }

    /// Prefix query: some inserted word starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    fn find(&self, key: &str) -> Option<&TrieNode> {
        let mut current = &self.root;

        for c in key.chars() {
            match current.children.get(&c) {
                Some(node) => current = node,
                None => return None,
            }
        }

        Some(current)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        for word in iter {
            trie.insert(word.as_ref());
        }
        trie
    }
}
