//! Host-facing key handling.
//!
//! A [`Session`] owns the digit buffer, the choose-mode flag and the current
//! candidate list. Every buffer change re-runs the full resolution
//! synchronously before the key handler returns.

use std::sync::Arc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::aggregator::Aggregator;
use crate::config::Config;
use crate::engine::DecodingEngine;
use crate::error::Result;
use crate::resolver::Resolver;
use crate::syllable::SyllableBase;

/// Input mode of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Digits build the buffer
    #[default]
    Normal,
    /// Digits page through and pick candidates
    Choosing,
}

/// Modifier keys held with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub super_key: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        super_key: false,
    };

    pub fn is_empty(&self) -> bool {
        *self == Modifiers::NONE
    }
}

/// What the host should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Not handled; the host processes the key itself
    PassThrough,
    /// The buffer is empty; hide preedit and candidates
    Clear,
    /// The candidate list changed; redisplay it
    ShowCandidates,
    /// Commit this text
    Commit(String),
    /// Only the window state (mode or page) changed
    UpdateWindow,
}

/// One entry of the candidate list shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayCandidate {
    pub text: String,
}

impl DisplayCandidate {
    pub fn new(text: impl Into<String>) -> Self {
        DisplayCandidate { text: text.into() }
    }

    /// The string to commit when this candidate is chosen.
    pub fn commit(&self) -> String {
        self.text.clone()
    }
}

pub struct Session<E: DecodingEngine> {
    resolver: Resolver,
    aggregator: Aggregator,
    engine: E,
    page_size: usize,
    buffer: String,
    mode: Mode,
    candidates: Vec<DisplayCandidate>,
    page: usize,
}

impl<E: DecodingEngine> Session<E> {
    pub fn new(base: Arc<SyllableBase>, engine: E, config: &Config) -> Self {
        Session {
            resolver: Resolver::new(base),
            aggregator: Aggregator::new(config.policies, config.max_candidates),
            engine,
            page_size: config.page_size.max(1),
            buffer: String::new(),
            mode: Mode::Normal,
            candidates: Vec::new(),
            page: 0,
        }
    }

    /// The raw digit buffer, shown as preedit.
    pub fn preedit(&self) -> &str {
        &self.buffer
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn candidates(&self) -> &[DisplayCandidate] {
        &self.candidates
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Candidates on the current page.
    pub fn page_candidates(&self) -> &[DisplayCandidate] {
        let start = (self.page * self.page_size).min(self.candidates.len());
        let end = (start + self.page_size).min(self.candidates.len());
        &self.candidates[start..end]
    }

    pub fn has_prev_page(&self) -> bool {
        self.page > 0
    }

    pub fn has_next_page(&self) -> bool {
        (self.page + 1) * self.page_size < self.candidates.len()
    }

    /// Resolve an arbitrary raw buffer without touching the session state.
    pub fn candidate_words(&mut self, raw: &str) -> Result<Vec<DisplayCandidate>> {
        let classified = self.resolver.resolve(raw)?;
        Ok(self
            .aggregator
            .aggregate(&mut self.engine, &classified)
            .into_iter()
            .map(DisplayCandidate::new)
            .collect())
    }

    /// Handle one key press.
    pub fn on_key(&mut self, symbol: char, modifiers: Modifiers) -> KeyAction {
        if !modifiers.is_empty() || !symbol.is_ascii_digit() {
            return KeyAction::PassThrough;
        }

        if symbol == '0' {
            self.mode = match self.mode {
                Mode::Normal => Mode::Choosing,
                Mode::Choosing => Mode::Normal,
            };
            debug!("mode -> {:?}", self.mode);
            return KeyAction::UpdateWindow;
        }

        match self.mode {
            Mode::Choosing => self.on_choosing_key(symbol),
            Mode::Normal => self.on_normal_key(symbol),
        }
    }

    fn on_choosing_key(&mut self, symbol: char) -> KeyAction {
        match symbol {
            '8' => {
                if self.has_prev_page() {
                    self.page -= 1;
                }
                KeyAction::UpdateWindow
            }
            '9' => {
                if self.has_next_page() {
                    self.page += 1;
                }
                KeyAction::UpdateWindow
            }
            _ => {
                // '1'..='7'
                let index = symbol as usize - '1' as usize;
                match self.page_candidates().get(index) {
                    Some(candidate) => {
                        let text = candidate.commit();
                        self.reset();
                        KeyAction::Commit(text)
                    }
                    None => KeyAction::UpdateWindow,
                }
            }
        }
    }

    fn on_normal_key(&mut self, symbol: char) -> KeyAction {
        if symbol == '1' {
            self.buffer.pop();
            if self.buffer.is_empty() {
                self.candidates.clear();
                self.page = 0;
                return KeyAction::Clear;
            }
        } else {
            self.buffer.push(symbol);
        }

        self.refresh();
        KeyAction::ShowCandidates
    }

    fn refresh(&mut self) {
        let raw = self.buffer.clone();
        self.candidates = match self.candidate_words(&raw) {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!("cannot resolve {:?}: {}", raw, e);
                Vec::new()
            }
        };
        self.page = 0;
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.candidates.clear();
        self.page = 0;
        self.mode = Mode::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::LexiconEngine;

    const LEXICON: &str = "ni\t你\nni\t泥\nni\t尼\nni\t拟\nni\t逆\nni\t腻\nni\t妮\nni\t倪\nni\t霓\nmi\t米\nni hao\t你好\n";

    fn session() -> Session<LexiconEngine> {
        Session::new(
            Arc::new(SyllableBase::builtin()),
            LexiconEngine::from_tsv(LEXICON),
            &Config::default(),
        )
    }

    fn press(session: &mut Session<LexiconEngine>, keys: &str) -> KeyAction {
        let mut action = KeyAction::PassThrough;
        for key in keys.chars() {
            action = session.on_key(key, Modifiers::NONE);
        }
        action
    }

    #[test]
    fn test_typing_resolves() {
        let mut s = session();
        assert_eq!(press(&mut s, "64"), KeyAction::ShowCandidates);
        assert_eq!(s.preedit(), "64");
        let texts: Vec<_> = s.candidates().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["米", "你", "泥", "尼", "拟", "逆", "腻", "妮", "倪", "霓", "你好"]);
    }

    #[test]
    fn test_erase() {
        let mut s = session();
        press(&mut s, "64");
        assert_eq!(s.on_key('1', Modifiers::NONE), KeyAction::ShowCandidates);
        assert_eq!(s.preedit(), "6");
        assert_eq!(s.on_key('1', Modifiers::NONE), KeyAction::Clear);
        assert_eq!(s.preedit(), "");
        assert!(s.candidates().is_empty());
        assert_eq!(s.on_key('1', Modifiers::NONE), KeyAction::Clear);
    }

    #[test]
    fn test_choose_and_commit() {
        let mut s = session();
        press(&mut s, "64");
        assert_eq!(s.on_key('0', Modifiers::NONE), KeyAction::UpdateWindow);
        assert_eq!(s.mode(), Mode::Choosing);
        assert_eq!(s.on_key('2', Modifiers::NONE), KeyAction::Commit("你".to_string()));
        assert_eq!(s.mode(), Mode::Normal);
        assert_eq!(s.preedit(), "");
    }

    #[test]
    fn test_paging() {
        let mut s = session();
        press(&mut s, "640");
        assert!(!s.has_prev_page());
        assert!(s.has_next_page());
        assert_eq!(s.page_candidates().len(), 7);

        assert_eq!(s.on_key('9', Modifiers::NONE), KeyAction::UpdateWindow);
        assert_eq!(s.page(), 1);
        assert_eq!(s.page_candidates().len(), 4);
        s.on_key('9', Modifiers::NONE);
        assert_eq!(s.page(), 1);

        assert_eq!(s.on_key('7', Modifiers::NONE), KeyAction::UpdateWindow);
        assert_eq!(s.on_key('2', Modifiers::NONE), KeyAction::Commit("倪".to_string()));

        press(&mut s, "640");
        s.on_key('8', Modifiers::NONE);
        assert_eq!(s.page(), 0);
    }

    #[test]
    fn test_toggle_back_to_normal() {
        let mut s = session();
        press(&mut s, "600");
        assert_eq!(s.mode(), Mode::Normal);
        assert_eq!(press(&mut s, "4"), KeyAction::ShowCandidates);
        assert_eq!(s.preedit(), "64");
    }

    #[test]
    fn test_pass_through() {
        let mut s = session();
        assert_eq!(s.on_key('a', Modifiers::NONE), KeyAction::PassThrough);
        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        };
        assert_eq!(s.on_key('2', ctrl), KeyAction::PassThrough);
        assert_eq!(s.preedit(), "");
    }

    #[test]
    fn test_candidate_words_is_stateless() {
        let mut s = session();
        press(&mut s, "6");
        let words = s.candidate_words("64").unwrap();
        assert_eq!(words[0], DisplayCandidate::new("米"));
        assert_eq!(s.preedit(), "6");
        assert!(s.candidate_words("6x").is_err());
    }
}
