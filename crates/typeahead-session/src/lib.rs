//! Stateful prediction session turning keystrokes into ranked suggestions.
//!
//! `Predictor` owns the per-session state (the prefix being composed and the
//! last committed word) and wraps a shared `Lexicon`. Every `guess` call
//! returns exactly [`SUGGESTION_COUNT`] completion strings; feedback
//! reinforces the model and anchors bigram prediction for the next word.

mod candidate_gen;
mod feedback;
mod guess;
pub(crate) mod types;

#[cfg(test)]
mod tests;

use std::sync::{Arc, RwLock};

use typeahead_core::ingest::{self, CorpusKind};
use typeahead_core::Lexicon;

pub use types::{Suggestions, SUGGESTION_COUNT};

use types::SessionState;

/// Stateful prediction session encapsulating keystroke handling.
///
/// The lexicon sits behind an `RwLock` so several sessions can share one
/// model: `guess` takes the read lock, `load` and feedback boosts take the
/// write lock. Session fields are owned here and never shared.
pub struct Predictor {
    lexicon: Arc<RwLock<Lexicon>>,
    state: SessionState,
    /// Bigram anchor: the last word committed via feedback.
    previous_word: Option<String>,
}

impl Predictor {
    pub fn new(lexicon: Arc<RwLock<Lexicon>>) -> Self {
        Self {
            lexicon,
            state: SessionState::Idle,
            previous_word: None,
        }
    }

    /// Fresh predictor over its own empty lexicon.
    pub fn with_empty_lexicon() -> Self {
        Self::new(Arc::new(RwLock::new(Lexicon::new())))
    }

    /// Shared handle to the underlying lexicon.
    pub fn lexicon(&self) -> Arc<RwLock<Lexicon>> {
        Arc::clone(&self.lexicon)
    }

    /// Ingest already-read text. Dictionary text seeds word frequencies
    /// only; message text additionally trains the successor tables.
    pub fn load(&mut self, text: &str, is_dictionary: bool) {
        let kind = if is_dictionary {
            CorpusKind::Dictionary
        } else {
            CorpusKind::Messages
        };
        // Ignore RwLock poison: a panicked writer elsewhere degrades this
        // session to a stale model instead of cascading.
        if let Ok(mut lexicon) = self.lexicon.write() {
            ingest::load_text(&mut lexicon, text, kind);
        }
    }

    pub fn is_composing(&self) -> bool {
        matches!(self.state, SessionState::Composing(_))
    }

    /// Letters typed so far for the word currently being composed.
    pub fn current_prefix(&self) -> &str {
        match &self.state {
            SessionState::Composing(c) => &c.prefix,
            SessionState::Idle => "",
        }
    }

    /// The bigram anchor, if a word has been committed since the last
    /// whitespace.
    pub fn previous_word(&self) -> Option<&str> {
        self.previous_word.as_deref()
    }
}
