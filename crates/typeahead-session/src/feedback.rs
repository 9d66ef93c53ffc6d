use typeahead_core::settings::settings;

use super::types::SessionState;
use super::Predictor;

impl Predictor {
    /// Reinforce `correct_word` and make it the bigram anchor.
    ///
    /// An empty word is a complete no-op. Otherwise the word's frequency is
    /// boosted when its node exists, and regardless of the lookup result the
    /// session commits to it: the prefix clears and the next word's bigram
    /// candidates come from this word's successor table. `is_correct_guess`
    /// is accepted for future differential handling; both values currently
    /// reinforce identically.
    pub fn feedback(&mut self, is_correct_guess: bool, correct_word: &str) {
        let _ = is_correct_guess;

        if correct_word.is_empty() {
            return;
        }

        let boost = settings().feedback.frequency_boost;
        // see candidate_gen for the rationale on ignoring lock poison
        if let Ok(mut lexicon) = self.lexicon.write() {
            lexicon.boost(correct_word, boost);
        }

        self.previous_word = Some(correct_word.to_string());
        self.state = SessionState::Idle;
    }
}
