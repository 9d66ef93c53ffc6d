use super::types::{normalize_letter, placeholders, Composition, SessionState, Suggestions};
use super::Predictor;

impl Predictor {
    /// Process one keystroke and return exactly three suggestions.
    ///
    /// Whitespace is a word boundary: the prefix and the bigram anchor both
    /// reset and every slot is a placeholder. `letter_position == 0`
    /// restarts the prefix before the letter is applied. Any other
    /// non-letter keystroke yields placeholders without extending the
    /// prefix. `word_index` is caller-side context and never affects
    /// ranking.
    pub fn guess(&mut self, letter: char, letter_position: usize, word_index: usize) -> Suggestions {
        let _ = word_index;

        if letter.is_whitespace() {
            self.state = SessionState::Idle;
            self.previous_word = None;
            return placeholders();
        }

        if letter_position == 0 {
            self.state = SessionState::Idle;
        }

        let Some(letter) = normalize_letter(letter) else {
            return placeholders();
        };

        let comp = self.comp_mut();
        comp.prefix.push(letter);
        let prefix = comp.prefix.clone();

        self.generate_suggestions(&prefix)
    }

    /// Current composition, entering Composing from Idle on first use.
    fn comp_mut(&mut self) -> &mut Composition {
        if matches!(self.state, SessionState::Idle) {
            self.state = SessionState::Composing(Composition::new());
        }
        match &mut self.state {
            SessionState::Composing(c) => c,
            SessionState::Idle => unreachable!("state set to Composing above"),
        }
    }
}
