
use typeahead_core::settings::settings;

use crate::{Predictor, Suggestions};

pub(crate) const DICT: &str = "the\nthen\nthere\ncat\nsat\nhat\n";

pub(crate) fn make_predictor() -> Predictor {
    let mut p = Predictor::with_empty_lexicon();
    p.load(DICT, true);
    p
}

/// Type a word letter by letter, returning each keystroke's suggestions.
pub(crate) fn type_word(p: &mut Predictor, word: &str) -> Vec<Suggestions> {
    word.chars()
        .enumerate()
        .map(|(i, c)| p.guess(c, i, 0))
        .collect()
}

pub(crate) fn placeholder() -> &'static str {
    &settings().suggestions.placeholder
}
