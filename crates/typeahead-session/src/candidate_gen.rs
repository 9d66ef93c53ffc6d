use tracing::{debug, debug_span};

use super::types::{placeholders, Suggestions, SUGGESTION_COUNT};
use super::Predictor;

impl Predictor {
    /// Build the suggestion list for the current prefix.
    ///
    /// Successor-table hits for the previous word come first, in the order
    /// they were recorded (deliberately not frequency-sorted); remaining
    /// slots fill from the frequency-ranked prefix search, deduplicated
    /// against the bigram hits, then pad with placeholders. More than
    /// [`SUGGESTION_COUNT`] candidates truncate to the first three.
    pub(super) fn generate_suggestions(&self, prefix: &str) -> Suggestions {
        let _span = debug_span!("generate_suggestions", prefix).entered();

        // Ignore RwLock poison: degrade to placeholders rather than
        // cascading a panic into the keystroke path.
        let Ok(lexicon) = self.lexicon.read() else {
            return placeholders();
        };

        let mut candidates: Vec<String> = Vec::new();

        if let Some(prev) = self.previous_word.as_deref() {
            if let Some(node) = lexicon.lookup(prev) {
                for (next_word, _) in node.next_words() {
                    if next_word.starts_with(prefix) {
                        candidates.push(next_word.to_string());
                    }
                }
            }
        }
        let bigram_hits = candidates.len();

        if candidates.len() < SUGGESTION_COUNT {
            let wanted = SUGGESTION_COUNT - candidates.len();
            for word in lexicon.prefix_search(prefix, wanted) {
                if !candidates.contains(&word) {
                    candidates.push(word);
                }
            }
        }

        debug!(bigram_hits, total = candidates.len());

        let mut out = placeholders();
        for (slot, candidate) in out.iter_mut().zip(candidates) {
            *slot = candidate;
        }
        out
    }
}
