use typeahead_core::settings::settings;

/// Number of suggestion slots returned by every `guess` call.
pub const SUGGESTION_COUNT: usize = 3;

/// Fixed-arity suggestion list. Slots with no live candidate hold the
/// configured placeholder marker.
pub type Suggestions = [String; SUGGESTION_COUNT];

pub(crate) enum SessionState {
    Idle,
    Composing(Composition),
}

pub(crate) struct Composition {
    pub(crate) prefix: String,
}

impl Composition {
    pub(crate) fn new() -> Self {
        Self {
            prefix: String::new(),
        }
    }
}

/// The "no live suggestion" response: every slot is the placeholder.
pub(crate) fn placeholders() -> Suggestions {
    let p = &settings().suggestions.placeholder;
    [p.clone(), p.clone(), p.clone()]
}

/// Fold a keystroke to its trie letter. `None` for anything outside a-z
/// after case folding.
pub(crate) fn normalize_letter(letter: char) -> Option<char> {
    let c = letter.to_ascii_lowercase();
    c.is_ascii_lowercase().then_some(c)
}
