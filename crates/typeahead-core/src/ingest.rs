//! Corpus tokenization and lexicon population.
//!
//! The boundary here is already-read text content; file I/O belongs to the
//! caller. Tokens are split on whitespace and normalized to lowercase
//! letters; empty tokens are silently discarded.

use tracing::debug;

use crate::lexicon::Lexicon;

/// What a block of text represents. Dictionary text seeds word frequencies
/// only; message text additionally trains the successor tables. The caller
/// supplies this — it is never inferred from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusKind {
    Dictionary,
    Messages,
}

/// Lowercase `raw` and strip everything outside a-z. `None` when nothing
/// remains.
pub fn normalize_word(raw: &str) -> Option<String> {
    let word: String = raw
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase())
        .collect();
    (!word.is_empty()).then_some(word)
}

/// Feed already-read text into the lexicon.
///
/// Every normalized token is inserted. For `Messages` text, each adjacent
/// token pair within a line also updates the preceding word's successor
/// table; pairs never span line boundaries.
pub fn load_text(lexicon: &mut Lexicon, text: &str, kind: CorpusKind) {
    let mut words = 0usize;
    let mut pairs = 0usize;

    for line in text.lines() {
        let mut prev: Option<String> = None;
        for raw in line.split_whitespace() {
            let Some(word) = normalize_word(raw) else {
                continue;
            };
            lexicon.insert(&word);
            words += 1;

            if kind == CorpusKind::Messages {
                if let Some(prev) = &prev {
                    lexicon.record_following(prev, &word);
                    pairs += 1;
                }
            }
            prev = Some(word);
        }
    }

    debug!(?kind, words, pairs, "text ingested");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("Hello!"), Some("hello".to_string()));
        assert_eq!(normalize_word("don't"), Some("dont".to_string()));
        assert_eq!(normalize_word("123"), None);
        assert_eq!(normalize_word(""), None);
    }

    #[test]
    fn test_dictionary_load_skips_bigrams() {
        let mut lex = Lexicon::new();
        load_text(&mut lex, "cat sat\n", CorpusKind::Dictionary);
        assert!(lex.lookup("cat").unwrap().is_word());
        assert_eq!(lex.lookup("cat").unwrap().next_words().count(), 0);
    }

    #[test]
    fn test_messages_load_records_bigrams() {
        let mut lex = Lexicon::new();
        load_text(&mut lex, "the cat sat\n", CorpusKind::Messages);
        let succ: Vec<(&str, u32)> = lex.lookup("cat").unwrap().next_words().collect();
        assert_eq!(succ, vec![("sat", 1)]);
    }

    #[test]
    fn test_pairs_do_not_span_lines() {
        let mut lex = Lexicon::new();
        load_text(&mut lex, "cat\nsat\n", CorpusKind::Messages);
        assert_eq!(lex.lookup("cat").unwrap().next_words().count(), 0);
    }

    #[test]
    fn test_punctuation_only_tokens_dropped() {
        let mut lex = Lexicon::new();
        load_text(&mut lex, "cat -- sat", CorpusKind::Messages);
        // "--" vanishes, so "sat" directly follows "cat"
        let succ: Vec<(&str, u32)> = lex.lookup("cat").unwrap().next_words().collect();
        assert_eq!(succ, vec![("sat", 1)]);
    }

    #[test]
    fn test_repeated_ingestion_accumulates() {
        let mut lex = Lexicon::new();
        load_text(&mut lex, "the the", CorpusKind::Dictionary);
        load_text(&mut lex, "the", CorpusKind::Dictionary);
        assert_eq!(lex.lookup("the").unwrap().frequency(), 3);
    }
}
