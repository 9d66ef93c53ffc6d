//! Lexicon and corpus layer for the typeahead predictive-text engine.
//!
//! `Lexicon` is a prefix trie with frequency-ranked retrieval and a bounded
//! per-word table of observed successor words. `ingest` turns already-read
//! text into trie updates; the session crate layers keystroke handling on top.

pub mod ingest;
pub mod lexicon;
pub mod settings;

pub use ingest::CorpusKind;
pub use lexicon::{Lexicon, TrieNode};
