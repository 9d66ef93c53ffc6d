//! Prefix trie with frequency-ranked retrieval and bounded successor tables.
//!
//! Each stored word carries an occurrence frequency and a small
//! insertion-ordered table of words observed to follow it. Retrieval is a
//! full-subtree DFS feeding a bounded min-heap, so cost is proportional to
//! the number of word nodes under the prefix.

#[cfg(test)]
mod tests;

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::settings::settings;

const ALPHABET: usize = 26;

/// Map a character to its child slot. Uppercase folds to lowercase;
/// anything outside a-z has no slot.
fn slot(c: char) -> Option<usize> {
    let c = c.to_ascii_lowercase();
    c.is_ascii_lowercase().then(|| c as usize - 'a' as usize)
}

/// One node per distinct lowercase-letter prefix path. The root represents
/// the empty string and is never a word.
pub struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET],
    is_word: bool,
    frequency: u32,
    /// Successor words and counts, insertion-ordered, bounded by
    /// `bigram.max_successors`.
    next_words: Vec<(String, u32)>,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: std::array::from_fn(|_| None),
            is_word: false,
            frequency: 0,
            next_words: Vec::new(),
        }
    }

    /// True iff the path from the root to this node spells a stored word.
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// Occurrence count plus feedback boosts. Only meaningful when
    /// `is_word()` is true.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Successor words with counts, in the order they were first recorded.
    pub fn next_words(&self) -> impl Iterator<Item = (&str, u32)> {
        self.next_words.iter().map(|(w, n)| (w.as_str(), *n))
    }
}

/// Heap key for bounded top-`limit` selection. The heap minimum is always
/// the worst candidate: lowest frequency, latest traversal position on ties,
/// so earlier (alphabetically smaller) words survive eviction.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct RankedWord {
    frequency: u32,
    order: Reverse<usize>,
    word: String,
}

/// A rooted trie owning all of its nodes.
pub struct Lexicon {
    root: TrieNode,
    words: usize,
    nodes: usize,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            words: 0,
            nodes: 1,
        }
    }

    /// Insert one occurrence of `word`. Non-letter characters are skipped
    /// while the remaining letters are still inserted; repeated inserts
    /// reuse the same path and bump the terminal frequency each time.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.chars() {
            let Some(i) = slot(c) else { continue };
            if node.children[i].is_none() {
                self.nodes += 1;
            }
            node = node.children[i].get_or_insert_with(|| Box::new(TrieNode::new()));
        }
        if !node.is_word {
            node.is_word = true;
            self.words += 1;
        }
        node.frequency += 1;
    }

    /// Walk the trie by letters. `None` means no such path exists; a
    /// returned node with `is_word() == false` is a valid interior prefix.
    pub fn lookup(&self, word: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in word.chars() {
            node = node.children[slot(c)?].as_deref()?;
        }
        Some(node)
    }

    fn lookup_mut(&mut self, word: &str) -> Option<&mut TrieNode> {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children[slot(c)?].as_deref_mut()?;
        }
        Some(node)
    }

    /// Boost a word's frequency (feedback reinforcement). Returns false
    /// when no node exists for the word.
    pub fn boost(&mut self, word: &str, amount: u32) -> bool {
        match self.lookup_mut(word) {
            Some(node) => {
                node.frequency += amount;
                true
            }
            None => false,
        }
    }

    /// Record that `next_word` followed `word`. No-op when `word` is not in
    /// the trie. The successor table is bounded: growing past the cap
    /// evicts the minimum-count entry, earliest-inserted on ties. The
    /// just-added entry (count 1) is itself a legal eviction victim.
    pub fn record_following(&mut self, word: &str, next_word: &str) {
        let max = settings().bigram.max_successors;
        let Some(node) = self.lookup_mut(word) else {
            return;
        };

        match node.next_words.iter_mut().find(|(w, _)| w == next_word) {
            Some((_, count)) => *count += 1,
            None => node.next_words.push((next_word.to_string(), 1)),
        }

        if node.next_words.len() > max {
            let mut evict = 0;
            for i in 1..node.next_words.len() {
                if node.next_words[i].1 < node.next_words[evict].1 {
                    evict = i;
                }
            }
            node.next_words.remove(evict);
        }
    }

    /// Words under `prefix`, highest frequency first, at most `limit`.
    ///
    /// Locates the prefix node (unknown prefix yields an empty list), then
    /// runs a DFS over its whole subtree collecting word nodes into a
    /// min-heap of size ≤ `limit`; lower-frequency entries are evicted as
    /// better ones are found. Children are visited a→z, so frequency ties
    /// resolve to alphabetical order. A fresh list is built on every call.
    pub fn prefix_search(&self, prefix: &str, limit: usize) -> Vec<String> {
        if limit == 0 {
            return Vec::new();
        }
        let Some(start) = self.lookup(prefix) else {
            return Vec::new();
        };

        // lookup succeeded, so every char folds to a-z
        let mut word = prefix.to_ascii_lowercase();
        let mut heap: BinaryHeap<Reverse<RankedWord>> = BinaryHeap::with_capacity(limit + 1);
        let mut seq = 0usize;
        collect_words(start, &mut word, &mut seq, limit, &mut heap);

        let mut ranked: Vec<RankedWord> = heap.into_iter().map(|Reverse(r)| r).collect();
        ranked.sort_unstable_by(|a, b| b.cmp(a));
        ranked.into_iter().map(|r| r.word).collect()
    }

    /// Returns (word_count, node_count).
    pub fn stats(&self) -> (usize, usize) {
        (self.words, self.nodes)
    }
}

fn collect_words(
    node: &TrieNode,
    word: &mut String,
    seq: &mut usize,
    limit: usize,
    heap: &mut BinaryHeap<Reverse<RankedWord>>,
) {
    if node.is_word {
        heap.push(Reverse(RankedWord {
            frequency: node.frequency,
            order: Reverse(*seq),
            word: word.clone(),
        }));
        *seq += 1;
        if heap.len() > limit {
            heap.pop();
        }
    }
    for (i, child) in node.children.iter().enumerate() {
        if let Some(child) = child {
            word.push((b'a' + i as u8) as char);
            collect_words(child, word, seq, limit, heap);
            word.pop();
        }
    }
}
