use super::*;

fn lexicon_with(words: &[&str]) -> Lexicon {
    let mut lex = Lexicon::new();
    for w in words {
        lex.insert(w);
    }
    lex
}

// --- Insert / lookup ---

#[test]
fn test_frequency_counts_occurrences() {
    let lex = lexicon_with(&["the", "the", "the"]);
    let node = lex.lookup("the").unwrap();
    assert!(node.is_word());
    assert_eq!(node.frequency(), 3);
}

#[test]
fn test_lookup_interior_prefix_is_not_a_word() {
    let lex = lexicon_with(&["the"]);
    let node = lex.lookup("th").unwrap();
    assert!(!node.is_word());
    assert_eq!(node.frequency(), 0);
}

#[test]
fn test_lookup_missing_and_non_letter() {
    let lex = lexicon_with(&["the"]);
    assert!(lex.lookup("cat").is_none());
    assert!(lex.lookup("th3").is_none());
    assert!(lex.lookup("c a").is_none());
}

#[test]
fn test_insert_skips_non_letters() {
    let lex = lexicon_with(&["don't", "DON'T"]);
    // both occurrences land on the sanitized path
    let node = lex.lookup("dont").unwrap();
    assert!(node.is_word());
    assert_eq!(node.frequency(), 2);
    assert!(lex.lookup("don").map(|n| !n.is_word()).unwrap_or(false));
}

#[test]
fn test_lookup_folds_case() {
    let lex = lexicon_with(&["the"]);
    assert!(lex.lookup("THE").unwrap().is_word());
}

#[test]
fn test_stats() {
    let lex = lexicon_with(&["a", "ab", "ab"]);
    let (words, nodes) = lex.stats();
    assert_eq!(words, 2);
    assert_eq!(nodes, 3); // root + 'a' + 'b'
}

// --- Prefix search ---

#[test]
fn test_prefix_search_ranking() {
    let lex = lexicon_with(&["the", "the", "the", "then"]);
    assert_eq!(lex.prefix_search("th", 2), vec!["the", "then"]);
}

#[test]
fn test_prefix_search_returns_all_when_subtree_fits() {
    let lex = lexicon_with(&["car", "cart", "cat"]);
    let results = lex.prefix_search("ca", 10);
    assert_eq!(results.len(), 3);
    for w in &results {
        assert!(w.starts_with("ca"));
    }
}

#[test]
fn test_prefix_search_descending_frequency() {
    let lex = lexicon_with(&["cat", "car", "car", "cart", "cart", "cart"]);
    assert_eq!(lex.prefix_search("ca", 3), vec!["cart", "car", "cat"]);
}

#[test]
fn test_prefix_search_alphabetical_on_ties() {
    let lex = lexicon_with(&["cab", "cat", "car"]);
    assert_eq!(lex.prefix_search("ca", 3), vec!["cab", "car", "cat"]);
}

#[test]
fn test_prefix_search_bounded_eviction_keeps_best() {
    let mut lex = Lexicon::new();
    for (word, count) in [("ant", 1), ("and", 5), ("any", 3), ("ann", 2)] {
        for _ in 0..count {
            lex.insert(word);
        }
    }
    assert_eq!(lex.prefix_search("an", 2), vec!["and", "any"]);
}

#[test]
fn test_prefix_search_unknown_prefix() {
    let lex = lexicon_with(&["the"]);
    assert!(lex.prefix_search("zz", 3).is_empty());
    assert!(lex.prefix_search("t9", 3).is_empty());
}

#[test]
fn test_prefix_search_zero_limit() {
    let lex = lexicon_with(&["the"]);
    assert!(lex.prefix_search("th", 0).is_empty());
}

#[test]
fn test_prefix_search_includes_exact_word() {
    let lex = lexicon_with(&["the", "then"]);
    let results = lex.prefix_search("the", 3);
    assert!(results.contains(&"the".to_string()));
    assert!(results.contains(&"then".to_string()));
}

// --- Feedback boost ---

#[test]
fn test_boost_reorders_ranking() {
    let mut lex = lexicon_with(&["the", "the", "the", "then"]);
    assert!(lex.boost("then", 5));
    // then: 1 + 5 = 6 beats the: 3
    assert_eq!(lex.prefix_search("th", 2), vec!["then", "the"]);
}

#[test]
fn test_boost_unknown_word() {
    let mut lex = lexicon_with(&["the"]);
    assert!(!lex.boost("cat", 5));
}

// --- Successor tables ---

#[test]
fn test_record_following_counts() {
    let mut lex = lexicon_with(&["cat", "sat"]);
    lex.record_following("cat", "sat");
    lex.record_following("cat", "sat");
    let succ: Vec<(&str, u32)> = lex.lookup("cat").unwrap().next_words().collect();
    assert_eq!(succ, vec![("sat", 2)]);
}

#[test]
fn test_record_following_unknown_word_is_noop() {
    let mut lex = Lexicon::new();
    lex.record_following("ghost", "word");
    assert!(lex.lookup("ghost").is_none());
}

#[test]
fn test_successor_table_never_exceeds_bound() {
    let mut lex = lexicon_with(&["cat"]);
    for next in ["ba", "bb", "bc", "bd", "be", "bf", "bg", "bh"] {
        lex.record_following("cat", next);
    }
    assert_eq!(lex.lookup("cat").unwrap().next_words().count(), 5);
}

#[test]
fn test_eviction_removes_earliest_minimum() {
    let mut lex = lexicon_with(&["cat"]);
    for _ in 0..3 {
        lex.record_following("cat", "ba");
    }
    for next in ["bb", "bc", "bd", "be", "bf"] {
        lex.record_following("cat", next);
    }
    let succ: Vec<&str> = lex.lookup("cat").unwrap().next_words().map(|(w, _)| w).collect();
    // "bb" was the earliest entry with the minimum count when "bf" overflowed
    assert_eq!(succ, vec!["ba", "bc", "bd", "be", "bf"]);
}

#[test]
fn test_increment_does_not_evict() {
    let mut lex = lexicon_with(&["cat"]);
    for next in ["ba", "bb", "bc", "bd", "be"] {
        lex.record_following("cat", next);
    }
    lex.record_following("cat", "ba");
    let succ: Vec<(&str, u32)> = lex.lookup("cat").unwrap().next_words().collect();
    assert_eq!(succ.len(), 5);
    assert_eq!(succ[0], ("ba", 2));
}
