// Copyright (c) 2025 Kumu Trie Authors
//
// Licensed under MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Unit tests for the trie operations and their pruning edge cases.

use crate::trie::Trie;

#[test]
fn test_insert_then_contains() {
    let mut trie = Trie::new();
    trie.insert("hello");

    assert!(trie.contains("hello"));
    assert!(!trie.contains("hell"));
    assert!(!trie.contains("hellos"));
    assert!(trie.contains_prefix("hell"));
    assert!(trie.contains_prefix("hello"));
    assert!(!trie.contains_prefix("help"));
}

#[test]
fn test_empty_trie_queries() {
    let trie = Trie::new();

    assert!(trie.is_empty());
    assert_eq!(trie.len(), 0);
    assert!(!trie.contains(""));
    assert!(!trie.contains("a"));
    // The empty path always exists: it is the root.
    assert!(trie.contains_prefix(""));
    assert!(!trie.contains_prefix("a"));
}

#[test]
fn test_empty_word_marks_root() {
    let mut trie = Trie::new();
    trie.insert("");

    assert!(trie.contains(""));
    assert!(!trie.is_empty());
    assert_eq!(trie.len(), 1);
    assert!(trie.root().is_end_of_word());
    assert!(trie.root().is_leaf());

    assert!(trie.remove(""));
    assert!(!trie.contains(""));
    assert!(trie.is_empty());
    // The root itself survives removal of the empty word.
    assert!(!trie.root().is_end_of_word());
}

#[test]
fn test_repeat_insert_is_idempotent() {
    let mut trie = Trie::new();
    trie.insert("loop");
    let nodes_before = trie.snapshot().node_count();

    trie.insert("loop");

    assert!(trie.contains("loop"));
    assert_eq!(trie.len(), 1);
    assert_eq!(trie.snapshot().node_count(), nodes_before);
}

#[test]
fn test_remove_round_trip() {
    let mut trie = Trie::new();
    trie.insert("word");

    assert!(trie.remove("word"));
    assert!(!trie.contains("word"));
    assert!(!trie.contains_prefix("w"));
    assert!(trie.is_empty());
}

#[test]
fn test_remove_missing_word_is_noop() {
    let mut trie = Trie::new();
    trie.insert("cart");
    let before = trie.snapshot();

    assert!(!trie.remove("xyz"));
    assert!(!trie.remove("cartwheel"));
    assert_eq!(trie.snapshot(), before);
}

#[test]
fn test_remove_prefix_only_path_is_noop() {
    let mut trie = Trie::new();
    trie.insert("cart");
    let before = trie.snapshot();

    // "car" exists as a path but was never inserted as a word.
    assert!(!trie.contains("car"));
    assert!(trie.contains_prefix("car"));
    assert!(!trie.remove("car"));

    assert!(trie.contains("cart"));
    assert_eq!(trie.snapshot(), before);
}

#[test]
fn test_remove_preserves_shared_prefix() {
    let mut trie = Trie::new();
    trie.insert("cat");
    trie.insert("car");

    assert!(trie.remove("cat"));

    assert!(!trie.contains("cat"));
    assert!(trie.contains("car"));
    assert!(trie.contains_prefix("ca"));
    // Only the private "t" leaf is gone: root -> c -> a -> r remain.
    assert_eq!(trie.snapshot().node_count(), 4);
}

#[test]
fn test_remove_prunes_private_suffix_chain() {
    let mut trie = Trie::new();
    trie.insert("gas");
    trie.insert("garlic");

    assert!(trie.contains_prefix("ga"));
    assert!(!trie.contains("ga"));

    assert!(trie.remove("garlic"));

    assert!(trie.contains("gas"));
    // The whole "r-l-i-c" chain hung off "ga" only for "garlic".
    assert!(!trie.contains_prefix("gar"));
    assert_eq!(trie.snapshot().node_count(), 4);
}

#[test]
fn test_remove_shorter_word_keeps_longer() {
    let mut trie = Trie::new();
    trie.insert("do");
    trie.insert("door");

    assert!(trie.remove("do"));

    assert!(!trie.contains("do"));
    assert!(trie.contains("door"));
    assert!(trie.contains_prefix("do"));
}

#[test]
fn test_remove_stops_at_end_of_word_ancestor() {
    let mut trie = Trie::new();
    trie.insert("in");
    trie.insert("inn");

    assert!(trie.remove("inn"));

    // Pruning the last "n" must not climb past the node ending "in".
    assert!(trie.contains("in"));
    assert!(!trie.contains_prefix("inn"));
    assert_eq!(trie.len(), 1);
}

#[test]
fn test_case_sensitive_no_normalization() {
    let mut trie = Trie::new();
    trie.insert("Cat");

    assert!(trie.contains("Cat"));
    assert!(!trie.contains("cat"));
    assert!(trie.contains_prefix("Ca"));
    assert!(!trie.contains_prefix("ca"));
}

#[test]
fn test_words_are_sorted_and_derived() {
    let mut trie = Trie::new();
    for word in ["pear", "apple", "ape", "apex"] {
        trie.insert(word);
    }

    assert_eq!(trie.words(), vec!["ape", "apex", "apple", "pear"]);
    assert_eq!(trie.words_with_prefix("ap"), vec!["ape", "apex", "apple"]);
    assert_eq!(trie.words_with_prefix("ape"), vec!["ape", "apex"]);
    assert!(trie.words_with_prefix("z").is_empty());

    trie.remove("ape");
    assert_eq!(trie.words_with_prefix("ape"), vec!["apex"]);
}

#[test]
fn test_len_and_clear() {
    let mut trie = Trie::new();
    trie.insert("a");
    trie.insert("ab");
    trie.insert("b");

    assert_eq!(trie.len(), 3);

    trie.clear();
    assert!(trie.is_empty());
    assert_eq!(trie.len(), 0);
    assert_eq!(trie.snapshot().node_count(), 1);
}

#[test]
fn test_root_view_walk() {
    let mut trie = Trie::new();
    trie.insert("hi");

    let root = trie.root();
    let h = root.child('h').expect("edge 'h' exists");
    assert!(!h.is_end_of_word());
    let i = h.child('i').expect("edge 'i' exists");
    assert!(i.is_end_of_word());
    assert!(i.is_leaf());
}

#[test]
fn test_unicode_words() {
    let mut trie = Trie::new();
    trie.insert("héllo");
    trie.insert("héros");

    assert!(trie.contains("héllo"));
    assert!(trie.contains_prefix("hé"));
    assert!(trie.remove("héllo"));
    assert!(trie.contains("héros"));
    assert!(!trie.contains_prefix("hél"));
}
