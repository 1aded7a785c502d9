// Copyright (c) 2025 Kumu Trie Authors
//
// Licensed under MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Property-based tests for the trie core.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::trie::Trie;

// Strategy for a single word (possibly empty, small alphabet to force
// shared prefixes and collisions)
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,8}").unwrap()
}

// Strategy for a batch of words with heavy prefix overlap
fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 1..32)
}

proptest! {
    // Property: every inserted word is found, and so is each of its prefixes
    #[test]
    fn prop_insert_implies_contains(words in words_strategy()) {
        let mut trie = Trie::new();
        for word in &words {
            trie.insert(word);
        }

        for word in &words {
            prop_assert!(trie.contains(word));
            for end in 0..=word.chars().count() {
                let prefix: String = word.chars().take(end).collect();
                prop_assert!(trie.contains_prefix(&prefix));
            }
        }
    }

    // Property: membership exactly matches the set of inserted words; paths
    // that exist only as prefixes never read as words
    #[test]
    fn prop_membership_matches_inserted_set(
        words in words_strategy(),
        probes in words_strategy(),
    ) {
        let mut trie = Trie::new();
        let inserted: HashSet<&String> = words.iter().collect();
        for word in &words {
            trie.insert(word);
        }

        for probe in &probes {
            prop_assert_eq!(trie.contains(probe), inserted.contains(probe));
        }
        prop_assert_eq!(trie.len(), inserted.len());
    }

    // Property: re-inserting every word changes nothing, structure included
    #[test]
    fn prop_repeat_insert_is_idempotent(words in words_strategy()) {
        let mut trie = Trie::new();
        for word in &words {
            trie.insert(word);
        }
        let before = trie.snapshot();

        for word in &words {
            trie.insert(word);
        }

        prop_assert_eq!(trie.snapshot(), before);
    }

    // Property: removing one word removes it and only it
    #[test]
    fn prop_remove_is_precise(words in words_strategy(), pick in any::<prop::sample::Index>()) {
        let mut trie = Trie::new();
        for word in &words {
            trie.insert(word);
        }
        let victim = pick.get(&words);

        prop_assert!(trie.remove(victim));
        prop_assert!(!trie.contains(victim));

        for word in &words {
            if word != victim {
                prop_assert!(trie.contains(word));
            }
        }
    }

    // Property: inserting then removing everything leaves the lone root
    #[test]
    fn prop_full_removal_restores_empty(words in words_strategy()) {
        let mut trie = Trie::new();
        for word in &words {
            trie.insert(word);
        }

        let unique: HashSet<&String> = words.iter().collect();
        for word in &unique {
            prop_assert!(trie.remove(word.as_str()));
        }

        prop_assert!(trie.is_empty());
        prop_assert_eq!(trie.snapshot().node_count(), 1);
    }

    // Property: removing an absent word is observably a no-op
    #[test]
    fn prop_remove_absent_is_noop(words in words_strategy(), probe in word_strategy()) {
        let mut trie = Trie::new();
        for word in &words {
            trie.insert(word);
        }
        let before = trie.snapshot();

        if !words.contains(&probe) {
            prop_assert!(!trie.remove(&probe));
            prop_assert_eq!(trie.snapshot(), before);
        }
    }

    // Property: the derived word list is exactly the inserted set, sorted
    #[test]
    fn prop_words_reconstructs_inserted_set(words in words_strategy()) {
        let mut trie = Trie::new();
        for word in &words {
            trie.insert(word);
        }

        let mut expected: Vec<String> =
            words.iter().cloned().collect::<HashSet<_>>().into_iter().collect();
        expected.sort_unstable();

        prop_assert_eq!(trie.words(), expected);
    }

    // Property: no node survives without a word needing it (structural
    // invariant after arbitrary interleaved inserts and removes)
    #[test]
    fn prop_no_dangling_nodes_after_churn(
        words in words_strategy(),
        removals in words_strategy(),
    ) {
        let mut trie = Trie::new();
        for word in &words {
            trie.insert(word);
        }
        for word in &removals {
            trie.remove(word);
        }

        // Minimal trie for the surviving word set, built fresh.
        let mut rebuilt = Trie::new();
        for word in trie.words() {
            rebuilt.insert(&word);
        }

        prop_assert_eq!(trie.snapshot(), rebuilt.snapshot());
    }
}
