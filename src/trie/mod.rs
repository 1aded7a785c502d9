// Copyright (c) 2025 Kumu Trie Authors
//
// Licensed under MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Kumu Trie core.
//!
//! This module provides the prefix tree at the heart of the teaching tool:
//! a tree of [`TrieNode`]s linked by per-character edges, where every marked
//! node spells out one inserted word along its path from the root.
//!
//! The core is deliberately small and policy-free:
//!
//! * It is case-sensitive and performs no input normalization; trimming and
//!   lower-casing belong to the calling layer (see [`crate::session`]).
//! * Every input is valid, including the empty string, so the operations
//!   communicate purely through `bool` return values instead of errors.
//! * It is single-threaded and synchronous. Each operation runs to completion
//!   in O(word length); a multi-threaded host must wrap the whole trie in one
//!   exclusive lock per mutating call.
//!
//! # Example
//!
//! ```
//! use kumu_trie_lib::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("gas");
//! trie.insert("garlic");
//!
//! assert!(trie.contains_prefix("ga"));
//! assert!(!trie.contains("ga"));
//!
//! assert!(trie.remove("garlic"));
//! assert!(trie.contains("gas"));
//! assert!(!trie.contains_prefix("gar"));
//! ```

mod node;
mod snapshot;

#[cfg(test)]
mod tests;

pub use node::TrieNode;
pub use snapshot::NodeSnapshot;

/// A trie (prefix tree) over sequences of `char`s.
///
/// The trie owns a single root node that exists from construction on and is
/// never removed; an empty inserted word marks the root itself. Structural
/// invariant: a non-root node is kept exactly as long as it is the end of some
/// inserted word or an ancestor of one. [`Trie::remove`] restores this
/// invariant by pruning suffix chains that no remaining word needs.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// Creates an empty trie: a lone unmarked root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `word` into the trie.
    ///
    /// Walks from the root, creating missing nodes along the way, and marks
    /// the final node as end-of-word. Inserting an already present word is a
    /// no-op; inserting the empty string marks the root. Insertion never
    /// removes or rearranges existing structure.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        node.is_end_of_word = true;
    }

    /// Returns `true` if `word` was inserted as a complete word.
    ///
    /// A path that exists only as a prefix of longer words does not count;
    /// see [`Trie::contains_prefix`] for that query.
    pub fn contains(&self, word: &str) -> bool {
        self.node_at(word).is_some_and(TrieNode::is_end_of_word)
    }

    /// Returns `true` if some inserted word starts with `prefix`.
    ///
    /// The empty prefix is a prefix of every word, so this returns `true`
    /// whenever the path exists, which for `""` is always.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.node_at(prefix).is_some()
    }

    /// Removes `word` from the trie, pruning nodes no remaining word needs.
    ///
    /// Returns `true` if the word was present as a complete word and was
    /// removed, `false` otherwise. A miss mutates nothing: absent paths and
    /// prefix-only paths (the word was never inserted itself) are left
    /// untouched. When the word is a strict prefix of another word, only its
    /// end-of-word mark is cleared; when it has a private suffix chain, that
    /// chain is unlinked back to the nearest node some other word still needs.
    /// The root is never removed.
    pub fn remove(&mut self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        let (removed, _prune_root) = Self::remove_below(&mut self.root, &chars);
        removed
    }

    /// Recursive removal: descend left to right, prune on the unwind.
    ///
    /// Returns `(removed, prune)` where `prune` asks the caller to unlink the
    /// edge to `node`. Pruning stops at the first ancestor that still has
    /// other children or ends a shorter word; the root's flag is ignored by
    /// [`Trie::remove`].
    fn remove_below(node: &mut TrieNode, chars: &[char]) -> (bool, bool) {
        let Some((&label, rest)) = chars.split_first() else {
            // Terminal node for the word.
            if !node.is_end_of_word {
                return (false, false);
            }
            node.is_end_of_word = false;
            return (true, node.is_leaf());
        };

        let Some(child) = node.child_mut(label) else {
            // Path does not exist; nothing to do.
            return (false, false);
        };

        let (removed, prune_child) = Self::remove_below(child, rest);
        if prune_child {
            node.children.remove(&label);
        }
        (removed, removed && node.is_prunable())
    }

    /// Read-only view of the root for external traversal and rendering.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of complete words currently stored.
    ///
    /// Derived by traversal, so O(number of nodes).
    pub fn len(&self) -> usize {
        fn count(node: &TrieNode) -> usize {
            let here = usize::from(node.is_end_of_word());
            here + node.edges().map(|(_, child)| count(child)).sum::<usize>()
        }
        count(&self.root)
    }

    /// Returns `true` if no word is stored, not even the empty one.
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf() && !self.root.is_end_of_word()
    }

    /// Removes every word, leaving the lone root.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
    }

    /// Returns every stored word, sorted.
    ///
    /// The word list is reconstructed from the end-of-word marks; the trie
    /// keeps no separate membership set.
    pub fn words(&self) -> Vec<String> {
        self.words_with_prefix("")
    }

    /// Returns every stored word starting with `prefix`, sorted.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let Some(start) = self.node_at(prefix) else {
            return Vec::new();
        };
        let mut words = Vec::new();
        Self::collect_words(start, prefix.to_string(), &mut words);
        words.sort_unstable();
        words
    }

    /// Deterministic copy of the node set for display layers.
    pub fn snapshot(&self) -> NodeSnapshot {
        NodeSnapshot::of_root(&self.root)
    }

    /// Walks the path spelled by `path`, returning the node it ends at.
    fn node_at(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in path.chars() {
            node = node.child(c)?;
        }
        Some(node)
    }

    fn collect_words(node: &TrieNode, path: String, out: &mut Vec<String>) {
        if node.is_end_of_word() {
            out.push(path.clone());
        }
        for (label, child) in node.edges() {
            let mut next = path.clone();
            next.push(label);
            Self::collect_words(child, next, out);
        }
    }
}
