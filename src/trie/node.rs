//! Node implementation for the Kumu Trie.
//!
//! Nodes are the building blocks of the trie. Each node stands for one prefix
//! of the inserted word set: the concatenation of edge labels on the path from
//! the root. The root itself carries no label and is never removed.

use std::collections::HashMap;

/// A single position in the trie.
///
/// Every node exclusively owns its children, so the structure is a tree and
/// dropping a node drops its whole subtree. A node with `is_end_of_word` set
/// marks that a complete inserted word terminates here; nodes without the flag
/// exist only while some word still needs them as a prefix.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrieNode {
    /// Map of edge labels to child nodes. No two edges of one node share a label.
    pub(crate) children: HashMap<char, TrieNode>,

    /// Whether a complete inserted word ends at this node.
    pub(crate) is_end_of_word: bool,
}

impl TrieNode {
    /// Creates a new empty node: no children, not the end of any word.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the child reached over the edge labeled `label`, if any.
    pub fn child(&self, label: char) -> Option<&TrieNode> {
        self.children.get(&label)
    }

    pub(crate) fn child_mut(&mut self, label: char) -> Option<&mut TrieNode> {
        self.children.get_mut(&label)
    }

    /// Whether a complete inserted word terminates exactly at this node.
    pub fn is_end_of_word(&self) -> bool {
        self.is_end_of_word
    }

    /// Whether this node has no outgoing edges.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of outgoing edges.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Iterates over the outgoing edges as `(label, child)` pairs.
    ///
    /// The iteration order is unspecified; callers that need a stable order
    /// (e.g. for rendering) should sort or use [`crate::trie::NodeSnapshot`].
    pub fn edges(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(label, child)| (*label, child))
    }

    /// A non-root node is prunable once nothing ends here and nothing hangs
    /// below it. Such a node no longer serves as a prefix of any word.
    pub(crate) fn is_prunable(&self) -> bool {
        !self.is_end_of_word && self.children.is_empty()
    }
}
