// Copyright (c) 2025 Kumu Trie Authors
//
// Licensed under MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Read-only snapshots of the trie for display layers.
//!
//! A display layer wants two things the live structure does not promise:
//! a stable child order and a representation it can hold on to (and ship as
//! JSON) without borrowing the trie across its own mutations. [`NodeSnapshot`]
//! is that: a detached copy of the node set with children sorted by edge
//! label.

use serde::Serialize;

use super::node::TrieNode;

/// One node of a detached, render-ready copy of the trie.
///
/// Children are sorted by `label`, so two structurally equal tries always
/// produce identical snapshots regardless of insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSnapshot {
    /// Label of the edge leading here; `None` only for the root.
    pub label: Option<char>,

    /// Whether a complete word ends at this node.
    pub is_end_of_word: bool,

    /// Child snapshots in ascending label order.
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    /// Snapshots the subtree under `root` as the unlabeled top node.
    pub(crate) fn of_root(root: &TrieNode) -> Self {
        Self::of_node(None, root)
    }

    fn of_node(label: Option<char>, node: &TrieNode) -> Self {
        let mut children: Vec<NodeSnapshot> = node
            .edges()
            .map(|(label, child)| Self::of_node(Some(label), child))
            .collect();
        children.sort_by_key(|child| child.label);

        Self {
            label,
            is_end_of_word: node.is_end_of_word(),
            children,
        }
    }

    /// Total number of nodes in this snapshot, the root included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(NodeSnapshot::node_count).sum::<usize>()
    }
}
