//! Session layer: the operation interface a display layer drives.
//!
//! A [`TrieSession`] owns one [`Trie`] plus the input policy from
//! [`SessionConfig`]. Raw user input is normalized (trim, lowercase) and
//! screened (alphabet, length) here, so the core stays policy-free and
//! case-sensitive. Accepted words are handed to the trie unchanged; rejected
//! ones come back as [`InputError`] without touching the structure.
//!
//! Word membership is always derived from the trie's end-of-word marks; the
//! session keeps no shadow word set of its own.

use tracing::debug;

use crate::config::SessionConfig;
use crate::error::input::InputError;
use crate::trie::{NodeSnapshot, Trie, TrieNode};

/// Result type for session operations.
pub type SessionResult<T> = Result<T, InputError>;

/// An interactive trie session with a configured input policy.
#[derive(Debug, Default)]
pub struct TrieSession {
    trie: Trie,
    config: SessionConfig,
}

impl TrieSession {
    /// Creates a session with the default input policy.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Creates a session with the given input policy.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            trie: Trie::new(),
            config,
        }
    }

    /// The active input policy.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Inserts a word after normalization and screening.
    ///
    /// Returns `true` if the word was new, `false` if it was already stored.
    pub fn insert(&mut self, raw: &str) -> SessionResult<bool> {
        let word = self.admit(raw)?;
        let is_new = !self.trie.contains(&word);
        self.trie.insert(&word);
        debug!(word = %word, is_new, "insert");
        Ok(is_new)
    }

    /// Whether the normalized word is stored as a complete word.
    pub fn contains(&self, raw: &str) -> SessionResult<bool> {
        let word = self.admit(raw)?;
        let found = self.trie.contains(&word);
        debug!(word = %word, found, "search");
        Ok(found)
    }

    /// Whether any stored word starts with the normalized prefix.
    pub fn contains_prefix(&self, raw: &str) -> SessionResult<bool> {
        let prefix = self.admit(raw)?;
        let found = self.trie.contains_prefix(&prefix);
        debug!(prefix = %prefix, found, "prefix search");
        Ok(found)
    }

    /// Removes the normalized word, pruning nodes no other word needs.
    ///
    /// Returns `true` if the word existed and was removed, `false` if it was
    /// absent or present only as a prefix of longer words.
    pub fn remove(&mut self, raw: &str) -> SessionResult<bool> {
        let word = self.admit(raw)?;
        let removed = self.trie.remove(&word);
        debug!(word = %word, removed, "remove");
        Ok(removed)
    }

    /// Every stored word, sorted, reconstructed from the trie.
    pub fn words(&self) -> Vec<String> {
        self.trie.words()
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Whether no word is stored.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Removes every word.
    pub fn clear(&mut self) {
        self.trie.clear();
        debug!("clear");
    }

    /// Read-only view of the root for direct traversal.
    pub fn root(&self) -> &TrieNode {
        self.trie.root()
    }

    /// Detached, render-ready copy of the node set.
    pub fn snapshot(&self) -> NodeSnapshot {
        self.trie.snapshot()
    }

    /// Applies the input policy: normalize first, then screen.
    fn admit(&self, raw: &str) -> SessionResult<String> {
        let trimmed = if self.config.trim_input {
            raw.trim()
        } else {
            raw
        };
        let word = if self.config.lowercase_input {
            trimmed.to_lowercase()
        } else {
            trimmed.to_string()
        };

        if word.is_empty() {
            return Err(InputError::Empty);
        }
        if word.chars().count() > self.config.max_word_len {
            return Err(InputError::TooLong {
                word,
                max_len: self.config.max_word_len,
            });
        }
        if self.config.alphabetic_only {
            if let Some(ch) = word.chars().find(|c| !c.is_alphabetic()) {
                return Err(InputError::DisallowedCharacter { word, ch });
            }
        }

        Ok(word)
    }
}
