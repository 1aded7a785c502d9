//! Session configuration.
//!
//! The trie core is case-sensitive and accepts anything; what a teaching
//! session actually lets through is policy, and this is where that policy
//! lives. Normalization (trimming, lower-casing) and screening (alphabet,
//! length) both happen in the session layer before a word reaches the trie.

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;

/// Input policy for a trie session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Whether to trim surrounding whitespace from raw input
    pub trim_input: bool,

    /// Whether to lowercase input before it reaches the trie
    pub lowercase_input: bool,

    /// Whether to reject words containing non-alphabetic characters
    pub alphabetic_only: bool,

    /// Maximum accepted word length in characters. Also bounds the recursion
    /// depth of the pruning removal.
    pub max_word_len: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            trim_input: true,
            lowercase_input: true,
            alphabetic_only: true,
            max_word_len: 64,
        }
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_len == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "session.max_word_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
