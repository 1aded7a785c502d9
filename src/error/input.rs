//! Input policy error module.
//!
//! The session layer normalizes and screens raw input before it reaches the
//! trie; these are the ways a word can be turned away. The trie core never
//! produces these: policy rejects at the boundary, the core only answers.

use thiserror::Error;

/// Errors raised when a word is rejected by the session's input policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The word was empty (or became empty after trimming).
    #[error("Empty word not allowed")]
    Empty,

    /// The word contains a character outside the configured alphabet.
    #[error("Word '{word}' contains disallowed character '{ch}'")]
    DisallowedCharacter {
        /// The rejected word.
        word: String,
        /// The first offending character.
        ch: char,
    },

    /// The word exceeds the configured maximum length.
    #[error("Word '{word}' exceeds maximum length of {max_len}")]
    TooLong {
        /// The rejected word.
        word: String,
        /// The configured length bound.
        max_len: usize,
    },
}
