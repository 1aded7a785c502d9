//! Kumu Trie Library
//!
//! An interactive trie (prefix tree) engine built for teaching the data
//! structure: insert, exact search, prefix search, and structural deletion
//! with dangling-node pruning, plus read-only views a display layer can
//! render from. The library is designed to be used by the bundled terminal
//! driver, but can also be used as a dependency by other projects.
//!
//! # Architecture
//!
//! * [`trie`] — the policy-free core: a single-threaded, synchronous prefix
//!   tree whose operations communicate through `bool` results, never errors.
//! * [`session`] — the operation interface a display layer drives; applies
//!   the configured input policy (trim, lowercase, alphabet, length) before
//!   words reach the core.
//! * [`config`] — file- and environment-based configuration with validation.
//! * [`error`] — explicit error types for every layer around the core.

// Re-export public modules
pub mod config;
pub mod error;
pub mod session;
pub mod trie;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

/// Version information for the Kumu Trie tool.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::KumuResult<()> {
    // Set up global error reporter with tracing
    let reporter = error::TracingErrorReporter;
    error::set_error_reporter(std::sync::Arc::new(reporter));

    // Initialize default configuration
    config::init_default_config()?;

    Ok(())
}
