//! Test modules for the Kumu Trie tool.
//!
//! This module contains cross-component tests:
//! - Configuration loading and validation tests
//! - Error type and reporting tests
//! - Session layer policy tests
//! - Shared test fixtures and proptest strategies
//!
//! Tests of the trie core itself live next to the core in `trie/tests`.
