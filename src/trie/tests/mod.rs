// Copyright (c) 2025 Kumu Trie Authors
//
// Licensed under MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Unit and property-based tests for the trie core.

mod property_tests;
mod unit_tests;
