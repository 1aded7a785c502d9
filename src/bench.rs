//! Benchmarking support for the Kumu Trie tool.
//!
//! This module provides the deterministic word corpora the criterion
//! benchmarks share, so insert, lookup, and removal runs measure the same
//! workload. Only compiled with the `benchmarking` feature.

/// Generates a deterministic corpus of `count` distinct lowercase words with
/// heavy prefix overlap, the workload shape the trie is built for.
///
/// The generator is a simple counter-to-base-26 encoding, so corpora are
/// reproducible across runs and machines without pulling in an RNG.
pub fn word_corpus(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let mut word = String::new();
            let mut n = i;
            loop {
                word.push((b'a' + (n % 26) as u8) as char);
                n /= 26;
                if n == 0 {
                    break;
                }
            }
            word
        })
        .collect()
}
