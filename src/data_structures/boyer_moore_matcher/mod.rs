// Copyright (c) 2025 BM Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Boyer-Moore Pattern Matcher for exact string searching.
//!
//! This module implements the Boyer-Moore search with both the bad character
//! rule and the strong good suffix rule. At each mismatch the scan advances by
//! the larger of the two suggested shifts, and it reports the leftmost match.
//!
//! # Features
//!
//! - Works over any [`Symbol`] type (`u8`, `char`)
//! - Dense 256-entry or sparse bad character table, chosen per pattern
//! - Reusable matcher whose tables are built once and shared read-only
//! - Optional [`TraceSink`] receiving every scan step
//!
//! # Example
//!
//! ```
//! use bm_search_lib::data_structures::boyer_moore_matcher::{search, BoyerMooreMatcher};
//!
//! let text: Vec<char> = "HELLO WORLD".chars().collect();
//! let pattern: Vec<char> = "WORLD".chars().collect();
//! assert_eq!(search(&text, &pattern), Some(6));
//!
//! // Preprocess once, search many texts
//! let matcher = BoyerMooreMatcher::new(b"ABC".as_slice());
//! assert_eq!(matcher.find_first(b"ABAAABCD"), Some(4));
//! assert_eq!(matcher.find_first(b"XYZ"), None);
//! ```
//!
//! # Performance Characteristics
//!
//! - Preprocessing time: O(m + σ) where m is the pattern length and σ is the alphabet size
//! - Space complexity: O(m + σ)
//! - Best case: O(n/m) comparisons (where n is the text length)
//! - Worst case: O(n*m) comparisons for the first-match search

mod error;
mod matcher;
mod preprocess;
mod symbol;
mod tables;
mod trace;

#[cfg(test)]
mod tests;

// Re-exports
pub use error::{BoyerMooreError, Result};
pub use matcher::{
    as_offset, search, search_optional, search_traced, BoyerMooreMatcher, MatcherOptions,
    NOT_FOUND,
};
pub use preprocess::{PreprocessedPattern, DEFAULT_MAX_PATTERN_LENGTH};
pub use symbol::{AlphabetStrategy, Symbol, DENSE_ALPHABET_SIZE};
pub use tables::{
    build_bad_character_table, build_good_suffix_table, BadCharacterTable, GoodSuffixTable,
    ABSENT,
};
pub use trace::{NoTrace, TraceEvent, TraceKind, TraceSink, TracingSink};
