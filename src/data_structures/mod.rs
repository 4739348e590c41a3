//! Data structures for BM Search.
//!
//! This module contains the string matching structures used by the search
//! front end. All implementations are free of unsafe code and immutable once
//! built, so they can be shared across threads.

pub mod boyer_moore_matcher;

// Re-export common data structures
pub use boyer_moore_matcher::{search, BoyerMooreMatcher, MatcherOptions};
