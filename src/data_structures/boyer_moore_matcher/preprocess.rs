// Copyright (c) 2025 BM Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Pattern preprocessing for the Boyer-Moore algorithm.
//!
//! Preprocessing analyzes the pattern once and produces the two lookup tables
//! the scan consults at every mismatch. The result depends on the pattern
//! alone, so it can be shared read-only between any number of searches.

use super::error::{BoyerMooreError, Result};
use super::matcher::MatcherOptions;
use super::symbol::Symbol;
use super::tables::{BadCharacterTable, GoodSuffixTable};

/// Default maximum pattern length accepted by [`PreprocessedPattern::new`].
pub const DEFAULT_MAX_PATTERN_LENGTH: usize = 1024 * 32;

/// Result of the preprocessing step containing all necessary lookup tables.
#[derive(Debug, Clone)]
pub struct PreprocessedPattern<S: Symbol> {
    /// The pattern being searched for
    pub pattern: Vec<S>,

    /// Bad character rule table
    pub bad_char_table: BadCharacterTable<S>,

    /// Good suffix rule table
    pub good_suffix_table: GoodSuffixTable,
}

impl<S: Symbol> PreprocessedPattern<S> {
    /// Preprocesses a pattern under the given options.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern exceeds `options.max_pattern_len`, or if
    /// a dense alphabet was requested for a pattern that does not fit one.
    pub fn new(pattern: &[S], options: &MatcherOptions) -> Result<Self> {
        if pattern.len() > options.max_pattern_len {
            return Err(BoyerMooreError::PatternTooLarge {
                len: pattern.len(),
                max: options.max_pattern_len,
            });
        }

        let bad_char_table = BadCharacterTable::with_strategy(pattern, options.alphabet)?;
        let good_suffix_table = GoodSuffixTable::new(pattern);

        tracing::debug!(
            pattern_len = pattern.len(),
            dense_alphabet = bad_char_table.is_dense(),
            "preprocessed pattern"
        );

        Ok(Self {
            pattern: pattern.to_vec(),
            bad_char_table,
            good_suffix_table,
        })
    }

    /// Preprocesses a pattern with an automatically chosen alphabet and no
    /// length limit. Never fails.
    pub fn unbounded(pattern: &[S]) -> Self {
        Self {
            pattern: pattern.to_vec(),
            bad_char_table: BadCharacterTable::new(pattern),
            good_suffix_table: GoodSuffixTable::new(pattern),
        }
    }

    /// The length of the pattern in symbols.
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Whether the pattern is empty.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }
}
