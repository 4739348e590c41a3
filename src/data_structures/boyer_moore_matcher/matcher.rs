// Copyright (c) 2025 BM Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Boyer-Moore string matching algorithm implementation.
//!
//! This module contains the right-to-left scan that drives the search, the
//! free search functions, and a reusable matcher that keeps the preprocessed
//! tables of one pattern around for many texts.

use super::error::Result;
use super::preprocess::{PreprocessedPattern, DEFAULT_MAX_PATTERN_LENGTH};
use super::symbol::{AlphabetStrategy, Symbol};
use super::tables::{BadCharacterTable, GoodSuffixTable};
use super::trace::{NoTrace, TraceEvent, TraceSink};

/// Numeric "not found" value used by [`as_offset`].
pub const NOT_FOUND: i64 = -1;

/// Options for configuring the Boyer-Moore matcher behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherOptions {
    /// Representation of the bad character table
    pub alphabet: AlphabetStrategy,

    /// Longest pattern the matcher accepts
    pub max_pattern_len: usize,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            alphabet: AlphabetStrategy::Auto,
            max_pattern_len: DEFAULT_MAX_PATTERN_LENGTH,
        }
    }
}

impl MatcherOptions {
    /// Creates a new options object with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bad character table representation.
    pub fn alphabet(mut self, value: AlphabetStrategy) -> Self {
        self.alphabet = value;
        self
    }

    /// Sets the maximum accepted pattern length.
    pub fn max_pattern_len(mut self, value: usize) -> Self {
        self.max_pattern_len = value;
        self
    }
}

/// Position of the scan: current alignment and how many pattern symbols are
/// still unmatched at that alignment (the comparison index plus one).
#[derive(Debug, Default)]
struct MatchState {
    alignment: usize,
    unmatched: usize,
}

impl MatchState {
    /// Compares the pattern right to left at the current alignment.
    ///
    /// Returns the mismatching pattern index, or `None` on a full match.
    fn compare<S: Symbol>(&mut self, pattern: &[S], text: &[S]) -> Option<usize> {
        let window = &text[self.alignment..self.alignment + pattern.len()];
        self.unmatched = pattern.len();
        while self.unmatched > 0 && pattern[self.unmatched - 1] == window[self.unmatched - 1] {
            self.unmatched -= 1;
        }
        self.unmatched.checked_sub(1)
    }
}

/// Scans `text` with a non-empty preprocessed pattern no longer than the text.
fn scan<S, T>(preprocessed: &PreprocessedPattern<S>, text: &[S], sink: &mut T) -> Option<usize>
where
    S: Symbol,
    T: TraceSink + ?Sized,
{
    let pattern = preprocessed.pattern.as_slice();
    let m = pattern.len();
    let last_alignment = text.len() - m;
    let mut state = MatchState::default();

    while state.alignment <= last_alignment {
        sink.record(&TraceEvent::attempt(state.alignment, m));

        let Some(j) = state.compare(pattern, text) else {
            sink.record(&TraceEvent::matched(state.alignment));
            return Some(state.alignment);
        };

        // good_suffix >= 1, so the scan always advances
        let good_suffix = preprocessed.good_suffix_table.shift(j + 1) as isize;
        let bad_char = preprocessed
            .bad_char_table
            .shift_for(text[state.alignment + j], j);
        let advance = good_suffix.max(bad_char) as usize;

        sink.record(&TraceEvent::mismatch(state.alignment, j, advance));
        state.alignment += advance;
    }

    None
}

/// Finds the leftmost occurrence of `pattern` in `text`.
///
/// An empty pattern matches at position 0; a pattern longer than the text
/// never matches.
pub fn search<S: Symbol>(text: &[S], pattern: &[S]) -> Option<usize> {
    search_traced(text, pattern, &mut NoTrace)
}

/// Like [`search`], reporting every scan step to `sink`.
///
/// Short-circuited inputs (empty pattern, pattern longer than text) emit no
/// events.
pub fn search_traced<S, T>(text: &[S], pattern: &[S], sink: &mut T) -> Option<usize>
where
    S: Symbol,
    T: TraceSink + ?Sized,
{
    if text.len() < pattern.len() {
        return None;
    }
    if pattern.is_empty() {
        return Some(0);
    }

    let preprocessed = PreprocessedPattern::unbounded(pattern);
    scan(&preprocessed, text, sink)
}

/// Like [`search`], treating an absent text or pattern as "not found".
pub fn search_optional<S: Symbol>(text: Option<&[S]>, pattern: Option<&[S]>) -> Option<usize> {
    match (text, pattern) {
        (Some(text), Some(pattern)) => search(text, pattern),
        _ => None,
    }
}

/// Converts a search result into its numeric form, [`NOT_FOUND`] when absent.
pub fn as_offset(result: Option<usize>) -> i64 {
    result.map_or(NOT_FOUND, |pos| pos as i64)
}

/// Boyer-Moore pattern matcher holding the preprocessed tables of one pattern.
///
/// The matcher is immutable after construction and can be shared between
/// threads searching different texts.
#[derive(Debug, Clone)]
pub struct BoyerMooreMatcher<S: Symbol> {
    /// The preprocessed pattern
    pattern: PreprocessedPattern<S>,

    /// Matcher options
    options: MatcherOptions,
}

impl<S: Symbol> BoyerMooreMatcher<S> {
    /// Creates a new matcher with an automatic alphabet and no length limit.
    pub fn new(pattern: &[S]) -> Self {
        Self {
            pattern: PreprocessedPattern::unbounded(pattern),
            options: MatcherOptions::default(),
        }
    }

    /// Tries to create a new matcher with custom options.
    ///
    /// # Errors
    ///
    /// Fails when the pattern violates the options' limits; see
    /// [`PreprocessedPattern::new`].
    pub fn try_with_options(pattern: &[S], options: MatcherOptions) -> Result<Self> {
        let preprocessed = PreprocessedPattern::new(pattern, &options)?;

        Ok(Self {
            pattern: preprocessed,
            options,
        })
    }

    /// Finds the first occurrence of the pattern in the text.
    pub fn find_first(&self, text: &[S]) -> Option<usize> {
        self.find_first_traced(text, &mut NoTrace)
    }

    /// Finds the first occurrence, reporting every scan step to `sink`.
    pub fn find_first_traced<T: TraceSink + ?Sized>(&self, text: &[S], sink: &mut T) -> Option<usize> {
        if text.len() < self.pattern.len() {
            return None;
        }
        if self.pattern.is_empty() {
            return Some(0);
        }
        scan(&self.pattern, text, sink)
    }

    /// The pattern this matcher searches for.
    pub fn pattern(&self) -> &[S] {
        &self.pattern.pattern
    }

    /// The options the matcher was built with.
    pub fn options(&self) -> &MatcherOptions {
        &self.options
    }

    /// The bad character table of the pattern.
    pub fn bad_character_table(&self) -> &BadCharacterTable<S> {
        &self.pattern.bad_char_table
    }

    /// The good suffix table of the pattern.
    pub fn good_suffix_table(&self) -> &GoodSuffixTable {
        &self.pattern.good_suffix_table
    }
}

impl BoyerMooreMatcher<char> {
    /// Creates a matcher for the characters of `pattern`.
    pub fn for_str(pattern: &str) -> Self {
        Self::new(&pattern.chars().collect::<Vec<_>>())
    }

    /// Finds the first occurrence in `text`, as a character offset.
    pub fn find_in_str(&self, text: &str) -> Option<usize> {
        self.find_first(&text.chars().collect::<Vec<_>>())
    }
}
