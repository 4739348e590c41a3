// Copyright (c) 2025 BM Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tables for the Boyer-Moore string matching algorithm.
//!
//! This module contains the data structures for the lookup tables used by
//! the Boyer-Moore algorithm to skip alignments:
//!
//! 1. Bad Character Table: the rightmost index of every symbol in the pattern,
//!    or the [`ABSENT`] sentinel.
//!
//! 2. Good Suffix Table: for every mismatch position, the smallest shift that
//!    re-aligns the matched suffix (strong rule) or the widest border of the
//!    pattern that fits inside it.
//!
//! Both tables depend on the pattern alone and are immutable once built.

use fnv::FnvHashMap;

use super::error::{BoyerMooreError, Result};
use super::symbol::{AlphabetStrategy, Symbol, DENSE_ALPHABET_SIZE};

/// Sentinel returned for symbols that do not occur in the pattern.
pub const ABSENT: isize = -1;

#[derive(Debug, Clone)]
enum Entries<S: Symbol> {
    Dense(Box<[isize; DENSE_ALPHABET_SIZE]>),
    Sparse(FnvHashMap<S, usize>),
}

/// Represents the bad character table for the Boyer-Moore algorithm.
///
/// Maps each symbol to its rightmost occurrence in the pattern. Symbols that
/// never occur map to [`ABSENT`].
#[derive(Debug, Clone)]
pub struct BadCharacterTable<S: Symbol> {
    entries: Entries<S>,
    pattern_len: usize,
}

impl<S: Symbol> BadCharacterTable<S> {
    /// Creates a new bad character table, choosing the representation
    /// automatically.
    ///
    /// # Arguments
    ///
    /// * `pattern` - The pattern to create the table for.
    pub fn new(pattern: &[S]) -> Self {
        if pattern.iter().all(|s| s.dense_code().is_some()) {
            Self::dense(pattern).unwrap_or_else(|_| Self::sparse(pattern))
        } else {
            Self::sparse(pattern)
        }
    }

    /// Creates a new bad character table with an explicit representation.
    ///
    /// # Errors
    ///
    /// Returns [`BoyerMooreError::SymbolOutOfRange`] when `strategy` is
    /// [`AlphabetStrategy::Dense`] and the pattern holds a symbol without a
    /// dense code.
    pub fn with_strategy(pattern: &[S], strategy: AlphabetStrategy) -> Result<Self> {
        match strategy {
            AlphabetStrategy::Auto => Ok(Self::new(pattern)),
            AlphabetStrategy::Dense => Self::dense(pattern),
            AlphabetStrategy::Sparse => Ok(Self::sparse(pattern)),
        }
    }

    fn dense(pattern: &[S]) -> Result<Self> {
        let mut entries = Box::new([ABSENT; DENSE_ALPHABET_SIZE]);

        // Later occurrences overwrite earlier ones, so the rightmost wins
        for (i, &symbol) in pattern.iter().enumerate() {
            let code = symbol
                .dense_code()
                .ok_or_else(|| BoyerMooreError::SymbolOutOfRange(format!("{symbol:?}")))?;
            entries[code] = i as isize;
        }

        Ok(Self {
            entries: Entries::Dense(entries),
            pattern_len: pattern.len(),
        })
    }

    fn sparse(pattern: &[S]) -> Self {
        let mut entries = FnvHashMap::default();
        for (i, &symbol) in pattern.iter().enumerate() {
            entries.insert(symbol, i);
        }

        Self {
            entries: Entries::Sparse(entries),
            pattern_len: pattern.len(),
        }
    }

    /// Returns the rightmost index of `symbol` in the pattern, if any.
    #[inline]
    pub fn last_occurrence(&self, symbol: S) -> Option<usize> {
        match &self.entries {
            Entries::Dense(entries) => symbol
                .dense_code()
                .map(|code| entries[code])
                .filter(|&idx| idx != ABSENT)
                .map(|idx| idx as usize),
            Entries::Sparse(entries) => entries.get(&symbol).copied(),
        }
    }

    /// Returns the table entry for `symbol`: its rightmost index, or [`ABSENT`].
    #[inline]
    pub fn get(&self, symbol: S) -> isize {
        self.last_occurrence(symbol)
            .map_or(ABSENT, |idx| idx as isize)
    }

    /// Shift suggested by the bad character rule for a mismatch of `symbol`
    /// against pattern index `mismatch_index`. May be zero or negative.
    #[inline]
    pub fn shift_for(&self, symbol: S, mismatch_index: usize) -> isize {
        mismatch_index as isize - self.get(symbol)
    }

    /// Whether the table uses the dense 256-entry representation.
    pub fn is_dense(&self) -> bool {
        matches!(self.entries, Entries::Dense(_))
    }

    /// Length of the pattern the table was built from.
    pub fn pattern_len(&self) -> usize {
        self.pattern_len
    }
}

/// Represents the good suffix table for the Boyer-Moore algorithm.
///
/// `shift[k]` is how far to advance the alignment when the mismatch happens at
/// pattern index `k - 1`, i.e. after `m - k` symbols of suffix have matched.
/// Every entry is at least one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoodSuffixTable {
    shift: Vec<usize>,
}

impl GoodSuffixTable {
    /// Creates a new good suffix table for the given pattern.
    ///
    /// The table has `pattern.len() + 1` entries. An empty pattern yields the
    /// single entry `[1]`.
    pub fn new<S: Symbol>(pattern: &[S]) -> Self {
        let m = pattern.len();
        let mut shift = vec![0usize; m + 1];
        let mut border_position = vec![0usize; m + 1];

        // Strong suffix phase. `border_position[i]` ends up holding the start
        // of the widest border of the suffix `pattern[i..]`.
        let mut i = m;
        let mut j = m + 1;
        border_position[i] = j;

        while i > 0 {
            while j <= m && pattern[i - 1] != pattern[j - 1] {
                // First write wins: the smallest shift for the slot is found first
                if shift[j] == 0 {
                    shift[j] = j - i;
                }
                j = border_position[j];
            }
            i -= 1;
            j -= 1;
            border_position[i] = j;
        }

        // Partial match phase: slots still empty take the widest border of the
        // pattern that fits, narrowing as the matched suffix gets shorter.
        let mut j = border_position[0];
        for (i, slot) in shift.iter_mut().enumerate() {
            if *slot == 0 {
                *slot = j;
            }
            if i == j {
                j = border_position[j];
            }
        }

        Self { shift }
    }

    /// Gets the shift for slot `k` (mismatch at pattern index `k - 1`).
    ///
    /// Out-of-range slots fall back to a shift of one.
    #[inline]
    pub fn shift(&self, k: usize) -> usize {
        self.shift.get(k).copied().unwrap_or(1)
    }

    /// Returns the whole shift array.
    pub fn as_slice(&self) -> &[usize] {
        &self.shift
    }

    /// Number of slots (`pattern length + 1`).
    pub fn len(&self) -> usize {
        self.shift.len()
    }

    /// Always false: even an empty pattern has one slot.
    pub fn is_empty(&self) -> bool {
        self.shift.is_empty()
    }
}

/// Builds the bad character table for `pattern`.
pub fn build_bad_character_table<S: Symbol>(pattern: &[S]) -> BadCharacterTable<S> {
    BadCharacterTable::new(pattern)
}

/// Builds the good suffix shift array for `pattern` (length `pattern.len() + 1`).
pub fn build_good_suffix_table<S: Symbol>(pattern: &[S]) -> GoodSuffixTable {
    GoodSuffixTable::new(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_bad_char_table_last_occurrence_wins() {
        let table = BadCharacterTable::new(&chars("PATTERN"));

        assert_eq!(table.get('P'), 0);
        assert_eq!(table.get('A'), 1);
        assert_eq!(table.get('T'), 3);
        assert_eq!(table.get('N'), 6);
        assert_eq!(table.get('Z'), ABSENT);
        assert_eq!(table.last_occurrence('Z'), None);
        assert!(table.is_dense());
    }

    #[test]
    fn test_bad_char_shift() {
        let table = BadCharacterTable::new(b"ABC".as_slice());

        assert_eq!(table.shift_for(b'A', 2), 2);
        assert_eq!(table.shift_for(b'C', 2), 0);
        assert_eq!(table.shift_for(b'C', 0), -2);
        assert_eq!(table.shift_for(b'Z', 1), 2);
    }

    #[test]
    fn test_bad_char_table_empty_pattern() {
        let table = BadCharacterTable::<u8>::new(&[]);
        assert_eq!(table.pattern_len(), 0);
        assert!((0..=255u8).all(|b| table.get(b) == ABSENT));
    }

    #[test]
    fn test_bad_char_table_wide_symbols() {
        let pattern = chars("日本日");
        let table = BadCharacterTable::new(&pattern);

        assert!(!table.is_dense());
        assert_eq!(table.get('日'), 2);
        assert_eq!(table.get('本'), 1);
        assert_eq!(table.get('a'), ABSENT);
    }

    #[test]
    fn test_dense_table_rejects_wide_symbols() {
        let result = BadCharacterTable::with_strategy(&chars("a日"), AlphabetStrategy::Dense);
        assert!(matches!(result, Err(BoyerMooreError::SymbolOutOfRange(_))));
    }

    #[test]
    fn test_dense_table_treats_wide_text_symbols_as_absent() {
        let table = BadCharacterTable::with_strategy(&chars("abc"), AlphabetStrategy::Dense).unwrap();
        assert!(table.is_dense());
        assert_eq!(table.get('日'), ABSENT);
    }

    #[test]
    fn test_dense_and_sparse_agree() {
        let pattern = chars("abracadabra");
        let dense = BadCharacterTable::with_strategy(&pattern, AlphabetStrategy::Dense).unwrap();
        let sparse = BadCharacterTable::with_strategy(&pattern, AlphabetStrategy::Sparse).unwrap();

        assert!(dense.is_dense());
        assert!(!sparse.is_dense());
        for symbol in "abcdrxyz日".chars() {
            assert_eq!(dense.get(symbol), sparse.get(symbol), "symbol {symbol:?}");
        }
    }

    #[test]
    fn test_good_suffix_table_distinct_symbols() {
        let table = GoodSuffixTable::new(&chars("ABC"));
        assert_eq!(table.as_slice(), &[3, 3, 3, 1]);
    }

    #[test]
    fn test_good_suffix_table_repeated_symbol() {
        let table = GoodSuffixTable::new(&chars("AAA"));
        assert_eq!(table.as_slice(), &[1, 1, 2, 3]);
    }

    #[test]
    fn test_good_suffix_table_periodic_pattern() {
        let table = GoodSuffixTable::new(b"ABAB".as_slice());
        assert_eq!(table.as_slice(), &[2, 2, 2, 4, 1]);
    }

    #[test]
    fn test_good_suffix_table_empty_pattern() {
        let table = GoodSuffixTable::new::<u8>(&[]);
        assert_eq!(table.as_slice(), &[1]);
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_good_suffix_shift_out_of_range() {
        let table = GoodSuffixTable::new(&chars("AB"));
        assert_eq!(table.shift(10), 1);
    }

    #[test]
    fn test_good_suffix_entries_positive() {
        for pattern in ["ANPANMAN", "ABCABCAB", "GCAGAGAG", "a", "aaaaab", "baaaaa"] {
            let table = GoodSuffixTable::new(&chars(pattern));
            assert_eq!(table.len(), pattern.len() + 1);
            assert!(table.as_slice().iter().all(|&s| s >= 1), "{pattern}: {:?}", table.as_slice());
        }
    }
}
