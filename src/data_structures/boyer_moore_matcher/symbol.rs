// Copyright (c) 2025 BM Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Symbol alphabet abstraction.
//!
//! The matcher works over any fixed-width symbol type. Symbols whose code fits
//! in a byte can be indexed into a dense 256-entry table; anything wider is
//! handled by a sparse map.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Number of entries in a dense alphabet table.
pub const DENSE_ALPHABET_SIZE: usize = 256;

/// A unit of the text/pattern alphabet.
pub trait Symbol: Copy + Eq + Hash + Debug {
    /// Returns the symbol's index in a dense byte alphabet, or `None` when the
    /// symbol lies outside `0..DENSE_ALPHABET_SIZE`.
    fn dense_code(self) -> Option<usize>;
}

impl Symbol for u8 {
    #[inline]
    fn dense_code(self) -> Option<usize> {
        Some(self as usize)
    }
}

impl Symbol for char {
    #[inline]
    fn dense_code(self) -> Option<usize> {
        let code = self as usize;
        (code < DENSE_ALPHABET_SIZE).then_some(code)
    }
}

/// How the bad character table stores its entries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlphabetStrategy {
    /// Dense when every pattern symbol has a dense code, sparse otherwise
    #[default]
    Auto,
    /// Always use a 256-entry array
    Dense,
    /// Always use a hash map keyed by symbol
    Sparse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_codes() {
        assert_eq!(b'A'.dense_code(), Some(65));
        assert_eq!(0xFFu8.dense_code(), Some(255));
        assert_eq!('A'.dense_code(), Some(65));
        assert_eq!('ÿ'.dense_code(), Some(255));
        assert_eq!('Ā'.dense_code(), None);
        assert_eq!('日'.dense_code(), None);
    }

    #[test]
    fn test_strategy_serde_names() {
        let json = serde_json::to_string(&AlphabetStrategy::Sparse).unwrap();
        assert_eq!(json, "\"sparse\"");

        let parsed: AlphabetStrategy = serde_json::from_str("\"dense\"").unwrap();
        assert_eq!(parsed, AlphabetStrategy::Dense);
        assert_eq!(AlphabetStrategy::default(), AlphabetStrategy::Auto);
    }
}
