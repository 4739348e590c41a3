// Copyright (c) 2025 BM Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Boyer-Moore Pattern Matcher.

/// Error types for Boyer-Moore Pattern Matcher construction.
///
/// Searching never fails; only building a reusable matcher under explicit
/// limits can.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum BoyerMooreError {
    /// Pattern is too large
    #[error("Pattern of {len} symbols exceeds maximum allowed length of {max}")]
    PatternTooLarge {
        /// Length of the rejected pattern
        len: usize,
        /// Configured maximum
        max: usize,
    },

    /// A pattern symbol cannot be stored in a dense byte-sized alphabet table
    #[error("Symbol {0} is outside the dense alphabet range 0..256")]
    SymbolOutOfRange(String),
}

/// Result type for Boyer-Moore Pattern Matcher operations
pub type Result<T> = std::result::Result<T, BoyerMooreError>;
