//! Search configuration module.
//!
//! Settings that shape how the matcher is built for each pattern.

use super::{ConfigResult, Validate};
use crate::data_structures::boyer_moore_matcher::{
    AlphabetStrategy, MatcherOptions, DEFAULT_MAX_PATTERN_LENGTH,
};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Search configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Bad character table representation (auto, dense, sparse)
    pub alphabet: AlphabetStrategy,

    /// Longest pattern accepted, in characters
    pub max_pattern_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            alphabet: AlphabetStrategy::Auto,
            max_pattern_len: DEFAULT_MAX_PATTERN_LENGTH,
        }
    }
}

impl SearchConfig {
    /// Matcher options corresponding to this configuration.
    pub fn matcher_options(&self) -> MatcherOptions {
        MatcherOptions::new()
            .alphabet(self.alphabet)
            .max_pattern_len(self.max_pattern_len)
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_pattern_len == 0 {
            return Err(ConfigError::ValidationError(
                "max_pattern_len must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
