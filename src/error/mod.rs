//! Error module for the BM Search application.
//!
//! Algorithm errors live beside the matcher; this module gathers them with
//! configuration, I/O and serialization failures into one application error.

use thiserror::Error;

use crate::data_structures::boyer_moore_matcher::BoyerMooreError;

pub mod config;

/// Result type alias used throughout the application layer.
pub type AppResult<T> = Result<T, AppError>;

/// Core error enum for the BM Search application.
#[derive(Error, Debug)]
pub enum AppError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors building a matcher from the requested pattern.
    #[error("Matcher error: {0}")]
    Matcher(#[from] BoyerMooreError),

    /// IO errors while reading input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML serialization errors.
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
