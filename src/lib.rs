//! BM Search Library
//!
//! Exact string matching with the Boyer-Moore algorithm, combining the bad
//! character and strong good suffix heuristics, plus the configuration,
//! reporting and command-line layers used by the `bm_search` binary.
//!
//! # Architecture
//!
//! - `data_structures::boyer_moore_matcher`: shift tables, scan and trace events
//! - `report`: text and JSON rendering of a traced search
//! - `config`: layered configuration (defaults, file, environment)
//! - `cli`: argument parsing and command implementations
//! - `error`: application error type

pub mod cli;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod report;

/// Version information for BM Search.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
