//! Trace output configuration module.

use super::{ConfigResult, Validate};
use serde::{Deserialize, Serialize};

/// Output format for the scan trace and the final result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TraceFormat {
    /// Human-readable console layout
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Trace configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TraceConfig {
    /// Whether to print every scan step
    pub enabled: bool,

    /// Output format
    pub format: TraceFormat,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            format: TraceFormat::Text,
        }
    }
}

impl Validate for TraceConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}
