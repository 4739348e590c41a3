// Copyright (c) 2025 BM Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Diagnostic trace events emitted while scanning.
//!
//! The scan reports its progress to an injected [`TraceSink`]. Nothing in the
//! algorithm reads back from the sink, so results are identical with or
//! without one attached.

use serde::Serialize;

/// Kind of a trace event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    /// A new alignment is about to be compared
    Attempt,
    /// The alignment failed; `shift` holds the chosen advance
    Mismatch,
    /// The alignment matched the whole pattern
    Match,
}

/// A single step of the right-to-left scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraceEvent {
    /// What happened
    pub kind: TraceKind,
    /// Offset of the pattern start within the text
    pub alignment: usize,
    /// Pattern index involved in the event
    pub pattern_index: usize,
    /// Text index involved in the event
    pub text_index: usize,
    /// Advance applied after a mismatch, zero otherwise
    pub shift: usize,
}

impl TraceEvent {
    /// Start of an alignment: comparison begins at the last pattern symbol.
    pub fn attempt(alignment: usize, pattern_len: usize) -> Self {
        let last = pattern_len.saturating_sub(1);
        Self {
            kind: TraceKind::Attempt,
            alignment,
            pattern_index: last,
            text_index: alignment + last,
            shift: 0,
        }
    }

    /// Mismatch at `pattern_index` followed by an advance of `shift`.
    pub fn mismatch(alignment: usize, pattern_index: usize, shift: usize) -> Self {
        Self {
            kind: TraceKind::Mismatch,
            alignment,
            pattern_index,
            text_index: alignment + pattern_index,
            shift,
        }
    }

    /// Full match at `alignment`.
    pub fn matched(alignment: usize) -> Self {
        Self {
            kind: TraceKind::Match,
            alignment,
            pattern_index: 0,
            text_index: alignment,
            shift: 0,
        }
    }
}

/// Receiver of scan progress events.
#[cfg_attr(test, mockall::automock)]
pub trait TraceSink {
    /// Records one event.
    fn record(&mut self, event: &TraceEvent);
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    #[inline]
    fn record(&mut self, _event: &TraceEvent) {}
}

impl TraceSink for Vec<TraceEvent> {
    fn record(&mut self, event: &TraceEvent) {
        self.push(*event);
    }
}

/// Sink that forwards events to the `tracing` framework at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn record(&mut self, event: &TraceEvent) {
        tracing::debug!(
            kind = ?event.kind,
            alignment = event.alignment,
            pattern_index = event.pattern_index,
            text_index = event.text_index,
            shift = event.shift,
            "boyer-moore scan"
        );
    }
}
