//! JSON format report output.
//!
//! Every scan event becomes one JSON object on its own line, followed by a
//! final `result` object.

use std::io::{self, Write};

use serde_json::json;

use super::{ErrorLatch, SearchReporter};
use crate::data_structures::boyer_moore_matcher::{as_offset, TraceEvent, TraceSink};

/// JSON lines reporter.
#[derive(Debug)]
pub struct JsonReporter<W: Write> {
    out: W,
    trace: bool,
    error: ErrorLatch,
}

impl<W: Write> JsonReporter<W> {
    /// Creates a reporter writing JSON lines to `out`.
    pub fn new(out: W, trace: bool) -> Self {
        Self {
            out,
            trace,
            error: ErrorLatch::default(),
        }
    }

    fn write_line(&mut self, value: &impl serde::Serialize) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)
    }
}

impl<W: Write> TraceSink for JsonReporter<W> {
    fn record(&mut self, event: &TraceEvent) {
        if !self.trace || self.error.is_set() {
            return;
        }
        let result = self.write_line(event);
        self.error.capture(result);
    }
}

impl<W: Write> SearchReporter for JsonReporter<W> {
    fn finish(&mut self, result: Option<usize>) -> io::Result<()> {
        self.error.take()?;
        self.write_line(&json!({
            "kind": "result",
            "found": result.is_some(),
            "position": as_offset(result),
        }))?;
        self.out.flush()
    }
}
