//! Text format report output.
//!
//! Renders each alignment the way the interactive console shows it:
//!
//! ```text
//! Text:    ABAAABCD
//! Pattern:   ABC
//!            ^
//! Mismatch at index 2 (pattern) and 4 (text)
//! Shifting pattern by 2 positions
//! ```
//!
//! Padding and the caret column are counted in `char`s, so columns only line
//! up on terminals where every character of the text is one cell wide.

use std::io::{self, Write};

use super::{ErrorLatch, SearchReporter};
use crate::data_structures::boyer_moore_matcher::{TraceEvent, TraceKind, TraceSink};

/// Width of the `Text:    ` / `Pattern: ` labels.
const LABEL_WIDTH: usize = 9;

/// Printed once, before any trace output.
const OPENER: &str = "--------------------------------------------";

/// Printed around the outcome.
const SEPARATOR: &str = "---------------------------------------------";

/// Text format reporter.
#[derive(Debug)]
pub struct TextReporter<W: Write> {
    out: W,
    text: String,
    pattern: String,
    trace: bool,
    started: bool,
    error: ErrorLatch,
}

impl<W: Write> TextReporter<W> {
    /// Creates a reporter for a search of `pattern` in `text`.
    pub fn new(out: W, text: &str, pattern: &str, trace: bool) -> Self {
        Self {
            out,
            text: text.to_string(),
            pattern: pattern.to_string(),
            trace,
            started: false,
            error: ErrorLatch::default(),
        }
    }

    fn start(&mut self) -> io::Result<()> {
        if !self.started {
            self.started = true;
            writeln!(self.out, "{OPENER}")?;
        }
        Ok(())
    }

    fn write_event(&mut self, event: &TraceEvent) -> io::Result<()> {
        self.start()?;
        match event.kind {
            TraceKind::Attempt => {
                writeln!(self.out, " ")?;
                writeln!(self.out, "{:<width$}{}", "Text:", self.text, width = LABEL_WIDTH)?;
                writeln!(
                    self.out,
                    "{:<width$}{}{}",
                    "Pattern:",
                    " ".repeat(event.alignment),
                    self.pattern,
                    width = LABEL_WIDTH
                )?;
            }
            TraceKind::Mismatch => {
                writeln!(self.out, "{}^", " ".repeat(LABEL_WIDTH + event.text_index))?;
                writeln!(
                    self.out,
                    "Mismatch at index {} (pattern) and {} (text)",
                    event.pattern_index, event.text_index
                )?;
                writeln!(self.out, "Shifting pattern by {} positions", event.shift)?;
            }
            TraceKind::Match => {}
        }
        Ok(())
    }
}

impl<W: Write> TraceSink for TextReporter<W> {
    fn record(&mut self, event: &TraceEvent) {
        if !self.trace || self.error.is_set() {
            return;
        }
        let result = self.write_event(event);
        self.error.capture(result);
    }
}

impl<W: Write> SearchReporter for TextReporter<W> {
    fn finish(&mut self, result: Option<usize>) -> io::Result<()> {
        self.error.take()?;
        self.start()?;
        writeln!(self.out, "{SEPARATOR}")?;
        match result {
            Some(position) => writeln!(self.out, "Pattern match at position: {position}")?,
            None => writeln!(self.out, "No match pattern found in the given text.")?,
        }
        writeln!(self.out, "{SEPARATOR}")?;
        self.out.flush()
    }
}
