//! Search report output.
//!
//! Reporters are trace sinks that render scan progress and the final outcome
//! for the console, either in the classic text layout or as JSON lines. The
//! search itself never depends on them.

mod json;
mod text;

use std::io::{self, Write};

use crate::config::TraceFormat;
use crate::data_structures::boyer_moore_matcher::TraceSink;

pub use json::JsonReporter;
pub use text::TextReporter;

/// A trace sink that also renders the final search outcome.
pub trait SearchReporter: TraceSink {
    /// Writes the outcome and flushes. Returns the first I/O error seen while
    /// tracing, if any.
    fn finish(&mut self, result: Option<usize>) -> io::Result<()>;
}

/// Builds the reporter for `format`, writing to `out`.
///
/// When `trace` is false, scan events are ignored and only the outcome is
/// written.
pub fn reporter_for<'a, W: Write + 'a>(
    format: TraceFormat,
    out: W,
    text: &str,
    pattern: &str,
    trace: bool,
) -> Box<dyn SearchReporter + 'a> {
    match format {
        TraceFormat::Text => Box::new(TextReporter::new(out, text, pattern, trace)),
        TraceFormat::Json => Box::new(JsonReporter::new(out, trace)),
    }
}

/// Keeps the first I/O error from a series of writes.
#[derive(Debug, Default)]
struct ErrorLatch(Option<io::Error>);

impl ErrorLatch {
    fn capture(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            self.0.get_or_insert(err);
        }
    }

    fn take(&mut self) -> io::Result<()> {
        self.0.take().map_or(Ok(()), Err)
    }

    fn is_set(&self) -> bool {
        self.0.is_some()
    }
}
