//! Output presentation layer
//!
//! All user-facing progress goes through the [`Reporter`] trait, so the
//! command can print to the terminal or stay silent (and tests can capture
//! output into a buffer).

pub mod display;

use std::io::Write;
use std::path::Path;

use crate::seed::{DroppedRecord, RewriteReport};

/// Sink for rewrite progress
pub trait Reporter {
    /// A record was removed by the category filter
    fn record_dropped(&mut self, dropped: &DroppedRecord);

    /// The rewrite finished; `written` is false in dry-run mode
    fn finish(&mut self, report: &RewriteReport, summary: &SummaryContext<'_>);
}

/// Facts about the run that the summary needs besides the report
#[derive(Debug, Clone, Copy)]
pub struct SummaryContext<'a> {
    pub path: &'a Path,
    pub allowed: &'a [String],
    pub min_images: usize,
    pub max_images: usize,
    pub written: bool,
}

/// Writes human-readable progress lines to any writer
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        // Progress output is best effort; a closed pipe must not abort the rewrite.
        let _ = writeln!(self.out, "{text}");
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn record_dropped(&mut self, dropped: &DroppedRecord) {
        let line = display::dropped_line(dropped);
        self.emit(&line);
    }

    fn finish(&mut self, report: &RewriteReport, summary: &SummaryContext<'_>) {
        let text = display::summary(report, summary);
        self.emit(&text);
        let _ = self.out.flush();
    }
}

/// Reporter that discards everything
#[cfg(test)]
#[derive(Default)]
pub struct SilentReporter;

#[cfg(test)]
impl Reporter for SilentReporter {
    fn record_dropped(&mut self, _dropped: &DroppedRecord) {
        // No-op for silent mode
    }

    fn finish(&mut self, _report: &RewriteReport, _summary: &SummaryContext<'_>) {
        // No-op for silent mode
    }
}
