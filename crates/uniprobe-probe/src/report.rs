//! Check outcomes, the run summary, and the JSONL report sink.
//!
//! The sink appends one JSON object per outcome, in call order, so a run
//! can be diffed or gated by tooling without scraping console text.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::config::Section;

/// Result of one probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub section: Section,
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

impl CheckOutcome {
    /// A passing outcome.
    #[must_use]
    pub fn pass(section: Section, name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            section,
            name: name.into(),
            passed: true,
            detail: detail.into(),
        }
    }

    /// A failing outcome.
    #[must_use]
    pub fn fail(section: Section, name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            section,
            name: name.into(),
            passed: false,
            detail: detail.into(),
        }
    }
}

/// Every outcome of a run, in order.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    outcomes: Vec<CheckOutcome>,
}

impl RunSummary {
    /// Create an empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outcome.
    pub fn push(&mut self, outcome: CheckOutcome) {
        self.outcomes.push(outcome);
    }

    /// True when no recorded outcome failed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.passed)
    }

    /// All outcomes in record order.
    #[must_use]
    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    /// Outcomes that failed.
    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed)
    }

    /// Outcomes recorded for one section.
    pub fn for_section(&self, section: Section) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes
            .iter()
            .filter(move |outcome| outcome.section == section)
    }

    /// Number of outcomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Line-oriented JSONL sink for check outcomes.
pub struct ReportSink {
    writer: BufWriter<Box<dyn Write + Send>>,
}

impl std::fmt::Debug for ReportSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportSink").finish_non_exhaustive()
    }
}

impl ReportSink {
    /// Open (append) a report file. Returns `Ok(None)` when no path is set.
    pub fn from_path(path: Option<&Path>) -> io::Result<Option<Self>> {
        let Some(path) = path else {
            return Ok(None);
        };
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Some(Self::with_writer(Box::new(file))))
    }

    /// Sink writing to an arbitrary destination.
    #[must_use]
    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Write one outcome as a JSON line and flush.
    pub fn write(&mut self, outcome: &CheckOutcome) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, outcome)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }

    /// Flush any buffered output.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
