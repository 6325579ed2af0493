//! Sequential verification driver.
//!
//! Runs each enabled section in order. A library failure ends the current
//! section with an `Error: ...` line and a failed outcome; the driver then
//! moves on. Only output I/O errors stop the run.

use std::io;

use tracing::{debug, info, info_span, warn};
use uniprobe_format::{Console, console_println};

use crate::bundle;
use crate::config::{ProbeConfig, Section};
use crate::demos::{locale, segment, strings, translit};
use crate::error::ProbeError;
use crate::report::{CheckOutcome, ReportSink, RunSummary};

/// Drives the fixed probe sequence against one console.
#[derive(Debug)]
pub struct Driver {
    console: Console,
    config: ProbeConfig,
    sink: Option<ReportSink>,
    summary: RunSummary,
}

impl Driver {
    /// Create a driver writing to `console`.
    #[must_use]
    pub fn new(console: Console, config: ProbeConfig) -> Self {
        Self {
            console,
            config,
            sink: None,
            summary: RunSummary::new(),
        }
    }

    /// Also append every outcome to a JSONL report.
    #[must_use]
    pub fn with_report_sink(mut self, sink: ReportSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Run every enabled section and return the accumulated outcomes.
    pub fn run(mut self) -> io::Result<RunSummary> {
        let engine = self.console.engine().name();
        info!(
            engine,
            sections = self.config.sections.len(),
            "starting probe run"
        );

        console_println!(
            self.console,
            "uniprobe {} (ICU4X compiled data, {} formatter)",
            env!("CARGO_PKG_VERSION"),
            engine
        )?;

        for section in Section::ALL {
            if !self.config.runs(section) {
                debug!(%section, "section disabled");
                continue;
            }
            self.run_section(section)?;
        }

        console_println!(self.console)?;
        console_println!(self.console, "uniprobe run completed.")?;
        self.console.flush()?;
        if let Some(sink) = self.sink.as_mut()
            && let Err(err) = sink.flush()
        {
            warn!(%err, "report flush failed");
            self.sink = None;
        }

        info!(
            outcomes = self.summary.len(),
            failures = self.summary.failures().count(),
            "probe run finished"
        );
        Ok(self.summary)
    }

    fn run_section(&mut self, section: Section) -> io::Result<()> {
        let _span = info_span!("section", %section).entered();

        let result = match section {
            Section::Strings => strings::run(self),
            Section::Locale => locale::run(self),
            Section::Segment => segment::run(self),
            Section::Translit => translit::run(self),
            Section::Bundle => bundle::run(self),
        };
        self.finish_section(section, result)
    }

    /// Report a section result. Library failures print an `Error:` line and
    /// record a failed outcome; only output errors are returned.
    fn finish_section(
        &mut self,
        section: Section,
        result: Result<(), ProbeError>,
    ) -> io::Result<()> {
        match result {
            // The bundle section records one outcome per check itself.
            Ok(()) if section == Section::Bundle => Ok(()),
            Ok(()) => self.record(CheckOutcome::pass(section, section.as_str(), "completed")),
            Err(ProbeError::Io(err)) => Err(err),
            Err(err) => {
                console_println!(self.console, "Error: {}", err)?;
                self.record(CheckOutcome::fail(section, section.as_str(), err.to_string()))
            }
        }
    }

    /// Console for section output.
    pub fn console(&mut self) -> &mut Console {
        &mut self.console
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Outcomes recorded so far.
    #[must_use]
    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Print a blank line and the `=== Running X Example ===` header.
    pub fn header(&mut self, section: Section) -> io::Result<()> {
        console_println!(self.console)?;
        console_println!(self.console, "=== Running {} Example ===", section.title())
    }

    /// Log an outcome, append it to the report, and keep it in the summary.
    pub fn record(&mut self, outcome: CheckOutcome) -> io::Result<()> {
        if outcome.passed {
            debug!(section = %outcome.section, check = %outcome.name, "check passed");
        } else {
            warn!(
                section = %outcome.section,
                check = %outcome.name,
                detail = %outcome.detail,
                "check failed"
            );
        }
        if let Some(sink) = self.sink.as_mut()
            && let Err(err) = sink.write(&outcome)
        {
            // The console run carries on without the report.
            warn!(%err, "report write failed, disabling report");
            self.sink = None;
        }
        self.summary.push(outcome);
        Ok(())
    }
}
