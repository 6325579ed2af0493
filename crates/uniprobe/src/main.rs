#![forbid(unsafe_code)]

//! uniprobe binary entry point.
//!
//! Reads configuration from `UNIPROBE_*` environment variables, prints the
//! probe run to stdout, and exits non-zero on output failure, or on any
//! failed check when `UNIPROBE_STRICT` is set.

mod logging;

use std::process::ExitCode;

use tracing::{error, warn};
use uniprobe_format::Console;
use uniprobe_probe::{Driver, ProbeConfig, ReportSink};

fn main() -> ExitCode {
    let parsed = ProbeConfig::from_env_with_diagnostics();
    logging::init(&parsed.config.log_filter);
    for err in &parsed.errors {
        warn!(field = err.field, value = %err.value, "ignoring config value: {}", err.message);
    }
    let config = parsed.config;
    let strict = config.strict;

    let mut driver = Driver::new(Console::stdout(config.engine), config.clone());
    match ReportSink::from_path(config.report_path.as_deref()) {
        Ok(Some(sink)) => driver = driver.with_report_sink(sink),
        Ok(None) => {}
        Err(err) => {
            // The console run still goes ahead without a report.
            warn!(path = ?config.report_path, %err, "cannot open report file");
        }
    }

    match driver.run() {
        Ok(summary) if fails_run(strict, summary.all_passed()) => {
            warn!(failures = summary.failures().count(), "strict mode: checks failed");
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "writing probe output failed");
            ExitCode::FAILURE
        }
    }
}

/// Failed checks only fail the process in strict mode.
fn fails_run(strict: bool, all_passed: bool) -> bool {
    strict && !all_passed
}
