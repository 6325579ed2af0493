//! Stderr `tracing` subscriber setup.

use tracing_subscriber::EnvFilter;

use uniprobe_probe::config::DEFAULT_LOG_FILTER;

/// Build a filter from `directive`, falling back to the default level when
/// it does not parse. The second value carries the parse error, if any.
pub fn filter(directive: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(err.to_string())),
    }
}

/// Install the global subscriber. Logs go to stderr so stdout keeps only
/// probe lines.
pub fn init(directive: &str) {
    let (filter, invalid) = filter(directive);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if let Some(err) = invalid {
        tracing::warn!(directive, %err, "invalid log filter, using default");
    }
}
