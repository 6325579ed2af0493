//! Probe failures.
//!
//! Library failures carry the library's own error text so report lines
//! can name the underlying cause, the way a status-code name would.

use std::fmt;
use std::io;

/// Errors raised while probing a library facility.
#[derive(Debug)]
pub enum ProbeError {
    /// A library constructor or operation signalled failure.
    Library {
        facility: &'static str,
        message: String,
    },
    /// A locale or transform identifier failed to parse.
    InvalidLocale { tag: String, message: String },
    /// The library answered, but not with the expected value.
    Mismatch {
        facility: &'static str,
        expected: String,
        actual: String,
    },
    /// No converter is registered under this label.
    UnknownEncoding(String),
    /// Writing console or report output failed.
    Io(io::Error),
}

impl ProbeError {
    /// Wrap a library error for `facility`.
    pub fn library(facility: &'static str, err: impl fmt::Display) -> Self {
        Self::Library {
            facility,
            message: err.to_string(),
        }
    }

    /// Wrap a locale parse failure for `tag`.
    pub fn locale(tag: impl Into<String>, err: impl fmt::Display) -> Self {
        Self::InvalidLocale {
            tag: tag.into(),
            message: err.to_string(),
        }
    }

    /// Short machine-readable kind, used in reports.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Library { .. } => "library",
            Self::InvalidLocale { .. } => "invalid_locale",
            Self::Mismatch { .. } => "mismatch",
            Self::UnknownEncoding(_) => "unknown_encoding",
            Self::Io(_) => "io",
        }
    }
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Library { facility, message } => write!(f, "{facility}: {message}"),
            Self::InvalidLocale { tag, message } => {
                write!(f, "invalid locale '{tag}': {message}")
            }
            Self::Mismatch {
                facility,
                expected,
                actual,
            } => write!(f, "{facility}: expected {expected}, got {actual}"),
            Self::UnknownEncoding(label) => write!(f, "no converter for encoding '{label}'"),
            Self::Io(err) => write!(f, "output error: {err}"),
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ProbeError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
