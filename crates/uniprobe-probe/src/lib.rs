#![forbid(unsafe_code)]

//! Verification driver for the ICU4X Unicode and locale services.
//!
//! # Role in uniprobe
//! Runs a fixed sequence of demonstration sections (case mapping, locale
//! display names and currency, segmentation, transliteration) followed by
//! a data verification pass. Each probe calls the library, inspects its
//! own success signal, and reports one line through a
//! [`uniprobe_format::Console`].
//!
//! All Unicode behavior lives in ICU4X; this crate only wires calls to
//! output and accumulates a [`RunSummary`].

pub mod bundle;
pub mod config;
pub mod demos;
pub mod driver;
pub mod error;
pub mod report;

pub use config::{ConfigError, ConfigParse, ProbeConfig, Section};
pub use driver::Driver;
pub use error::ProbeError;
pub use report::{CheckOutcome, ReportSink, RunSummary};
