//! Demonstration sections.
//!
//! Each module exposes the library calls it makes as small functions
//! (so tests can assert on them directly) plus a `run` that prints the
//! section through the driver's console.

pub mod locale;
pub mod segment;
pub mod strings;
pub mod translit;
