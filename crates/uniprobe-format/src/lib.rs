#![forbid(unsafe_code)]

//! Positional `{}` rendering and line-oriented console output.
//!
//! Provides one rendering interface ([`RenderEngine`]) with two
//! interchangeable engines, and a [`Console`] that renders a template and
//! writes it followed by a newline.
//!
//! # Role in uniprobe
//! The probe driver reports every section and check through a `Console`.
//! Nothing here knows about Unicode services; this crate is the only
//! piece of original formatting logic in the workspace.

pub mod capture;
pub mod console;
pub mod engine;

pub use capture::CaptureBuffer;
pub use console::Console;
#[cfg(feature = "regex")]
pub use engine::RegexEngine;
pub use engine::{EngineKind, NativeEngine, PLACEHOLDER, RenderEngine, placeholder_count};

/// Render a template through a console and write it as one line.
///
/// `console_println!(console)` writes a bare newline. Every other form
/// renders the template with the given arguments, each of which must
/// implement [`std::fmt::Display`].
///
/// ```
/// use uniprobe_format::{Console, EngineKind, console_println};
///
/// let mut console = Console::with_writer(Box::new(std::io::sink()), EngineKind::Native.build());
/// console_println!(console, "Length: {} Unicode units", 42).unwrap();
/// console_println!(console).unwrap();
/// ```
#[macro_export]
macro_rules! console_println {
    ($console:expr) => {
        $console.newline()
    };
    ($console:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $console.println($template, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}
