//! Line-oriented console that renders templates before writing them.
//!
//! A `Console` owns a buffered writer (stdout by default) and a
//! [`RenderEngine`]. Every `println` renders the template, writes the
//! result followed by `\n`, and flushes when flush-on-write is enabled so
//! that console lines interleave correctly with stderr logging.

use std::fmt::{self, Display};
use std::io::{self, BufWriter, Write};

use crate::engine::{EngineKind, RenderEngine};

/// Buffered, line-oriented output with positional template rendering.
pub struct Console {
    writer: BufWriter<Box<dyn Write + Send>>,
    engine: Box<dyn RenderEngine>,
    flush_on_write: bool,
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("engine", &self.engine.name())
            .field("flush_on_write", &self.flush_on_write)
            .finish_non_exhaustive()
    }
}

impl Console {
    /// Console writing to stdout with the given engine.
    #[must_use]
    pub fn stdout(kind: EngineKind) -> Self {
        Self::with_writer(Box::new(io::stdout()), kind.build())
    }

    /// Console writing to an arbitrary destination.
    #[must_use]
    pub fn with_writer(writer: Box<dyn Write + Send>, engine: Box<dyn RenderEngine>) -> Self {
        Self {
            writer: BufWriter::new(writer),
            engine,
            flush_on_write: true,
        }
    }

    /// Set flush-on-write behavior (enabled by default).
    #[must_use]
    pub fn with_flush_on_write(mut self, enabled: bool) -> Self {
        self.flush_on_write = enabled;
        self
    }

    /// The engine this console renders with.
    #[must_use]
    pub fn engine(&self) -> &dyn RenderEngine {
        self.engine.as_ref()
    }

    /// Render `template` with `values` and write it as one line.
    ///
    /// With no values the template is written unchanged.
    pub fn println(&mut self, template: &str, values: &[&dyn Display]) -> io::Result<()> {
        let rendered = self.engine.render(template, values);
        self.line(&rendered)
    }

    /// Write `text` unchanged followed by a newline.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.newline()
    }

    /// Write a bare newline.
    pub fn newline(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\n")?;
        if self.flush_on_write {
            self.writer.flush()?;
        }
        Ok(())
    }

    /// Flush any buffered output.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl Drop for Console {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}
