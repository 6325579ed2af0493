//! In-memory writer for asserting on console output.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Cloneable sink; every clone appends to the same buffer.
#[derive(Debug, Clone, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    /// Create an empty capture buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded as UTF-8 (lossy).
    #[must_use]
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().expect("capture buffer lock poisoned");
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Captured output split into lines (without terminators).
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self.bytes.lock().expect("capture buffer lock poisoned");
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
