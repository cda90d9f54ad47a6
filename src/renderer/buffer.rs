//! Per-frame append buffer.

use crate::event::{LogLevel, emit_log};
use std::io::{self, Write};

/// Typical frame size for an 80x24 screen, with room to spare.
const INITIAL_CAPACITY: usize = 4096;

/// Collects one frame of output so it reaches the terminal in a single write.
///
/// A buffer lives for exactly one frame: [`flush_into`] consumes it.
///
/// [`flush_into`]: AppendBuffer::flush_into
#[derive(Debug, Default)]
pub struct AppendBuffer {
    bytes: Vec<u8>,
}

impl AppendBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Create an empty buffer with room for `capacity` bytes.
    ///
    /// Falls back to an unallocated buffer if the reservation fails.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut bytes = Vec::new();
        let _ = bytes.try_reserve(capacity);
        Self { bytes }
    }

    /// Append raw bytes.
    ///
    /// If the buffer cannot grow the fragment is dropped and the frame is
    /// rendered without it.
    pub fn append(&mut self, data: &[u8]) {
        if self.bytes.try_reserve(data.len()).is_err() {
            emit_log(
                LogLevel::Warn,
                &format!("render buffer: dropped {} byte append", data.len()),
            );
            return;
        }
        self.bytes.extend_from_slice(data);
    }

    /// Append a string.
    pub fn append_str(&mut self, s: &str) {
        self.append(s.as_bytes());
    }

    /// Append `count` copies of `byte`.
    pub fn append_repeated(&mut self, byte: u8, count: usize) {
        if self.bytes.try_reserve(count).is_err() {
            emit_log(
                LogLevel::Warn,
                &format!("render buffer: dropped {count} byte append"),
            );
            return;
        }
        self.bytes.resize(self.bytes.len() + count, byte);
    }

    /// Accumulated bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write everything in one call and release the buffer.
    ///
    /// Returns the number of bytes written.
    pub fn flush_into<W: Write>(self, writer: &mut W) -> io::Result<usize> {
        writer.write_all(&self.bytes)?;
        writer.flush()?;
        Ok(self.bytes.len())
    }

    /// Take the accumulated bytes without writing them.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Lets `write!` and the `ansi` helpers target the buffer directly.
impl Write for AppendBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
