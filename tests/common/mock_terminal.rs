//! Mock terminal for driving the editor without a real TTY.
//!
//! This module provides:
//! - `ScriptedInput`: a reader that replays one scripted result per `read`
//! - `MockTerminal`: a writer that feeds a `vt100` screen model and counts
//!   write calls
//!
//! # Example
//!
//! ```ignore
//! let mut term = MockTerminal::new(24, 80);
//! eddy::renderer::refresh_screen(&mut term, &state, &options)?;
//! assert_eq!(term.row(0), "~");
//! ```

#![allow(dead_code)] // Shared test helper; not every integration test uses every mock/utility

use std::collections::VecDeque;
use std::io::{self, Read, Write};

/// Replays scripted read results.
///
/// Once the script is exhausted every read returns `Ok(0)`, which the key
/// reader treats as a raw-mode timeout.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    script: VecDeque<io::Result<Vec<u8>>>,
    reads: usize,
}

impl ScriptedInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue each byte as its own read.
    #[must_use]
    pub fn bytes(bytes: &[u8]) -> Self {
        let mut input = Self::new();
        input.queue_bytes(bytes);
        input
    }

    pub fn queue_bytes(&mut self, bytes: &[u8]) {
        self.script.extend(bytes.iter().map(|&b| Ok(vec![b])));
    }

    /// Queue a read that returns nothing, as after the 100ms raw-mode timeout.
    pub fn queue_timeout(&mut self) {
        self.script.push_back(Ok(Vec::new()));
    }

    pub fn queue_error(&mut self, error: io::Error) {
        self.script.push_back(Err(error));
    }

    /// Number of `read` calls made so far.
    #[must_use]
    pub fn reads(&self) -> usize {
        self.reads
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Read for ScriptedInput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reads += 1;
        match self.script.pop_front() {
            Some(Ok(bytes)) => {
                let n = bytes.len().min(buf.len());
                buf[..n].copy_from_slice(&bytes[..n]);
                Ok(n)
            }
            Some(Err(e)) => Err(e),
            None => Ok(0),
        }
    }
}

/// A terminal screen model fed by everything written to it.
pub struct MockTerminal {
    parser: vt100::Parser,
    output: Vec<u8>,
    writes: usize,
    rows: u16,
    cols: u16,
}

impl MockTerminal {
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            parser: vt100::Parser::new(rows, cols, 0),
            output: Vec::with_capacity(4096),
            writes: 0,
            rows,
            cols,
        }
    }

    /// Everything written so far.
    #[must_use]
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Number of `write` calls received.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Text of one screen row, trailing blanks trimmed.
    #[must_use]
    pub fn row(&self, row: u16) -> String {
        self.parser
            .screen()
            .rows(0, self.cols)
            .nth(usize::from(row))
            .unwrap_or_default()
    }

    /// All screen rows.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        self.parser.screen().rows(0, self.cols).collect()
    }

    /// `(row, col)` of the hardware cursor, zero based.
    #[must_use]
    pub fn cursor(&self) -> (u16, u16) {
        self.parser.screen().cursor_position()
    }

    #[must_use]
    pub fn cursor_hidden(&self) -> bool {
        self.parser.screen().hide_cursor()
    }

    #[must_use]
    pub fn contents(&self) -> String {
        self.parser.screen().contents()
    }

    #[must_use]
    pub fn size(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }
}

impl Write for MockTerminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes += 1;
        self.output.extend_from_slice(buf);
        self.parser.process(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
