//! Blocking key reader over a raw-mode byte stream.
//!
//! Two states only: idle, and escape-seen. Nothing carries over between
//! calls to [`KeyReader::read_key`].

use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use crate::input::key::{ESCAPE, Key};
use std::io::{self, Read};

/// Decode the two bytes that followed an escape.
#[must_use]
pub fn decode_escape(seq: [u8; 2]) -> Key {
    match seq {
        [b'[', b'A'] => Key::Up,
        [b'[', b'B'] => Key::Down,
        [b'[', b'C'] => Key::Right,
        [b'[', b'D'] => Key::Left,
        _ => Key::Esc,
    }
}

/// Reads logical keys one at a time.
#[derive(Debug)]
pub struct KeyReader<R: Read> {
    input: R,
}

impl<R: Read> KeyReader<R> {
    /// Create a reader over `input`, normally a terminal in raw mode.
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Get a reference to the underlying input.
    pub fn get_ref(&self) -> &R {
        &self.input
    }

    /// Consume the reader, returning the underlying input.
    pub fn into_inner(self) -> R {
        self.input
    }

    /// Block until one key is available.
    ///
    /// Empty reads from the raw-mode timeout are retried. A missing second or
    /// third byte after an escape yields [`Key::Esc`] rather than an error.
    pub fn read_key(&mut self) -> Result<Key> {
        let byte = loop {
            if let Some(byte) = self.read_byte()? {
                break byte;
            }
        };

        if byte != ESCAPE {
            return Ok(Key::Char(byte));
        }

        let Some(first) = self.read_byte()? else {
            return Ok(Key::Esc);
        };
        let Some(second) = self.read_byte()? else {
            return Ok(Key::Esc);
        };

        let key = decode_escape([first, second]);
        if key == Key::Esc {
            emit_log(
                LogLevel::Debug,
                &format!("unrecognized escape sequence: ESC {}", [first, second].escape_ascii()),
            );
        }
        Ok(key)
    }

    /// One read attempt: `None` on timeout, error on anything but EAGAIN.
    fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.input.read(&mut buf) {
                Ok(1) => return Ok(Some(buf[0])),
                Ok(_) => return Ok(None),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => return Ok(None),
                Err(e) => return Err(Error::Terminal { op: "read", source: e }),
            }
        }
    }
}
