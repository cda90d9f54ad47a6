//! Terminal window size discovery.
//!
//! Two tiers:
//! - `TIOCGWINSZ` on the output descriptor.
//! - When that fails or reports zero columns, push the cursor to the
//!   bottom-right corner and ask the terminal where it ended up (`DSR 6`).

#![allow(unsafe_code)]

use crate::ansi::sequences::{self, CSI};
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use std::io::{self, Read, Write};
use std::os::unix::io::RawFd;

/// Scratch space for a cursor position reply, terminator included.
pub const CURSOR_REPORT_MAX_LEN: usize = 31;

/// Terminal dimensions in character cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    pub rows: u16,
    pub cols: u16,
}

impl WindowSize {
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }
}

/// Ask the terminal driver for the window size of `fd`.
///
/// Returns `None` when the ioctl fails or the column count is zero, which is
/// what some serial consoles and emulators report.
#[must_use]
pub fn query_window_size(fd: RawFd) -> Option<WindowSize> {
    let mut size: libc::winsize = unsafe { std::mem::zeroed() };

    // SAFETY: ioctl with TIOCGWINSZ is safe when passed a valid winsize struct
    let result = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut size) };

    if result == -1 || size.ws_col == 0 {
        None
    } else {
        Some(WindowSize::new(size.ws_row, size.ws_col))
    }
}

/// Parse `ESC [ <rows> ; <cols>` (the `R` terminator already stripped).
#[must_use]
pub fn parse_cursor_report(reply: &[u8]) -> Option<WindowSize> {
    let body = reply.strip_prefix(CSI)?;
    let body = std::str::from_utf8(body).ok()?;
    let (rows, cols) = body.split_once(';')?;
    let rows: u16 = rows.parse().ok()?;
    let cols: u16 = cols.parse().ok()?;
    if rows == 0 || cols == 0 {
        return None;
    }
    Some(WindowSize::new(rows, cols))
}

/// Request the cursor position and read the reply.
///
/// Bytes are read one at a time until `R`. A read that returns nothing ends
/// the reply early (the terminal did not answer within the read timeout).
pub fn read_cursor_position<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<WindowSize> {
    output.write_all(sequences::query::CURSOR_POSITION.as_bytes())?;
    output.flush()?;

    let mut reply = Vec::with_capacity(CURSOR_REPORT_MAX_LEN);
    let mut terminated = false;
    let mut byte = [0u8; 1];
    while reply.len() < CURSOR_REPORT_MAX_LEN {
        match input.read(&mut byte) {
            Ok(1) => {
                if byte[0] == b'R' {
                    terminated = true;
                    break;
                }
                reply.push(byte[0]);
            }
            Ok(_) => break,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => break,
            Err(e) => return Err(Error::Terminal { op: "read", source: e }),
        }
    }

    if !terminated && reply.len() >= CURSOR_REPORT_MAX_LEN {
        return Err(Error::CursorReport(reply));
    }

    parse_cursor_report(&reply).ok_or(Error::CursorReport(reply))
}

/// Fallback probe: move to the far corner and read back the cursor position.
pub fn probe_window_size<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<WindowSize> {
    output.write_all(sequences::CURSOR_BOTTOM_RIGHT.as_bytes())?;
    read_cursor_position(input, output)
}

/// Resolve the window size, trying the ioctl on `fd` before probing.
pub fn resolve_window_size<R: Read, W: Write>(
    fd: RawFd,
    input: &mut R,
    output: &mut W,
) -> Result<WindowSize> {
    if let Some(size) = query_window_size(fd) {
        return Ok(size);
    }
    emit_log(LogLevel::Debug, "TIOCGWINSZ unavailable, probing cursor position");
    probe_window_size(input, output).inspect_err(|err| {
        emit_log(LogLevel::Error, &format!("window size probe failed: {err}"));
    })
}
