//! Raw mode terminal handling.
//!
//! Provides the guard that enters and exits raw mode on Unix terminals using
//! termios. Raw mode disables line buffering, echo and signal characters so
//! every keystroke reaches the decoder byte by byte.
//!
//! # Safety
//! This module uses unsafe code for FFI calls to libc termios functions.
//! These are necessary for low-level terminal control and cannot be avoided.

#![allow(unsafe_code)]
#![allow(clippy::borrow_as_ptr)]

use crate::error::{Error, Result};
use std::io;
use std::os::unix::io::{AsRawFd, RawFd};

/// Minimum bytes before `read(2)` returns.
const READ_MIN_BYTES: libc::cc_t = 0;

/// `read(2)` timeout in tenths of a second.
const READ_TIMEOUT_DECISECONDS: libc::cc_t = 1;

/// Saved terminal state for restoration.
///
/// The snapshot is applied back exactly once: either through [`exit`] or,
/// if that was never called, when the guard is dropped (including during
/// unwinding and on `?` early returns).
///
/// [`exit`]: RawModeGuard::exit
#[derive(Debug)]
pub struct RawModeGuard {
    fd: RawFd,
    original: libc::termios,
    active: bool,
}

impl RawModeGuard {
    /// Enter raw mode on the given file descriptor.
    ///
    /// Returns a guard that will restore the terminal state when dropped.
    pub fn new<F: AsRawFd>(fd: &F) -> Result<Self> {
        let fd = fd.as_raw_fd();
        let original = get_termios(fd).map_err(Error::terminal("tcgetattr"))?;

        let mut raw = original;
        make_raw(&mut raw);
        set_termios(fd, &raw).map_err(Error::terminal("tcsetattr"))?;

        Ok(Self {
            fd,
            original,
            active: true,
        })
    }

    /// Settings captured before raw mode was entered.
    #[must_use]
    pub fn original(&self) -> &libc::termios {
        &self.original
    }

    /// Leave raw mode now, reporting whether the restore succeeded.
    pub fn exit(mut self) -> Result<()> {
        self.active = false;
        set_termios(self.fd, &self.original).map_err(Error::terminal("tcsetattr"))
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            let _ = set_termios(self.fd, &self.original);
        }
    }
}

/// Rewrite `termios` into raw mode in place.
pub fn make_raw(termios: &mut libc::termios) {
    // Input modes: no break, no CR to NL, no parity check, no strip char,
    // no start/stop output control.
    termios.c_iflag &= !(libc::BRKINT | libc::ICRNL | libc::INPCK | libc::ISTRIP | libc::IXON);

    // Output modes: disable post processing
    termios.c_oflag &= !libc::OPOST;

    // Control modes: set 8 bit chars
    termios.c_cflag |= libc::CS8;

    // Local modes: echo off, canonical off, no extended functions,
    // no signal chars (^C, ^Z, etc)
    termios.c_lflag &= !(libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG);

    // Return as soon as anything (or nothing) is available, 100ms at most.
    termios.c_cc[libc::VMIN] = READ_MIN_BYTES;
    termios.c_cc[libc::VTIME] = READ_TIMEOUT_DECISECONDS;
}

/// Get termios attributes.
pub(crate) fn get_termios(fd: RawFd) -> io::Result<libc::termios> {
    let mut termios: libc::termios = unsafe { std::mem::zeroed() };

    // SAFETY: tcgetattr is safe when passed a valid termios struct
    let result = unsafe { libc::tcgetattr(fd, &mut termios) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok(termios)
    }
}

/// Set termios attributes.
fn set_termios(fd: RawFd, termios: &libc::termios) -> io::Result<()> {
    // SAFETY: tcsetattr is safe when passed a valid termios struct
    let result = unsafe { libc::tcsetattr(fd, libc::TCSAFLUSH, termios) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok(())
    }
}
