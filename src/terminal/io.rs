//! Unbuffered terminal file descriptors.
//!
//! `std::io::Stdout` is line buffered and would split a frame at every
//! `\r\n`, and `Stdin` reads ahead. These wrappers go straight to `read(2)` /
//! `write(2)` so one flushed frame is one write and one key is one read.

#![allow(unsafe_code)]

use std::io::{self, Read, Write};
use std::os::unix::io::{AsRawFd, RawFd};

/// Reads bytes directly from a terminal descriptor.
#[derive(Debug, Clone, Copy)]
pub struct TerminalInput {
    fd: RawFd,
}

impl TerminalInput {
    /// Wrap an already-open descriptor. The descriptor is not closed on drop.
    #[must_use]
    pub fn from_fd(fd: RawFd) -> Self {
        Self { fd }
    }

    /// Standard input.
    #[must_use]
    pub fn stdin() -> Self {
        Self::from_fd(libc::STDIN_FILENO)
    }
}

impl Read for TerminalInput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // SAFETY: buf is valid for buf.len() bytes of writes
        let n = unsafe { libc::read(self.fd, buf.as_mut_ptr().cast(), buf.len()) };
        if n == -1 {
            Err(io::Error::last_os_error())
        } else {
            Ok(n as usize)
        }
    }
}

impl AsRawFd for TerminalInput {
    fn as_raw_fd(&self) -> RawFd {
        self.fd
    }
}

/// Writes bytes directly to a terminal descriptor.
#[derive(Debug, Clone, Copy)]
pub struct TerminalOutput {
    fd: RawFd,
}

impl TerminalOutput {
    /// Wrap an already-open descriptor. The descriptor is not closed on drop.
    #[must_use]
    pub fn from_fd(fd: RawFd) -> Self {
        Self { fd }
    }

    /// Standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::from_fd(libc::STDOUT_FILENO)
    }
}

impl Write for TerminalOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // SAFETY: buf is valid for buf.len() bytes of reads
        let n = unsafe { libc::write(self.fd, buf.as_ptr().cast(), buf.len()) };
        if n == -1 {
            Err(io::Error::last_os_error())
        } else {
            Ok(n as usize)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl AsRawFd for TerminalOutput {
    fn as_raw_fd(&self) -> RawFd {
        self.fd
    }
}
