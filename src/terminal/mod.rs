//! Terminal device control: raw mode, window size and unbuffered I/O.

mod io;
mod raw;
mod size;

pub use io::{TerminalInput, TerminalOutput};
pub use raw::{RawModeGuard, make_raw};
pub use size::{
    CURSOR_REPORT_MAX_LEN, WindowSize, parse_cursor_report, probe_window_size,
    query_window_size, read_cursor_position, resolve_window_size,
};
