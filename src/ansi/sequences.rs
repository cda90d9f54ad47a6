//! Constant ANSI escape sequences.

/// Clear entire screen.
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// Clear from cursor to end of line.
pub const CLEAR_LINE_RIGHT: &str = "\x1b[K";

/// Hide cursor.
pub const CURSOR_HIDE: &str = "\x1b[?25l";

/// Show cursor.
pub const CURSOR_SHOW: &str = "\x1b[?25h";

/// Move cursor to home position (1,1).
pub const CURSOR_HOME: &str = "\x1b[H";

/// Push the cursor as far right and down as the terminal allows.
///
/// `CUF`/`CUD` stop at the screen edge, unlike `CUP` whose behaviour with
/// out-of-range coordinates is terminal specific.
pub const CURSOR_BOTTOM_RIGHT: &str = "\x1b[999C\x1b[999B";

/// Terminal query sequences.
pub mod query {
    /// Device status report: cursor position (DSR 6).
    ///
    /// Answered with `ESC [ <row> ; <col> R`.
    pub const CURSOR_POSITION: &str = "\x1b[6n";
}

/// Control Sequence Introducer prefix.
pub const CSI: &[u8] = b"\x1b[";
