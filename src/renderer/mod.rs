//! Full-frame screen rendering.
//!
//! Every frame is composed into a fresh [`AppendBuffer`] and flushed in one
//! write, so the terminal never shows a half-drawn screen:
//!
//! 1. hide the cursor and home it;
//! 2. draw each row (a marker, or the centred welcome line one third down),
//!    erasing to end of line after each;
//! 3. park the cursor at the editor position and show it again.
//!
//! # Examples
//!
//! ```
//! use eddy::editor::{EditorOptions, EditorState};
//! use eddy::renderer::render_frame;
//! use eddy::terminal::WindowSize;
//!
//! let state = EditorState::new(WindowSize::new(3, 20));
//! let frame = render_frame(&state, &EditorOptions::default());
//! assert!(frame.as_bytes().starts_with(b"\x1b[?25l\x1b[H"));
//! ```

mod buffer;

pub use buffer::AppendBuffer;

use crate::ansi::{self, sequences};
use crate::editor::{EditorOptions, EditorState};
use crate::event::emit_event;
use std::io::{self, Write};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Placement of the welcome message on its row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WelcomeLayout<'a> {
    /// Columns before the message, marker included.
    pub padding: usize,
    /// The message, clipped to the screen width.
    pub text: &'a str,
}

/// Longest prefix of `s` that fits in `max_width` columns.
///
/// Never splits a grapheme cluster.
#[must_use]
pub fn truncate_to_width(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (idx, grapheme) in s.grapheme_indices(true) {
        let w = grapheme.width();
        if width + w > max_width {
            return &s[..idx];
        }
        width += w;
    }
    s
}

/// Clip `message` to `cols` and centre it.
#[must_use]
pub fn welcome_layout(message: &str, cols: u16) -> WelcomeLayout<'_> {
    let cols = usize::from(cols);
    let text = truncate_to_width(message, cols);
    let padding = (cols - text.width()) / 2;
    WelcomeLayout { padding, text }
}

fn draw_welcome(ab: &mut AppendBuffer, options: &EditorOptions, cols: u16) {
    let layout = welcome_layout(&options.welcome_message, cols);
    if layout.padding > 0 {
        ab.append(&[options.empty_row_marker]);
        ab.append_repeated(b' ', layout.padding - 1);
    }
    ab.append_str(layout.text);
}

/// Draw every visible row.
///
/// Rows are joined by `\r\n` with none after the last, so the screen never
/// scrolls.
pub fn draw_rows(ab: &mut AppendBuffer, state: &EditorState, options: &EditorOptions) {
    let rows = state.screen_rows;
    for y in 0..rows {
        if y == rows / 3 {
            draw_welcome(ab, options, state.screen_cols);
        } else {
            ab.append(&[options.empty_row_marker]);
        }

        ab.append_str(sequences::CLEAR_LINE_RIGHT);
        if y + 1 < rows {
            ab.append(b"\r\n");
        }
    }
}

/// Compose one frame.
#[must_use]
pub fn render_frame(state: &EditorState, options: &EditorOptions) -> AppendBuffer {
    let mut ab = AppendBuffer::new();

    ab.append_str(sequences::CURSOR_HIDE);
    ab.append_str(sequences::CURSOR_HOME);

    draw_rows(&mut ab, state, options);

    // AppendBuffer's Write impl never fails.
    let _ = ansi::write_cursor_position(&mut ab, state.cursor_row, state.cursor_col);

    ab.append_str(sequences::CURSOR_SHOW);
    ab
}

/// Compose and flush one frame.
pub fn refresh_screen<W: Write>(
    writer: &mut W,
    state: &EditorState,
    options: &EditorOptions,
) -> io::Result<()> {
    let written = render_frame(state, options).flush_into(writer)?;
    emit_event("frame", &written.to_string());
    Ok(())
}

/// Clear the screen and home the cursor.
pub fn clear_screen<W: Write>(writer: &mut W) -> io::Result<()> {
    writer.write_all(sequences::CLEAR_SCREEN.as_bytes())?;
    writer.write_all(sequences::CURSOR_HOME.as_bytes())?;
    writer.flush()
}
