//! Editor state and the render/read/dispatch loop.

use crate::error::Result;
use crate::event::emit_event;
use crate::input::{Direction, Key, KeyReader};
use crate::renderer;
use crate::terminal::WindowSize;
use std::io::{Read, Write};

/// Editor configuration options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorOptions {
    /// Line centred one third of the way down an otherwise empty screen.
    pub welcome_message: String,
    /// Letter that quits when pressed with Ctrl.
    pub quit_key: u8,
    /// Byte drawn at the start of every empty row.
    pub empty_row_marker: u8,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            welcome_message: format!("EDDY Text Editor - v{}", env!("CARGO_PKG_VERSION")),
            quit_key: b'q',
            empty_row_marker: b'~',
        }
    }
}

/// Cursor position and screen dimensions.
///
/// The cursor is deliberately unclamped: it may go negative or past the
/// screen edge, and the terminal clamps the rendered position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorState {
    pub cursor_row: i32,
    pub cursor_col: i32,
    pub screen_rows: u16,
    pub screen_cols: u16,
}

impl EditorState {
    /// Cursor at the origin on a screen of `size`.
    #[must_use]
    pub fn new(size: WindowSize) -> Self {
        Self {
            cursor_row: 0,
            cursor_col: 0,
            screen_rows: size.rows,
            screen_cols: size.cols,
        }
    }

    /// Move the cursor one cell.
    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.cursor_row = self.cursor_row.saturating_sub(1),
            Direction::Down => self.cursor_row = self.cursor_row.saturating_add(1),
            Direction::Left => self.cursor_col = self.cursor_col.saturating_sub(1),
            Direction::Right => self.cursor_col = self.cursor_col.saturating_add(1),
        }
    }

    /// `(row, col)` of the cursor.
    #[must_use]
    pub fn cursor(&self) -> (i32, i32) {
        (self.cursor_row, self.cursor_col)
    }
}

/// What a key asks the editor to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Move(Direction),
    Ignore,
}

impl Command {
    /// Map a key to a command.
    #[must_use]
    pub fn from_key(key: Key, options: &EditorOptions) -> Self {
        if key.is_ctrl(options.quit_key) {
            return Self::Quit;
        }
        key.direction().map_or(Self::Ignore, Self::Move)
    }
}

/// Whether the main loop keeps going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the editor state and drives render → read → dispatch.
pub struct Editor<R: Read, W: Write> {
    state: EditorState,
    options: EditorOptions,
    keys: KeyReader<R>,
    output: W,
}

impl<R: Read, W: Write> Editor<R, W> {
    /// Create an editor for a screen of `size`, reading keys from `input`.
    pub fn new(size: WindowSize, options: EditorOptions, input: R, output: W) -> Self {
        Self {
            state: EditorState::new(size),
            options,
            keys: KeyReader::new(input),
            output,
        }
    }

    #[must_use]
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    #[must_use]
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Get a reference to the output writer.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consume the editor, returning the output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Draw one frame.
    pub fn refresh_screen(&mut self) -> Result<()> {
        renderer::refresh_screen(&mut self.output, &self.state, &self.options)?;
        Ok(())
    }

    /// Read one key and apply it. Quitting clears the screen first.
    pub fn process_keypress(&mut self) -> Result<Flow> {
        let key = self.keys.read_key()?;
        emit_event("key", &format!("{key:?}"));

        match Command::from_key(key, &self.options) {
            Command::Quit => {
                renderer::clear_screen(&mut self.output)?;
                Ok(Flow::Quit)
            }
            Command::Move(direction) => {
                self.state.move_cursor(direction);
                Ok(Flow::Continue)
            }
            Command::Ignore => Ok(Flow::Continue),
        }
    }

    /// Run until the quit key or a fatal error.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.refresh_screen()?;
            if self.process_keypress()? == Flow::Quit {
                return Ok(());
            }
        }
    }
}
