//! Logical key types.

/// The escape byte that starts every terminal control sequence.
pub const ESCAPE: u8 = 0x1b;

/// Apply the conventional `Ctrl+<letter>` mask to an ASCII letter.
///
/// `ctrl_key(b'q')` is `0x11`, the byte a terminal sends for `Ctrl-Q`.
#[must_use]
pub const fn ctrl_key(letter: u8) -> u8 {
    letter & 0x1f
}

/// Cursor movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A decoded keypress.
///
/// Arrow keys get their own variants so they never collide with typed
/// characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow (`ESC [ A`).
    Up,
    /// Down arrow (`ESC [ B`).
    Down,
    /// Right arrow (`ESC [ C`).
    Right,
    /// Left arrow (`ESC [ D`).
    Left,
    /// Any non-escape byte, including control characters.
    Char(u8),
    /// A lone escape, or an escape sequence that is not recognized.
    Esc,
}

impl Key {
    /// The key sent by `Ctrl+<letter>`.
    #[must_use]
    pub const fn ctrl(letter: u8) -> Self {
        Self::Char(ctrl_key(letter))
    }

    /// Check whether this is `Ctrl+<letter>`.
    #[must_use]
    pub fn is_ctrl(self, letter: u8) -> bool {
        self == Self::ctrl(letter)
    }

    /// Movement direction for arrow keys.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            Self::Char(_) | Self::Esc => None,
        }
    }
}
