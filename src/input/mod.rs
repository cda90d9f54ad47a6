//! Keyboard input decoding.
//!
//! Turns the raw byte stream from a raw-mode terminal into [`Key`] values,
//! folding the `ESC [ A`..`ESC [ D` arrow sequences into their own variants.

mod key;
mod reader;

pub use key::{Direction, ESCAPE, Key, ctrl_key};
pub use reader::{KeyReader, decode_escape};
