//! `eddy` - minimal raw-mode terminal screen controller
//!
//! Takes over the terminal's input discipline, draws a static full-screen
//! view in one write per frame, and turns raw keystrokes (arrow-key escape
//! sequences included) into cursor movement.
//!
//! The pieces, leaf first:
//! - [`terminal`]: raw mode guard, window size resolution, unbuffered fds
//! - [`input`]: byte stream to [`Key`] decoding
//! - [`renderer`]: per-frame [`AppendBuffer`] and row drawing
//! - [`editor`]: [`EditorState`] and the render/read/dispatch loop

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for termios FFI)
#![allow(clippy::cast_possible_truncation)] // Intentional read(2)/write(2) count casts
#![allow(clippy::cast_sign_loss)] // Intentional read(2)/write(2) count casts
#![allow(clippy::module_name_repetitions)] // Allow editor::EditorState etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::must_use_candidate)] // Accessors are self-explanatory
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer

pub mod ansi;
pub mod editor;
pub mod error;
pub mod event;
pub mod input;
pub mod renderer;
pub mod terminal;

// Re-export core types at crate root
pub use editor::{Command, Editor, EditorOptions, EditorState, Flow};
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};

// Re-export input types
pub use input::{Direction, Key, KeyReader, ctrl_key};

// Re-export commonly used types
pub use renderer::AppendBuffer;
pub use terminal::{
    RawModeGuard, TerminalInput, TerminalOutput, WindowSize, resolve_window_size,
};
