//! `eddy` entry point.
//!
//! Raw mode is held by a guard for the whole session, so the terminal is
//! restored on quit, on any fatal error, and while unwinding a panic.
//!
//! Set `EDDY_LOG=<path>` to append diagnostics to a file; nothing else may
//! write to the terminal while it is in raw mode.

use eddy::renderer::clear_screen;
use eddy::terminal::{RawModeGuard, TerminalInput, TerminalOutput, resolve_window_size};
use eddy::{Editor, EditorOptions, LogLevel, emit_log, set_event_callback, set_log_callback};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::os::unix::io::AsRawFd;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

/// Environment variable naming the log file.
const LOG_ENV: &str = "EDDY_LOG";

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> ExitCode {
    install_file_logger();

    match run(EditorOptions::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Screen cleared and terminal restored by now.
            emit_log(LogLevel::Error, &err.to_string());
            eprintln!("eddy: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Enter raw mode and run a session.
///
/// On failure the screen is cleared while still in raw mode, then the guard
/// restores the terminal before the error reaches `main`.
fn run(options: EditorOptions) -> eddy::Result<()> {
    let input = TerminalInput::stdin();
    let raw_mode = RawModeGuard::new(&input).inspect_err(|_| wipe_screen())?;
    emit_log(LogLevel::Info, "raw mode enabled");

    if let Err(err) = session(options, input) {
        wipe_screen();
        drop(raw_mode);
        return Err(err);
    }

    raw_mode.exit().inspect_err(|_| wipe_screen())?;
    emit_log(LogLevel::Info, "raw mode disabled");
    Ok(())
}

/// Size the screen and run the editor until quit.
fn session(options: EditorOptions, mut input: TerminalInput) -> eddy::Result<()> {
    let mut output = TerminalOutput::stdout();

    let size = resolve_window_size(output.as_raw_fd(), &mut input, &mut output)?;
    emit_log(
        LogLevel::Info,
        &format!("window size {}x{}", size.cols, size.rows),
    );

    Editor::new(size, options, input, output).run()
}

/// Best-effort clear on the way out of a fatal error.
fn wipe_screen() {
    let _ = clear_screen(&mut TerminalOutput::stdout());
}

// ============================================================================
// Logging
// ============================================================================

fn install_file_logger() {
    let Some(path) = std::env::var_os(LOG_ENV) else {
        return;
    };
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("eddy: cannot open log file {}: {err}", path.to_string_lossy());
            return;
        }
    };
    let file = Arc::new(Mutex::new(file));

    let log_file = Arc::clone(&file);
    set_log_callback(move |level, message| {
        write_line(&log_file, level.as_str(), message);
    });
    set_event_callback(move |name, data| {
        write_line(&file, "EVENT", &format!("{name} {data}"));
    });
}

fn write_line(file: &Mutex<File>, label: &str, message: &str) {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    if let Ok(mut file) = file.lock() {
        let _ = writeln!(
            file,
            "{}.{:03} {label:<5} {message}",
            now.as_secs(),
            now.subsec_millis()
        );
    }
}
