//! Routes eddy's log callback into `tracing` and keeps a copy for assertions.

#![allow(dead_code)] // Shared test helper; not every integration test inspects logs

use eddy::{LogLevel, set_log_callback};
use std::sync::{Mutex, Once, OnceLock};

fn captured_logs() -> &'static Mutex<Vec<(LogLevel, String)>> {
    static LOGS: OnceLock<Mutex<Vec<(LogLevel, String)>>> = OnceLock::new();
    LOGS.get_or_init(|| Mutex::new(Vec::new()))
}

/// Install the tracing subscriber and log callback once per test binary.
pub fn init() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();

        set_log_callback(|level, message| {
            match level {
                LogLevel::Debug => tracing::debug!(target: "eddy", "{message}"),
                LogLevel::Info => tracing::info!(target: "eddy", "{message}"),
                LogLevel::Warn => tracing::warn!(target: "eddy", "{message}"),
                LogLevel::Error => tracing::error!(target: "eddy", "{message}"),
            }
            if let Ok(mut logs) = captured_logs().lock() {
                logs.push((level, message.to_string()));
            }
        });
    });
}

/// Whether any captured message at `level` contains `needle`.
pub fn logged(level: LogLevel, needle: &str) -> bool {
    captured_logs()
        .lock()
        .map(|logs| {
            logs.iter()
                .any(|(l, message)| *l == level && message.contains(needle))
        })
        .unwrap_or(false)
}
