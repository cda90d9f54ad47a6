//! Fuzz target for cursor position report parsing.

#![no_main]

use eddy::terminal::{CURSOR_REPORT_MAX_LEN, parse_cursor_report, probe_window_size};
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    if let Some(size) = parse_cursor_report(data) {
        assert!(size.rows > 0 && size.cols > 0);
        assert!(data.starts_with(b"\x1b["));
    }

    let mut input = Cursor::new(data);
    let mut output = Vec::new();
    if probe_window_size(&mut input, &mut output).is_ok() {
        assert!(input.position() as usize <= CURSOR_REPORT_MAX_LEN);
    }
});
