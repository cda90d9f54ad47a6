//! ANSI escape sequence generation.

pub mod sequences;

pub use sequences::*;

use std::io::{self, Write};

/// Write a signed decimal without going through `fmt`.
fn write_i32_decimal(w: &mut impl Write, n: i32) -> io::Result<()> {
    if n < 0 {
        w.write_all(b"-")?;
    }
    let mut val = n.unsigned_abs();

    // Fast paths for common small values (most cursor positions)
    if val < 10 {
        return w.write_all(&[b'0' + val as u8]);
    }
    if val < 100 {
        return w.write_all(&[b'0' + (val / 10) as u8, b'0' + (val % 10) as u8]);
    }

    let mut buf = [0u8; 10]; // max u32 is 4294967295 (10 digits)
    let mut i = buf.len();
    while val > 0 {
        i -= 1;
        buf[i] = b'0' + (val % 10) as u8;
        val /= 10;
    }
    w.write_all(&buf[i..])
}

/// Write an absolute cursor position (CUP) for a zero-based `row`/`col`.
///
/// Coordinates are emitted as-is after the one-based shift, so a cursor that
/// has wandered off the grid produces `ESC[0;-1H` and the terminal clamps it.
pub fn write_cursor_position(w: &mut impl Write, row: i32, col: i32) -> io::Result<()> {
    w.write_all(CSI)?;
    write_i32_decimal(w, row.saturating_add(1))?;
    w.write_all(b";")?;
    write_i32_decimal(w, col.saturating_add(1))?;
    w.write_all(b"H")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor_position(row: i32, col: i32) -> String {
        let mut buf = Vec::new();
        write_cursor_position(&mut buf, row, col).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_cursor_position_is_one_based() {
        assert_eq!(cursor_position(0, 0), "\x1b[1;1H");
        assert_eq!(cursor_position(9, 41), "\x1b[10;42H");
        assert_eq!(cursor_position(1234, 99999), "\x1b[1235;100000H");
    }

    #[test]
    fn test_cursor_position_negative_coordinates() {
        assert_eq!(cursor_position(1, -2), "\x1b[2;-1H");
        assert_eq!(cursor_position(-1, -1), "\x1b[0;0H");
        assert_eq!(cursor_position(-150, 0), "\x1b[-149;1H");
    }

    #[test]
    fn test_cursor_position_saturates() {
        let s = cursor_position(i32::MAX, i32::MIN);
        assert_eq!(s, format!("\x1b[{};{}H", i32::MAX, i32::MIN + 1));
    }

    #[test]
    fn test_sequence_bytes() {
        assert_eq!(CLEAR_SCREEN.as_bytes(), b"\x1b[2J");
        assert_eq!(CURSOR_HOME.len(), 3);
        assert_eq!(CURSOR_HIDE.len(), 6);
        assert_eq!(CURSOR_SHOW.len(), 6);
        assert_eq!(CLEAR_LINE_RIGHT.len(), 3);
        assert_eq!(CURSOR_BOTTOM_RIGHT.len(), 12);
        assert_eq!(query::CURSOR_POSITION.len(), 4);
    }
}
