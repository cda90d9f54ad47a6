//! Fuzz target for the key reader.
//!
//! Feeds arbitrary bytes one read at a time and checks that every key
//! consumes at least one byte and that only `ESC [ A..D` decodes to arrows.

#![no_main]

use eddy::{Key, KeyReader};
use libfuzzer_sys::fuzz_target;
use std::io::{self, Read};

/// Ends the stream with an error so `read_key` cannot spin on EOF.
struct Bytes<'a> {
    data: &'a [u8],
}

impl Read for Bytes<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.data.split_first() {
            Some((&b, rest)) if !buf.is_empty() => {
                buf[0] = b;
                self.data = rest;
                Ok(1)
            }
            _ => Err(io::Error::from(io::ErrorKind::UnexpectedEof)),
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let mut keys = KeyReader::new(Bytes { data });
    let mut iterations = 0;
    const MAX_ITERATIONS: usize = 10_000;

    while iterations < MAX_ITERATIONS {
        iterations += 1;
        let before = keys.get_ref().data.len();
        let Ok(key) = keys.read_key() else {
            break;
        };
        let consumed = before - keys.get_ref().data.len();
        assert!(consumed >= 1);

        if matches!(key, Key::Up | Key::Down | Key::Left | Key::Right) {
            assert_eq!(consumed, 3);
        }
    }
});
