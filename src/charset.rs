// Copyright (c) 2026 rezky_nightky

use std::char;

fn push_range(out: &mut Vec<char>, start: u32, end: u32) {
    for v in start..=end {
        if let Some(ch) = char::from_u32(v) {
            out.push(ch);
        }
    }
}

/// Digits, ASCII letters and ASCII punctuation. No whitespace.
pub fn printable_pool() -> Vec<char> {
    let mut out: Vec<char> = Vec::with_capacity(94);
    push_range(&mut out, 0x30, 0x39);
    push_range(&mut out, 0x61, 0x7A);
    push_range(&mut out, 0x41, 0x5A);
    push_range(&mut out, 0x21, 0x2F);
    push_range(&mut out, 0x3A, 0x40);
    push_range(&mut out, 0x5B, 0x60);
    push_range(&mut out, 0x7B, 0x7E);
    out
}
