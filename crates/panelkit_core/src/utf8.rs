//! UTF-8 decoding and encoding for the text input paths.
//!
//! Decoding never fails: a malformed sequence yields [`INVALID`] and consumes
//! exactly one byte so the caller can resynchronize on the next byte.

/// Maximum number of bytes in one encoded code point.
pub const UTF_SIZE: usize = 4;

/// Replacement code point produced for malformed input.
pub const INVALID: char = char::REPLACEMENT_CHARACTER;

/// Decodes the first code point in `bytes`.
///
/// Returns the code point and the number of bytes consumed. Empty input
/// yields `(INVALID, 0)`.
#[must_use]
pub fn decode(bytes: &[u8]) -> (char, usize) {
    let Some(&lead) = bytes.first() else {
        return (INVALID, 0);
    };

    let (len, init, min) = match lead {
        0x00..=0x7F => return (char::from(lead), 1),
        0xC0..=0xDF => (2, u32::from(lead & 0x1F), 0x80),
        0xE0..=0xEF => (3, u32::from(lead & 0x0F), 0x800),
        0xF0..=0xF7 => (4, u32::from(lead & 0x07), 0x1_0000),
        _ => return (INVALID, 1),
    };
    if bytes.len() < len {
        return (INVALID, 1);
    }

    let mut code = init;
    for &byte in &bytes[1..len] {
        if byte & 0xC0 != 0x80 {
            return (INVALID, 1);
        }
        code = (code << 6) | u32::from(byte & 0x3F);
    }

    // overlong forms, surrogates and values past U+10FFFF
    if code < min {
        return (INVALID, 1);
    }
    match char::from_u32(code) {
        Some(c) => (c, len),
        None => (INVALID, 1),
    }
}

/// Encodes `c` into `out`, returning the number of bytes written.
///
/// Returns 0 when `out` is too small to hold the encoding.
pub fn encode(c: char, out: &mut [u8]) -> usize {
    let len = c.len_utf8();
    if out.len() < len {
        return 0;
    }
    c.encode_utf8(&mut out[..len]).len()
}

/// Iterates the code points in `bytes`, replacing malformed sequences.
pub fn chars(bytes: &[u8]) -> impl Iterator<Item = char> + '_ {
    let mut at = 0;
    std::iter::from_fn(move || {
        let (c, used) = decode(&bytes[at..]);
        if used == 0 {
            return None;
        }
        at += used;
        Some(c)
    })
}
