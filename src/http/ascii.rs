//! Lossy ASCII conversion.
//!
//! Bytes map one-to-one onto characters. Anything outside 7-bit ASCII becomes
//! `?` in both directions, so the character count of decoded text always equals
//! the byte count of its encoding.

/// Substitute for bytes and characters outside the ASCII range.
pub const REPLACEMENT: u8 = b'?';

pub fn decode(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { REPLACEMENT as char })
        .collect()
}

pub fn encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if c.is_ascii() { c as u8 } else { REPLACEMENT })
        .collect()
}
