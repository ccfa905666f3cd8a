//! Hexadecimal helpers used for card identifiers, codes and debug output.

use std::fmt::Write;

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte.
///
/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    join_spaced(bytes.iter())
}

/// Like [`bytes_to_hex_spaced`] but starting from the last byte.
///
/// Example: `&[0xde, 0xad]` -> `"ad de"`
pub fn bytes_to_hex_spaced_reversed(bytes: &[u8]) -> String {
    join_spaced(bytes.iter().rev())
}

fn join_spaced<'a>(bytes: impl Iterator<Item = &'a u8>) -> String {
    let mut s = String::new();
    for (i, b) in bytes.enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}
