//! ASCII hex transfer format
//!
//! Files, jobs, images and settings travel as upper-case hexadecimal text
//! split into lines of at most 80 characters.

use crate::{constants::HEX_LINE_WIDTH, error::Result};

/// Encode `data` as hex lines
///
/// # Examples
///
/// ```
/// use insightrs_core::hexline;
///
/// let lines = hexline::encode_lines(&[0x42, 0x4d]);
/// assert_eq!(lines, vec!["424D".to_string()]);
/// ```
pub fn encode_lines(data: &[u8]) -> Vec<String> {
    // Each byte is two characters, so a line holds HEX_LINE_WIDTH / 2 bytes
    data.chunks(HEX_LINE_WIDTH / 2)
        .map(::hex::encode_upper)
        .collect()
}

/// Decode one hex line, case-insensitive, surrounding whitespace ignored
pub fn decode_line(line: &str) -> Result<Vec<u8>> {
    Ok(::hex::decode(line.trim())?)
}
