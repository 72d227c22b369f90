//! Transport encoding of the hidden text.
//!
//! Text is stored as standard, padded base64. Every encoded symbol is printable ASCII,
//! so no symbol is `0` and the high nibble of every symbol is non-zero. Both properties
//! are relied on by the nibble concealer for its sentinel.

use base64::{engine::general_purpose, Engine as _};
use log::debug;

use crate::result::Result;

/// encodes `text` into printable transport symbols
pub fn encode(text: &str) -> Vec<u8> {
    general_purpose::STANDARD.encode(text.as_bytes()).into_bytes()
}

/// inverts [`encode`], fails for anything that is not canonical base64 of UTF-8 text
pub fn decode(payload: &[u8]) -> Result<String> {
    debug!("Decoding a payload of {} symbols", payload.len());
    let data = general_purpose::STANDARD.decode(payload)?;

    Ok(String::from_utf8(data)?)
}

/// number of transport symbols needed for `text_len` bytes of text
pub fn encoded_len(text_len: usize) -> usize {
    text_len.div_ceil(3) * 4
}

/// number of text bytes that always fit into `symbols` transport symbols
pub fn text_capacity(symbols: usize) -> usize {
    symbols / 4 * 3
}
