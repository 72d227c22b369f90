/// Codec configuration, picks where the message is hidden
///
/// - `Trailer` → payload bytes are appended after the end marker of the file
/// - `Nibble` → payload symbols are stored in the low nibbles of red and green of each pixel
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CodecOptions {
    Trailer,
    Nibble(NibbleCodecOptions),
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self::Trailer
    }
}

impl CodecOptions {
    pub fn nibble() -> Self {
        Self::Nibble(NibbleCodecOptions::default())
    }
}

/// Options for hiding in pixel nibbles
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct NibbleCodecOptions {
    /// If true the pixel right after the payload gets both nibbles cleared,
    /// so that unveiling stops exactly at the end of the payload.
    ///
    /// If false nothing beyond the payload is touched and unveiling relies on the
    /// image itself to contain a pixel with both nibbles cleared.
    pub write_terminator: bool,
}

impl Default for NibbleCodecOptions {
    fn default() -> Self {
        Self {
            write_terminator: true,
        }
    }
}

impl NibbleCodecOptions {
    /// the layout written by the first generation of this tool, without terminator
    pub fn legacy() -> Self {
        Self {
            write_terminator: false,
        }
    }
}
