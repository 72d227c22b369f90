use std::fmt::{self, Display, Formatter};
use std::path::Path;

use crate::error::StegError;
use crate::result::Result;

const JPEG_END_MARKER: &[u8] = &[0xFF, 0xD9];

/// zero length field, `IEND` chunk type and its CRC
const PNG_END_MARKER: &[u8] = &[
    0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// the container formats that can carry a hidden message
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// detects the format by the extension of `path`, case-insensitive
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        Self::from_extension(ext)
    }

    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            _ => Err(StegError::UnsupportedFormat(ext.to_string())),
        }
    }

    /// the trailing byte sequence of a well-formed file of this format
    pub fn end_marker(&self) -> &'static [u8] {
        match self {
            Self::Jpeg => JPEG_END_MARKER,
            Self::Png => PNG_END_MARKER,
        }
    }

    /// true if re-encoding keeps every pixel value as is
    pub fn is_lossless(&self) -> bool {
        matches!(self, Self::Png)
    }
}

impl From<ImageFormat> for image::ImageFormat {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
        }
    }
}

impl Display for ImageFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jpeg => write!(f, "jpeg"),
            Self::Png => write!(f, "png"),
        }
    }
}
