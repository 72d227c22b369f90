use std::string::FromUtf8Error;
use thiserror::Error;

use crate::media::ImageFormat;

#[derive(Error, Debug)]
pub enum StegError {
    /// Represents a carrier whose file extension is none of `png`, `jpg` or `jpeg`
    #[error("Image format is not supported: `{0}`. Supported extensions: png, jpg, jpeg")]
    UnsupportedFormat(String),

    /// Represents a carrier that does not end with the end marker of its format
    #[error("Invalid image format. The image doesn't end with the {0} marker")]
    InvalidFormat(ImageFormat),

    /// Represents a carrier where the end marker could not be found at all
    #[error("Corrupted file, the {0} end marker was not found")]
    CorruptedFile(ImageFormat),

    /// Represents hidden data that is no valid transport encoding
    #[error("Malformed payload found inside the image")]
    MalformedPayload(#[from] base64::DecodeError),

    /// Represents hidden data that decodes fine, but is no valid UTF-8 text
    #[error("Invalid text data found inside the image")]
    InvalidTextData(#[from] FromUtf8Error),

    #[error(
        "Capacity Error: the payload needs {needed} pixels, but the image has only {available}"
    )]
    InsufficientCapacity { needed: usize, available: usize },

    /// Represents a pixel hiding attempt on a format that does not keep pixels intact
    #[error("Hiding in pixels is not supported for lossy {0} images")]
    LossyCarrier(ImageFormat),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Represents an image that could not be decoded into pixels, for example a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a carrier whose pixels are not 8 bit RGB or RGBA, for example a 16 bit or grayscale PNG
    #[error("Hiding in pixels needs 8 bit RGB or RGBA, the image is {0:?}")]
    UnsupportedColorType(image::ColorType),

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents an output file whose extension does not match the carrier format
    #[error("Output format {output} does not match the carrier format {carrier}")]
    FormatMismatch {
        carrier: ImageFormat,
        output: ImageFormat,
    },

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}

impl StegError {
    /// true for every failure where the hidden bytes could not be turned back into text
    pub fn is_malformed_payload(&self) -> bool {
        matches!(
            self,
            StegError::MalformedPayload(_) | StegError::InvalidTextData(_)
        )
    }
}
