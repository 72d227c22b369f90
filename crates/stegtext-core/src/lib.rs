//! # Stegtext Core API
//!
//! Hides text messages inside PNG and JPEG images. Two techniques are available,
//! selected by [`CodecOptions`][opts]:
//! - [`TrailerConcealer`][trailer] appends the message after the end marker of the image file
//! - [`NibbleConcealer`][nibble] stores the message in the low nibbles of the red and green
//!   channel of each pixel, lossless formats only
//!
//! In both cases the message is transport encoded first, see [`payload`][payload].
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use tempfile::tempdir;
//! use stegtext_core::CodecOptions;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! image::RgbImage::from_pixel(16, 16, image::Rgb([200, 100, 50]))
//!     .save(&carrier)
//!     .expect("Failed to create carrier image");
//!
//! stegtext_core::api::hide::prepare()
//!     .with_message("Hello, World!")        // will hide this message inside the image
//!     .with_options(CodecOptions::nibble()) // in the pixels, not behind the end marker
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("image-with-a-message-inside.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//! ```
//!
//! ## Unveil a message from an image
//!
//! ```rust
//! use tempfile::tempdir;
//! use stegtext_core::CodecOptions;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! image::RgbImage::from_pixel(16, 16, image::Rgb([200, 100, 50]))
//!     .save(&carrier)
//!     .expect("Failed to create carrier image");
//! stegtext_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image(&carrier)
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = stegtext_core::api::unveil::prepare()
//!     .from_secret_file(&carrier)
//!     .with_options(CodecOptions::Trailer)
//!     .execute()
//!     .expect("Failed to unveil message from image");
//! assert_eq!(message, "Hello, World!");
//! ```
//!
//! [opts]: ./enum.CodecOptions.html
//! [trailer]: ./concealer/trailer/struct.TrailerConcealer.html
//! [nibble]: ./concealer/nibble/struct.NibbleConcealer.html
//! [payload]: ./payload/index.html

#![warn(clippy::redundant_else)]

pub mod api;
pub mod concealer;
pub mod error;
pub mod media;
pub mod options;
pub mod payload;
pub mod result;

pub use crate::concealer::{Concealer, NibbleConcealer, Technique, TrailerConcealer};
pub use crate::error::StegError;
pub use crate::media::{ImageFormat, ImageHandle, PixelGrid};
pub use crate::options::{CodecOptions, NibbleCodecOptions};
pub use crate::result::Result;

#[cfg(test)]
mod test_utils {
    use std::path::{Path, PathBuf};

    use image::{ImageBuffer, RgbaImage};

    /// This image has some traits:
    /// --------------x-------------
    /// | 0,0 -> (0, 1, 2, 3 )  | 1,0 -> (4, 5, 6, 7 )  | ...
    /// | 0,1 -> (20,21,22,23) | 1,1 -> (24,25,26,27) | ...
    /// y ...
    pub fn prepare_5x5_image() -> RgbaImage {
        ImageBuffer::from_fn(5, 5, |x, y| {
            let i = (4 * x + 20 * y) as u8;
            image::Rgba([i, i + 1, i + 2, i + 3])
        })
    }

    pub fn prepare_uniform_image(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
        ImageBuffer::from_pixel(width, height, image::Rgba(color))
    }

    /// writes a 16x16 opaque PNG into `dir`
    pub fn write_png_carrier(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        image::RgbImage::from_fn(16, 16, |x, y| image::Rgb([(x * 16) as u8, (y * 16) as u8, 128]))
            .save(&path)
            .expect("Cannot write carrier image");
        path
    }
}
