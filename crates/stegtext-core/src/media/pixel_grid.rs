use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use image::{ColorType, DynamicImage, Rgba, RgbaImage};
use log::{debug, error};

use crate::error::StegError;
use crate::media::{ImageFormat, ImageHandle, Persist};
use crate::result::Result;

/// width x height matrix of RGBA pixels, decoded from a carrier image
///
/// Only 8 bit RGB and RGBA carriers are accepted, so that re-encoding keeps every channel
/// and the channel depth as they are. Pixels are always visited in row-major order, top to bottom and left to right.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    image: RgbaImage,
    format: ImageFormat,
    has_alpha: bool,
}

impl PixelGrid {
    /// decodes the image behind `handle`
    pub fn open(handle: &ImageHandle) -> Result<Self> {
        let data = handle.read_bytes()?;
        Self::decode(&data, handle.format())
    }

    pub fn decode(data: &[u8], format: ImageFormat) -> Result<Self> {
        let img = image::load_from_memory_with_format(data, format.into()).map_err(|e| {
            error!("Error decoding {format} image: {e}");
            StegError::InvalidImageMedia
        })?;
        let color = img.color();
        if !matches!(color, ColorType::Rgb8 | ColorType::Rgba8) {
            error!("Pixels of {format} image are {color:?}, only 8 bit RGB(A) can carry a message");
            return Err(StegError::UnsupportedColorType(color));
        }
        let has_alpha = color.has_alpha();
        debug!(
            "Decoded {format} image with {}x{} pixels, alpha channel: {has_alpha}",
            img.width(),
            img.height()
        );

        Ok(Self::from_image(img.to_rgba8(), format, has_alpha))
    }

    pub fn from_image(image: RgbaImage, format: ImageFormat, has_alpha: bool) -> Self {
        Self {
            image,
            format,
            has_alpha,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn pixel_count(&self) -> usize {
        let (w, h) = self.dimensions();
        w as usize * h as usize
    }

    pub fn pixel(&self, x: u32, y: u32) -> &Rgba<u8> {
        self.image.get_pixel(x, y)
    }

    pub fn pixels(&self) -> impl Iterator<Item = &Rgba<u8>> {
        self.image.pixels()
    }

    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut Rgba<u8>> {
        self.image.pixels_mut()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// encodes the grid in its native format, the alpha channel is only kept where the source had one
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        let img = DynamicImage::ImageRgba8(self.image.clone());
        let img = if self.has_alpha && self.format.is_lossless() {
            img
        } else {
            DynamicImage::ImageRgb8(img.to_rgb8())
        };

        img.write_to(&mut writer, image::ImageFormat::from(self.format))
            .map_err(|e| {
                error!("Error saving image: {e}");
                StegError::ImageEncodingError
            })?;

        writer.flush().map_err(|source| StegError::WriteError { source })
    }
}

impl Persist for PixelGrid {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            StegError::WriteError { source: e }
        })?;
        self.save_to_writer(BufWriter::new(f))
    }
}
