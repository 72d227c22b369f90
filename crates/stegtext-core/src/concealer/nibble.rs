use std::io::{self, Cursor, Read, Write};
use std::path::Path;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use image::Rgba;
use log::{debug, error, warn};

use super::Concealer;
use crate::error::StegError;
use crate::media::{ImageHandle, Persist, PixelGrid};
use crate::options::NibbleCodecOptions;
use crate::payload;
use crate::result::Result;

const RED: usize = 0;
const GREEN: usize = 1;
const LOW_NIBBLE: u8 = 0x0F;
const HIGH_NIBBLE: u8 = 0xF0;

/// stores the high nibble in red and the low nibble in green, all other channels stay
fn hide_nibbles(pixel: &mut Rgba<u8>, high: u8, low: u8) {
    pixel.0[RED] = (pixel.0[RED] & HIGH_NIBBLE) | (high & LOW_NIBBLE);
    pixel.0[GREEN] = (pixel.0[GREEN] & HIGH_NIBBLE) | (low & LOW_NIBBLE);
}

fn unveil_nibbles(pixel: &Rgba<u8>) -> (u8, u8) {
    (pixel.0[RED] & LOW_NIBBLE, pixel.0[GREEN] & LOW_NIBBLE)
}

/// Writes one byte per pixel into the low nibbles of red and green.
///
/// Pixels are consumed in the order the iterator yields them. Once the pixels are
/// exhausted `write` returns `Ok(0)`, so `write_all` fails with `WriteZero`.
pub struct NibbleEncoder<'a, I>
where
    I: Iterator<Item = &'a mut Rgba<u8>>,
{
    pixels: I,
}

impl<'a, I> NibbleEncoder<'a, I>
where
    I: Iterator<Item = &'a mut Rgba<u8>>,
{
    pub fn new(pixels: I) -> Self {
        Self { pixels }
    }

    /// clears both nibbles of the next pixel, returns false if there is no pixel left
    pub fn terminate(&mut self) -> bool {
        self.pixels
            .next()
            .map(|pixel| hide_nibbles(pixel, 0, 0))
            .is_some()
    }
}

impl<'a, I> Write for NibbleEncoder<'a, I>
where
    I: Iterator<Item = &'a mut Rgba<u8>>,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut nibbles = BitReader::endian(Cursor::new(buf), BigEndian);
        let mut written = 0;
        for pixel in self.pixels.by_ref().take(buf.len()) {
            let high: u8 = nibbles.read(4)?;
            let low: u8 = nibbles.read(4)?;
            hide_nibbles(pixel, high, low);
            written += 1;
        }

        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reads one byte per pixel back from the low nibbles of red and green.
///
/// Reading ends at the first pixel where both nibbles are cleared, or when the pixels are exhausted.
pub struct NibbleDecoder<'a, I>
where
    I: Iterator<Item = &'a Rgba<u8>>,
{
    pixels: I,
    done: bool,
    terminated: bool,
}

impl<'a, I> NibbleDecoder<'a, I>
where
    I: Iterator<Item = &'a Rgba<u8>>,
{
    pub fn new(pixels: I) -> Self {
        Self {
            pixels,
            done: false,
            terminated: false,
        }
    }

    /// true if reading stopped on a terminator pixel rather than on the end of the image
    pub fn found_terminator(&self) -> bool {
        self.terminated
    }
}

impl<'a, I> Read for NibbleDecoder<'a, I>
where
    I: Iterator<Item = &'a Rgba<u8>>,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let len = buf.len();
        let mut bytes = BitWriter::endian(buf, BigEndian);
        let mut read = 0;

        while read < len && !self.done {
            let Some(pixel) = self.pixels.next() else {
                self.done = true;
                break;
            };
            match unveil_nibbles(pixel) {
                (0, 0) => {
                    self.done = true;
                    self.terminated = true;
                }
                (high, low) => {
                    bytes.write(4, high)?;
                    bytes.write(4, low)?;
                    read += 1;
                }
            }
        }

        Ok(read)
    }
}

/// Hides the payload in the pixels of the image, one transport symbol per pixel.
///
/// Only lossless formats can carry the payload, the image is re-encoded in its own format.
#[derive(Debug, Default, Clone, Copy)]
pub struct NibbleConcealer {
    options: NibbleCodecOptions,
}

impl NibbleConcealer {
    pub fn new(options: NibbleCodecOptions) -> Self {
        Self { options }
    }

    /// hides `text` in `grid`, the grid stays untouched if it is too small
    pub fn conceal_in(&self, grid: &mut PixelGrid, text: &str) -> Result<()> {
        let encoded = payload::encode(text);
        let available = grid.pixel_count();
        if encoded.len() > available {
            return Err(StegError::InsufficientCapacity {
                needed: encoded.len(),
                available,
            });
        }

        let mut encoder = NibbleEncoder::new(grid.pixels_mut());
        encoder.write_all(&encoded).map_err(|e| {
            error!("Error hiding payload in pixels: {e}, kind {}", e.kind());
            match e.kind() {
                io::ErrorKind::WriteZero => StegError::InsufficientCapacity {
                    needed: encoded.len(),
                    available,
                },
                _ => StegError::ImageEncodingError,
            }
        })?;

        if !self.options.write_terminator {
            warn!("No terminator written, unveiling depends on the pixels after the payload");
        } else if !encoder.terminate() {
            warn!("Payload fills all {available} pixels, there is no room for a terminator");
        }
        debug!("Hid {} payload symbols in {available} pixels", encoded.len());

        Ok(())
    }

    /// reads back the text hidden in `grid`
    pub fn unveil_from(&self, grid: &PixelGrid) -> Result<String> {
        let mut decoder = NibbleDecoder::new(grid.pixels());
        let mut encoded = Vec::new();
        decoder
            .read_to_end(&mut encoded)
            .map_err(|source| StegError::ReadError { source })?;
        debug!(
            "Unveiled {} payload symbols, stopped on terminator: {}",
            encoded.len(),
            decoder.found_terminator()
        );

        payload::decode(&encoded)
    }
}

impl Concealer for NibbleConcealer {
    fn conceal(&self, carrier: &ImageHandle, text: &str, target: &Path) -> Result<()> {
        let format = carrier.format();
        if !format.is_lossless() {
            return Err(StegError::LossyCarrier(format));
        }

        let data = carrier.read_bytes()?;
        if !carrier.is_terminated(&data) {
            return Err(StegError::InvalidFormat(format));
        }

        let mut grid = PixelGrid::decode(&data, format)?;
        self.conceal_in(&mut grid, text)?;

        grid.save_as(target)
    }

    fn unveil(&self, carrier: &ImageHandle) -> Result<String> {
        let grid = PixelGrid::open(carrier)?;

        self.unveil_from(&grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ImageFormat;
    use crate::test_utils::{prepare_5x5_image, prepare_uniform_image};

    fn grid_of(img: image::RgbaImage) -> PixelGrid {
        PixelGrid::from_image(img, ImageFormat::Png, true)
    }

    #[test]
    fn should_split_a_symbol_into_red_and_green() {
        let mut pixel = Rgba([0xAB, 0xCD, 0xEF, 0x12]);
        NibbleEncoder::new(std::iter::once(&mut pixel))
            .write_all(b"a")
            .unwrap();

        // 'a' is 0x61
        assert_eq!(pixel, Rgba([0xA6, 0xC1, 0xEF, 0x12]));
    }

    #[test]
    fn should_hide_hi_in_the_first_4_pixels_row_by_row() {
        let original = grid_of(prepare_5x5_image());
        let mut grid = original.clone();

        NibbleConcealer::new(NibbleCodecOptions::legacy())
            .conceal_in(&mut grid, "hi")
            .unwrap();

        let touched: Vec<u8> = grid
            .pixels()
            .take(4)
            .map(|p| ((p.0[RED] & LOW_NIBBLE) << 4) | (p.0[GREEN] & LOW_NIBBLE))
            .collect();
        assert_eq!(touched, b"aGk=");
        for (given, expected) in grid.pixels().zip(original.pixels()) {
            assert_eq!(given.0[RED] & HIGH_NIBBLE, expected.0[RED] & HIGH_NIBBLE);
            assert_eq!(given.0[GREEN] & HIGH_NIBBLE, expected.0[GREEN] & HIGH_NIBBLE);
            assert_eq!(given.0[2..], expected.0[2..], "blue or alpha was altered");
        }
        assert!(
            grid.pixels().skip(4).eq(original.pixels().skip(4)),
            "pixels beyond the payload were altered"
        );
    }

    #[test]
    fn should_write_a_terminator_right_after_the_payload() {
        let original = grid_of(prepare_uniform_image(5, 5, [0x37, 0x5A, 0x99, 0xFF]));
        let mut grid = original.clone();

        NibbleConcealer::default().conceal_in(&mut grid, "hi").unwrap();

        assert_eq!(grid.pixel(4, 0), &Rgba([0x30, 0x50, 0x99, 0xFF]));
        assert!(grid.pixels().skip(5).eq(original.pixels().skip(5)));
        assert_eq!(NibbleConcealer::default().unveil_from(&grid).unwrap(), "hi");
    }

    #[test]
    fn should_fail_without_terminator_on_noisy_pixels() {
        let mut grid = grid_of(prepare_uniform_image(5, 5, [0x37, 0x5A, 0x99, 0xFF]));
        let concealer = NibbleConcealer::new(NibbleCodecOptions::legacy());

        concealer.conceal_in(&mut grid, "hi").unwrap();

        let err = concealer.unveil_from(&grid).unwrap_err();
        assert!(err.is_malformed_payload(), "unexpected {err:?}");
    }

    #[test]
    fn should_unveil_legacy_layout_from_clean_pixels() {
        let mut grid = grid_of(prepare_uniform_image(4, 4, [0x10, 0x20, 0x30, 0xFF]));
        let concealer = NibbleConcealer::new(NibbleCodecOptions::legacy());

        concealer.conceal_in(&mut grid, "lol kek").unwrap();

        assert_eq!(concealer.unveil_from(&grid).unwrap(), "lol kek");
    }

    #[test]
    fn should_round_trip_every_padding_length() {
        let ascii = "abcdefghij";
        let multibyte = "äöü€🥟ß";
        let texts = (0..=ascii.len())
            .map(|n| ascii[..n].to_string())
            .chain(multibyte.char_indices().map(|(i, _)| multibyte[..i].to_string()))
            .chain(std::iter::once(multibyte.to_string()));

        for text in texts {
            // clean pixels terminate the legacy layout, noisy ones only the terminator
            for (color, options) in [
                ([0x37, 0x5A, 0x99, 0xFF], NibbleCodecOptions::default()),
                ([0xA0, 0xB0, 0x99, 0xFF], NibbleCodecOptions::legacy()),
            ] {
                let mut grid = grid_of(prepare_uniform_image(6, 6, color));
                let concealer = NibbleConcealer::new(options);

                concealer.conceal_in(&mut grid, &text).unwrap();

                assert_eq!(
                    concealer.unveil_from(&grid).unwrap(),
                    text,
                    "round trip failed with {options:?}"
                );
            }
        }
    }

    #[test]
    fn should_refuse_a_payload_larger_than_the_image() {
        let original = grid_of(prepare_uniform_image(2, 2, [0x37, 0x5A, 0x99, 0xFF]));
        let mut grid = original.clone();

        // 4 text bytes need 8 symbols, there are only 4 pixels
        let err = NibbleConcealer::default()
            .conceal_in(&mut grid, "four")
            .unwrap_err();

        match err {
            StegError::InsufficientCapacity { needed, available } => {
                assert_eq!((needed, available), (8, 4));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(grid.as_image(), original.as_image());
    }

    #[test]
    fn should_unveil_a_payload_that_fills_the_whole_image() {
        let mut grid = grid_of(prepare_uniform_image(2, 2, [0x37, 0x5A, 0x99, 0xFF]));
        let concealer = NibbleConcealer::default();

        concealer.conceal_in(&mut grid, "hi").unwrap();

        assert_eq!(concealer.unveil_from(&grid).unwrap(), "hi");
    }

    #[test]
    fn should_report_write_zero_when_pixels_run_out() {
        let mut pixels = [Rgba([0u8; 4]); 2];
        let err = NibbleEncoder::new(pixels.iter_mut())
            .write_all(b"abc")
            .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::WriteZero);
        assert_eq!(pixels[1], Rgba([0x06, 0x02, 0, 0]));
    }

    #[test]
    fn should_stop_reading_at_the_terminator() {
        let pixels = [
            Rgba([0x06, 0x01, 0, 0]),
            Rgba([0xF6, 0xF2, 0, 0]),
            Rgba([0xF0, 0x00, 0, 0]),
            Rgba([0x06, 0x03, 0, 0]),
        ];
        let mut decoder = NibbleDecoder::new(pixels.iter());
        let mut buf = Vec::new();
        decoder.read_to_end(&mut buf).unwrap();

        assert_eq!(buf, b"ab");
        assert!(decoder.found_terminator());
    }
}
