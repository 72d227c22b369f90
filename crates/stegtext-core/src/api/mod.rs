pub mod hide;
pub mod unveil;

use std::path::Path;

use crate::media::{ImageHandle, PixelGrid};
use crate::result::Result;

/// number of transport symbols the pixels of `image` can carry
///
/// Each pixel carries exactly one symbol, the optional terminator needs one more pixel.
pub fn capacity(image: impl AsRef<Path>) -> Result<usize> {
    let handle = ImageHandle::new(image)?;
    let grid = PixelGrid::open(&handle)?;

    Ok(grid.pixel_count())
}
