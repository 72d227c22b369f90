pub mod format;
pub mod handle;
pub mod pixel_grid;

use std::path::Path;

pub use format::ImageFormat;
pub use handle::ImageHandle;
pub use pixel_grid::PixelGrid;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}
