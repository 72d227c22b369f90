use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::error::StegError;
use crate::media::ImageFormat;
use crate::result::Result;

/// One image file under manipulation, its format is derived from the file extension.
///
/// ## Example of usage
/// ```rust
/// use stegtext_core::media::{ImageFormat, ImageHandle};
///
/// let handle = ImageHandle::new("holiday.JPG").expect("jpg is supported");
/// assert_eq!(handle.format(), ImageFormat::Jpeg);
/// assert_eq!(handle.end_marker(), &[0xFF, 0xD9]);
///
/// assert!(ImageHandle::new("holiday.gif").is_err());
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ImageHandle {
    path: PathBuf,
    format: ImageFormat,
}

impl ImageHandle {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path)?;
        debug!("Using {path:?} as {format} carrier");

        Ok(Self {
            path: path.to_path_buf(),
            format,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn end_marker(&self) -> &'static [u8] {
        self.format.end_marker()
    }

    /// reads the whole file into memory
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(|e| {
            error!("Error reading file {:?}: {e}", self.path);
            StegError::ReadError { source: e }
        })
    }

    /// true if `data` ends with the end marker of this handle's format
    pub fn is_terminated(&self, data: &[u8]) -> bool {
        data.ends_with(self.end_marker())
    }

    /// position right after the first end marker in `data`
    pub fn payload_offset(&self, data: &[u8]) -> Option<usize> {
        let marker = self.end_marker();
        data.windows(marker.len())
            .position(|window| window == marker)
            .map(|pos| pos + marker.len())
    }
}

/// truncates or creates `target` and writes all the given chunks in order
pub(crate) fn write_chunks(target: &Path, chunks: &[&[u8]]) -> Result<()> {
    let data = chunks.concat();
    fs::write(target, data).map_err(|e| {
        error!("Error writing file {target:?}: {e}");
        StegError::WriteError { source: e }
    })
}
