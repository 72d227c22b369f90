use std::path::Path;

use log::debug;

use super::Concealer;
use crate::error::StegError;
use crate::media::handle::write_chunks;
use crate::media::ImageHandle;
use crate::payload;
use crate::result::Result;

/// Hides the payload as plain bytes after the end marker of the image.
///
/// Viewers stop reading at their end marker, so the image stays untouched for them.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrailerConcealer;

impl Concealer for TrailerConcealer {
    fn conceal(&self, carrier: &ImageHandle, text: &str, target: &Path) -> Result<()> {
        let data = carrier.read_bytes()?;
        if !carrier.is_terminated(&data) {
            return Err(StegError::InvalidFormat(carrier.format()));
        }

        let encoded = payload::encode(text);
        debug!(
            "Appending {} payload bytes to {} image bytes",
            encoded.len(),
            data.len()
        );

        write_chunks(target, &[&data[..], &encoded[..]])
    }

    fn unveil(&self, carrier: &ImageHandle) -> Result<String> {
        let data = carrier.read_bytes()?;
        let offset = carrier
            .payload_offset(&data)
            .ok_or(StegError::CorruptedFile(carrier.format()))?;
        debug!("Found {} payload bytes after the end marker", data.len() - offset);

        payload::decode(&data[offset..])
    }
}
