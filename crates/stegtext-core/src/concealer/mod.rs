pub mod nibble;
pub mod trailer;

use std::path::Path;

use enum_dispatch::enum_dispatch;

use crate::media::ImageHandle;
use crate::result::Result;
use crate::CodecOptions;

pub use nibble::{NibbleConcealer, NibbleDecoder, NibbleEncoder};
pub use trailer::TrailerConcealer;

/// a strategy of hiding text inside an image file
#[enum_dispatch]
pub trait Concealer {
    /// hides `text` in the image behind `carrier` and writes the result to `target`
    fn conceal(&self, carrier: &ImageHandle, text: &str, target: &Path) -> Result<()>;

    /// reads back the text hidden in the image behind `carrier`
    fn unveil(&self, carrier: &ImageHandle) -> Result<String>;
}

#[enum_dispatch(Concealer)]
#[derive(Debug)]
pub enum Technique {
    Trailer(TrailerConcealer),
    Nibble(NibbleConcealer),
}

impl From<CodecOptions> for Technique {
    fn from(options: CodecOptions) -> Self {
        match options {
            CodecOptions::Trailer => TrailerConcealer.into(),
            CodecOptions::Nibble(opts) => NibbleConcealer::new(opts).into(),
        }
    }
}
