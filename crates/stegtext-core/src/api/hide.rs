use std::path::{Path, PathBuf};

use log::info;

use crate::concealer::{Concealer, Technique};
use crate::media::ImageHandle;
use crate::{CodecOptions, StegError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    /// The carrier image, it gets overwritten unless an output is given
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// If `None` is passed, the carrier image is overwritten
    pub fn use_output<A: AsRef<Path>>(mut self, output: Option<A>) -> Self {
        self.output = output.map(|o| o.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<(), StegError> {
        let Some(image) = self.image else {
            return Err(StegError::CarrierNotSet);
        };
        let Some(message) = self.message else {
            return Err(StegError::MissingMessage);
        };

        let carrier = ImageHandle::new(&image)?;
        let target = match self.output {
            Some(output) => {
                let format = ImageHandle::new(&output)?.format();
                if format != carrier.format() {
                    return Err(StegError::FormatMismatch {
                        carrier: carrier.format(),
                        output: format,
                    });
                }
                output
            }
            None => image,
        };

        Technique::from(self.options).conceal(&carrier, &message, &target)?;
        info!("Message hidden in {target:?}");

        Ok(())
    }
}
