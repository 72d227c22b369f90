use std::path::{Path, PathBuf};

use crate::concealer::{Concealer, Technique};
use crate::media::ImageHandle;
use crate::{CodecOptions, StegError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_image: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options, they need to match the ones used for hiding
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and returns the hidden message
    pub fn execute(self) -> Result<String, StegError> {
        let Some(secret_image) = self.secret_image else {
            return Err(StegError::CarrierNotSet);
        };

        let carrier = ImageHandle::new(secret_image)?;

        Technique::from(self.options).unveil(&carrier)
    }
}
