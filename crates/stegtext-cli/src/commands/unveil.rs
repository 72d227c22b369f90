use std::fs;
use std::path::PathBuf;

use clap::Args;
use stegtext_core::{CodecOptions, StegError};

use crate::CliResult;

/// Unveils a text message from a PNG or JPEG image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains the secret message
    #[arg(short = 'i', long = "in", value_name = "image source file", required = true)]
    pub image: PathBuf,

    /// The message will be stored in that file instead of printed
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let message = stegtext_core::api::unveil::prepare()
            .with_options(options)
            .from_secret_file(self.image)
            .execute()?;

        match self.output_file {
            Some(file) => {
                fs::write(file, message).map_err(|source| StegError::WriteError { source })
            }
            None => {
                println!("{message}");
                Ok(())
            }
        }
    }
}
