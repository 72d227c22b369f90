use std::path::PathBuf;

use clap::Args;
use stegtext_core::CodecOptions;

use crate::CliResult;

/// Hides a text message in a PNG or JPEG image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image, a PNG or JPEG file. It gets overwritten unless `--out` is given.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub image: PathBuf,

    /// Final image will be stored as file, with the same format as the carrier
    #[arg(short = 'o', long = "out", value_name = "output image file")]
    pub write_to_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        stegtext_core::api::hide::prepare()
            .with_options(options)
            .with_image(self.image)
            .use_output(self.write_to_file)
            .with_message(&self.message)
            .execute()
    }
}
