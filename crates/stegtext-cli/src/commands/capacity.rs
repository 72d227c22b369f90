use std::path::PathBuf;

use clap::Args;
use log::debug;
use stegtext_core::payload;

use crate::CliResult;

/// Shows how much text fits into the pixels of an image
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Image to inspect
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub image: PathBuf,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        let pixels = stegtext_core::api::capacity(&self.image)?;
        debug!("{:?} has {pixels} pixels", self.image);

        println!(
            "{pixels} pixels, room for {} bytes of text",
            payload::text_capacity(pixels)
        );
        Ok(())
    }
}
