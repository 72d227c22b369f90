use clap::{Parser, Subcommand};
use stegtext_core::{CodecOptions, NibbleCodecOptions};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Hide the message in the pixel colors instead of behind the end of the image file
    #[arg(long, global = true)]
    pub pixels: bool,

    /// Do not mark the end of a message hidden in pixels, like the first generation of this tool
    #[arg(long, global = true, requires = "pixels")]
    pub legacy_termination: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn codec_options(&self) -> CodecOptions {
        if !self.pixels {
            return CodecOptions::Trailer;
        }

        CodecOptions::Nibble(NibbleCodecOptions {
            write_terminator: !self.legacy_termination,
        })
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Capacity(capacity::CapacityArgs),
}
