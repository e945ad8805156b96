use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::debug;
use lsbsteg_core::{CodecOptions, SteganoError};

mod cli;
mod commands;

use cli::{CliArgs, Mode};

pub type CliResult<T> = Result<T, SteganoError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = CodecOptions::default().with_channel(args.channel.into());
    let Some(mode) = args.mode() else {
        CliArgs::command()
            .error(ErrorKind::MissingRequiredArgument, "Arguments not understood.")
            .exit()
    };
    debug!("Running {mode:?} with {options:?}");

    match mode {
        Mode::Encode {
            cover_image,
            payload_file,
            output_image,
        } => commands::encode::run(&cover_image, &payload_file, &output_image, options),
        Mode::Decode {
            stego_image,
            output_file,
        } => commands::decode::run(&stego_image, &output_file, options),
        Mode::Capacity { image } => commands::capacity::run(&image),
    }
}
