use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};
use lsbsteg_core::ColorChannel;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["encode", "decode", "capacity"])
))]
pub struct CliArgs {
    /// Hides the payload file in the cover image and writes the result as PNG
    #[arg(
        short = 'e',
        long = "encode",
        num_args = 3,
        value_names = ["COVER_IMAGE", "PAYLOAD_FILE", "OUTPUT_IMAGE"]
    )]
    pub encode: Option<Vec<PathBuf>>,

    /// Unveils the payload of the stego image and writes it verbatim to the output file
    #[arg(
        short = 'd',
        long = "decode",
        num_args = 2,
        value_names = ["STEGO_IMAGE", "OUTPUT_FILE"]
    )]
    pub decode: Option<Vec<PathBuf>>,

    /// Prints how many payload bytes the image can carry
    #[arg(short = 'c', long = "capacity", value_name = "IMAGE")]
    pub capacity: Option<PathBuf>,

    /// Color channel that carries the hidden bits, must be the same for encode and decode
    #[arg(long, value_enum, default_value_t = Channel::Red)]
    pub channel: Channel,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl From<Channel> for ColorChannel {
    fn from(channel: Channel) -> Self {
        match channel {
            Channel::Red => ColorChannel::Red,
            Channel::Green => ColorChannel::Green,
            Channel::Blue => ColorChannel::Blue,
            Channel::Alpha => ColorChannel::Alpha,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Encode {
        cover_image: PathBuf,
        payload_file: PathBuf,
        output_image: PathBuf,
    },
    Decode {
        stego_image: PathBuf,
        output_file: PathBuf,
    },
    Capacity {
        image: PathBuf,
    },
}

impl CliArgs {
    /// The one mode selected on the command line, `None` if the operands do not add up
    pub fn mode(&self) -> Option<Mode> {
        if let Some([cover_image, payload_file, output_image]) = self.encode.as_deref() {
            return Some(Mode::Encode {
                cover_image: cover_image.clone(),
                payload_file: payload_file.clone(),
                output_image: output_image.clone(),
            });
        }
        if let Some([stego_image, output_file]) = self.decode.as_deref() {
            return Some(Mode::Decode {
                stego_image: stego_image.clone(),
                output_file: output_file.clone(),
            });
        }

        self.capacity
            .clone()
            .map(|image| Mode::Capacity { image })
    }
}
