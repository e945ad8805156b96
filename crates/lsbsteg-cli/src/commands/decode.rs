use std::path::Path;

use lsbsteg_core::CodecOptions;

use crate::CliResult;

pub fn run(stego_image: &Path, output_file: &Path, options: CodecOptions) -> CliResult<()> {
    lsbsteg_core::commands::unveil(stego_image, output_file, options)
}
