use std::path::Path;

use lsbsteg_core::CodecOptions;

use crate::CliResult;

/// Hides the payload file in the cover image, the output image is always PNG
pub fn run(
    cover_image: &Path,
    payload_file: &Path,
    output_image: &Path,
    options: CodecOptions,
) -> CliResult<()> {
    lsbsteg_core::commands::hide(cover_image, payload_file, output_image, options)
}
