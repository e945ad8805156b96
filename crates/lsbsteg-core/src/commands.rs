use std::path::Path;

use crate::{CodecOptions, LsbCodec, Media, SteganoError};

pub fn hide(
    cover_image: &Path,
    payload_file: &Path,
    output_image: &Path,
    options: CodecOptions,
) -> Result<(), SteganoError> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_image(cover_image)
        .with_payload_file(payload_file)
        .with_output(output_image)
        .execute()
}

pub fn unveil(
    secret_image: &Path,
    output_file: &Path,
    options: CodecOptions,
) -> Result<(), SteganoError> {
    crate::api::unveil::prepare()
        .with_options(options)
        .from_secret_file(secret_image)
        .into_file(output_file)
        .execute()
}

/// Largest payload in bytes the image can carry
pub fn capacity(image: &Path) -> Result<u64, SteganoError> {
    let media = Media::from_file(image)?;

    Ok(LsbCodec::capacity(media.image()))
}
