use std::path::{Path, PathBuf};

use log::info;

use crate::media::write_all_or_remove;
use crate::{CodecOptions, Media, SteganoError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    destination_file: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the file where the unveiled payload will be saved to, verbatim
    pub fn into_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<(), SteganoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(destination_file) = self.destination_file else {
            return Err(SteganoError::TargetNotSet);
        };

        let media = Media::from_file(&secret_media)?;
        let mut payload = Vec::new();
        media.unveil_data(&mut payload, &self.options)?;

        write_all_or_remove(&destination_file, &payload)?;
        info!(
            "Unveiled {} bytes from {secret_media:?} into {destination_file:?}",
            payload.len()
        );

        Ok(())
    }
}
