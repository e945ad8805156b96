use std::fs::File;
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::{CodecOptions, Media, Persist, SteganoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    payload: Option<PathBuf>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This file's bytes are hidden verbatim
    pub fn with_payload_file<A: AsRef<Path>>(mut self, payload: A) -> Self {
        self.payload = Some(payload.as_ref().to_path_buf());
        self
    }

    /// The cover image, used readonly
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The image with the hidden payload is written as PNG to this file
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Execute the hide process and blocks until it is finished.
    ///
    /// Nothing is written to the output file unless the whole payload was hidden.
    pub fn execute(self) -> Result<(), SteganoError> {
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };
        let Some(payload) = self.payload else {
            return Err(SteganoError::MissingPayload);
        };

        let mut media = Media::from_file(&image)?;
        let payload_file = File::open(&payload).map_err(|source| {
            error!("Error opening payload file {payload:?}: {source}");
            SteganoError::ReadError { source }
        })?;
        let payload_len = payload_file
            .metadata()
            .map_err(|source| SteganoError::ReadError { source })?
            .len();

        media
            .hide_data(payload_file, payload_len, &self.options)?
            .save_as(&output)?;
        info!("Hid {payload_len} bytes of {payload:?} in {output:?}");

        Ok(())
    }
}
