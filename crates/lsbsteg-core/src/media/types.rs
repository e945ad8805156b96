use std::fs::{self, File};
use std::io::{Cursor, Read, Write};
use std::path::Path;

pub use image::RgbaImage;
use log::{debug, error};

use crate::error::SteganoError;
use crate::media::image::LsbCodec;
use crate::media::CodecOptions;
use crate::result::Result;

use super::Persist;

/// a carrier image for steganography, always 8-bit RGBA
#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    image: RgbaImage,
}

impl Media {
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Opens any image format the `image` crate understands and normalizes it to 8-bit RGBA
    pub fn from_file(f: &Path) -> Result<Self> {
        let image = image::open(f)
            .map_err(|e| {
                error!("Error opening image {f:?}: {e}");
                SteganoError::InvalidImageMedia(e)
            })?
            .to_rgba8();
        debug!(
            "Opened image {f:?} with {}x{} pixels",
            image.width(),
            image.height()
        );

        Ok(Self { image })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Hides `payload_len` bytes from `payload`, see [`LsbCodec::hide`]
    pub fn hide_data<R: Read>(
        &mut self,
        payload: R,
        payload_len: u64,
        opts: &CodecOptions,
    ) -> Result<&mut Self> {
        LsbCodec::hide(&mut self.image, payload, payload_len, opts)?;

        Ok(self)
    }

    /// Unveils the hidden payload into `sink`, see [`LsbCodec::unveil_to`]
    pub fn unveil_data<W: Write>(&self, sink: W, opts: &CodecOptions) -> Result<u64> {
        LsbCodec::unveil_to(&self.image, sink, opts)
    }

    /// Renders the image as 8-bit RGBA PNG into memory
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut png = Cursor::new(Vec::new());
        self.save_to_writer(&mut png)?;

        Ok(png.into_inner())
    }

    pub fn save_to_writer<W: Write + std::io::Seek>(&self, mut writer: W) -> Result<()> {
        self.image
            .write_to(&mut writer, image::ImageOutputFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                SteganoError::ImageEncodingError(e)
            })
    }
}

impl Persist for Media {
    /// The PNG is fully encoded before `file` is created, and a failed write removes it again
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let png = self.encode_png()?;
        write_all_or_remove(file, &png)
    }
}

/// Writes `data` to a new `file`, nothing is left behind on failure
pub(crate) fn write_all_or_remove(file: &Path, data: &[u8]) -> Result<()> {
    let mut f = File::create(file).map_err(|e| {
        error!("Error creating file {file:?}: {e}");
        SteganoError::WriteError { source: e }
    })?;

    if let Err(e) = f.write_all(data).and_then(|_| f.sync_all()) {
        error!("Error writing file {file:?}: {e}");
        drop(f);
        let _ = fs::remove_file(file);
        return Err(SteganoError::WriteError { source: e });
    }

    Ok(())
}
