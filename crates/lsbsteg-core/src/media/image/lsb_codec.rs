use std::io::{Read, Write};

use image::RgbaImage;
use log::debug;

use super::{PixelGrid, PixelGridMut, StegoImage};
use crate::capacity;
use crate::codec::{PayloadCodec, SizeHeaderCodec};
use crate::media::CodecOptions;
use crate::{Result, SteganoError, HEADER_BITS};

/// Hides and unveils length prefixed payloads in pixel grids
pub struct LsbCodec;

impl LsbCodec {
    /// Hides `payload_len` bytes read from `payload` in `carrier`.
    ///
    /// The capacity is checked before the first pixel is touched, a payload that does not
    /// fit leaves the carrier as it was.
    pub fn hide<G, R>(
        carrier: &mut G,
        payload: R,
        payload_len: u64,
        opts: &CodecOptions,
    ) -> Result<()>
    where
        G: PixelGridMut + ?Sized,
        R: Read,
    {
        let (width, height) = carrier.grid_dimensions();
        capacity::check(width, height, payload_len)?;
        let header_value = u32::try_from(payload_len).map_err(|_| SteganoError::CapacityExceeded {
            required: capacity::required_bits(payload_len),
            available: capacity::available_bits(width, height),
        })?;

        let mut image = StegoImage::new(carrier, opts);
        SizeHeaderCodec::write(&mut image, header_value)?;
        PayloadCodec::write(&mut image, payload, payload_len, HEADER_BITS)?;
        debug!(
            "Hid {payload_len} bytes in a {width}x{height} image using the {:?} channel",
            opts.get_channel()
        );

        Ok(())
    }

    /// Hides all of `payload` in `carrier`
    pub fn hide_bytes<G>(carrier: &mut G, payload: &[u8], opts: &CodecOptions) -> Result<()>
    where
        G: PixelGridMut + ?Sized,
    {
        Self::hide(carrier, payload, payload.len() as u64, opts)
    }

    /// Reads the size header of `carrier` and checks that the announced payload fits into it.
    pub fn payload_len<G>(carrier: &G, opts: &CodecOptions) -> Result<u32>
    where
        G: PixelGrid + ?Sized,
    {
        let image = StegoImage::new(carrier, opts);
        let payload_len = SizeHeaderCodec::read(&image)?;
        let (width, height) = image.dimensions();
        capacity::check(width, height, u64::from(payload_len))?;

        Ok(payload_len)
    }

    /// Unveils the hidden payload of `carrier` into memory
    pub fn unveil<G>(carrier: &G, opts: &CodecOptions) -> Result<Vec<u8>>
    where
        G: PixelGrid + ?Sized,
    {
        let mut payload = Vec::new();
        Self::unveil_to(carrier, &mut payload, opts)?;

        Ok(payload)
    }

    /// Unveils the hidden payload of `carrier` and streams it into `sink`,
    /// returns the number of bytes unveiled.
    pub fn unveil_to<G, W>(carrier: &G, sink: W, opts: &CodecOptions) -> Result<u64>
    where
        G: PixelGrid + ?Sized,
        W: Write,
    {
        let payload_len = u64::from(Self::payload_len(carrier, opts)?);
        let image = StegoImage::new(carrier, opts);

        PayloadCodec::read_to(&image, payload_len, HEADER_BITS, sink)
    }

    /// Largest payload in bytes that `carrier` can take
    pub fn capacity<G>(carrier: &G) -> u64
    where
        G: PixelGrid + ?Sized,
    {
        let (width, height) = carrier.grid_dimensions();
        capacity::max_payload_len(width, height)
    }

    /// Convenience for the common case of an owned `RgbaImage`
    pub fn hide_in_image(carrier: &mut RgbaImage, payload: &[u8]) -> Result<()> {
        Self::hide_bytes(carrier, payload, &CodecOptions::default())
    }
}
