use log::debug;

use crate::bits::{pack, unpack};
use crate::media::image::{PixelGrid, PixelGridMut, StegoImage};
use crate::{Result, SteganoError, HEADER_BITS};

/// Reads and writes the payload length, in bytes, at the bit indices `0..HEADER_BITS`
pub struct SizeHeaderCodec;

impl SizeHeaderCodec {
    pub fn write<G: PixelGridMut>(image: &mut StegoImage<G>, payload_len: u32) -> Result<()> {
        ensure_header_fits(image)?;
        for (i, bit) in unpack(u64::from(payload_len), HEADER_BITS)
            .into_iter()
            .enumerate()
        {
            image.set_channel_bit(i, bit)?;
        }
        debug!("Size header written, payload length is {payload_len} bytes");

        Ok(())
    }

    pub fn read<G: PixelGrid>(image: &StegoImage<G>) -> Result<u32> {
        ensure_header_fits(image)?;
        let bits = (0..HEADER_BITS)
            .map(|i| image.get_channel_bit(i))
            .collect::<Result<Vec<bool>>>()?;
        let payload_len = pack(&bits) as u32;
        debug!("Size header read, payload length is {payload_len} bytes");

        Ok(payload_len)
    }
}

fn ensure_header_fits<G: PixelGrid>(image: &StegoImage<G>) -> Result<()> {
    if image.len() < HEADER_BITS {
        let (width, height) = image.dimensions();
        return Err(SteganoError::ImageTooSmall {
            pixels: u64::from(width) * u64::from(height),
            header_bits: HEADER_BITS,
        });
    }

    Ok(())
}
