use std::io::{self, BufRead, Cursor, ErrorKind, Read, Write};

use bitstream_io::{BigEndian, BitRead, BitReader};
use log::debug;

use super::CHUNK_SIZE;
use crate::bits::pack;
use crate::media::image::{PixelGrid, PixelGridMut, StegoImage};
use crate::{Result, SteganoError};

/// Hides bytes in consecutive pixels, starting at a given bit index.
///
/// The `k`-th byte ever written lands at the bit indices `start + k * 8 .. start + k * 8 + 8`,
/// most significant bit first, no matter how the bytes are split across calls.
///
/// ## Example of usage
/// ```rust
/// use std::io::Write;
/// use image::RgbaImage;
/// use lsbsteg_core::codec::PayloadWriter;
/// use lsbsteg_core::media::image::StegoImage;
/// use lsbsteg_core::CodecOptions;
///
/// let mut image = RgbaImage::new(8, 2);
/// let mut stego = StegoImage::new(&mut image, &CodecOptions::default());
/// PayloadWriter::new(&mut stego, 0)
///     .write_all(&[0x80, 0x01])
///     .expect("Cannot write 2 bytes into 16 pixels");
///
/// assert_eq!(image.get_pixel(0, 0).0[0], 1);
/// assert_eq!(image.get_pixel(7, 1).0[0], 1);
/// ```
pub struct PayloadWriter<'s, G> {
    image: &'s mut StegoImage<G>,
    start: usize,
    written: usize,
}

impl<'s, G: PixelGridMut> PayloadWriter<'s, G> {
    pub fn new(image: &'s mut StegoImage<G>, start: usize) -> Self {
        Self {
            image,
            start,
            written: 0,
        }
    }

    /// number of bytes hidden so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// number of whole bytes that still fit behind the last written one
    pub fn remaining(&self) -> usize {
        let used = self.start.saturating_add(self.written.saturating_mul(8));
        self.image.len().saturating_sub(used) / 8
    }

    /// Hides as many bytes of `buf` as fit into the image, returns how many that were.
    pub fn hide_bytes(&mut self, buf: &[u8]) -> Result<usize> {
        let n = buf.len().min(self.remaining());
        let mut bits = BitReader::endian(Cursor::new(&buf[..n]), BigEndian);
        let mut index = self.start + self.written * 8;
        for _ in 0..n * 8 {
            let bit = bits.read_bit()?;
            self.image.set_channel_bit(index, bit)?;
            index += 1;
        }
        self.written += n;

        Ok(n)
    }
}

impl<G: PixelGridMut> Write for PayloadWriter<'_, G> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.hide_bytes(buf).map_err(io::Error::other)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Unveils bytes from consecutive pixels, starting at a given bit index.
///
/// The reader ends at the last whole byte the image holds, it knows nothing about the
/// payload length, so it is usually limited with [`Read::take`].
pub struct PayloadReader<'s, G> {
    image: &'s StegoImage<G>,
    index: usize,
}

impl<'s, G: PixelGrid> PayloadReader<'s, G> {
    pub fn new(image: &'s StegoImage<G>, start: usize) -> Self {
        Self {
            image,
            index: start,
        }
    }

    /// Fills all of `buf` or fails with [`SteganoError::IndexOutOfBounds`] if the image ends early.
    pub fn unveil_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut bits = [false; 8];
        for byte in buf.iter_mut() {
            for bit in bits.iter_mut() {
                *bit = self.image.get_channel_bit(self.index)?;
                self.index += 1;
            }
            *byte = pack(&bits) as u8;
        }

        Ok(())
    }

    fn remaining(&self) -> usize {
        self.image.len().saturating_sub(self.index) / 8
    }
}

impl<G: PixelGrid> Read for PayloadReader<'_, G> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.remaining());
        self.unveil_bytes(&mut buf[..n]).map_err(io::Error::other)?;

        Ok(n)
    }
}

/// Moves whole payloads between byte streams and a [`StegoImage`]
pub struct PayloadCodec;

impl PayloadCodec {
    /// Hides exactly `payload_len` bytes read from `payload`, starting at the bit index `start`.
    ///
    /// The payload is consumed chunk by chunk, the chunking has no influence on where a byte lands.
    pub fn write<G, R>(
        image: &mut StegoImage<G>,
        payload: R,
        payload_len: u64,
        start: usize,
    ) -> Result<u64>
    where
        G: PixelGridMut,
        R: Read,
    {
        let mut payload = io::BufReader::with_capacity(CHUNK_SIZE, payload.take(payload_len));
        let mut writer = PayloadWriter::new(image, start);
        loop {
            let chunk = match payload.fill_buf() {
                Ok([]) => break,
                Ok(chunk) => chunk,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(source) => return Err(SteganoError::ReadError { source }),
            };
            let n = writer.hide_bytes(chunk)?;
            if n < chunk.len() {
                let available = image_bits(writer.image);
                return Err(SteganoError::CapacityExceeded {
                    required: start as u64 + payload_len * 8,
                    available,
                });
            }
            payload.consume(n);
        }

        let written = writer.written() as u64;
        if written != payload_len {
            return Err(SteganoError::ReadError {
                source: io::Error::new(
                    ErrorKind::UnexpectedEof,
                    format!("payload ended after {written} of {payload_len} bytes"),
                ),
            });
        }
        debug!("{written} payload bytes hidden");

        Ok(written)
    }

    /// Unveils `payload_len` bytes starting at the bit index `start`.
    pub fn read<G: PixelGrid>(
        image: &StegoImage<G>,
        payload_len: u64,
        start: usize,
    ) -> Result<Vec<u8>> {
        let mut payload = Vec::new();
        Self::read_to(image, payload_len, start, &mut payload)?;

        Ok(payload)
    }

    /// Unveils `payload_len` bytes starting at the bit index `start` and streams them into `sink`.
    pub fn read_to<G, W>(
        image: &StegoImage<G>,
        payload_len: u64,
        start: usize,
        mut sink: W,
    ) -> Result<u64>
    where
        G: PixelGrid,
        W: Write,
    {
        let mut reader = PayloadReader::new(image, start);
        let mut chunk = [0; CHUNK_SIZE];
        let mut remaining = payload_len;
        while remaining > 0 {
            let n = remaining.min(CHUNK_SIZE as u64) as usize;
            reader.unveil_bytes(&mut chunk[..n])?;
            sink.write_all(&chunk[..n])
                .map_err(|source| SteganoError::WriteError { source })?;
            remaining -= n as u64;
        }
        debug!("{payload_len} payload bytes unveiled");

        Ok(payload_len)
    }
}

fn image_bits<G: PixelGrid>(image: &StegoImage<G>) -> u64 {
    let (width, height) = image.dimensions();
    u64::from(width) * u64::from(height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::CodecOptions;
    use crate::test_utils::prepare_8x8_image;
    use crate::HEADER_BITS;

    /// reads bytes in fixed size chunks, to mimic a slow file
    struct Chunked<'a> {
        data: &'a [u8],
        chunk: usize,
    }

    impl Read for Chunked<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.chunk.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn should_hide_bytes_msb_first_behind_the_header() {
        let mut img = prepare_8x8_image();
        {
            let mut stego = StegoImage::new(&mut img, &CodecOptions::default());
            PayloadCodec::write(&mut stego, &[0x41u8][..], 1, HEADER_BITS).unwrap();
        }

        let lsbs: Vec<u8> = img
            .pixels()
            .skip(HEADER_BITS)
            .take(8)
            .map(|p| p.0[0] & 1)
            .collect();
        assert_eq!(lsbs, vec![0, 1, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn should_unveil_what_was_hidden() {
        let payload = [0x41, 0x00, 0xFF];
        let mut img = prepare_8x8_image();
        let mut stego = StegoImage::new(&mut img, &CodecOptions::default());
        PayloadCodec::write(&mut stego, &payload[..], 3, HEADER_BITS).unwrap();

        let unveiled = PayloadCodec::read(&stego, 3, HEADER_BITS).unwrap();
        assert_eq!(unveiled, payload);
    }

    #[test]
    fn should_not_depend_on_the_chunking_of_the_payload() {
        let payload: Vec<u8> = (0..=255).cycle().take(1000).map(|b: u32| b as u8).collect();
        let base = image::RgbaImage::from_fn(100, 90, |x, y| {
            image::Rgba([(x * 7 + y) as u8, (x + y * 3) as u8, 42, 255])
        });

        let mut expected = base.clone();
        {
            let mut stego = StegoImage::new(&mut expected, &CodecOptions::default());
            PayloadCodec::write(&mut stego, &payload[..], 1000, HEADER_BITS).unwrap();
        }

        for chunk in [1, 3, 7, 256, 999] {
            let mut img = base.clone();
            {
                let mut stego = StegoImage::new(&mut img, &CodecOptions::default());
                let reader = Chunked {
                    data: &payload,
                    chunk,
                };
                PayloadCodec::write(&mut stego, reader, 1000, HEADER_BITS).unwrap();
            }
            assert_eq!(img, expected, "chunks of {chunk} bytes led to a different image");
        }
    }

    #[test]
    fn writer_should_place_bytes_by_their_absolute_offset() {
        let payload = [0xDE, 0xAD, 0xBE, 0xEF];
        let mut one_go = prepare_8x8_image();
        {
            let mut stego = StegoImage::new(&mut one_go, &CodecOptions::default());
            PayloadWriter::new(&mut stego, HEADER_BITS)
                .write_all(&payload)
                .unwrap();
        }

        let mut piecewise = prepare_8x8_image();
        {
            let mut stego = StegoImage::new(&mut piecewise, &CodecOptions::default());
            let mut writer = PayloadWriter::new(&mut stego, HEADER_BITS);
            writer.write_all(&payload[..1]).unwrap();
            writer.write_all(&payload[1..3]).unwrap();
            writer.write_all(&payload[3..]).unwrap();
            assert_eq!(writer.written(), 4);
            assert_eq!(writer.remaining(), 0);
        }

        assert_eq!(one_go, piecewise);
    }

    #[test]
    fn writer_should_signal_a_full_image() {
        let mut img = prepare_8x8_image();
        let mut stego = StegoImage::new(&mut img, &CodecOptions::default());
        let mut writer = PayloadWriter::new(&mut stego, HEADER_BITS);

        let e = writer.write_all(&[1, 2, 3, 4, 5]).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::WriteZero);
        assert_eq!(writer.written(), 4);
    }

    #[test]
    fn write_should_report_payloads_that_do_not_fit() {
        let mut img = prepare_8x8_image();
        let mut stego = StegoImage::new(&mut img, &CodecOptions::default());

        assert!(matches!(
            PayloadCodec::write(&mut stego, &[0u8; 5][..], 5, HEADER_BITS),
            Err(SteganoError::CapacityExceeded {
                required: 72,
                available: 64
            })
        ));
    }

    #[test]
    fn write_should_report_payloads_shorter_than_announced() {
        let mut img = prepare_8x8_image();
        let mut stego = StegoImage::new(&mut img, &CodecOptions::default());

        match PayloadCodec::write(&mut stego, &[1u8, 2][..], 3, HEADER_BITS) {
            Err(SteganoError::ReadError { source }) => {
                assert_eq!(source.kind(), ErrorKind::UnexpectedEof)
            }
            other => panic!("expected a read error, got {other:?}"),
        }
    }

    #[test]
    fn reader_should_stop_at_the_last_whole_byte() {
        let img = prepare_8x8_image();
        let stego = StegoImage::new(&img, &CodecOptions::default());
        let mut all = Vec::new();
        PayloadReader::new(&stego, HEADER_BITS + 1)
            .read_to_end(&mut all)
            .unwrap();

        // 31 bits left, 3 whole bytes
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn read_should_fail_beyond_the_image() {
        let img = prepare_8x8_image();
        let stego = StegoImage::new(&img, &CodecOptions::default());

        assert!(matches!(
            PayloadCodec::read(&stego, 5, HEADER_BITS),
            Err(SteganoError::IndexOutOfBounds { index: 64, len: 64 })
        ));
    }

    #[test]
    fn read_should_produce_nothing_for_empty_payloads() {
        let img = prepare_8x8_image();
        let stego = StegoImage::new(&img, &CodecOptions::default());

        assert!(PayloadCodec::read(&stego, 0, HEADER_BITS).unwrap().is_empty());
    }
}
