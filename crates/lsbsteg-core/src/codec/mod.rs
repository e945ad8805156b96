//! Wire format of hidden data inside a [`StegoImage`](crate::media::image::StegoImage):
//! a big-endian size header of [`HEADER_BITS`](crate::HEADER_BITS) bits at bit index 0,
//! directly followed by the payload bytes, most significant bit first.

pub mod header;
pub mod payload;

pub use header::SizeHeaderCodec;
pub use payload::{PayloadCodec, PayloadReader, PayloadWriter};

/// size of the staging buffer when streaming payloads in and out of an image
pub(crate) const CHUNK_SIZE: usize = 4096;
