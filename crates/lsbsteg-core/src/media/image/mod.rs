pub mod lsb_codec;
pub mod stego_image;

pub use lsb_codec::LsbCodec;
pub use stego_image::{PixelGrid, PixelGridMut, StegoImage};
