use image::RgbaImage;

use crate::media::{CodecOptions, ColorChannel, HideBit, UnveilBit};
use crate::{Result, SteganoError};

/// Read access to a grid of 8-bit RGBA pixels
pub trait PixelGrid {
    /// `(width, height)` of the grid
    fn grid_dimensions(&self) -> (u32, u32);

    /// color value of one channel of the pixel at column `x` and row `y`
    fn channel(&self, x: u32, y: u32, channel: ColorChannel) -> u8;
}

/// Write access to a grid of 8-bit RGBA pixels
pub trait PixelGridMut: PixelGrid {
    fn channel_mut(&mut self, x: u32, y: u32, channel: ColorChannel) -> &mut u8;
}

impl PixelGrid for RgbaImage {
    fn grid_dimensions(&self) -> (u32, u32) {
        self.dimensions()
    }

    fn channel(&self, x: u32, y: u32, channel: ColorChannel) -> u8 {
        self.get_pixel(x, y).0[channel.index()]
    }
}

impl PixelGridMut for RgbaImage {
    fn channel_mut(&mut self, x: u32, y: u32, channel: ColorChannel) -> &mut u8 {
        &mut self.get_pixel_mut(x, y).0[channel.index()]
    }
}

impl<G: PixelGrid + ?Sized> PixelGrid for &G {
    fn grid_dimensions(&self) -> (u32, u32) {
        (**self).grid_dimensions()
    }

    fn channel(&self, x: u32, y: u32, channel: ColorChannel) -> u8 {
        (**self).channel(x, y, channel)
    }
}

impl<G: PixelGrid + ?Sized> PixelGrid for &mut G {
    fn grid_dimensions(&self) -> (u32, u32) {
        (**self).grid_dimensions()
    }

    fn channel(&self, x: u32, y: u32, channel: ColorChannel) -> u8 {
        (**self).channel(x, y, channel)
    }
}

impl<G: PixelGridMut + ?Sized> PixelGridMut for &mut G {
    fn channel_mut(&mut self, x: u32, y: u32, channel: ColorChannel) -> &mut u8 {
        (**self).channel_mut(x, y, channel)
    }
}

/// Bit addressable view onto a pixel grid.
///
/// A linear bit index `i` selects the pixel in row `i / width` and column
/// `i % width`, and always the same color channel of that pixel. Every pixel
/// therefore carries exactly one bit, in the least significant bit of that channel.
///
/// ## Example of usage
/// ```rust
/// use image::RgbaImage;
/// use lsbsteg_core::media::image::StegoImage;
/// use lsbsteg_core::CodecOptions;
///
/// let mut image = RgbaImage::new(4, 2);
/// let mut stego = StegoImage::new(&mut image, &CodecOptions::default());
/// stego.set_channel_bit(5, true).expect("index 5 is inside a 4x2 image");
/// assert!(stego.get_channel_bit(5).expect("index 5 is inside a 4x2 image"));
///
/// // bit 5 lives in row 1, column 1, red channel
/// assert_eq!(image.get_pixel(1, 1).0, [1, 0, 0, 0]);
/// ```
pub struct StegoImage<G> {
    grid: G,
    channel: ColorChannel,
    width: u32,
    height: u32,
}

impl<G: PixelGrid> StegoImage<G> {
    pub fn new(grid: G, options: &CodecOptions) -> Self {
        let (width, height) = grid.grid_dimensions();
        Self {
            grid,
            channel: options.get_channel(),
            width,
            height,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// number of addressable bits, one per pixel
    pub fn len(&self) -> usize {
        usize::try_from(u64::from(self.width) * u64::from(self.height)).unwrap_or(usize::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_inner(self) -> G {
        self.grid
    }

    /// `(x, y)` aka `(column, row)` of the pixel behind a bit index
    fn locate(&self, index: usize) -> Result<(u32, u32)> {
        let len = self.len();
        if index >= len {
            return Err(SteganoError::IndexOutOfBounds { index, len });
        }
        let width = self.width as usize;

        Ok(((index % width) as u32, (index / width) as u32))
    }

    pub fn get_channel_bit(&self, index: usize) -> Result<bool> {
        let (x, y) = self.locate(index)?;

        Ok(self.grid.channel(x, y, self.channel).unveil_bit())
    }
}

impl<G: PixelGridMut> StegoImage<G> {
    pub fn set_channel_bit(&mut self, index: usize, bit: bool) -> Result<()> {
        let (x, y) = self.locate(index)?;
        self.grid.channel_mut(x, y, self.channel).hide_bit(bit);

        Ok(())
    }
}
