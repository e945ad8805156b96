/// Options for LSB (Least Significant Bit) image encoding
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// The one color channel of every pixel that carries the hidden bits.
    /// Hiding and unveiling must agree on it.
    pub channel: ColorChannel,
}

impl CodecOptions {
    pub fn with_channel(mut self, channel: ColorChannel) -> Self {
        self.channel = channel;
        self
    }

    pub fn get_channel(&self) -> ColorChannel {
        self.channel
    }
}

/// Color channel of an 8-bit RGBA pixel
#[derive(Debug, Default, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum ColorChannel {
    #[default]
    Red,
    Green,
    Blue,
    Alpha,
}

impl ColorChannel {
    /// position of the channel inside of a `Rgba<u8>` pixel
    pub fn index(self) -> usize {
        match self {
            ColorChannel::Red => 0,
            ColorChannel::Green => 1,
            ColorChannel::Blue => 2,
            ColorChannel::Alpha => 3,
        }
    }
}
