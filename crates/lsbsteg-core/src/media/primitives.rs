/// storing one bit of information in the least significant bit of a carrier primitive
pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

/// reading one bit of information from the least significant bit of a carrier primitive
pub trait UnveilBit {
    fn unveil_bit(&self) -> bool;
}

impl HideBit for &mut u8 {
    #[inline(always)]
    fn hide_bit(self, bit: bool) {
        *self = (*self & (u8::MAX - 1)) | u8::from(bit);
    }
}

impl UnveilBit for u8 {
    #[inline(always)]
    fn unveil_bit(&self) -> bool {
        self & 1 == 1
    }
}
