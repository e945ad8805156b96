//! Conversion between unsigned integers and their big-endian bit sequences.
//!
//! The first bit of a sequence is always the most significant bit of the
//! number, on the hide path as well as on the unveil path.

/// Interprets `bits` as a big-endian binary number.
///
/// At most 64 bits fit, longer sequences lose their leading bits.
///
/// ```rust
/// use lsbsteg_core::bits::pack;
///
/// assert_eq!(pack(&[false, false, false, false, false, true, true]), 3);
/// ```
pub fn pack(bits: &[bool]) -> u64 {
    debug_assert!(bits.len() <= u64::BITS as usize);
    bits.iter()
        .fold(0, |value, bit| (value << 1) | u64::from(*bit))
}

/// Produces the big-endian sequence of the lowest `len` bits of `value`.
///
/// Bits above `len` are dropped, a `len` wider than the value pads with
/// leading zeros.
///
/// ```rust
/// use lsbsteg_core::bits::unpack;
///
/// assert_eq!(unpack(0x41, 8), [false, true, false, false, false, false, false, true]);
/// ```
pub fn unpack(value: u64, len: usize) -> Vec<bool> {
    debug_assert!(len <= u64::BITS as usize);
    (0..len).rev().map(|shift| (value >> shift) & 1 == 1).collect()
}
