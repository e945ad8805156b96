use crate::{Result, SteganoError, HEADER_BITS};

/// Number of bits an image can carry, one per pixel.
pub fn available_bits(width: u32, height: u32) -> u64 {
    u64::from(width) * u64::from(height)
}

/// Number of bits needed for the size header plus `payload_len` bytes.
pub fn required_bits(payload_len: u64) -> u64 {
    (HEADER_BITS as u64).saturating_add(payload_len.saturating_mul(8))
}

/// Largest payload in bytes that an image of the given dimensions can carry.
pub fn max_payload_len(width: u32, height: u32) -> u64 {
    let payload_bits = available_bits(width, height).saturating_sub(HEADER_BITS as u64);
    (payload_bits / 8).min(u64::from(u32::MAX))
}

/// Ensures that a payload of `payload_len` bytes fits into an image of the
/// given dimensions. Must run before the image is touched.
pub fn check(width: u32, height: u32, payload_len: u64) -> Result<()> {
    let available = available_bits(width, height);
    if available < HEADER_BITS as u64 {
        return Err(SteganoError::ImageTooSmall {
            pixels: available,
            header_bits: HEADER_BITS,
        });
    }

    let required = required_bits(payload_len);
    if required > available || payload_len > u64::from(u32::MAX) {
        return Err(SteganoError::CapacityExceeded {
            required,
            available,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_a_payload_that_fills_the_image_exactly() {
        // 8x5 = 40 bits = 32 header bits + 1 byte
        assert!(check(8, 5, 1).is_ok());
    }

    #[test]
    fn should_reject_one_byte_more_than_fits() {
        match check(8, 5, 2) {
            Err(SteganoError::CapacityExceeded {
                required,
                available,
            }) => {
                assert_eq!(required, 48);
                assert_eq!(available, 40);
            }
            other => panic!("expected a capacity error, got {other:?}"),
        }
    }

    #[test]
    fn should_accept_an_empty_payload_in_a_header_sized_image() {
        assert!(check(32, 1, 0).is_ok());
    }

    #[test]
    fn should_report_images_smaller_than_the_header() {
        assert!(matches!(
            check(5, 5, 0),
            Err(SteganoError::ImageTooSmall {
                pixels: 25,
                header_bits: 32
            })
        ));
    }

    #[test]
    fn should_reject_lengths_the_header_cannot_represent() {
        let len = u64::from(u32::MAX) + 1;
        assert!(matches!(
            check(u32::MAX, u32::MAX, len),
            Err(SteganoError::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn should_compute_the_maximum_payload_length() {
        assert_eq!(max_payload_len(8, 8), 4);
        assert_eq!(max_payload_len(8, 5), 1);
        assert_eq!(max_payload_len(4, 4), 0);
        assert_eq!(max_payload_len(100, 100), (10_000 - 32) / 8);
    }
}
