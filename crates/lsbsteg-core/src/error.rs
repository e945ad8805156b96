use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents a payload that does not fit into the carrier image, header bits included
    #[error(
        "Capacity Error: {required} bits are required to hide the payload, the image only offers {available} bits"
    )]
    CapacityExceeded { required: u64, available: u64 },

    /// Represents an image that cannot even carry the size header
    #[error(
        "Capacity Error: The image has {pixels} pixels, at least {header_bits} are required for the size header"
    )]
    ImageTooSmall { pixels: u64, header_bits: usize },

    /// Represents an access beyond the last pixel of the grid, an internal invariant violation
    #[error("Bit index {index} is out of bounds for an image with {len} pixels")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia(#[source] image::ImageError),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError(#[source] image::ImageError),

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing payload file")]
    MissingPayload,
}
