//! # lsbsteg Core API
//!
//! Hides a byte payload in the least significant bit of one color channel of every pixel
//! of an image, and unveils it again. The first [`HEADER_BITS`] pixels carry the payload
//! length in bytes (big-endian), the payload bits follow right after, row by row.
//!
//! - [`LsbCodec`] hides and unveils payloads in in-memory pixel grids
//! - [`api::hide`] and [`api::unveil`] work on image files
//!
//! # Usage Examples
//!
//! ## Hide data inside an image
//!
//! ```rust
//! use image::RgbaImage;
//! use lsbsteg_core::{CodecOptions, LsbCodec};
//!
//! let mut image = RgbaImage::new(8, 8);
//! LsbCodec::hide_bytes(&mut image, b"Hey", &CodecOptions::default())
//!     .expect("Failed to hide 3 bytes in 64 pixels");
//!
//! let payload = LsbCodec::unveil(&image, &CodecOptions::default())
//!     .expect("Failed to unveil the payload");
//! assert_eq!(payload, b"Hey");
//! ```
//!
//! ## Hide a file inside an image file
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! image::RgbaImage::new(128, 128).save(&carrier).expect("Failed to create carrier image");
//!
//! lsbsteg_core::api::hide::prepare()
//!     .with_image(&carrier)
//!     .with_payload_file("Cargo.toml")
//!     .with_output(temp_dir.path().join("image-with-a-file-inside.png"))
//!     .execute()
//!     .expect("Failed to hide file in image");
//!
//! lsbsteg_core::api::unveil::prepare()
//!     .from_secret_file(temp_dir.path().join("image-with-a-file-inside.png"))
//!     .into_file(temp_dir.path().join("Cargo.toml"))
//!     .execute()
//!     .expect("Failed to unveil file from image");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bits;
pub mod capacity;
pub mod codec;
pub mod commands;
pub mod error;
pub mod media;
pub mod result;

pub use crate::error::SteganoError;
pub use crate::media::image::{LsbCodec, StegoImage};
pub use crate::media::{CodecOptions, ColorChannel, Media, Persist};
pub use crate::result::Result;

/// Width of the size header in bits, it holds the payload length in bytes
pub const HEADER_BITS: usize = 32;
