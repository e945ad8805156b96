pub mod codec_options;
pub mod image;
mod primitives;
mod types;

use std::path::Path;

pub use codec_options::{CodecOptions, ColorChannel};
pub use primitives::*;
pub use types::*;
pub(crate) use types::write_all_or_remove;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}
