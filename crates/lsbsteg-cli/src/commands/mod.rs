pub mod capacity;
pub mod decode;
pub mod encode;
