//! The standard value codec: type-tagged, self-delimiting binary encoding
//! of [`WireValue`](crate::WireValue) trees.

pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;

pub use constants::Tag;
pub use decoder::StandardDecoder;
pub use encoder::StandardEncoder;
pub use error::{DecodeError, EncodeError};
