use channel_buffers::BufferError;
use thiserror::Error;

/// Value encoding error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("collection length {0} does not fit the 32-bit size field")]
    SizeOverflow(usize),
    #[error("big integer is not in decimal form: {0:?}")]
    MalformedBigInt(String),
    #[error("value nesting too deep")]
    NestingTooDeep,
}

/// Value decoding error. Always fatal to the decode call; the codec never
/// retries or recovers partially.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Buffer(#[from] BufferError),
    #[error("unknown type tag: 0x{0:02x}")]
    InvalidTag(u8),
    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),
    #[error("value nesting too deep")]
    NestingTooDeep,
}
