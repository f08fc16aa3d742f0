//! Binary buffer primitives: a growable [`Writer`] and a bounds-checked
//! [`Reader`], both parameterized by an explicit [`Endian`].

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

/// Byte order of multi-byte scalars on the wire.
///
/// Both endpoints of a deployment must configure the same value; the codec
/// never falls back to the machine's native order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    /// Little-endian, the common deployment order.
    #[default]
    Little,
    /// Big-endian.
    Big,
}

/// Error produced by checked [`Reader`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("invalid utf-8 in string payload")]
    InvalidUtf8,
}
