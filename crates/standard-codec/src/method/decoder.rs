//! Method-call and envelope decoder.

use channel_buffers::{Endian, Reader};

use super::messages::{Envelope, MethodCall, RemoteError, MARKER_ERROR, MARKER_SUCCESS};
use crate::standard::{DecodeError, StandardDecoder};
use crate::WireValue;

/// Method codec decoding error. Every variant is a protocol violation —
/// fatal, never retryable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MethodDecodeError {
    #[error("method call corrupted")]
    MethodCallCorrupted,
    #[error("envelope corrupted")]
    EnvelopeCorrupted,
    #[error(transparent)]
    Value(#[from] DecodeError),
}

/// Decodes method calls and response envelopes.
///
/// Stateless apart from its configured byte order.
pub struct MethodDecoder {
    dec: StandardDecoder,
}

impl Default for MethodDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MethodDecoder {
    /// Creates a little-endian decoder.
    pub fn new() -> Self {
        Self::with_endian(Endian::Little)
    }

    /// Creates a decoder with the given byte order.
    pub fn with_endian(endian: Endian) -> Self {
        Self {
            dec: StandardDecoder::with_endian(endian),
        }
    }

    /// Decodes a method call: two values, where the first must be a String
    /// and the buffer must be fully consumed afterwards.
    pub fn decode_method_call(&self, data: &[u8]) -> Result<MethodCall, MethodDecodeError> {
        let mut r = Reader::with_endian(data, self.dec.endian());
        let method = self.dec.read_any(&mut r)?;
        let args = self.dec.read_any(&mut r)?;
        match method {
            WireValue::Str(method) if r.remaining() == 0 => Ok(MethodCall { method, args }),
            _ => Err(MethodDecodeError::MethodCallCorrupted),
        }
    }

    /// Decodes a response envelope.
    ///
    /// A structured remote error decodes as `Ok(Envelope::Error(..))`; only
    /// protocol violations are `Err`. Success requires the result value to
    /// consume the whole buffer.
    pub fn decode_envelope(&self, data: &[u8]) -> Result<Envelope, MethodDecodeError> {
        let mut r = Reader::with_endian(data, self.dec.endian());
        let marker = r.u8().map_err(DecodeError::from)?;
        match marker {
            MARKER_SUCCESS => {
                let result = self.dec.read_any(&mut r)?;
                if r.remaining() != 0 {
                    return Err(MethodDecodeError::EnvelopeCorrupted);
                }
                Ok(Envelope::Success(result))
            }
            MARKER_ERROR => {
                let code = self.dec.read_any(&mut r)?;
                let message = self.dec.read_any(&mut r)?;
                let details = self.dec.read_any(&mut r)?;
                let code = match code {
                    WireValue::Str(c) => c,
                    _ => return Err(MethodDecodeError::EnvelopeCorrupted),
                };
                let message = match message {
                    WireValue::Str(m) => Some(m),
                    WireValue::Null => None,
                    _ => return Err(MethodDecodeError::EnvelopeCorrupted),
                };
                if r.remaining() != 0 {
                    return Err(MethodDecodeError::EnvelopeCorrupted);
                }
                Ok(Envelope::Error(RemoteError {
                    code,
                    message,
                    details,
                }))
            }
            _ => Err(MethodDecodeError::EnvelopeCorrupted),
        }
    }
}
