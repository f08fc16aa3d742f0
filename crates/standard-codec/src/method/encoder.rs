//! Method-call and envelope encoder.

use channel_buffers::Endian;

use super::messages::{Envelope, MethodCall, MARKER_ERROR, MARKER_SUCCESS};
use crate::standard::{EncodeError, StandardEncoder};
use crate::WireValue;

/// Encodes method calls and response envelopes.
pub struct MethodEncoder {
    pub enc: StandardEncoder,
}

impl Default for MethodEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MethodEncoder {
    /// Creates a little-endian encoder.
    pub fn new() -> Self {
        Self::with_endian(Endian::Little)
    }

    /// Creates an encoder with the given byte order.
    pub fn with_endian(endian: Endian) -> Self {
        Self {
            enc: StandardEncoder::with_endian(endian),
        }
    }

    /// Encodes a method call: Value(name) then Value(args), concatenated.
    pub fn encode_method_call(&mut self, call: &MethodCall) -> Result<Vec<u8>, EncodeError> {
        self.enc.writer.reset();
        self.enc.write_str(&call.method)?;
        self.enc.write_any(&call.args)?;
        Ok(self.enc.writer.flush())
    }

    /// Encodes a success envelope: marker `0x00` then Value(result).
    pub fn encode_success_envelope(&mut self, result: &WireValue) -> Result<Vec<u8>, EncodeError> {
        self.enc.writer.reset();
        self.enc.writer.u8(MARKER_SUCCESS);
        self.enc.write_any(result)?;
        Ok(self.enc.writer.flush())
    }

    /// Encodes an error envelope: marker `0x01` then Value(code),
    /// Value(message), Value(details).
    pub fn encode_error_envelope(
        &mut self,
        code: &str,
        message: Option<&str>,
        details: &WireValue,
    ) -> Result<Vec<u8>, EncodeError> {
        self.enc.writer.reset();
        self.enc.writer.u8(MARKER_ERROR);
        self.enc.write_str(code)?;
        match message {
            Some(m) => self.enc.write_str(m)?,
            None => self.enc.write_any(&WireValue::Null)?,
        }
        self.enc.write_any(details)?;
        Ok(self.enc.writer.flush())
    }

    /// Encodes either envelope variant.
    pub fn encode_envelope(&mut self, envelope: &Envelope) -> Result<Vec<u8>, EncodeError> {
        match envelope {
            Envelope::Success(result) => self.encode_success_envelope(result),
            Envelope::Error(err) => {
                self.encode_error_envelope(&err.code, err.message.as_deref(), &err.details)
            }
        }
    }
}
