//! `StandardDecoder` — reads [`WireValue`] trees from the standard binary
//! encoding.

use channel_buffers::{Endian, Reader};

use super::constants::{Tag, MAX_NESTING_DEPTH, SIZE_U16, SIZE_U32};
use super::error::DecodeError;
use crate::WireValue;

/// Standard value decoder.
///
/// Stateless apart from its configured byte order; safe to share across
/// threads. Never reads past the end of the input: underruns surface as
/// [`DecodeError`], not panics.
pub struct StandardDecoder {
    endian: Endian,
}

impl Default for StandardDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardDecoder {
    /// Creates a little-endian decoder.
    pub fn new() -> Self {
        Self::with_endian(Endian::Little)
    }

    /// Creates a decoder with the given byte order.
    pub fn with_endian(endian: Endian) -> Self {
        Self { endian }
    }

    /// Returns the decoder's byte order.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Decodes exactly one value from `data`. Leftover bytes are a
    /// corruption error — full consumption is the sole integrity check.
    pub fn decode(&self, data: &[u8]) -> Result<WireValue, DecodeError> {
        let mut r = Reader::with_endian(data, self.endian);
        let value = self.read_any(&mut r)?;
        if r.remaining() != 0 {
            return Err(DecodeError::TrailingBytes(r.remaining()));
        }
        Ok(value)
    }

    /// Reads one value at the cursor, leaving the cursor just past it.
    /// The cursor position doubles as the alignment origin, so the reader
    /// must have been created at the start of the encoded stream.
    ///
    /// Input nested deeper than [`MAX_NESTING_DEPTH`] is rejected with an
    /// error rather than recursing without bound.
    pub fn read_any(&self, r: &mut Reader) -> Result<WireValue, DecodeError> {
        self.read_value(r, 0)
    }

    fn read_value(&self, r: &mut Reader, depth: usize) -> Result<WireValue, DecodeError> {
        if depth >= MAX_NESTING_DEPTH {
            return Err(DecodeError::NestingTooDeep);
        }
        let byte = r.u8()?;
        let tag = Tag::from_u8(byte).ok_or(DecodeError::InvalidTag(byte))?;
        match tag {
            Tag::Null => Ok(WireValue::Null),
            Tag::True => Ok(WireValue::Bool(true)),
            Tag::False => Ok(WireValue::Bool(false)),
            Tag::I32 => {
                r.align_to(4)?;
                Ok(WireValue::I32(r.i32()?))
            }
            Tag::I64 => {
                r.align_to(8)?;
                Ok(WireValue::I64(r.i64()?))
            }
            Tag::BigInt => {
                let len = self.read_size(r)?;
                Ok(WireValue::BigInt(r.utf8(len)?.to_owned()))
            }
            Tag::F64 => {
                r.align_to(8)?;
                Ok(WireValue::F64(r.f64()?))
            }
            Tag::Str => {
                let len = self.read_size(r)?;
                Ok(WireValue::Str(r.utf8(len)?.to_owned()))
            }
            Tag::Bytes => {
                let len = self.read_size(r)?;
                Ok(WireValue::Bytes(r.buf(len)?.to_vec()))
            }
            Tag::I32Array => {
                let count = self.read_size(r)?;
                r.align_to(4)?;
                let mut arr = Vec::with_capacity(count.min(r.remaining() / 4));
                for _ in 0..count {
                    arr.push(r.i32()?);
                }
                Ok(WireValue::I32Array(arr))
            }
            Tag::I64Array => {
                let count = self.read_size(r)?;
                r.align_to(8)?;
                let mut arr = Vec::with_capacity(count.min(r.remaining() / 8));
                for _ in 0..count {
                    arr.push(r.i64()?);
                }
                Ok(WireValue::I64Array(arr))
            }
            Tag::F64Array => {
                let count = self.read_size(r)?;
                r.align_to(8)?;
                let mut arr = Vec::with_capacity(count.min(r.remaining() / 8));
                for _ in 0..count {
                    arr.push(r.f64()?);
                }
                Ok(WireValue::F64Array(arr))
            }
            Tag::List => {
                let count = self.read_size(r)?;
                // Cap the preallocation by what the buffer could possibly hold.
                let mut items = Vec::with_capacity(count.min(r.remaining()));
                for _ in 0..count {
                    items.push(self.read_value(r, depth + 1)?);
                }
                Ok(WireValue::List(items))
            }
            Tag::Map => {
                let count = self.read_size(r)?;
                let mut pairs = Vec::with_capacity(count.min(r.remaining() / 2));
                for _ in 0..count {
                    let key = self.read_value(r, depth + 1)?;
                    let val = self.read_value(r, depth + 1)?;
                    pairs.push((key, val));
                }
                Ok(WireValue::Map(pairs))
            }
        }
    }

    fn read_size(&self, r: &mut Reader) -> Result<usize, DecodeError> {
        let b = r.u8()?;
        Ok(match b {
            SIZE_U16 => r.u16()? as usize,
            SIZE_U32 => r.u32()? as usize,
            n => n as usize,
        })
    }
}
