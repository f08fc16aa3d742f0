//! `StandardEncoder` — writes [`WireValue`] trees in the standard binary
//! encoding.

use channel_buffers::{Endian, Writer};

use super::constants::{Tag, MAX_NESTING_DEPTH, SIZE_U16, SIZE_U32};
use super::error::EncodeError;
use crate::WireValue;

/// Standard value encoder.
///
/// Owns a growable [`Writer`]; `encode` hands the finished message to the
/// caller as a fresh `Vec<u8>` that does not alias the working buffer.
pub struct StandardEncoder {
    pub writer: Writer,
}

impl Default for StandardEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardEncoder {
    /// Creates a little-endian encoder.
    pub fn new() -> Self {
        Self::with_endian(Endian::Little)
    }

    /// Creates an encoder with the given byte order.
    pub fn with_endian(endian: Endian) -> Self {
        Self {
            writer: Writer::with_endian(endian),
        }
    }

    /// Encodes one value into a fresh buffer.
    pub fn encode(&mut self, value: &WireValue) -> Result<Vec<u8>, EncodeError> {
        self.writer.reset();
        self.write_any(value)?;
        Ok(self.writer.flush())
    }

    /// Appends one value to the working buffer. Used for multi-value
    /// messages; each value remains self-delimiting. Trees nested deeper
    /// than [`MAX_NESTING_DEPTH`] are rejected.
    pub fn write_any(&mut self, value: &WireValue) -> Result<(), EncodeError> {
        self.write_value(value, 0)
    }

    fn write_value(&mut self, value: &WireValue, depth: usize) -> Result<(), EncodeError> {
        if depth >= MAX_NESTING_DEPTH {
            return Err(EncodeError::NestingTooDeep);
        }
        match value {
            WireValue::Null => self.writer.u8(Tag::Null as u8),
            WireValue::Bool(true) => self.writer.u8(Tag::True as u8),
            WireValue::Bool(false) => self.writer.u8(Tag::False as u8),
            WireValue::I32(v) => {
                self.writer.u8(Tag::I32 as u8);
                self.writer.pad_to(4);
                self.writer.i32(*v);
            }
            WireValue::I64(v) => {
                self.writer.u8(Tag::I64 as u8);
                self.writer.pad_to(8);
                self.writer.i64(*v);
            }
            WireValue::BigInt(digits) => {
                if !is_decimal(digits) {
                    return Err(EncodeError::MalformedBigInt(digits.clone()));
                }
                self.writer.u8(Tag::BigInt as u8);
                self.write_size(digits.len())?;
                self.writer.utf8(digits);
            }
            WireValue::F64(v) => {
                self.writer.u8(Tag::F64 as u8);
                self.writer.pad_to(8);
                self.writer.f64(*v);
            }
            WireValue::Str(s) => self.write_str(s)?,
            WireValue::Bytes(bytes) => {
                self.writer.u8(Tag::Bytes as u8);
                self.write_size(bytes.len())?;
                self.writer.buf(bytes);
            }
            WireValue::I32Array(arr) => {
                self.writer.u8(Tag::I32Array as u8);
                self.write_size(arr.len())?;
                self.writer.pad_to(4);
                for v in arr {
                    self.writer.i32(*v);
                }
            }
            WireValue::I64Array(arr) => {
                self.writer.u8(Tag::I64Array as u8);
                self.write_size(arr.len())?;
                self.writer.pad_to(8);
                for v in arr {
                    self.writer.i64(*v);
                }
            }
            WireValue::F64Array(arr) => {
                self.writer.u8(Tag::F64Array as u8);
                self.write_size(arr.len())?;
                self.writer.pad_to(8);
                for v in arr {
                    self.writer.f64(*v);
                }
            }
            WireValue::List(items) => {
                self.writer.u8(Tag::List as u8);
                self.write_size(items.len())?;
                for item in items {
                    self.write_value(item, depth + 1)?;
                }
            }
            WireValue::Map(pairs) => {
                self.writer.u8(Tag::Map as u8);
                self.write_size(pairs.len())?;
                for (key, val) in pairs {
                    self.write_value(key, depth + 1)?;
                    self.write_value(val, depth + 1)?;
                }
            }
        }
        Ok(())
    }

    /// Appends a string value (tag + size + UTF-8 bytes).
    pub fn write_str(&mut self, s: &str) -> Result<(), EncodeError> {
        self.writer.u8(Tag::Str as u8);
        self.write_size(s.len())?;
        self.writer.utf8(s);
        Ok(())
    }

    /// Writes a count in the smallest of the three size-field widths.
    fn write_size(&mut self, n: usize) -> Result<(), EncodeError> {
        if n < SIZE_U16 as usize {
            self.writer.u8(n as u8);
        } else if n <= u16::MAX as usize {
            self.writer.u8(SIZE_U16);
            self.writer.u16(n as u16);
        } else if n <= u32::MAX as usize {
            self.writer.u8(SIZE_U32);
            self.writer.u32(n as u32);
        } else {
            return Err(EncodeError::SizeOverflow(n));
        }
        Ok(())
    }
}

fn is_decimal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: &WireValue) -> Vec<u8> {
        StandardEncoder::new().encode(value).expect("encode")
    }

    #[test]
    fn scalars_without_payload() {
        assert_eq!(encode(&WireValue::Null), [0]);
        assert_eq!(encode(&WireValue::Bool(true)), [1]);
        assert_eq!(encode(&WireValue::Bool(false)), [2]);
    }

    #[test]
    fn i32_pads_to_four() {
        assert_eq!(encode(&WireValue::I32(1)), [3, 0, 0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn i64_pads_to_eight() {
        assert_eq!(
            encode(&WireValue::I64(-2)),
            [4, 0, 0, 0, 0, 0, 0, 0, 0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
        );
    }

    #[test]
    fn f64_big_endian() {
        let mut enc = StandardEncoder::with_endian(Endian::Big);
        let bytes = enc.encode(&WireValue::F64(0.5)).unwrap();
        assert_eq!(bytes, [6, 0, 0, 0, 0, 0, 0, 0, 0x3f, 0xe0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn string_is_size_prefixed_without_terminator() {
        assert_eq!(encode(&WireValue::from("abc")), [7, 3, b'a', b'b', b'c']);
    }

    #[test]
    fn bigint_is_decimal_text() {
        assert_eq!(
            encode(&WireValue::BigInt("-12".to_owned())),
            [5, 3, b'-', b'1', b'2']
        );
    }

    #[test]
    fn bigint_rejects_non_decimal() {
        for bad in ["", "-", "0x1f", "1.5", "1e9", "12a"] {
            let err = StandardEncoder::new()
                .encode(&WireValue::BigInt(bad.to_owned()))
                .unwrap_err();
            assert_eq!(err, EncodeError::MalformedBigInt(bad.to_owned()));
        }
    }

    #[test]
    fn i32_array_pads_after_the_count() {
        assert_eq!(
            encode(&WireValue::I32Array(vec![1, -1])),
            [9, 2, 0, 0, 1, 0, 0, 0, 0xff, 0xff, 0xff, 0xff]
        );
    }

    #[test]
    fn size_field_width_boundaries() {
        let cases: &[(usize, &[u8])] = &[
            (0, &[0]),
            (253, &[253]),
            (254, &[254, 254, 0]),
            (65535, &[254, 0xff, 0xff]),
            (65536, &[255, 0, 0, 1, 0]),
        ];
        for (n, expect) in cases {
            let bytes = encode(&WireValue::Bytes(vec![0u8; *n]));
            assert_eq!(bytes[0], 8);
            assert_eq!(&bytes[1..1 + expect.len()], *expect, "count {}", n);
            assert_eq!(bytes.len(), 1 + expect.len() + n);
        }
    }

    #[test]
    fn nesting_beyond_the_limit_is_rejected() {
        let mut value = WireValue::Null;
        for _ in 0..MAX_NESTING_DEPTH + 1 {
            value = WireValue::List(vec![value]);
        }
        let err = StandardEncoder::new().encode(&value).unwrap_err();
        assert_eq!(err, EncodeError::NestingTooDeep);
    }

    #[test]
    fn nesting_under_the_limit_encodes() {
        let mut value = WireValue::Null;
        for _ in 0..MAX_NESTING_DEPTH - 1 {
            value = WireValue::List(vec![value]);
        }
        assert!(StandardEncoder::new().encode(&value).is_ok());
    }

    #[test]
    fn nested_alignment_counts_from_message_start() {
        // List tag + count + string value, then an F64 whose payload must
        // land on a multiple of 8 from the very first byte.
        let bytes = encode(&WireValue::List(vec![
            WireValue::from("ab"),
            WireValue::F64(0.5),
        ]));
        // 12, 2, 7, 2, 'a', 'b', 6, pad, payload at 8.
        assert_eq!(&bytes[..7], &[12, 2, 7, 2, b'a', b'b', 6]);
        assert_eq!(bytes[7], 0);
        assert_eq!(&bytes[8..], &0.5f64.to_le_bytes());
    }
}
