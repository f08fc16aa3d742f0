//! Binary buffer reader with cursor tracking and bounds checking.

use std::str;

use crate::{BufferError, Endian};

/// A binary buffer reader over a borrowed byte slice.
///
/// Every read is bounds-checked: running off the end of the slice surfaces
/// as [`BufferError::UnexpectedEof`], never as a panic. Multi-byte scalars
/// are read in the byte order the reader was constructed with.
///
/// # Example
///
/// ```
/// use channel_buffers::{Endian, Reader};
///
/// let data = [0x01, 0x02, 0x03];
/// let mut reader = Reader::with_endian(&data, Endian::Big);
///
/// assert_eq!(reader.u8().unwrap(), 0x01);
/// assert_eq!(reader.u16().unwrap(), 0x0203);
/// assert_eq!(reader.remaining(), 0);
/// ```
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
    endian: Endian,
}

impl<'a> Reader<'a> {
    /// Creates a little-endian reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self::with_endian(uint8, Endian::Little)
    }

    /// Creates a reader with the given byte order.
    pub fn with_endian(uint8: &'a [u8], endian: Endian) -> Self {
        Self { uint8, x: 0, endian }
    }

    /// Returns the reader's byte order.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Returns the number of remaining bytes.
    pub fn remaining(&self) -> usize {
        self.uint8.len() - self.x
    }

    #[inline]
    fn check(&self, n: usize) -> Result<(), BufferError> {
        if self.x + n > self.uint8.len() {
            Err(BufferError::UnexpectedEof)
        } else {
            Ok(())
        }
    }

    /// Advances the cursor by the given number of bytes.
    pub fn skip(&mut self, length: usize) -> Result<(), BufferError> {
        self.check(length)?;
        self.x += length;
        Ok(())
    }

    /// Skips padding bytes until the cursor is a multiple of `align`,
    /// measured from the start of the slice.
    pub fn align_to(&mut self, align: usize) -> Result<(), BufferError> {
        let pad = (align - (self.x % align)) % align;
        self.skip(pad)
    }

    /// Returns a subarray of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.check(size)?;
        let bin = &self.uint8[self.x..self.x + size];
        self.x += size;
        Ok(bin)
    }

    /// Reads `size` bytes as UTF-8 and advances the cursor.
    pub fn utf8(&mut self, size: usize) -> Result<&'a str, BufferError> {
        let bytes = self.buf(size)?;
        str::from_utf8(bytes).map_err(|_| BufferError::InvalidUtf8)
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        self.check(1)?;
        let val = self.uint8[self.x];
        self.x += 1;
        Ok(val)
    }

    /// Reads an unsigned 16-bit integer.
    #[inline]
    pub fn u16(&mut self) -> Result<u16, BufferError> {
        let b = self.buf(2)?;
        let bytes = [b[0], b[1]];
        Ok(match self.endian {
            Endian::Little => u16::from_le_bytes(bytes),
            Endian::Big => u16::from_be_bytes(bytes),
        })
    }

    /// Reads an unsigned 32-bit integer.
    #[inline]
    pub fn u32(&mut self) -> Result<u32, BufferError> {
        let b = self.buf(4)?;
        let bytes = [b[0], b[1], b[2], b[3]];
        Ok(match self.endian {
            Endian::Little => u32::from_le_bytes(bytes),
            Endian::Big => u32::from_be_bytes(bytes),
        })
    }

    /// Reads a signed 32-bit integer.
    #[inline]
    pub fn i32(&mut self) -> Result<i32, BufferError> {
        let b = self.buf(4)?;
        let bytes = [b[0], b[1], b[2], b[3]];
        Ok(match self.endian {
            Endian::Little => i32::from_le_bytes(bytes),
            Endian::Big => i32::from_be_bytes(bytes),
        })
    }

    /// Reads a signed 64-bit integer.
    #[inline]
    pub fn i64(&mut self) -> Result<i64, BufferError> {
        let b = self.buf(8)?;
        let bytes = [b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]];
        Ok(match self.endian {
            Endian::Little => i64::from_le_bytes(bytes),
            Endian::Big => i64::from_be_bytes(bytes),
        })
    }

    /// Reads a 64-bit floating point number.
    #[inline]
    pub fn f64(&mut self) -> Result<f64, BufferError> {
        let b = self.buf(8)?;
        let bytes = [b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]];
        Ok(match self.endian {
            Endian::Little => f64::from_le_bytes(bytes),
            Endian::Big => f64::from_be_bytes(bytes),
        })
    }
}
