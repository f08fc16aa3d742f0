//! Binary buffer writer with auto-growing capacity.

use crate::Endian;

/// A binary buffer writer that grows automatically as needed.
///
/// Multi-byte scalars are written in the byte order the writer was
/// constructed with.
///
/// # Example
///
/// ```
/// use channel_buffers::{Endian, Writer};
///
/// let mut writer = Writer::with_endian(Endian::Big);
/// writer.u8(0x01);
/// writer.u16(0x0203);
/// let data = writer.flush();
/// assert_eq!(data, [0x01, 0x02, 0x03]);
/// ```
pub struct Writer {
    /// The underlying byte buffer.
    pub uint8: Vec<u8>,
    /// Position where last flush happened.
    pub x0: usize,
    /// Current cursor position.
    pub x: usize,
    /// Allocation size when buffer needs to grow.
    alloc_size: usize,
    endian: Endian,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a little-endian writer with default allocation size (64KB).
    pub fn new() -> Self {
        Self::with_endian(Endian::Little)
    }

    /// Creates a writer with the given byte order.
    pub fn with_endian(endian: Endian) -> Self {
        Self::with_alloc_size(64 * 1024, endian)
    }

    /// Creates a writer with custom allocation size and byte order.
    pub fn with_alloc_size(alloc_size: usize, endian: Endian) -> Self {
        let uint8 = vec![0u8; alloc_size];
        Self {
            uint8,
            x0: 0,
            x: 0,
            alloc_size,
            endian,
        }
    }

    /// Returns the writer's byte order.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Number of bytes written since the last flush.
    pub fn written(&self) -> usize {
        self.x - self.x0
    }

    /// Ensures the buffer has at least `capacity` bytes available.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        let remaining = self.uint8.len() - self.x;
        if remaining < capacity {
            let total = self.uint8.len() - self.x0;
            let required = capacity - remaining;
            let total_required = total + required;
            let new_size = if total_required <= self.alloc_size {
                self.alloc_size
            } else {
                total_required * 2
            };
            self.grow(new_size);
        }
    }

    fn grow(&mut self, new_size: usize) {
        let x0 = self.x0;
        let x = self.x;
        let mut new_buf = vec![0u8; new_size];
        new_buf[..x - x0].copy_from_slice(&self.uint8[x0..x]);
        self.uint8 = new_buf;
        self.x = x - x0;
        self.x0 = 0;
    }

    /// Resets the flush position.
    pub fn reset(&mut self) {
        self.x0 = self.x;
    }

    /// Returns the written data and advances the flush position.
    pub fn flush(&mut self) -> Vec<u8> {
        let result = self.uint8[self.x0..self.x].to_vec();
        self.x0 = self.x;
        result
    }

    /// Writes zero bytes until the next write lands on a multiple of `align`,
    /// measured from the flush position (the start of the current message).
    pub fn pad_to(&mut self, align: usize) {
        let pad = (align - (self.written() % align)) % align;
        for _ in 0..pad {
            self.u8(0);
        }
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.ensure_capacity(1);
        self.uint8[self.x] = val;
        self.x += 1;
    }

    /// Writes an unsigned 16-bit integer.
    #[inline]
    pub fn u16(&mut self, val: u16) {
        let bytes = match self.endian {
            Endian::Little => val.to_le_bytes(),
            Endian::Big => val.to_be_bytes(),
        };
        self.buf(&bytes);
    }

    /// Writes an unsigned 32-bit integer.
    #[inline]
    pub fn u32(&mut self, val: u32) {
        let bytes = match self.endian {
            Endian::Little => val.to_le_bytes(),
            Endian::Big => val.to_be_bytes(),
        };
        self.buf(&bytes);
    }

    /// Writes a signed 32-bit integer.
    #[inline]
    pub fn i32(&mut self, val: i32) {
        let bytes = match self.endian {
            Endian::Little => val.to_le_bytes(),
            Endian::Big => val.to_be_bytes(),
        };
        self.buf(&bytes);
    }

    /// Writes a signed 64-bit integer.
    #[inline]
    pub fn i64(&mut self, val: i64) {
        let bytes = match self.endian {
            Endian::Little => val.to_le_bytes(),
            Endian::Big => val.to_be_bytes(),
        };
        self.buf(&bytes);
    }

    /// Writes a 64-bit floating point number.
    #[inline]
    pub fn f64(&mut self, val: f64) {
        let bytes = match self.endian {
            Endian::Little => val.to_le_bytes(),
            Endian::Big => val.to_be_bytes(),
        };
        self.buf(&bytes);
    }

    /// Writes a byte slice.
    pub fn buf(&mut self, buf: &[u8]) {
        let length = buf.len();
        self.ensure_capacity(length);
        self.uint8[self.x..self.x + length].copy_from_slice(buf);
        self.x += length;
    }

    /// Writes a UTF-8 string (no terminator).
    pub fn utf8(&mut self, s: &str) {
        self.buf(s.as_bytes());
    }
}
