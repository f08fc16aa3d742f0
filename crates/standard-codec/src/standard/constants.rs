//! Wire constants of the standard value codec.

/// One-byte type tags. The table is frozen: both endpoints of a deployment
/// must use exactly these numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Tag {
    Null = 0,
    True = 1,
    False = 2,
    I32 = 3,
    I64 = 4,
    BigInt = 5,
    F64 = 6,
    Str = 7,
    Bytes = 8,
    I32Array = 9,
    I64Array = 10,
    F64Array = 11,
    List = 12,
    Map = 13,
}

impl Tag {
    pub const fn from_u8(b: u8) -> Option<Self> {
        match b {
            0 => Some(Tag::Null),
            1 => Some(Tag::True),
            2 => Some(Tag::False),
            3 => Some(Tag::I32),
            4 => Some(Tag::I64),
            5 => Some(Tag::BigInt),
            6 => Some(Tag::F64),
            7 => Some(Tag::Str),
            8 => Some(Tag::Bytes),
            9 => Some(Tag::I32Array),
            10 => Some(Tag::I64Array),
            11 => Some(Tag::F64Array),
            12 => Some(Tag::List),
            13 => Some(Tag::Map),
            _ => None,
        }
    }
}

/// Maximum container nesting depth accepted by the codec. Encode and decode
/// both dispatch recursively, so deeper trees are rejected with an error
/// instead of risking stack exhaustion.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Size-field marker: the next two bytes hold an unsigned 16-bit count.
pub const SIZE_U16: u8 = 254;
/// Size-field marker: the next four bytes hold an unsigned 32-bit count.
pub const SIZE_U32: u8 = 255;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_bytes_roundtrip() {
        for b in 0u8..=13 {
            let tag = Tag::from_u8(b).expect("known tag");
            assert_eq!(tag as u8, b);
        }
        for b in 14u8..=255 {
            assert!(Tag::from_u8(b).is_none());
        }
    }
}
