//! SECS-II item header encoding and fixed-width payload helpers.
//!
//! An item on the wire is a header followed by its data:
//!
//! ```text
//! +--------------------------+-----------------+------------------+
//! | format (6 bits) | n (2b) | length (n bytes)| data (length B)  |
//! +--------------------------+-----------------+------------------+
//! ```
//!
//! `n` is 1, 2 or 3, the length is big-endian and counts data bytes, so an item
//! holds at most [`MAX_BYTE_SIZE`] bytes of data.

use crate::ast::ItemError;
use byteorder::{BigEndian, ByteOrder};

/// Largest data length a header can describe (three length bytes).
pub const MAX_BYTE_SIZE: usize = 0xFF_FFFF;

/// SECS-II format codes (6-bit, usually written in octal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatCode {
    List,
    Binary,
    Boolean,
    Ascii,
    Jis8,
    I8,
    I1,
    I2,
    I4,
    F8,
    F4,
    U8,
    U1,
    U2,
    U4,
}

impl FormatCode {
    /// The 6-bit format code.
    pub fn code(self) -> u8 {
        match self {
            FormatCode::List => 0o00,
            FormatCode::Binary => 0o10,
            FormatCode::Boolean => 0o11,
            FormatCode::Ascii => 0o20,
            FormatCode::Jis8 => 0o21,
            FormatCode::I8 => 0o30,
            FormatCode::I1 => 0o31,
            FormatCode::I2 => 0o32,
            FormatCode::I4 => 0o34,
            FormatCode::F8 => 0o40,
            FormatCode::F4 => 0o44,
            FormatCode::U8 => 0o50,
            FormatCode::U1 => 0o51,
            FormatCode::U2 => 0o52,
            FormatCode::U4 => 0o54,
        }
    }

    /// Lower-case tag as used in item text, e.g. `"u4"`.
    pub fn tag(self) -> &'static str {
        match self {
            FormatCode::List => "l",
            FormatCode::Binary => "b",
            FormatCode::Boolean => "boolean",
            FormatCode::Ascii => "a",
            FormatCode::Jis8 => "j",
            FormatCode::I8 => "i8",
            FormatCode::I1 => "i1",
            FormatCode::I2 => "i2",
            FormatCode::I4 => "i4",
            FormatCode::F8 => "f8",
            FormatCode::F4 => "f4",
            FormatCode::U8 => "u8",
            FormatCode::U1 => "u1",
            FormatCode::U2 => "u2",
            FormatCode::U4 => "u4",
        }
    }

    /// Unsigned-integer format for a byte width, if the width is 1, 2, 4 or 8.
    pub fn unsigned(byte_width: usize) -> Option<Self> {
        match byte_width {
            1 => Some(FormatCode::U1),
            2 => Some(FormatCode::U2),
            4 => Some(FormatCode::U4),
            8 => Some(FormatCode::U8),
            _ => None,
        }
    }

    /// Bytes per element. A list counts one "byte" per child item.
    pub fn element_size(self) -> usize {
        match self {
            FormatCode::List
            | FormatCode::Binary
            | FormatCode::Boolean
            | FormatCode::Ascii
            | FormatCode::Jis8
            | FormatCode::I1
            | FormatCode::U1 => 1,
            FormatCode::I2 | FormatCode::U2 => 2,
            FormatCode::I4 | FormatCode::F4 | FormatCode::U4 => 4,
            FormatCode::I8 | FormatCode::F8 | FormatCode::U8 => 8,
        }
    }
}

/// Data length in bytes of an item with `count` elements (header excluded).
pub fn data_byte_length(format: FormatCode, count: usize) -> usize {
    count.saturating_mul(format.element_size())
}

/// Encode the item header for `count` elements of `format`.
pub fn encode_header(format: FormatCode, count: usize) -> Result<Vec<u8>, ItemError> {
    let length = data_byte_length(format, count);
    if length > MAX_BYTE_SIZE {
        return Err(ItemError::SizeLimitExceeded {
            length,
            max: MAX_BYTE_SIZE,
        });
    }
    let n = if length <= 0xFF {
        1
    } else if length <= 0xFFFF {
        2
    } else {
        3
    };
    let mut out = vec![0u8; 1 + n];
    out[0] = (format.code() << 2) | n as u8;
    BigEndian::write_uint(&mut out[1..], length as u64, n);
    Ok(out)
}

/// Append each value as `width` big-endian bytes. `width` must be 1..=8 and every
/// value must fit in it.
pub fn write_be_fields(out: &mut Vec<u8>, values: &[u64], width: usize) {
    let start = out.len();
    out.resize(start + values.len() * width, 0);
    for (chunk, &v) in out[start..].chunks_exact_mut(width).zip(values) {
        BigEndian::write_uint(chunk, v, width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_u4_one_length_byte() {
        let h = encode_header(FormatCode::U4, 2).unwrap();
        assert_eq!(h, vec![0xB1, 0x08]);
    }

    #[test]
    fn header_unsigned_codes() {
        assert_eq!(encode_header(FormatCode::U1, 0).unwrap(), vec![0xA5, 0x00]);
        assert_eq!(encode_header(FormatCode::U2, 1).unwrap(), vec![0xA9, 0x02]);
        assert_eq!(encode_header(FormatCode::U8, 1).unwrap(), vec![0xA1, 0x08]);
    }

    #[test]
    fn header_grows_length_bytes() {
        assert_eq!(encode_header(FormatCode::U1, 256).unwrap(), vec![0xA6, 0x01, 0x00]);
        assert_eq!(
            encode_header(FormatCode::U1, 0x1_0000).unwrap(),
            vec![0xA7, 0x01, 0x00, 0x00]
        );
        assert_eq!(
            encode_header(FormatCode::U1, MAX_BYTE_SIZE).unwrap(),
            vec![0xA7, 0xFF, 0xFF, 0xFF]
        );
    }

    #[test]
    fn header_rejects_oversize() {
        let err = encode_header(FormatCode::U2, MAX_BYTE_SIZE / 2 + 1).unwrap_err();
        assert_eq!(
            err,
            ItemError::SizeLimitExceeded {
                length: MAX_BYTE_SIZE + 1,
                max: MAX_BYTE_SIZE
            }
        );
    }

    #[test]
    fn unsigned_formats() {
        assert_eq!(FormatCode::unsigned(2).map(FormatCode::tag), Some("u2"));
        assert_eq!(FormatCode::unsigned(3), None);
    }

    #[test]
    fn be_fields() {
        let mut out = vec![0xAA];
        write_be_fields(&mut out, &[0x01AB_CDEF, 2], 4);
        assert_eq!(out, vec![0xAA, 0x01, 0xAB, 0xCD, 0xEF, 0, 0, 0, 2]);
    }
}
