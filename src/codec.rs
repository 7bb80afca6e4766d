//! Fixed-width little-endian codecs for the packed storage layouts.
//!
//! Every packed record is decoded from a byte slice field by field; nothing
//! relies on the in-memory representation of a Rust type matching the
//! storage layout.
//!
//! | Layout | Bytes | Encoding |
//! |---|---|---|
//! | packed date | 3 | unsigned day count, little-endian |
//! | packed datetime | 8 | unsigned `YYYYMMDDhhmmss` integer, little-endian |
//! | packed decimal | 12 | `i64` integer part then `i32` fraction, both little-endian |

/// Encoded width of a packed date.
pub const PACKED_DATE_WIDTH: usize = 3;
/// Encoded width of a packed datetime.
pub const PACKED_DATETIME_WIDTH: usize = 8;
/// Encoded width of a packed decimal record.
pub const PACKED_DECIMAL_WIDTH: usize = 12;

/// Largest day count a packed date can carry.
pub const MAX_PACKED_DAY_NUMBER: u32 = (1 << 24) - 1;

/// Copy the first `N` bytes of `bytes` into an array.
///
/// Panics when `bytes` is shorter than `N`; short input is a decoder bug.
#[inline]
pub fn read_array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut buf = [0u8; N];
    buf.copy_from_slice(&bytes[..N]);
    buf
}

/// Decode a 3-byte little-endian day count.
#[inline]
pub fn decode_packed_date(bytes: &[u8]) -> u32 {
    u32::from(bytes[0]) | u32::from(bytes[1]) << 8 | u32::from(bytes[2]) << 16
}

/// Encode a day count into its 3-byte little-endian form.
///
/// Bits above the low 24 are dropped.
#[inline]
pub fn encode_packed_date(day_number: u32) -> [u8; PACKED_DATE_WIDTH] {
    debug_assert!(day_number <= MAX_PACKED_DAY_NUMBER);
    let [b0, b1, b2, _] = day_number.to_le_bytes();
    [b0, b1, b2]
}

/// Decode an 8-byte little-endian packed datetime integer.
#[inline]
pub fn decode_packed_datetime(bytes: &[u8]) -> u64 {
    u64::from_le_bytes(read_array(bytes))
}

/// Encode a packed datetime integer.
#[inline]
pub fn encode_packed_datetime(packed: u64) -> [u8; PACKED_DATETIME_WIDTH] {
    packed.to_le_bytes()
}

/// Split a 12-byte decimal record into its integer and fraction parts.
#[inline]
pub fn decode_packed_decimal(bytes: &[u8]) -> (i64, i32) {
    let integer = i64::from_le_bytes(read_array(&bytes[..8]));
    let fraction = i32::from_le_bytes(read_array(&bytes[8..PACKED_DECIMAL_WIDTH]));
    (integer, fraction)
}

/// Build a 12-byte decimal record from its parts.
#[inline]
pub fn encode_packed_decimal(integer: i64, fraction: i32) -> [u8; PACKED_DECIMAL_WIDTH] {
    let mut buf = [0u8; PACKED_DECIMAL_WIDTH];
    buf[..8].copy_from_slice(&integer.to_le_bytes());
    buf[8..].copy_from_slice(&fraction.to_le_bytes());
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_date_is_little_endian() {
        assert_eq!(decode_packed_date(&[0x01, 0x00, 0x00]), 1);
        assert_eq!(decode_packed_date(&[0x00, 0x01, 0x00]), 256);
        assert_eq!(decode_packed_date(&[0xFF, 0xFF, 0xFF]), MAX_PACKED_DAY_NUMBER);
        assert_eq!(encode_packed_date(0x0A0B0C), [0x0C, 0x0B, 0x0A]);
    }

    #[test]
    fn packed_decimal_field_order() {
        let bytes = encode_packed_decimal(-7, 250_000_000);
        assert_eq!(&bytes[..8], &(-7i64).to_le_bytes());
        assert_eq!(&bytes[8..], &250_000_000i32.to_le_bytes());
        assert_eq!(decode_packed_decimal(&bytes), (-7, 250_000_000));
    }

    #[test]
    fn packed_datetime_reads_first_eight_bytes() {
        let mut bytes = encode_packed_datetime(20240229_235959).to_vec();
        bytes.push(0xAA);
        assert_eq!(decode_packed_datetime(&bytes), 20240229_235959);
    }

    #[test]
    #[should_panic]
    fn short_input_panics() {
        let _ = read_array::<4>(&[1, 2, 3]);
    }
}
