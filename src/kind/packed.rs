//! Packed date, datetime and decimal storage records.

use super::{sealed, PhysicalKind, PhysicalType};
use crate::{
    codec::{
        decode_packed_date, decode_packed_datetime, decode_packed_decimal, encode_packed_date,
        encode_packed_datetime, encode_packed_decimal, read_array, PACKED_DATETIME_WIDTH,
        PACKED_DATE_WIDTH, PACKED_DECIMAL_WIDTH,
    },
    error::Result,
    materialized::{downcast_target, DateTimeColumn, DecimalColumn, MaterializedColumn},
    value::{DateTimeValue, DecimalV2Value},
};

/// A date stored as a 3-byte little-endian day count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackedDate([u8; PACKED_DATE_WIDTH]);

impl PackedDate {
    /// Pack a day count. Bits above the low 24 are dropped.
    pub fn from_day_number(day_number: u32) -> Self {
        Self(encode_packed_date(day_number))
    }

    /// The stored day count.
    pub fn day_number(&self) -> u32 {
        decode_packed_date(&self.0)
    }

    /// Storage bytes.
    pub fn to_bytes(self) -> [u8; PACKED_DATE_WIDTH] {
        self.0
    }

    /// Convert to the engine's date value.
    ///
    /// Day counts past `9999-12-31` have no calendar date and become the zero
    /// date.
    #[inline]
    pub fn to_datetime_value(self) -> DateTimeValue {
        DateTimeValue::from_day_number(self.day_number()).unwrap_or_default()
    }
}

impl sealed::Sealed for PackedDate {}

impl<'a> PhysicalType<'a> for PackedDate {
    const KIND: PhysicalKind = PhysicalKind::Date;

    #[inline]
    fn decode(bytes: &'a [u8]) -> Self {
        Self([bytes[0], bytes[1], bytes[2]])
    }

    fn materialize(
        values: &[Self],
        selection: &[u16],
        target: &mut dyn MaterializedColumn,
    ) -> Result<()> {
        let target = downcast_target::<DateTimeColumn>(target, Self::KIND);
        for &row in selection {
            target.push(values[usize::from(row)].to_datetime_value());
        }
        Ok(())
    }
}

/// A datetime stored as an 8-byte `YYYYMMDDhhmmss` integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackedDateTime(u64);

impl PackedDateTime {
    /// Wrap a packed `YYYYMMDDhhmmss` integer.
    pub const fn new(packed: u64) -> Self {
        Self(packed)
    }

    /// The packed integer.
    pub fn packed(&self) -> u64 {
        self.0
    }

    /// Storage bytes.
    pub fn to_bytes(self) -> [u8; PACKED_DATETIME_WIDTH] {
        encode_packed_datetime(self.0)
    }

    /// Convert to the engine's datetime value.
    #[inline]
    pub fn to_datetime_value(self) -> DateTimeValue {
        DateTimeValue::from_olap_datetime(self.0)
    }
}

impl sealed::Sealed for PackedDateTime {}

impl<'a> PhysicalType<'a> for PackedDateTime {
    const KIND: PhysicalKind = PhysicalKind::DateTime;

    #[inline]
    fn decode(bytes: &'a [u8]) -> Self {
        Self(decode_packed_datetime(bytes))
    }

    fn materialize(
        values: &[Self],
        selection: &[u16],
        target: &mut dyn MaterializedColumn,
    ) -> Result<()> {
        let target = downcast_target::<DateTimeColumn>(target, Self::KIND);
        for &row in selection {
            target.push(values[usize::from(row)].to_datetime_value());
        }
        Ok(())
    }
}

/// A decimal stored as its 12-byte record: an `i64` integer part followed
/// by an `i32` fraction in 10^-9 units, both little-endian.
///
/// The record is kept as bytes; the fields are split only when a row is
/// read or materialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackedDecimal([u8; PACKED_DECIMAL_WIDTH]);

impl PackedDecimal {
    /// Build a record from its parts.
    pub fn new(integer: i64, fraction: i32) -> Self {
        Self(encode_packed_decimal(integer, fraction))
    }

    /// Integer part.
    pub fn integer(&self) -> i64 {
        decode_packed_decimal(&self.0).0
    }

    /// Fraction part in 10^-9 units.
    pub fn fraction(&self) -> i32 {
        decode_packed_decimal(&self.0).1
    }

    /// Storage bytes.
    pub fn to_bytes(self) -> [u8; PACKED_DECIMAL_WIDTH] {
        self.0
    }

    /// Convert to the engine's decimal value.
    #[inline]
    pub fn to_decimal_value(self) -> DecimalV2Value {
        let (integer, fraction) = decode_packed_decimal(&self.0);
        DecimalV2Value::from_parts(integer, fraction)
    }
}

impl sealed::Sealed for PackedDecimal {}

impl<'a> PhysicalType<'a> for PackedDecimal {
    const KIND: PhysicalKind = PhysicalKind::Decimal;

    #[inline]
    fn decode(bytes: &'a [u8]) -> Self {
        Self(read_array(bytes))
    }

    fn materialize(
        values: &[Self],
        selection: &[u16],
        target: &mut dyn MaterializedColumn,
    ) -> Result<()> {
        let target = downcast_target::<DecimalColumn>(target, Self::KIND);
        for &row in selection {
            target.push(values[usize::from(row)].to_decimal_value());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_round_trips_bytes() {
        let date = <PackedDate as PhysicalType>::decode(&[0x01, 0x00, 0x00]);
        assert_eq!(date.day_number(), 1);
        assert_eq!(date.to_datetime_value(), DateTimeValue::date(1, 1, 1));
        assert_eq!(PackedDate::from_day_number(1).to_bytes(), [0x01, 0x00, 0x00]);
    }

    #[test]
    fn date_past_calendar_is_zero_date() {
        let date = PackedDate::from_day_number(0xFF_FFFF);
        assert_eq!(date.to_datetime_value(), DateTimeValue::default());
    }

    #[test]
    fn datetime_decodes_packed_integer() {
        let bytes = PackedDateTime::new(20200102_030405).to_bytes();
        let value = <PackedDateTime as PhysicalType>::decode(&bytes);
        assert_eq!(value.packed(), 20200102_030405);
        assert_eq!(
            value.to_datetime_value(),
            DateTimeValue::datetime(2020, 1, 2, 3, 4, 5)
        );
    }

    #[test]
    fn decimal_splits_record() {
        let bytes = PackedDecimal::new(12345, 670_000_000).to_bytes();
        let value = <PackedDecimal as PhysicalType>::decode(&bytes);
        assert_eq!(value.integer(), 12345);
        assert_eq!(value.fraction(), 670_000_000);
        assert_eq!(value.to_decimal_value().to_string(), "12345.670000000");
    }

    #[test]
    fn decimal_record_is_twelve_bytes() {
        assert_eq!(std::mem::size_of::<PackedDecimal>(), PACKED_DECIMAL_WIDTH);
        let bytes = encode_packed_decimal(-9, -1);
        let value = <PackedDecimal as PhysicalType>::decode(&bytes);
        assert_eq!(value.to_bytes(), bytes);
        assert_eq!((value.integer(), value.fraction()), (-9, -1));
        assert_eq!(PackedDecimal::default(), PackedDecimal::new(0, 0));
    }
}
