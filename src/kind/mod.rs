//! The closed set of physical storage kinds a predicate column can hold.
//!
//! Each kind is a Rust type implementing the sealed [`PhysicalType`] trait.
//! Decoding and materialization are resolved per type at compile time, so
//! the bulk-append and materialize loops carry no per-element dispatch.
//! [`PhysicalKind`] is the runtime tag of the same set.

mod packed;
mod string;

use std::fmt;

pub use packed::{PackedDate, PackedDateTime, PackedDecimal};
pub use string::StrView;

use crate::{
    codec::{read_array, PACKED_DATETIME_WIDTH, PACKED_DATE_WIDTH, PACKED_DECIMAL_WIDTH},
    error::{PredicateColumnError, Result},
    materialized::{
        downcast_target, BoolColumn, DateTimeColumn, DecimalColumn, MaterializedColumn,
        NumericColumn, StringColumn,
    },
    observability::log_warn,
};

/// Runtime tag of a physical storage kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalKind {
    /// `i8`
    Int8,
    /// `i16`
    Int16,
    /// `i32`
    Int32,
    /// `i64`
    Int64,
    /// `i128`
    Int128,
    /// `f32`
    Float32,
    /// `f64`
    Float64,
    /// One-byte boolean.
    Boolean,
    /// `u8`
    UInt8,
    /// `u16`
    UInt16,
    /// `u32`
    UInt32,
    /// `u64`
    UInt64,
    /// [`PackedDate`]
    Date,
    /// [`PackedDateTime`]
    DateTime,
    /// [`PackedDecimal`]
    Decimal,
    /// [`StrView`]
    String,
}

impl PhysicalKind {
    /// Every kind, in declaration order.
    pub const ALL: [PhysicalKind; 16] = [
        PhysicalKind::Int8,
        PhysicalKind::Int16,
        PhysicalKind::Int32,
        PhysicalKind::Int64,
        PhysicalKind::Int128,
        PhysicalKind::Float32,
        PhysicalKind::Float64,
        PhysicalKind::Boolean,
        PhysicalKind::UInt8,
        PhysicalKind::UInt16,
        PhysicalKind::UInt32,
        PhysicalKind::UInt64,
        PhysicalKind::Date,
        PhysicalKind::DateTime,
        PhysicalKind::Decimal,
        PhysicalKind::String,
    ];

    /// Width of one value in the storage encoding, `None` for strings.
    pub const fn encoded_width(self) -> Option<usize> {
        match self {
            PhysicalKind::Int8 | PhysicalKind::UInt8 | PhysicalKind::Boolean => Some(1),
            PhysicalKind::Int16 | PhysicalKind::UInt16 => Some(2),
            PhysicalKind::Int32 | PhysicalKind::UInt32 | PhysicalKind::Float32 => Some(4),
            PhysicalKind::Int64 | PhysicalKind::UInt64 | PhysicalKind::Float64 => Some(8),
            PhysicalKind::Int128 => Some(16),
            PhysicalKind::Date => Some(PACKED_DATE_WIDTH),
            PhysicalKind::DateTime => Some(PACKED_DATETIME_WIDTH),
            PhysicalKind::Decimal => Some(PACKED_DECIMAL_WIDTH),
            PhysicalKind::String => None,
        }
    }

    /// Whether values are variable-length views rather than fixed records.
    pub const fn is_variable_length(self) -> bool {
        self.encoded_width().is_none()
    }

    /// Create an empty output column this kind materializes into.
    pub fn output_column(self, capacity: usize) -> Result<Box<dyn MaterializedColumn>> {
        let column: Box<dyn MaterializedColumn> = match self {
            PhysicalKind::Int8 => Box::new(NumericColumn::<i8>::with_capacity(capacity)),
            PhysicalKind::Int16 => Box::new(NumericColumn::<i16>::with_capacity(capacity)),
            PhysicalKind::Int32 => Box::new(NumericColumn::<i32>::with_capacity(capacity)),
            PhysicalKind::Int64 => Box::new(NumericColumn::<i64>::with_capacity(capacity)),
            PhysicalKind::Int128 => Box::new(NumericColumn::<i128>::with_capacity(capacity)),
            PhysicalKind::Float32 => Box::new(NumericColumn::<f32>::with_capacity(capacity)),
            PhysicalKind::Float64 => Box::new(NumericColumn::<f64>::with_capacity(capacity)),
            PhysicalKind::Boolean => Box::new(BoolColumn::with_capacity(capacity)),
            PhysicalKind::Date | PhysicalKind::DateTime => {
                Box::new(DateTimeColumn::with_capacity(capacity))
            }
            PhysicalKind::Decimal => Box::new(DecimalColumn::with_capacity(capacity)),
            PhysicalKind::String => Box::new(StringColumn::with_capacity(capacity, 0)),
            PhysicalKind::UInt8
            | PhysicalKind::UInt16
            | PhysicalKind::UInt32
            | PhysicalKind::UInt64 => {
                return Err(PredicateColumnError::UnsupportedOutputType { kind: self })
            }
        };
        Ok(column)
    }
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A physical storage kind.
///
/// `'a` is the lifetime of the arena string views borrow from; fixed-width
/// kinds implement the trait for every `'a`. The trait is sealed: the set of
/// kinds is closed.
pub trait PhysicalType<'a>: Copy + Default + fmt::Debug + sealed::Sealed + 'a {
    /// Runtime tag of this kind.
    const KIND: PhysicalKind;

    /// Decode one value from its storage encoding.
    ///
    /// Fixed-width kinds read exactly [`PhysicalKind::encoded_width`] bytes
    /// from the front of `bytes` and panic on shorter input. Strings borrow
    /// all of `bytes`.
    fn decode(bytes: &'a [u8]) -> Self;

    /// Append `values[selection[i]]` for every `i` to `target`, in order.
    ///
    /// `target` must be the column family this kind materializes into;
    /// anything else panics. Kinds without a materialized counterpart return
    /// [`PredicateColumnError::UnsupportedOutputType`] and leave `target`
    /// untouched.
    fn materialize(
        _values: &[Self],
        selection: &[u16],
        _target: &mut dyn MaterializedColumn,
    ) -> Result<()> {
        log_warn!(
            component = "predicate_column",
            event = "materialize_unsupported",
            kind = ?Self::KIND,
            rows = selection.len(),
        );
        Err(PredicateColumnError::UnsupportedOutputType { kind: Self::KIND })
    }
}

macro_rules! implement_numeric_kind {
    ($native:ty, $kind:ident) => {
        impl sealed::Sealed for $native {}

        impl<'a> PhysicalType<'a> for $native {
            const KIND: PhysicalKind = PhysicalKind::$kind;

            #[inline]
            fn decode(bytes: &'a [u8]) -> Self {
                <$native>::from_le_bytes(read_array(bytes))
            }

            fn materialize(
                values: &[Self],
                selection: &[u16],
                target: &mut dyn MaterializedColumn,
            ) -> Result<()> {
                let target = downcast_target::<NumericColumn<$native>>(target, Self::KIND);
                for &row in selection {
                    target.push(values[usize::from(row)]);
                }
                Ok(())
            }
        }
    };
}

implement_numeric_kind!(i8, Int8);
implement_numeric_kind!(i16, Int16);
implement_numeric_kind!(i32, Int32);
implement_numeric_kind!(i64, Int64);
implement_numeric_kind!(i128, Int128);
implement_numeric_kind!(f32, Float32);
implement_numeric_kind!(f64, Float64);

// Unsigned storage integers can be evaluated by predicates through the raw
// buffer, but the engine has no unsigned column to materialize them into.
macro_rules! implement_unsigned_kind {
    ($native:ty, $kind:ident) => {
        impl sealed::Sealed for $native {}

        impl<'a> PhysicalType<'a> for $native {
            const KIND: PhysicalKind = PhysicalKind::$kind;

            #[inline]
            fn decode(bytes: &'a [u8]) -> Self {
                <$native>::from_le_bytes(read_array(bytes))
            }
        }
    };
}

implement_unsigned_kind!(u8, UInt8);
implement_unsigned_kind!(u16, UInt16);
implement_unsigned_kind!(u32, UInt32);
implement_unsigned_kind!(u64, UInt64);

impl sealed::Sealed for bool {}

impl<'a> PhysicalType<'a> for bool {
    const KIND: PhysicalKind = PhysicalKind::Boolean;

    #[inline]
    fn decode(bytes: &'a [u8]) -> Self {
        bytes[0] != 0
    }

    fn materialize(
        values: &[Self],
        selection: &[u16],
        target: &mut dyn MaterializedColumn,
    ) -> Result<()> {
        let target = downcast_target::<BoolColumn>(target, Self::KIND);
        for &row in selection {
            target.push(values[usize::from(row)]);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::mem::size_of;

    use super::*;

    #[test]
    fn numeric_widths_match_native_sizes() {
        assert_eq!(PhysicalKind::Int8.encoded_width(), Some(size_of::<i8>()));
        assert_eq!(PhysicalKind::Int16.encoded_width(), Some(size_of::<i16>()));
        assert_eq!(PhysicalKind::Int32.encoded_width(), Some(size_of::<i32>()));
        assert_eq!(PhysicalKind::Int64.encoded_width(), Some(size_of::<i64>()));
        assert_eq!(PhysicalKind::Int128.encoded_width(), Some(size_of::<i128>()));
        assert_eq!(PhysicalKind::Float32.encoded_width(), Some(size_of::<f32>()));
        assert_eq!(PhysicalKind::Float64.encoded_width(), Some(size_of::<f64>()));
        assert_eq!(PhysicalKind::UInt64.encoded_width(), Some(size_of::<u64>()));
    }

    #[test]
    fn only_strings_are_variable_length() {
        let variable: Vec<_> = PhysicalKind::ALL
            .into_iter()
            .filter(|kind| kind.is_variable_length())
            .collect();
        assert_eq!(variable, vec![PhysicalKind::String]);
    }

    #[test]
    fn output_column_families() {
        let family = |kind: PhysicalKind| kind.output_column(4).unwrap().family_name();
        assert_eq!(family(PhysicalKind::Int8), "Int8");
        assert_eq!(family(PhysicalKind::Int128), "Int128");
        assert_eq!(family(PhysicalKind::Float32), "Float32");
        assert_eq!(family(PhysicalKind::Boolean), "Boolean");
        assert_eq!(family(PhysicalKind::Date), "DateTime");
        assert_eq!(family(PhysicalKind::DateTime), "DateTime");
        assert_eq!(family(PhysicalKind::Decimal), "Decimal128");
        assert_eq!(family(PhysicalKind::String), "String");
    }

    #[test]
    fn unsigned_kinds_have_no_output_column() {
        for kind in [
            PhysicalKind::UInt8,
            PhysicalKind::UInt16,
            PhysicalKind::UInt32,
            PhysicalKind::UInt64,
        ] {
            assert_eq!(
                kind.output_column(0).err(),
                Some(PredicateColumnError::UnsupportedOutputType { kind })
            );
        }
    }

    #[test]
    fn scalar_decoding() {
        assert_eq!(<i16 as PhysicalType>::decode(&(-2i16).to_le_bytes()), -2);
        assert_eq!(<f32 as PhysicalType>::decode(&0.25f32.to_le_bytes()), 0.25);
        assert_eq!(<u32 as PhysicalType>::decode(&7u32.to_le_bytes()), 7);
        assert!(<bool as PhysicalType>::decode(&[2]));
        assert!(!<bool as PhysicalType>::decode(&[0]));
    }
}
