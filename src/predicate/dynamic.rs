use super::{Dictionary, PredicateColumn};
use crate::{
    error::Result,
    kind::{PackedDate, PackedDateTime, PackedDecimal, PhysicalKind, StrView},
    materialized::MaterializedColumn,
    observability::log_debug,
};

/// Predicate column whose physical kind is chosen at runtime.
///
/// Scanners that only learn a column's storage kind from the segment
/// footer hold one of these. Every call matches on the tag once and then
/// runs the typed [`PredicateColumn`] loop, so per-row work is the same as
/// the typed path.
#[derive(Debug)]
pub enum AnyPredicateColumn<'a> {
    /// `i8` values.
    Int8(PredicateColumn<i8>),
    /// `i16` values.
    Int16(PredicateColumn<i16>),
    /// `i32` values.
    Int32(PredicateColumn<i32>),
    /// `i64` values.
    Int64(PredicateColumn<i64>),
    /// `i128` values.
    Int128(PredicateColumn<i128>),
    /// `f32` values.
    Float32(PredicateColumn<f32>),
    /// `f64` values.
    Float64(PredicateColumn<f64>),
    /// One-byte booleans.
    Boolean(PredicateColumn<bool>),
    /// `u8` values.
    UInt8(PredicateColumn<u8>),
    /// `u16` values.
    UInt16(PredicateColumn<u16>),
    /// `u32` values.
    UInt32(PredicateColumn<u32>),
    /// `u64` values.
    UInt64(PredicateColumn<u64>),
    /// Packed dates.
    Date(PredicateColumn<PackedDate>),
    /// Packed datetimes.
    DateTime(PredicateColumn<PackedDateTime>),
    /// Packed decimals.
    Decimal(PredicateColumn<PackedDecimal>),
    /// String views into an arena living for `'a`.
    String(PredicateColumn<StrView<'a>>),
}

macro_rules! dispatch {
    ($self:expr, $column:ident => $body:expr) => {
        match $self {
            AnyPredicateColumn::Int8($column) => $body,
            AnyPredicateColumn::Int16($column) => $body,
            AnyPredicateColumn::Int32($column) => $body,
            AnyPredicateColumn::Int64($column) => $body,
            AnyPredicateColumn::Int128($column) => $body,
            AnyPredicateColumn::Float32($column) => $body,
            AnyPredicateColumn::Float64($column) => $body,
            AnyPredicateColumn::Boolean($column) => $body,
            AnyPredicateColumn::UInt8($column) => $body,
            AnyPredicateColumn::UInt16($column) => $body,
            AnyPredicateColumn::UInt32($column) => $body,
            AnyPredicateColumn::UInt64($column) => $body,
            AnyPredicateColumn::Date($column) => $body,
            AnyPredicateColumn::DateTime($column) => $body,
            AnyPredicateColumn::Decimal($column) => $body,
            AnyPredicateColumn::String($column) => $body,
        }
    };
}

impl<'a> AnyPredicateColumn<'a> {
    /// Create an empty column of `kind`.
    pub fn new(kind: PhysicalKind) -> Self {
        Self::with_capacity(kind, 0)
    }

    /// Create an empty column of `kind` with room for `capacity` rows.
    pub fn with_capacity(kind: PhysicalKind, capacity: usize) -> Self {
        log_debug!(
            component = "any_column",
            event = "any_column_created",
            kind = ?kind,
            capacity,
        );
        match kind {
            PhysicalKind::Int8 => Self::Int8(PredicateColumn::with_capacity(capacity)),
            PhysicalKind::Int16 => Self::Int16(PredicateColumn::with_capacity(capacity)),
            PhysicalKind::Int32 => Self::Int32(PredicateColumn::with_capacity(capacity)),
            PhysicalKind::Int64 => Self::Int64(PredicateColumn::with_capacity(capacity)),
            PhysicalKind::Int128 => Self::Int128(PredicateColumn::with_capacity(capacity)),
            PhysicalKind::Float32 => Self::Float32(PredicateColumn::with_capacity(capacity)),
            PhysicalKind::Float64 => Self::Float64(PredicateColumn::with_capacity(capacity)),
            PhysicalKind::Boolean => Self::Boolean(PredicateColumn::with_capacity(capacity)),
            PhysicalKind::UInt8 => Self::UInt8(PredicateColumn::with_capacity(capacity)),
            PhysicalKind::UInt16 => Self::UInt16(PredicateColumn::with_capacity(capacity)),
            PhysicalKind::UInt32 => Self::UInt32(PredicateColumn::with_capacity(capacity)),
            PhysicalKind::UInt64 => Self::UInt64(PredicateColumn::with_capacity(capacity)),
            PhysicalKind::Date => Self::Date(PredicateColumn::with_capacity(capacity)),
            PhysicalKind::DateTime => Self::DateTime(PredicateColumn::with_capacity(capacity)),
            PhysicalKind::Decimal => Self::Decimal(PredicateColumn::with_capacity(capacity)),
            PhysicalKind::String => Self::String(PredicateColumn::with_capacity(capacity)),
        }
    }

    /// Physical kind held by this column.
    pub fn kind(&self) -> PhysicalKind {
        dispatch!(self, column => column.kind())
    }

    /// Number of rows appended.
    pub fn len(&self) -> usize {
        dispatch!(self, column => column.len())
    }

    /// Whether no rows have been appended.
    pub fn is_empty(&self) -> bool {
        dispatch!(self, column => column.is_empty())
    }

    /// See [`PredicateColumn::byte_size`].
    pub fn byte_size(&self) -> usize {
        dispatch!(self, column => column.byte_size())
    }

    /// See [`PredicateColumn::allocated_bytes`].
    pub fn allocated_bytes(&self) -> usize {
        dispatch!(self, column => column.allocated_bytes())
    }

    /// See [`PredicateColumn::reserve`].
    pub fn reserve(&mut self, additional: usize) {
        dispatch!(self, column => column.reserve(additional))
    }

    /// See [`PredicateColumn::clear`].
    pub fn clear(&mut self) {
        dispatch!(self, column => column.clear())
    }

    /// See [`PredicateColumn::append_default`].
    pub fn append_default(&mut self) {
        dispatch!(self, column => column.append_default())
    }

    /// See [`PredicateColumn::append_raw`].
    pub fn append_raw(&mut self, bytes: &'a [u8]) {
        dispatch!(self, column => column.append_raw(bytes))
    }

    /// See [`PredicateColumn::append_fixed`].
    pub fn append_fixed(&mut self, bytes: &'a [u8], count: usize) {
        dispatch!(self, column => column.append_fixed(bytes, count))
    }

    /// See [`PredicateColumn::append_dict`].
    pub fn append_dict(
        &mut self,
        codes: &[i32],
        start: usize,
        dict: &Dictionary<'a>,
        count: usize,
    ) {
        if let Self::String(column) = self {
            column.append_dict(codes, start, dict, count);
        }
    }

    /// See [`PredicateColumn::append_binary`].
    pub fn append_binary(
        &mut self,
        data: &'a [u8],
        lengths: &[u32],
        offsets: &[u32],
        count: usize,
    ) {
        if let Self::String(column) = self {
            column.append_binary(data, lengths, offsets, count);
        }
    }

    /// See [`PredicateColumn::materialize`].
    pub fn materialize(
        &self,
        selection: &[u16],
        target: &mut dyn MaterializedColumn,
    ) -> Result<()> {
        dispatch!(self, column => column.materialize(selection, target))
    }

    /// Create an empty output column matching this column's kind.
    pub fn output_column(&self, capacity: usize) -> Result<Box<dyn MaterializedColumn>> {
        self.kind().output_column(capacity)
    }
}

#[cfg(test)]
mod tests {
    use arrow::array::{Array, BinaryArray, Int32Array};

    use super::*;
    use crate::{codec::encode_packed_decimal, PredicateColumnError};

    #[test]
    fn every_kind_round_trips_its_tag() {
        for kind in PhysicalKind::ALL {
            let mut column = AnyPredicateColumn::new(kind);
            assert_eq!(column.kind(), kind);
            column.append_default();
            column.append_default();
            assert_eq!(column.len(), 2);
            column.clear();
            assert!(column.is_empty());
        }
    }

    #[test]
    fn fixed_bulk_append_grows_by_count() {
        let zeros = [0u8; 16 * 4];
        for kind in PhysicalKind::ALL {
            let mut column = AnyPredicateColumn::new(kind);
            column.append_fixed(&zeros, 4);
            let expected = if kind.is_variable_length() { 0 } else { 4 };
            assert_eq!(column.len(), expected, "{kind:?}");
        }
    }

    #[test]
    fn materializes_through_output_column() {
        let mut column = AnyPredicateColumn::new(PhysicalKind::Int32);
        let bytes: Vec<u8> = (0i32..6).flat_map(|v| v.to_le_bytes()).collect();
        column.append_fixed(&bytes, 6);

        let mut target = column.output_column(3).unwrap();
        column.materialize(&[0, 2, 5], target.as_mut()).unwrap();

        let array = target.finish();
        let array = array.as_any().downcast_ref::<Int32Array>().unwrap();
        assert_eq!(array.values().as_ref(), &[0, 2, 5]);
    }

    #[test]
    fn string_column_uses_dictionary() {
        let data = b"northsouth".to_vec();
        let offsets = [0u32, 5];
        let lengths = [5u32, 5];
        let dict = Dictionary::new(&data, &offsets, &lengths);

        let mut column = AnyPredicateColumn::new(PhysicalKind::String);
        column.append_dict(&[1, 0, 1], 0, &dict, 3);

        let mut target = column.output_column(2).unwrap();
        column.materialize(&[0, 1], target.as_mut()).unwrap();
        let array = target.finish();
        let array = array.as_any().downcast_ref::<BinaryArray>().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array.value(0), b"south");
        assert_eq!(array.value(1), b"north");
    }

    #[test]
    fn decimal_column_accepts_raw_records() {
        let record = encode_packed_decimal(-2, -500_000_000);
        let mut column = AnyPredicateColumn::new(PhysicalKind::Decimal);
        column.append_raw(&record);
        assert_eq!(column.byte_size(), column.len() * 12);

        let mut target = column.output_column(1).unwrap();
        column.materialize(&[0], target.as_mut()).unwrap();
        assert_eq!(target.len(), 1);
    }

    #[test]
    fn unsigned_column_is_unsupported() {
        let mut column = AnyPredicateColumn::new(PhysicalKind::UInt32);
        column.append_raw(&[1, 0, 0, 0]);
        assert_eq!(
            column.output_column(1).err(),
            Some(PredicateColumnError::UnsupportedOutputType {
                kind: PhysicalKind::UInt32
            })
        );
    }
}
