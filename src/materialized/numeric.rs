use std::{any::Any, fmt, sync::Arc};

use arrow::{
    array::{ArrayBuilder, ArrayRef, PrimitiveArray, PrimitiveBuilder},
    datatypes::{
        ArrowPrimitiveType, DataType, Decimal128Type, Float32Type, Float64Type, Int16Type,
        Int32Type, Int64Type, Int8Type,
    },
};

use super::MaterializedColumn;
use crate::codec::read_array;

mod sealed {
    pub trait Sealed {}
}

/// Native element types of [`NumericColumn`].
pub trait NumericNative:
    Copy + Default + fmt::Debug + Send + Sync + sealed::Sealed + 'static
{
    /// Arrow type whose native representation is `Self`.
    type ArrowType: ArrowPrimitiveType<Native = Self>;

    /// Column family name used in diagnostics.
    const FAMILY: &'static str;

    /// Create an empty builder with room for `capacity` values.
    fn builder(capacity: usize) -> PrimitiveBuilder<Self::ArrowType>;

    /// Decode from little-endian bytes.
    fn from_le_slice(bytes: &[u8]) -> Self;
}

macro_rules! implement_numeric_native {
    ($native:ty, $arrow:ty, $family:literal) => {
        impl sealed::Sealed for $native {}

        impl NumericNative for $native {
            type ArrowType = $arrow;

            const FAMILY: &'static str = $family;

            fn builder(capacity: usize) -> PrimitiveBuilder<Self::ArrowType> {
                PrimitiveBuilder::with_capacity(capacity)
            }

            #[inline]
            fn from_le_slice(bytes: &[u8]) -> Self {
                <$native>::from_le_bytes(read_array(bytes))
            }
        }
    };
}

implement_numeric_native!(i8, Int8Type, "Int8");
implement_numeric_native!(i16, Int16Type, "Int16");
implement_numeric_native!(i32, Int32Type, "Int32");
implement_numeric_native!(i64, Int64Type, "Int64");
implement_numeric_native!(f32, Float32Type, "Float32");
implement_numeric_native!(f64, Float64Type, "Float64");

impl sealed::Sealed for i128 {}

// Arrow has no 128-bit integer type; large integers travel as unscaled
// 38-digit decimals.
impl NumericNative for i128 {
    type ArrowType = Decimal128Type;

    const FAMILY: &'static str = "Int128";

    fn builder(capacity: usize) -> PrimitiveBuilder<Self::ArrowType> {
        PrimitiveBuilder::with_capacity(capacity).with_data_type(DataType::Decimal128(38, 0))
    }

    #[inline]
    fn from_le_slice(bytes: &[u8]) -> Self {
        i128::from_le_bytes(read_array(bytes))
    }
}

/// Vector column of one numeric width.
pub struct NumericColumn<N: NumericNative> {
    builder: PrimitiveBuilder<N::ArrowType>,
}

impl<N: NumericNative> NumericColumn<N> {
    /// Create an empty column.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty column with room for `capacity` rows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            builder: N::builder(capacity),
        }
    }

    /// Append one value.
    #[inline]
    pub fn push(&mut self, value: N) {
        self.builder.append_value(value);
    }

    /// Values appended since the last finish.
    pub fn values(&self) -> &[N] {
        self.builder.values_slice()
    }

    /// Build the typed Arrow array and reset the column.
    pub fn finish_array(&mut self) -> PrimitiveArray<N::ArrowType> {
        self.builder.finish()
    }
}

impl<N: NumericNative> Default for NumericColumn<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NumericNative> fmt::Debug for NumericColumn<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericColumn")
            .field("family", &N::FAMILY)
            .field("len", &self.builder.len())
            .finish()
    }
}

impl<N: NumericNative> MaterializedColumn for NumericColumn<N> {
    fn family_name(&self) -> &'static str {
        N::FAMILY
    }

    fn len(&self) -> usize {
        self.builder.len()
    }

    fn append_default(&mut self) {
        self.push(N::default());
    }

    fn append_raw(&mut self, bytes: &[u8]) {
        self.push(N::from_le_slice(bytes));
    }

    fn finish(&mut self) -> ArrayRef {
        Arc::new(self.finish_array())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use arrow::array::{Array, Decimal128Array};

    use super::*;

    #[test]
    fn raw_and_default_appends() {
        let mut column = NumericColumn::<i32>::new();
        column.append_raw(&7i32.to_le_bytes());
        column.append_default();
        column.push(-3);
        assert_eq!(MaterializedColumn::len(&column), 3);
        assert_eq!(column.values(), &[7, 0, -3]);

        let array = column.finish_array();
        assert_eq!(array.values().as_ref(), &[7, 0, -3]);
        assert!(MaterializedColumn::is_empty(&column));
    }

    #[test]
    fn int128_is_an_unscaled_decimal() {
        let mut column = NumericColumn::<i128>::with_capacity(2);
        column.push(i128::MAX);
        column.append_raw(&(-1i128).to_le_bytes());

        let array = column.finish();
        let array = array.as_any().downcast_ref::<Decimal128Array>().unwrap();
        assert_eq!(array.data_type(), &DataType::Decimal128(38, 0));
        assert_eq!(array.value(0), i128::MAX);
        assert_eq!(array.value(1), -1);
    }

    #[test]
    fn boxed_numeric_columns_report_their_length() {
        let mut columns: Vec<Box<dyn MaterializedColumn>> = vec![
            Box::new(NumericColumn::<i8>::new()),
            Box::new(NumericColumn::<i16>::new()),
            Box::new(NumericColumn::<i64>::new()),
            Box::new(NumericColumn::<f32>::new()),
        ];
        for column in &mut columns {
            column.append_default();
            column.append_default();
            assert_eq!(column.len(), 2, "{}", column.family_name());
        }
        assert_eq!(
            format!("{:?}", NumericColumn::<i16>::new()),
            "NumericColumn { family: \"Int16\", len: 0 }"
        );
    }

    #[test]
    fn floats_decode_little_endian() {
        let mut column = NumericColumn::<f64>::new();
        column.append_raw(&1.5f64.to_le_bytes());
        assert_eq!(column.values(), &[1.5]);
        assert_eq!(column.family_name(), "Float64");
    }
}
