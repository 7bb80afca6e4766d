use std::{any::Any, fmt, sync::Arc};

use arrow::{
    array::{ArrayBuilder, ArrayRef, Decimal128Array, Decimal128Builder},
    datatypes::DataType,
};

use super::MaterializedColumn;
use crate::{
    codec::read_array,
    value::{DecimalV2Value, DECIMAL_PRECISION, DECIMAL_SCALE},
};

/// 128-bit decimal column with the engine's fixed precision and scale.
pub struct DecimalColumn {
    builder: Decimal128Builder,
}

impl DecimalColumn {
    /// Create an empty column.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty column with room for `capacity` rows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            builder: Decimal128Builder::with_capacity(capacity)
                .with_data_type(DataType::Decimal128(DECIMAL_PRECISION, DECIMAL_SCALE)),
        }
    }

    /// Append one value.
    #[inline]
    pub fn push(&mut self, value: DecimalV2Value) {
        self.builder.append_value(value.raw());
    }

    /// Raw values appended since the last finish, in 10^-9 units.
    pub fn values(&self) -> &[i128] {
        self.builder.values_slice()
    }

    /// Decode every appended row.
    pub fn decoded(&self) -> Vec<DecimalV2Value> {
        self.values()
            .iter()
            .map(|raw| DecimalV2Value::from_raw(*raw))
            .collect()
    }

    /// Build the Arrow array and reset the column.
    pub fn finish_array(&mut self) -> Decimal128Array {
        self.builder.finish()
    }
}

impl Default for DecimalColumn {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DecimalColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecimalColumn")
            .field("len", &self.builder.len())
            .finish()
    }
}

impl MaterializedColumn for DecimalColumn {
    fn family_name(&self) -> &'static str {
        "Decimal128"
    }

    fn len(&self) -> usize {
        self.builder.len()
    }

    fn append_default(&mut self) {
        self.push(DecimalV2Value::default());
    }

    fn append_raw(&mut self, bytes: &[u8]) {
        self.builder.append_value(i128::from_le_bytes(read_array(bytes)));
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
    use super::*;

    #[test]
    fn array_carries_engine_scale() {
        let mut column = DecimalColumn::new();
        column.push(DecimalV2Value::from_parts(1, 5));
        column.append_default();

        let array = column.finish_array();
        assert_eq!(array.precision(), DECIMAL_PRECISION);
        assert_eq!(array.scale(), DECIMAL_SCALE);
        assert_eq!(array.value(0), 1_000_000_005);
        assert_eq!(array.value_as_string(0), "1.000000005");
        assert_eq!(array.value(1), 0);
    }
}
