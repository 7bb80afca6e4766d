use std::{any::Any, fmt, sync::Arc};

use arrow::array::{ArrayBuilder, ArrayRef, Int64Array, Int64Builder};

use super::MaterializedColumn;
use crate::{codec::read_array, value::DateTimeValue};

/// Date/time column backed by 64-bit integers.
///
/// Each row holds [`DateTimeValue::to_packed_i64`].
pub struct DateTimeColumn {
    builder: Int64Builder,
}

impl DateTimeColumn {
    /// Create an empty column.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty column with room for `capacity` rows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            builder: Int64Builder::with_capacity(capacity),
        }
    }

    /// Append one value.
    #[inline]
    pub fn push(&mut self, value: DateTimeValue) {
        self.builder.append_value(value.to_packed_i64());
    }

    /// Packed values appended since the last finish.
    pub fn values(&self) -> &[i64] {
        self.builder.values_slice()
    }

    /// Decode every appended row.
    pub fn decoded(&self) -> Vec<DateTimeValue> {
        self.values()
            .iter()
            .map(|packed| DateTimeValue::from_packed_i64(*packed))
            .collect()
    }

    /// Build the Arrow array and reset the column.
    pub fn finish_array(&mut self) -> Int64Array {
        self.builder.finish()
    }
}

impl Default for DateTimeColumn {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DateTimeColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateTimeColumn")
            .field("len", &self.builder.len())
            .finish()
    }
}

impl MaterializedColumn for DateTimeColumn {
    fn family_name(&self) -> &'static str {
        "DateTime"
    }

    fn len(&self) -> usize {
        self.builder.len()
    }

    fn append_default(&mut self) {
        self.push(DateTimeValue::default());
    }

    fn append_raw(&mut self, bytes: &[u8]) {
        self.builder.append_value(i64::from_le_bytes(read_array(bytes)));
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
