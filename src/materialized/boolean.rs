use std::{any::Any, fmt, sync::Arc};

use arrow::array::{ArrayBuilder, ArrayRef, BooleanArray, BooleanBuilder};

use super::MaterializedColumn;

/// Boolean column fed from one-byte storage values.
pub struct BoolColumn {
    builder: BooleanBuilder,
}

impl BoolColumn {
    /// Create an empty column.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty column with room for `capacity` rows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            builder: BooleanBuilder::with_capacity(capacity),
        }
    }

    /// Append one value.
    #[inline]
    pub fn push(&mut self, value: bool) {
        self.builder.append_value(value);
    }

    /// Build the Arrow array and reset the column.
    pub fn finish_array(&mut self) -> BooleanArray {
        self.builder.finish()
    }
}

impl Default for BoolColumn {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BoolColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoolColumn")
            .field("len", &self.builder.len())
            .finish()
    }
}

impl MaterializedColumn for BoolColumn {
    fn family_name(&self) -> &'static str {
        "Boolean"
    }

    fn len(&self) -> usize {
        self.builder.len()
    }

    fn append_default(&mut self) {
        self.push(false);
    }

    fn append_raw(&mut self, bytes: &[u8]) {
        self.push(bytes[0] != 0);
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
    use arrow::array::Array;

    use super::*;

    #[test]
    fn any_nonzero_byte_is_true() {
        let mut column = BoolColumn::new();
        column.append_raw(&[0]);
        column.append_raw(&[1]);
        column.append_raw(&[0x80]);
        column.append_default();

        let array = column.finish_array();
        let values: Vec<bool> = (0..array.len()).map(|i| array.value(i)).collect();
        assert_eq!(values, vec![false, true, true, false]);
    }
}
