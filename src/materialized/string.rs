use std::{any::Any, fmt, sync::Arc};

use arrow::array::{ArrayBuilder, ArrayRef, BinaryArray, BinaryBuilder};

use super::MaterializedColumn;

/// Variable-length string column.
///
/// Bytes are copied in on append, so the column never borrows from the
/// arena the predicate column pointed into. Values are stored as Arrow
/// binary: contiguous bytes plus an offset per row.
pub struct StringColumn {
    builder: BinaryBuilder,
}

impl StringColumn {
    /// Create an empty column.
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Create an empty column with room for `rows` rows totalling `bytes`
    /// bytes.
    pub fn with_capacity(rows: usize, bytes: usize) -> Self {
        Self {
            builder: BinaryBuilder::with_capacity(rows, bytes),
        }
    }

    /// Append a copy of `value`.
    #[inline]
    pub fn push(&mut self, value: &[u8]) {
        self.builder.append_value(value);
    }

    /// Concatenated bytes of every appended row.
    pub fn value_bytes(&self) -> &[u8] {
        self.builder.values_slice()
    }

    /// Build the Arrow array and reset the column.
    pub fn finish_array(&mut self) -> BinaryArray {
        self.builder.finish()
    }
}

impl Default for StringColumn {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StringColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringColumn")
            .field("len", &self.builder.len())
            .field("bytes", &self.value_bytes().len())
            .finish()
    }
}

impl MaterializedColumn for StringColumn {
    fn family_name(&self) -> &'static str {
        "String"
    }

    fn len(&self) -> usize {
        self.builder.len()
    }

    fn append_default(&mut self) {
        self.push(&[]);
    }

    fn append_raw(&mut self, bytes: &[u8]) {
        self.push(bytes);
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
    fn copies_bytes_out_of_the_source() {
        let mut column = StringColumn::new();
        {
            let source = b"hello".to_vec();
            column.append_raw(&source[..2]);
        }
        column.append_default();
        assert_eq!(column.value_bytes(), b"he");

        let array = column.finish_array();
        assert_eq!(array.len(), 2);
        assert_eq!(array.value(0), b"he");
        assert_eq!(array.value(1), b"");
    }
}
