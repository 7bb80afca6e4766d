use std::{fmt, mem::size_of};

use super::Dictionary;
use crate::{
    error::Result,
    kind::{PhysicalKind, PhysicalType},
    materialized::MaterializedColumn,
};

/// Write-once buffer of one physical storage kind.
///
/// Holds one batch of decoded values in their compact storage encoding while
/// predicates run over [`Self::as_slice`], then copies only the surviving
/// rows into a [`MaterializedColumn`] with [`Self::materialize`].
///
/// The column is append-only until [`Self::clear`]. It deliberately has no
/// element access, comparison, ordering, hashing, cloning or serialization;
/// those are compile errors rather than runtime traps:
///
/// ```compile_fail
/// use predicate_column::PredicateColumn;
///
/// let column = PredicateColumn::<i32>::new();
/// let _copy: PredicateColumn<i32> = column.clone();
/// ```
///
/// ```compile_fail
/// use predicate_column::PredicateColumn;
///
/// let column = PredicateColumn::<i32>::new();
/// let _first = column[0];
/// ```
///
/// ```compile_fail
/// use predicate_column::PredicateColumn;
///
/// let left = PredicateColumn::<i64>::new();
/// let right = PredicateColumn::<i64>::new();
/// assert!(left == right);
/// ```
///
/// ```compile_fail
/// use predicate_column::PredicateColumn;
///
/// let left = PredicateColumn::<i64>::new();
/// let right = PredicateColumn::<i64>::new();
/// let _ = left.partial_cmp(&right);
/// ```
///
/// ```compile_fail
/// use std::collections::HashSet;
///
/// use predicate_column::PredicateColumn;
///
/// let mut set = HashSet::new();
/// set.insert(PredicateColumn::<i8>::new());
/// ```
///
/// ```compile_fail
/// use predicate_column::{MaterializedColumn, PredicateColumn};
///
/// fn takes_column(_column: Box<dyn MaterializedColumn>) {}
/// takes_column(Box::new(PredicateColumn::<i32>::new()));
/// ```
pub struct PredicateColumn<T> {
    data: Vec<T>,
}

impl<T> PredicateColumn<T> {
    /// Create an empty column.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create an empty column with room for `capacity` rows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Number of rows appended.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no rows have been appended.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Rows the buffer can hold before growing.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Make room for at least `additional` more rows.
    ///
    /// Callers that append in bulk reserve before the call; growth only
    /// happens between appends.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Drop every row, keeping the allocation for the next batch.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Raw buffer for predicate evaluation.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// In-memory width of one stored value.
    pub fn value_width(&self) -> usize {
        size_of::<T>()
    }

    /// Bytes held by the stored values.
    ///
    /// String bytes live in the external arena and are not counted.
    pub fn byte_size(&self) -> usize {
        self.data.len() * size_of::<T>()
    }

    /// Bytes allocated for the buffer, including spare capacity.
    pub fn allocated_bytes(&self) -> usize {
        self.data.capacity() * size_of::<T>()
    }
}

impl<'a, T: PhysicalType<'a>> PredicateColumn<T> {
    /// Physical kind held by this column.
    pub fn kind(&self) -> PhysicalKind {
        T::KIND
    }

    /// Append an already decoded value.
    #[inline]
    pub fn append_value(&mut self, value: T) {
        self.data.push(value);
    }

    /// Append T's zero value: `0`, `false`, the zero packed records, or an
    /// empty string.
    pub fn append_default(&mut self) {
        self.data.push(T::default());
    }

    /// Decode one value from its storage encoding and append it.
    ///
    /// For fixed-width kinds `bytes` must be exactly one encoded value; for
    /// strings the view covers all of `bytes`.
    #[inline]
    pub fn append_raw(&mut self, bytes: &'a [u8]) {
        if let Some(width) = T::KIND.encoded_width() {
            debug_assert_eq!(
                bytes.len(),
                width,
                "{:?} value must be encoded in {width} bytes",
                T::KIND
            );
        }
        self.data.push(T::decode(bytes));
    }

    /// Append `count` fixed-width values laid out back to back in `bytes`.
    ///
    /// Does nothing for strings, which have no fixed width. Panics when
    /// `bytes` holds fewer than `count` values.
    pub fn append_fixed(&mut self, bytes: &'a [u8], count: usize) {
        let Some(width) = T::KIND.encoded_width() else {
            return;
        };
        let bytes = &bytes[..count * width];
        self.data.reserve(count);
        // Element-wise decoding measured faster than a block copy for
        // typical batch sizes.
        for chunk in bytes.chunks_exact(width) {
            self.data.push(T::decode(chunk));
        }
    }

    /// Append `count` dictionary-coded strings.
    ///
    /// Codes are read from `codes[start..start + count]` and resolved through
    /// `dict`; each appended view borrows the dictionary bytes. Does nothing
    /// for non-string kinds.
    pub fn append_dict(
        &mut self,
        codes: &[i32],
        start: usize,
        dict: &Dictionary<'a>,
        count: usize,
    ) {
        if !T::KIND.is_variable_length() {
            return;
        }
        self.data.reserve(count);
        for &code in &codes[start..start + count] {
            self.data.push(T::decode(dict.entry(code)));
        }
    }

    /// Append `count` strings stored directly in `data`.
    ///
    /// String `i` spans `lengths[i]` bytes starting at `offsets[i]`. Does
    /// nothing for non-string kinds.
    pub fn append_binary(
        &mut self,
        data: &'a [u8],
        lengths: &[u32],
        offsets: &[u32],
        count: usize,
    ) {
        if !T::KIND.is_variable_length() {
            return;
        }
        self.data.reserve(count);
        for (&length, &offset) in lengths[..count].iter().zip(&offsets[..count]) {
            let start = offset as usize;
            self.data.push(T::decode(&data[start..start + length as usize]));
        }
    }

    /// Copy the rows named by `selection` into `target`, in selection order.
    ///
    /// `selection` must be ascending, duplicate-free and in range; it is not
    /// checked. `target` gains exactly `selection.len()` rows and keeps its
    /// existing ones. It must be the column family of this kind (see
    /// [`PhysicalKind::output_column`]); any other column is a caller bug and
    /// panics. Kinds with no materialized counterpart return
    /// [`crate::PredicateColumnError::UnsupportedOutputType`].
    pub fn materialize(
        &self,
        selection: &[u16],
        target: &mut dyn MaterializedColumn,
    ) -> Result<()> {
        T::materialize(&self.data, selection, target)
    }
}

impl<T> Default for PredicateColumn<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for PredicateColumn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateColumn")
            .field("type", &std::any::type_name::<T>())
            .field("len", &self.data.len())
            .finish()
    }
}
