use std::fmt;

use super::{sealed, PhysicalKind, PhysicalType};
use crate::{
    error::Result,
    materialized::{downcast_target, MaterializedColumn, StringColumn},
};

/// Borrowed view of one string inside an externally owned byte arena.
///
/// The view never owns or copies its bytes; the arena must outlive every
/// column holding views into it. Bytes are copied only when the row is
/// materialized into a [`StringColumn`].
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct StrView<'a>(&'a [u8]);

impl<'a> StrView<'a> {
    /// View `bytes`.
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }

    /// The viewed bytes, borrowed from the arena.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the view is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for StrView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StrView")
            .field(&String::from_utf8_lossy(self.0))
            .finish()
    }
}

impl sealed::Sealed for StrView<'_> {}

impl<'a> PhysicalType<'a> for StrView<'a> {
    const KIND: PhysicalKind = PhysicalKind::String;

    #[inline]
    fn decode(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }

    fn materialize(
        values: &[Self],
        selection: &[u16],
        target: &mut dyn MaterializedColumn,
    ) -> Result<()> {
        let target = downcast_target::<StringColumn>(target, Self::KIND);
        for &row in selection {
            target.push(values[usize::from(row)].0);
        }
        Ok(())
    }
}
