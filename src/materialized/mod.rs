//! Materialized output columns.
//!
//! These are the general-purpose typed columns that predicate columns write
//! surviving rows into. Each wraps an Arrow builder and owns everything
//! appended to it; [`MaterializedColumn::finish`] hands the built array to
//! the rest of the engine.
//!
//! Only the part of the engine's column interface that predicate columns
//! interoperate with lives here: appending defaults, appending raw
//! little-endian values, and dynamic downcasting.

mod boolean;
mod datetime;
mod decimal;
mod numeric;
mod string;

use std::any::{type_name, Any};

use arrow::array::ArrayRef;
pub use boolean::BoolColumn;
pub use datetime::DateTimeColumn;
pub use decimal::DecimalColumn;
pub use numeric::{NumericColumn, NumericNative};
pub use string::StringColumn;

use crate::kind::PhysicalKind;

/// Type-erased handle to a materialized column.
pub trait MaterializedColumn: Any + Send {
    /// Short name of the column family, used in diagnostics.
    fn family_name(&self) -> &'static str;

    /// Number of rows appended so far.
    fn len(&self) -> usize;

    /// Whether no rows have been appended.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append the family's zero value.
    fn append_default(&mut self);

    /// Append one value from its little-endian native encoding.
    ///
    /// Strings take the bytes verbatim. Slices shorter than the native width
    /// panic.
    fn append_raw(&mut self, bytes: &[u8]);

    /// Build the Arrow array holding every appended row and reset the column.
    fn finish(&mut self) -> ArrayRef;

    /// Upcast for dynamic inspection.
    fn as_any(&self) -> &dyn Any;

    /// Upcast for dynamic downcasting to the concrete column.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Resolve the concrete column a predicate column of `kind` writes into.
///
/// Runs once per materialize call, before the row loop. A mismatch means the
/// caller paired the predicate column with the wrong output column and
/// panics.
pub(crate) fn downcast_target<'t, C>(
    target: &'t mut dyn MaterializedColumn,
    kind: PhysicalKind,
) -> &'t mut C
where
    C: MaterializedColumn,
{
    let family = target.family_name();
    match target.as_any_mut().downcast_mut::<C>() {
        Some(column) => column,
        None => panic!(
            "predicate column of kind {kind:?} cannot materialize into a {family} column, \
             expected {}",
            type_name::<C>()
        ),
    }
}
