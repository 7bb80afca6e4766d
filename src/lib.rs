#![deny(missing_docs)]
//! Write-once predicate columns for the scan path of a columnar engine.
//!
//! A scan decodes one batch of a column into a [`PredicateColumn`] in its
//! compact storage encoding, runs predicates over the raw buffer, and then
//! materializes only the surviving rows into an Arrow-backed
//! [`MaterializedColumn`]. Decoding packed dates, datetimes, decimals and
//! string copies is paid only for rows that pass the filter.
//!
//! The set of physical storage kinds is closed (see [`PhysicalType`]), and
//! each kind resolves its decoding and its output column at compile time.
//! [`AnyPredicateColumn`] covers scanners that learn the kind at runtime.
//!
//! ```
//! use predicate_column::{NumericColumn, PredicateColumn};
//!
//! let values: Vec<u8> = [10i32, 20, 30, 40].iter().flat_map(|v| v.to_le_bytes()).collect();
//!
//! let mut column = PredicateColumn::<i32>::with_capacity(4);
//! column.append_fixed(&values, 4);
//!
//! let selection: Vec<u16> = column
//!     .as_slice()
//!     .iter()
//!     .enumerate()
//!     .filter(|(_, v)| **v > 15)
//!     .map(|(row, _)| row as u16)
//!     .collect();
//!
//! let mut output = NumericColumn::<i32>::new();
//! column.materialize(&selection, &mut output).unwrap();
//! assert_eq!(output.values(), &[20, 30, 40]);
//! ```

pub mod codec;
mod error;
pub mod kind;
pub mod materialized;
mod observability;
mod predicate;
pub mod value;

pub use crate::{
    error::{PredicateColumnError, Result},
    kind::{PackedDate, PackedDateTime, PackedDecimal, PhysicalKind, PhysicalType, StrView},
    materialized::{
        BoolColumn, DateTimeColumn, DecimalColumn, MaterializedColumn, NumericColumn,
        StringColumn,
    },
    predicate::{AnyPredicateColumn, Dictionary, PredicateColumn},
    value::{DateTimeValue, DecimalV2Value, TimeKind},
};
