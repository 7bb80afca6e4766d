use thiserror::Error;

use crate::kind::PhysicalKind;

/// Recoverable failures reported by predicate columns.
///
/// Caller bugs (mismatched output columns, out-of-range selection indices)
/// are not represented here; they panic.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PredicateColumnError {
    /// The physical kind can be stored and evaluated but the engine has no
    /// materialized column type for it.
    #[error("physical kind {kind:?} has no materialized output type")]
    UnsupportedOutputType {
        /// Kind of the predicate column that was asked to materialize.
        kind: PhysicalKind,
    },
}

/// Result alias used across the crate.
pub type Result<T, E = PredicateColumnError> = std::result::Result<T, E>;
