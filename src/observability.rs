//! Structured logging for predicate column events.
//!
//! Events go through `tracing` under the `predicate_column` target and carry
//! a `component` plus a snake_case `event` field. The crate never installs a
//! subscriber; embedding engines decide where events end up.
//!
//! Nothing here fires per element. Events are emitted at most once per call
//! and only on paths that callers should notice (unsupported output kinds,
//! clamped decimal values) or on column setup.

/// Target for all predicate column log events.
pub(crate) const PREDICATE_COLUMN_TARGET: &str = "predicate_column";

/// Macro for debug-level log events.
///
/// # Example
/// ```ignore
/// log_debug!(
///     component = "any_column",
///     event = "any_column_created",
///     kind = ?kind,
/// );
/// ```
macro_rules! log_debug {
    ($($field:tt)*) => {
        ::tracing::debug!(target: $crate::observability::PREDICATE_COLUMN_TARGET, $($field)*)
    };
}

/// Macro for warn-level log events.
macro_rules! log_warn {
    ($($field:tt)*) => {
        ::tracing::warn!(target: $crate::observability::PREDICATE_COLUMN_TARGET, $($field)*)
    };
}

pub(crate) use log_debug;
pub(crate) use log_warn;
