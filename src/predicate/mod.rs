//! Predicate columns: typed buffers plus their runtime-tagged counterpart.

mod column;
mod dictionary;
mod dynamic;

pub use column::PredicateColumn;
pub use dictionary::Dictionary;
pub use dynamic::AnyPredicateColumn;
