//! Engine-native values produced when packed storage records are decoded.

mod datetime;
mod decimal;

pub use datetime::{DateTimeValue, TimeKind};
pub use decimal::{DecimalV2Value, DECIMAL_PRECISION, DECIMAL_SCALE};
