use std::fmt;

use crate::observability::log_warn;

/// Total digits of a [`DecimalV2Value`].
pub const DECIMAL_PRECISION: u8 = 27;
/// Fractional digits of a [`DecimalV2Value`].
pub const DECIMAL_SCALE: i8 = 9;

const ONE_BILLION: i128 = 1_000_000_000;
const MAX_INT_VALUE: u64 = 999_999_999_999_999_999;
const MAX_FRAC_VALUE: u32 = 999_999_999;

/// Fixed-point decimal with 18 integer and 9 fractional digits.
///
/// Stored as an `i128` count of 10^-9 units, which is also the raw value
/// held by a `Decimal128(27, 9)` Arrow array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DecimalV2Value {
    value: i128,
}

impl DecimalV2Value {
    /// Wrap a raw count of 10^-9 units.
    pub const fn from_raw(value: i128) -> Self {
        Self { value }
    }

    /// Combine an integer part and a fraction in 10^-9 units.
    ///
    /// The value is negative when either part is negative; magnitudes are
    /// combined. Magnitudes beyond 18 integer digits or 9 fractional digits
    /// are clamped to the largest representable value.
    pub fn from_parts(integer: i64, fraction: i32) -> Self {
        let negative = integer < 0 || fraction < 0;
        let mut int_abs = integer.unsigned_abs();
        let mut frac_abs = fraction.unsigned_abs();
        if int_abs > MAX_INT_VALUE || frac_abs > MAX_FRAC_VALUE {
            log_warn!(
                component = "decimal",
                event = "decimal_clamped",
                integer,
                fraction,
            );
            int_abs = int_abs.min(MAX_INT_VALUE);
            frac_abs = frac_abs.min(MAX_FRAC_VALUE);
        }
        let value = i128::from(int_abs) * ONE_BILLION + i128::from(frac_abs);
        Self {
            value: if negative { -value } else { value },
        }
    }

    /// Raw count of 10^-9 units.
    pub fn raw(&self) -> i128 {
        self.value
    }

    /// Signed integer part, truncated toward zero.
    pub fn int_value(&self) -> i64 {
        (self.value / ONE_BILLION) as i64
    }

    /// Signed fractional part in 10^-9 units.
    pub fn frac_value(&self) -> i32 {
        (self.value % ONE_BILLION) as i32
    }
}

impl fmt::Display for DecimalV2Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.value < 0 { "-" } else { "" };
        let magnitude = self.value.unsigned_abs();
        let one_billion = ONE_BILLION as u128;
        write!(
            f,
            "{sign}{}.{:09}",
            magnitude / one_billion,
            magnitude % one_billion
        )
    }
}
