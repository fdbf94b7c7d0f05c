//! Utility maths functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::Float;

/// Limit the magnitude of a value to `[min_abs, max_abs]`, preserving its sign.
///
/// The lower bound is applied before the upper bound, so if `min_abs > max_abs` the result has
/// magnitude `max_abs`. A zero value is treated as positive.
pub fn clamp_abs<T>(value: T, min_abs: T, max_abs: T) -> T
where
    T: Float,
{
    let mut ret = value;

    if ret.abs() < min_abs {
        ret = min_abs.copysign(ret);
    }
    if ret.abs() > max_abs {
        ret = max_abs.copysign(ret);
    }

    ret
}

/// Sum of the absolute values of the given components.
pub fn sum_abs<T>(values: &[T]) -> T
where
    T: Float,
{
    values.iter().fold(T::zero(), |acc, v| acc + v.abs())
}

/// Replace a non-finite value with a default.
pub fn finite_or<T>(value: T, default: T) -> T
where
    T: Float,
{
    if value.is_finite() {
        value
    } else {
        default
    }
}
