/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT` in absolute
/// value.
///
/// ## Example
/// ```
/// use calcu::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Converts a `u64` literal to the signed evaluation type.
///
/// ## Errors
/// Returns `Err(error)` if the value is larger than `i64::MAX`.
///
/// ## Example
/// ```
/// use calcu::util::num::u64_to_i64_checked;
///
/// assert_eq!(u64_to_i64_checked(7, ()), Ok(7));
/// assert!(u64_to_i64_checked(u64::MAX, ()).is_err());
/// ```
pub fn u64_to_i64_checked<E>(value: u64, error: E) -> Result<i64, E> {
    i64::try_from(value).map_err(|_| error)
}
