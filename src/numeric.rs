//! Scalar helpers and sequence construction.

#[cfg(feature = "alloc")]
use core::ops::RangeInclusive;
#[cfg(feature = "alloc")]
use ndarray::Array1;

/// Returns the inclusive sequence `start, start + 1, .., end`, empty if `start > end`.
///
/// ```
/// use ndarray_argsort::{ndarray::arr1, sequence};
///
/// assert_eq!(sequence(-2, 2), arr1(&[-2, -1, 0, 1, 2]));
/// assert_eq!(sequence(3u8, 1).len(), 0);
/// ```
#[cfg(feature = "alloc")]
#[must_use]
pub fn sequence<T>(start: T, end: T) -> Array1<T>
where
	RangeInclusive<T>: Iterator<Item = T>,
{
	(start..=end).collect()
}

/// Rounds `value` to `precision` fractional digits.
///
/// A positive fractional remainder of at least one half rounds up, a negative one rounds down
/// only below minus one half, hence `-0.5` rounds to `0.0`.
///
/// ```
/// use ndarray_argsort::round_to;
///
/// assert_eq!(round_to(0.553, 2), 0.55);
/// assert_eq!(round_to(-0.553, 1), -0.6);
/// assert_eq!(round_to(0.49997, 0), 0.0);
/// ```
#[cfg(feature = "std")]
#[must_use]
pub fn round_to(value: f64, precision: i32) -> f64 {
	let scale = 10f64.powi(precision);
	let scaled = value * scale;
	let half = if scaled.fract() < 0.0 { -0.5 } else { 0.5 };
	let rounded = if scaled.fract() >= half {
		scaled.ceil()
	} else {
		scaled.floor()
	};
	rounded / scale
}
