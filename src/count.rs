//! Class-membership counting.

use crate::error::CountError;
use ndarray::ArrayView1;

#[cfg(feature = "alloc")]
use ndarray::Array1;

/// Returns how often `class` occurs in `v`.
pub fn count_of<T>(v: ArrayView1<'_, T>, class: &T) -> usize
where
	T: PartialEq,
{
	v.iter().filter(|&x| x == class).count()
}

/// Returns how often each of `classes` occurs in `v`, in the order of `classes`.
#[cfg(feature = "alloc")]
pub fn counts_of<T>(v: ArrayView1<'_, T>, classes: ArrayView1<'_, T>) -> Array1<usize>
where
	T: PartialEq,
{
	classes.iter().map(|class| count_of(v.view(), class)).collect()
}

/// Returns the class occurring most often in `v`, the first one of `classes` on ties.
pub fn max_count_of<'a, T>(
	v: ArrayView1<'_, T>,
	classes: ArrayView1<'a, T>,
) -> Result<&'a T, CountError>
where
	T: PartialEq,
{
	if classes.is_empty() {
		return Err(CountError::NoClasses);
	}
	if v.is_empty() {
		return Err(CountError::NoData);
	}

	let mut best: Option<(usize, &'a T)> = None;
	for class in classes {
		let count = count_of(v.view(), class);
		if best.is_none_or(|(max, _)| count > max) {
			best = Some((count, class));
		}
	}
	best.map(|(_, class)| class).ok_or(CountError::NoClasses)
}
