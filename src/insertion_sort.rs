//! Index-tracking insertion sort for short ranges.

use crate::permutation::Tracked;

/// Sorts `v` using insertion sort, which is *O*(*n*^2) worst-case.
///
/// For every position `x`, the remaining elements are scanned in order and each one that has to be
/// placed strictly before `v[x]` is shifted into position `x`. The elements passed over are not
/// less than the old `v[x]`, hence strictly greater than the shifted one, so equal elements keep
/// their relative order.
pub fn insertion_sort<T, F>(mut v: Tracked<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	for x in 0..len {
		for y in x + 1..len {
			if is_less(&v.data[y], &v.data[x]) {
				shift_tail(&mut v, x, y);
			}
		}
	}
}

/// Shifts `v[y]` to the left into position `x`, moving `v[x..y]` one place to the right.
fn shift_tail<T>(v: &mut Tracked<'_, T>, x: usize, y: usize) {
	for i in (x + 1..=y).rev() {
		v.swap(i - 1, i);
	}
}
