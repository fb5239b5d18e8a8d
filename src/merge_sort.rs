//! In-place, index-tracking merge sort.
//!
//! No auxiliary buffer is allocated for the data. Runs are merged by rotating blocks with pairwise
//! swaps, and every swap is mirrored on the index view.

use crate::{SORT_THRESHOLD, insertion_sort::insertion_sort, permutation::Tracked};

/// Sorts `v` using a stable in-place merge sort.
///
/// Ranges of up to [`SORT_THRESHOLD`] elements are sorted by insertion sort.
pub fn merge_sort<T, F>(v: Tracked<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	recurse(v, is_less);
}

fn recurse<T, F>(mut v: Tracked<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	if len <= SORT_THRESHOLD {
		insertion_sort(v, is_less);
		return;
	}

	// The left run gets the extra element of odd lengths.
	let mid = len.div_ceil(2);
	let (left, right) = v.reborrow().split_at(mid);
	maybe_grow(|| recurse(left, is_less));
	maybe_grow(|| recurse(right, is_less));

	merge(v, mid, is_less);
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` in place.
///
/// The cursor `x` walks the unmerged rest of the left run, which always sits contiguously and
/// sorted in `v[x..y]`. Once `v[y..]` starts with a run of elements that have to be placed strictly
/// before `v[x]`, that run is rotated in front of `v[x..y]`. Left elements are only ever passed by
/// right elements strictly less than them, so the merge is stable.
pub fn merge<T, F>(mut v: Tracked<'_, T>, mid: usize, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	if mid == 0 || mid >= len {
		return;
	}

	// Both runs are already in order relative to each other.
	if !is_less(&v.data[mid], &v.data[mid - 1]) {
		return;
	}

	let mut x = 0;
	let mut y = mid;
	while x < y && y < len {
		if !is_less(&v.data[y], &v.data[x]) {
			x += 1;
			continue;
		}

		// Extend the run of right elements that must move in front of `v[x]`.
		let mut end = y + 1;
		while end < len && is_less(&v.data[end], &v.data[x]) {
			end += 1;
		}

		v.rotate(x, y, end);

		// The old `v[x]` now sits right behind the moved run and is not after `v[end]`.
		x += end - y + 1;
		y = end;
	}
}

/// Runs `f`, growing the stack beforehand if it is about to run out.
#[inline]
pub fn maybe_grow<R, F>(f: F) -> R
where
	F: FnOnce() -> R,
{
	#[cfg(feature = "stacker")]
	{
		// Remaining stack below which a new segment is allocated, and the size of that segment.
		const RED_ZONE: usize = 64 * 1024;
		const STACK_SIZE: usize = 1024 * 1024;

		stacker::maybe_grow(RED_ZONE, STACK_SIZE, f)
	}
	#[cfg(not(feature = "stacker"))]
	{
		f()
	}
}
