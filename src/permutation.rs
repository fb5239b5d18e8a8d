//! Lockstep movement of a data view and the index view tracking it.

use core::ops::Range;
use ndarray::{ArrayViewMut1, Axis, s};

#[cfg(feature = "alloc")]
use ndarray::{Array1, ArrayView1};

/// Swaps `v[a]` and `v[b]` unless `a == b` or either position is out of bounds.
#[inline]
pub fn swap<T>(v: &mut ArrayViewMut1<'_, T>, a: usize, b: usize) {
	let len = v.len();
	if a == b || a >= len || b >= len {
		return;
	}
	v.swap(a, b);
}

/// A data view together with the index view that records where each element came from.
///
/// Every movement of `data` is mirrored on `index` at the same positions, so after sorting
/// `index[i]` still names the original position of `data[i]`.
pub struct Tracked<'a, T> {
	pub data: ArrayViewMut1<'a, T>,
	pub index: ArrayViewMut1<'a, usize>,
}

impl<'a, T> Tracked<'a, T> {
	/// Pairs `data` with `index`, restricted to `range`.
	///
	/// # Panics
	///
	/// Panics if the lengths differ or if `range` is not within `0..=data.len()`.
	pub fn new(
		data: ArrayViewMut1<'a, T>,
		index: ArrayViewMut1<'a, usize>,
		range: Range<usize>,
	) -> Self {
		let len = data.len();
		assert_eq!(
			len,
			index.len(),
			"index length {} does not match array length {}",
			index.len(),
			len
		);
		assert!(
			range.start <= range.end && range.end <= len,
			"range {}..{} out of bounds for array of length {}",
			range.start,
			range.end,
			len
		);
		Self {
			data: data.slice_move(s![range.start..range.end]),
			index: index.slice_move(s![range.start..range.end]),
		}
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Mutably reborrows both views.
	#[inline]
	pub fn reborrow(&mut self) -> Tracked<'_, T> {
		Tracked {
			data: self.data.view_mut(),
			index: self.index.view_mut(),
		}
	}

	/// Divides into `[0, mid)` and `[mid, len)`.
	#[inline]
	pub fn split_at(self, mid: usize) -> (Self, Self) {
		let (data_left, data_right) = self.data.split_at(Axis(0), mid);
		let (index_left, index_right) = self.index.split_at(Axis(0), mid);
		(
			Tracked {
				data: data_left,
				index: index_left,
			},
			Tracked {
				data: data_right,
				index: index_right,
			},
		)
	}

	/// Swaps positions `a` and `b` of both views with the tolerance of [`swap`].
	#[inline]
	pub fn swap(&mut self, a: usize, b: usize) {
		swap(&mut self.data, a, b);
		swap(&mut self.index, a, b);
	}

	/// Reverses `[start, end)` of both views.
	pub fn reverse(&mut self, start: usize, end: usize) {
		let (mut i, mut j) = (start, end);
		while i + 1 < j {
			j -= 1;
			self.swap(i, j);
			i += 1;
		}
	}

	/// Rotates `[start, end)` so that the block `[mid, end)` ends up in front of `[start, mid)`.
	///
	/// Implemented with three reversals, hence by pairwise swaps only.
	pub fn rotate(&mut self, start: usize, mid: usize, end: usize) {
		debug_assert!(start <= mid && mid <= end && end <= self.len());
		self.reverse(start, mid);
		self.reverse(mid, end);
		self.reverse(start, end);
	}
}

/// Returns the identity permutation `[0, 1, .., len - 1]`.
#[cfg(feature = "alloc")]
#[inline]
pub fn identity(len: usize) -> Array1<usize> {
	(0..len).collect()
}

/// Returns a new array with `v[permutation[i]]` at position `i`.
///
/// # Panics
///
/// Panics if an entry of `permutation` is out of bounds for `v`.
#[cfg(feature = "alloc")]
pub fn sort_by_index<T>(v: ArrayView1<'_, T>, permutation: ArrayView1<'_, usize>) -> Array1<T>
where
	T: Clone,
{
	permutation
		.iter()
		.map(|&i| match v.get(i) {
			Some(value) => value.clone(),
			None => panic!(
				"permutation entry {} out of bounds for array of length {}",
				i,
				v.len()
			),
		})
		.collect()
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{Tracked, identity, sort_by_index, swap};
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;

	#[test]
	fn swap_is_tolerant() {
		let mut empty = Array1::<i32>::zeros(0);
		swap(&mut empty.view_mut(), 0, 1);
		assert_eq!(empty.len(), 0);

		let mut v = arr1(&[1, 2, 3]);
		swap(&mut v.view_mut(), 1, 1);
		assert_eq!(v, arr1(&[1, 2, 3]));
		swap(&mut v.view_mut(), 0, 3);
		assert_eq!(v, arr1(&[1, 2, 3]));
		swap(&mut v.view_mut(), 7, 2);
		assert_eq!(v, arr1(&[1, 2, 3]));
		swap(&mut v.view_mut(), 0, 2);
		assert_eq!(v, arr1(&[3, 2, 1]));
	}

	#[quickcheck]
	fn rotated(xs: Vec<u32>, mid: usize) {
		let mid = if xs.is_empty() { 0 } else { mid % (xs.len() + 1) };
		let mut expected = xs.clone();
		expected.rotate_left(mid);
		let mut array = Array1::from_vec(xs);
		let mut index = identity(array.len());
		let len = array.len();
		let mut v = Tracked::new(array.view_mut(), index.view_mut(), 0..len);
		v.rotate(0, mid, len);
		assert_eq!(array, Array1::from_vec(expected));
		let expected_index = (0..len).map(|i| (i + mid) % len.max(1)).collect::<Array1<_>>();
		assert_eq!(index, expected_index);
	}

	#[test]
	fn split_keeps_views_aligned() {
		let mut data = arr1(&[5, 4, 3, 2, 1]);
		let mut index = identity(5);
		let v = Tracked::new(data.view_mut(), index.view_mut(), 1..5);
		assert_eq!(v.len(), 4);
		let (mut left, mut right) = v.split_at(2);
		left.swap(0, 1);
		right.swap(0, 1);
		assert_eq!(data, arr1(&[5, 3, 4, 1, 2]));
		assert_eq!(index, arr1(&[0, 2, 1, 4, 3]));
	}

	#[test]
	#[should_panic(expected = "index length 2 does not match array length 3")]
	fn mismatched_index() {
		let mut data = arr1(&[1, 2, 3]);
		let mut index = identity(2);
		let _ = Tracked::new(data.view_mut(), index.view_mut(), 0..3);
	}

	#[test]
	#[should_panic(expected = "range 1..4 out of bounds for array of length 3")]
	fn range_out_of_bounds() {
		let mut data = arr1(&[1, 2, 3]);
		let mut index = identity(3);
		let _ = Tracked::new(data.view_mut(), index.view_mut(), 1..4);
	}

	#[test]
	fn applies_permutation() {
		let data = arr1(&[0.5, 0.6, 0.7, 0.8, 0.9, 0.0, 0.1, 0.2, 0.3, 0.4]);
		let permutation = arr1(&[5, 6, 7, 8, 9, 0, 1, 2, 3, 4]);
		assert_eq!(
			sort_by_index(data.view(), permutation.view()),
			arr1(&[0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9])
		);
		let data = arr1(&[1.0, 1.0, 2.0, 2.0, 3.0, 1.0, 2.0]);
		let permutation = arr1(&[0, 1, 5, 6, 2, 3, 4]);
		assert_eq!(
			sort_by_index(data.view(), permutation.view()),
			arr1(&[1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0])
		);
		assert_eq!(
			sort_by_index(data.view(), arr1(&[4, 0]).view()),
			arr1(&[3.0, 1.0])
		);
	}

	#[test]
	#[should_panic(expected = "permutation entry 3 out of bounds for array of length 3")]
	fn permutation_out_of_bounds() {
		let data = arr1(&[1, 2, 3]);
		let _ = sort_by_index(data.view(), arr1(&[0, 3]).view());
	}
}
